// Platform-specific filesystem operations

use std::path::Path;

use crate::core::telemetry::DiskUsage;
use crate::error::Result;

/// Space accounting for the filesystem mounted at `mountpoint`.
///
/// EACCES / EPERM come back as a permission failure so the caller can mark
/// just that mount as denied.
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
pub fn mount_usage(mountpoint: &Path) -> Result<DiskUsage> {
    use crate::error::SnapError;
    use std::ffi::CString;
    use std::io;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(mountpoint.as_os_str().as_bytes()).map_err(|_| {
        SnapError::host(format!(
            "mount point contains a NUL byte: {}",
            mountpoint.display()
        ))
    })?;

    let mut stat: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stat) };
    if rc != 0 {
        let err = io::Error::last_os_error();
        if err.kind() == io::ErrorKind::PermissionDenied {
            return Err(SnapError::permission_denied(format!(
                "{}: {}",
                mountpoint.display(),
                err
            )));
        }
        return Err(SnapError::Io(err));
    }

    // f_* widths differ between platforms
    let fragment = stat.f_frsize as u64;
    let blocks = stat.f_blocks as u64;
    let total = blocks.saturating_mul(fragment);
    let free = (stat.f_bavail as u64).saturating_mul(fragment);
    let used = blocks
        .saturating_sub(stat.f_bfree as u64)
        .saturating_mul(fragment);

    Ok(DiskUsage::new(total, used, free))
}

#[cfg(not(unix))]
pub fn mount_usage(mountpoint: &Path) -> Result<DiskUsage> {
    Err(crate::error::SnapError::host(format!(
        "no direct usage query for {} on this platform",
        mountpoint.display()
    )))
}
