// Kernel identity via uname(2)

/// The `utsname` fields, decoded lossily
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Uname {
    pub sysname: String,
    pub nodename: String,
    pub release: String,
    /// Kernel build string, as `uname -v` prints it
    pub version: String,
    pub machine: String,
}

#[cfg(unix)]
pub fn uname() -> Option<Uname> {
    use std::ffi::CStr;
    use std::os::raw::c_char;

    fn field(raw: &[c_char]) -> String {
        // utsname fields are NUL-terminated within their fixed buffers
        unsafe { CStr::from_ptr(raw.as_ptr()) }
            .to_string_lossy()
            .trim()
            .to_string()
    }

    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        log::debug!("uname failed: {}", std::io::Error::last_os_error());
        return None;
    }

    Some(Uname {
        sysname: field(&uts.sysname),
        nodename: field(&uts.nodename),
        release: field(&uts.release),
        version: field(&uts.version),
        machine: field(&uts.machine),
    })
}

#[cfg(not(unix))]
pub fn uname() -> Option<Uname> {
    None
}
