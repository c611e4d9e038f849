use crate::core::telemetry::host::HostProbe;
use crate::core::telemetry::types::HostIdentity;
use crate::error::Result;

pub fn collect(host: &mut dyn HostProbe) -> Result<HostIdentity> {
    host.identity()
}

pub fn render(identity: &HostIdentity) -> String {
    format!(
        "System: {}\nNode Name: {}\nRelease: {}\nVersion: {}\nMachine: {}\nProcessor: {}\n",
        identity.system,
        identity.node_name,
        identity.release,
        identity.version,
        identity.machine,
        identity.processor,
    )
}
