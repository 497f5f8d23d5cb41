pub mod load_hostnames;
pub mod resolve_hostname;

pub use load_hostnames::LoadHostnamesUseCase;
pub use resolve_hostname::{HostResolution, ResolveHostnameUseCase};
