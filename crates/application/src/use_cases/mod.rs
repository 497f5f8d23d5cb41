pub mod resolve;

// Re-export use cases
pub use resolve::{HostResolution, LoadHostnamesUseCase, ResolveHostnameUseCase};
