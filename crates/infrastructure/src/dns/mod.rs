pub mod doh_client;
pub mod forwarding;
pub mod transport;

pub use doh_client::JsonDohClient;
