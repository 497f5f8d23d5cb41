pub mod doh_client;
pub mod hostname_source;
pub mod result_sink;

pub use doh_client::DohClient;
pub use hostname_source::HostnameSource;
pub use result_sink::ResultSink;
