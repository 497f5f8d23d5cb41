
pub use memory_sink::*;
pub use scripted_doh_client::*;
