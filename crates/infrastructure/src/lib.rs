//! doh-fanout Infrastructure Layer
//!
//! Adapters for the application ports: the JSON DoH client, the hostname
//! list on disk and the result writers.
pub mod dns;
pub mod system;
