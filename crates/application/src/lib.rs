//! doh-fanout Application Layer
//!
//! Ports describing the collaborators around the resolution engine, and the
//! use cases built on them.
pub mod ports;
pub mod use_cases;
