pub mod query_builder;
pub mod response_parser;

pub use query_builder::QueryBuilder;
pub use response_parser::{DohResponse, ResponseParser};
