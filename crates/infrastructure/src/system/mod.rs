pub mod hostname_file;
pub mod writer_sink;

pub use hostname_file::HostnameFile;
pub use writer_sink::WriterSink;
