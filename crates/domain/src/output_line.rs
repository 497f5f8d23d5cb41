use crate::AddressRecord;
use std::fmt;

/// A fully formatted result line: `<hostname> <ip-address>`.
///
/// Holds no trailing newline; the sink appends exactly one per line when
/// writing, so a line is always emitted as a single unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine(String);

impl OutputLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Line bytes followed by a single `\n`, ready for one write call.
    pub fn to_bytes_with_newline(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.0.len() + 1);
        buf.extend_from_slice(self.0.as_bytes());
        buf.push(b'\n');
        buf
    }
}

impl From<&AddressRecord> for OutputLine {
    fn from(record: &AddressRecord) -> Self {
        Self(format!("{} {}", record.hostname, record.address))
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
