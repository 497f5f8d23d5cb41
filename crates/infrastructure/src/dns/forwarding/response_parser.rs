use doh_fanout_domain::{DomainError, RecordType};
use serde::Deserialize;
use tracing::debug;

/// DNS response codes the JSON API reports in `Status`.
pub const RCODE_NOERROR: u16 = 0;
pub const RCODE_SERVFAIL: u16 = 2;
pub const RCODE_NXDOMAIN: u16 = 3;

/// JSON DoH envelope (`application/dns-json`).
///
/// Only `Status` is required; providers omit `Answer` for empty answers and
/// some omit the flag fields.
#[derive(Debug, Clone, Deserialize)]
pub struct DohResponse {
    #[serde(rename = "Status")]
    pub status: u16,

    #[serde(rename = "TC", default)]
    pub truncated: bool,

    #[serde(rename = "RD", default)]
    pub recursion_desired: bool,

    #[serde(rename = "RA", default)]
    pub recursion_available: bool,

    #[serde(rename = "AD", default)]
    pub authenticated_data: bool,

    #[serde(rename = "CD", default)]
    pub checking_disabled: bool,

    #[serde(rename = "Question", default)]
    pub question: Vec<DohQuestion>,

    #[serde(rename = "Answer", default)]
    pub answer: Vec<DohAnswer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DohQuestion {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DohAnswer {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: u16,
    #[serde(rename = "TTL", default)]
    pub ttl: u32,
    pub data: String,
}

impl DohResponse {
    /// `data` of every answer matching `record_type`, in upstream order.
    /// CNAME hops and any other types are skipped.
    pub fn answers_for(&self, record_type: RecordType) -> Vec<String> {
        let code = record_type.to_u16();
        self.answer
            .iter()
            .filter(|a| a.record_type == code)
            .map(|a| a.data.clone())
            .collect()
    }
}

pub struct ResponseParser;

impl ResponseParser {
    /// Decodes the JSON envelope and extracts the addresses for
    /// `record_type`.
    ///
    /// NOERROR and NXDOMAIN are answers (the latter simply empty); any other
    /// status is reported as `UpstreamStatus`.
    pub fn parse(body: &[u8], record_type: RecordType) -> Result<Vec<String>, DomainError> {
        let response: DohResponse = serde_json::from_slice(body).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to decode DoH JSON: {}", e))
        })?;

        debug!(
            status = Self::rcode_to_status(response.status),
            truncated = response.truncated,
            rd = response.recursion_desired,
            ra = response.recursion_available,
            ad = response.authenticated_data,
            cd = response.checking_disabled,
            question = ?response.question.first().map(|q| q.name.as_str()),
            answers = response.answer.len(),
            "DoH response parsed"
        );

        match response.status {
            RCODE_NOERROR => Ok(response.answers_for(record_type)),
            RCODE_NXDOMAIN => Ok(Vec::new()),
            other => Err(DomainError::UpstreamStatus(other)),
        }
    }

    pub fn rcode_to_status(rcode: u16) -> &'static str {
        match rcode {
            0 => "NOERROR",
            1 => "FORMERR",
            RCODE_SERVFAIL => "SERVFAIL",
            RCODE_NXDOMAIN => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            _ => "UNKNOWN",
        }
    }
}
