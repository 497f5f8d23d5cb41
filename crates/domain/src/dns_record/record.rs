use super::{AddressFamily, RecordType};
use crate::{DomainError, Hostname};
use std::net::IpAddr;

/// One resolved address for a hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    /// Hostname that was queried
    pub hostname: Hostname,
    /// Resolved address
    pub address: IpAddr,
    /// Family of `address`
    pub family: AddressFamily,
}

impl AddressRecord {
    pub fn new(hostname: Hostname, address: IpAddr) -> Self {
        Self {
            hostname,
            family: AddressFamily::of(&address),
            address,
        }
    }

    /// Build a record from the `data` field of a DoH answer.
    ///
    /// The literal must parse as an IP address of the family `record_type`
    /// asks for; an IPv6 literal in an A answer is rejected like garbage.
    pub fn parse(
        hostname: &Hostname,
        record_type: RecordType,
        data: &str,
    ) -> Result<Self, DomainError> {
        let address: IpAddr = data.trim().parse().map_err(|_| {
            DomainError::InvalidIpAddress(format!(
                "{} answer for {} is not an IP literal: {:?}",
                record_type, hostname, data
            ))
        })?;

        if AddressFamily::of(&address) != record_type.family() {
            return Err(DomainError::InvalidIpAddress(format!(
                "{} answer for {} has wrong address family: {}",
                record_type, hostname, address
            )));
        }

        Ok(Self::new(hostname.clone(), address))
    }
}
