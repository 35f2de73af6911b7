use crate::attribute::AttributeType;
use crate::errors::DomainError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address family carried by a DNS server attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn wire_len(&self) -> usize {
        match self {
            AddressFamily::V4 => 4,
            AddressFamily::V6 => 16,
        }
    }

    pub fn dns_attribute(&self) -> AttributeType {
        match self {
            AddressFamily::V4 => AttributeType::InternalIp4Dns,
            AddressFamily::V6 => AttributeType::InternalIp6Dns,
        }
    }

    pub fn for_dns_attribute(attribute_type: AttributeType) -> Option<Self> {
        match attribute_type {
            AttributeType::InternalIp4Dns => Some(AddressFamily::V4),
            AttributeType::InternalIp6Dns => Some(AddressFamily::V6),
            _ => None,
        }
    }
}

/// A DNS server address pushed by the gateway.
///
/// Construction guarantees the address is concrete: the unspecified
/// address (`0.0.0.0` / `::`) never makes it into a `DnsServer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnsServer(IpAddr);

impl DnsServer {
    /// Decodes a network-order address of the given family from an attribute
    /// value. The value must be exactly the family's address length.
    pub fn from_wire(family: AddressFamily, data: &[u8]) -> Result<Self, DomainError> {
        let attribute_type = family.dns_attribute();

        let ip = match family {
            AddressFamily::V4 => {
                let octets: [u8; 4] = data.try_into().map_err(|_| {
                    DomainError::malformed(
                        attribute_type,
                        format!("expected 4 bytes, got {}", data.len()),
                    )
                })?;
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            AddressFamily::V6 => {
                let octets: [u8; 16] = data.try_into().map_err(|_| {
                    DomainError::malformed(
                        attribute_type,
                        format!("expected 16 bytes, got {}", data.len()),
                    )
                })?;
                IpAddr::V6(Ipv6Addr::from(octets))
            }
        };

        Self::new(ip)
    }

    pub fn new(ip: IpAddr) -> Result<Self, DomainError> {
        if ip.is_unspecified() {
            let attribute_type = match ip {
                IpAddr::V4(_) => AttributeType::InternalIp4Dns,
                IpAddr::V6(_) => AttributeType::InternalIp6Dns,
            };
            return Err(DomainError::degenerate(attribute_type, ip));
        }
        Ok(Self(ip))
    }

    pub fn ip(&self) -> IpAddr {
        self.0
    }

    pub fn family(&self) -> AddressFamily {
        match self.0 {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

impl From<DnsServer> for IpAddr {
    fn from(server: DnsServer) -> Self {
        server.0
    }
}

impl fmt::Display for DnsServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
