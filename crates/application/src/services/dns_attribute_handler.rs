use crate::ports::{AttributeHandler, AttributeRequests, TunnelBuilder};
use crate::services::DnsRequestEnumerator;
use cfgattr_domain::{
    AddressFamily, AttributeOutcome, AttributeType, DnsServer, DomainError, SearchDomain,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{info, trace, warn};

/// Installs DNS servers and the default search domain pushed by the gateway.
///
/// Owns `INTERNAL_IP4_DNS`, `INTERNAL_IP6_DNS` and `UNITY_DEF_DOMAIN`; every
/// other attribute type is left to the next handler in the chain. Values
/// are fully validated before the builder is touched, so a rejected
/// attribute never leaves anything behind on the tunnel.
pub struct DnsAttributeHandler {
    builder: Arc<dyn TunnelBuilder>,
}

impl DnsAttributeHandler {
    pub fn new(builder: Arc<dyn TunnelBuilder>) -> Self {
        Self { builder }
    }

    fn install_dns(&self, family: AddressFamily, data: &[u8]) -> Result<(), DomainError> {
        let server = DnsServer::from_wire(family, data)?;

        info!(server = %server, "installing DNS server");
        self.builder.add_dns(server.ip());
        Ok(())
    }

    fn install_search_domain(&self, data: &[u8]) -> Result<(), DomainError> {
        let domain = SearchDomain::from_wire(data)?;

        info!(domain = %domain, "installing search domain");
        self.builder.add_search_domain(domain.as_str());
        Ok(())
    }
}

impl AttributeHandler for DnsAttributeHandler {
    fn name(&self) -> &'static str {
        "dns"
    }

    fn handle(&self, attribute_type: AttributeType, data: &[u8]) -> AttributeOutcome {
        let result = match attribute_type {
            AttributeType::InternalIp4Dns => self.install_dns(AddressFamily::V4, data),
            AttributeType::InternalIp6Dns => self.install_dns(AddressFamily::V6, data),
            AttributeType::UnityDefDomain => self.install_search_domain(data),
            other => {
                trace!(attribute = %other, "Attribute not handled by DNS handler");
                return AttributeOutcome::NotApplicable;
            }
        };

        match result {
            Ok(()) => AttributeOutcome::Accepted,
            Err(e) => {
                warn!(
                    error = %e,
                    attribute = %attribute_type,
                    len = data.len(),
                    "Rejecting configuration attribute"
                );
                AttributeOutcome::Rejected
            }
        }
    }

    /// No-op. The tunnel interface offers no way to withdraw a single DNS
    /// server or search domain once installed; only rebuilding the whole
    /// interface removes it.
    fn release(&self, _attribute_type: AttributeType, _data: &[u8]) {}

    fn request_attributes<'a>(&'a self, virtual_ips: &'a [IpAddr]) -> AttributeRequests<'a> {
        Box::new(DnsRequestEnumerator::new(virtual_ips))
    }
}
