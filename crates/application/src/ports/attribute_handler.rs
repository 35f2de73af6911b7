use cfgattr_domain::{AttributeOutcome, AttributeRequest, AttributeType};
use std::net::IpAddr;

pub type AttributeRequests<'a> = Box<dyn Iterator<Item = AttributeRequest> + 'a>;

/// One link in the chain of configuration attribute handlers.
pub trait AttributeHandler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Offer one received attribute to this handler.
    fn handle(&self, attribute_type: AttributeType, data: &[u8]) -> AttributeOutcome;

    /// Undo a previously accepted attribute, if the handler is able to.
    fn release(&self, attribute_type: AttributeType, data: &[u8]);

    /// Attributes to ask the gateway for. Every call starts a fresh traversal.
    fn request_attributes<'a>(&'a self, virtual_ips: &'a [IpAddr]) -> AttributeRequests<'a>;
}
