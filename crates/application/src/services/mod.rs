mod dns_attribute_handler;
mod dns_request_enumerator;
mod handler_chain;

pub use dns_attribute_handler::DnsAttributeHandler;
pub use dns_request_enumerator::DnsRequestEnumerator;
pub use handler_chain::{AttributeHandlerChain, Dispatch};
