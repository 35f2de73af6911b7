mod attribute_handler;
mod tunnel_builder;

pub use attribute_handler::{AttributeHandler, AttributeRequests};
pub use tunnel_builder::TunnelBuilder;
