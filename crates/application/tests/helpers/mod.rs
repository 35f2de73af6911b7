#![allow(dead_code)]

mod mock_handlers;

pub use mock_handlers::{BuilderCall, MockTunnelBuilder, StubAttributeHandler};
