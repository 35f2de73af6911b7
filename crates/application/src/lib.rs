//! cfgattr Application Layer
//!
//! Ports the platform must provide, the attribute handlers built on them,
//! and the use cases the negotiation code drives.
pub mod ports;
pub mod services;
pub mod use_cases;
