//! cfgattr Infrastructure Layer
pub mod tunnel;
pub mod wire;
