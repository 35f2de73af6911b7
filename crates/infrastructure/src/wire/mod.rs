pub mod config_type;
pub mod payload;

pub use config_type::ConfigType;
pub use payload::{encode_request, ConfigurationPayload};
