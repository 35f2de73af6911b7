pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use output::OutputConfig;
pub use root::{CliOverrides, Config};
