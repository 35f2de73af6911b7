pub mod apply_configuration;
pub mod build_configuration_request;

pub use apply_configuration::{ApplyConfigurationUseCase, ApplyReport};
pub use build_configuration_request::BuildConfigurationRequestUseCase;
