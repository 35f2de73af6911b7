pub mod resolv_conf_writer;
pub mod resolver_settings;
pub mod resolver_settings_builder;

pub use resolv_conf_writer::ResolvConfWriter;
pub use resolver_settings::ResolverSettings;
pub use resolver_settings_builder::ResolverSettingsBuilder;
