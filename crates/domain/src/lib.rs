//! cfgattr Domain Layer
pub mod attribute;
pub mod config;
pub mod dns_server;
pub mod errors;
pub mod outcome;
pub mod search_domain;

pub use attribute::{AttributeCategory, AttributeRequest, AttributeType, RawAttribute};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_server::{AddressFamily, DnsServer};
pub use errors::DomainError;
pub use outcome::AttributeOutcome;
pub use search_domain::SearchDomain;
