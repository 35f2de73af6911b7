pub mod attribute_type;
pub mod category;
pub mod raw;

pub use attribute_type::{AttributeType, UnregisteredCode, MAX_ATTRIBUTE_TYPE};
pub use category::AttributeCategory;
pub use raw::{AttributeRequest, RawAttribute};
