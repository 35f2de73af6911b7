use crate::attribute::AttributeType;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed {attribute_type} payload: {reason}")]
    MalformedPayload {
        attribute_type: AttributeType,
        reason: String,
    },

    #[error("Degenerate {attribute_type} value: {value}")]
    DegenerateValue {
        attribute_type: AttributeType,
        value: String,
    },

    #[error("Invalid configuration payload: {0}")]
    InvalidWireFormat(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn malformed(attribute_type: AttributeType, reason: impl Into<String>) -> Self {
        DomainError::MalformedPayload {
            attribute_type,
            reason: reason.into(),
        }
    }

    pub fn degenerate(attribute_type: AttributeType, value: impl ToString) -> Self {
        DomainError::DegenerateValue {
            attribute_type,
            value: value.to_string(),
        }
    }

    pub fn wire(reason: impl Into<String>) -> Self {
        DomainError::InvalidWireFormat(reason.into())
    }
}
