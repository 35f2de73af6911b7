use crate::attribute::AttributeType;
use crate::errors::DomainError;
use std::fmt;

/// DNS search-domain suffix pushed through the Unity default-domain
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchDomain(String);

impl SearchDomain {
    /// Decodes exactly `data.len()` bytes. No terminator is looked for, so an
    /// embedded NUL is just another non-printable byte and is refused.
    pub fn from_wire(data: &[u8]) -> Result<Self, DomainError> {
        let attribute_type = AttributeType::UnityDefDomain;

        if data.is_empty() {
            return Err(DomainError::malformed(attribute_type, "empty domain"));
        }

        if let Some(pos) = data.iter().position(|b| !is_printable(*b)) {
            return Err(DomainError::malformed(
                attribute_type,
                format!("non-printable byte 0x{:02x} at offset {}", data[pos], pos),
            ));
        }

        let domain = std::str::from_utf8(data)
            .map_err(|e| DomainError::malformed(attribute_type, e.to_string()))?;

        Ok(Self(domain.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

impl AsRef<str> for SearchDomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
