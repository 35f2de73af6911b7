use super::AttributeType;

/// One attribute as it arrived from the gateway. The payload is borrowed
/// from the caller's buffer and is never retained past a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAttribute<'a> {
    pub attribute_type: AttributeType,
    pub data: &'a [u8],
}

impl<'a> RawAttribute<'a> {
    pub fn new(attribute_type: AttributeType, data: &'a [u8]) -> Self {
        Self {
            attribute_type,
            data,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An attribute the client asks the gateway to supply.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeRequest {
    pub attribute_type: AttributeType,
    pub data: Vec<u8>,
}

impl AttributeRequest {
    pub fn new(attribute_type: AttributeType, data: Vec<u8>) -> Self {
        Self {
            attribute_type,
            data,
        }
    }

    /// Request with an empty value, the usual form in a CFG_REQUEST.
    pub fn empty(attribute_type: AttributeType) -> Self {
        Self::new(attribute_type, Vec::new())
    }

    pub fn as_raw(&self) -> RawAttribute<'_> {
        RawAttribute::new(self.attribute_type, &self.data)
    }
}
