use super::ConfigType;
use bytes::{BufMut, Bytes, BytesMut};
use cfgattr_domain::{AttributeRequest, AttributeType, DomainError, RawAttribute};

/// CFG Type plus three reserved bytes.
pub const PAYLOAD_HEADER_LEN: usize = 4;
/// Attribute type word plus length word.
pub const ATTRIBUTE_HEADER_LEN: usize = 4;

const RESERVED_BIT: u16 = 0x8000;

/// Body of an IKEv2 configuration payload, with attribute values borrowed
/// from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationPayload<'a> {
    pub config_type: ConfigType,
    pub attributes: Vec<RawAttribute<'a>>,
}

impl<'a> ConfigurationPayload<'a> {
    /// Parses a payload body:
    ///
    /// ```text
    /// CFG Type (1) | RESERVED (3) | { R|Type (2) | Length (2) | Value }*
    /// ```
    ///
    /// The reserved bit in front of each attribute type is ignored. Any
    /// attribute whose header or value runs past the end of `buf` fails the
    /// whole payload.
    pub fn decode(buf: &'a [u8]) -> Result<Self, DomainError> {
        if buf.len() < PAYLOAD_HEADER_LEN {
            return Err(DomainError::wire(format!(
                "payload too short: {} bytes",
                buf.len()
            )));
        }

        let config_type = ConfigType::from_u8(buf[0])
            .ok_or_else(|| DomainError::wire(format!("unknown CFG type {}", buf[0])))?;

        let mut attributes = Vec::new();
        let mut pos = PAYLOAD_HEADER_LEN;

        while pos < buf.len() {
            if pos + ATTRIBUTE_HEADER_LEN > buf.len() {
                return Err(DomainError::wire(format!(
                    "truncated attribute header at offset {}",
                    pos
                )));
            }

            let type_word = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
            let length = u16::from_be_bytes([buf[pos + 2], buf[pos + 3]]) as usize;
            pos += ATTRIBUTE_HEADER_LEN;

            if pos + length > buf.len() {
                return Err(DomainError::wire(format!(
                    "attribute length {} overruns payload at offset {}",
                    length, pos
                )));
            }

            let attribute_type = AttributeType::from_u16(type_word & !RESERVED_BIT);
            attributes.push(RawAttribute::new(attribute_type, &buf[pos..pos + length]));
            pos += length;
        }

        Ok(Self {
            config_type,
            attributes,
        })
    }

    pub fn encode(&self) -> Result<Bytes, DomainError> {
        encode_attributes(
            self.config_type,
            self.attributes
                .iter()
                .map(|attribute| (attribute.attribute_type, attribute.data)),
        )
    }
}

/// Builds the CFG_REQUEST body listing `requests` in the given order.
pub fn encode_request(requests: &[AttributeRequest]) -> Result<Bytes, DomainError> {
    encode_attributes(
        ConfigType::Request,
        requests
            .iter()
            .map(|request| (request.attribute_type, request.data.as_slice())),
    )
}

fn encode_attributes<'a>(
    config_type: ConfigType,
    attributes: impl Iterator<Item = (AttributeType, &'a [u8])>,
) -> Result<Bytes, DomainError> {
    let mut buf = BytesMut::with_capacity(PAYLOAD_HEADER_LEN);
    buf.put_u8(config_type.to_u8());
    buf.put_bytes(0, 3);

    for (attribute_type, data) in attributes {
        let code = attribute_type.to_u16();
        if code & RESERVED_BIT != 0 {
            return Err(DomainError::wire(format!(
                "attribute type {} does not fit in 15 bits",
                code
            )));
        }
        let length = u16::try_from(data.len()).map_err(|_| {
            DomainError::wire(format!(
                "{} value of {} bytes is too long",
                attribute_type,
                data.len()
            ))
        })?;

        buf.reserve(ATTRIBUTE_HEADER_LEN + data.len());
        buf.put_u16(code);
        buf.put_u16(length);
        buf.put_slice(data);
    }

    Ok(buf.freeze())
}
