use std::fmt;

/// CFG Type field of a configuration payload (RFC 7296 §3.15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigType {
    Request,
    Reply,
    Set,
    Ack,
}

impl ConfigType {
    pub fn to_u8(&self) -> u8 {
        match self {
            ConfigType::Request => 1,
            ConfigType::Reply => 2,
            ConfigType::Set => 3,
            ConfigType::Ack => 4,
        }
    }

    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            1 => Some(ConfigType::Request),
            2 => Some(ConfigType::Reply),
            3 => Some(ConfigType::Set),
            4 => Some(ConfigType::Ack),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigType::Request => "CFG_REQUEST",
            ConfigType::Reply => "CFG_REPLY",
            ConfigType::Set => "CFG_SET",
            ConfigType::Ack => "CFG_ACK",
        }
    }

    /// Whether the payload carries values to install on the client side.
    pub fn carries_configuration(&self) -> bool {
        matches!(self, ConfigType::Reply | ConfigType::Set)
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
