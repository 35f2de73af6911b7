use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeCategory {
    Ipv4,

    Ipv6,

    Generic,

    Unity,

    Unknown,
}

impl AttributeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeCategory::Ipv4 => "ipv4",
            AttributeCategory::Ipv6 => "ipv6",
            AttributeCategory::Generic => "generic",
            AttributeCategory::Unity => "unity",
            AttributeCategory::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributeCategory::Ipv4 => "IPv4 Internal Attributes",
            AttributeCategory::Ipv6 => "IPv6 Internal Attributes",
            AttributeCategory::Generic => "Generic Attributes",
            AttributeCategory::Unity => "Cisco Unity Extensions",
            AttributeCategory::Unknown => "Unregistered Attributes",
        }
    }
}

impl fmt::Display for AttributeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
