use super::AttributeCategory;
use std::fmt;
use std::str::FromStr;

/// Largest value the 15-bit attribute type field of a configuration payload
/// can carry.
pub const MAX_ATTRIBUTE_TYPE: u16 = 0x7FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    InternalIp4Address,
    InternalIp4Netmask,
    InternalIp4Dns,
    InternalIp4Nbns,
    InternalIp4Dhcp,
    ApplicationVersion,
    InternalIp6Address,
    InternalIp6Dns,
    InternalIp6Dhcp,
    InternalIp4Subnet,
    SupportedAttributes,
    InternalIp6Subnet,

    UnityBanner,
    UnitySavePasswd,
    UnityDefDomain,
    UnitySplitDnsName,
    UnitySplitInclude,
    UnityNattPort,
    UnityLocalLan,
    UnityPfs,
    UnityFwType,
    UnityBackupServers,
    UnityDdnsHostname,

    /// Any value without a registry entry. Carried through untouched.
    Other(UnregisteredCode),
}

/// Attribute type code with no registry entry.
///
/// Only [`AttributeType::from_u16`] hands these out, so a registered code
/// always maps to its named variant and each code has a single spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnregisteredCode(u16);

impl UnregisteredCode {
    pub fn get(self) -> u16 {
        self.0
    }
}

impl AttributeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeType::InternalIp4Address => "INTERNAL_IP4_ADDRESS",
            AttributeType::InternalIp4Netmask => "INTERNAL_IP4_NETMASK",
            AttributeType::InternalIp4Dns => "INTERNAL_IP4_DNS",
            AttributeType::InternalIp4Nbns => "INTERNAL_IP4_NBNS",
            AttributeType::InternalIp4Dhcp => "INTERNAL_IP4_DHCP",
            AttributeType::ApplicationVersion => "APPLICATION_VERSION",
            AttributeType::InternalIp6Address => "INTERNAL_IP6_ADDRESS",
            AttributeType::InternalIp6Dns => "INTERNAL_IP6_DNS",
            AttributeType::InternalIp6Dhcp => "INTERNAL_IP6_DHCP",
            AttributeType::InternalIp4Subnet => "INTERNAL_IP4_SUBNET",
            AttributeType::SupportedAttributes => "SUPPORTED_ATTRIBUTES",
            AttributeType::InternalIp6Subnet => "INTERNAL_IP6_SUBNET",
            AttributeType::UnityBanner => "UNITY_BANNER",
            AttributeType::UnitySavePasswd => "UNITY_SAVE_PASSWD",
            AttributeType::UnityDefDomain => "UNITY_DEF_DOMAIN",
            AttributeType::UnitySplitDnsName => "UNITY_SPLITDNS_NAME",
            AttributeType::UnitySplitInclude => "UNITY_SPLIT_INCLUDE",
            AttributeType::UnityNattPort => "UNITY_NATT_PORT",
            AttributeType::UnityLocalLan => "UNITY_LOCAL_LAN",
            AttributeType::UnityPfs => "UNITY_PFS",
            AttributeType::UnityFwType => "UNITY_FW_TYPE",
            AttributeType::UnityBackupServers => "UNITY_BACKUP_SERVERS",
            AttributeType::UnityDdnsHostname => "UNITY_DDNS_HOSTNAME",
            AttributeType::Other(_) => "UNKNOWN",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            AttributeType::InternalIp4Address => 1,
            AttributeType::InternalIp4Netmask => 2,
            AttributeType::InternalIp4Dns => 3,
            AttributeType::InternalIp4Nbns => 4,
            AttributeType::InternalIp4Dhcp => 6,
            AttributeType::ApplicationVersion => 7,
            AttributeType::InternalIp6Address => 8,
            AttributeType::InternalIp6Dns => 10,
            AttributeType::InternalIp6Dhcp => 12,
            AttributeType::InternalIp4Subnet => 13,
            AttributeType::SupportedAttributes => 14,
            AttributeType::InternalIp6Subnet => 15,
            AttributeType::UnityBanner => 28672,
            AttributeType::UnitySavePasswd => 28673,
            AttributeType::UnityDefDomain => 28674,
            AttributeType::UnitySplitDnsName => 28675,
            AttributeType::UnitySplitInclude => 28676,
            AttributeType::UnityNattPort => 28677,
            AttributeType::UnityLocalLan => 28678,
            AttributeType::UnityPfs => 28679,
            AttributeType::UnityFwType => 28680,
            AttributeType::UnityBackupServers => 28681,
            AttributeType::UnityDdnsHostname => 28682,
            AttributeType::Other(code) => code.get(),
        }
    }

    /// Total mapping: registered codes become named variants, everything
    /// else becomes [`AttributeType::Other`].
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => AttributeType::InternalIp4Address,
            2 => AttributeType::InternalIp4Netmask,
            3 => AttributeType::InternalIp4Dns,
            4 => AttributeType::InternalIp4Nbns,
            6 => AttributeType::InternalIp4Dhcp,
            7 => AttributeType::ApplicationVersion,
            8 => AttributeType::InternalIp6Address,
            10 => AttributeType::InternalIp6Dns,
            12 => AttributeType::InternalIp6Dhcp,
            13 => AttributeType::InternalIp4Subnet,
            14 => AttributeType::SupportedAttributes,
            15 => AttributeType::InternalIp6Subnet,
            28672 => AttributeType::UnityBanner,
            28673 => AttributeType::UnitySavePasswd,
            28674 => AttributeType::UnityDefDomain,
            28675 => AttributeType::UnitySplitDnsName,
            28676 => AttributeType::UnitySplitInclude,
            28677 => AttributeType::UnityNattPort,
            28678 => AttributeType::UnityLocalLan,
            28679 => AttributeType::UnityPfs,
            28680 => AttributeType::UnityFwType,
            28681 => AttributeType::UnityBackupServers,
            28682 => AttributeType::UnityDdnsHostname,
            other => AttributeType::Other(UnregisteredCode(other)),
        }
    }

    pub fn category(&self) -> AttributeCategory {
        match self {
            AttributeType::InternalIp4Address
            | AttributeType::InternalIp4Netmask
            | AttributeType::InternalIp4Dns
            | AttributeType::InternalIp4Nbns
            | AttributeType::InternalIp4Dhcp
            | AttributeType::InternalIp4Subnet => AttributeCategory::Ipv4,

            AttributeType::InternalIp6Address
            | AttributeType::InternalIp6Dns
            | AttributeType::InternalIp6Dhcp
            | AttributeType::InternalIp6Subnet => AttributeCategory::Ipv6,

            AttributeType::ApplicationVersion | AttributeType::SupportedAttributes => {
                AttributeCategory::Generic
            }

            AttributeType::UnityBanner
            | AttributeType::UnitySavePasswd
            | AttributeType::UnityDefDomain
            | AttributeType::UnitySplitDnsName
            | AttributeType::UnitySplitInclude
            | AttributeType::UnityNattPort
            | AttributeType::UnityLocalLan
            | AttributeType::UnityPfs
            | AttributeType::UnityFwType
            | AttributeType::UnityBackupServers
            | AttributeType::UnityDdnsHostname => AttributeCategory::Unity,

            AttributeType::Other(_) => AttributeCategory::Unknown,
        }
    }

    pub fn is_dns_server(&self) -> bool {
        matches!(
            self,
            AttributeType::InternalIp4Dns | AttributeType::InternalIp6Dns
        )
    }

    pub fn is_vendor_specific(&self) -> bool {
        matches!(self.category(), AttributeCategory::Unity)
    }
}

impl From<u16> for AttributeType {
    fn from(code: u16) -> Self {
        AttributeType::from_u16(code)
    }
}

impl From<AttributeType> for u16 {
    fn from(attribute_type: AttributeType) -> Self {
        attribute_type.to_u16()
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::Other(code) => write!(f, "UNKNOWN({})", code.get()),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

impl FromStr for AttributeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(code) = s.parse::<u16>() {
            if code > MAX_ATTRIBUTE_TYPE {
                return Err(format!("Attribute type out of range: {}", code));
            }
            return Ok(AttributeType::from_u16(code));
        }

        match s.to_uppercase().as_str() {
            "INTERNAL_IP4_ADDRESS" => Ok(AttributeType::InternalIp4Address),
            "INTERNAL_IP4_NETMASK" => Ok(AttributeType::InternalIp4Netmask),
            "INTERNAL_IP4_DNS" => Ok(AttributeType::InternalIp4Dns),
            "INTERNAL_IP4_NBNS" => Ok(AttributeType::InternalIp4Nbns),
            "INTERNAL_IP4_DHCP" => Ok(AttributeType::InternalIp4Dhcp),
            "APPLICATION_VERSION" => Ok(AttributeType::ApplicationVersion),
            "INTERNAL_IP6_ADDRESS" => Ok(AttributeType::InternalIp6Address),
            "INTERNAL_IP6_DNS" => Ok(AttributeType::InternalIp6Dns),
            "INTERNAL_IP6_DHCP" => Ok(AttributeType::InternalIp6Dhcp),
            "INTERNAL_IP4_SUBNET" => Ok(AttributeType::InternalIp4Subnet),
            "SUPPORTED_ATTRIBUTES" => Ok(AttributeType::SupportedAttributes),
            "INTERNAL_IP6_SUBNET" => Ok(AttributeType::InternalIp6Subnet),
            "UNITY_BANNER" => Ok(AttributeType::UnityBanner),
            "UNITY_SAVE_PASSWD" => Ok(AttributeType::UnitySavePasswd),
            "UNITY_DEF_DOMAIN" => Ok(AttributeType::UnityDefDomain),
            "UNITY_SPLITDNS_NAME" => Ok(AttributeType::UnitySplitDnsName),
            "UNITY_SPLIT_INCLUDE" => Ok(AttributeType::UnitySplitInclude),
            "UNITY_NATT_PORT" => Ok(AttributeType::UnityNattPort),
            "UNITY_LOCAL_LAN" => Ok(AttributeType::UnityLocalLan),
            "UNITY_PFS" => Ok(AttributeType::UnityPfs),
            "UNITY_FW_TYPE" => Ok(AttributeType::UnityFwType),
            "UNITY_BACKUP_SERVERS" => Ok(AttributeType::UnityBackupServers),
            "UNITY_DDNS_HOSTNAME" => Ok(AttributeType::UnityDdnsHostname),
            _ => Err(format!("Unknown attribute type: {}", s)),
        }
    }
}
