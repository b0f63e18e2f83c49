//! Derived subnet fields and their display order.

use std::fmt;
use std::net::Ipv4Addr;

/// Field names in the order they are printed.
pub const FIELD_NAMES: [&str; 9] = [
    "Address",
    "Bitmask",
    "Netmask",
    "Wildcard",
    "Network",
    "Broadcast",
    "Hostmin",
    "Hostmax",
    "Hosts",
];

/// One named line of calculator output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub name: &'static str,
    pub value: String,
}

impl ResultItem {
    pub fn new<T: ToString>(name: &'static str, value: T) -> Self {
        ResultItem {
            name,
            value: value.to_string(),
        }
    }
}

/// Everything derived from one `address/prefix` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// Address text exactly as given, host bits included.
    pub address: String,
    /// Prefix length (0-32).
    pub bitmask: u8,
    pub netmask: Ipv4Addr,
    pub wildcard: Ipv4Addr,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    /// First usable host.
    pub hostmin: Ipv4Addr,
    /// Last usable host.
    pub hostmax: Ipv4Addr,
    pub hosts: u64,
}

impl SubnetInfo {
    /// Render the fields as name/value pairs in [`FIELD_NAMES`] order.
    pub fn items(&self) -> Vec<ResultItem> {
        vec![
            ResultItem::new(FIELD_NAMES[0], &self.address),
            ResultItem::new(FIELD_NAMES[1], self.bitmask),
            ResultItem::new(FIELD_NAMES[2], self.netmask),
            ResultItem::new(FIELD_NAMES[3], self.wildcard),
            ResultItem::new(FIELD_NAMES[4], self.network),
            ResultItem::new(FIELD_NAMES[5], self.broadcast),
            ResultItem::new(FIELD_NAMES[6], self.hostmin),
            ResultItem::new(FIELD_NAMES[7], self.hostmax),
            ResultItem::new(FIELD_NAMES[8], self.hosts),
        ]
    }
}

impl fmt::Display for SubnetInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.bitmask)
    }
}
