//! Domain models for the network calculator.
//!
//! - [`ipv4`] - mask, network, broadcast and host arithmetic
//! - [`SubnetInfo`] and [`ResultItem`] - the derived fields and their output order

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, decrement_octets, get_cidr_mask, get_wildcard_mask, host_range,
    increment_octets, num_hosts, MAX_LENGTH,
};
pub use subnet::{ResultItem, SubnetInfo, FIELD_NAMES};
