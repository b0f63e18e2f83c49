//! CIDR calculator.
//!
//! Turns `address/prefix` text into a [`SubnetInfo`]. Checks run in a fixed
//! order and the first failure is returned:
//!
//! 1. a `/` separator is present
//! 2. the text is shaped like a CIDR, the address part is an IP address and
//!    an IPv6 prefix is at most 128
//! 3. the address is not IPv6
//! 4. the prefix is an integer in 0..=32
//! 5. the address is a dotted-quad IPv4 address

use crate::error::CalcError;
use crate::models::{
    broadcast_addr, cut_addr, get_cidr_mask, get_wildcard_mask, host_range, num_hosts,
    ResultItem, SubnetInfo, MAX_LENGTH,
};
use regex::Regex;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;

const IPV6_MAX_LENGTH: u8 = 128;

/// Regex for the `address/prefix` shape, prefix digits only.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| Regex::new(r"^([^/]+)/([0-9]+)$").expect("Invalid Regex"))
}

/// Split `address/prefix` into its two parts.
///
/// # Returns
/// * `Ok((address, prefix))` - borrowed from `cidr`, unmodified
/// * `Err(CalcError::MissingSeparator)` - no `/` in the input
/// * `Err(CalcError::InvalidCidr)` - anything else that is not a CIDR
pub fn split_cidr(cidr: &str) -> Result<(&str, &str), CalcError> {
    if !cidr.contains('/') {
        return Err(CalcError::MissingSeparator);
    }

    let invalid = || CalcError::InvalidCidr(format!("invalid CIDR address: {cidr}"));

    let caps = get_cidr_regex().captures(cidr).ok_or_else(invalid)?;
    let (address, prefix) = match (caps.get(1), caps.get(2)) {
        (Some(address), Some(prefix)) => (address.as_str(), prefix.as_str()),
        _ => return Err(invalid()),
    };
    log::trace!("split_cidr({cidr}) address={address} prefix={prefix}");

    if let IpAddr::V6(_) = address.parse::<IpAddr>().map_err(|_| invalid())? {
        match prefix.parse::<u8>() {
            Ok(len) if len <= IPV6_MAX_LENGTH => {}
            _ => return Err(invalid()),
        }
    }

    Ok((address, prefix))
}

/// Derive every subnet field from an address and a prefix length.
pub fn compute(address_text: &str, prefix_text: &str) -> Result<SubnetInfo, CalcError> {
    if address_text.parse::<Ipv6Addr>().is_ok() {
        log::debug!("rejecting IPv6 address {address_text}");
        return Err(CalcError::Ipv6Unsupported);
    }

    let bitmask = match prefix_text.parse::<u8>() {
        Ok(len) if len <= MAX_LENGTH => len,
        _ => {
            log::debug!("bitmask out of range: {prefix_text}");
            return Err(CalcError::InvalidBitmask);
        }
    };

    let addr: Ipv4Addr = address_text.parse().map_err(|_| {
        log::debug!("not an IPv4 address: {address_text}");
        CalcError::InvalidAddress
    })?;

    // Only fails for bitmask > 32, which is rejected above.
    let out_of_range = |_: Box<dyn Error>| CalcError::InvalidBitmask;

    let netmask = Ipv4Addr::from(get_cidr_mask(bitmask).map_err(out_of_range)?);
    let wildcard = Ipv4Addr::from(get_wildcard_mask(bitmask).map_err(out_of_range)?);
    let network = cut_addr(addr, bitmask).map_err(out_of_range)?;
    let broadcast = broadcast_addr(addr, bitmask).map_err(out_of_range)?;
    let (hostmin, hostmax) = host_range(network, broadcast, bitmask).map_err(out_of_range)?;
    let hosts = num_hosts(bitmask).map_err(out_of_range)?;

    let info = SubnetInfo {
        address: address_text.to_string(),
        bitmask,
        netmask,
        wildcard,
        network,
        broadcast,
        hostmin,
        hostmax,
        hosts,
    };
    log::debug!("compute({address_text}, {prefix_text}) -> {info} hosts={hosts}");

    Ok(info)
}

/// Parse and compute a full `address/prefix` string.
pub fn parse_subnet(cidr: &str) -> Result<SubnetInfo, CalcError> {
    let (address, prefix) = split_cidr(cidr)?;
    compute(address, prefix)
}

/// Parse and compute a full `address/prefix` string, rendered for output.
pub fn calculate(cidr: &str) -> Result<Vec<ResultItem>, CalcError> {
    log::info!("#Start calculate({cidr})");
    Ok(parse_subnet(cidr)?.items())
}
