//! IPv4 mask and address arithmetic.
//!
//! All helpers take a prefix length (`len`) and work on the 32-bit
//! big-endian value of an [`Ipv4Addr`].

use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use netcalc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Inverse of [`get_cidr_mask`], the host bits of a prefix.
pub fn get_wildcard_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    Ok(!get_cidr_mask(len)?)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let network = cut_addr(addr, len)?;
    let wildcard = get_wildcard_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(network) | wildcard))
}

/// Number of usable hosts for a prefix length.
///
/// /31 is a point-to-point link with two usable addresses and /32 is a
/// single host. Anything shorter excludes the network and broadcast address.
pub fn num_hosts(len: u8) -> Result<u64, Box<dyn Error>> {
    if len > MAX_LENGTH {
        Err("Network length is too long".into())
    } else if len >= MAX_LENGTH - 1 {
        Ok(u64::from(MAX_LENGTH - len + 1))
    } else {
        Ok((1u64 << (MAX_LENGTH - len)) - 2)
    }
}

/// Add one to a big-endian address, carrying towards the first octet.
pub fn increment_octets(mut octets: [u8; 4]) -> [u8; 4] {
    for octet in octets.iter_mut().rev() {
        *octet = octet.wrapping_add(1);
        if *octet != 0 {
            break;
        }
    }
    octets
}

/// Subtract one from a big-endian address, borrowing from the first octet.
pub fn decrement_octets(mut octets: [u8; 4]) -> [u8; 4] {
    for octet in octets.iter_mut().rev() {
        *octet = octet.wrapping_sub(1);
        if *octet != u8::MAX {
            break;
        }
    }
    octets
}

/// First and last usable host of a network.
///
/// `network` and `broadcast` must belong to the same `len` prefix.
pub fn host_range(
    network: Ipv4Addr,
    broadcast: Ipv4Addr,
    len: u8,
) -> Result<(Ipv4Addr, Ipv4Addr), Box<dyn Error>> {
    match len {
        32 => Ok((network, network)),
        31 => Ok((network, broadcast)),
        0..=30 => {
            let hostmin = increment_octets(network.octets());
            let hostmax = decrement_octets(broadcast.octets());
            Ok((Ipv4Addr::from(hostmin), Ipv4Addr::from(hostmax)))
        }
        _ => Err("Network length is too long".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(27).unwrap(), 0xFFFFFFE0);
        assert_eq!(get_cidr_mask(32).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33).is_err());
    }

    #[test]
    fn test_mask_bit_count_matches_prefix() {
        for len in 0..=MAX_LENGTH {
            let mask = get_cidr_mask(len).unwrap();
            assert_eq!(mask.count_ones(), u32::from(len));
            assert_eq!(mask.leading_ones(), u32::from(len));
        }
    }

    #[test]
    fn test_get_wildcard_mask() {
        assert_eq!(get_wildcard_mask(0).unwrap(), 0xFFFFFFFF);
        assert_eq!(get_wildcard_mask(24).unwrap(), 0x000000FF);
        assert_eq!(get_wildcard_mask(32).unwrap(), 0x00000000);
        assert!(get_wildcard_mask(40).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24).unwrap(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(cut_addr(ip, 16).unwrap(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(cut_addr(ip, 8).unwrap(), Ipv4Addr::new(192, 0, 0, 0));
        assert_eq!(cut_addr(ip, 0).unwrap(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(cut_addr(ip, 32).unwrap(), Ipv4Addr::new(192, 168, 1, 42));
        assert!(cut_addr(ip, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(
            broadcast_addr(ip, 24).unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 16).unwrap(),
            Ipv4Addr::new(192, 168, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 8).unwrap(),
            Ipv4Addr::new(192, 255, 255, 255)
        );
        assert_eq!(
            broadcast_addr(ip, 32).unwrap(),
            Ipv4Addr::new(192, 168, 1, 0)
        );
        assert_eq!(
            broadcast_addr(ip, 0).unwrap(),
            Ipv4Addr::new(255, 255, 255, 255)
        );
        assert!(broadcast_addr(Ipv4Addr::new(255, 255, 255, 255), 24).is_ok());
    }

    #[test]
    fn test_num_hosts() {
        assert_eq!(num_hosts(0).unwrap(), 4294967294);
        assert_eq!(num_hosts(8).unwrap(), 16777214);
        assert_eq!(num_hosts(16).unwrap(), 65534);
        assert_eq!(num_hosts(24).unwrap(), 254);
        assert_eq!(num_hosts(29).unwrap(), 6);
        assert_eq!(num_hosts(30).unwrap(), 2);
        assert_eq!(num_hosts(31).unwrap(), 2);
        assert_eq!(num_hosts(32).unwrap(), 1);
        assert_eq!(
            num_hosts(33).unwrap_err().to_string(),
            "Network length is too long"
        );
    }

    #[test]
    fn test_increment_octets_carry() {
        assert_eq!(increment_octets([10, 0, 0, 4]), [10, 0, 0, 5]);
        assert_eq!(increment_octets([10, 0, 0, 255]), [10, 0, 1, 0]);
        assert_eq!(increment_octets([10, 255, 255, 255]), [11, 0, 0, 0]);
        assert_eq!(increment_octets([255, 255, 255, 255]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_decrement_octets_borrow() {
        assert_eq!(decrement_octets([10, 0, 0, 7]), [10, 0, 0, 6]);
        assert_eq!(decrement_octets([10, 0, 1, 0]), [10, 0, 0, 255]);
        assert_eq!(decrement_octets([11, 0, 0, 0]), [10, 255, 255, 255]);
        assert_eq!(decrement_octets([0, 0, 0, 0]), [255, 255, 255, 255]);
    }

    #[test]
    fn test_octet_helpers_leave_input_untouched() {
        let network = [172, 16, 0, 0];
        let hostmin = increment_octets(network);
        assert_eq!(network, [172, 16, 0, 0]);
        assert_eq!(hostmin, [172, 16, 0, 1]);
    }

    #[test]
    fn test_host_range() {
        let network = Ipv4Addr::new(192, 168, 1, 0);
        let broadcast = Ipv4Addr::new(192, 168, 1, 255);
        assert_eq!(
            host_range(network, broadcast, 24).unwrap(),
            (Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 254))
        );

        let network = Ipv4Addr::new(10, 0, 0, 4);
        let broadcast = Ipv4Addr::new(10, 0, 0, 5);
        assert_eq!(
            host_range(network, broadcast, 31).unwrap(),
            (network, broadcast)
        );

        let single = Ipv4Addr::new(10, 0, 0, 9);
        assert_eq!(host_range(single, single, 32).unwrap(), (single, single));

        let network = Ipv4Addr::new(0, 0, 0, 0);
        let broadcast = Ipv4Addr::new(255, 255, 255, 255);
        assert_eq!(
            host_range(network, broadcast, 0).unwrap(),
            (Ipv4Addr::new(0, 0, 0, 1), Ipv4Addr::new(255, 255, 255, 254))
        );

        assert!(host_range(network, broadcast, 33).is_err());
    }
}
