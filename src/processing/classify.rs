//! Network/broadcast classification and subnet capacity.
//!
//! The mask is trusted input. A /32 has no network or broadcast address, so
//! both classifiers answer `false` for it whatever the address.

use crate::models::Subnet;
use std::net::Ipv4Addr;

/// Whether `ip` is the network address of `subnet` (all host bits zero).
pub fn is_network_address(ip: Ipv4Addr, subnet: &Subnet) -> bool {
    let mask = subnet.mask_bits();
    if mask == u32::MAX {
        return false;
    }
    (!mask & u32::from(ip)) == 0
}

/// Whether `ip` is the broadcast address of `subnet` (all host bits one).
pub fn is_broadcast_address(ip: Ipv4Addr, subnet: &Subnet) -> bool {
    let mask = subnet.mask_bits();
    if mask == u32::MAX {
        return false;
    }
    (mask | u32::from(ip)) == u32::MAX
}

/// Number of addresses in the subnet, 2^(host bits).
///
/// A /32 gives 0, it has no distinct host range. A /0 holds 2^32 addresses,
/// which does not fit, and saturates to `u32::MAX`.
///
/// For /1 through /31 this is one more than the older `!mask` formula, so sizes
/// stored by that formula are off by one (a /24 was recorded as 255).
///
/// # Examples
/// ```
/// use ipmath::models::Subnet;
/// use ipmath::processing::network_size;
/// let subnet: Subnet = "192.168.76.0/24".parse().unwrap();
/// assert_eq!(network_size(&subnet), 256);
/// ```
pub fn network_size(subnet: &Subnet) -> u32 {
    let host_bits = !subnet.mask_bits();
    if host_bits == 0 {
        return 0;
    }
    host_bits.saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subnet(cidr: &str) -> Subnet {
        cidr.parse().expect("test CIDR")
    }

    #[test]
    fn test_is_broadcast() {
        let nw = subnet("192.168.76.0/24");
        assert!(is_broadcast_address(Ipv4Addr::new(192, 168, 76, 255), &nw));
        assert!(!is_broadcast_address(Ipv4Addr::new(192, 168, 76, 23), &nw));
        assert!(!is_broadcast_address(Ipv4Addr::new(192, 168, 76, 0), &nw));
    }

    #[test]
    fn test_is_network() {
        let nw = subnet("192.168.76.0/24");
        assert!(is_network_address(Ipv4Addr::new(192, 168, 76, 0), &nw));
        assert!(!is_network_address(Ipv4Addr::new(192, 168, 76, 23), &nw));
        assert!(!is_network_address(Ipv4Addr::new(192, 168, 76, 255), &nw));
    }

    #[test]
    fn test_slash_32_has_neither() {
        let nw = subnet("192.168.76.23/32");
        let ip = Ipv4Addr::new(192, 168, 76, 23);
        assert!(!is_broadcast_address(ip, &nw));
        assert!(!is_network_address(ip, &nw));
        assert!(!is_network_address(Ipv4Addr::UNSPECIFIED, &nw));
        assert!(!is_broadcast_address(Ipv4Addr::BROADCAST, &nw));
    }

    #[test]
    fn test_slash_31_and_slash_0() {
        let p2p = subnet("10.0.0.0/31");
        assert!(is_network_address(Ipv4Addr::new(10, 0, 0, 0), &p2p));
        assert!(is_broadcast_address(Ipv4Addr::new(10, 0, 0, 1), &p2p));

        let all = subnet("0.0.0.0/0");
        assert!(is_network_address(Ipv4Addr::UNSPECIFIED, &all));
        assert!(is_broadcast_address(Ipv4Addr::BROADCAST, &all));
        assert!(!is_network_address(Ipv4Addr::new(0, 0, 0, 1), &all));
    }

    #[test]
    fn test_classification_ignores_subnet_base() {
        // only the mask matters, not which subnet the address belongs to
        let nw = subnet("192.168.76.0/24");
        assert!(is_broadcast_address(Ipv4Addr::new(10, 9, 8, 255), &nw));
        assert!(is_network_address(Ipv4Addr::new(10, 9, 8, 0), &nw));
    }

    #[test]
    fn test_network_size() {
        assert_eq!(network_size(&subnet("192.168.76.0/24")), 256);
        assert_eq!(network_size(&subnet("192.168.76.23/32")), 0);
        assert_eq!(network_size(&subnet("10.0.0.0/31")), 2);
        assert_eq!(network_size(&subnet("10.0.0.0/8")), 16_777_216);
        assert_eq!(network_size(&subnet("10.0.0.0/1")), 0x8000_0000);
        assert_eq!(network_size(&subnet("0.0.0.0/0")), u32::MAX);
    }

    #[test]
    fn test_network_size_against_complement() {
        for len in 1..32u8 {
            let nw = Subnet::from_prefix(Ipv4Addr::new(10, 0, 0, 0), len).unwrap();
            assert_eq!(network_size(&nw), !nw.mask_bits() + 1, "/{len}");
        }
        let slash32 = subnet("10.0.0.0/32");
        assert_eq!(network_size(&slash32), !slash32.mask_bits());
    }
}
