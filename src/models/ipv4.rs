//! IPv4 integer codec.
//!
//! Converts addresses to and from their big-endian `u32` form. Anything wider
//! than 4 bytes (an IPv4-mapped IPv6 address) is normalized first.

use crate::error::{IpMathError, Result};
use std::net::{IpAddr, Ipv4Addr};

/// Prefix of an IPv4-mapped IPv6 address, `::ffff:0:0/96`.
const V4_MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

/// Reduce an address to its 4-byte IPv4 form.
///
/// IPv6 addresses are accepted only in the mapped form `::ffff:a.b.c.d`.
pub fn normalize(addr: IpAddr) -> Result<Ipv4Addr> {
    match addr {
        IpAddr::V4(v4) => Ok(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped().ok_or_else(|| {
            log::trace!("normalize({v6}) has no IPv4 form");
            IpMathError::InvalidAddress(v6.to_string())
        }),
    }
}

/// Build an address from raw bytes, either 4 bytes or a 16 byte IPv4-mapped buffer.
///
/// # Examples
/// ```
/// use ipmath::models::from_octets;
/// use std::net::Ipv4Addr;
/// assert_eq!(from_octets(&[10, 0, 0, 1]).unwrap(), Ipv4Addr::new(10, 0, 0, 1));
/// assert!(from_octets(&[10, 0, 0]).is_err());
/// ```
pub fn from_octets(bytes: &[u8]) -> Result<Ipv4Addr> {
    match bytes.len() {
        4 => Ok(Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3])),
        16 if bytes[..12] == V4_MAPPED_PREFIX => {
            Ok(Ipv4Addr::new(bytes[12], bytes[13], bytes[14], bytes[15]))
        }
        len => Err(IpMathError::InvalidAddress(format!(
            "{len} bytes {bytes:02x?}"
        ))),
    }
}

/// Interpret the 4 address bytes as a big-endian unsigned integer.
pub fn to_int<A: Into<IpAddr>>(addr: A) -> Result<u32> {
    let v4 = normalize(addr.into())?;
    Ok(u32::from_be_bytes(v4.octets()))
}

/// Big-endian encoding of `u`. Never fails.
pub fn from_int(u: u32) -> Ipv4Addr {
    Ipv4Addr::from(u.to_be_bytes())
}
