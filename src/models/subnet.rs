//! Subnet value type: a base address paired with a mask.
//!
//! Prefix-form CIDR text is parsed by [`ipnetwork`]; this type only carries the result.
//! The base address is kept as given, it is not cut down to the network address.

use super::ipv4::from_int;
use crate::error::{IpMathError, Result};
use ipnetwork::Ipv4Network;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipmath::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        return Err(IpMathError::InvalidPrefix(len));
    }
    // u64 so that a shift by 32 (the /0 case) stays defined
    let right_len = MAX_LENGTH - len;
    let mask = (u32::MAX as u64 >> right_len) << right_len;
    Ok(mask as u32)
}

/// A subnet as handed over by the networking layer: base address and mask.
///
/// The mask is trusted to be a contiguous prefix mask; nothing here checks it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    /// Base address, not necessarily the network address.
    pub addr: Ipv4Addr,
    /// Subnet mask, e.g. 255.255.255.0.
    pub mask: Ipv4Addr,
}

impl Subnet {
    pub fn new(addr: Ipv4Addr, mask: Ipv4Addr) -> Subnet {
        Subnet { addr, mask }
    }

    /// Build a subnet from an address and a prefix length (0-32).
    pub fn from_prefix(addr: Ipv4Addr, len: u8) -> Result<Subnet> {
        let mask = from_int(get_cidr_mask(len)?);
        Ok(Subnet { addr, mask })
    }

    /// The mask as a big-endian integer.
    pub fn mask_bits(&self) -> u32 {
        u32::from(self.mask)
    }

    /// Prefix length of the mask, `None` if the mask is not contiguous.
    pub fn prefix_len(&self) -> Option<u8> {
        let mask = self.mask_bits();
        let len = mask.leading_ones() as u8;
        match get_cidr_mask(len) {
            Ok(expected) if expected == mask => Some(len),
            _ => None,
        }
    }

    /// Lowest address in the subnet (host bits cleared).
    pub fn network(&self) -> Ipv4Addr {
        from_int(u32::from(self.addr) & self.mask_bits())
    }

    /// Highest address in the subnet (host bits set).
    pub fn broadcast(&self) -> Ipv4Addr {
        from_int(u32::from(self.addr) | !self.mask_bits())
    }

    /// Check whether an address falls inside this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & self.mask_bits() == u32::from(self.network())
    }
}

impl From<Ipv4Network> for Subnet {
    fn from(network: Ipv4Network) -> Subnet {
        Subnet {
            addr: network.ip(),
            mask: network.mask(),
        }
    }
}

impl FromStr for Subnet {
    type Err = IpMathError;

    /// Parse CIDR text such as `"192.168.76.0/24"`, or `"10.0.0.0/255.0.255.0"`
    /// for a mask that has no prefix form.
    fn from_str(s: &str) -> Result<Subnet> {
        let s = s.trim();
        if let Some((addr, mask)) = s.split_once('/').filter(|(_, mask)| mask.contains('.')) {
            let parse = |part: &str| {
                Ipv4Addr::from_str(part)
                    .map_err(|e| IpMathError::InvalidCidr(format!("{s}: {e}")))
            };
            return Ok(Subnet::new(parse(addr)?, parse(mask)?));
        }
        let network = Ipv4Network::from_str(s).map_err(|e| {
            log::debug!("ipnetwork rejected {s:?}: {e}");
            IpMathError::InvalidCidr(format!("{s}: {e}"))
        })?;
        Ok(Subnet::from(network))
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.prefix_len() {
            Some(len) => write!(f, "{}/{}", self.addr, len),
            None => write!(f, "{}/{}", self.addr, self.mask),
        }
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Subnet::from_str(&s).map_err(de::Error::custom)
    }
}
