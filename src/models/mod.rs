//! Value types and the integer codec.
//!
//! - [`ipv4`] - IPv4 address to/from `u32`, normalization of mapped addresses
//! - [`Subnet`] - base address plus mask, as produced by CIDR parsing

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{from_int, from_octets, normalize, to_int};
pub use subnet::{get_cidr_mask, Subnet, MAX_LENGTH};
