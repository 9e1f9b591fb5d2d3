//! IPv4 address arithmetic.
//!
//! Integer codec, stepping with saturation at the ends of the address space,
//! network/broadcast classification, subnet size and an address fingerprint.
//! Every function is pure and works on `Copy` values.

pub mod error;
pub mod hash;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{IpMathError, Result};
pub use hash::{hash, hash_sha256, Digest};
pub use models::{from_int, to_int, Subnet};
pub use processing::{
    checked_delta, delta, is_broadcast_address, is_network_address, network_size, next, prev,
};
