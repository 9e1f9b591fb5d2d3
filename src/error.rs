//! Error type shared by every module of the crate.

use thiserror::Error;

/// Failures surfaced by the address arithmetic.
///
/// Masks are never validated, so there is no variant for a malformed mask.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IpMathError {
    /// The value cannot be reduced to exactly 4 bytes.
    #[error("invalid IPv4 address: {0}")]
    InvalidAddress(String),

    /// Prefix length above 32.
    #[error("invalid prefix length /{0}, must be 0..=32")]
    InvalidPrefix(u8),

    /// CIDR text rejected by the network parser.
    #[error("invalid CIDR {0}")]
    InvalidCidr(String),
}

pub type Result<T> = std::result::Result<T, IpMathError>;
