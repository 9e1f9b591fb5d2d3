//! Content fingerprint of an address.
//!
//! [`hash`] is SHA-1 over the 4 raw address bytes and exists for compatibility
//! with digests already stored elsewhere. SHA-1 collisions are practical, so the
//! digest is an identifier, never a security boundary. New consumers should
//! use [`hash_sha256`].

use crate::error::Result;
use crate::models::normalize;
use sha1::{Digest as _, Sha1};
use sha2::Sha256;
use std::net::IpAddr;

/// Length of a [`Digest`] in bytes.
pub const DIGEST_LEN: usize = 20;

/// 20-byte SHA-1 digest of an address.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// SHA-1 of the 4-byte form of `addr`.
///
/// IPv4-mapped IPv6 addresses hash the same as the plain IPv4 address.
pub fn hash<A: Into<IpAddr>>(addr: A) -> Result<Digest> {
    let v4 = normalize(addr.into())?;
    let mut hasher = Sha1::new();
    hasher.update(v4.octets());
    let digest = Digest(hasher.finalize().into());
    log::trace!("hash({v4}) = {digest}");
    Ok(digest)
}

/// SHA-256 of the 4-byte form of `addr`.
pub fn hash_sha256<A: Into<IpAddr>>(addr: A) -> Result<[u8; 32]> {
    let v4 = normalize(addr.into())?;
    let mut hasher = Sha256::new();
    hasher.update(v4.octets());
    Ok(hasher.finalize().into())
}
