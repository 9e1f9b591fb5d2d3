//! Stepping an address forward or backward by an offset.
//!
//! Neither end of the address space wraps: a step that would leave
//! `0.0.0.0..=255.255.255.255` returns the input address unchanged.

use std::net::Ipv4Addr;

/// Add `offset` to the address, or `None` if the result leaves the address space.
pub fn checked_delta(addr: Ipv4Addr, offset: i64) -> Option<Ipv4Addr> {
    let current = i64::from(u32::from(addr));
    let stepped = current.checked_add(offset)?;
    u32::try_from(stepped).ok().map(Ipv4Addr::from)
}

/// Return the address `offset` places away from `addr`.
///
/// Saturates at the input: stepping past either end of the address space is a
/// no-op, not an error.
///
/// # Examples
/// ```
/// use ipmath::processing::delta;
/// use std::net::Ipv4Addr;
/// assert_eq!(delta(Ipv4Addr::new(10, 0, 0, 250), 10), Ipv4Addr::new(10, 0, 1, 4));
/// assert_eq!(delta(Ipv4Addr::BROADCAST, 1), Ipv4Addr::BROADCAST);
/// ```
pub fn delta(addr: Ipv4Addr, offset: i64) -> Ipv4Addr {
    if offset == 0 {
        return addr;
    }
    match checked_delta(addr, offset) {
        Some(stepped) => stepped,
        None => {
            log::debug!("delta({addr}, {offset}) leaves the address space, keeping {addr}");
            addr
        }
    }
}

/// Next IPv4 address in sequence.
pub fn next(addr: Ipv4Addr) -> Ipv4Addr {
    delta(addr, 1)
}

/// Previous IPv4 address in sequence.
pub fn prev(addr: Ipv4Addr) -> Ipv4Addr {
    delta(addr, -1)
}
