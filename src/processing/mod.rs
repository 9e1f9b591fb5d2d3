//! Address arithmetic on top of the codec.
//!
//! - [`step`] - moving an address by a signed offset
//! - [`classify`] - network/broadcast checks and subnet size

mod classify;
mod step;

// Re-export public functions
pub use classify::{is_broadcast_address, is_network_address, network_size};
pub use step::{checked_delta, delta, next, prev};
