//! Output formatting for the command line tool.
//!
//! - [`report`] - collect every operation for one address, render it for the terminal

mod report;

pub use report::{address_report, render, AddressReport};
