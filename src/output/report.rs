//! Per-address report combining every operation of the crate.

use crate::error::Result;
use crate::hash::hash;
use crate::models::{normalize, to_int, Subnet};
use crate::processing::{is_broadcast_address, is_network_address, network_size, next, prev};
use colored::Colorize;
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr};

/// Everything the crate can say about one address against one subnet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressReport {
    pub addr: Ipv4Addr,
    pub int: u32,
    pub next: Ipv4Addr,
    pub prev: Ipv4Addr,
    pub subnet: Subnet,
    pub network_address: bool,
    pub broadcast_address: bool,
    pub network_size: u32,
    /// SHA-1 hex digest.
    pub hash: String,
}

/// Build the report, normalizing `addr` to IPv4 first.
pub fn address_report(addr: IpAddr, subnet: Subnet) -> Result<AddressReport> {
    let v4 = normalize(addr)?;
    log::debug!("address_report({v4}, {subnet})");
    Ok(AddressReport {
        addr: v4,
        int: to_int(v4)?,
        next: next(v4),
        prev: prev(v4),
        subnet,
        network_address: is_network_address(v4, &subnet),
        broadcast_address: is_broadcast_address(v4, &subnet),
        network_size: network_size(&subnet),
        hash: hash(v4)?.to_string(),
    })
}

/// Format a value as a right-aligned field.
fn format_field<T: ToString>(value: T, width: usize) -> String {
    format!("{:>width$}", value.to_string())
}

fn yes_no(flag: bool) -> String {
    if flag {
        "yes".green().to_string()
    } else {
        "no".red().to_string()
    }
}

/// Render the report as aligned `label: value` lines for the terminal.
pub fn render(report: &AddressReport) -> String {
    let rows: [(&str, String); 9] = [
        ("address", report.addr.to_string().bold().to_string()),
        ("integer", report.int.to_string()),
        ("next", report.next.to_string()),
        ("prev", report.prev.to_string()),
        ("subnet", report.subnet.to_string().on_blue().to_string()),
        ("network address", yes_no(report.network_address)),
        ("broadcast address", yes_no(report.broadcast_address)),
        ("network size", report.network_size.to_string()),
        ("sha1", report.hash.clone()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{}: {value}", format_field(label, 17)))
        .collect::<Vec<_>>()
        .join("\n")
}
