use clap::Parser;
use ipmath::output::{address_report, render};
use ipmath::Subnet;
use std::env::VarError;
use std::error::Error;
use std::net::IpAddr;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "ipmath")]
#[command(about = "IPv4 address arithmetic for one address against one subnet.")]
struct Args {
    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// IPv4 address, or an IPv4-mapped IPv6 address
    addr: IpAddr,

    /// Subnet in CIDR notation, e.g. 192.168.76.0/24
    cidr: Subnet,
}

/// log4rs config file, `log4rs.yml` in the working directory unless overridden.
fn log_config_path(configured: Result<String, VarError>) -> String {
    configured.unwrap_or_else(|_| "log4rs.yml".into())
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    let log_config = log_config_path(std::env::var("IPMATH_LOG_CONFIG"));
    if let Err(e) = log4rs::init_file(&log_config, Default::default()) {
        eprintln!("logging disabled, could not load {log_config}: {e}");
    }
    log::info!("#Start main()");

    let args = Args::parse();
    let report = address_report(args.addr, args.cidr)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render(&report));
    }

    Ok(())
}
