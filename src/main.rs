use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use wgresolve::cidr::CidrSuffix;
use wgresolve::domains;
use wgresolve::output;
use wgresolve::patcher;
use wgresolve::resolver::{self, SystemResolver};

/// Update a WireGuard config's AllowedIPs with resolved IPs for domains
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the base/template WireGuard config file
    template_file: PathBuf,

    /// Either a single domain/URL or a file of domains (one per line, with
    /// optional CIDR, e.g. "example.com,/24")
    domains: String,

    /// Default IP class for resolved IPs. Use 'A', 'B', 'C', 'HOST', '/32',
    /// or numeric values
    #[arg(long = "class", default_value = "32")]
    ip_class: String,

    /// Optional output file for the updated config (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite the AllowedIPs field instead of appending
    #[arg(long)]
    overwrite: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Template file: {:?}", args.template_file);
    info!("Domains argument: {:?}", args.domains);

    // Normalize the default IP class
    let default_cidr = CidrSuffix::parse(&args.ip_class)?;
    info!("Default CIDR suffix: {}", default_cidr);

    // Read the domain specifications (file or single inline entry)
    let specs = domains::load_domain_specs(&args.domains)?;
    info!("Loaded {} domain specification(s)", specs.len());

    // Resolve domains to formatted IP strings
    let allowed_ips = resolver::build_ip_set(&SystemResolver, &specs, &default_cidr)?;
    info!("Resolved {} unique IP block(s)", allowed_ips.len());

    // Patch the template and emit the result
    let template_lines = patcher::read_template_lines(&args.template_file)?;
    let patched = patcher::patch_allowed_ips(&template_lines, &allowed_ips, args.overwrite)?;
    output::write_output(&output::join_lines(&patched), args.output.as_deref())?;

    Ok(())
}
