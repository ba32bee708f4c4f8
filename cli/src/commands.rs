use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

use arptag_common::config::{ArpSourceConfig, Config, DEFAULT_MEASUREMENT};

const FALLBACK_HOST: &str = "localhost";

#[derive(Parser, Debug)]
#[command(name = "arptag")]
#[command(version)]
#[command(about = "Print the ARP table as line protocol, tagged with MAC vendors.")]
pub struct CommandLine {
    /// Value of the `host` tag [default: this machine's host name]
    #[arg(long)]
    pub host: Option<String>,

    /// Measurement name for every record
    #[arg(long, default_value = DEFAULT_MEASUREMENT)]
    pub measurement: String,

    /// Vendor database to probe instead of the built-in locations.
    /// Repeatable; the first one that exists is used
    #[arg(long = "vendor-db", value_name = "PATH")]
    pub vendor_db: Vec<PathBuf>,

    /// Parse captured `arp -an` output instead of running arp ('-' reads stdin)
    #[arg(long, value_name = "PATH")]
    pub arp_file: Option<PathBuf>,

    /// More diagnostics on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    pub fn into_config(self) -> Config {
        let host = self.host.unwrap_or_else(local_hostname);
        let mut cfg = Config::new(host);
        cfg.measurement = self.measurement;
        if !self.vendor_db.is_empty() {
            cfg.vendor_db_paths = self.vendor_db;
        }
        if let Some(path) = self.arp_file {
            cfg.arp_source = ArpSourceConfig::File(path);
        }
        cfg
    }
}

fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| FALLBACK_HOST.to_string())
}
