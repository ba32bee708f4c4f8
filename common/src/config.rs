use std::path::PathBuf;

/// Measurement name every record is written under.
pub const DEFAULT_MEASUREMENT: &str = "arp_table";

/// Vendor databases probed in order. Only the first one that exists is read.
pub const DEFAULT_VENDOR_DB_PATHS: &[&str] = &[
    "/usr/local/share/nmap/nmap-mac-prefixes",
    "/usr/local/share/oui.txt",
    "/var/db/oui.txt",
];

pub const DEFAULT_ARP_PROGRAM: &str = "arp";
pub const DEFAULT_ARP_ARGS: &[&str] = &["-an"];

pub struct Config {
    /// Value of the `host` tag on every record.
    pub host: String,
    pub measurement: String,
    /// Ordered candidates for the OUI database.
    ///
    /// The list is not a fallback chain: once a path exists it is the only
    /// one read, even if it yields no entries.
    pub vendor_db_paths: Vec<PathBuf>,
    pub arp_source: ArpSourceConfig,
}

/// Where the raw ARP listing comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArpSourceConfig {
    /// Run a program and capture its stdout.
    Command { program: String, args: Vec<String> },
    /// Read previously captured listing text. `-` is stdin.
    File(PathBuf),
}

impl Default for ArpSourceConfig {
    fn default() -> Self {
        ArpSourceConfig::Command {
            program: DEFAULT_ARP_PROGRAM.to_string(),
            args: DEFAULT_ARP_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            measurement: DEFAULT_MEASUREMENT.to_string(),
            vendor_db_paths: default_vendor_db_paths(),
            arp_source: ArpSourceConfig::default(),
        }
    }
}

pub fn default_vendor_db_paths() -> Vec<PathBuf> {
    DEFAULT_VENDOR_DB_PATHS.iter().map(PathBuf::from).collect()
}
