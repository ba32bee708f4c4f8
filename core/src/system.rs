use std::fs;
use std::io::{self, Read};
use std::net::IpAddr;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use arptag_common::config::ArpSourceConfig;
use arptag_common::network::arp::ArpEntry;
use arptag_common::network::mac::parse_colon_mac;
use arptag_common::system::{ArpSource, ArpSourceError};

/// Runs the system ARP utility and captures its stdout.
pub struct CommandArpSource {
    program: String,
    args: Vec<String>,
}

impl CommandArpSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl ArpSource for CommandArpSource {
    fn raw_table(&self) -> Result<String, ArpSourceError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|source| ArpSourceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            debug!("`{}` exited with {}", self.program, output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Reads a captured listing from a file, or stdin when the path is `-`.
pub struct FileArpSource {
    path: PathBuf,
}

impl FileArpSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArpSource for FileArpSource {
    fn raw_table(&self) -> Result<String, ArpSourceError> {
        let read_err = |source| ArpSourceError::Read {
            path: self.path.clone(),
            source,
        };

        let bytes = if self.path.as_os_str() == "-" {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf).map_err(read_err)?;
            buf
        } else {
            fs::read(&self.path).map_err(read_err)?
        };

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub fn arp_source_from_config(cfg: &ArpSourceConfig) -> Box<dyn ArpSource> {
    match cfg {
        ArpSourceConfig::Command { program, args } => {
            Box::new(CommandArpSource::new(program.clone(), args.clone()))
        }
        ArpSourceConfig::File(path) => Box::new(FileArpSource::new(path.clone())),
    }
}

/// Fetches and parses the ARP table.
///
/// A source that cannot be read counts as an empty table.
pub fn read_arp_table<S: ArpSource + ?Sized>(source: &S) -> Vec<ArpEntry> {
    match source.raw_table() {
        Ok(raw) => parse_arp_table(&raw),
        Err(e) => {
            debug!("{e}");
            Vec::new()
        }
    }
}

/// Parses `arp -an` output, keeping listing order and skipping lines that
/// don't fit the grammar.
pub fn parse_arp_table(raw: &str) -> Vec<ArpEntry> {
    let mut skipped = 0usize;
    let entries: Vec<ArpEntry> = raw
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|line| {
            let entry = parse_arp_line(line);
            if entry.is_none() {
                skipped += 1;
                debug!("skipping ARP line: {line}");
            }
            entry
        })
        .collect();

    info!("parsed {} ARP entries, skipped {}", entries.len(), skipped);
    entries
}

/// Parses a single line of the form
///
/// `? (192.168.1.10) at 18:e8:29:4f:90:b9 on lagg1 expires in 630 seconds [ethernet]`
///
/// `expires in N seconds` and `permanent` are optional and must directly
/// follow the interface, in that order. Anything after them is ignored.
pub fn parse_arp_line(line: &str) -> Option<ArpEntry> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let [_host, ip, "at", mac, "on", interface, rest @ ..] = tokens.as_slice() else {
        return None;
    };

    let ip: IpAddr = ip
        .strip_prefix('(')?
        .strip_suffix(')')?
        .parse()
        .ok()?;
    let mac = parse_colon_mac(mac).ok()?;

    let (expires, rest) = match rest {
        ["expires", "in", secs, "seconds", tail @ ..] => match secs.parse::<u64>() {
            Ok(secs) => (secs, tail),
            Err(_) => (0, rest),
        },
        _ => (0, rest),
    };
    let permanent = rest.first() == Some(&"permanent");

    Some(ArpEntry {
        ip,
        mac,
        interface: interface.to_string(),
        expires,
        permanent,
    })
}
