use std::io::{self, BufWriter, Write};

use anyhow::Context;
use tracing::{debug, info};

use arptag_common::config::Config;
use arptag_common::system::ArpSource;

use crate::line_protocol::LineProtocolWriter;
use crate::system::{arp_source_from_config, read_arp_table};
use crate::vendors::OuiFileRepo;

/// Written verbatim to the diagnostic stream when no vendors could be loaded.
pub const MISSING_VENDOR_DB_ADVISORY: [&str; 2] = [
    "Warning: MAC vendor database not found. Install nmap package or download OUI database.",
    "Run: pkg install pfSense-pkg-nmap",
];

/// What a single collection run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectReport {
    pub vendors: usize,
    pub records: usize,
    /// Whether the missing-database advisory was emitted.
    pub advisory: bool,
}

/// Collects using the ARP source named in the config.
pub fn collect<W, E>(cfg: &Config, out: W, diag: E) -> anyhow::Result<CollectReport>
where
    W: Write,
    E: Write,
{
    let source = arp_source_from_config(&cfg.arp_source);
    collect_from(cfg, source.as_ref(), out, diag)
}

/// Loads vendors, reads the ARP table and writes one record per entry to `out`.
///
/// `diag` receives the advisory and nothing else, so it is not subject to log
/// filtering. Missing vendors or an unreadable ARP source never fail the run.
/// The only error returned is a failed write to `out`.
pub fn collect_from<S, W, E>(
    cfg: &Config,
    source: &S,
    out: W,
    mut diag: E,
) -> anyhow::Result<CollectReport>
where
    S: ArpSource + ?Sized,
    W: Write,
    E: Write,
{
    let vendors = OuiFileRepo::new(cfg.vendor_db_paths.clone()).load();
    let entries = read_arp_table(source);

    let advisory = vendors.is_empty();
    if advisory {
        if let Err(e) = write_advisory(&mut diag) {
            debug!("failed to write advisory: {e}");
        }
    }

    let mut writer = LineProtocolWriter::new(BufWriter::new(out), &cfg.measurement, &cfg.host);
    for entry in &entries {
        writer
            .write_entry(entry, &vendors)
            .context("failed to write record")?;
    }
    let records = writer.written();
    writer.finish().context("failed to flush records")?;

    info!("emitted {records} records");

    Ok(CollectReport {
        vendors: vendors.len(),
        records,
        advisory,
    })
}

fn write_advisory<E: Write>(diag: &mut E) -> io::Result<()> {
    for line in MISSING_VENDOR_DB_ADVISORY {
        writeln!(diag, "{line}")?;
    }
    diag.flush()
}
