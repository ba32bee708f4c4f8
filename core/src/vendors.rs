//! # OUI Vendor Database
//!
//! Builds a [`VendorTable`] from the first vendor database file found on disk.
//!
//! Two line formats are understood:
//! * **nmap**: `000C29 VMware` (six hex digits, whitespace, name).
//! * **IEEE**: `00-0C-29   (hex)    VMware, Inc.`
//!
//! Anything else, including comments, is skipped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use arptag_common::network::mac::OUI_HEX_LEN;
use arptag_common::vendors::VendorTable;

const IEEE_HEX_MARKER: &str = "(hex)";

#[derive(Debug, Error)]
pub enum VendorDbError {
    #[error("failed to read vendor database {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads vendors from an ordered list of candidate database files.
pub struct OuiFileRepo {
    candidates: Vec<PathBuf>,
}

impl OuiFileRepo {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// The first candidate that exists, if any.
    pub fn selected_path(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.exists())
    }

    /// Reads the first existing candidate.
    ///
    /// Later candidates are never consulted, even when the selected file
    /// parses to nothing. `Ok` with an empty table means no candidate exists.
    pub fn try_load(&self) -> Result<VendorTable, VendorDbError> {
        let Some(path) = self.selected_path() else {
            debug!("no vendor database among {} candidates", self.candidates.len());
            return Ok(VendorTable::new());
        };

        let bytes = fs::read(path).map_err(|source| VendorDbError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = parse_vendor_db(&String::from_utf8_lossy(&bytes));
        info!("loaded {} vendors from {}", table.len(), path.display());

        Ok(table)
    }

    /// Same as [`try_load`](Self::try_load) but an unreadable file degrades to
    /// an empty table.
    pub fn load(&self) -> VendorTable {
        match self.try_load() {
            Ok(table) => table,
            Err(e) => {
                debug!("{e}");
                VendorTable::new()
            }
        }
    }
}

/// Parses a whole database file. Duplicate OUIs keep the last entry.
pub fn parse_vendor_db(text: &str) -> VendorTable {
    let mut table = VendorTable::new();
    let mut skipped = 0usize;

    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        match parse_vendor_line(line) {
            Some((oui, vendor)) => table.insert(oui, vendor),
            None => skipped += 1,
        }
    }

    debug!("vendor database: {} entries, {} lines skipped", table.len(), skipped);
    table
}

/// Parses one database line into an `(OUI, vendor)` pair.
///
/// The nmap form is tried before the IEEE form.
pub fn parse_vendor_line(line: &str) -> Option<(String, String)> {
    parse_nmap_line(line).or_else(|| parse_ieee_line(line))
}

// 000C29 VMware
fn parse_nmap_line(line: &str) -> Option<(String, String)> {
    let bytes = line.as_bytes();
    if bytes.len() <= OUI_HEX_LEN
        || !bytes[..OUI_HEX_LEN].iter().all(u8::is_ascii_hexdigit)
        || !bytes[OUI_HEX_LEN].is_ascii_whitespace()
    {
        return None;
    }

    let vendor = non_empty(&line[OUI_HEX_LEN..])?;
    Some((line[..OUI_HEX_LEN].to_ascii_uppercase(), vendor))
}

// 00-0C-29   (hex)    VMware, Inc.
fn parse_ieee_line(line: &str) -> Option<(String, String)> {
    let bytes = line.as_bytes();
    if bytes.len() < 8
        || bytes[2] != b'-'
        || bytes[5] != b'-'
        || ![0, 1, 3, 4, 6, 7].iter().all(|&i| bytes[i].is_ascii_hexdigit())
    {
        return None;
    }
    let pairs = [&line[0..2], &line[3..5], &line[6..8]];

    let rest = &line[8..];
    if !rest.starts_with(|c: char| c.is_ascii_whitespace()) {
        return None;
    }
    let after_marker = rest.trim_start().strip_prefix(IEEE_HEX_MARKER)?;
    if !after_marker.starts_with(|c: char| c.is_ascii_whitespace()) {
        return None;
    }

    let vendor = non_empty(after_marker)?;
    Some((pairs.concat().to_ascii_uppercase(), vendor))
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
