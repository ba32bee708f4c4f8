//! # Line Protocol Output
//!
//! One record per ARP entry:
//!
//! ```text
//! arp_table,host=fw01,mac=18:e8:29:4f:90:b9,vendor=VMware\,\ Inc.,interface=lagg1,ip=192.168.1.10 expires=630,permanent=0
//! ```
//!
//! Tag values are escaped. Field values are integers and never need it.

use std::io::{self, Write};

use arptag_common::network::arp::ArpEntry;
use arptag_common::vendors::VendorRepository;

/// Escapes a tag key or value: `,`, ` ` and `=` get a leading backslash.
pub fn escape_tag(value: &str) -> String {
    escape(value, &[',', ' ', '='])
}

/// Escapes a measurement name: `,` and ` ` get a leading backslash.
pub fn escape_measurement(value: &str) -> String {
    escape(value, &[',', ' '])
}

fn escape(value: &str, special: &[char]) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if special.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Renders one record without the trailing newline.
pub fn format_record(measurement: &str, host: &str, entry: &ArpEntry, vendor: &str) -> String {
    format!(
        "{},host={},mac={},vendor={},interface={},ip={} expires={},permanent={}",
        escape_measurement(measurement),
        escape_tag(host),
        escape_tag(&entry.mac.to_string()),
        escape_tag(vendor),
        escape_tag(&entry.interface),
        escape_tag(&entry.ip.to_string()),
        entry.expires,
        u8::from(entry.permanent),
    )
}

/// Writes records for one host to an output stream, in the order given.
pub struct LineProtocolWriter<W: Write> {
    out: W,
    measurement: String,
    host: String,
    written: usize,
}

impl<W: Write> LineProtocolWriter<W> {
    pub fn new(out: W, measurement: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            out,
            measurement: measurement.into(),
            host: host.into(),
            written: 0,
        }
    }

    pub fn write_entry<R>(&mut self, entry: &ArpEntry, vendors: &R) -> io::Result<()>
    where
        R: VendorRepository + ?Sized,
    {
        let vendor = vendors.vendor_or_unknown(&entry.mac.to_string());
        let record = format_record(&self.measurement, &self.host, entry, vendor);
        writeln!(self.out, "{record}")?;
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and hands back the underlying stream.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
