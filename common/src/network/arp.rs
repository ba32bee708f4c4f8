use std::net::IpAddr;

use pnet::util::MacAddr;

/// One row of the host's ARP table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArpEntry {
    pub ip: IpAddr,
    /// Rendered as colon-separated lowercase octets.
    pub mac: MacAddr,
    pub interface: String,
    /// Seconds until the entry expires, 0 when the listing gave none.
    pub expires: u64,
    pub permanent: bool,
}
