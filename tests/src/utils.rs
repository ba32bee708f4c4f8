#![cfg(test)]
use std::path::PathBuf;

use arptag_common::config::Config;

pub const ARP_LISTING: &str = include_str!("../fixtures/arp-an.txt");

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

pub fn config(vendor_db_paths: Vec<PathBuf>) -> Config {
    let mut cfg = Config::new("myhost");
    cfg.vendor_db_paths = vendor_db_paths;
    cfg
}
