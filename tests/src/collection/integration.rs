#![cfg(test)]
use std::fs;

use arptag_common::config::{ArpSourceConfig, Config};
use arptag_core::collector::{self, CollectReport, MISSING_VENDOR_DB_ADVISORY};

use crate::utils::{ARP_LISTING, config, fixture};

const NMAP_EXPECTED: &str = r"arp_table,host=myhost,mac=00:0c:29:aa:bb:cc,vendor=VMware,interface=lagg1,ip=192.168.1.1 expires=0,permanent=1
arp_table,host=myhost,mac=18:e8:29:4f:90:b9,vendor=VMware\,\ Inc.,interface=lagg1,ip=192.168.1.10 expires=630,permanent=0
arp_table,host=myhost,mac=02:42:ac:11:00:02,vendor=Unknown,interface=lagg1.30,ip=192.168.1.42 expires=1199,permanent=0
arp_table,host=myhost,mac=ac:de:48:00:11:22,vendor=Private,interface=igb2,ip=10.10.0.7 expires=5,permanent=0
";

/// Stdout, stderr and the report of one run.
struct Run {
    out: String,
    diag: Vec<String>,
    report: CollectReport,
}

fn run(cfg: &Config) -> Run {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let report = collector::collect(cfg, &mut out, &mut diag).expect("collection failed");
    Run::new(out, diag, report)
}

fn run_with_listing(cfg: &Config) -> Run {
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let report =
        collector::collect_from(cfg, ARP_LISTING, &mut out, &mut diag).expect("collection failed");
    Run::new(out, diag, report)
}

impl Run {
    fn new(out: Vec<u8>, diag: Vec<u8>, report: CollectReport) -> Self {
        let diag = String::from_utf8(diag).expect("diagnostics are not UTF-8");
        Self {
            out: String::from_utf8(out).expect("output is not UTF-8"),
            diag: diag.lines().map(str::to_string).collect(),
            report,
        }
    }

    fn assert_single_advisory(&self) {
        assert!(self.report.advisory);
        assert_eq!(self.diag, MISSING_VENDOR_DB_ADVISORY);
    }
}

/// Full run against the nmap database, reading the listing from a file the
/// same way `--arp-file` does.
#[test]
fn nmap_database_end_to_end() {
    let mut cfg = config(vec![fixture("nmap-mac-prefixes")]);
    cfg.arp_source = ArpSourceConfig::File(fixture("arp-an.txt"));

    let run = run(&cfg);

    assert_eq!(run.out, NMAP_EXPECTED);
    assert!(run.diag.is_empty());
    assert_eq!(
        run.report,
        CollectReport {
            vendors: 3,
            records: 4,
            advisory: false
        }
    );
}

#[test]
fn ieee_database_end_to_end() {
    let run = run_with_listing(&config(vec![fixture("oui.txt")]));
    let vendors: Vec<&str> = run
        .out
        .lines()
        .map(|l| l.split(",vendor=").nth(1).unwrap().split(",interface=").next().unwrap())
        .collect();

    assert_eq!(run.report.vendors, 2);
    assert_eq!(vendors, [r"VMware\,\ Inc.", r"Ubiquiti\ Inc", "Unknown", "Unknown"]);
    assert!(run.diag.is_empty());
}

#[test]
fn only_first_existing_database_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(vec![
        dir.path().join("nmap-mac-prefixes"),
        fixture("oui.txt"),
        fixture("nmap-mac-prefixes"),
    ]);

    let run = run_with_listing(&cfg);

    assert_eq!(run.report.vendors, 2);
    assert!(run.out.contains(r",vendor=Ubiquiti\ Inc,"));
    // ACDE48 only exists in the nmap file, which must not be consulted.
    assert!(!run.out.contains("vendor=Private"));
}

#[test]
fn first_existing_database_wins_even_when_empty() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("oui.txt");
    fs::write(&empty, "# placeholder\n").unwrap();

    let run = run_with_listing(&config(vec![empty, fixture("nmap-mac-prefixes")]));

    assert_eq!(run.report.vendors, 0);
    run.assert_single_advisory();
}

#[test]
fn missing_database_degrades_to_unknown_vendors() {
    let dir = tempfile::tempdir().unwrap();
    let run = run_with_listing(&config(vec![dir.path().join("a"), dir.path().join("b")]));

    run.assert_single_advisory();
    assert_eq!(run.report.records, 4);
    assert_eq!(run.out.lines().count(), 4);
    assert!(run.out.lines().all(|l| l.contains(",vendor=Unknown,")));
}

#[test]
fn unreadable_database_adds_no_extra_diagnostics() {
    // Exists, so it is selected, but a directory cannot be read as a file.
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(vec![dir.path().to_path_buf(), fixture("nmap-mac-prefixes")]);
    cfg.arp_source = ArpSourceConfig::File(fixture("arp-an.txt"));

    let run = run(&cfg);

    run.assert_single_advisory();
    assert_eq!(run.report.records, 4);
}

#[test]
fn unreadable_arp_source_reports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(vec![fixture("nmap-mac-prefixes")]);
    cfg.arp_source = ArpSourceConfig::File(dir.path().join("no-listing"));

    let run = run(&cfg);

    assert!(run.out.is_empty());
    assert!(run.diag.is_empty());
    assert_eq!(run.report.records, 0);
    assert!(!run.report.advisory);
}

#[test]
fn failing_arp_source_and_missing_database_give_one_advisory() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(vec![dir.path().join("missing")]);
    cfg.arp_source = ArpSourceConfig::Command {
        program: "arptag-missing-arp-binary".into(),
        args: vec!["-an".into()],
    };

    let run = run(&cfg);

    assert!(run.out.is_empty());
    assert_eq!(run.report.records, 0);
    run.assert_single_advisory();
}

#[test]
fn arp_command_that_cannot_spawn_reports_nothing() {
    let mut cfg = config(vec![fixture("nmap-mac-prefixes")]);
    cfg.arp_source = ArpSourceConfig::Command {
        program: "arptag-missing-arp-binary".into(),
        args: vec!["-an".into()],
    };

    let run = run(&cfg);

    assert!(run.out.is_empty());
    assert!(run.diag.is_empty());
    assert_eq!(run.report.records, 0);
}
