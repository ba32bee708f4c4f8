mod commands;
mod terminal;

use std::io;

use tracing::{debug, error};

use arptag_core::collector;
use commands::CommandLine;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.level_filter(), commands.no_color);

    let cfg = commands.into_config();

    // Nothing here is fatal: a failed write is logged and the exit status
    // stays 0. The advisory goes to stderr unformatted, outside the log filter.
    match collector::collect(&cfg, io::stdout().lock(), io::stderr().lock()) {
        Ok(report) => debug!(
            "vendors: {}, records: {}, advisory: {}",
            report.vendors, report.records, report.advisory
        ),
        Err(e) => error!("{e:#}"),
    }

    Ok(())
}
