use std::io::{self, IsTerminal};

use colored::*;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Renders events as `<symbol> <message>`. At debug verbosity and above the
/// emitting module is included, e.g. `[?] arptag_core::system: skipping ...`.
///
/// Records never pass through here; they are written straight to stdout.
pub struct ArptagFormatter {
    show_target: bool,
}

impl ArptagFormatter {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            show_target: level >= LevelFilter::DEBUG,
        }
    }
}

impl<S, N> FormatEvent<S, N> for ArptagFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        if self.show_target {
            write!(writer, "{}: ", meta.target().dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber. Diagnostics always go to stderr so stdout
/// carries nothing but records. `RUST_LOG` overrides `level`.
pub fn init_logging(level: LevelFilter, no_color: bool) {
    let color = !no_color && io::stderr().is_terminal();
    colored::control::set_override(color);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .event_format(ArptagFormatter::new(level))
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
