use std::fmt;

use colored::*;
use seedscan_common::log::{PRINT_TARGET, SUCCESS_TARGET};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber.
///
/// Log lines are routed through the indicatif layer so they print above any
/// active progress bar instead of tearing it.
pub fn init_logging() {
    let indicatif_layer = IndicatifLayer::new();

    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // Terminal output must survive a stricter RUST_LOG.
    for target in [PRINT_TARGET, SUCCESS_TARGET] {
        if let Ok(directive) = format!("{target}=info").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(SeedscanFormatter)
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .init();
}

pub struct SeedscanFormatter;

impl<S, N> FormatEvent<S, N> for SeedscanFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            if meta.target() == SUCCESS_TARGET {
                ("[+]", |s| s.green().bold())
            } else {
                match *meta.level() {
                    Level::TRACE => ("[ ]", |s| s.dimmed()),
                    Level::DEBUG => ("[?]", |s| s.blue()),
                    Level::INFO => ("[*]", |s| s.cyan().bold()),
                    Level::WARN => ("[!]", |s| s.yellow().bold()),
                    Level::ERROR => ("[-]", |s| s.red().bold()),
                }
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(String);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = format!("{value:?}");
        }
    }
}
