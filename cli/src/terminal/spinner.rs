use colored::*;
use indicatif::ProgressStyle;
use seedscan_common::scanning::ScanProgress;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

pub fn scan_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} [{bar:32.green/bright_black}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(TICKS)
        .progress_chars("━╸─")
}

/// Attaches a spinner showing `msg` to `span`.
pub fn start_spinner(span: &Span, msg: String) {
    span.pb_set_style(&spinner_style());
    span.pb_set_message(&msg);
}

/// Turns `span` into a scan progress bar over `total` probes.
pub fn start_scan_bar(span: &Span, total: usize, interruptible: bool) {
    span.pb_set_style(&scan_style());
    span.pb_set_length(total as u64);
    span.pb_set_position(0);
    if interruptible {
        span.pb_set_message(&format!("{}", "press 'q' to cancel".italic().white()));
    }
}

pub fn report_scan_progress(span: &Span, progress: &ScanProgress) {
    span.pb_set_position(progress.completed as u64);
    span.pb_set_message(&format!(
        "{} reachable",
        progress.reachable_count.to_string().green().bold()
    ));
}
