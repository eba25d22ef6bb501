use colored::*;
use tracing::{Instrument, Span, debug, info_span};

use seedscan_common::{
    config::Config,
    scanning::{ScanProgress, ScanReport},
    seed, success, warn,
};
use seedscan_core::network::tcp::TcpProber;
use seedscan_core::scanner::{ScanCoordinator, ScanHandle};

use crate::sprint;
use crate::terminal::{colors, format, input::InputHandle, print, spinner};

use super::{ScanArgs, derive};

pub async fn scan(args: &ScanArgs, cfg: &Config) -> anyhow::Result<()> {
    let scan_cfg = args.scan_config();
    let candidates = args.select(seed::derive(&args.seed.seed, scan_cfg.count)?);
    derive::print_overview(&candidates, scan_cfg.count, cfg);

    let coordinator = ScanCoordinator::new(TcpProber::from(&scan_cfg), scan_cfg.concurrency)?;
    let mut handle: ScanHandle = coordinator.start_scan(candidates, scan_cfg.concurrency)?;
    let total: usize = handle.total();

    let span = info_span!("scan", indicatif.pb_show = true);
    let report: Option<ScanReport> = follow_progress(&mut handle, span.clone(), cfg)
        .instrument(span)
        .await;

    match report {
        Some(report) => scan_ends(&report, cfg),
        None => warn!(
            "scan cancelled after {}/{} probes",
            handle.completed(),
            total
        ),
    }

    coordinator.shutdown().await;
    Ok(())
}

/// Drives the progress bar until the event stream closes, then collects the report.
async fn follow_progress(handle: &mut ScanHandle, span: Span, cfg: &Config) -> Option<ScanReport> {
    let input: Option<InputHandle> =
        (!cfg.disable_input).then(|| InputHandle::start(handle.canceller()));
    spinner::start_scan_bar(&span, handle.total(), input.is_some());

    if let Some(mut progress) = handle.subscribe() {
        while let Some(event) = progress.recv().await {
            on_progress(&span, &event);
        }
    }

    drop(input);
    handle.report().await
}

fn on_progress(span: &Span, event: &ScanProgress) {
    spinner::report_scan_progress(span, event);
    if event.last.reachable {
        debug!(addr = %event.last.addr, "peer answered");
    }
}

fn scan_ends(report: &ScanReport, cfg: &Config) {
    if cfg.quiet == 0 {
        print::header("scan report", cfg.quiet);
        print::set_key_width(["Seed", "Reachable", "Duration"]);
        print::aligned_line("Seed", report.seed.as_deref().unwrap_or("-").color(colors::ACCENT));
        print::aligned_line("Reachable", format::ratio(report.reachable_count(), report.total));
        print::aligned_line("Duration", format::elapsed(report.elapsed));
    }

    if report.reachable.is_empty() {
        print::header("no reachable peers", cfg.quiet);
        print::no_results(cfg.quiet);
    } else {
        print::header("reachable peers", cfg.quiet);
        if cfg.quiet < 2 {
            print::numbered_list(format::candidates(&report.reachable));
        }
    }
    print_summary(report, cfg);
}

fn summary_line(report: &ScanReport) -> ColoredString {
    format!(
        "Scan Complete: {} reachable in {}",
        format::ratio(report.reachable_count(), report.total),
        format::elapsed(report.elapsed).bold()
    )
    .color(colors::TEXT_DEFAULT)
}

fn print_summary(report: &ScanReport, cfg: &Config) {
    let output: String = summary_line(report).to_string();

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            sprint!();
            success!("{}", output);
        }
    }
}
