use colored::*;
use tracing::{Instrument, info_span};

use seedscan_common::{config::Config, error, scanning::ProbeResult, seed, success};
use seedscan_core::network::tcp::TcpProber;
use seedscan_core::scanner::ScanCoordinator;

use crate::terminal::{colors, format, print, spinner};

use super::ProbeArgs;

pub async fn probe(args: &ProbeArgs, cfg: &Config) -> anyhow::Result<()> {
    let scan_cfg = args.scan_config();
    let candidates = seed::derive(&args.seed.seed, scan_cfg.count)?;
    let coordinator = ScanCoordinator::new(TcpProber::from(&scan_cfg), scan_cfg.concurrency)?;

    let span = info_span!("probe", indicatif.pb_show = true);
    if let Some(addr) = candidates.first() {
        spinner::start_spinner(&span, format!("connecting to {addr}:{}", scan_cfg.port));
    }
    let result: ProbeResult = coordinator.probe_one(&candidates).instrument(span).await?;
    coordinator.shutdown().await;

    print::header("probe result", cfg.quiet);
    if cfg.quiet == 0 {
        print::set_key_width(["Address", "Port", "Status"]);
        print::aligned_line("Address", format::candidate(&result.addr));
        print::aligned_line("Port", scan_cfg.port.to_string());
        print::aligned_line("Status", format::reachability(result.reachable));
    }

    let target: ColoredString = format!("{}:{}", result.addr, scan_cfg.port).color(colors::IPV4_ADDR);
    if result.reachable {
        success!("{target} accepted the connection");
    } else {
        error!("{target} did not answer");
    }
    Ok(())
}
