use std::net::Ipv4Addr;
use std::time::Duration;

use crate::terminal::colors;
use colored::*;
use seedscan_common::seed::LOCAL_SUPPLEMENT;

/// Colors an address, marking members of the fixed local range.
pub fn candidate(addr: &Ipv4Addr) -> ColoredString {
    if LOCAL_SUPPLEMENT.contains(*addr) {
        format!("{addr} (local)").color(colors::LOCAL_ADDR)
    } else {
        addr.to_string().color(colors::IPV4_ADDR)
    }
}

pub fn candidates<'a>(addrs: impl IntoIterator<Item = &'a Ipv4Addr>) -> Vec<ColoredString> {
    addrs.into_iter().map(candidate).collect()
}

pub fn reachability(reachable: bool) -> ColoredString {
    if reachable {
        "reachable".color(colors::REACHABLE).bold()
    } else {
        "unreachable".color(colors::UNREACHABLE).bold()
    }
}

/// `"3 of 35"`, with the hit count highlighted.
pub fn ratio(hits: usize, total: usize) -> ColoredString {
    format!(
        "{} of {}",
        hits.to_string().color(colors::ACCENT).bold(),
        total
    )
    .normal()
}

pub fn elapsed(duration: Duration) -> ColoredString {
    format!("{:.2}s", duration.as_secs_f64()).color(colors::ACCENT)
}
