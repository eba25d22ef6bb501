//! # Scan Models
//!
//! Values passed from the scan engine to whoever drives it.

use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

/// Outcome of probing a single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub addr: Ipv4Addr,
    pub reachable: bool,
}

/// Emitted once per finished probe, in the order probes finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    pub completed: usize,
    pub total: usize,
    pub reachable_count: usize,
    /// The probe that produced this event.
    pub last: ProbeResult,
}

/// Lifecycle of a scan job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl fmt::Display for ScanState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScanState::Idle => "idle",
            ScanState::Running => "running",
            ScanState::Completed => "completed",
            ScanState::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Final snapshot of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub total: usize,
    /// Reachable addresses in the order their probes finished.
    pub reachable: Vec<Ipv4Addr>,
    pub elapsed: Duration,
    pub seed: Option<String>,
}

impl ScanReport {
    pub fn reachable_count(&self) -> usize {
        self.reachable.len()
    }
}
