//! # seedscan core
//!
//! The reachability engine: a TCP [`network::tcp::Prober`] and the
//! [`scanner::ScanCoordinator`] that fans probes out over a fixed worker pool.

pub mod network;
pub mod scanner;
