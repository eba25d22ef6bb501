use thiserror::Error;

/// Signals the scan engine hands back to its caller.
///
/// Connection failures of individual probes never show up here; a probe only
/// ever reports whether the target answered.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    #[error("seed must contain at least one non-whitespace character")]
    InvalidSeed,
    #[error("a scan is already running on this coordinator")]
    ScanAlreadyInProgress,
    #[error("no candidate addresses to probe")]
    NoCandidates,
    #[error("concurrency must be at least 1")]
    InvalidConcurrency,
}
