use std::time::Duration;

/// Port every reachability probe connects to.
pub const DEFAULT_PORT: u16 = 8080;
/// Time a single probe waits for the TCP handshake.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2_000);
/// Number of workers in a coordinator's pool.
pub const DEFAULT_CONCURRENCY: usize = 10;
/// Number of addresses derived from a seed before the local supplement is appended.
pub const DEFAULT_COUNT: usize = 25;

pub struct Config {
    /// Skips the version banner on startup.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops headers and separators, `2` prints summaries only.
    pub quiet: u8,
    /// Stops the scan command from reading keystrokes.
    ///
    /// Without it, Ctrl-C ends the process instead of cancelling the scan.
    pub disable_input: bool,
}

/// Engine parameters for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub port: u16,
    pub timeout: Duration,
    pub concurrency: usize,
    pub count: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
            concurrency: DEFAULT_CONCURRENCY,
            count: DEFAULT_COUNT,
        }
    }
}
