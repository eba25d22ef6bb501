pub mod derive;
pub mod probe;
pub mod scan;
pub mod seed;

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use seedscan_common::config::{
    DEFAULT_CONCURRENCY, DEFAULT_COUNT, DEFAULT_PORT, DEFAULT_TIMEOUT, ScanConfig,
};
use seedscan_common::network::candidate::CandidateList;
use seedscan_common::seed::DEFAULT_SEED;

#[derive(Parser)]
#[command(name = "seedscan")]
#[command(about = "Derive addresses from a seed and find the ones that answer.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Reduce output, repeat for less (-qq)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not listen for 'q' during a scan
    #[arg(long, global = true)]
    pub disable_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the addresses derived from a seed
    #[command(alias = "d")]
    Derive(SeedArgs),
    /// Check whether the first derived address answers
    #[command(alias = "p")]
    Probe(ProbeArgs),
    /// Probe every derived address
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// Print a random seed
    #[command(alias = "r")]
    Seed,
}

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Text the addresses are derived from
    #[arg(default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Number of addresses to derive before the local range is appended
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,
}

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// TCP port every probe connects to
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Handshake timeout per probe, in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(flatten)]
    pub connect: ConnectArgs,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Number of probes running at once
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Probe only the first N candidates
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ConnectArgs {
    fn apply(&self, cfg: &mut ScanConfig) {
        cfg.port = self.port;
        cfg.timeout = Duration::from_millis(self.timeout_ms);
    }
}

impl ProbeArgs {
    pub fn scan_config(&self) -> ScanConfig {
        let mut cfg = ScanConfig {
            count: self.seed.count,
            ..ScanConfig::default()
        };
        self.connect.apply(&mut cfg);
        cfg
    }
}

impl ScanArgs {
    /// Applies `--limit` to a derived list.
    pub fn select(&self, candidates: CandidateList) -> CandidateList {
        match self.limit {
            Some(limit) => candidates.truncated(limit),
            None => candidates,
        }
    }

    pub fn scan_config(&self) -> ScanConfig {
        let mut cfg = ScanConfig {
            count: self.seed.count,
            concurrency: self.concurrency,
            ..ScanConfig::default()
        };
        self.connect.apply(&mut cfg);
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_line_is_consistent() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn scan_defaults_match_engine_defaults() {
        let cli = CommandLine::try_parse_from(["seedscan", "scan"]).unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.seed.seed, DEFAULT_SEED);
        assert_eq!(args.scan_config(), ScanConfig::default());
        assert_eq!(args.limit, None);
    }

    #[test]
    fn limit_keeps_leading_candidates() {
        let cli = CommandLine::try_parse_from(["seedscan", "scan", "seedA", "-l", "3"]).unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        let derived = seedscan_common::seed::derive(&args.seed.seed, args.seed.count).unwrap();
        let selected = args.select(derived.clone());
        assert_eq!(selected.len(), 3);
        assert_eq!(selected.as_slice(), &derived.as_slice()[..3]);
        assert_eq!(selected.seed(), Some("seedA"));

        let cli = CommandLine::try_parse_from(["seedscan", "scan", "seedA"]).unwrap();
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.select(derived.clone()), derived);
    }

    #[test]
    fn scan_flags_override_defaults() {
        let cli = CommandLine::try_parse_from([
            "seedscan", "-qq", "s", "nexus-4821", "-n", "40", "-c", "32", "-p", "9000",
            "--timeout-ms", "250",
        ])
        .unwrap();
        assert_eq!(cli.quiet, 2);
        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        let cfg = args.scan_config();
        assert_eq!(args.seed.seed, "nexus-4821");
        assert_eq!(cfg.count, 40);
        assert_eq!(cfg.concurrency, 32);
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.timeout, Duration::from_millis(250));
    }
}
