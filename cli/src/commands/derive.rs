use colored::*;
use seedscan_common::{config::Config, network::candidate::CandidateList, seed, success};

use crate::sprint;
use crate::terminal::{colors, format, print};

use super::SeedArgs;

pub fn derive(args: &SeedArgs, cfg: &Config) -> anyhow::Result<()> {
    let candidates: CandidateList = seed::derive(&args.seed, args.count)?;

    print::header("derived candidates", cfg.quiet);
    print_overview(&candidates, args.count, cfg);
    if cfg.quiet < 2 {
        print::numbered_list(format::candidates(&candidates));
    }

    if cfg.quiet > 0 {
        sprint!();
    }
    success!(
        "{} candidates derived",
        candidates.len().to_string().color(colors::ACCENT).bold()
    );
    Ok(())
}

pub(super) fn print_overview(candidates: &CandidateList, count: usize, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print::set_key_width(["Seed", "Derived", "Candidates"]);
    print::aligned_line("Seed", candidates.seed().unwrap_or("-").color(colors::ACCENT));
    print::aligned_line("Derived", count.to_string());
    print::aligned_line("Candidates", candidates.len().to_string());
}
