use colored::*;
use seedscan_common::{config::Config, seed};

use crate::sprint;
use crate::terminal::{colors, print};

pub fn seed(cfg: &Config) -> anyhow::Result<()> {
    let seed: String = seed::random_seed();
    if cfg.quiet > 0 {
        // Bare value so it can be captured by scripts.
        sprint!(&seed);
        return Ok(());
    }
    print::header("fresh seed", cfg.quiet);
    print::set_key_width(["Seed"]);
    print::aligned_line("Seed", seed.color(colors::ACCENT).bold());
    Ok(())
}
