mod commands;
mod terminal;

use commands::{CommandLine, Commands, derive, probe, scan, seed};
use seedscan_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        disable_input: commands.disable_input,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match &commands.command {
        Commands::Derive(args) => derive::derive(args, &cfg),
        Commands::Probe(args) => {
            print::header("probing first candidate", cfg.quiet);
            probe::probe(args, &cfg).await
        }
        Commands::Scan(args) => {
            print::header("starting scanner", cfg.quiet);
            scan::scan(args, &cfg).await
        }
        Commands::Seed => seed::seed(&cfg),
    };

    print::end_of_program(cfg.quiet);
    result
}
