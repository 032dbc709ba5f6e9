use clap::Parser;
use tracing_subscriber::EnvFilter;

use syntax_guard::cli::{Cli, Commands};
use syntax_guard::commands::{run_check, run_formats};

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("syntax_guard={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Formats(args) => run_formats(args, &cli),
    };

    std::process::exit(exit_code);
}
