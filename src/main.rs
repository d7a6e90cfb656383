use clap::Parser;
use haplo_tracker::cli::{self, Commands};
use haplo_tracker::commands;
use haplo_tracker::config::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
        None => Config::load(),
    };

    let result = match args.command {
        Commands::Track {
            dataset,
            mode,
            haplogroups,
            animate,
            output_file,
            delimiter,
        } => commands::track::run(
            dataset,
            mode,
            haplogroups,
            animate,
            output_file,
            delimiter,
            &config,
        ),
        Commands::Rank {
            dataset,
            mode,
            top,
            output_file,
            delimiter,
        } => commands::rank::run(dataset, mode, top, output_file, delimiter, &config),
        Commands::Explore {
            dataset,
            mode,
            output_file,
            delimiter,
        } => commands::explore::run(dataset, mode, output_file, delimiter, &config),
        Commands::Config { action } => commands::config::run(action, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "haplo_tracker=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
