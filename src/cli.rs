use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the per-user config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log pipeline details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map selected haplogroups and build the movement animation for one of them
    Track {
        /// Sample table (TSV or CSV, optionally compressed)
        dataset: PathBuf,
        /// MtDNA, MtDNA-Male, MtDNA-Female or Y-Chromosome
        #[arg(short, long, default_value = "MtDNA")]
        mode: String,
        /// Haplogroup to include (repeat or comma-separate)
        #[arg(short = 'g', long = "haplogroup", value_delimiter = ',')]
        haplogroups: Vec<String>,
        /// Haplogroup to animate (default: the first selected)
        #[arg(short, long)]
        animate: Option<String>,
        /// Output file for the map and animation data
        #[arg(short = 'o', long = "output", default_value = "track.json")]
        output_file: PathBuf,
        /// Field delimiter (default: inferred from the file extension)
        #[arg(long)]
        delimiter: Option<char>,
    },

    /// List the most frequent haplogroups for a mode
    Rank {
        /// Sample table (TSV or CSV, optionally compressed)
        dataset: PathBuf,
        #[arg(short, long, default_value = "MtDNA")]
        mode: String,
        /// Number of haplogroups to list (default: from config, 20)
        #[arg(short = 'n', long)]
        top: Option<usize>,
        /// Output file; `.json` writes an export record, anything else TSV (default: stdout)
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
        #[arg(long)]
        delimiter: Option<char>,
    },

    /// Summarize samples by region, period and risk score
    Explore {
        /// Sample table (TSV or CSV, optionally compressed)
        dataset: PathBuf,
        /// Add haplogroup breakdowns for this mode
        #[arg(short, long)]
        mode: Option<String>,
        #[arg(short = 'o', long = "output", default_value = "exploration.json")]
        output_file: PathBuf,
        #[arg(long)]
        delimiter: Option<char>,
    },

    /// Show or initialize the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration to the per-user config directory
    Init {
        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}
