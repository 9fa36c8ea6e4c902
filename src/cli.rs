use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aqua-calc")]
#[command(about = "Water-quality spectral index calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output file path (- writes to stdout)
    #[arg(short, long, default_value = "-", global = true)]
    pub output: PathBuf,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Treat input values as raw digital numbers divided by this factor
    /// (Sentinel-2 L2A uses 10000)
    #[arg(long, global = true)]
    pub dn_scale: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indices for a single band sample
    Compute {
        /// Band sample JSON file (- reads stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Index to compute, repeatable (default: whole catalog);
        /// unknown names are ignored
        #[arg(short = 'x', long = "index")]
        indexes: Vec<String>,
    },

    /// Evaluate a dated sample series: cloud-masked median composite per
    /// date, then every selected index
    Series {
        /// Sample series JSON file (- reads stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Index to compute, repeatable (default: whole catalog)
        #[arg(short = 'x', long = "index")]
        indexes: Vec<String>,
    },

    /// Chart statistics for a series: per-date values by index, rounded
    /// to two decimal places
    Stats {
        /// Sample series JSON file (- reads stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Index to include, repeatable (default: whole catalog)
        #[arg(short = 'x', long = "index")]
        indexes: Vec<String>,
    },

    /// Run multiple evaluation jobs from a JSON configuration file
    Batch {
        /// Batch configuration file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Print the index catalog: formulas, units, ranges, references
    List {
        /// Show a single index in detail
        index: Option<String>,
    },
}
