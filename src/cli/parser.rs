use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for warestat
/// CLI application to analyze warehouse task-confirmation exports
#[derive(Parser)]
#[command(
    name = "warestat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze warehouse task exports: per-worker task counts, weights, active time and breaks",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for problems")]
        check: bool,
    },

    /// Analyze one or more export files and print the summary table
    Analyze {
        /// Input export files (CSV); several files are merged before analysis
        #[arg(required = true)]
        files: Vec<String>,

        /// Worker→company reference file (overrides the configured one)
        #[arg(long, value_name = "FILE")]
        employees: Option<String>,

        /// Itemize detected breaks per worker
        #[arg(long)]
        breaks: bool,

        /// Show the per-hour task distribution (09:00–20:00)
        #[arg(long)]
        hourly: bool,
    },

    /// Analyze export files and write the summary table to a file
    Export {
        /// Input export files (CSV); several files are merged before analysis
        #[arg(required = true)]
        files: Vec<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (absolute path)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Worker→company reference file (overrides the configured one)
        #[arg(long, value_name = "FILE")]
        employees: Option<String>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
