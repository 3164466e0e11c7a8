use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the inspection subcommands.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

/// Command-line interface for the `skillgap` application.
#[derive(Debug, Parser)]
#[command(
    name = "skillgap",
    about = "Skill-gap analysis over employee, role, and course records"
)]
pub struct Cli {
    /// Directory containing the input CSV snapshot.
    #[arg(long, value_name = "DIR", env = "SKILLGAP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available `skillgap` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Runs the full analysis and writes the four report files (default).
    Run {
        /// Directory the report files are written to.
        #[arg(long, value_name = "DIR", env = "SKILLGAP_OUT_DIR")]
        out_dir: Option<PathBuf>,
        /// Ranking depth of the critical-skill report.
        #[arg(long, value_name = "N", env = "SKILLGAP_TOP_N")]
        top_n: Option<usize>,
    },
    /// Prints the per-role summary.
    Summary {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// Prints the top-N critical skills.
    Critical {
        /// Ranking depth.
        #[arg(long, value_name = "N", env = "SKILLGAP_TOP_N")]
        top_n: Option<usize>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
    /// Prints the training recommendations for all unresolved gaps.
    Recommend {
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}
