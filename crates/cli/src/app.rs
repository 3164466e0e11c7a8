//! Orchestration of one batch run: load, compute, aggregate, report.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use skillgap_engine::{
    analyze, compute_gaps, rank_critical_skills, recommend_training, summarize_roles,
    DEFAULT_TOP_N,
};
use skillgap_loader::load_tables;
use skillgap_report::{
    render_critical_skills, render_json, render_recommendations, render_role_summary,
    write_reports,
};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::{self, Config};

/// Output directory used when neither CLI, environment, nor config file
/// name one.
const DEFAULT_OUT_DIR: &str = "./output";

/// The main entry point for the `skillgap` application.
pub fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = config::load_config(&data_dir)?.unwrap_or_default();

    let tables = load_tables(&data_dir)?;

    match cli.command.unwrap_or(Commands::Run {
        out_dir: None,
        top_n: None,
    }) {
        Commands::Run { out_dir, top_n } => {
            let top_n = effective_top_n(top_n, &config);
            let out_dir = out_dir
                .or_else(|| config.out_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

            let output = analyze(
                &tables.employees,
                &tables.skill_records,
                &tables.role_requirements,
                &tables.courses,
                top_n,
            );
            let paths = write_reports(&output, &out_dir)?;

            info!(
                gap_rows = output.gap_details.len(),
                roles = output.role_summary.len(),
                recommendations = output.recommendations.len(),
                "analysis complete"
            );
            for path in paths {
                println!("{}", path.display());
            }
        }
        Commands::Summary { format } => {
            let gaps = compute_gaps(
                &tables.employees,
                &tables.skill_records,
                &tables.role_requirements,
            );
            let summary = summarize_roles(&gaps);
            let rendered = match format {
                OutputFormat::Csv => render_role_summary(&summary)?,
                OutputFormat::Json => render_json(&summary)?,
            };
            print!("{rendered}");
        }
        Commands::Critical { top_n, format } => {
            let gaps = compute_gaps(
                &tables.employees,
                &tables.skill_records,
                &tables.role_requirements,
            );
            let ranked = rank_critical_skills(&gaps, effective_top_n(top_n, &config));
            let rendered = match format {
                OutputFormat::Csv => render_critical_skills(&ranked)?,
                OutputFormat::Json => render_json(&ranked)?,
            };
            print!("{rendered}");
        }
        Commands::Recommend { format } => {
            let gaps = compute_gaps(
                &tables.employees,
                &tables.skill_records,
                &tables.role_requirements,
            );
            let recommendations = recommend_training(&gaps, &tables.courses);
            let rendered = match format {
                OutputFormat::Csv => render_recommendations(&recommendations)?,
                OutputFormat::Json => render_json(&recommendations)?,
            };
            print!("{rendered}");
        }
    }

    Ok(())
}

/// CLI/env value if given, else config file, else the built-in default.
fn effective_top_n(cli_value: Option<usize>, config: &Config) -> usize {
    cli_value.or(config.top_n).unwrap_or(DEFAULT_TOP_N)
}
