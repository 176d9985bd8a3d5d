//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi Profile.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Command-line front end: profile a CSV file and write its reports.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use zi_profile::{
    ZiCsvReader, ZiDatasetProfile, ZiLogConfig, ZiLogger, ZiProfiler, ZiProfilerConfig,
    ZiReportWriter, ZiWriterConfig,
};

#[derive(Debug, Parser)]
#[command(name = "zi-profile", version, about = "Profile CSV files into JSON and Markdown reports")]
struct Cli {
    /// Minimum log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit log lines as JSON objects
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Profile a CSV file and save the reports
    Profile {
        /// CSV file to analyze
        csv_file: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "outputs")]
        output: PathBuf,

        /// Report name, used as the file stem of both reports
        #[arg(short, long, default_value = "report")]
        name: String,

        /// Print a summary table to the terminal
        #[arg(short, long)]
        show: bool,

        /// Number of most frequent values listed for text columns
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Profiler configuration file (.json, .yaml or .yml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = ZiLogConfig {
        level: cli.log_level.clone(),
        json_format: cli.log_json,
    };
    if let Err(err) = ZiLogger::init(&log_config) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Version => {
            println!("Zi Profile v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Command::Profile {
            csv_file,
            output,
            name,
            show,
            top_k,
            config,
        } => {
            let mut profiler_config = match &config {
                Some(path) => ZiProfilerConfig::from_path(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => ZiProfilerConfig::default(),
            };
            if let Some(top_k) = top_k {
                profiler_config.top_k = top_k;
            }
            let profiler = ZiProfiler::with_config(profiler_config)?;

            println!("Reading: {}", csv_file.display());
            let rows = ZiCsvReader::new()
                .read_path(&csv_file)
                .with_context(|| format!("reading {}", csv_file.display()))?;

            if rows.is_empty() {
                eprintln!("warning: {} has no data rows", csv_file.display());
                return Ok(ExitCode::FAILURE);
            }
            println!("Loaded {} rows", rows.len());

            let profile = profiler.profile(&rows);
            println!("Analyzed {} columns", profile.n_cols);

            if show {
                print_summary(&profile);
            }

            let writer = ZiReportWriter::new().with_config(ZiWriterConfig {
                output_dir: output.clone(),
                name,
                atomic_write: true,
            });
            let reports = writer
                .write(&profile)
                .with_context(|| format!("writing reports to {}", output.display()))?;

            println!("Saved JSON: {}", reports.json_path.display());
            println!("Saved Markdown: {}", reports.markdown_path.display());
            println!("Done. Reports in: {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_summary(profile: &ZiDatasetProfile) {
    println!();
    println!("Rows: {} | Columns: {}", profile.n_rows, profile.n_cols);

    let name_width = profile
        .columns
        .iter()
        .map(|column| column.name.chars().count())
        .chain(std::iter::once("Column".len()))
        .max()
        .unwrap_or(0);

    println!(
        "{:<name_width$}  {:<6}  {:>7}  {:>7}  {:>7}",
        "Column", "Type", "Count", "Missing", "Unique"
    );
    for column in &profile.columns {
        println!(
            "{:<name_width$}  {:<6}  {:>7}  {:>7}  {:>7}",
            column.name,
            column.column_type().as_str(),
            column.count(),
            column.missing(),
            column.unique()
        );
    }
    println!();
}
