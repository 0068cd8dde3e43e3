//! Batch processing command for multiple recognized-text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use finstat_core::SourceReader;
use finstat_core::models::config::FinstatConfig;
use finstat_core::models::statement::{MetricName, Statement};
use finstat_core::statement::{RuleStatementParser, StatementParser};

use super::process::{OutputFormat, format_statement};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV across all files
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Accept blank recognized text as a legitimately empty document
    #[arg(long)]
    allow_blank: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    statement: Option<Statement>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        FinstatConfig::from_file(Path::new(path))?
    } else {
        FinstatConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    // Set up progress bar
    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let reader = if args.allow_blank {
        SourceReader::from_config(&config.source).with_blank_allowed(true)
    } else {
        SourceReader::from_config(&config.source)
    };
    let parser = RuleStatementParser::new();

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = reader.read(&path).map(|text| parser.parse(&text));
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(statement) => {
                results.push(ProcessResult {
                    path: path.clone(),
                    statement: Some(statement),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path: path.clone(),
                        statement: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_with_message("Complete");

    // Write outputs
    let successful: Vec<_> = results.iter().filter(|r| r.statement.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    for result in &successful {
        if let (Some(statement), Some(output_dir)) = (&result.statement, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("statement");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = format_statement(statement, args.format, &config.report)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Cross-file summary: one row per document, one column per metric.
fn write_summary(path: &PathBuf, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec!["filename".to_string(), "status".to_string()];
    header.extend(
        MetricName::ALL
            .iter()
            .map(|m| m.display_name().to_lowercase().replace(' ', "_")),
    );
    header.push("financial_lines".to_string());
    header.push("processing_time_ms".to_string());
    header.push("error".to_string());
    wtr.write_record(&header)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let mut record = vec![filename.to_string()];

        if let Some(statement) = &result.statement {
            record.push("success".to_string());
            for metric in MetricName::ALL {
                record.push(
                    statement
                        .metrics
                        .get(metric)
                        .map(|v| v.to_string())
                        .unwrap_or_default(),
                );
            }
            record.push(statement.lines.len().to_string());
            record.push(result.processing_time_ms.to_string());
            record.push(String::new());
        } else {
            record.push("error".to_string());
            record.extend(MetricName::ALL.iter().map(|_| String::new()));
            record.push(String::new());
            record.push(result.processing_time_ms.to_string());
            record.push(result.error.clone().unwrap_or_default());
        }

        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
