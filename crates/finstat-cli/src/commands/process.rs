//! Process command - extract a statement from a single recognized-text file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use finstat_core::SourceReader;
use finstat_core::models::config::{FinstatConfig, ReportConfig};
use finstat_core::models::statement::Statement;
use finstat_core::statement::rules::format_money;
use finstat_core::statement::{RuleStatementParser, StatementParser};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input recognized-text file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write narrative.csv, financial_lines.csv, and summary.csv here
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Accept blank recognized text as a legitimately empty document
    #[arg(long)]
    allow_blank: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Metric summary CSV
    Csv,
    /// Plain text summary report
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        FinstatConfig::from_file(Path::new(path))?
    } else {
        FinstatConfig::default()
    };

    // Create progress bar
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Reading recognized text...");
    pb.set_position(20);

    let reader = if args.allow_blank {
        SourceReader::from_config(&config.source).with_blank_allowed(true)
    } else {
        SourceReader::from_config(&config.source)
    };
    let text = reader.read(&args.input)?;

    pb.set_message("Extracting financial lines...");
    pb.set_position(60);

    let statement = RuleStatementParser::new().parse(&text);

    debug!(
        "{} financial lines, {} narrative sentences",
        statement.lines.len(),
        statement.narrative.len()
    );

    pb.set_position(100);
    pb.finish_with_message("Done");

    // Three-sheet export, mirroring the workbook layout
    if let Some(export_dir) = &args.export_dir {
        write_export_dir(export_dir, &statement, &config.report)?;
        println!(
            "{} Export written to {}",
            style("✓").green(),
            export_dir.display()
        );
    }

    // Format output
    let output = format_statement(&statement, args.format, &config.report)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub(crate) fn format_statement(
    statement: &Statement,
    format: OutputFormat,
    report: &ReportConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(statement)?),
        OutputFormat::Csv => format_summary_csv(statement, report),
        OutputFormat::Text => Ok(format_text(statement, report)),
    }
}

/// Metric summary as CSV, absent values rendered as N/A.
fn format_summary_csv(statement: &Statement, report: &ReportConfig) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["Metric", "Value"])?;
    for entry in &statement.metrics.entries {
        wtr.write_record([
            entry.metric.display_name(),
            &format_money(entry.value, &report.currency_symbol),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Plain text summary: key metrics followed by a narrative extract.
pub(crate) fn format_text(statement: &Statement, report: &ReportConfig) -> String {
    let mut output = String::new();

    output.push_str("Financial Summary Report\n\n");

    output.push_str("Key Metrics:\n");
    for entry in &statement.metrics.entries {
        output.push_str(&format!(
            "  - {}: {}\n",
            entry.metric.display_name(),
            format_money(entry.value, &report.currency_symbol)
        ));
    }

    output.push_str("\nNarrative Extract:\n");
    for sentence in statement.narrative.iter().take(report.narrative_limit) {
        output.push_str(&format!("  * {}\n", sentence));
    }

    output
}

/// Write the three-sheet export: narrative, financial lines, and summary.
fn write_export_dir(
    dir: &Path,
    statement: &Statement,
    report: &ReportConfig,
) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;

    let mut narrative = csv::Writer::from_path(dir.join("narrative.csv"))?;
    narrative.write_record(["Sentence"])?;
    for sentence in &statement.narrative {
        narrative.write_record([sentence.as_str()])?;
    }
    narrative.flush()?;

    let mut lines = csv::Writer::from_path(dir.join("financial_lines.csv"))?;
    lines.write_record(["Raw Line", "Label", "Values"])?;
    for line in &statement.lines {
        let values = line
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        lines.write_record([line.raw_line.as_str(), line.label.as_str(), &values])?;
    }
    lines.flush()?;

    let mut summary = csv::Writer::from_path(dir.join("summary.csv"))?;
    summary.write_record(["Metric", "Value"])?;
    for entry in &statement.metrics.entries {
        summary.write_record([
            entry.metric.display_name(),
            &format_money(entry.value, &report.currency_symbol),
        ])?;
    }
    summary.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use finstat_core::statement::{RuleStatementParser, StatementParser};

    fn sample_statement() -> Statement {
        let text = "The company performed well. Growth continued.\n\
                    Turnover            1,234,567\n\
                    Cash at bank and in hand   (500)\n";
        RuleStatementParser::new().parse(text)
    }

    #[test]
    fn test_text_summary_layout() {
        let report = ReportConfig::default();
        let text = format_text(&sample_statement(), &report);

        assert!(text.starts_with("Financial Summary Report\n"));
        assert!(text.contains("  - Turnover: €1,234,567\n"));
        assert!(text.contains("  - Cash: €-500\n"));
        assert!(text.contains("  - Net assets: N/A\n"));
        assert!(text.contains("  * The company performed well.\n"));
    }

    #[test]
    fn test_narrative_extract_is_capped() {
        let mut report = ReportConfig::default();
        report.narrative_limit = 1;
        let text = format_text(&sample_statement(), &report);

        assert!(text.contains("* The company performed well."));
        assert!(!text.contains("* Growth continued."));
    }

    #[test]
    fn test_summary_csv_has_all_metrics() {
        let report = ReportConfig::default();
        let csv = format_summary_csv(&sample_statement(), &report).unwrap();

        assert!(csv.starts_with("Metric,Value\n"));
        assert_eq!(csv.lines().count(), 8);
        assert!(csv.contains("Turnover,\"€1,234,567\""));
        assert!(csv.contains("Stocks,N/A"));
    }
}
