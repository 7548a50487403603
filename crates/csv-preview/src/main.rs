//! CLI entry point for the CSV preview pipeline.

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use csv_preview::{
    DelimiterSetting, IngestionConfig, IngestionSession, Preview, SourceFile, TextEncoding,
    analysis_prompt,
};
use dotenv::dotenv;
use tracing::{error, info};

#[cfg(feature = "ai")]
use csv_preview::ai::{OpenRouterProvider, request_analysis};
#[cfg(feature = "ai")]
use std::env;

/// CLI-compatible delimiter enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliDelimiter {
    /// Detect from the first lines
    Auto,
    /// ","
    Comma,
    /// ";"
    Semicolon,
    /// Tab character
    Tab,
    /// "|"
    Pipe,
}

impl From<CliDelimiter> for DelimiterSetting {
    fn from(cli: CliDelimiter) -> Self {
        match cli {
            CliDelimiter::Auto => DelimiterSetting::Auto,
            CliDelimiter::Comma => DelimiterSetting::Comma,
            CliDelimiter::Semicolon => DelimiterSetting::Semicolon,
            CliDelimiter::Tab => DelimiterSetting::Tab,
            CliDelimiter::Pipe => DelimiterSetting::Pipe,
        }
    }
}

/// CLI-compatible encoding enum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliEncoding {
    #[value(name = "utf-8")]
    Utf8,
    #[value(name = "iso-8859-1")]
    Iso8859_1,
    #[value(name = "ascii")]
    Ascii,
}

impl From<CliEncoding> for TextEncoding {
    fn from(cli: CliEncoding) -> Self {
        match cli {
            CliEncoding::Utf8 => TextEncoding::Utf8,
            CliEncoding::Iso8859_1 => TextEncoding::Iso8859_1,
            CliEncoding::Ascii => TextEncoding::Ascii,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Preview a CSV file and prepare it for LLM analysis",
    long_about = "Detects the delimiter and header of a CSV file and prints the first 50 rows.\n\n\
                  ENVIRONMENT VARIABLES:\n  \
                  OPENROUTER_API_KEY    API key for OpenRouter (required for --analyze)\n\n\
                  EXAMPLES:\n  \
                  # Auto-detect everything\n  \
                  csv-preview -i data.csv\n\n  \
                  # Headerless, semicolon-separated Latin-1 export\n  \
                  csv-preview -i export.csv --no-header --delimiter semicolon --encoding iso-8859-1\n\n  \
                  # Machine-readable output\n  \
                  csv-preview -i data.csv --json | jq .dataset.headers"
)]
struct Args {
    /// Path to the CSV file to preview
    #[arg(short, long)]
    input: String,

    /// Field delimiter
    #[arg(short, long, value_enum, default_value = "auto")]
    delimiter: CliDelimiter,

    /// Treat the first line as data and name columns Column_1..Column_N
    #[arg(long)]
    no_header: bool,

    /// Text encoding of the file
    #[arg(short, long, value_enum, default_value = "utf-8")]
    encoding: CliEncoding,

    /// Keep lines that are blank after trimming
    #[arg(long)]
    keep_empty_lines: bool,

    /// Output JSON to stdout instead of a table
    ///
    /// Disables all logs; only the preview is written.
    #[arg(long, conflicts_with_all = ["prompt", "analyze"])]
    json: bool,

    /// Print the analysis prompt built from the file sample
    #[arg(long)]
    prompt: bool,

    /// Send the sample to OpenRouter and print the analysis
    #[arg(long)]
    analyze: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the preview)
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn ingestion_config(&self) -> IngestionConfig {
        IngestionConfig::builder()
            .delimiter(self.delimiter.into())
            .has_header(!self.no_header)
            .encoding(self.encoding.into())
            .skip_empty_lines(!self.keep_empty_lines)
            .build()
    }
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    // Load environment variables from .env file
    dotenv().ok();

    let file =
        SourceFile::from_path(&args.input).inspect_err(|e| error!("{}", e.user_message()))?;
    let config = args.ingestion_config();
    info!(file = file.name(), ?config, "Loading CSV file");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let session = IngestionSession::with_config(config);
    let preview = runtime
        .block_on(session.select_file(file))
        .inspect_err(|e| error!("{}", e.user_message()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&*preview)?);
    } else {
        print_preview(&preview);
    }

    if args.prompt {
        println!("{}", analysis_prompt(&preview.sample_text));
    }

    if args.analyze {
        run_analysis(&preview)?;
    }

    Ok(())
}

#[cfg(feature = "ai")]
fn run_analysis(preview: &Preview) -> Result<()> {
    let api_key = env::var("OPENROUTER_API_KEY")
        .map_err(|_| anyhow!("OPENROUTER_API_KEY must be set to use --analyze"))?;

    let provider = OpenRouterProvider::new(api_key)?;
    let analysis = request_analysis(&provider, preview)?;

    println!("\n{}", "=".repeat(80));
    println!("ANALYSIS");
    println!("{}\n", "=".repeat(80));
    println!("{analysis}");
    Ok(())
}

#[cfg(not(feature = "ai"))]
fn run_analysis(_preview: &Preview) -> Result<()> {
    Err(anyhow!(
        "--analyze requires the `ai` feature (rebuild with default features)"
    ))
}

/// Print the preview as a fixed-width table.
///
/// Uses `println!` intentionally: this is the command's output, not a log.
fn print_preview(preview: &Preview) {
    const COLUMN_WIDTH: usize = 16;

    let dataset = &preview.dataset;

    println!("\n{}", "=".repeat(80));
    println!("CSV PREVIEW");
    println!("{}", "=".repeat(80));
    println!("  Delimiter: {}", display_delimiter(dataset.delimiter));
    println!("  Columns:   {}", dataset.column_count());
    println!(
        "  Rows:      {} shown of {} lines",
        dataset.row_count(),
        preview.line_count
    );
    println!();

    let header_line: Vec<String> = dataset
        .headers
        .iter()
        .map(|h| pad_cell(h, COLUMN_WIDTH))
        .collect();
    println!("{}", header_line.join(" "));
    println!("{}", "-".repeat((COLUMN_WIDTH + 1) * dataset.column_count().max(1)));

    for row in &dataset.rows {
        let cells: Vec<String> = row
            .values()
            .map(|v| pad_cell(v, COLUMN_WIDTH))
            .collect();
        println!("{}", cells.join(" "));
    }
    println!();
}

fn display_delimiter(delimiter: char) -> String {
    match delimiter {
        '\t' => "tab".to_string(),
        other => format!("'{other}'"),
    }
}

fn pad_cell(value: &str, width: usize) -> String {
    format!("{:<width$}", truncate_str(value, width - 1))
}

fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_conflicts_with_text_output() {
        for extra in ["--prompt", "--analyze"] {
            let result = Args::try_parse_from(["csv-preview", "-i", "a.csv", "--json", extra]);
            assert_eq!(
                result.unwrap_err().kind(),
                clap::error::ErrorKind::ArgumentConflict,
                "--json with {extra}"
            );
        }
    }

    #[test]
    fn test_flags_map_onto_config() {
        let args = Args::try_parse_from([
            "csv-preview",
            "-i",
            "a.csv",
            "--delimiter",
            "pipe",
            "--no-header",
            "--encoding",
            "iso-8859-1",
            "--keep-empty-lines",
        ])
        .unwrap();
        let config = args.ingestion_config();

        assert_eq!(config.delimiter, DelimiterSetting::Pipe);
        assert!(!config.has_header);
        assert_eq!(config.encoding, TextEncoding::Iso8859_1);
        assert!(!config.skip_empty_lines);
    }

    #[test]
    fn test_json_alone_is_accepted() {
        let args = Args::try_parse_from(["csv-preview", "-i", "a.csv", "--json"]).unwrap();
        assert!(args.json);
    }

    #[test]
    fn test_truncate_str_is_char_safe() {
        assert_eq!(truncate_str("Montréal-Québec", 8), "Montr...");
        assert_eq!(truncate_str("short", 8), "short");
        assert_eq!(pad_cell("ab", 4), "ab  ");
    }
}
