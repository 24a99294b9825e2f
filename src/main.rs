//! csv-tabula CLI - typed tables from CSV files

use clap::Parser;
use csv_tabula::{Table, TableReader, Value};
use log::{LevelFilter, debug};
use rayon::prelude::*;
use serde_json::json;
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::OnceLock;

/// Parse CSV files into typed tables.
///
/// Infers one type per column (String, Int, Float or partial Date) and
/// reports the resulting schema, optionally with the first rows.
#[derive(Parser, Debug)]
#[command(name = "csv-tabula")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file(s) to parse
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Table name (default: the file stem)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Number of data rows to print
    #[arg(short = 'r', long, default_value = "0")]
    rows: usize,

    /// Output format: text (default) or json
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Keep replacement characters in cells instead of mapping them back to '"'
    #[arg(long)]
    no_repair: bool,

    /// Decode input as UTF-8 without encoding detection
    #[arg(long)]
    no_transcode: bool,

    /// Log pipeline details to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging(verbose: bool) {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            let level = if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            };
            builder.filter_module("csv_tabula", level);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    // Each file parses independently; print in argument order afterwards.
    let results: Vec<_> = args
        .files
        .par_iter()
        .map(|file| (file, parse_file(file, &args)))
        .collect();

    let mut exit_code = ExitCode::SUCCESS;

    for (file, result) in results {
        match result {
            Ok(table) => match args.format {
                OutputFormat::Text => print_text_output(file, &table, args.rows),
                OutputFormat::Json => print_json_output(file, &table, args.rows),
            },
            Err(e) => {
                eprintln!("Error processing {}: {}", file.display(), e);
                exit_code = ExitCode::FAILURE;
            }
        }
    }

    exit_code
}

fn parse_file(path: &Path, args: &Args) -> csv_tabula::Result<Table> {
    let name = args.name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let mut reader = TableReader::new();
    reader
        .name(name)
        .repair_replacement_chars(!args.no_repair)
        .transcode(!args.no_transcode);

    debug!("Parsing {}", path.display());
    reader.parse_path(path)
}

fn display_cell(value: Option<Value<'_>>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn print_text_output(path: &Path, table: &Table, rows: usize) {
    println!("File: {}", path.display());
    println!("  Table: {}", table.name());
    println!("  Columns: {}", table.column_count());
    println!("  Rows: {}", table.row_count());
    println!("  Cells: {}", table.count());
    println!("  Column details:");
    for (i, column) in table.columns().iter().enumerate() {
        println!("    {}: {} ({})", i + 1, column.name(), column.column_type());
    }

    if rows > 0 {
        println!("  Data:");
        for row in table.rows().take(rows) {
            let cells: Vec<String> = row.into_iter().map(display_cell).collect();
            println!("    {}", cells.join(" | "));
        }
    }

    println!();
}

fn json_value(value: Option<Value<'_>>) -> serde_json::Value {
    match value {
        None => serde_json::Value::Null,
        Some(Value::Text(s)) => json!(s),
        Some(Value::Int(i)) => json!(i),
        Some(Value::Float(f)) => json!(f),
        Some(v @ (Value::DateTime(_) | Value::Date(_))) => json!(v.to_string()),
    }
}

fn print_json_output(path: &Path, table: &Table, rows: usize) {
    let columns: Vec<_> = table
        .columns()
        .iter()
        .map(|c| json!({"name": c.name(), "type": c.column_type().to_string()}))
        .collect();

    let mut output = json!({
        "file": path.display().to_string(),
        "name": table.name(),
        "num_columns": table.column_count(),
        "num_rows": table.row_count(),
        "columns": columns,
    });

    if rows > 0 {
        let data: Vec<Vec<serde_json::Value>> = table
            .rows()
            .take(rows)
            .map(|row| row.into_iter().map(json_value).collect())
            .collect();
        output["rows"] = json!(data);
    }

    println!("{output}");
}
