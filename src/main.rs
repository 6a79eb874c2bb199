// Passport MRZ reader command line
// Reads OCR text (file or stdin) or two typed MRZ lines and prints the decoded passport

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::error;
use mrzscan::{
    config::ReaderConfig,
    models::{PassportData, PassportExtractionResult},
    processing::format_for_display,
    utils::PassportError,
    PassportReader,
};

#[derive(Parser)]
#[command(name = "mrzscan", version, about = "Read passport data from the machine readable zone")]
struct Cli {
    /// JSON reader configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of a report
    #[arg(long, global = true)]
    json: bool,

    /// Reference date (YYYY-MM-DD) for the birth year pivot and expiry check
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find and decode the MRZ in OCR output (stdin when no file is given)
    Text { file: Option<PathBuf> },
    /// Decode two MRZ lines
    Lines { line1: String, line2: String },
}

fn print_detailed_report(reader: &PassportReader, data: &PassportData) {
    println!("\n===============================================");
    println!("      PASSPORT MRZ REPORT");
    println!("===============================================\n");

    for (label, value) in format_for_display(data) {
        println!("  {:<16} {}", format!("{}:", label), value);
    }
    if let Some(personal_number) = &data.personal_number {
        println!("  {:<16} {}", "Personal Number:", personal_number);
    }

    println!("\nMRZ:");
    println!("  {}", data.mrz_line1);
    println!("  {}", data.mrz_line2);

    let (mrz_validation, expiry_validation) = reader.validate(data);
    let issues: Vec<_> = mrz_validation
        .issues
        .iter()
        .chain(expiry_validation.issues.iter())
        .collect();

    if !issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in issues {
            println!("  - [{}] {}", issue.issue_type.label(), issue.message);
        }
    }

    if data.confidence < reader.config().min_confidence {
        println!("\nLOW CONFIDENCE: check the fields against the passport photo.");
    }
}

fn print_failure(message: &str, raw_text: Option<&str>) {
    println!("Could not read passport: {}", message);
    if let Some(text) = raw_text {
        println!("\nRAW OCR TEXT:\n{}", text);
    }
}

fn load_config(cli: &Cli) -> Result<ReaderConfig, PassportError> {
    let mut config = match &cli.config {
        Some(path) => ReaderConfig::from_file(path)?,
        None => ReaderConfig::default(),
    };

    if let Some(today) = &cli.today {
        let date = NaiveDate::parse_from_str(today, "%Y-%m-%d")
            .map_err(|e| PassportError::InvalidDate(format!("{}: {}", today, e)))?;
        config.reference_date = Some(date);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<bool, PassportError> {
    let reader = PassportReader::new(load_config(&cli)?);

    match &cli.command {
        Command::Lines { line1, line2 } => {
            let data = reader.read_lines(line1, line2);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                match &data {
                    Some(data) => print_detailed_report(&reader, data),
                    None => print_failure("the first line is not a passport MRZ", None),
                }
            }
            Ok(data.is_some())
        }
        Command::Text { file } => {
            let result: PassportExtractionResult = match file {
                Some(path) => reader.read_file(path)?,
                None => {
                    let mut text = String::new();
                    std::io::stdin().read_to_string(&mut text)?;
                    reader.read_text(&text)
                }
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                match &result.outcome {
                    Ok(data) => print_detailed_report(&reader, data),
                    Err(failure) => print_failure(&failure.to_string(), Some(result.raw_text.as_str())),
                }
            }
            Ok(result.is_success())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
