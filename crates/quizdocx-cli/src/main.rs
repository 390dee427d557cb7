//! quizdocx CLI - extract quiz questions from a .docx file as JSON

use anyhow::{Context, Result};
use clap::Parser;
use quizdocx::{parse_quiz, QuizDocxError};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Parse quiz questions from a .docx file and output as JSON
#[derive(Debug, Parser)]
#[command(name = "quizdocx", version)]
struct Args {
    /// Path to the .docx file to parse
    input: PathBuf,

    /// Output JSON file path
    #[arg(short, long, default_value = "questions.json")]
    output: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if !args.input.exists() {
        eprintln!("Error: Input file '{}' not found", args.input.display());
        process::exit(1);
    }

    let is_docx = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));
    if !is_docx {
        eprintln!(
            "Warning: '{}' does not have .docx extension",
            args.input.display()
        );
    }

    if let Err(err) = run(&args) {
        if err.is::<QuizDocxError>() {
            eprintln!("Error: {err:#}");
        } else {
            eprintln!("Unexpected error: {err:#}");
        }
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let set = parse_quiz(&args.input)?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {parent:?}"))?;
        }
    }

    let mut json = serde_json::to_string_pretty(&set).context("Failed to serialize questions")?;
    json.push('\n');
    fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {:?}", args.output))?;

    println!("Successfully parsed {} questions", set.questions.len());
    println!("Output written to: {}", args.output.display());

    Ok(())
}
