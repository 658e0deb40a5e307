use crate::SpellingError;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Result of checking one input: a file, the argument text or stdin.
#[derive(Debug, Clone)]
pub struct InputReport {
    pub source: String,
    pub text: String,
    pub errors: Vec<SpellingError>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonError {
    source: String,
    word: String,
    position: usize,
    suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    inputs_checked: usize,
    total_errors: usize,
    errors: Vec<JsonError>,
}

pub fn print_reports(
    reports: &[InputReport],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                print_text_errors(report, colored_output);
            }
            Ok(())
        }
        OutputFormat::Json => print_json_errors(reports),
    }
}

fn print_text_errors(report: &InputReport, colored_output: bool) {
    if report.errors.is_empty() {
        return;
    }

    if colored_output {
        println!("\n{}", report.source.bold().underline());
    } else {
        println!("\n{}", report.source);
    }

    for error in &report.errors {
        let position = format!("#{}", error.position);

        if colored_output {
            println!("  {} {}", position.blue().bold(), error.word.red().bold());

            if !error.suggestions.is_empty() {
                let suggestions = error
                    .suggestions
                    .iter()
                    .map(|s| s.green().to_string())
                    .collect::<Vec<_>>()
                    .join(&", ".dimmed().to_string());
                println!("    {} {}", "→".dimmed(), suggestions);
            }
        } else {
            println!("  {} {}", position, error.word);

            if !error.suggestions.is_empty() {
                println!("    → {}", error.suggestions.join(", "));
            }
        }
    }
}

fn print_json_errors(reports: &[InputReport]) -> Result<()> {
    let errors: Vec<JsonError> = reports
        .iter()
        .flat_map(|report| {
            report.errors.iter().map(|e| JsonError {
                source: report.source.clone(),
                word: e.word.clone(),
                position: e.position,
                suggestions: e.suggestions.clone(),
            })
        })
        .collect();

    let output = JsonOutput {
        inputs_checked: reports.len(),
        total_errors: errors.len(),
        errors,
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
    println!("{}", json);

    Ok(())
}

pub fn print_check_summary(total_errors: usize, inputs: usize, colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        let input_word = if inputs == 1 { "input" } else { "inputs" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                inputs,
                input_word
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors, error_word, inputs, input_word
            );
        }
    }
}

/// Print corrected text for each input; sources are only labelled when there
/// is more than one.
pub fn print_corrections(corrections: &[(String, String)], colored: bool) {
    let labelled = corrections.len() > 1;

    for (source, corrected) in corrections {
        if labelled {
            if colored {
                println!("{}", source.bold().underline());
            } else {
                println!("{}", source);
            }
        }
        println!("{}", corrected);
    }
}
