use anyhow::{Context, Result};
use autospell::cli::output::{self, InputReport, OutputFormat};
use autospell::config::ConfigLayer;
use autospell::{CheckOptions, Config, Dictionary, SpellChecker};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autospell")]
#[command(version, about = "Spell check text against a word list", long_about = None)]
struct Cli {
    /// Text to check; read from stdin when neither TEXT nor --file is given
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Files to check, each reported separately
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Dictionary file (.json array or one word per line)
    #[arg(short, long, env = "AUTOSPELL_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Largest edit distance offered as a suggestion
    #[arg(long)]
    max_distance: Option<usize>,

    /// Number of suggestions per misspelling
    #[arg(long)]
    max_suggestions: Option<usize>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Print the text with each misspelling replaced by its top suggestion
    #[arg(long)]
    fix: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log_level(verbose));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "autospell", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(ConfigLayer {
        dictionary: cli.dictionary.clone(),
        max_distance: cli.max_distance,
        max_suggestions: cli.max_suggestions,
    })?;

    let dict_path = config.dictionary_path().context(
        "No dictionary configured. Pass --dictionary or set `dictionary` in .autospell.toml.",
    )?;
    let dictionary = Dictionary::load_from_path(&dict_path)
        .with_context(|| format!("Failed to load dictionary: {}", dict_path.display()))?;
    log::info!("loaded {} words from {}", dictionary.len(), dict_path.display());

    let checker = SpellChecker::with_options(dictionary, CheckOptions::from(&config));
    let colored = !cli.no_color;

    let mut reports = Vec::new();
    for (source, text) in collect_inputs(&cli)? {
        let errors = checker.check_spelling(&text);
        reports.push(InputReport {
            source,
            text,
            errors,
        });
    }

    if cli.fix {
        let corrections: Vec<(String, String)> = reports
            .iter()
            .map(|r| (r.source.clone(), checker.correct(&r.text, &r.errors)))
            .collect();
        output::print_corrections(&corrections, colored);
        return Ok(());
    }

    let total_errors: usize = reports.iter().map(|r| r.errors.len()).sum();

    output::print_reports(&reports, colored, cli.format)?;
    if cli.format == OutputFormat::Text {
        output::print_check_summary(total_errors, reports.len(), colored);
    }

    // Exit with appropriate code
    if total_errors > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

/// Gather `(source, text)` pairs from arguments, files or stdin.
fn collect_inputs(cli: &Cli) -> Result<Vec<(String, String)>> {
    let mut inputs = Vec::new();

    if !cli.text.is_empty() {
        inputs.push(("<args>".to_string(), cli.text.join(" ")));
    }

    for path in &cli.files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        inputs.push((path.display().to_string(), text));
    }

    if inputs.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        inputs.push(("<stdin>".to_string(), text));
    }

    Ok(inputs)
}
