use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use form_grader::{DEFAULT_DOCUMENT, DEFAULT_MAX_FILE_SIZE, SourceConfig, grade_file, output};

use crate::logging;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented console report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Grade an HTML registration form against the accessibility checklist
#[derive(Parser, Debug)]
#[command(name = "form-grader", version, about)]
pub struct Cli {
    /// HTML document to grade
    #[arg(default_value = DEFAULT_DOCUMENT)]
    pub file: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Largest document accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments, grade, and print the report. Returns the exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    execute(&cli, &mut handle)
}

fn execute(cli: &Cli, writer: &mut dyn Write) -> Result<i32> {
    let mut source = SourceConfig::for_path(cli.file.clone());
    source.max_file_size = cli.max_file_size;

    tracing::info!(document = %source.path.display(), "grading document");
    let run = grade_file(&source)?;

    match cli.format {
        OutputFormat::Text => output::write_human(&run, writer)?,
        OutputFormat::Json => output::write_json(&run, writer)?,
    }
    writer.flush()?;

    Ok(run.exit_code())
}
