//! `textdown` - render HTML files as plain text.

mod logging;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use textdown::{TextdownError, TextdownOptions, TextdownService};
use tracing::{error, info};

/// CLI flags
#[derive(Parser, Debug)]
#[command(name = "textdown")]
#[command(about = "Render HTML as readable plain text")]
#[command(version)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Render input the parser had to repair instead of rejecting it
    #[arg(long, action = ArgAction::SetTrue)]
    lenient: bool,

    /// Length of heading and horizontal rules
    #[arg(long, default_value_t = 79)]
    rule_width: usize,

    /// Spaces per indent level
    #[arg(long, default_value_t = 4)]
    tab_width: usize,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Input file; `-` or nothing reads stdin
    input: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> TextdownOptions {
        TextdownOptions {
            rule_width: self.rule_width,
            tab_width: self.tab_width,
            strict: !self.lenient,
            ..Default::default()
        }
    }
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<&PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, format!("{text}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}").context("failed to write stdout")
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let html = read_input(cli.input.as_ref())?;
    let service = TextdownService::with_options(cli.options());

    let text = match service.convert(&html) {
        Ok(text) => text,
        Err(TextdownError::MalformedHtml { diagnostics }) => {
            for diagnostic in &diagnostics {
                error!(%diagnostic, "parser diagnostic");
            }
            anyhow::bail!(
                "input is not well-formed HTML ({} diagnostic(s)); pass --lenient to render it anyway",
                diagnostics.len()
            );
        }
    };

    info!(bytes = text.len(), "rendered plain text");
    write_output(cli.output.as_ref(), &text)
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
