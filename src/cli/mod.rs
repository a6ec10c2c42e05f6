//! CLI command handling
//!
//! Dispatches commands and writes their output. Input and output are passed
//! in so the whole flow can be driven from tests.

mod browser;
pub mod prompt;
pub mod table;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::chart;
use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::{paths, Error, Result};
use crate::sequence;

/// Dispatch a CLI command
pub fn dispatch<R: BufRead, W: Write>(
    command: Commands,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Run {
            terms,
            out_dir,
            no_open,
        } => {
            let options = RunOptions {
                out_dir: out_dir.unwrap_or_else(|| config.output.dir.clone()),
                open_browser: config.display.open_browser && !no_open,
            };
            run(terms.as_deref(), &options, config, input, out)
        }

        Commands::Table { terms, json } => {
            let sequence = sequence::generate(prompt::parse_terms(&terms)?);
            if json {
                serde_json::to_writer_pretty(&mut *out, &table::term_rows(&sequence))?;
                writeln!(out)?;
            } else {
                table::write_table(out, &sequence)?;
            }
            Ok(())
        }

        Commands::Ratios { terms, json } => {
            let sequence = sequence::generate(prompt::parse_terms(&terms)?);
            if json {
                serde_json::to_writer_pretty(&mut *out, &table::ratio_rows(&sequence))?;
                writeln!(out)?;
            } else {
                table::write_ratios(out, &sequence)?;
            }
            Ok(())
        }
    }
}

/// Settings for one `run`, after merging flags over the config file
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub out_dir: PathBuf,
    pub open_browser: bool,
}

/// Generate, tabulate, chart and display
///
/// The term count is validated before anything is rendered, so a rejected
/// count leaves no files behind.
pub fn run<R: BufRead, W: Write>(
    terms: Option<&str>,
    options: &RunOptions,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Fibonacci Sequence")?;
    let terms = match terms {
        Some(raw) => prompt::parse_terms(raw)?,
        None => prompt::read_terms(input, out)?,
    };

    let sequence = sequence::generate(terms);
    writeln!(out)?;
    table::write_table(out, &sequence)?;

    writeln!(out, "\nCreating mathematically accurate visualizations...")?;
    let (growth, convergence) = chart::render_all(&sequence, &config.charts)?;

    let growth_path = paths::output_file(&options.out_dir, &config.output.growth_file);
    growth.write(&growth_path)?;
    writeln!(
        out,
        "Exponential growth visualization saved to '{}'",
        growth_path.display()
    )?;

    let convergence_path = paths::output_file(&options.out_dir, &config.output.convergence_file);
    convergence.write(&convergence_path)?;
    writeln!(
        out,
        "Golden ratio visualization saved to '{}'",
        convergence_path.display()
    )?;

    if options.open_browser {
        let documents = [
            ("exponential growth", growth_path.as_path()),
            ("golden ratio", convergence_path.as_path()),
        ];
        match display(&documents, out) {
            Ok(()) => {}
            Err(e @ Error::Display(_)) => {
                tracing::debug!("{e}");
                writeln!(out, "{}", e.to_string().yellow())?;
                writeln!(out, "HTML files have been saved and can be opened manually.")?;
            }
            Err(e) => return Err(e),
        }
    }

    writeln!(
        out,
        "\n{}",
        "Analysis complete! All visualizations have been saved as HTML files.".green()
    )?;
    Ok(())
}

fn display<W: Write>(documents: &[(&str, &Path)], out: &mut W) -> Result<()> {
    for (label, path) in documents {
        writeln!(out, "\nDisplaying {label} visualization in browser...")?;
        browser::open(path)?;
    }
    Ok(())
}
