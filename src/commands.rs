//! CLI command definitions
//!
//! Defines the clap commands for fibgold.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the sequence, print it and write both charts (default)
    Run {
        /// Number of terms to generate; prompted for when omitted
        #[arg(long, short = 't', allow_hyphen_values = true)]
        terms: Option<String>,

        /// Directory the chart documents are written to
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Do not open the charts in a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Print the sequence table only
    Table {
        /// Number of terms to generate
        #[arg(long, short = 't', allow_hyphen_values = true)]
        terms: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print consecutive-term ratios and their distance from φ
    Ratios {
        /// Number of terms to generate
        #[arg(long, short = 't', allow_hyphen_values = true)]
        terms: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Run {
            terms: None,
            out_dir: None,
            no_open: false,
        }
    }
}
