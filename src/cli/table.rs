//! Table and report formatting for stdout

use std::io::Write;

use serde::Serialize;

use crate::common::Result;
use crate::sequence::{self, Sequence, GOLDEN_RATIO};

const INDEX_WIDTH: usize = 10;
const VALUE_RULE: usize = 20;

/// A sequence term in JSON output; values are decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRow {
    pub index: usize,
    pub value: String,
}

/// A defined ratio in JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioRow {
    pub n: usize,
    pub ratio: f64,
    pub deviation: f64,
}

pub fn term_rows(sequence: &Sequence) -> Vec<TermRow> {
    sequence
        .rows()
        .map(|(index, value)| TermRow {
            index,
            value: value.to_string(),
        })
        .collect()
}

pub fn ratio_rows(sequence: &Sequence) -> Vec<RatioRow> {
    sequence::convergence_points(&sequence::ratios(sequence))
        .into_iter()
        .map(|(n, ratio)| RatioRow {
            n,
            ratio,
            deviation: (ratio - GOLDEN_RATIO).abs(),
        })
        .collect()
}

/// Write the two-column index/value table
pub fn write_table<W: Write>(out: &mut W, sequence: &Sequence) -> Result<()> {
    writeln!(out, "Fibonacci Sequence:")?;
    writeln!(out, "{:<INDEX_WIDTH$}|F(n)", "Index (n)")?;
    writeln!(out, "{}+{}", "-".repeat(INDEX_WIDTH), "-".repeat(VALUE_RULE))?;
    for (index, value) in sequence.rows() {
        writeln!(out, "{index:<INDEX_WIDTH$}|{value}")?;
    }
    Ok(())
}

/// Write the ratio report
pub fn write_ratios<W: Write>(out: &mut W, sequence: &Sequence) -> Result<()> {
    writeln!(out, "{:<INDEX_WIDTH$}|{:<20}|Deviation from φ", "n", "F(n)/F(n-1)")?;
    writeln!(
        out,
        "{}+{}+{}",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(20),
        "-".repeat(VALUE_RULE)
    )?;
    for row in ratio_rows(sequence) {
        writeln!(out, "{:<INDEX_WIDTH$}|{:<20.10}|{:.3e}", row.n, row.ratio, row.deviation)?;
    }
    Ok(())
}
