//! Ranked report output.
//!
//! The report file holds one `name, out_degree, score` line per document in
//! ranked order, scores printed with seven decimals. The console summary is a
//! colored preview of the top rows.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use colored::Colorize;

use crate::error::{RankError, Result};
use crate::rank::{PageRankResult, RankedRow};

/// Formats one report line, without the trailing newline.
#[must_use]
pub fn format_row(row: &RankedRow) -> String {
    format!("{}, {}, {:.7}", row.name, row.out_degree, row.score)
}

/// Writes all rows to `out`.
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_report<W: Write>(rows: &[RankedRow], out: &mut W) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", format_row(row))?;
    }
    out.flush()
}

/// Creates (or truncates) `path` and writes the report to it.
///
/// # Errors
/// Returns `RankError::Io` naming the path on failure.
pub fn write_report_file(path: &Path, rows: &[RankedRow]) -> Result<()> {
    let file = File::create(path).map_err(|e| RankError::io(e, path))?;
    let mut out = BufWriter::new(file);
    write_report(rows, &mut out).map_err(|e| RankError::io(e, path))
}

/// Prints the top `limit` rows and the convergence status to stdout.
pub fn print_summary(rows: &[RankedRow], result: &PageRankResult, limit: usize) {
    if limit == 0 {
        return;
    }
    let status = if result.converged {
        format!("converged after {} iterations", result.iterations).green()
    } else {
        format!("stopped after {} iterations", result.iterations).yellow()
    };
    println!("{} ({status}, delta {:.3e})", "PageRank".bold(), result.delta);

    let width = name_column_width(rows, limit);
    for (pos, row) in rows.iter().take(limit).enumerate() {
        println!(
            "{:>3}. {}  {}  {}",
            pos + 1,
            format!("{:<width$}", row.name).cyan(),
            format!("{:.7}", row.score).bold(),
            format!("{} out", row.out_degree).dimmed(),
        );
    }
    if rows.len() > limit {
        println!("{}", format!("     ... {} more", rows.len() - limit).dimmed());
    }
}

/// Width of the name column, counted in characters.
fn name_column_width(rows: &[RankedRow], limit: usize) -> usize {
    rows.iter()
        .take(limit)
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
}
