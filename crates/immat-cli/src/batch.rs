//! Plate extraction from CSV files.

use std::fs::File;
use std::io::{BufRead, Read};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

/// A raw plate value and the CSV line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateEntry {
    pub line: u64,
    pub raw: String,
}

/// Options for reading plates out of a CSV file.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Header of the column holding plates (matched case-insensitively).
    pub column: String,
    pub delimiter: u8,
    /// Trim surrounding whitespace from each cell before checking.
    pub trim: bool,
    /// Skip rows whose plate cell is empty.
    pub skip_empty: bool,
}

impl BatchOptions {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            delimiter: b',',
            trim: true,
            skip_empty: true,
        }
    }
}

/// Convert a `--delimiter` value to the byte the CSV reader expects.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {delimiter:?}");
    }
    Ok(delimiter as u8)
}

/// Plates given on the command line, or one per line from `reader` when
/// there are none. Blank lines are skipped.
pub fn plates_or_lines<R: BufRead>(plates: &[String], reader: R) -> Result<Vec<String>> {
    if !plates.is_empty() {
        return Ok(plates.to_vec());
    }
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("read plates from stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Read plates from a CSV file on disk.
pub fn read_plates(path: &Path, options: &BatchOptions) -> Result<Vec<PlateEntry>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_plates_from(file, options).with_context(|| format!("read {}", path.display()))
}

/// Read plates from any CSV source with a header row.
pub fn read_plates_from<R: Read>(
    reader: R,
    options: &BatchOptions,
) -> Result<Vec<PlateEntry>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .trim(if options.trim { Trim::Fields } else { Trim::None })
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("read CSV header")?.clone();
    let index = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(options.column.trim()))
        .ok_or_else(|| {
            anyhow!(
                "column '{}' not found (available: {})",
                options.column,
                headers.iter().collect::<Vec<_>>().join(", ")
            )
        })?;
    debug!(column = %options.column, index, "plate column located");

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.context("read CSV record")?;
        let line = record.position().map_or(0, csv::Position::line);
        let Some(value) = record.get(index) else {
            warn!(line, "row has no plate column");
            continue;
        };
        if options.skip_empty && value.is_empty() {
            continue;
        }
        entries.push(PlateEntry {
            line,
            raw: value.to_string(),
        });
    }
    Ok(entries)
}
