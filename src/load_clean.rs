use std::fs;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use itertools::Itertools;
use tracing::{debug, info};

use crate::config::CleanConfig;
use crate::error::{CleanError, Result};
use crate::models::Dataset;

/// Repairs one row of the quoted export: drops the enclosing pair of quotes,
/// then collapses every doubled quote into a single one.
pub(crate) fn normalize_line(line: &str) -> String {
    let inner = match line.strip_prefix('"') {
        Some(rest) if line.ends_with('"') => rest.strip_suffix('"').unwrap_or(rest),
        _ => line,
    };
    inner.replace("\"\"", "\"")
}

/// Splits on `\r\n`, `\n` and bare `\r`. A trailing terminator does not
/// yield an empty last line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find(|c: char| c == '\n' || c == '\r') {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

pub(crate) fn normalize_csv(text: &str) -> String {
    split_lines(text).into_iter().map(normalize_line).join("\n")
}

// Load and normalize the raw export
pub(crate) fn load_dataset(file_path: &Path, config: &CleanConfig) -> Result<Dataset> {
    let bytes = fs::read(file_path).map_err(|e| CleanError::io(file_path, e))?;

    // Best-effort decoding, bad bytes become U+FFFD
    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let wrapped = split_lines(text)
        .into_iter()
        .filter(|l| l.starts_with('"') && l.ends_with('"'))
        .count();
    debug!(wrapped, path = %file_path.display(), "unwrapping quoted rows");

    let normalized = normalize_csv(text);
    let dataset = parse_dataset(normalized.as_bytes(), config)?;

    info!(
        rows = dataset.len(),
        columns = dataset.headers.len(),
        "loaded {}",
        file_path.display()
    );
    Ok(dataset)
}

/// Parses standard comma-separated text with a header row.
///
/// Rows shorter than the header are padded with missing cells; longer rows
/// are rejected. Whitespace-only lines are skipped.
pub(crate) fn parse_dataset<R: Read>(reader: R, config: &CleanConfig) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let width = headers.len();
    let mut dataset = Dataset::new(headers);

    for result in rdr.records() {
        let record = result?;
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }
        if record.len() > width {
            return Err(CleanError::RaggedRow {
                line: record.position().map_or(0, |p| p.line()),
                expected: width,
                found: record.len(),
            });
        }

        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|value| (!config.is_na(value)).then(|| value.to_string()))
            .collect();
        row.resize(width, None);
        dataset.rows.push(row);
    }

    Ok(dataset)
}
