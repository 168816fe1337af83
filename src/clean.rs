use crate::config::CleanConfig;
use crate::error::{CleanError, Result};
use crate::models::Dataset;
use csv::WriterBuilder;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Fills the configured categorical columns with the sentinel, then drops
/// every row still missing a value. Fill runs first so those columns never
/// cause a drop.
pub(crate) fn clean_dataset(dataset: &Dataset, config: &CleanConfig) -> Result<Dataset> {
    let fill_indices = config
        .fill_columns
        .iter()
        .map(|name| {
            dataset
                .column_index(name)
                .ok_or_else(|| CleanError::missing_column(name.as_str()))
        })
        .collect::<Result<Vec<usize>>>()?;

    for (name, &idx) in config.fill_columns.iter().zip(&fill_indices) {
        info!(
            column = %name,
            filled = dataset.missing_count(idx),
            "filling missing values with {:?}",
            config.sentinel
        );
    }

    // Step 1: sentinel substitution
    let filled = dataset.rows.iter().map(|row| {
        let mut row = row.clone();
        for &idx in &fill_indices {
            if row[idx].is_none() {
                row[idx] = Some(config.sentinel.clone());
            }
        }
        row
    });

    // Step 2: drop incomplete rows
    let rows: Vec<Vec<Option<String>>> = filled
        .filter(|row| Dataset::is_complete(row))
        .collect();

    info!(
        kept = rows.len(),
        dropped = dataset.len() - rows.len(),
        "dropped rows with missing values"
    );

    Ok(Dataset {
        headers: dataset.headers.clone(),
        rows,
    })
}

/// Writes the dataset as standard CSV with a header row and no index column.
/// An existing file at `output_file` is overwritten.
pub(crate) fn save_dataset(dataset: &Dataset, output_file: &Path) -> Result<()> {
    let file = File::create(output_file).map_err(|e| CleanError::io(output_file, e))?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    wtr.write_record(&dataset.headers)?;
    for row in &dataset.rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| CleanError::io(output_file, e))?;
    info!(rows = dataset.len(), "saved cleaned data to {}", output_file.display());

    Ok(())
}
