//! Fixed settings of the cleaning run.
//!
//! Nothing here is read from disk or the environment; `Default` is the run.

use std::path::PathBuf;

const DATA_DIR: &str = "data";
const INPUT_FILE_NAME: &str = "Titanic-Dataset.csv";
const OUTPUT_FILE_NAME: &str = "Titanic-Dataset-cleaned.csv";

/// Placeholder written in place of a missing categorical value.
pub const SENTINEL: &str = "Not known";

/// Cell texts read as missing, besides the empty field.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub data_dir: PathBuf,
    pub input_file: String,
    pub output_file: String,
    /// Columns whose missing cells get `sentinel` instead of dropping the row.
    pub fill_columns: Vec<String>,
    pub sentinel: String,
    pub na_values: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            input_file: INPUT_FILE_NAME.into(),
            output_file: OUTPUT_FILE_NAME.into(),
            fill_columns: vec!["Embarked".into(), "Cabin".into()],
            sentinel: SENTINEL.into(),
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CleanConfig {
    pub fn input_path(&self) -> PathBuf {
        self.data_dir.join(&self.input_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.data_dir.join(&self.output_file)
    }

    /// Whether a raw cell text counts as missing.
    pub fn is_na(&self, value: &str) -> bool {
        value.is_empty() || self.na_values.iter().any(|na| na == value)
    }
}
