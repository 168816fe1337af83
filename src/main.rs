mod clean;
mod config;
mod error;
mod load_clean;
mod models;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::clean::{clean_dataset, save_dataset};
use crate::config::CleanConfig;
use crate::load_clean::load_dataset;

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    run(&CleanConfig::default())
}

/// Load, clean and save. Any failing step aborts the whole run.
fn run(config: &CleanConfig) -> Result<()> {
    let input_file = config.input_path();
    let output_file = config.output_path();
    info!("cleaning {} -> {}", input_file.display(), output_file.display());

    let df_raw = load_dataset(&input_file, config)
        .with_context(|| format!("loading {}", input_file.display()))?;
    let df_clean = clean_dataset(&df_raw, config).context("cleaning dataset")?;

    save_dataset(&df_clean, &output_file)
        .with_context(|| format!("saving {}", output_file.display()))?;

    Ok(())
}
