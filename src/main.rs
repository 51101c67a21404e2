use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use logo_forge::{BuildConfig, CONFIG_FILE_NAME};

fn main() -> Result<ExitCode> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = BuildConfig::load(Path::new(CONFIG_FILE_NAME))
        .context("Failed to load build configuration")?;
    log::info!(
        "Building {} assets into {}",
        config.brand,
        config.dist_dir.display()
    );

    let report = logo_forge::build(&config).context("Invalid output table")?;

    let written = report.written().count();
    let failed = report.failed().count();

    if failed > 0 {
        log::error!("{} written, {} failed", written, failed);
        for item in report.failed() {
            log::error!("  {}", item.path.display());
        }
        return Ok(ExitCode::FAILURE);
    }

    log::info!("All {} assets generated", written);
    Ok(ExitCode::SUCCESS)
}
