use anyhow::{Context, Result};
use sheet_inspect::{config, logging, report::Reporter, services::excel::WorkbookLoader};

fn main() -> Result<()> {
    // Initialize logging
    logging::init_logging()?;

    // Load configuration
    let config = config::load_config();
    tracing::debug!("Configuration: {:?}", config);

    let worksheet = WorkbookLoader::new(config.sheet.clone())
        .load(&config.path)
        .with_context(|| format!("Failed to inspect {}", config.path.display()))?;

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), &worksheet);
    reporter.run(&config.report_options())?;

    Ok(())
}
