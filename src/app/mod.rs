// Application layer: wires config, adapters and the engine into one run.

use crate::adapters::{source_for_path, DestinationWriter};
use crate::config::builder_from;
use crate::core::engine::SkylineEngine;
use crate::domain::model::SkylineReport;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SkylineError};

/// Reads the configured input, computes its skyline and writes it out.
pub fn run_job<C: ConfigProvider>(config: &C) -> Result<SkylineReport> {
    let input_path = config
        .input_path()
        .ok_or_else(|| SkylineError::MissingConfigError {
            field: "input_path".to_string(),
        })?;

    tracing::info!("📁 Input: {} ({:?})", input_path, config.input_format());

    let source = source_for_path(input_path, config.input_format())?;
    let sink = DestinationWriter::new(config.output_path(), config.output_format());

    let mut engine = SkylineEngine::new_with_monitoring(
        source,
        sink,
        builder_from(config),
        config.monitoring_enabled(),
    )
    .with_verification(config.verify());

    let report = engine.run()?;

    if let Some(path) = config.output_path() {
        tracing::info!("📁 Output saved to: {}", path);
    }

    Ok(report)
}
