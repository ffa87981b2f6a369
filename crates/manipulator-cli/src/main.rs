//! Command-line runner for the grid manipulator simulation.
//!
//! Takes a command string from the arguments, runs it against a freshly
//! generated world, and logs the full step trace, the optimized rendering,
//! and the final world state.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `manipulator-config.yaml` when present
//! 3. Build the session (grid, random sample placement)
//! 4. Validate and simulate the command string
//! 5. Log the trace and record a history entry

use std::path::Path;

use manipulator_session::{DEFAULT_CONFIG_PATH, HistoryLog, SessionConfig, SessionState};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error when configuration loading, world generation, or
/// command validation fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("manipulator starting");

    // 2. Load configuration, falling back to defaults without a file.
    let config_path = Path::new(DEFAULT_CONFIG_PATH);
    let config = if config_path.exists() {
        SessionConfig::load(config_path)?
    } else {
        SessionConfig::default()
    };
    info!(
        width = config.grid.width,
        height = config.grid.height,
        sample_count = config.samples.count,
        "Configuration loaded"
    );

    // 3. Build the session with a fresh world.
    let mut session = SessionState::from_config(&config)?;
    for sample in session.samples() {
        info!(id = %sample.id, x = sample.position.x, y = sample.position.y, "Sample placed");
    }

    // 4. The command string is the remaining arguments joined together;
    //    validation strips the whitespace this introduces.
    let raw: String = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
    if raw.trim().is_empty() {
        return Err("usage: manipulator <command string> (alphabet: Л П В Н О Б)".into());
    }

    let samples_before = session.samples().to_vec();
    let result = session.run_command(&raw)?;

    // 5. Log the trace and record the run.
    for step in &result.steps {
        info!(
            index = step.index,
            symbol = %step.symbol,
            x = step.manipulator.position.x,
            y = step.manipulator.position.y,
            holding = ?step.manipulator.holding,
            "Step"
        );
    }

    let mut history = HistoryLog::new();
    let entry_id = history.record(
        &raw,
        &result.optimized,
        samples_before,
        result.final_samples.clone(),
    );

    info!(
        optimized = %result.optimized,
        final_x = result.final_manipulator.position.x,
        final_y = result.final_manipulator.position.y,
        history_entry = %entry_id,
        "Execution complete"
    );

    Ok(())
}
