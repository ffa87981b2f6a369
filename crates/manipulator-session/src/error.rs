//! Error types for the `manipulator-session` crate.

use manipulator_engine::EngineError;

use crate::config::ConfigError;

/// Errors that can occur in the session layer.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The engine rejected an input or a world-generation request.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
