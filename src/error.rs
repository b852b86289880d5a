//! Error types for the frontend-facing parts of the crate.
//!
//! The simulation itself cannot fail; only terminal I/O and config loading can.

use crate::config::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Terminal or event-stream I/O failed
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
