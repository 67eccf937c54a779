// error.rs - Error types for the engine and its configuration

use thiserror::Error;

/// Failures reported by the automaton engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("engine used before initialization")]
    NotInitialized,

    #[error("invalid cell value {value} at [{x}][{y}]")]
    InvalidCellState { x: usize, y: usize, value: u8 },
}

/// Failures while reading command line options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("flag {0} expects a value")]
    MissingValue(String),

    #[error("flag {flag} got invalid value '{value}'")]
    InvalidValue { flag: String, value: String },

    #[error("unknown flag {0}")]
    UnknownFlag(String),
}
