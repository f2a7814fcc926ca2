use std::fmt;

/// Errors raised at the boundary of the simulation core
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Horizon must cover at least one month
    InvalidHorizon(u32),
    /// No preset registered under this id
    UnknownPreset(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidHorizon(months) => {
                write!(f, "horizon must be at least 1 month (got {months})")
            }
            SimulationError::UnknownPreset(id) => write!(f, "preset '{id}' not found"),
            SimulationError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;
