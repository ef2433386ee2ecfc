//! Error handling logic

use std::fmt;

/// Error types raised while constructing codes, building circuits, or
/// running the simulation backend.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QrsError {
    /// Code or field parameters violate a construction precondition
    /// (e.g. `n` exceeds the field order minus one, or `k` is zero).
    /// Detected at construction time and never silently clamped.
    ConfigurationError {
        /// ConfigurationError failure message
        message: String,
    },

    /// An operation is inconsistent with the current state, such as a
    /// circuit-builder phase invoked out of order or a gate addressing a
    /// qubit outside the registers.
    InvalidOperation {
        /// InvalidOperation failure message
        message: String,
    },

    /// General error encountered during the simulation process itself,
    /// including register sizes the backend refuses to allocate.
    SimulationError {
        /// SimulationError failure message
        message: String,
    },

    /// The state vector failed a coherence check (norm deviated from one).
    Incoherence {
        /// Incoherence failure message
        message: String,
    },
}

impl fmt::Display for QrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrsError::ConfigurationError { message } => write!(f, "Configuration Error: {}", message),
            QrsError::InvalidOperation { message } => write!(f, "Invalid Operation: {}", message),
            QrsError::SimulationError { message } => write!(f, "Simulation Process Error: {}", message),
            QrsError::Incoherence { message } => write!(f, "Incoherence Violation: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QrsError {}
