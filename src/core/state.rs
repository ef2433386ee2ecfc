// src/core/state.rs

use num_complex::Complex;
use std::fmt;

/// A dense vector of complex amplitudes over the computational basis of the
/// simulated qubit registers.
///
/// The basis is little-endian: bit `q` of a basis-state index is the value
/// of qubit `q`. The vector is owned exclusively by the simulation engine
/// for the lifetime of one run.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    /// Amplitudes, indexed by computational basis state.
    amplitudes: Vec<Complex<f64>>,
}

impl StateVector {
    /// Creates a new state vector from a given amplitude vector.
    /// Normalization is not enforced here; validation happens during
    /// simulation (see `validation::check_normalization`).
    pub(crate) fn new(amplitudes: Vec<Complex<f64>>) -> Self {
        Self { amplitudes }
    }

    /// Provides read-only access to the amplitudes.
    pub fn vector(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Provides mutable access for the simulation engine to modify the state.
    pub(crate) fn vector_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Gets the dimension of the state vector (2^N for N qubits).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
