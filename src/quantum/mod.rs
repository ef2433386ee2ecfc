// src/quantum/mod.rs

//! Mapping from the classical code to quantum register sizing and basis
//! states.
//!
//! `QuantumRsCode` owns a `ReedSolomonCode` and derives, once at
//! construction, the width of each register group: `k * n` message qubits,
//! `2 * k * Q` ancilla qubits, and an equal number of classical readout
//! bits, where Q is the dimension of the quantum code. A classical codeword
//! becomes a computational-basis state by taking its spectral image and
//! expanding every field element into its k-bit binary form.

use crate::classical::ReedSolomonCode;
use crate::core::QrsError;

/// Quantum register sizing derived from a classical Reed-Solomon code,
/// plus the codeword-to-basis-state conversion.
#[derive(Debug, Clone)]
pub struct QuantumRsCode {
    classical: ReedSolomonCode,
    message_qubits: usize,
    code_dimension: usize,
    ancilla_qubits: usize,
    classical_bits: usize,
}

impl QuantumRsCode {
    /// Derives the quantum register layout from the classical code.
    /// The sizes are fixed for the lifetime of the value and never
    /// recomputed.
    pub fn new(classical: ReedSolomonCode) -> Self {
        let message_qubits = classical.dimension() * classical.length();
        let code_dimension = derive_dimension(&classical);
        let ancilla_qubits = 2 * classical.dimension() * code_dimension;
        Self {
            classical,
            message_qubits,
            code_dimension,
            ancilla_qubits,
            classical_bits: ancilla_qubits,
        }
    }

    /// The wrapped classical code.
    pub fn classical(&self) -> &ReedSolomonCode {
        &self.classical
    }

    /// Width of the message register: k * n qubits.
    pub fn message_qubits(&self) -> usize {
        self.message_qubits
    }

    /// Dimension Q of the quantum code.
    pub fn code_dimension(&self) -> usize {
        self.code_dimension
    }

    /// Width of the ancilla register: 2 * k * Q qubits.
    pub fn ancilla_qubits(&self) -> usize {
        self.ancilla_qubits
    }

    /// Width of the classical readout register; mirrors the ancilla width.
    pub fn classical_bits(&self) -> usize {
        self.classical_bits
    }

    /// Converts a classical codeword into the basis-state bit vector to
    /// prepare: the spectral image of the codeword, with each field element
    /// expanded to k bits (most significant first) and concatenated in
    /// order. The result has length `k * n` with entries in {0, 1}; set
    /// bits select the qubits prepared in |1>.
    ///
    /// # Errors
    /// Returns `QrsError::InvalidOperation` if the codeword length is not n.
    pub fn convert_to_quantum(&self, codeword: &[u16]) -> Result<Vec<u8>, QrsError> {
        let spectrum = self.classical.spectral_transform(codeword)?;
        let field = self.classical.field();
        let mut basis = Vec::with_capacity(self.message_qubits);
        for element in spectrum {
            basis.extend(field.element_bits(element));
        }
        Ok(basis)
    }
}

/// Q from K = n - d + 1. At the boundary K == n/2 the comparison is strict,
/// so equality falls to the else branch (where n = 2K makes Q zero).
fn derive_dimension(classical: &ReedSolomonCode) -> usize {
    let n = classical.length();
    let k = classical.dimension();
    let big_k = n - classical.minimum_distance() + 1;
    if 2 * big_k > n {
        k * (2 * big_k - n)
    } else {
        k * (n - 2 * big_k)
    }
}
