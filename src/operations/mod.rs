// src/operations/mod.rs

//! The gate vocabulary the circuit builder appends and the simulation
//! engine consumes.
//!
//! Qubits are addressed by global index: the message register occupies the
//! low indices, the ancilla register follows it. `Fourier` is a composite
//! gate spanning a qubit list; the engine expands it into elementary gates.

/// A single-qubit Pauli error kind, passed explicitly into the builder's
/// scramble phase by the caller. All three kinds are reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauliKind {
    /// Bit flip.
    X,
    /// Combined bit and phase flip.
    Y,
    /// Phase flip.
    Z,
}

/// One gate in the ordered circuit sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Pauli-X (bit flip) on one qubit.
    PauliX {
        /// Target qubit index.
        target: usize,
    },

    /// Pauli-Y on one qubit.
    PauliY {
        /// Target qubit index.
        target: usize,
    },

    /// Pauli-Z (phase flip) on one qubit.
    PauliZ {
        /// Target qubit index.
        target: usize,
    },

    /// Hadamard on one qubit.
    Hadamard {
        /// Target qubit index.
        target: usize,
    },

    /// Controlled-NOT between two distinct qubits.
    ControlledNot {
        /// Control qubit index.
        control: usize,
        /// Target qubit index.
        target: usize,
    },

    /// Composite quantum Fourier transform (or its inverse) across an
    /// ordered list of qubits.
    Fourier {
        /// The qubits spanned, least significant first.
        qubits: Vec<usize>,
        /// Apply the inverse transform when set.
        inverse: bool,
    },

    /// Scheduling fence between construction phases. Prevents reordering
    /// across the boundary during inspection; no effect on the final state.
    Barrier,

    /// Terminal measurement of one qubit into one classical bit.
    Measure {
        /// Measured qubit index.
        qubit: usize,
        /// Destination classical bit index.
        bit: usize,
    },
}

impl Gate {
    /// Returns the qubit indices this gate touches. Barriers touch none.
    pub fn involved_qubits(&self) -> Vec<usize> {
        match self {
            Gate::PauliX { target }
            | Gate::PauliY { target }
            | Gate::PauliZ { target }
            | Gate::Hadamard { target } => vec![*target],
            Gate::ControlledNot { control, target } => vec![*control, *target],
            Gate::Fourier { qubits, .. } => qubits.clone(),
            Gate::Barrier => Vec::new(),
            Gate::Measure { qubit, .. } => vec![*qubit],
        }
    }

    /// True for the barrier fence, which the engine skips.
    pub fn is_barrier(&self) -> bool {
        matches!(self, Gate::Barrier)
    }
}

/// Builds the Pauli gate of the given kind for a target qubit.
pub fn pauli_gate(kind: PauliKind, target: usize) -> Gate {
    match kind {
        PauliKind::X => Gate::PauliX { target },
        PauliKind::Y => Gate::PauliY { target },
        PauliKind::Z => Gate::PauliZ { target },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn involved_qubits_per_gate() {
        assert_eq!(Gate::PauliX { target: 4 }.involved_qubits(), vec![4]);
        assert_eq!(
            Gate::ControlledNot { control: 1, target: 6 }.involved_qubits(),
            vec![1, 6]
        );
        assert_eq!(
            Gate::Fourier { qubits: vec![0, 1, 2], inverse: true }.involved_qubits(),
            vec![0, 1, 2]
        );
        assert!(Gate::Barrier.involved_qubits().is_empty());
        assert!(Gate::Barrier.is_barrier());
    }

    #[test]
    fn pauli_gate_selects_kind() {
        assert_eq!(pauli_gate(PauliKind::X, 0), Gate::PauliX { target: 0 });
        assert_eq!(pauli_gate(PauliKind::Y, 1), Gate::PauliY { target: 1 });
        assert_eq!(pauli_gate(PauliKind::Z, 2), Gate::PauliZ { target: 2 });
    }
}
