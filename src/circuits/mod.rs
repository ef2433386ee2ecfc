// src/circuits/mod.rs

//! The circuit container and the phase-ordered builder that assembles the
//! encode / scramble / decode / measure sequence.
//!
//! `Circuit` is a plain ordered gate list over three register groups:
//! message qubits at global indices `[0, m)`, ancilla qubits at
//! `[m, m + a)`, and `a` classical readout bits. The builder owns a circuit
//! by composition and exposes only the phase methods; the phases must be
//! invoked in strict order, and a failed phase leaves the builder in an
//! unusable state (the only recovery is to discard and rebuild).

use crate::core::QrsError;
use crate::operations::{Gate, PauliKind, pauli_gate};
use crate::quantum::QuantumRsCode;
use rand::Rng;
use std::fmt;

/// An ordered sequence of gates over the message, ancilla, and classical
/// register groups. Built incrementally, submitted to the simulator once,
/// then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    message_qubits: usize,
    ancilla_qubits: usize,
    classical_bits: usize,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates an empty circuit over the given register sizes.
    pub fn new(message_qubits: usize, ancilla_qubits: usize, classical_bits: usize) -> Self {
        Self {
            message_qubits,
            ancilla_qubits,
            classical_bits,
            gates: Vec::new(),
        }
    }

    /// Appends a single gate to the end of the sequence.
    pub fn add_gate(&mut self, gate: Gate) {
        self.gates.push(gate);
    }

    /// Appends multiple gates from an iterator.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        self.gates.extend(gates);
    }

    /// The ordered gate sequence.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Total number of gates, barriers included.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Width of the message register.
    pub fn message_qubits(&self) -> usize {
        self.message_qubits
    }

    /// Width of the ancilla register.
    pub fn ancilla_qubits(&self) -> usize {
        self.ancilla_qubits
    }

    /// Width of the classical readout register.
    pub fn classical_bits(&self) -> usize {
        self.classical_bits
    }

    /// Total qubit count (message + ancilla).
    pub fn num_qubits(&self) -> usize {
        self.message_qubits + self.ancilla_qubits
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "qrs::Circuit[{} gates on {} qubits ({} message + {} ancilla), {} classical bits]",
            self.gates.len(),
            self.num_qubits(),
            self.message_qubits,
            self.ancilla_qubits,
            self.classical_bits
        )?;
        for (i, gate) in self.gates.iter().enumerate() {
            let line = match gate {
                Gate::PauliX { target } => format!("X    q{}", target),
                Gate::PauliY { target } => format!("Y    q{}", target),
                Gate::PauliZ { target } => format!("Z    q{}", target),
                Gate::Hadamard { target } => format!("H    q{}", target),
                Gate::ControlledNot { control, target } => format!("CX   q{} -> q{}", control, target),
                Gate::Fourier { qubits, inverse } => format!(
                    "{}  q{}..q{}",
                    if *inverse { "QFT†" } else { "QFT " },
                    qubits.first().copied().unwrap_or(0),
                    qubits.last().copied().unwrap_or(0)
                ),
                Gate::Barrier => "────".to_string(),
                Gate::Measure { qubit, bit } => format!("M    q{} -> c{}", qubit, bit),
            };
            writeln!(f, "  {:>4}: {}", i, line)?;
        }
        Ok(())
    }
}

/// The builder's construction phases, strictly sequential. No re-entry and
/// no partial rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No gates appended yet.
    Uninitialized,
    /// Basis state prepared.
    Initialized,
    /// Superposition and inverse transform applied.
    Encoded,
    /// Error channel applied (possibly zero errors).
    Scrambled,
    /// Transform and syndrome extraction applied.
    Decoded,
    /// Ancilla measurements appended; the circuit is complete.
    Measured,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "Uninitialized",
            Phase::Initialized => "Initialized",
            Phase::Encoded => "Encoded",
            Phase::Scrambled => "Scrambled",
            Phase::Decoded => "Decoded",
            Phase::Measured => "Measured",
        };
        write!(f, "{}", name)
    }
}

/// Assembles the error-correction cycle over the register layout of a
/// [`QuantumRsCode`]. Holds the circuit by composition and exposes only the
/// phase methods.
#[derive(Debug, Clone)]
pub struct CorrectionCircuitBuilder {
    circuit: Circuit,
    /// Classical code dimension k.
    dimension: usize,
    /// Quantum code dimension Q.
    code_dimension: usize,
    phase: Phase,
}

impl CorrectionCircuitBuilder {
    /// Creates a builder over the register layout derived by the mapper.
    pub fn new(qcode: &QuantumRsCode) -> Self {
        Self {
            circuit: Circuit::new(
                qcode.message_qubits(),
                qcode.ancilla_qubits(),
                qcode.classical_bits(),
            ),
            dimension: qcode.classical().dimension(),
            code_dimension: qcode.code_dimension(),
            phase: Phase::Uninitialized,
        }
    }

    /// The builder's current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read-only view of the circuit built so far.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    fn expect_phase(&self, expected: Phase, operation: &str) -> Result<(), QrsError> {
        if self.phase != expected {
            return Err(QrsError::InvalidOperation {
                message: format!(
                    "{} requires phase {}, but the builder is in phase {}",
                    operation, expected, self.phase
                ),
            });
        }
        Ok(())
    }

    /// First message-register index outside the redundancy positions; the
    /// qubits from here up receive the Hadamard layers.
    fn free_qubit_start(&self) -> usize {
        self.dimension + self.dimension * self.code_dimension
    }

    /// Prepares the computational basis state selected by `basis`: one X
    /// gate per set bit, walking the vector in reverse index order to match
    /// the register bit-ordering convention, then a barrier.
    ///
    /// # Errors
    /// Returns `QrsError::InvalidOperation` if called out of order or if
    /// the basis vector length differs from the message register width.
    pub fn initialize(&mut self, basis: &[u8]) -> Result<(), QrsError> {
        self.expect_phase(Phase::Uninitialized, "initialize")?;
        if basis.len() != self.circuit.message_qubits() {
            return Err(QrsError::InvalidOperation {
                message: format!(
                    "basis vector has {} bits, expected {} message qubits",
                    basis.len(),
                    self.circuit.message_qubits()
                ),
            });
        }
        for (qubit, &bit) in basis.iter().rev().enumerate() {
            if bit == 1 {
                self.circuit.add_gate(Gate::PauliX { target: qubit });
            }
        }
        self.circuit.add_gate(Gate::Barrier);
        self.phase = Phase::Initialized;
        Ok(())
    }

    /// Encoding: Hadamard on every free message qubit (index at or above
    /// `k + k*Q`), then the inverse Fourier transform across the whole
    /// message register, then a barrier.
    pub fn encode(&mut self) -> Result<(), QrsError> {
        self.expect_phase(Phase::Initialized, "encode")?;
        let message = self.circuit.message_qubits();
        for target in self.free_qubit_start()..message {
            self.circuit.add_gate(Gate::Hadamard { target });
        }
        self.circuit.add_gate(Gate::Fourier {
            qubits: (0..message).collect(),
            inverse: true,
        });
        self.circuit.add_gate(Gate::Barrier);
        self.phase = Phase::Encoded;
        Ok(())
    }

    /// Error channel: exactly `num_errors` single-qubit Pauli gates of the
    /// given kind, each on a uniformly random message qubit. Qubits are
    /// drawn with replacement, so a repeated hit cancels the error; callers
    /// needing reproducible placements must seed the source they pass in.
    pub fn scramble<R: Rng + ?Sized>(
        &mut self,
        num_errors: usize,
        kind: PauliKind,
        rng: &mut R,
    ) -> Result<(), QrsError> {
        self.expect_phase(Phase::Encoded, "scramble")?;
        let message = self.circuit.message_qubits();
        for _ in 0..num_errors {
            let target = rng.random_range(0..message);
            self.circuit.add_gate(pauli_gate(kind, target));
        }
        self.phase = Phase::Scrambled;
        Ok(())
    }

    /// Decoding: forward Fourier transform across the message register,
    /// syndrome extraction into the ancillas, and the undo of the encoding
    /// superposition.
    ///
    /// The extraction appends a controlled-NOT from qubit `i` into ancilla
    /// `i` for the first `k*Q` ancillas, a Hadamard layer on the free
    /// message qubits, a second controlled-NOT batch from a running qubit
    /// index (starting at `k + k*Q`) into ancillas `[k*Q, 2*k*Q)`, the
    /// Hadamard layer again, and finally the inverse Fourier transform.
    pub fn decode(&mut self) -> Result<(), QrsError> {
        self.expect_phase(Phase::Scrambled, "decode")?;
        let message = self.circuit.message_qubits();
        let ancilla_base = message;
        let kq = self.dimension * self.code_dimension;

        self.circuit.add_gate(Gate::Fourier {
            qubits: (0..message).collect(),
            inverse: false,
        });

        for i in 0..kq {
            self.circuit.add_gate(Gate::ControlledNot {
                control: i,
                target: ancilla_base + i,
            });
        }

        for target in self.free_qubit_start()..message {
            self.circuit.add_gate(Gate::Hadamard { target });
        }

        let mut step = self.free_qubit_start();
        for ancilla in kq..2 * kq {
            self.circuit.add_gate(Gate::ControlledNot {
                control: step,
                target: ancilla_base + ancilla,
            });
            step += 1;
        }

        for target in self.free_qubit_start()..message {
            self.circuit.add_gate(Gate::Hadamard { target });
        }

        self.circuit.add_gate(Gate::Fourier {
            qubits: (0..message).collect(),
            inverse: true,
        });
        self.circuit.add_gate(Gate::Barrier);
        self.phase = Phase::Decoded;
        Ok(())
    }

    /// Measures every ancilla qubit into its classical readout bit. The
    /// message qubits stay unmeasured.
    pub fn measure(&mut self) -> Result<(), QrsError> {
        self.expect_phase(Phase::Decoded, "measure")?;
        let ancilla_base = self.circuit.message_qubits();
        for i in 0..self.circuit.ancilla_qubits() {
            self.circuit.add_gate(Gate::Measure {
                qubit: ancilla_base + i,
                bit: i,
            });
        }
        self.phase = Phase::Measured;
        Ok(())
    }

    /// Finalizes the build and yields the circuit.
    ///
    /// # Errors
    /// Returns `QrsError::InvalidOperation` unless all phases completed.
    pub fn finish(self) -> Result<Circuit, QrsError> {
        self.expect_phase(Phase::Measured, "finish")?;
        Ok(self.circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classical::ReedSolomonCode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_qcode() -> QuantumRsCode {
        QuantumRsCode::new(ReedSolomonCode::new(3, 2).expect("valid code"))
    }

    fn basis_for(qcode: &QuantumRsCode, seed: u64) -> Vec<u8> {
        let mut rng = StdRng::seed_from_u64(seed);
        let message = qcode.classical().generate_message(&mut rng);
        let codeword = qcode.classical().encode(&message).expect("encode");
        qcode.convert_to_quantum(&codeword).expect("convert")
    }

    #[test]
    fn phases_must_run_in_order() {
        let qcode = small_qcode();
        let mut builder = CorrectionCircuitBuilder::new(&qcode);
        assert_eq!(builder.phase(), Phase::Uninitialized);

        // encode before initialize is rejected.
        assert!(matches!(
            builder.encode(),
            Err(QrsError::InvalidOperation { .. })
        ));

        let basis = basis_for(&qcode, 1);
        builder.initialize(&basis).expect("initialize");
        // initialize cannot run twice.
        assert!(matches!(
            builder.initialize(&basis),
            Err(QrsError::InvalidOperation { .. })
        ));
        builder.encode().expect("encode");

        let mut rng = StdRng::seed_from_u64(2);
        builder.scramble(0, PauliKind::X, &mut rng).expect("scramble");
        builder.decode().expect("decode");
        builder.measure().expect("measure");
        assert_eq!(builder.phase(), Phase::Measured);

        let circuit = builder.finish().expect("finish");
        assert_eq!(circuit.num_qubits(), 14);
    }

    #[test]
    fn finish_requires_measurement() {
        let qcode = small_qcode();
        let builder = CorrectionCircuitBuilder::new(&qcode);
        assert!(matches!(
            builder.finish(),
            Err(QrsError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn initialize_sets_reversed_bits() {
        let qcode = small_qcode();
        let mut builder = CorrectionCircuitBuilder::new(&qcode);
        // Bit 0 of the (reversed) walk is the last vector entry.
        builder.initialize(&[0, 1, 0, 0, 0, 1]).expect("initialize");
        let targets: Vec<usize> = builder
            .circuit()
            .gates()
            .iter()
            .filter_map(|g| match g {
                Gate::PauliX { target } => Some(*target),
                _ => None,
            })
            .collect();
        assert_eq!(targets, vec![0, 4]);
    }

    #[test]
    fn initialize_rejects_wrong_basis_length() {
        let qcode = small_qcode();
        let mut builder = CorrectionCircuitBuilder::new(&qcode);
        assert!(matches!(
            builder.initialize(&[1, 0]),
            Err(QrsError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn scramble_zero_appends_no_gates() {
        // Scenario B: scramble(0) leaves the gate sequence untouched.
        let qcode = small_qcode();
        let mut builder = CorrectionCircuitBuilder::new(&qcode);
        builder.initialize(&basis_for(&qcode, 7)).expect("initialize");
        builder.encode().expect("encode");
        let before = builder.circuit().len();

        let mut rng = StdRng::seed_from_u64(0);
        builder.scramble(0, PauliKind::X, &mut rng).expect("scramble");
        assert_eq!(builder.circuit().len(), before);
        assert_eq!(builder.phase(), Phase::Scrambled);
    }

    #[test]
    fn scramble_appends_requested_error_kind() {
        let qcode = small_qcode();
        for (kind, want) in [
            (PauliKind::X, "X"),
            (PauliKind::Y, "Y"),
            (PauliKind::Z, "Z"),
        ] {
            let mut builder = CorrectionCircuitBuilder::new(&qcode);
            builder.initialize(&basis_for(&qcode, 7)).expect("initialize");
            builder.encode().expect("encode");
            let before = builder.circuit().len();
            let mut rng = StdRng::seed_from_u64(42);
            builder.scramble(2, kind, &mut rng).expect("scramble");

            let appended = &builder.circuit().gates()[before..];
            assert_eq!(appended.len(), 2);
            for gate in appended {
                let name = match gate {
                    Gate::PauliX { .. } => "X",
                    Gate::PauliY { .. } => "Y",
                    Gate::PauliZ { .. } => "Z",
                    other => panic!("unexpected gate {:?}", other),
                };
                assert_eq!(name, want);
                let target = gate.involved_qubits()[0];
                assert!(target < qcode.message_qubits());
            }
        }
    }

    #[test]
    fn decode_extracts_into_both_ancilla_batches() {
        let qcode = small_qcode();
        let mut builder = CorrectionCircuitBuilder::new(&qcode);
        builder.initialize(&basis_for(&qcode, 7)).expect("initialize");
        builder.encode().expect("encode");
        let mut rng = StdRng::seed_from_u64(0);
        builder.scramble(0, PauliKind::X, &mut rng).expect("scramble");
        builder.decode().expect("decode");

        let kq = qcode.classical().dimension() * qcode.code_dimension();
        let cnot_targets: Vec<usize> = builder
            .circuit()
            .gates()
            .iter()
            .filter_map(|g| match g {
                Gate::ControlledNot { target, .. } => Some(*target - qcode.message_qubits()),
                _ => None,
            })
            .collect();
        // One CNOT per ancilla, covering [0, 2kQ) in order.
        assert_eq!(cnot_targets, (0..2 * kq).collect::<Vec<_>>());
    }

    #[test]
    fn measure_covers_every_ancilla() {
        let qcode = small_qcode();
        let mut builder = CorrectionCircuitBuilder::new(&qcode);
        builder.initialize(&basis_for(&qcode, 7)).expect("initialize");
        builder.encode().expect("encode");
        let mut rng = StdRng::seed_from_u64(0);
        builder.scramble(0, PauliKind::X, &mut rng).expect("scramble");
        builder.decode().expect("decode");
        builder.measure().expect("measure");

        let measures: Vec<(usize, usize)> = builder
            .circuit()
            .gates()
            .iter()
            .filter_map(|g| match g {
                Gate::Measure { qubit, bit } => Some((*qubit, *bit)),
                _ => None,
            })
            .collect();
        assert_eq!(measures.len(), qcode.ancilla_qubits());
        for (i, (qubit, bit)) in measures.iter().enumerate() {
            assert_eq!(*qubit, qcode.message_qubits() + i);
            assert_eq!(*bit, i);
        }
    }
}
