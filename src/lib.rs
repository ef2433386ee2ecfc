// src/lib.rs

//! `qrs` - A library simulating a quantum error-correcting code derived
//! from a classical Reed-Solomon code.
//!
//! A classical codeword's discrete Fourier spectrum is laid onto qubits,
//! a Pauli error channel scrambles the encoded state, and a transform-based
//! decoding circuit extracts syndrome information into ancilla qubits. The
//! crate provides the finite-field and Reed-Solomon layers, the quantum
//! register mapping, the phase-ordered circuit builder, and a state-vector
//! simulation backend returning measurement histograms.

pub mod core;
pub mod field;
pub mod classical;
pub mod quantum;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{QrsError, StateVector};
pub use field::BinaryField;
pub use classical::{ReedSolomonCode, SpectralMatrix};
pub use quantum::QuantumRsCode;
pub use operations::{Gate, PauliKind};
pub use circuits::{Circuit, CorrectionCircuitBuilder, Phase};
pub use simulation::{SimulationResult, Simulator};
pub use validation::check_normalization;

// Example: a complete noiseless correction cycle.
// Builds RS(3, 2) over GF(4), encodes a seeded message, prepares the
// spectral basis state, runs the encode/decode circuit without scrambling,
// and observes a single deterministic syndrome key.
/// ```
/// use qrs::{CorrectionCircuitBuilder, PauliKind, QuantumRsCode, ReedSolomonCode, Simulator};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// fn main() -> Result<(), qrs::QrsError> {
///     let code = ReedSolomonCode::new(3, 2)?;
///     assert_eq!(code.minimum_distance(), 2);
///
///     let qcode = QuantumRsCode::new(code);
///     assert_eq!(qcode.message_qubits(), 6);
///     assert_eq!(qcode.ancilla_qubits(), qcode.classical_bits());
///
///     let mut rng = StdRng::seed_from_u64(7);
///     let message = qcode.classical().generate_message(&mut rng);
///     let codeword = qcode.classical().encode(&message)?;
///     let basis = qcode.convert_to_quantum(&codeword)?;
///     assert_eq!(basis.len(), 6);
///
///     let mut builder = CorrectionCircuitBuilder::new(&qcode);
///     builder.initialize(&basis)?;
///     builder.encode()?;
///     builder.scramble(0, PauliKind::X, &mut rng)?;
///     builder.decode()?;
///     builder.measure()?;
///     let circuit = builder.finish()?;
///
///     let mut simulator = Simulator::with_seed(1);
///     let result = simulator.run(&circuit, 128)?;
///     // Noiseless run: every shot lands on the same syndrome key.
///     assert_eq!(result.counts().len(), 1);
///     let (_, count) = result.most_frequent().expect("histogram is non-empty");
///     assert_eq!(count, 128);
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
