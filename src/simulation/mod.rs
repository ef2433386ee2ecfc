// src/simulation/mod.rs

//! Executes circuits on the state-vector backend and samples measurement
//! histograms. This module contains the `Simulator` entry point and the
//! internal `SimulationEngine` responsible for evolving the amplitudes.

// Make engine module crate visible for tests
mod results;
pub(crate) mod engine;

// Re-export the main public interface type
pub use results::SimulationResult;

use crate::circuits::Circuit;
use crate::core::QrsError;
use crate::operations::Gate;
use crate::validation;
use engine::SimulationEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// The simulation backend: evolves the circuit's state once, then samples
/// the classical-register distribution for the requested number of shots.
///
/// All measurements in a circuit are terminal, so a single state evolution
/// suffices; per-shot sampling draws from the marginal distribution over
/// the measured qubits. The call blocks until sampling completes; callers
/// wanting cancellation must wrap it with their own timeout policy.
pub struct Simulator {
    rng: StdRng,
}

impl Simulator {
    /// Creates a simulator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a simulator with a fixed seed for reproducible histograms.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Runs the circuit and returns the sampled measurement histogram.
    ///
    /// # Errors
    /// Propagates engine failures (register too large, malformed gates) and
    /// rejects circuits that interleave gates after measurements, a zero
    /// shot count, or a state that lost normalization.
    pub fn run(&mut self, circuit: &Circuit, shots: usize) -> Result<SimulationResult, QrsError> {
        if shots == 0 {
            return Err(QrsError::InvalidOperation {
                message: "shot count must be positive".to_string(),
            });
        }

        let mut engine = SimulationEngine::init(circuit.num_qubits())?;
        let mut measures: Vec<(usize, usize)> = Vec::new();

        for gate in circuit.gates() {
            match gate {
                Gate::Measure { qubit, bit } => {
                    if *bit >= circuit.classical_bits() {
                        return Err(QrsError::InvalidOperation {
                            message: format!(
                                "classical bit {} out of range for {} bits",
                                bit,
                                circuit.classical_bits()
                            ),
                        });
                    }
                    measures.push((*qubit, *bit));
                }
                _ => {
                    if !measures.is_empty() {
                        return Err(QrsError::InvalidOperation {
                            message: "gates after measurement are not supported".to_string(),
                        });
                    }
                    engine.apply_gate(gate)?;
                }
            }
        }

        validation::check_normalization(engine.state(), None)?;

        let distribution = engine.classical_distribution(&measures);
        let width = circuit.classical_bits();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..shots {
            let sample: f64 = self.rng.random();
            let mut cumulative = 0.0;
            let mut chosen = distribution.last().map(|(key, _)| *key).unwrap_or(0);
            for (key, probability) in &distribution {
                cumulative += probability;
                if sample < cumulative {
                    chosen = *key;
                    break;
                }
            }
            *counts.entry(format_key(chosen, width)).or_insert(0) += 1;
        }

        Ok(SimulationResult::new(counts, shots))
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a classical register value as a bit-string, highest bit leftmost.
fn format_key(value: u64, width: usize) -> String {
    (0..width)
        .rev()
        .map(|bit| if (value >> bit) & 1 == 1 { '1' } else { '0' })
        .collect()
}
