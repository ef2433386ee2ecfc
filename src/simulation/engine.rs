// src/simulation/engine.rs

use crate::core::{QrsError, StateVector};
use crate::operations::Gate;
use num_complex::Complex;
use num_traits::Zero;
use std::collections::HashMap;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Largest register the dense backend will allocate (2^30 amplitudes).
/// Construction-time sizing has no such limit; this only bounds execution.
const MAX_QUBITS: usize = 30;

/// Probabilities below this are treated as numerical noise when building
/// the measurement distribution.
const PROBABILITY_FLOOR: f64 = 1e-12;

/// The state-vector engine evolving the amplitudes of all qubits in a
/// circuit. (Internal visibility)
///
/// The basis is little-endian: bit `q` of a basis-state index holds the
/// value of qubit `q`.
pub(crate) struct SimulationEngine {
    /// Amplitudes over the 2^N computational basis states.
    state: StateVector,
    /// Number of qubits being simulated (N).
    num_qubits: usize,
}

impl SimulationEngine {
    /// Initializes the engine in the all-zeros basis state |0...0>.
    pub(crate) fn init(num_qubits: usize) -> Result<Self, QrsError> {
        if num_qubits == 0 {
            return Err(QrsError::InvalidOperation {
                message: "cannot initialize simulation engine with zero qubits".to_string(),
            });
        }
        if num_qubits > MAX_QUBITS {
            return Err(QrsError::SimulationError {
                message: format!(
                    "{} qubits exceed the dense backend limit of {}",
                    num_qubits, MAX_QUBITS
                ),
            });
        }
        let dim = 1usize
            .checked_shl(num_qubits as u32)
            .ok_or_else(|| QrsError::SimulationError {
                message: "state vector dimension overflows usize".to_string(),
            })?;

        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Ok(Self {
            state: StateVector::new(amplitudes),
            num_qubits,
        })
    }

    /// Read-only view of the current state.
    pub(crate) fn state(&self) -> &StateVector {
        &self.state
    }

    // Crate-visible state injection for tests.
    #[cfg(test)]
    pub(crate) fn set_state(&mut self, state: StateVector) -> Result<(), QrsError> {
        if state.dim() != self.state.dim() {
            return Err(QrsError::SimulationError {
                message: format!(
                    "cannot set state: dimension {} does not match engine dimension {}",
                    state.dim(),
                    self.state.dim()
                ),
            });
        }
        self.state = state;
        Ok(())
    }

    /// Applies a single non-measurement gate to the state.
    pub(crate) fn apply_gate(&mut self, gate: &Gate) -> Result<(), QrsError> {
        match gate {
            Gate::PauliX { target } => self.apply_single_qubit_gate(*target, &pauli_x_matrix()),
            Gate::PauliY { target } => self.apply_single_qubit_gate(*target, &pauli_y_matrix()),
            Gate::PauliZ { target } => self.apply_single_qubit_gate(*target, &pauli_z_matrix()),
            Gate::Hadamard { target } => self.apply_single_qubit_gate(*target, &hadamard_matrix()),
            Gate::ControlledNot { control, target } => self.apply_cnot(*control, *target),
            Gate::Fourier { qubits, inverse } => self.apply_fourier(qubits, *inverse),
            Gate::Barrier => Ok(()),
            Gate::Measure { .. } => Err(QrsError::InvalidOperation {
                message: "measurement gates are resolved by the simulator, not the engine"
                    .to_string(),
            }),
        }
    }

    fn check_qubit(&self, qubit: usize) -> Result<(), QrsError> {
        if qubit >= self.num_qubits {
            return Err(QrsError::InvalidOperation {
                message: format!(
                    "qubit index {} out of range for {} qubits",
                    qubit, self.num_qubits
                ),
            });
        }
        Ok(())
    }

    /// Applies a 2x2 matrix to one qubit by iterating the basis-state pairs
    /// differing only in that qubit's bit.
    fn apply_single_qubit_gate(
        &mut self,
        target: usize,
        matrix: &[[Complex<f64>; 2]; 2],
    ) -> Result<(), QrsError> {
        self.check_qubit(target)?;
        let mask = 1usize << target;
        let dim = self.state.dim();
        let vec = self.state.vector_mut();

        for i in 0..dim {
            if i & mask != 0 {
                continue;
            }
            let i1 = i | mask;
            let psi_0 = vec[i];
            let psi_1 = vec[i1];
            vec[i] = matrix[0][0] * psi_0 + matrix[0][1] * psi_1;
            vec[i1] = matrix[1][0] * psi_0 + matrix[1][1] * psi_1;
        }
        Ok(())
    }

    /// Controlled-NOT: swaps the target-bit pair in every basis state whose
    /// control bit is set.
    fn apply_cnot(&mut self, control: usize, target: usize) -> Result<(), QrsError> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QrsError::InvalidOperation {
                message: "control and target of a controlled-NOT cannot coincide".to_string(),
            });
        }
        let c_mask = 1usize << control;
        let t_mask = 1usize << target;
        let dim = self.state.dim();
        let vec = self.state.vector_mut();

        for i in 0..dim {
            if i & c_mask != 0 && i & t_mask == 0 {
                vec.swap(i, i | t_mask);
            }
        }
        Ok(())
    }

    /// Controlled phase rotation diag(1, 1, 1, e^{i theta}).
    fn apply_controlled_phase(
        &mut self,
        control: usize,
        target: usize,
        theta: f64,
    ) -> Result<(), QrsError> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(QrsError::InvalidOperation {
                message: "control and target of a controlled phase cannot coincide".to_string(),
            });
        }
        let both = (1usize << control) | (1usize << target);
        let phase = Complex::new(theta.cos(), theta.sin());
        let dim = self.state.dim();
        let vec = self.state.vector_mut();

        for (i, amp) in vec.iter_mut().enumerate().take(dim) {
            if i & both == both {
                *amp *= phase;
            }
        }
        Ok(())
    }

    /// Exchanges two qubits.
    fn apply_swap(&mut self, a: usize, b: usize) -> Result<(), QrsError> {
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Ok(());
        }
        let a_mask = 1usize << a;
        let b_mask = 1usize << b;
        let dim = self.state.dim();
        let vec = self.state.vector_mut();

        for i in 0..dim {
            if i & a_mask != 0 && i & b_mask == 0 {
                vec.swap(i, (i & !a_mask) | b_mask);
            }
        }
        Ok(())
    }

    /// Expands the composite Fourier gate into Hadamard, controlled-phase,
    /// and swap layers. `qubits` lists the spanned qubits least significant
    /// first; the inverse runs the daggered sequence in reverse.
    fn apply_fourier(&mut self, qubits: &[usize], inverse: bool) -> Result<(), QrsError> {
        let m = qubits.len();
        if inverse {
            for i in 0..m / 2 {
                self.apply_swap(qubits[i], qubits[m - 1 - i])?;
            }
            for i in 0..m {
                for j in 0..i {
                    let theta = -PI / (1u64 << (i - j)) as f64;
                    self.apply_controlled_phase(qubits[j], qubits[i], theta)?;
                }
                self.apply_single_qubit_gate(qubits[i], &hadamard_matrix())?;
            }
        } else {
            for i in (0..m).rev() {
                self.apply_single_qubit_gate(qubits[i], &hadamard_matrix())?;
                for j in (0..i).rev() {
                    let theta = PI / (1u64 << (i - j)) as f64;
                    self.apply_controlled_phase(qubits[j], qubits[i], theta)?;
                }
            }
            for i in 0..m / 2 {
                self.apply_swap(qubits[i], qubits[m - 1 - i])?;
            }
        }
        Ok(())
    }

    /// Marginal probability distribution over the classical readout
    /// register: basis-state probabilities bucketed by the values of the
    /// measured qubits, mapped through their classical bit positions.
    /// Returned sorted by key for deterministic sampling.
    pub(crate) fn classical_distribution(&self, measures: &[(usize, usize)]) -> Vec<(u64, f64)> {
        let mut buckets: HashMap<u64, f64> = HashMap::new();
        for (i, amp) in self.state.vector().iter().enumerate() {
            let p = amp.norm_sqr();
            if p < PROBABILITY_FLOOR {
                continue;
            }
            let mut key = 0u64;
            for &(qubit, bit) in measures {
                if (i >> qubit) & 1 == 1 {
                    key |= 1 << bit;
                }
            }
            *buckets.entry(key).or_insert(0.0) += p;
        }
        let mut distribution: Vec<(u64, f64)> = buckets.into_iter().collect();
        distribution.sort_by_key(|(key, _)| *key);
        distribution
    }
}

fn pauli_x_matrix() -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::zero(), Complex::new(1.0, 0.0)],
        [Complex::new(1.0, 0.0), Complex::zero()],
    ]
}

fn pauli_y_matrix() -> [[Complex<f64>; 2]; 2] {
    let i = Complex::i();
    [[Complex::zero(), -i], [i, Complex::zero()]]
}

fn pauli_z_matrix() -> [[Complex<f64>; 2]; 2] {
    [
        [Complex::new(1.0, 0.0), Complex::zero()],
        [Complex::zero(), Complex::new(-1.0, 0.0)],
    ]
}

fn hadamard_matrix() -> [[Complex<f64>; 2]; 2] {
    let s = Complex::new(FRAC_1_SQRT_2, 0.0);
    [[s, s], [s, -s]]
}
