// src/validation/mod.rs

//! State-vector validity checks used by the simulator and by tests.

use crate::core::{QrsError, StateVector};

// Default tolerance (can be overridden by caller)
const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Checks that the state vector is normalized (sum of squared amplitudes
/// approximately one). Gate application is unitary, so a deviation means
/// the simulation itself went wrong.
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0; `None` uses the default.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QrsError::Incoherence)` otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), QrsError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sq: f64 = state.vector().iter().map(|c| c.norm_sqr()).sum();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        return Err(QrsError::Incoherence {
            message: format!("state vector norm deviated from 1: {}", norm_sq),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn accepts_normalized_states() {
        let s = Complex::new(FRAC_1_SQRT_2, 0.0);
        let state = StateVector::new(vec![s, s]);
        assert!(check_normalization(&state, None).is_ok());
    }

    #[test]
    fn rejects_denormalized_states() {
        let state = StateVector::new(vec![Complex::new(0.5, 0.0), Complex::new(0.5, 0.0)]);
        assert!(matches!(
            check_normalization(&state, None),
            Err(QrsError::Incoherence { .. })
        ));
    }

    #[test]
    fn tolerance_is_configurable() {
        let state = StateVector::new(vec![Complex::new(1.0001, 0.0)]);
        assert!(check_normalization(&state, Some(0.001)).is_ok());
        assert!(check_normalization(&state, Some(1e-9)).is_err());
    }
}
