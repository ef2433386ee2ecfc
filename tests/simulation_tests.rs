// tests/simulation_tests.rs

// Gate-level behavior of the state-vector backend through the public API.

use qrs::{Circuit, Gate, QrsError, Simulator};

#[test]
fn x_gate_sets_measured_bit() -> Result<(), QrsError> {
    // Two ancilla qubits, flip the first, measure both.
    let mut circuit = Circuit::new(0, 2, 2);
    circuit.add_gate(Gate::PauliX { target: 0 });
    circuit.add_gate(Gate::Measure { qubit: 0, bit: 0 });
    circuit.add_gate(Gate::Measure { qubit: 1, bit: 1 });

    let mut simulator = Simulator::with_seed(4);
    let result = simulator.run(&circuit, 64)?;
    assert_eq!(result.counts().len(), 1);
    assert_eq!(result.counts().get("01"), Some(&64));
    Ok(())
}

#[test]
fn cnot_propagates_flip_to_target() -> Result<(), QrsError> {
    let mut circuit = Circuit::new(0, 2, 2);
    circuit.add_gate(Gate::PauliX { target: 0 });
    circuit.add_gate(Gate::ControlledNot { control: 0, target: 1 });
    circuit.add_gate(Gate::Measure { qubit: 0, bit: 0 });
    circuit.add_gate(Gate::Measure { qubit: 1, bit: 1 });

    let mut simulator = Simulator::with_seed(4);
    let result = simulator.run(&circuit, 64)?;
    assert_eq!(result.counts().get("11"), Some(&64));
    Ok(())
}

#[test]
fn pauli_z_leaves_measurement_statistics_untouched() -> Result<(), QrsError> {
    // Z only introduces phase; a basis state measures identically.
    let mut circuit = Circuit::new(0, 1, 1);
    circuit.add_gate(Gate::PauliX { target: 0 });
    circuit.add_gate(Gate::PauliZ { target: 0 });
    circuit.add_gate(Gate::Measure { qubit: 0, bit: 0 });

    let mut simulator = Simulator::with_seed(8);
    let result = simulator.run(&circuit, 32)?;
    assert_eq!(result.counts().get("1"), Some(&32));
    Ok(())
}

#[test]
fn hadamard_splits_shots_roughly_evenly() -> Result<(), QrsError> {
    let mut circuit = Circuit::new(0, 1, 1);
    circuit.add_gate(Gate::Hadamard { target: 0 });
    circuit.add_gate(Gate::Measure { qubit: 0, bit: 0 });

    let shots = 4096;
    let mut simulator = Simulator::with_seed(12);
    let result = simulator.run(&circuit, shots)?;
    assert_eq!(result.shots(), shots);
    assert_eq!(result.counts().values().sum::<usize>(), shots);
    assert_eq!(result.counts().len(), 2);
    for count in result.counts().values() {
        // 0.4..0.6 of the shots; far looser than the sampling deviation.
        assert!(*count > shots * 2 / 5 && *count < shots * 3 / 5);
    }
    Ok(())
}

#[test]
fn fourier_round_trip_preserves_measurement() -> Result<(), QrsError> {
    // |101> through QFT then inverse QFT measures as |101>.
    let mut circuit = Circuit::new(0, 3, 3);
    circuit.add_gate(Gate::PauliX { target: 0 });
    circuit.add_gate(Gate::PauliX { target: 2 });
    circuit.add_gate(Gate::Fourier { qubits: vec![0, 1, 2], inverse: false });
    circuit.add_gate(Gate::Fourier { qubits: vec![0, 1, 2], inverse: true });
    for q in 0..3 {
        circuit.add_gate(Gate::Measure { qubit: q, bit: q });
    }

    let mut simulator = Simulator::with_seed(16);
    let result = simulator.run(&circuit, 128)?;
    assert_eq!(result.counts().len(), 1);
    assert_eq!(result.counts().get("101"), Some(&128));
    Ok(())
}

#[test]
fn seeded_simulators_reproduce_histograms() -> Result<(), QrsError> {
    let mut circuit = Circuit::new(0, 2, 2);
    circuit.add_gate(Gate::Hadamard { target: 0 });
    circuit.add_gate(Gate::Hadamard { target: 1 });
    circuit.add_gate(Gate::Measure { qubit: 0, bit: 0 });
    circuit.add_gate(Gate::Measure { qubit: 1, bit: 1 });

    let result_a = Simulator::with_seed(77).run(&circuit, 512)?;
    let result_b = Simulator::with_seed(77).run(&circuit, 512)?;
    assert_eq!(result_a, result_b);
    Ok(())
}

#[test]
fn out_of_range_qubit_is_rejected() {
    let mut circuit = Circuit::new(0, 1, 1);
    circuit.add_gate(Gate::PauliX { target: 5 });
    let mut simulator = Simulator::with_seed(0);
    assert!(matches!(
        simulator.run(&circuit, 8),
        Err(QrsError::InvalidOperation { .. })
    ));
}

#[test]
fn out_of_range_classical_bit_is_rejected() {
    let mut circuit = Circuit::new(0, 1, 1);
    circuit.add_gate(Gate::Measure { qubit: 0, bit: 3 });
    let mut simulator = Simulator::with_seed(0);
    assert!(matches!(
        simulator.run(&circuit, 8),
        Err(QrsError::InvalidOperation { .. })
    ));
}
