//! Runs one full quantum Reed-Solomon correction cycle and compares the
//! scrambled syndrome histogram against a noiseless reference execution.

use qrs::{
    CorrectionCircuitBuilder, PauliKind, QrsError, QuantumRsCode, ReedSolomonCode,
    SimulationResult, Simulator,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SHOTS: usize = 1024;

/// Builds the phased circuit for the given basis vector, injecting
/// `num_errors` Pauli errors of the given kind between encode and decode.
fn build_circuit(
    qcode: &QuantumRsCode,
    basis: &[u8],
    num_errors: usize,
    kind: PauliKind,
    rng: &mut StdRng,
) -> Result<qrs::Circuit, QrsError> {
    let mut builder = CorrectionCircuitBuilder::new(qcode);
    builder.initialize(basis)?;
    builder.encode()?;
    builder.scramble(num_errors, kind, rng)?;
    builder.decode()?;
    builder.measure()?;
    builder.finish()
}

fn run_cycle() -> Result<(), QrsError> {
    // RS(3, 2) over GF(4): small enough for the dense backend
    // (6 message + 8 ancilla qubits).
    let code = ReedSolomonCode::new(3, 2)?;
    println!(
        "Classical code: RS({}, {}), d = {}, t = {}",
        code.length(),
        code.dimension(),
        code.minimum_distance(),
        code.error_capacity()
    );

    let qcode = QuantumRsCode::new(code);
    println!(
        "Quantum registers: {} message qubits, {} ancilla qubits, {} classical bits",
        qcode.message_qubits(),
        qcode.ancilla_qubits(),
        qcode.classical_bits()
    );

    // Generate and encode a message, then map it to the spectral basis state.
    let mut rng = StdRng::seed_from_u64(2024);
    let message = qcode.classical().generate_message(&mut rng);
    let codeword = qcode.classical().encode(&message)?;
    let basis = qcode.convert_to_quantum(&codeword)?;
    println!("Message symbols:  {:?}", message);
    println!("Codeword symbols: {:?}", codeword);
    println!("Quantum codeword: {:?}", basis);

    // Reference execution: the identical circuit without any scrambling.
    // Its (deterministic) syndrome key is the success criterion for the
    // scrambled run.
    let reference_circuit = build_circuit(&qcode, &basis, 0, PauliKind::X, &mut rng)?;
    let mut simulator = Simulator::with_seed(99);
    let reference = simulator.run(&reference_circuit, SHOTS)?;
    let (reference_key, _) = reference
        .most_frequent()
        .ok_or_else(|| QrsError::SimulationError {
            message: "reference execution produced an empty histogram".to_string(),
        })?;
    let reference_key = reference_key.to_string();
    println!("\nNoiseless reference syndrome: {}", reference_key);

    // Scrambled execution: one bit-flip error on a random message qubit.
    let scrambled_circuit = build_circuit(&qcode, &basis, 1, PauliKind::X, &mut rng)?;
    println!("\nScrambled circuit:\n{}", scrambled_circuit);
    let result = simulator.run(&scrambled_circuit, SHOTS)?;
    println!("{}", result);

    let (observed_key, count) = result
        .most_frequent()
        .ok_or_else(|| QrsError::SimulationError {
            message: "scrambled execution produced an empty histogram".to_string(),
        })?;
    println!(
        "Most frequent syndrome: {} ({}/{} shots)",
        observed_key, count, SHOTS
    );
    println!(
        "Syndrome bits: {:?}",
        SimulationResult::key_bits(observed_key)
    );

    if observed_key == reference_key {
        println!("No detectable syndrome deviation: the error cancelled or was corrected.");
    } else {
        println!("Syndrome deviates from the noiseless reference: error detected.");
    }
    Ok(())
}

fn main() {
    if let Err(e) = run_cycle() {
        eprintln!("correction cycle failed: {}", e);
        std::process::exit(1);
    }
}
