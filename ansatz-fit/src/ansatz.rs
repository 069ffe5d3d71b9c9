use statevec::{Circuit, Gate};

/// The register size of the original experiment.
pub const DEFAULT_QUBITS: usize = 4;

/// Each layer carries one RZ angle and one RX angle per qubit.
pub fn angles_per_layer(num_qubits: usize) -> usize {
    2 * num_qubits
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error(
    "expected a multiple of {per_layer} angles for {num_qubits} qubits, got {got}"
)]
pub struct AngleCountError {
    pub num_qubits: usize,
    pub per_layer: usize,
    pub got: usize,
}

/// The even half of a layer: a moment of Z rotations on every qubit, then a
/// CZ on every unordered qubit pair. The pairwise CZs introduce a phase flip
/// whenever both qubits of a pair are in the 1 state.
pub fn even_block_moments(num_qubits: usize, angles: &[f64]) -> Vec<Vec<Gate>> {
    let mut moments: Vec<Vec<Gate>> = vec![
        (0..num_qubits)
            .map(|q| Gate::RZ {
                qubit: q,
                theta: angles[q],
            })
            .collect(),
    ];
    for control in 0..num_qubits {
        for target in (control + 1)..num_qubits {
            moments.push(vec![Gate::CZ { control, target }]);
        }
    }
    moments
}

/// The odd half of a layer: a single moment of X rotations on every qubit.
pub fn odd_block_moments(num_qubits: usize, angles: &[f64]) -> Vec<Vec<Gate>> {
    vec![
        (0..num_qubits)
            .map(|q| Gate::RX {
                qubit: q,
                theta: angles[q],
            })
            .collect(),
    ]
}

/// Builds the hardware-efficient ansatz from a flat angle vector, layer by
/// layer: the first `num_qubits` angles of each layer feed the even block,
/// the rest feed the odd block.
pub fn build_circuit(num_qubits: usize, angles: &[f64]) -> Result<Circuit, AngleCountError> {
    let per_layer = angles_per_layer(num_qubits);
    if angles.len() % per_layer != 0 {
        return Err(AngleCountError {
            num_qubits,
            per_layer,
            got: angles.len(),
        });
    }

    let mut circuit = Circuit::new(num_qubits);
    for layer in angles.chunks(per_layer) {
        let (even_angles, odd_angles) = layer.split_at(num_qubits);
        for moment in even_block_moments(num_qubits, even_angles) {
            circuit.push_moment(moment);
        }
        for moment in odd_block_moments(num_qubits, odd_angles) {
            circuit.push_moment(moment);
        }
    }
    Ok(circuit)
}
