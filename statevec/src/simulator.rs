use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::state::StateVector;

/// A lightweight error enum so callers don't rely on internals.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("Invalid qubit index {qubit} for a {register}-qubit register")]
    Qubit { qubit: usize, register: usize },
}

pub trait Simulator {
    /// Resets the simulator to the |0...0⟩ state.
    fn reset(&mut self);
    /// Applies every moment of the circuit in order.
    fn run(&mut self, circuit: &Circuit) -> Result<(), SimError>;
    fn statevector(&self) -> &StateVector;
    fn num_qubits(&self) -> usize;
}

pub struct StatevectorSimulator {
    num_qubits: usize,
    state: StateVector,
}

impl StatevectorSimulator {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            state: StateVector::new(num_qubits),
        }
    }

    fn apply_gate(&mut self, gate: &Gate) -> Result<(), SimError> {
        for qubit in gate.qubits() {
            if qubit >= self.num_qubits {
                return Err(SimError::Qubit {
                    qubit,
                    register: self.num_qubits,
                });
            }
        }

        match *gate {
            Gate::CX { control, target } => self.state.apply_cx(control, target),
            Gate::CZ { control, target } => self.state.apply_cz(control, target),
            _ => {
                // Remaining gates are single-qubit and always carry a matrix.
                let matrix = gate
                    .matrix()
                    .unwrap_or_else(|| unreachable!("single-qubit gate without matrix"));
                let qubit = gate.qubits()[0];
                self.state.apply_single_qubit_gate(&matrix, qubit);
            }
        }
        Ok(())
    }
}

impl Simulator for StatevectorSimulator {
    fn reset(&mut self) {
        self.state.reset();
    }

    fn run(&mut self, circuit: &Circuit) -> Result<(), SimError> {
        if self.num_qubits != circuit.num_qubits {
            self.num_qubits = circuit.num_qubits;
            self.state = StateVector::new(circuit.num_qubits);
        } else {
            self.state.reset();
        }

        for moment in &circuit.moments {
            for gate in moment {
                self.apply_gate(gate)?;
            }
        }
        Ok(())
    }

    fn statevector(&self) -> &StateVector {
        &self.state
    }

    fn num_qubits(&self) -> usize {
        self.num_qubits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: Complex<f64>, b: Complex<f64>) -> bool {
        (a.re - b.re).abs() < EPSILON && (a.im - b.im).abs() < EPSILON
    }

    #[test]
    fn test_bell_state_simulation() {
        let mut circuit = Circuit::new(2);
        circuit.push(Gate::H { qubit: 0 });
        circuit.push(Gate::CX {
            control: 0,
            target: 1,
        });

        let mut sim = StatevectorSimulator::new(2);
        sim.run(&circuit).unwrap();

        let amps = &sim.statevector().amplitudes;
        let expected_amp = Complex::new(FRAC_1_SQRT_2, 0.0);
        assert!(approx_eq(amps[0], expected_amp));
        assert!(approx_eq(amps[1], Complex::new(0.0, 0.0)));
        assert!(approx_eq(amps[2], Complex::new(0.0, 0.0)));
        assert!(approx_eq(amps[3], expected_amp));
    }

    #[test]
    fn test_rx_pi_flips_qubit() {
        let mut circuit = Circuit::new(1);
        circuit.push(Gate::RX {
            qubit: 0,
            theta: PI,
        });

        let mut sim = StatevectorSimulator::new(1);
        sim.run(&circuit).unwrap();

        // Rx(π)|0> = -i|1>
        let amps = &sim.statevector().amplitudes;
        assert!(approx_eq(amps[0], Complex::new(0.0, 0.0)));
        assert!(approx_eq(amps[1], Complex::new(0.0, -1.0)));
    }

    #[test]
    fn test_rz_is_phase_only_on_basis_state() {
        // Rz rotates phases, so |0> stays |0> up to a phase with unit norm.
        let mut circuit = Circuit::new(1);
        circuit.push(Gate::RZ {
            qubit: 0,
            theta: 1.234,
        });

        let mut sim = StatevectorSimulator::new(1);
        sim.run(&circuit).unwrap();

        let amps = &sim.statevector().amplitudes;
        assert!((amps[0].norm() - 1.0).abs() < EPSILON);
        assert!(approx_eq(amps[1], Complex::new(0.0, 0.0)));
    }

    #[test]
    fn test_out_of_range_qubit_is_an_error() {
        let mut circuit = Circuit::new(2);
        circuit.push(Gate::H { qubit: 5 });

        let mut sim = StatevectorSimulator::new(2);
        let err = sim.run(&circuit).unwrap_err();
        assert!(matches!(err, SimError::Qubit { qubit: 5, .. }));
    }

    #[test]
    fn test_run_resets_between_circuits() {
        let mut flip = Circuit::new(1);
        flip.push(Gate::X { qubit: 0 });

        let empty = Circuit::new(1);

        let mut sim = StatevectorSimulator::new(1);
        sim.run(&flip).unwrap();
        assert!(approx_eq(
            sim.statevector().amplitudes[1],
            Complex::new(1.0, 0.0)
        ));

        // Re-running starts from |0> again.
        sim.run(&empty).unwrap();
        assert!(approx_eq(
            sim.statevector().amplitudes[0],
            Complex::new(1.0, 0.0)
        ));
    }

    #[test]
    fn test_run_resizes_to_circuit_register() {
        let mut circuit = Circuit::new(3);
        circuit.push(Gate::X { qubit: 2 });

        let mut sim = StatevectorSimulator::new(1);
        sim.run(&circuit).unwrap();
        assert_eq!(sim.num_qubits(), 3);
        assert_eq!(sim.statevector().amplitudes.len(), 8);
    }
}
