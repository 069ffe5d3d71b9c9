use crate::ansatz::{AngleCountError, build_circuit};
use argmin::core::{CostFunction, Error};
use statevec::{SimError, StateVector, Simulator, StatevectorSimulator};
use std::cell::RefCell;

#[derive(thiserror::Error, Debug)]
pub enum ObjectiveError {
    #[error("bad angle vector: {0}")]
    Angles(#[from] AngleCountError),
    #[error("simulation failed: {0}")]
    Sim(#[from] SimError),
}

/// Links the state-preparation problem to the `argmin` optimizer: the cost of
/// an angle vector is the L2 distance between the target state and the ansatz
/// output.
pub struct StatePrep {
    target: StateVector,
    num_qubits: usize,
    simulator: RefCell<StatevectorSimulator>,
}

impl StatePrep {
    pub fn new(target: StateVector) -> Self {
        let num_qubits = target.num_qubits;
        StatePrep {
            target,
            num_qubits,
            simulator: RefCell::new(StatevectorSimulator::new(num_qubits)),
        }
    }

    /// ‖φ_target − ψ(θ)‖₂ for the ansatz output ψ(θ).
    pub fn distance(&self, angles: &[f64]) -> Result<f64, ObjectiveError> {
        let circuit = build_circuit(self.num_qubits, angles)?;
        let mut sim = self.simulator.borrow_mut();
        sim.run(&circuit)?;
        Ok(self.target.l2_distance(sim.statevector()))
    }
}

impl CostFunction for StatePrep {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, Error> {
        self.distance(params).map_err(Error::new)
    }
}
