use crate::ansatz::angles_per_layer;
use crate::objective::StatePrep;
use argmin::core::Executor;
use argmin::solver::neldermead::NelderMead;
use rand::Rng;
use serde::Serialize;
use statevec::StateVector;
use std::f64::consts::TAU;

#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    #[error("optimizer failed: {0}")]
    Solver(String),
}

/// Knobs for the layer sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub num_qubits: usize,
    pub max_layers: usize,
    /// Random restarts per layer count; the best cost across restarts wins.
    pub restarts: usize,
    pub max_iters: u64,
    /// Edge length of the initial Nelder-Mead simplex around each start.
    pub simplex_step: f64,
    /// Print the ansatz circuit once per layer count before optimizing.
    pub show_circuits: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            num_qubits: crate::ansatz::DEFAULT_QUBITS,
            max_layers: 6,
            restarts: 10,
            max_iters: 500,
            simplex_step: 0.5,
            show_circuits: false,
        }
    }
}

/// One point of the error-versus-layers curve.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub layers: usize,
    pub best_distance: f64,
}

/// Right-angle simplex around `start`: the start itself plus one vertex per
/// coordinate offset by `step`.
fn initial_simplex(start: &[f64], step: f64) -> Vec<Vec<f64>> {
    let mut simplex = Vec::with_capacity(start.len() + 1);
    simplex.push(start.to_vec());
    for i in 0..start.len() {
        let mut vertex = start.to_vec();
        vertex[i] += step;
        simplex.push(vertex);
    }
    simplex
}

/// Minimizes the distance to `target` with a fixed layer count, taking the
/// best of `config.restarts` Nelder-Mead runs from uniform random starts in
/// [0, 2π)^d.
fn best_of_restarts(
    target: &StateVector,
    layers: usize,
    config: &SweepConfig,
    rng: &mut impl Rng,
) -> Result<f64, SweepError> {
    let dims = angles_per_layer(config.num_qubits) * layers;
    let mut best = f64::INFINITY;

    for _ in 0..config.restarts {
        let start: Vec<f64> = (0..dims).map(|_| rng.gen_range(0.0..TAU)).collect();

        let solver = NelderMead::new(initial_simplex(&start, config.simplex_step))
            .with_sd_tolerance(1e-8)
            .map_err(|e| SweepError::Solver(e.to_string()))?;

        let problem = StatePrep::new(target.clone());
        let result = Executor::new(problem, solver)
            .configure(|state| state.max_iters(config.max_iters))
            .run()
            .map_err(|e| SweepError::Solver(e.to_string()))?;

        if result.state.best_cost < best {
            best = result.state.best_cost;
        }
    }
    Ok(best)
}

/// Optimizes the ansatz angles for every layer count in `1..=max_layers` and
/// records the best distance found at each depth.
pub fn run_sweep(
    config: &SweepConfig,
    target: &StateVector,
    rng: &mut impl Rng,
) -> Result<Vec<SweepPoint>, SweepError> {
    let mut points = Vec::with_capacity(config.max_layers);

    for layers in 1..=config.max_layers {
        if config.show_circuits {
            let angles = vec![0.0; angles_per_layer(config.num_qubits) * layers];
            // Angle counts are multiples of a full layer here, so the builder
            // cannot fail.
            if let Ok(circuit) = crate::ansatz::build_circuit(config.num_qubits, &angles) {
                println!("{}", circuit);
            }
        }

        let best_distance = best_of_restarts(target, layers, config, rng)?;
        println!(
            "layers {}/{} - best distance {:.6}",
            layers, config.max_layers, best_distance
        );
        points.push(SweepPoint {
            layers,
            best_distance,
        });
    }
    Ok(points)
}
