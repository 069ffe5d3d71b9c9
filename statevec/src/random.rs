use crate::state::StateVector;
use num_complex::Complex;
use rand::Rng;
use rand_distr::StandardNormal;

/// Draws a Haar-random pure state on `num_qubits` qubits: i.i.d. complex
/// standard-Gaussian amplitudes, normalized to unit norm.
pub fn random_superposition(num_qubits: usize, rng: &mut impl Rng) -> StateVector {
    let dim = 1 << num_qubits;

    loop {
        let mut amplitudes: Vec<Complex<f64>> = Vec::with_capacity(dim);
        for _ in 0..dim {
            let re: f64 = rng.sample(StandardNormal);
            let im: f64 = rng.sample(StandardNormal);
            amplitudes.push(Complex::new(re, im));
        }

        let norm = amplitudes.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        if norm < 1e-12 {
            // All-zero draw; resample.
            continue;
        }

        for amp in &mut amplitudes {
            *amp /= norm;
        }
        return StateVector {
            num_qubits,
            amplitudes,
        };
    }
}
