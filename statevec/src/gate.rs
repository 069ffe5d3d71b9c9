use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

/// Gates supported by the statevector simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    H { qubit: usize },
    X { qubit: usize },
    Y { qubit: usize },
    Z { qubit: usize },
    RX { qubit: usize, theta: f64 },
    RY { qubit: usize, theta: f64 },
    RZ { qubit: usize, theta: f64 },
    CX { control: usize, target: usize },
    CZ { control: usize, target: usize },
}

// custom type for gate matrices
pub type GateMatrix = [[Complex<f64>; 2]; 2];

pub const HADAMARD: GateMatrix = [
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(FRAC_1_SQRT_2, 0.0),
    ],
    [
        Complex::new(FRAC_1_SQRT_2, 0.0),
        Complex::new(-FRAC_1_SQRT_2, 0.0),
    ],
];

pub const PAULI_X: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Y: GateMatrix = [
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
    [Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)],
];

pub const PAULI_Z: GateMatrix = [
    [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    [Complex::new(0.0, 0.0), Complex::new(-1.0, 0.0)],
];

impl Gate {
    /// The qubits the gate acts on.
    pub fn qubits(&self) -> Vec<usize> {
        match *self {
            Gate::H { qubit }
            | Gate::X { qubit }
            | Gate::Y { qubit }
            | Gate::Z { qubit }
            | Gate::RX { qubit, .. }
            | Gate::RY { qubit, .. }
            | Gate::RZ { qubit, .. } => vec![qubit],
            Gate::CX { control, target } | Gate::CZ { control, target } => vec![control, target],
        }
    }

    /// The 2x2 matrix for single-qubit gates; `None` for two-qubit gates,
    /// which have dedicated kernels on `StateVector`.
    pub fn matrix(&self) -> Option<GateMatrix> {
        match *self {
            Gate::H { .. } => Some(HADAMARD),
            Gate::X { .. } => Some(PAULI_X),
            Gate::Y { .. } => Some(PAULI_Y),
            Gate::Z { .. } => Some(PAULI_Z),
            Gate::RX { theta, .. } => {
                // Rx(θ) = cos(θ/2) I - i sin(θ/2) X
                let c = theta * 0.5;
                let (ct, st) = (c.cos(), c.sin());
                Some([
                    [Complex::new(ct, 0.0), Complex::new(0.0, -st)],
                    [Complex::new(0.0, -st), Complex::new(ct, 0.0)],
                ])
            }
            Gate::RY { theta, .. } => {
                // Ry(θ) = cos(θ/2) I - i sin(θ/2) Y  -> matrix is real
                let c = theta * 0.5;
                let (ct, st) = (c.cos(), c.sin());
                Some([
                    [Complex::new(ct, 0.0), Complex::new(-st, 0.0)],
                    [Complex::new(st, 0.0), Complex::new(ct, 0.0)],
                ])
            }
            Gate::RZ { theta, .. } => {
                // Rz(θ) = diag(e^{-iθ/2}, e^{+iθ/2})
                let c = theta * 0.5;
                let (ct, st) = (c.cos(), c.sin());
                Some([
                    [Complex::new(ct, -st), Complex::new(0.0, 0.0)],
                    [Complex::new(0.0, 0.0), Complex::new(ct, st)],
                ])
            }
            Gate::CX { .. } | Gate::CZ { .. } => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Gate::H { qubit } => write!(f, "h q{}", qubit),
            Gate::X { qubit } => write!(f, "x q{}", qubit),
            Gate::Y { qubit } => write!(f, "y q{}", qubit),
            Gate::Z { qubit } => write!(f, "z q{}", qubit),
            Gate::RX { qubit, theta } => write!(f, "rx({:.4}) q{}", theta, qubit),
            Gate::RY { qubit, theta } => write!(f, "ry({:.4}) q{}", theta, qubit),
            Gate::RZ { qubit, theta } => write!(f, "rz({:.4}) q{}", theta, qubit),
            Gate::CX { control, target } => write!(f, "cx q{} q{}", control, target),
            Gate::CZ { control, target } => write!(f, "cz q{} q{}", control, target),
        }
    }
}
