use crate::Gate;
use std::fmt;

/// A circuit as an ordered list of moments, each a set of gates applied
/// together.
#[derive(Debug, Clone)]
pub struct Circuit {
    pub num_qubits: usize,
    pub moments: Vec<Vec<Gate>>,
}

impl Circuit {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            moments: Vec::new(),
        }
    }

    pub fn push_moment(&mut self, moment: Vec<Gate>) {
        self.moments.push(moment);
    }

    /// Appends a gate as its own moment.
    pub fn push(&mut self, gate: Gate) {
        self.moments.push(vec![gate]);
    }

    pub fn num_moments(&self) -> usize {
        self.moments.len()
    }

    pub fn num_gates(&self) -> usize {
        self.moments.iter().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "circuit on {} qubits:", self.num_qubits)?;
        for (i, moment) in self.moments.iter().enumerate() {
            write!(f, "{:3}:", i)?;
            for gate in moment {
                write!(f, " {}", gate)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
