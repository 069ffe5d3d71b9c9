pub mod circuit;
pub mod gate;
pub mod random;
pub mod simulator;
pub mod state;

// Re-export key components for easier access from the binary or other libraries.
pub use circuit::Circuit;
pub use gate::{Gate, GateMatrix};
pub use random::random_superposition;
pub use simulator::{SimError, Simulator, StatevectorSimulator};
pub use state::StateVector;
