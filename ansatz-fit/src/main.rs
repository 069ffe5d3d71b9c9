mod ansatz;
mod objective;
mod report;
mod sweep;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use statevec::random_superposition;
use std::io;
use std::path::PathBuf;
use sweep::{SweepConfig, run_sweep};

/// Sweeps the depth of a hardware-efficient ansatz against a random target
/// state and reports the best approximation error at each layer count.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Largest layer count to optimize; every count from 1 up is swept.
    #[arg(long, default_value_t = 6)]
    max_layers: usize,

    /// Random restarts per layer count.
    #[arg(long, default_value_t = 10)]
    restarts: usize,

    /// Nelder-Mead iteration cap per restart.
    #[arg(long, default_value_t = 500)]
    max_iters: u64,

    /// Register size; the target state lives on the same register.
    #[arg(long, default_value_t = ansatz::DEFAULT_QUBITS)]
    qubits: usize,

    /// RNG seed for the target state and the optimizer starts.
    #[arg(long)]
    seed: Option<u64>,

    /// The output file to write JSON results to. If not provided, only the
    /// CSV and chart go to stdout.
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Print each layer count's ansatz circuit before optimizing it.
    #[arg(long)]
    show_circuits: bool,
}

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error("sweep failed: {0}")]
    Sweep(#[from] sweep::SweepError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), RunError> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let target = random_superposition(cli.qubits, &mut rng);
    println!(
        "fitting a {}-qubit random target ({} amplitudes), up to {} layers, {} restarts each",
        cli.qubits,
        target.amplitudes.len(),
        cli.max_layers,
        cli.restarts
    );

    let config = SweepConfig {
        num_qubits: cli.qubits,
        max_layers: cli.max_layers,
        restarts: cli.restarts,
        max_iters: cli.max_iters,
        show_circuits: cli.show_circuits,
        ..SweepConfig::default()
    };

    let points = run_sweep(&config, &target, &mut rng)?;

    println!();
    report::print_csv(&points, &mut io::stdout())?;
    println!();
    print!("{}", report::render_chart(&points));

    if let Some(output_path) = cli.output_file {
        report::write_json(&points, &output_path)?;
        println!("wrote {}", output_path.display());
    }

    Ok(())
}
