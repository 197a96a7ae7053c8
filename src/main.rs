use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferrite_tiny::{train, JsonSink, Network, Result, TracingSink, TrainConfig, TrainingSet};

const INPUT_FEATURES: usize = 2;
const HIDDEN_NODES: usize = 2;
const OUTPUT_NODES: usize = 1;

const TRAINING_SET: [[f64; INPUT_FEATURES]; 4] = [
    [0.0, 0.0],
    [1.0, 0.0],
    [0.0, 1.0],
    [1.0, 1.0],
];
const RESULT_SET: [[f64; OUTPUT_NODES]; 4] = [
    [0.0],
    [1.0],
    [1.0],
    [0.0],
];

/// Trains the built-in XOR network and prints its predictions.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON training config; missing fields use the defaults
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Seed for weight initialization and sample selection
    #[arg(long, value_name = "INT")]
    seed: Option<u64>,
    /// Report progress every N epochs (0 disables)
    #[arg(long, value_name = "INT")]
    log_every: Option<u64>,
    /// Write progress reports as JSON lines to this file instead of the log
    #[arg(long, value_name = "PATH")]
    reports: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TrainConfig::load_json(path)?,
        None => TrainConfig::default(),
    };
    if let Some(n) = cli.log_every {
        config.log_every = n;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let set = TrainingSet::new(&TRAINING_SET, &RESULT_SET)?;
    let mut network: Network<INPUT_FEATURES, HIDDEN_NODES, OUTPUT_NODES> = Network::new(&mut rng);

    let outcome = match &cli.reports {
        Some(path) => {
            let mut sink = JsonSink::new(BufWriter::new(File::create(path)?));
            let outcome = train(&mut network, &set, &config, &mut rng, &mut sink)?;
            sink.flush()?;
            outcome
        }
        None => train(&mut network, &set, &config, &mut rng, &mut TracingSink)?,
    };

    info!(
        status = ?outcome.status,
        epochs = outcome.epochs,
        dataset_mse = network.evaluate(&set),
        "done"
    );

    for input in &TRAINING_SET {
        let output = network.predict(input);
        println!("Input: {:?} -> Output: {:.4}", input, output[0]);
    }

    Ok(())
}
