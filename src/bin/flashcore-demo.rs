//! FLASHCORE Demo Binary
//!
//! Walks the three modules end to end: builds a vector index, inserts
//! sample vectors, runs a nearest-neighbor query, then routes a buffer
//! through the inference runtime and a round trip through the vault.

use clap::Parser;
use flashcore::{InferenceRuntime, Vault, VectorIndex};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// FLASHCORE Demo - in-memory vector index walkthrough
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Vector dimensionality
    #[arg(short, long, default_value_t = 4)]
    dimensions: usize,

    /// Maximum number of entries the index may hold
    #[arg(short, long, default_value_t = 100)]
    capacity: usize,

    /// Number of sample vectors to insert
    #[arg(short = 'n', long, default_value_t = 8)]
    vectors: usize,

    /// Number of nearest neighbors to retrieve
    #[arg(short, long, default_value_t = 3)]
    k: usize,

    /// Vault passphrase
    #[arg(long, default_value = "flashcore-demo-key")]
    passphrase: String,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("flashcore=info".parse()?))
        .init();

    let args = Args::parse();

    let mut index = VectorIndex::new(args.dimensions, args.capacity)?;
    info!(
        dimensions = args.dimensions,
        capacity = args.capacity,
        "Created vector index"
    );

    // Sample vectors: ramps offset by their id, so neighbors rank by id
    // distance from the query.
    let inserted = args.vectors.min(args.capacity);
    anyhow::ensure!(inserted > 0, "need at least one sample vector");
    for i in 0..inserted {
        let vector: Vec<f32> = (0..args.dimensions).map(|d| (i + d) as f32).collect();
        index.insert(&vector, i as i64)?;
    }
    info!(inserted, "Inserted sample vectors");

    let query: Vec<f32> = (0..args.dimensions).map(|d| d as f32 + 0.5).collect();
    let k = args.k.clamp(1, index.len());
    let neighbors = index.search(&query, k)?;
    for (rank, neighbor) in neighbors.iter().enumerate() {
        println!(
            "#{rank}: id={} distance={:.4}",
            neighbor.id, neighbor.distance
        );
    }

    let runtime = InferenceRuntime::new("model.onnx");
    let embedding = runtime.run(&query, args.dimensions);
    info!(output_len = embedding.len(), "Inference pass produced buffer");

    let vault = Vault::new(&args.passphrase);
    let ciphertext = vault.encrypt(b"flashcore demo payload");
    let recovered = vault.decrypt(&ciphertext);
    info!(
        ciphertext_len = ciphertext.len(),
        round_trip_ok = (recovered.as_ref() == b"flashcore demo payload"),
        "Vault round trip"
    );

    Ok(())
}
