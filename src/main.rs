//! Grader development entrypoint.
//!
//! `grader <answer> <response> [params-json]` grades one response and prints the
//! serialized result.

use mimalloc::MiMalloc;
use serde_json::Value;

use grader::config::Config;
use grader::evaluator::Evaluator;
use grader::generation::GenaiGenerator;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage: grader <answer> <response> [params-json]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(answer), Some(response)) = (args.next(), args.next()) else {
        anyhow::bail!(USAGE);
    };
    let params: Value = match args.next() {
        Some(raw) => serde_json::from_str(&raw)?,
        None => Value::Null,
    };

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        model = %config.model,
        embeddings = ?config.embeddings_path,
        corpus_stats = ?config.corpus_stats_path,
        "Grader starting"
    );

    let generator = GenaiGenerator::new(config.model.clone());
    let evaluator = Evaluator::from_config(&config, generator)?;

    let result = evaluator.evaluate_json(&response, &answer, &params).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
