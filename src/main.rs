use clap::Parser;
use poly_demo::utils::logger;
use poly_demo::{CliConfig, DemoEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting poly-demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let engine = DemoEngine::new();
    match engine.run() {
        Ok(transcript) => {
            tracing::info!("demo completed, {} lines printed", transcript.len());
        }
        Err(e) => {
            tracing::error!("demo failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
