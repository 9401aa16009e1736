use clap::Parser;
use mulsum::utils::{logger, validation::Validate};
use mulsum::{CliConfig, LocalStorage, MulPipeline, ScanEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mulsum");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::default();
    let pipeline = MulPipeline::new(storage, config);
    let engine = ScanEngine::new(pipeline);

    match engine.run().await {
        Ok(total) => {
            tracing::info!("✅ Scan completed successfully");
            // The total is the program's only stdout output.
            println!("{}", total);
        }
        Err(e) => {
            tracing::error!("❌ Scan failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
