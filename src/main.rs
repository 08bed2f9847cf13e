use acta_etl::core::ConfigProvider;
use acta_etl::utils::{logger, validation::Validate};
use acta_etl::{CliConfig, ExportEngine, LocalStorage, ReferenceTable, TallyPipeline};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting acta-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Reference data problems are a configuration defect, fatal before any
    // pipeline work starts.
    let reference = match load_reference(&config) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Could not load candidate reference data: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(
        "Reference table loaded: {} candidates, max position {}",
        reference.len(),
        reference.max_position()
    );

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = TallyPipeline::new(storage, config, reference);
    let engine = ExportEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Acta export completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Acta export failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn load_reference(config: &impl ConfigProvider) -> acta_etl::Result<ReferenceTable> {
    match config.candidates_file() {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            ReferenceTable::from_json(&content)
        }
        None => ReferenceTable::embedded(),
    }
}
