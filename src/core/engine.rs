use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting acta export...");

        tracing::info!("Extracting tally data...");
        let raw_results = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_results.len());

        tracing::info!("Resolving ballot positions...");
        let outcome = self.pipeline.transform(raw_results).await?;
        tracing::info!("Transformed {} records", outcome.resolved.len());

        tracing::info!("Writing spreadsheet...");
        let output_path = self.pipeline.load(outcome).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
