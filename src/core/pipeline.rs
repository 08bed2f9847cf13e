use crate::core::exporter::{derive_filename, write_workbook};
use crate::core::reference::ReferenceTable;
use crate::core::row::build_row;
use crate::core::transform::resolve_positions;
use crate::core::{ConfigProvider, Pipeline, RawResult, Storage, TransformOutcome};
use crate::domain::model::ResultsFile;
use crate::utils::error::{ExportError, Result};
use std::path::Path;

pub struct TallyPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    reference: ReferenceTable,
}

impl<S: Storage, C: ConfigProvider> TallyPipeline<S, C> {
    pub fn new(storage: S, config: C, reference: ReferenceTable) -> Self {
        Self {
            storage,
            config,
            reference,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TallyPipeline<S, C> {
    /// Reads the whole input file into memory, then parses the
    /// `{"resultados": [...]}` envelope. The file read is the only
    /// suspension point in the pipeline.
    async fn extract(&self) -> Result<Vec<RawResult>> {
        let path = self.config.input_file();
        tracing::debug!("Reading tally file: {}", path);
        let bytes = self.storage.read_file(path).await?;

        let parsed: ResultsFile =
            serde_json::from_slice(&bytes).map_err(|e| ExportError::ProcessingError {
                message: format!("could not process tally file '{}': {}", path, e),
            })?;

        tracing::debug!("Parsed {} result records", parsed.resultados.len());
        Ok(parsed.resultados)
    }

    async fn transform(&self, data: Vec<RawResult>) -> Result<TransformOutcome> {
        let resolved = resolve_positions(data, &self.reference);
        tracing::debug!(
            "Resolved {} of {} records against {} known candidates",
            resolved.iter().filter(|r| r.position.is_some()).count(),
            resolved.len(),
            self.reference.len()
        );
        Ok(TransformOutcome { resolved })
    }

    async fn load(&self, outcome: TransformOutcome) -> Result<String> {
        let metadata = self.config.metadata();
        let row = build_row(&outcome.resolved, &metadata, self.reference.max_position());
        let filename = derive_filename(&metadata);

        // Serialize fully before touching the write target so a failure
        // never leaves a partial file behind.
        let bytes = write_workbook(&row)?;
        tracing::debug!("Writing workbook ({} bytes) to {}", bytes.len(), filename);
        self.storage.write_file(&filename, &bytes).await?;

        Ok(Path::new(self.config.output_path())
            .join(&filename)
            .to_string_lossy()
            .into_owned())
    }
}
