pub mod local;

use crate::core::ConfigProvider;
use crate::domain::model::SubmissionMetadata;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "acta-etl")]
#[command(about = "Converts a JRV vote tally JSON file into a single-row xlsx acta sheet")]
pub struct CliConfig {
    /// Path to the tally JSON file ({"resultados": [...]})
    #[arg(long)]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Territory code, e.g. 12
    #[arg(long)]
    pub territory: String,

    /// Municipality, e.g. Distrito Central
    #[arg(long)]
    pub municipio: String,

    /// Voting center, e.g. Instituto Central Vicente Caceres
    #[arg(long)]
    pub centro: String,

    /// Neighborhood, e.g. Col. Tiloarque No. 1
    #[arg(long)]
    pub colonia: String,

    /// Ballot-box (JRV) number, e.g. 2507
    #[arg(long)]
    pub jrv: String,

    /// Candidate reference JSON file, overriding the built-in table
    #[arg(long)]
    pub candidates: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    /// The form collaborator's contract: every metadata field present and
    /// non-empty after trim, the input file selected and JSON-typed, and a
    /// usable output directory. Nothing runs until this passes.
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("territory", &self.territory)?;
        validate_non_empty_string("municipio", &self.municipio)?;
        validate_non_empty_string("centro", &self.centro)?;
        validate_non_empty_string("colonia", &self.colonia)?;
        validate_non_empty_string("jrv", &self.jrv)?;

        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, "json")?;
        validate_path("output_path", &self.output_path)?;

        if let Some(candidates) = &self.candidates {
            validate_path("candidates", candidates)?;
            validate_file_extension("candidates", candidates, "json")?;
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn candidates_file(&self) -> Option<&str> {
        self.candidates.as_deref()
    }

    fn metadata(&self) -> SubmissionMetadata {
        SubmissionMetadata {
            territory: self.territory.trim().to_string(),
            municipio: self.municipio.trim().to_string(),
            centro: self.centro.trim().to_string(),
            colonia: self.colonia.trim().to_string(),
            jrv: self.jrv.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ExportError;

    fn config() -> CliConfig {
        CliConfig {
            input: "acta.json".to_string(),
            output_path: "./output".to_string(),
            territory: "12".to_string(),
            municipio: "Distrito Central".to_string(),
            centro: "Instituto Central".to_string(),
            colonia: "Col. Tiloarque".to_string(),
            jrv: "2507".to_string(),
            candidates: None,
            verbose: false,
        }
    }

    #[test]
    fn test_complete_config_validates() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_blank_metadata_field_is_reported_by_name() {
        let mut cfg = config();
        cfg.colonia = "   ".to_string();

        match cfg.validate() {
            Err(ExportError::MissingFieldError { field }) => assert_eq!(field, "colonia"),
            other => panic!("expected MissingFieldError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_input_is_rejected() {
        let mut cfg = config();
        cfg.input = "acta.csv".to_string();
        assert!(matches!(
            cfg.validate(),
            Err(ExportError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_candidates_override_must_be_json() {
        let mut cfg = config();
        cfg.candidates = Some("table.xlsx".to_string());
        assert!(cfg.validate().is_err());

        cfg.candidates = Some("table.json".to_string());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_metadata_fields_are_trimmed() {
        let mut cfg = config();
        cfg.jrv = " 2507 ".to_string();
        assert_eq!(cfg.metadata().jrv, "2507");
    }
}
