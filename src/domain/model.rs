use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the candidate reference data: ballot positions start at 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateReference {
    pub name: String,
    pub position: u32,
}

/// Envelope of the uploaded tally file.
#[derive(Debug, Clone, Deserialize)]
pub struct ResultsFile {
    pub resultados: Vec<RawResult>,
}

/// One tally record as found in the input file. `marcas` is opaque: the
/// source emits it either as a string or a number and this tool never
/// interprets it numerically. Unknown fields ride along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResult {
    pub candidato: String,
    pub marcas: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawResult {
    /// Cell rendering of the mark: strings pass through verbatim, anything
    /// else uses its JSON text form.
    pub fn marcas_text(&self) -> String {
        match &self.marcas {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A raw record annotated with its resolved ballot position.
/// `None` means the candidate name has no match in the reference table.
#[derive(Debug, Clone)]
pub struct ResolvedResult {
    pub raw: RawResult,
    pub position: Option<u32>,
}

/// The five form fields collected from the user. All validated non-empty
/// (after trim) before the pipeline starts.
#[derive(Debug, Clone)]
pub struct SubmissionMetadata {
    pub territory: String,
    pub municipio: String,
    pub centro: String,
    pub colonia: String,
    pub jrv: String,
}

/// The single spreadsheet row: column labels paired with cell values, in
/// final column order (4 metadata columns, then positions "1"..="N").
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    cells: Vec<(String, String)>,
}

impl OutputRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(label, _)| label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }
}

/// Output of the transform stage, handed to load.
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    pub resolved: Vec<ResolvedResult>,
}
