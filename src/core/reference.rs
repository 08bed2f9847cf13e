use crate::domain::model::CandidateReference;
use crate::utils::error::{ExportError, Result};
use std::collections::HashMap;

/// Built-in candidate reference data, compiled into the binary.
const EMBEDDED_CANDIDATES: &str = include_str!("../assets/candidates.json");

/// Immutable candidate-name → ballot-position mapping, loaded once at
/// startup. The maximum position is cached here because it fixes the
/// spreadsheet's variable column count for every submission.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    positions: HashMap<String, u32>,
    max_position: u32,
}

impl ReferenceTable {
    /// Builds the mapping in one pass. If a name repeats, the later entry
    /// silently overwrites the earlier one (bad reference data, but the
    /// documented behavior). Empty data or a zero position is a fatal
    /// configuration defect: the column schema cannot be derived.
    pub fn from_entries(entries: Vec<CandidateReference>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ExportError::ConfigError {
                message: "candidate reference data is empty".to_string(),
            });
        }

        let mut positions = HashMap::with_capacity(entries.len());
        let mut max_position = 0;
        for entry in entries {
            if entry.position == 0 {
                return Err(ExportError::ConfigError {
                    message: format!(
                        "candidate '{}' has position 0; positions start at 1",
                        entry.name
                    ),
                });
            }
            max_position = max_position.max(entry.position);
            positions.insert(entry.name, entry.position);
        }

        Ok(Self {
            positions,
            max_position,
        })
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let entries: Vec<CandidateReference> =
            serde_json::from_str(content).map_err(|e| ExportError::ConfigError {
                message: format!("malformed candidate reference data: {}", e),
            })?;
        Self::from_entries(entries)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CANDIDATES)
    }

    pub fn position_of(&self, name: &str) -> Option<u32> {
        self.positions.get(name).copied()
    }

    pub fn max_position(&self) -> u32 {
        self.max_position
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
