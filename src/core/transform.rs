use crate::core::reference::ReferenceTable;
use crate::domain::model::{RawResult, ResolvedResult};

/// Annotates every raw record with its ballot position (exact-string lookup
/// of `candidato`) and sorts the list: numeric positions ascending,
/// unresolved records after all numeric ones. The sort is stable, so
/// unresolved records and duplicate positions keep their input order.
/// No record is dropped here; unresolved ones fall out at row-build time.
pub fn resolve_positions(raw: Vec<RawResult>, table: &ReferenceTable) -> Vec<ResolvedResult> {
    let mut resolved: Vec<ResolvedResult> = raw
        .into_iter()
        .map(|record| {
            let position = table.position_of(&record.candidato);
            if position.is_none() {
                tracing::warn!("candidato '{}' no encontrado en la tabla", record.candidato);
            }
            ResolvedResult {
                raw: record,
                position,
            }
        })
        .collect();

    resolved.sort_by_key(|r| (r.position.is_none(), r.position.unwrap_or(u32::MAX)));
    resolved
}
