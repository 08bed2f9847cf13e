use crate::domain::model::{OutputRow, ResolvedResult, SubmissionMetadata};
use std::collections::HashMap;

/// Fixed metadata column labels, in final order. Position columns follow.
pub const METADATA_COLUMNS: [&str; 4] =
    ["No. Acta", "CENTRO DE VOTACION", "COLONIA", "TERRITORIO"];

/// Full ordered column list for a sheet with `max_position` ballot slots.
pub fn column_headers(max_position: u32) -> Vec<String> {
    METADATA_COLUMNS
        .iter()
        .map(|s| s.to_string())
        .chain((1..=max_position).map(|i| i.to_string()))
        .collect()
}

/// Builds the single output row: 4 metadata cells followed by one cell per
/// ballot position 1..=max_position, each holding the matching record's
/// mark or "0". Unresolved records never contribute a mark. When two
/// resolved records land on the same position, the later one wins (the
/// documented overwrite behavior); a diagnostic is logged when it happens.
pub fn build_row(
    resolved: &[ResolvedResult],
    metadata: &SubmissionMetadata,
    max_position: u32,
) -> OutputRow {
    let mut marks_by_position: HashMap<u32, String> = HashMap::new();
    for record in resolved {
        let Some(position) = record.position else {
            continue;
        };
        let mark = record.raw.marcas_text();
        if let Some(previous) = marks_by_position.insert(position, mark.clone()) {
            tracing::warn!(
                "position {} recorded twice: '{}' overwritten by '{}'",
                position,
                previous,
                mark
            );
        }
    }

    let mut cells = Vec::with_capacity(4 + max_position as usize);
    cells.push(("No. Acta".to_string(), metadata.jrv.clone()));
    cells.push(("CENTRO DE VOTACION".to_string(), metadata.centro.clone()));
    cells.push(("COLONIA".to_string(), metadata.colonia.clone()));
    cells.push(("TERRITORIO".to_string(), metadata.territory.clone()));

    for position in 1..=max_position {
        let mark = marks_by_position
            .remove(&position)
            .unwrap_or_else(|| "0".to_string());
        cells.push((position.to_string(), mark));
    }

    OutputRow::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawResult;
    use serde_json::{json, Map};

    fn metadata() -> SubmissionMetadata {
        SubmissionMetadata {
            territory: "12".to_string(),
            municipio: "DC".to_string(),
            centro: "Inst".to_string(),
            colonia: "Col".to_string(),
            jrv: "2507".to_string(),
        }
    }

    fn resolved(candidato: &str, marcas: serde_json::Value, position: Option<u32>) -> ResolvedResult {
        ResolvedResult {
            raw: RawResult {
                candidato: candidato.to_string(),
                marcas,
                extra: Map::new(),
            },
            position,
        }
    }

    #[test]
    fn test_row_always_has_four_plus_max_position_columns() {
        let row = build_row(&[], &metadata(), 3);
        assert_eq!(row.len(), 7);

        let columns: Vec<&str> = row.columns().collect();
        assert_eq!(
            columns,
            vec![
                "No. Acta",
                "CENTRO DE VOTACION",
                "COLONIA",
                "TERRITORIO",
                "1",
                "2",
                "3"
            ]
        );
    }

    #[test]
    fn test_metadata_cells_are_verbatim() {
        let row = build_row(&[], &metadata(), 1);
        assert_eq!(row.get("No. Acta"), Some("2507"));
        assert_eq!(row.get("CENTRO DE VOTACION"), Some("Inst"));
        assert_eq!(row.get("COLONIA"), Some("Col"));
        assert_eq!(row.get("TERRITORIO"), Some("12"));
    }

    #[test]
    fn test_absent_positions_default_to_zero_string() {
        let records = vec![resolved("Juan Perez", json!("15"), Some(1))];
        let row = build_row(&records, &metadata(), 3);

        assert_eq!(row.get("1"), Some("15"));
        assert_eq!(row.get("2"), Some("0"));
        assert_eq!(row.get("3"), Some("0"));
    }

    #[test]
    fn test_unresolved_records_never_contribute_marks() {
        let records = vec![
            resolved("Ghost", json!("99"), None),
            resolved("Juan Perez", json!("15"), Some(2)),
        ];
        let row = build_row(&records, &metadata(), 2);

        assert_eq!(row.get("1"), Some("0"));
        assert_eq!(row.get("2"), Some("15"));
    }

    #[test]
    fn test_position_collision_keeps_later_mark() {
        let records = vec![
            resolved("Juan Perez", json!("10"), Some(1)),
            resolved("Juan Perez", json!("25"), Some(1)),
        ];
        let row = build_row(&records, &metadata(), 1);

        assert_eq!(row.get("1"), Some("25"));
    }

    #[test]
    fn test_numeric_marks_render_as_decimal_text() {
        let records = vec![resolved("Juan Perez", json!(42), Some(1))];
        let row = build_row(&records, &metadata(), 1);
        assert_eq!(row.get("1"), Some("42"));
    }

    #[test]
    fn test_headers_match_row_columns() {
        let records = vec![resolved("Juan Perez", json!("15"), Some(1))];
        let row = build_row(&records, &metadata(), 5);
        let headers = column_headers(5);

        let columns: Vec<&str> = row.columns().collect();
        let expected: Vec<&str> = headers.iter().map(|s| s.as_str()).collect();
        assert_eq!(columns, expected);
    }
}
