use crate::domain::model::{OutputRow, SubmissionMetadata};
use crate::utils::error::Result;
use regex::Regex;
use rust_xlsxwriter::Workbook;

const SHEET_NAME: &str = "Resultados";
const EXTENSION: &str = ".xlsx";

/// Derives the output filename from the five metadata fields:
/// hyphen-joined, then every character outside [A-Za-z0-9-] stripped, then
/// hyphen runs collapsed to one. Strip before collapse: stripping can
/// create new runs (e.g. "a-.-b" strips to "a--b", which must collapse).
pub fn derive_filename(metadata: &SubmissionMetadata) -> String {
    let joined = format!(
        "{}-{}-{}-{}-{}",
        metadata.territory, metadata.municipio, metadata.centro, metadata.colonia, metadata.jrv
    );

    let strip = Regex::new(r"[^a-zA-Z0-9-]").unwrap();
    let collapse = Regex::new(r"-+").unwrap();

    let stripped = strip.replace_all(&joined, "");
    let collapsed = collapse.replace_all(&stripped, "-");

    format!("{}{}", collapsed, EXTENSION)
}

/// Serializes the row into a single-sheet workbook: one header row with the
/// column labels verbatim, one data row with the cell values in the same
/// order. Fails without side effects; bytes only exist on success.
pub fn write_workbook(row: &OutputRow) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, label) in row.columns().enumerate() {
        worksheet.write_string(0, col as u16, label)?;
    }
    for (col, value) in row.values().enumerate() {
        worksheet.write_string(1, col as u16, value)?;
    }

    Ok(workbook.save_to_buffer()?)
}
