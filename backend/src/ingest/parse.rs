use calamine::{open_workbook_auto_from_rs, Data, Reader};
use common::model::list::ListItem;
use std::io::Cursor;

use crate::error::ApiError;

/// Column headers recognized in uploaded files. Matching is case-sensitive;
/// any other columns are ignored.
const FIRST_NAME_COLUMN: &str = "firstName";
const PHONE_COLUMN: &str = "phone";
const NOTES_COLUMN: &str = "notes";

/// How the uploaded bytes should be decoded, derived from the filename
/// extension before any parsing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Spreadsheet,
}

impl SourceFormat {
    pub fn from_extension(ext: &str) -> Result<Self, ApiError> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" | "xls" => Ok(SourceFormat::Spreadsheet),
            _ => Err(ApiError::UnsupportedExtension),
        }
    }
}

/// Decodes the uploaded bytes into rows, preserving input order.
///
/// The first row is always treated as the header. Rows are not trimmed,
/// deduplicated or otherwise validated; a file whose bytes cannot be decoded
/// as the declared format fails the whole upload.
pub fn parse_rows(bytes: &[u8], format: SourceFormat) -> Result<Vec<ListItem>, ApiError> {
    match format {
        SourceFormat::Csv => parse_csv(bytes),
        SourceFormat::Spreadsheet => parse_spreadsheet(bytes),
    }
}

/// Positions of the three retained columns within the header row.
struct ColumnIndices {
    first_name: Option<usize>,
    phone: Option<usize>,
    notes: Option<usize>,
}

impl ColumnIndices {
    fn from_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Self {
        let mut cols = Self {
            first_name: None,
            phone: None,
            notes: None,
        };
        for (idx, name) in headers.enumerate() {
            match name {
                FIRST_NAME_COLUMN if cols.first_name.is_none() => cols.first_name = Some(idx),
                PHONE_COLUMN if cols.phone.is_none() => cols.phone = Some(idx),
                NOTES_COLUMN if cols.notes.is_none() => cols.notes = Some(idx),
                _ => {}
            }
        }
        cols
    }

    /// Builds one item from a row, reading cells through `cell`. A column
    /// absent from the header yields an empty field.
    fn extract(&self, cell: impl Fn(usize) -> String) -> ListItem {
        ListItem {
            first_name: self.first_name.map(&cell).unwrap_or_default(),
            phone: self.phone.map(&cell).unwrap_or_default(),
            notes: self.notes.map(&cell).unwrap_or_default(),
        }
    }
}

fn parse_csv(bytes: &[u8]) -> Result<Vec<ListItem>, ApiError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| ApiError::MalformedInput(e.to_string()))?
        .clone();
    let columns = ColumnIndices::from_headers(headers.iter());

    let mut items = Vec::new();
    for record in reader.records() {
        // A row whose field count differs from the header errors here and
        // fails the whole upload.
        let record = record.map_err(|e| ApiError::MalformedInput(e.to_string()))?;
        items.push(columns.extract(|idx| record.get(idx).unwrap_or("").to_string()));
    }
    Ok(items)
}

fn parse_spreadsheet(bytes: &[u8]) -> Result<Vec<ListItem>, ApiError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ApiError::UnsupportedFormat(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ApiError::MalformedInput("workbook has no sheets".to_string()))?
        .map_err(|e| ApiError::MalformedInput(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let header: Vec<String> = header.iter().map(cell_text).collect();
    let columns = ColumnIndices::from_headers(header.iter().map(String::as_str));

    Ok(rows
        .map(|row| columns.extract(|idx| row.get(idx).map(cell_text).unwrap_or_default()))
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
