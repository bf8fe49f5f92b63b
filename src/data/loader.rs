use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use chrono::{NaiveDateTime, NaiveTime};

use super::error::LoadError;
use super::model::{sanitize_headers, CellValue, DecodedFile, FileKind, RawRows, RowRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a file chosen in the dialog. `None` means the dialog was cancelled.
pub fn load_path(path: Option<&Path>) -> Result<(String, DecodedFile), LoadError> {
    let path = path.ok_or(LoadError::NoFileSelected)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    // Reject by extension before touching the disk.
    file_kind(&name)?;

    let bytes = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))
        .map_err(|e| LoadError::decode(&name, e))?;
    let decoded = decode(&name, &bytes)?;
    Ok((name, decoded))
}

/// Decode file content. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – first record is the header row, remaining records keyed by it
/// * `.xlsx` – first worksheet; first row is the header row, the rest positional
pub fn decode(name: &str, bytes: &[u8]) -> Result<DecodedFile, LoadError> {
    let decoded = match file_kind(name)? {
        FileKind::Csv => decode_csv(bytes),
        FileKind::Workbook => decode_xlsx(bytes),
    }
    .map_err(|e| LoadError::decode(name, e))?;

    log::debug!(
        "Decoded {name}: {} columns, {} raw rows",
        decoded.headers.len(),
        decoded.rows.len()
    );
    Ok(decoded)
}

/// Pick the decoder from the file extension (case-insensitive).
pub fn file_kind(name: &str) -> Result<FileKind, LoadError> {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => Ok(FileKind::Csv),
        "xlsx" => Ok(FileKind::Workbook),
        other => Err(LoadError::UnsupportedFileType(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV decoder
// ---------------------------------------------------------------------------

/// Header row, then one keyed row per record. Records may be shorter or
/// longer than the header row; extra fields are dropped here.
fn decode_csv(bytes: &[u8]) -> Result<DecodedFile> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = sanitize_headers(reader.headers().context("reading CSV headers")?.iter());

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        let row: RowRecord = headers
            .iter()
            .zip(record.iter())
            .map(|(h, value)| (h.clone(), CellValue::from_text(value)))
            .collect();
        rows.push(row);
    }

    Ok(DecodedFile {
        kind: FileKind::Csv,
        headers,
        rows: RawRows::Keyed(rows),
    })
}

// ---------------------------------------------------------------------------
// Workbook decoder
// ---------------------------------------------------------------------------

/// First worksheet as a grid of display strings.
///
/// The used range spans the widest row, so the header row is cut back to its
/// last non-blank cell; values further right are dropped by `normalize`.
fn decode_xlsx(bytes: &[u8]) -> Result<DecodedFile> {
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(Cursor::new(bytes)).context("opening workbook")?;

    let range = workbook
        .worksheet_range_at(0)
        .context("workbook contains no sheets")?
        .context("reading first worksheet")?;

    let mut grid = range.rows();
    let headers = match grid.next() {
        Some(first) => {
            let width = first
                .iter()
                .rposition(|c| !cell_text(c).is_empty())
                .map_or(0, |last| last + 1);
            sanitize_headers(first[..width].iter().map(cell_text))
        }
        None => Vec::new(),
    };
    let rows = grid
        .map(|row| row.iter().map(|c| CellValue::from_text(&cell_text(c))).collect())
        .collect();

    Ok(DecodedFile {
        kind: FileKind::Workbook,
        headers,
        rows: RawRows::Positional(rows),
    })
}

/// Formatted cell text, the way the sheet displays it.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(when) if dt.is_datetime() => datetime_text(when),
            _ => dt.to_string(),
        },
        other => other.to_string(),
    }
}

/// `2024-01-15`, or `2024-01-15 08:30:00` when the cell carries a time.
fn datetime_text(when: NaiveDateTime) -> String {
    if when.time() == NaiveTime::MIN {
        when.format("%Y-%m-%d").to_string()
    } else {
        when.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
