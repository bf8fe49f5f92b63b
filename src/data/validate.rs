use super::model::RowRecord;

/// A row with no columns, or with only blank cells.
pub fn is_empty_row(row: &RowRecord) -> bool {
    row.is_empty() || row.values().all(|v| v.is_blank())
}

/// Drop empty rows, keeping the relative order of the rest.
pub fn filter_empty(rows: Vec<RowRecord>) -> Vec<RowRecord> {
    rows.into_iter().filter(|row| !is_empty_row(row)).collect()
}
