use super::error::LoadError;
use super::model::{CellValue, RawRows, RowRecord};

/// Turn decoder rows into records keyed by `headers`.
///
/// * Positional rows need a non-empty header list (an empty grid needs none).
///   Short rows are padded with [`CellValue::Empty`], values past the last
///   header are dropped.
/// * Keyed rows are reshaped to `headers` (missing columns become `Empty`,
///   unknown columns are dropped). Without headers they pass through as-is.
///
/// Input row order is preserved, one record per input row.
pub fn normalize(raw: RawRows, headers: &[String]) -> Result<Vec<RowRecord>, LoadError> {
    match raw {
        RawRows::Positional(rows) => {
            if headers.is_empty() && !rows.is_empty() {
                return Err(LoadError::MalformedHeader);
            }
            Ok(rows
                .into_iter()
                .map(|row| positional_to_record(row, headers))
                .collect())
        }
        RawRows::Keyed(rows) if headers.is_empty() => Ok(rows),
        RawRows::Keyed(rows) => Ok(rows
            .into_iter()
            .map(|row| reshape(&row, headers))
            .collect()),
    }
}

fn positional_to_record(row: Vec<CellValue>, headers: &[String]) -> RowRecord {
    let mut values = row.into_iter();
    headers
        .iter()
        .map(|h| (h.clone(), values.next().unwrap_or_default()))
        .collect()
}

fn reshape(row: &RowRecord, headers: &[String]) -> RowRecord {
    headers
        .iter()
        .map(|h| (h.clone(), row.get(h).cloned().unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn text(s: &str) -> CellValue {
        CellValue::from_text(s)
    }

    #[test]
    fn test_positional_rows_are_padded_and_truncated() {
        let h = headers(&["a", "b", "c"]);
        let raw = RawRows::Positional(vec![
            vec![text("1")],
            vec![text("1"), text("2"), text("3"), text("extra")],
            vec![],
        ]);

        let rows = normalize(raw, &h).unwrap();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        }
        assert_eq!(rows[0].get("b"), Some(&CellValue::Empty));
        assert_eq!(rows[1].get("c"), Some(&text("3")));
        assert!(rows[1].values().all(|v| *v != text("extra")));
    }

    #[test]
    fn test_positional_rows_without_headers_fail() {
        let raw = RawRows::Positional(vec![vec![text("x")]]);
        assert!(matches!(normalize(raw, &[]), Err(LoadError::MalformedHeader)));
    }

    #[test]
    fn test_positional_empty_input_without_headers() {
        let rows = normalize(RawRows::Positional(vec![]), &[]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_positional_empty_input_with_headers() {
        let rows = normalize(RawRows::Positional(vec![]), &headers(&["a"])).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_keyed_rows_follow_header_order() {
        let h = headers(&["Área", "Responsable"]);
        let row: RowRecord = vec![
            ("Responsable", text("Ana")),
            ("Notas", text("ignored")),
        ]
        .into_iter()
        .collect();

        let rows = normalize(RawRows::Keyed(vec![row]), &h).unwrap();
        assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["Área", "Responsable"]);
        assert_eq!(rows[0].get("Área"), Some(&CellValue::Empty));
        assert_eq!(rows[0].get("Responsable"), Some(&text("Ana")));
        assert_eq!(rows[0].get("Notas"), None);
    }

    #[test]
    fn test_keyed_rows_without_headers_pass_through() {
        let row: RowRecord = vec![("x", text("1"))].into_iter().collect();
        let rows = normalize(RawRows::Keyed(vec![row.clone()]), &[]).unwrap();
        assert_eq!(rows, vec![row]);
    }

    #[test]
    fn test_row_count_and_keys_match_headers() {
        let h = headers(&["a", "b", "c", "d"]);
        let grid: Vec<Vec<CellValue>> = (0..=4)
            .map(|n| (0..n).map(|i| text(&i.to_string())).collect())
            .collect();

        let rows = normalize(RawRows::Positional(grid.clone()), &h).unwrap();
        assert_eq!(rows.len(), grid.len());
        for row in rows {
            assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
        }
    }
}
