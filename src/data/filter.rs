use std::collections::{BTreeMap, BTreeSet};

use super::model::RowRecord;

// ---------------------------------------------------------------------------
// Filter predicate: which category values are allowed per column
// ---------------------------------------------------------------------------

/// Per-column selection: maps column_name → set of allowed values.
/// If a column is absent or its set is empty, it imposes no constraint.
pub type Selection = BTreeMap<String, BTreeSet<String>>;

/// Whether any column in `selection` actually restricts rows.
pub fn is_active(selection: &Selection) -> bool {
    selection.values().any(|allowed| !allowed.is_empty())
}

/// Whether `row` passes every constraint in `selection`.
///
/// A row passes a column constraint when:
/// * The allowed set is empty → no constraint
/// * The row's value for that column is in the allowed set
///
/// A row without the column, or with a blank value, fails a non-empty set.
pub fn matches(row: &RowRecord, selection: &Selection) -> bool {
    selection.iter().all(|(col, allowed)| {
        if allowed.is_empty() {
            return true;
        }
        row.get(col)
            .and_then(|v| v.as_text())
            .is_some_and(|text| allowed.contains(text))
    })
}

/// Return indices of rows that pass all active filters.
pub fn filtered_indices(rows: &[RowRecord], selection: &Selection) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| matches(row, selection))
        .map(|(i, _)| i)
        .collect()
}

/// The rows passing `selection`, in original order.
///
/// Callers always pass the original dataset, never a previous result, so
/// successive selections do not compound.
pub fn apply(rows: &[RowRecord], selection: &Selection) -> Vec<RowRecord> {
    filtered_indices(rows, selection)
        .into_iter()
        .map(|i| rows[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn row(cells: &[(&str, &str)]) -> RowRecord {
        cells
            .iter()
            .map(|(k, v)| (*k, CellValue::from_text(v)))
            .collect()
    }

    fn dataset() -> Vec<RowRecord> {
        vec![
            row(&[("Área", "Ops"), ("Responsable", "Ana")]),
            row(&[("Área", "IT"), ("Responsable", "Leo")]),
            row(&[("Área", "IT"), ("Responsable", "Ana")]),
            row(&[("Área", ""), ("Responsable", "Leo")]),
        ]
    }

    fn selection(entries: &[(&str, &[&str])]) -> Selection {
        entries
            .iter()
            .map(|(col, vals)| {
                (
                    col.to_string(),
                    vals.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let rows = dataset();
        assert_eq!(apply(&rows, &Selection::new()), rows);
        assert_eq!(
            apply(&rows, &selection(&[("Área", &[]), ("Responsable", &[])])),
            rows
        );
    }

    #[test]
    fn test_or_within_field() {
        let rows = dataset();
        let sel = selection(&[("Área", &["Ops", "IT"])]);
        assert_eq!(filtered_indices(&rows, &sel), vec![0, 1, 2]);
    }

    #[test]
    fn test_and_across_fields() {
        let rows = dataset();
        let sel = selection(&[("Área", &["IT"]), ("Responsable", &["Ana"])]);
        assert_eq!(apply(&rows, &sel), vec![rows[2].clone()]);
    }

    #[test]
    fn test_missing_or_blank_field_fails_active_constraint() {
        let mut rows = dataset();
        rows.push(row(&[("Responsable", "Leo")]));

        let sel = selection(&[("Área", &["IT"])]);
        assert_eq!(filtered_indices(&rows, &sel), vec![1, 2]);

        // inactive constraint on the same field lets them through
        let sel = selection(&[("Área", &[]), ("Responsable", &["Leo"])]);
        assert_eq!(filtered_indices(&rows, &sel), vec![1, 3, 4]);
    }

    #[test]
    fn test_unknown_field_with_values_excludes_everything() {
        let rows = dataset();
        let sel = selection(&[("Estado", &["Abierto"])]);
        assert!(apply(&rows, &sel).is_empty());
    }

    #[test]
    fn test_repeated_application_is_not_cumulative() {
        let rows = dataset();
        let first = apply(&rows, &selection(&[("Área", &["Ops"])]));
        let second = apply(&rows, &selection(&[("Área", &["IT"])]));
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 2);
        assert_eq!(apply(&rows, &selection(&[("Área", &["IT"])])), second);
    }

    #[test]
    fn test_is_active() {
        assert!(!is_active(&Selection::new()));
        assert!(!is_active(&selection(&[("Área", &[])])));
        assert!(is_active(&selection(&[("Área", &["IT"])])));
    }
}
