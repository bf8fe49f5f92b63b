use super::model::RowRecord;

/// Rows shown in the preview table.
pub const PREVIEW_LIMIT: usize = 3;

/// First rows of a (possibly filtered) dataset, ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<RowRecord>,
    /// Rows in the projected sequence, before truncation.
    pub total: usize,
}

impl Preview {
    pub fn is_truncated(&self) -> bool {
        self.total > self.rows.len()
    }
}

/// Take at most `limit` rows from `rows`, in order, labelled by `headers`.
pub fn project(rows: &[RowRecord], headers: &[String], limit: usize) -> Preview {
    Preview {
        headers: headers.to_vec(),
        rows: rows.iter().take(limit).cloned().collect(),
        total: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn rows(n: usize) -> Vec<RowRecord> {
        (0..n)
            .map(|i| {
                let mut r = RowRecord::new();
                r.insert("id", CellValue::Text(i.to_string()));
                r
            })
            .collect()
    }

    #[test]
    fn test_returns_min_of_limit_and_len() {
        let headers = vec!["id".to_string()];
        for n in 0..6 {
            let data = rows(n);
            let preview = project(&data, &headers, PREVIEW_LIMIT);
            assert_eq!(preview.rows.len(), n.min(PREVIEW_LIMIT));
            assert_eq!(preview.headers, headers);
            assert_eq!(preview.total, n);
            assert_eq!(preview.rows[..], data[..preview.rows.len()]);
        }
    }

    #[test]
    fn test_truncation_flag() {
        let headers = vec!["id".to_string()];
        assert!(project(&rows(4), &headers, 3).is_truncated());
        assert!(!project(&rows(3), &headers, 3).is_truncated());
        assert!(!project(&[], &headers, 3).is_truncated());
    }
}
