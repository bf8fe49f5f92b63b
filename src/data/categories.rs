use std::collections::{BTreeMap, BTreeSet};

use super::model::RowRecord;

// ---------------------------------------------------------------------------
// CategoryIndex – distinct values of the categorical columns
// ---------------------------------------------------------------------------

/// For each categorical field, the sorted set of distinct non-blank values.
///
/// Values iterate in sort order, not in the order rows first mention them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    values: BTreeMap<String, BTreeSet<String>>,
}

impl CategoryIndex {
    /// Values seen for `field`; `None` if the field was never indexed.
    pub fn values(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.values.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(BTreeSet::is_empty)
    }
}

/// Collect the distinct values of `fields` across `rows`.
///
/// Every requested field gets an entry. Rows without the column or with a
/// blank value contribute nothing.
pub fn extract_categories<S: AsRef<str>>(rows: &[RowRecord], fields: &[S]) -> CategoryIndex {
    let mut values: BTreeMap<String, BTreeSet<String>> = fields
        .iter()
        .map(|f| (f.as_ref().to_string(), BTreeSet::new()))
        .collect();

    for row in rows {
        for (field, seen) in values.iter_mut() {
            if let Some(text) = row.get(field).and_then(|v| v.as_text()) {
                seen.insert(text.to_string());
            }
        }
    }

    CategoryIndex { values }
}
