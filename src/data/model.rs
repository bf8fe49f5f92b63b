use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a decoded row
// ---------------------------------------------------------------------------

/// A decoded cell. Values are kept as the decoder produced them; numbers and
/// dates arrive already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CellValue {
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    /// Build a cell from decoder text. An empty string becomes [`CellValue::Empty`].
    pub fn from_text(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }

    /// `Empty`, or text with no characters.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.is_empty(),
            CellValue::Empty => true,
        }
    }

    /// The text of a non-blank cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// RowRecord – one decoded row, column order preserved
// ---------------------------------------------------------------------------

/// Ordered mapping column name → cell value.
///
/// Rows are short (a handful of spreadsheet columns) so lookups scan the
/// entries instead of hashing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowRecord {
    cells: Vec<(String, CellValue)>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column` to `value`. An existing column keeps its position.
    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, slot)) => *slot = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in row order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter().map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for RowRecord {
    fn from_iter<I: IntoIterator<Item = (K, CellValue)>>(iter: I) -> Self {
        let mut row = RowRecord::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

// ---------------------------------------------------------------------------
// RawRows – decoder output before normalisation
// ---------------------------------------------------------------------------

/// Rows as a decoder hands them over.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRows {
    /// Workbook grid: column `i` belongs to `headers[i]`.
    Positional(Vec<Vec<CellValue>>),
    /// Header-aware decoders (CSV) already key each value by column.
    Keyed(Vec<RowRecord>),
}

impl RawRows {
    pub fn len(&self) -> usize {
        match self {
            RawRows::Positional(rows) => rows.len(),
            RawRows::Keyed(rows) => rows.len(),
        }
    }
}

/// Which decoder produced a [`DecodedFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Workbook,
}

impl FileKind {
    pub fn label(self) -> &'static str {
        match self {
            FileKind::Csv => "CSV",
            FileKind::Workbook => "Excel",
        }
    }
}

/// Header list plus raw rows of one decoded file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFile {
    pub kind: FileKind,
    pub headers: Vec<String>,
    pub rows: RawRows,
}

// ---------------------------------------------------------------------------
// Dataset – the validated, normalised rows of one file
// ---------------------------------------------------------------------------

/// The rows of one loaded file, normalised to `headers` with empty rows removed.
/// Never mutated after construction; filters derive new row sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<RowRecord>,
}

impl Dataset {
    /// Normalise and validate decoder output.
    pub fn from_decoded(decoded: DecodedFile) -> Result<Self, super::error::LoadError> {
        let rows = super::normalize::normalize(decoded.rows, &decoded.headers)?;
        let rows = super::validate::filter_empty(rows);
        debug_assert!(
            decoded.headers.is_empty()
                || rows
                    .iter()
                    .all(|r| r.columns().eq(decoded.headers.iter().map(String::as_str)))
        );
        Ok(Dataset {
            headers: decoded.headers,
            rows,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Make raw header cells usable as column identities: blank names become
/// `Column N` and repeated names get a ` (k)` suffix.
pub fn sanitize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut headers: Vec<String> = Vec::new();
    for (i, name) in raw.into_iter().enumerate() {
        let base = match name.as_ref() {
            "" => format!("Column {}", i + 1),
            s => s.to_string(),
        };
        let mut candidate = base.clone();
        let mut k = 2;
        while headers.contains(&candidate) {
            candidate = format!("{base} ({k})");
            k += 1;
        }
        headers.push(candidate);
    }
    headers
}
