/// In-memory passenger table: a header row plus ordered rows of optional cells.
///
/// A cell is `None` when the value is missing. Every row has exactly
/// `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Dataset {
    pub(crate) headers: Vec<String>,
    pub(crate) rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    pub(crate) fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of missing cells in column `index`.
    pub(crate) fn missing_count(&self, index: usize) -> usize {
        self.rows
            .iter()
            .filter(|row| row.get(index).map_or(true, Option::is_none))
            .count()
    }

    pub(crate) fn is_complete(row: &[Option<String>]) -> bool {
        row.iter().all(Option::is_some)
    }
}
