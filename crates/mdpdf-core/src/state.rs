//! Scanner state for a single pass over a document.
//!
//! [`ScanState`] holds the two mode flags and the table buffer. It is owned
//! by the parser and mutated once per input line.

use crate::types::Table;

/// State threaded through the line scan.
///
/// # Example
///
/// ```
/// use mdpdf_core::ScanState;
///
/// let mut state = ScanState::new();
/// state.toggle_code_block();
/// assert!(state.in_code_block);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Inside a fenced code block
    pub in_code_block: bool,
    /// Consecutive table rows are being buffered
    pub in_table: bool,
    /// Rows of the table being buffered
    pub table: Table,
    /// Index of the next line to scan
    pub line_number: usize,
}

impl ScanState {
    /// Create a fresh state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip code-block mode, returning the new value.
    pub fn toggle_code_block(&mut self) -> bool {
        self.in_code_block = !self.in_code_block;
        self.in_code_block
    }

    /// Buffer a table row and enter table mode.
    pub fn push_table_row(&mut self, cells: Vec<String>) {
        self.table.push_row(cells);
        self.in_table = true;
    }

    /// Leave table mode and hand back the buffered table.
    ///
    /// Returns `None` when no table was open or it holds no rows.
    pub fn flush_table(&mut self) -> Option<Table> {
        if !self.in_table {
            return None;
        }
        self.in_table = false;
        let table = self.table.take();
        if table.is_empty() {
            None
        } else {
            Some(table)
        }
    }

    /// Reset to the initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
