//! Tabular view over the rows of a database.

use super::CellValue;
use std::collections::{HashMap, HashSet};

/// One page of a database, flattened into `column -> value` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    id: Option<String>,
    cells: Vec<(String, CellValue)>,
}

impl Row {
    pub fn new(id: Option<String>) -> Self {
        Self {
            id,
            cells: Vec::new(),
        }
    }

    /// A row from cells whose column names are already unique, e.g. the keys of a json object.
    pub fn with_cells(id: Option<String>, cells: Vec<(String, CellValue)>) -> Self {
        Self { id, cells }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set a cell, replacing the value if the column is already present.
    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        let column = column.into();
        match self.cells.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.cells.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The rows of a database query with the union of their columns.
///
/// Rows keep the order in which the service returned them. Rows that carry an
/// id can be looked up by it; a cell missing from a row reads as `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
    index: HashMap<String, usize>,
}

impl Table {
    /// A table with no rows and the given columns.
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds the table from rows, collecting columns in first-appearance order.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut index = HashMap::new();

        for (position, row) in rows.iter().enumerate() {
            for column in row.columns() {
                if seen.insert(column) {
                    columns.push(column.to_string());
                }
            }
            if let Some(id) = row.id() {
                index.entry(id.to_string()).or_insert(position);
            }
        }

        Self {
            columns,
            rows,
            index,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// the row with the given page id
    pub fn row(&self, id: &str) -> Option<&Row> {
        self.index.get(id).map(|&position| &self.rows[position])
    }

    /// every row's value for `column`, in row order
    pub fn column<'a>(&'a self, column: &'a str) -> impl Iterator<Item = Option<&'a CellValue>> {
        self.rows.iter().map(move |row| row.get(column))
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}
