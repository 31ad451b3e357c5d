//! CSV data model types

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Field delimiter and quote character used to read and write delimited text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    delimiter: char,
    quote: char,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

impl Dialect {
    /// Create a dialect, rejecting character combinations the parser cannot tell apart
    pub fn new(delimiter: char, quote: char) -> Result<Self, Error> {
        if delimiter == quote {
            return Err(Error::invalid_argument(format!(
                "delimiter and quote must differ (both are {:?})",
                delimiter
            )));
        }
        for (name, ch) in [("delimiter", delimiter), ("quote", quote)] {
            if ch == '\r' || ch == '\n' {
                return Err(Error::invalid_argument(format!(
                    "{} cannot be a line ending character",
                    name
                )));
            }
        }
        Ok(Self { delimiter, quote })
    }

    /// Comma-separated with a custom delimiter
    pub fn with_delimiter(delimiter: char) -> Result<Self, Error> {
        Self::new(delimiter, '"')
    }

    /// Get the delimiter character
    pub fn delimiter(self) -> char {
        self.delimiter
    }

    /// Get the quote character
    pub fn quote(self) -> char {
        self.quote
    }

    /// Pick a dialect from a file extension
    pub fn for_extension(ext: &str) -> Self {
        let delimiter = match ext.to_lowercase().as_str() {
            "tsv" => '\t',
            "psv" => '|',
            _ => ',',
        };
        Self {
            delimiter,
            quote: '"',
        }
    }
}

/// Parsed delimited text: ordered rows of ordered string cells.
///
/// Rows keep the length they had in the source text. Use [`Grid::normalize`]
/// to pad them to a rectangle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from rows of cells
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get cell value, missing cells read as empty
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Pad every row with empty cells up to the widest row
    pub fn normalize(&mut self) {
        let width = self.column_count();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
    }

    /// Compare cell by cell, treating missing cells as empty
    pub fn is_equivalent(&self, other: &Grid) -> bool {
        if self.row_count() != other.row_count() || self.column_count() != other.column_count() {
            return false;
        }
        let cols = self.column_count();
        (0..self.row_count()).all(|r| (0..cols).all(|c| self.get(r, c) == other.get(r, c)))
    }
}

/// A grid whose first row has been promoted to column names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    body: Grid,
}

impl Table {
    /// Take the first row of `grid` as the column names.
    ///
    /// When names repeat, empty names become `(n)` and repeated names get a
    /// `(n)` suffix; `n` is a single counter shared across the header row.
    pub fn from_grid_with_headers(grid: Grid) -> Self {
        let mut rows = grid.into_rows().into_iter();
        let Some(header) = rows.next() else {
            return Self::default();
        };

        Self {
            columns: dedupe_column_names(header),
            body: Grid { rows: rows.collect() },
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Data rows, header excluded
    pub fn body(&self) -> &Grid {
        &self.body
    }

    pub fn row_count(&self) -> usize {
        self.body.row_count()
    }

    /// Look up a cell by row index and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        (row < self.body.row_count()).then(|| self.body.get(row, col))
    }

    /// Serialize with the header row first
    pub fn to_csv(&self, dialect: Dialect) -> String {
        let mut grid = Grid::new();
        grid.push_row(self.columns.clone());
        grid.rows.extend(self.body.rows.iter().cloned());
        super::serialize(&grid, dialect)
    }
}

fn dedupe_column_names(names: Vec<String>) -> Vec<String> {
    let duplicates: Vec<&String> = names
        .iter()
        .enumerate()
        .filter(|(i, name)| names[..*i].contains(name))
        .map(|(_, name)| name)
        .collect();

    if duplicates.is_empty() {
        return names;
    }

    let mut counter = 0;
    names
        .iter()
        .map(|name| {
            if name.is_empty() {
                counter += 1;
                format!("({})", counter)
            } else if duplicates.contains(&name) {
                counter += 1;
                format!("{}({})", name, counter)
            } else {
                name.clone()
            }
        })
        .collect()
}
