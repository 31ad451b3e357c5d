//! Lenient delimited text parsing and serialization
//!
//! Quoted fields may hold delimiters, quotes (doubled) and line breaks.
//! Malformed input never fails: an unterminated quote runs to the end of the
//! text and stray quotes inside unquoted fields are kept as literal text.

use super::model::{Dialect, Grid};

/// Accumulates fields and rows while scanning
#[derive(Debug, Default)]
struct ParserState {
    grid: Grid,
    row: Vec<String>,
    field: String,
    in_quotes: bool,
    /// Current field opened with a quote (so an empty value still counts)
    quoted: bool,
    /// A closing quote was seen; ignore everything up to the next separator
    after_quote: bool,
}

impl ParserState {
    fn has_pending(&self) -> bool {
        !self.row.is_empty() || !self.field.is_empty() || self.quoted
    }

    fn close_field(&mut self) {
        self.row.push(std::mem::take(&mut self.field));
        self.quoted = false;
        self.after_quote = false;
    }

    fn close_row(&mut self) {
        if self.has_pending() {
            self.close_field();
            self.grid.push_row(std::mem::take(&mut self.row));
        }
        self.quoted = false;
        self.after_quote = false;
    }
}

/// Parse delimited text into a grid.
///
/// `\r\n`, `\n` and `\r` all end a row. Lines with no characters produce no
/// row, and text made only of whitespace yields an empty grid.
pub fn parse(text: &str, dialect: Dialect) -> Grid {
    if text.trim().is_empty() {
        return Grid::new();
    }

    let delimiter = dialect.delimiter();
    let quote = dialect.quote();
    let mut state = ParserState::default();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if state.in_quotes {
            if ch == quote {
                if chars.peek() == Some(&quote) {
                    state.field.push(quote);
                    chars.next();
                } else {
                    state.in_quotes = false;
                    state.after_quote = true;
                }
            } else {
                state.field.push(ch);
            }
            continue;
        }

        if ch == delimiter {
            state.close_field();
        } else if ch == '\r' || ch == '\n' {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            state.close_row();
        } else if state.after_quote {
            // Text between a closing quote and the next separator is dropped
        } else if ch == quote && state.field.trim().is_empty() {
            state.field.clear();
            state.in_quotes = true;
            state.quoted = true;
        } else {
            state.field.push(ch);
        }
    }

    if state.in_quotes {
        tracing::trace!("Unterminated quoted field closed at end of input");
    }
    state.close_row();

    let grid = state.grid;
    tracing::debug!(
        "Parsed delimited text: {} rows, {} columns",
        grid.row_count(),
        grid.column_count()
    );
    grid
}

/// Serialize a grid back to delimited text.
///
/// Rows are joined with `\r\n` and there is no trailing line break. A row
/// holding one blank cell is written quoted so it is not read back as a
/// blank line. A row with no cells is written the same way as `""`, so it
/// reads back as a row with one empty cell.
pub fn serialize(grid: &Grid, dialect: Dialect) -> String {
    grid.rows()
        .iter()
        .map(|row| match row.as_slice() {
            [] => quote_field("", dialect),
            [only] if only.trim().is_empty() => quote_field(only, dialect),
            _ => row
                .iter()
                .map(|cell| escape_field(cell, dialect))
                .collect::<Vec<_>>()
                .join(&dialect.delimiter().to_string()),
        })
        .collect::<Vec<_>>()
        .join("\r\n")
}

fn escape_field(field: &str, dialect: Dialect) -> String {
    let needs_quotes = field.contains(['\r', '\n'])
        || field.contains(dialect.quote())
        || field.contains(dialect.delimiter());

    if needs_quotes {
        quote_field(field, dialect)
    } else {
        field.to_string()
    }
}

fn quote_field(field: &str, dialect: Dialect) -> String {
    let quote = dialect.quote();
    let mut out = String::with_capacity(field.len() + 2);
    out.push(quote);
    for ch in field.chars() {
        if ch == quote {
            out.push(quote);
        }
        out.push(ch);
    }
    out.push(quote);
    out
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Dialect {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    let delimiter = if max == 0 || comma_count == max {
        ','
    } else if tab_count == max {
        '\t'
    } else if pipe_count == max {
        '|'
    } else {
        ';'
    };

    Dialect::with_delimiter(delimiter).unwrap_or_default()
}
