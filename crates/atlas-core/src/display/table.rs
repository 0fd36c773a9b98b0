//! Plain-text table layout.
//!
//! Produces the "simple" layout: a header row, a dashed rule under each
//! column, then the data rows. Cells are left-aligned, columns are separated
//! by two spaces and trailing whitespace is trimmed from every line. Each
//! cell is stripped of surrounding whitespace before layout; a cell still
//! containing newlines spans several lines of output.
//!
//! ```text
//! Параметр    Значение
//! ----------  --------
//! Страна:     Russia
//! ```
//!
//! Widths are measured in terminal columns, so Cyrillic and wide CJK text
//! line up correctly.

use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Extra columns reserved next to each header.
const HEADER_PADDING: usize = 2;

const COLUMN_SEPARATOR: &str = "  ";

/// A table of text cells with a header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table with the given column headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a data row. Missing trailing cells render blank.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.column_count())
            .map(|column| {
                let header = self
                    .headers
                    .get(column)
                    .map_or(0, |h| h.width() + HEADER_PADDING);
                self.rows
                    .iter()
                    .filter_map(|row| row.get(column))
                    .flat_map(|cell| cell_lines(cell))
                    .map(UnicodeWidthStr::width)
                    .fold(header, usize::max)
            })
            .collect()
    }

    /// Lay the table out as individual lines.
    pub fn lines(&self) -> Vec<String> {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        lines.push(layout_line(&widths, |column| {
            self.headers.get(column).map_or("", String::as_str)
        }));
        lines.push(
            widths
                .iter()
                .map(|width| "-".repeat(*width))
                .collect::<Vec<_>>()
                .join(COLUMN_SEPARATOR),
        );

        for row in &self.rows {
            let cells: Vec<Vec<&str>> = (0..widths.len())
                .map(|column| row.get(column).map_or_else(|| vec![""], |cell| cell_lines(cell)))
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                lines.push(layout_line(&widths, |column| {
                    cells[column].get(line).copied().unwrap_or("")
                }));
            }
        }

        lines
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Splits a stripped cell into display lines; an empty cell still occupies
/// one line.
fn cell_lines(cell: &str) -> Vec<&str> {
    let lines: Vec<&str> = cell.trim().lines().collect();
    if lines.is_empty() {
        vec![""]
    } else {
        lines
    }
}

fn layout_line<'a>(widths: &[usize], text_at: impl Fn(usize) -> &'a str) -> String {
    let mut line = String::new();
    for (column, width) in widths.iter().enumerate() {
        if column > 0 {
            line.push_str(COLUMN_SEPARATOR);
        }
        let text = text_at(column);
        line.push_str(text);
        line.push_str(&" ".repeat(width.saturating_sub(text.width())));
    }
    line.truncate(line.trim_end().len());
    line
}
