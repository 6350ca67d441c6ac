use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::formatters::truncate;

/// Plain-text table: left-aligned columns sized to their widest cell.
pub struct TableView<'a> {
    headers: Vec<&'a str>,
    rows: &'a [Vec<String>],
    color: bool,
    max_width: Option<usize>,
}

impl<'a> TableView<'a> {
    pub fn new(headers: Vec<&'a str>, rows: &'a [Vec<String>]) -> Self {
        Self {
            headers,
            rows,
            color: false,
            max_width: None,
        }
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Clip every line to the terminal width.
    pub fn max_width(mut self, width: Option<usize>) -> Self {
        self.max_width = width;
        self
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn line<S: AsRef<str>>(&self, cells: &[S], widths: &[usize]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = width))
            .collect();
        let line = padded.join("  ").trim_end().to_string();
        match self.max_width {
            Some(max) => truncate(&line, max, "~"),
            None => line,
        }
    }
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        let header = self.line(&self.headers, &widths);
        if self.color {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }

        for row in self.rows {
            writeln!(f, "{}", self.line(row, &widths))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_aligned() {
        let rows = vec![
            vec!["acme".to_string(), "rocket-1".to_string()],
            vec!["zeta-labs".to_string(), "z".to_string()],
        ];
        let out = TableView::new(vec!["PROVIDER", "MODEL"], &rows).to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "PROVIDER   MODEL");
        assert_eq!(lines[1], "acme       rocket-1");
        assert_eq!(lines[2], "zeta-labs  z");
    }

    #[test]
    fn test_lines_are_clipped() {
        let rows = vec![vec!["a-very-long-provider-name".to_string()]];
        let out = TableView::new(vec!["PROVIDER"], &rows)
            .max_width(Some(10))
            .to_string();
        assert_eq!(out.lines().nth(1), Some("a-very-lo~"));
    }
}
