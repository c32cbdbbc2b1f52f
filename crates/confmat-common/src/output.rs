//! Aligned text tables for terminal output.

/// A rendered-on-demand text table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Render with the first column left-aligned and the rest right-aligned.
    ///
    /// Column widths are measured in `char`s; short rows are padded with
    /// empty cells.
    pub fn render(&self) -> String {
        let n_cols = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);
        if n_cols == 0 {
            return String::new();
        }

        let mut widths = vec![0usize; n_cols];
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut out = String::new();
        if !self.headers.is_empty() {
            out.push_str(&render_row(&self.headers, &widths));
            out.push('\n');
            let rule_len = widths.iter().sum::<usize>() + 2 * (n_cols - 1);
            out.push_str(&"-".repeat(rule_len));
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(&render_row(row, &widths));
            out.push('\n');
        }
        out
    }
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, &width) in widths.iter().enumerate() {
        let cell = cells.get(i).map_or("", String::as_str);
        if i == 0 {
            line.push_str(&format!("{cell:<width$}"));
        } else {
            line.push_str(&format!("  {cell:>width$}"));
        }
    }
    line.trim_end().to_string()
}

/// Builder for [`Table`].
#[derive(Debug, Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers<S: Into<String>>(mut self, headers: Vec<S>) -> Self {
        self.table.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn row<S: Into<String>>(mut self, cells: Vec<S>) -> Self {
        self.table.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_columns() {
        let table = TableBuilder::new()
            .headers(vec!["label", "a", "bb"])
            .row(vec!["a", "1", "10"])
            .row(vec!["bb", "200", "3"])
            .build();

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "label    a  bb");
        assert_eq!(lines[1], "--------------");
        assert_eq!(lines[2], "a        1  10");
        assert_eq!(lines[3], "bb     200   3");
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = TableBuilder::new().headers(vec!["x", "y"]).row(vec!["1"]).build();
        assert_eq!(table.rows()[0].len(), 1);
        assert!(table.render().lines().nth(2).is_some());
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(TableBuilder::new().build().render(), "");
    }
}
