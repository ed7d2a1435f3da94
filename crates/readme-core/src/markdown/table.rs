//! Pipe-table rendering with ragged columns.

use std::collections::HashMap;

/// A table described column by column.
///
/// `columns` fixes display order. `values` maps each column name to its
/// cells from top to bottom; lists may differ in length and a column with
/// no entry in `values` has no cells at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names in display order.
    pub columns: Vec<String>,
    /// Cell values per column name.
    pub values: HashMap<String, Vec<String>>,
}

impl Table {
    /// Create a table from its column order and per-column values.
    pub fn new(columns: Vec<String>, values: HashMap<String, Vec<String>>) -> Self {
        Self { columns, values }
    }

    fn cells(&self, column: &str) -> &[String] {
        self.values.get(column).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of body rows: the longest referenced column.
    ///
    /// Value lists for names not in `columns` are ignored.
    pub fn row_count(&self) -> usize {
        self.columns
            .iter()
            .map(|c| self.cells(c).len())
            .max()
            .unwrap_or(0)
    }

    /// Render the table as Markdown.
    ///
    /// Missing cells in short columns render as a single space.
    pub fn render(&self) -> String {
        let mut out = String::from("|");
        for name in &self.columns {
            out.push_str(name);
            out.push('|');
        }
        out.push_str("\n|");
        for _ in &self.columns {
            out.push_str(" --- |");
        }
        out.push('\n');

        for row in 0..self.row_count() {
            out.push('|');
            for name in &self.columns {
                match self.cells(name).get(row) {
                    Some(cell) => out.push_str(cell),
                    None => out.push(' '),
                }
                out.push('|');
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], values: &[(&str, &[&str])]) -> Table {
        Table::new(
            columns.iter().map(|s| s.to_string()).collect(),
            values
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_render_even_columns() {
        let t = table(
            &["c1", "c2"],
            &[("c1", &["value1", "value2"]), ("c2", &["value3", "value4"])],
        );
        assert_eq!(
            t.render(),
            "|c1|c2|\n| --- | --- |\n|value1|value3|\n|value2|value4|\n"
        );
    }

    #[test]
    fn test_render_ragged_columns() {
        let t = table(&["a", "b"], &[("a", &["1", "2", "3"]), ("b", &["x"])]);
        assert_eq!(t.row_count(), 3);
        assert_eq!(
            t.render(),
            "|a|b|\n| --- | --- |\n|1|x|\n|2| |\n|3| |\n"
        );
    }

    #[test]
    fn test_render_column_without_values() {
        let t = table(&["a", "missing"], &[("a", &["1"])]);
        assert_eq!(t.render(), "|a|missing|\n| --- | --- |\n|1| |\n");
    }

    #[test]
    fn test_unreferenced_values_ignored() {
        let t = table(&["a"], &[("a", &["1"]), ("extra", &["x", "y", "z"])]);
        assert_eq!(t.row_count(), 1);
        assert_eq!(t.render(), "|a|\n| --- |\n|1|\n");
    }

    #[test]
    fn test_render_header_only() {
        let t = table(&["a", "b"], &[]);
        assert_eq!(t.row_count(), 0);
        assert_eq!(t.render(), "|a|b|\n| --- | --- |\n");
    }

    #[test]
    fn test_render_no_columns() {
        let t = Table::default();
        assert_eq!(t.render(), "|\n|\n");
    }

    #[test]
    fn test_column_order_follows_names() {
        let t = table(&["b", "a"], &[("a", &["1"]), ("b", &["2"])]);
        assert_eq!(t.render(), "|b|a|\n| --- | --- |\n|2|1|\n");
    }
}
