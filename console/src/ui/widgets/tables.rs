//! # Table Components
//!
//! Plain-text tables for list screens. Column widths are measured in `char`s
//! so rupee signs and Devanagari names line up.

use shared::truncate_text;

/// Configuration for table rendering
pub struct TableConfig {
    /// Cells longer than this are truncated with `...`
    pub max_cell_width: usize,
    /// Spaces between columns
    pub spacing: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_cell_width: 40,
            spacing: 2,
        }
    }
}

/// Text table with a header row and an underline
pub struct Table {
    config: TableConfig,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self::with_config(headers, TableConfig::default())
    }

    pub fn with_config(headers: &[&str], config: TableConfig) -> Self {
        Self {
            config,
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(|cell| truncate_text(&cell.into(), self.config.max_cell_width))
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&self.line(&self.headers, &widths));
        let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&self.line(&underline, &widths));
        for row in &self.rows {
            out.push_str(&self.line(row, &widths));
        }
        out
    }

    fn line(&self, cells: &[String], widths: &[usize]) -> String {
        let gap = " ".repeat(self.config.spacing);
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        format!("{}\n", padded.join(&gap).trim_end())
    }
}

/// Render an empty state message
pub fn render_empty_state(primary_text: &str, secondary_text: Option<&str>) -> String {
    match secondary_text {
        Some(secondary) => format!("{}\n{}\n", primary_text, secondary),
        None => format!("{}\n", primary_text),
    }
}

/// Render stats summary (e.g., "Total: 3 | Shown: 2")
pub fn render_stats_summary(stats: &[(&str, usize)]) -> String {
    let parts: Vec<String> = stats
        .iter()
        .map(|(label, count)| format!("{}: {}", label, count))
        .collect();
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_align_on_chars() {
        let mut table = Table::new(&["ID", "Name"]);
        table.row(["1", "Sarees"]).row(["22", "₹ Deals"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "--  -------");
        assert_eq!(lines[2], "1   Sarees");
        assert_eq!(lines[3], "22  ₹ Deals");
    }

    #[test]
    fn test_rows_are_normalized_to_header_count() {
        let mut table = Table::with_config(
            &["A", "B"],
            TableConfig {
                max_cell_width: 4,
                spacing: 1,
            },
        );
        table.row(["abcdefgh"]);
        table.row(["x", "y", "dropped"]);

        let rendered = table.render();
        assert!(rendered.contains("abcd..."));
        assert!(!rendered.contains("dropped"));
    }

    #[test]
    fn test_stats_summary() {
        assert_eq!(render_stats_summary(&[("Total", 3), ("Shown", 2)]), "Total: 3 | Shown: 2");
    }
}
