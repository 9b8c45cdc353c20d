//! Terminal output for the CLI.
//!
//! Human output goes to stdout, diagnostics to stderr. In JSON mode only
//! [`Output::json`] and errors print anything.

use console::{measure_text_width, pad_str, style, Alignment, StyledObject};
use serde::Serialize;

/// Widest a table column may grow before its cells are truncated.
const MAX_COLUMN: usize = 40;

#[derive(Clone, Copy)]
enum Notice {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Notice {
    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Notice::Info => style("ℹ").blue(),
            Notice::Success => style("✓").green(),
            Notice::Warn => style("⚠").yellow(),
            Notice::Error => style("✗").red(),
            Notice::Debug => style("→").dim(),
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Notice::Warn | Notice::Error | Notice::Debug)
    }
}

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    fn notice(&self, kind: Notice, msg: &str) {
        if self.json {
            return;
        }
        let text = match kind {
            Notice::Error => style(msg).red().to_string(),
            Notice::Debug => style(msg).dim().to_string(),
            _ => msg.to_string(),
        };
        if kind.to_stderr() {
            eprintln!("{} {}", kind.marker(), text);
        } else {
            println!("{} {}", kind.marker(), text);
        }
    }

    pub fn info(&self, msg: &str) {
        self.notice(Notice::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        self.notice(Notice::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        self.notice(Notice::Warn, msg);
    }

    /// Errors print in JSON mode too, as `{"error": ..}` on stderr.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            self.notice(Notice::Error, msg);
        }
    }

    /// Only printed with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.notice(Notice::Debug, msg);
        }
    }

    /// Section title.
    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn list_item(&self, item: &str) {
        if !self.json {
            println!("  {} {}", style("•").dim(), item);
        }
    }

    /// Print rows under a dimmed header, sizing each column to its widest
    /// cell.
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if self.json {
            return;
        }
        let widths = column_widths(headers, rows);
        let head: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        println!("  {}", style(format_row(&head, &widths)).dim());
        for row in rows {
            println!("  {}", format_row(row, &widths));
        }
    }

    /// Pretty-printed JSON on stdout.
    pub fn json<T: Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| measure_text_width(cell))
                .fold(measure_text_width(header), usize::max)
                .min(MAX_COLUMN)
        })
        .collect()
}

/// Pad or cut each cell to its column's display width.
fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad_str(cell, width, Alignment::Left, Some("…")).into_owned())
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_widths() {
        let rows = vec![
            vec!["1".to_string(), "Red Shirt".to_string()],
            vec!["22".to_string(), "x".repeat(60)],
        ];
        assert_eq!(column_widths(&["ID", "TITLE"], &rows), vec![2, MAX_COLUMN]);
    }

    #[test]
    fn test_column_widths_use_display_width() {
        let rows = vec![vec!["茶碗".to_string()]];
        assert_eq!(column_widths(&["ID"], &rows), vec![4]);
    }

    #[test]
    fn test_format_row() {
        let cells = vec!["1".to_string(), "Mug".to_string()];
        assert_eq!(format_row(&cells, &[3, 5]), "1    Mug");

        let long = vec!["Fjallraven Foldsack Backpack".to_string()];
        assert_eq!(format_row(&long, &[10]), "Fjallrave…");

        let wide = vec!["茶碗".to_string(), "x".to_string()];
        assert_eq!(format_row(&wide, &[5, 1]), "茶碗   x");
    }
}
