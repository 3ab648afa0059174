// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{dim, header};

/// Widest a column may get before its cells are truncated with `…`.
pub const MAX_COLUMN_WIDTH: usize = 32;

const COLUMN_GAP: &str = "  ";

/// A plain text table. Cells must already be sanitized. Widths are measured in terminal
/// columns, so accented names and emoji line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: vec![],
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) { self.rows.push(row); }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, heading)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.width())
                    .chain(std::iter::once(heading.width()))
                    .max()
                    .unwrap_or_default()
                    .min(MAX_COLUMN_WIDTH)
            })
            .collect()
    }

    /// Header line, a rule, then one line per row. No trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        let heading = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(text, width)| header(pad(text, *width)))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        lines.push(heading);

        let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
        lines.push(dim("─".repeat(rule_width)));

        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| pad(row.get(index).map_or("", String::as_str), *width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            lines.push(line.trim_end().to_owned());
        }

        lines.join("\n")
    }
}

/// Truncates to `width` columns (ending in `…` when cut), then pads with spaces.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }
    let budget = width.saturating_sub(1);
    let mut used = 0;
    let mut acc = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        used += ch_width;
        acc.push(ch);
    }
    if width > 0 {
        acc.push('…');
    }
    acc
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::strip_styles;

    #[test_case("abc", 5, "abc  ")]
    #[test_case("João", 5, "João ")]
    #[test_case("abcdef", 4, "abc…")]
    #[test_case("", 2, "  ")]
    fn test_pad(text: &str, width: usize, expected: &str) {
        assert_eq!(pad(text, width), expected);
    }

    #[test]
    fn test_render_aligns_columns() {
        let mut it = Table::new(&["ID", "Nome"]);
        it.push_row(vec!["1".into(), "Ana".into()]);
        it.push_row(vec!["10".into(), "Álvaro Souza".into()]);

        let rendered = strip_styles(&it.render());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID  Nome        ");
        assert_eq!(lines[1], "─".repeat(16));
        assert_eq!(lines[2], "1   Ana");
        assert_eq!(lines[3], "10  Álvaro Souza");
    }
}
