//! Small line-oriented builders for the markdown this crate emits.

/// A pipe table with left-aligned columns.
///
/// The alignment row is `:` followed by one more dash than the header text,
/// e.g. `| ID | Title |` over `|:---|:------|`.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.rows.len() + 2);
        out.push(pipe_row(&self.headers));
        let sep: Vec<String> = self
            .headers
            .iter()
            .map(|h| format!(":{}", "-".repeat(h.chars().count() + 1)))
            .collect();
        out.push(format!("|{}|", sep.join("|")));
        for row in &self.rows {
            out.push(pipe_row(row));
        }
        out
    }
}

fn pipe_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Accumulates lines and joins them with `\n` (no trailing newline is added).
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn table(&mut self, table: &Table) -> &mut Self {
        self.lines.extend(table.lines());
        self
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Number of lines in rendered text, counting a trailing empty segment.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// The first `max` characters of `text` followed by a literal `...`.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

/// Heading anchor: lowercase, with `from` replaced by `-`.
pub fn anchor(heading: &str, from: char) -> String {
    heading.to_lowercase().replace(from, "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_layout() {
        let mut t = Table::new(&["ID", "Title", "Areas"]);
        t.push_row(vec!["SEC01-BP01".into(), "Separate".into(), "A, B".into()]);
        assert_eq!(
            t.lines(),
            vec![
                "| ID | Title | Areas |",
                "|:---|:------|:------|",
                "| SEC01-BP01 | Separate | A, B |",
            ]
        );
    }

    #[test]
    fn separator_widths_track_headers() {
        let t = Table::new(&["Code", "Capability", "Anti-Patterns", "Metrics"]);
        assert_eq!(t.lines()[1], "|:-----|:-----------|:--------------|:--------|");
    }

    #[test]
    fn document_joins_without_trailing_newline() {
        let mut d = Document::new();
        d.line("# Title").blank();
        assert_eq!(d.render(), "# Title\n");
        assert_eq!(line_count(&d.render()), 2);
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate_with_ellipsis("abcdef", 3), "abc...");
        assert_eq!(truncate_with_ellipsis("ab", 3), "ab...");
        assert_eq!(truncate_with_ellipsis("M&A é ok", 5), "M&A é...");
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor("PERFORMANCE_EFFICIENCY", '_'), "performance-efficiency");
        assert_eq!(anchor("Continuous Integration", ' '), "continuous-integration");
    }
}
