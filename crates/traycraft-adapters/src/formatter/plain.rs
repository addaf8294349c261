use traycraft_core::{application::ports::SourceFormatter, error::TraycraftResult};

/// Whitespace normalization only; no external tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Dedent, strip trailing whitespace, trim surrounding blank lines,
    /// end with exactly one newline.
    pub fn normalize(source: &str) -> String {
        let indent = source
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(ascii_indent)
            .min()
            .unwrap_or(0);

        // Every non-blank line starts with at least `indent` ASCII bytes,
        // so the cut lands on a char boundary.
        let lines: Vec<&str> = source
            .lines()
            .map(|l| l.get(indent..).unwrap_or("").trim_end())
            .collect();

        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);

        let mut out = lines[start..end].join("\n");
        out.push('\n');
        out
    }

    /// [`Self::normalize`] plus collapsing runs of blank lines to one.
    pub fn normalize_markdown(source: &str) -> String {
        let normalized = Self::normalize(source);
        let mut out = String::with_capacity(normalized.len());
        let mut previous_blank = false;
        for line in normalized.lines() {
            let blank = line.is_empty();
            if blank && previous_blank {
                continue;
            }
            out.push_str(line);
            out.push('\n');
            previous_blank = blank;
        }
        out
    }
}

/// Leading spaces and tabs, in bytes.
fn ascii_indent(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}

impl SourceFormatter for PlainFormatter {
    fn format_rust(&self, source: &str) -> TraycraftResult<String> {
        Ok(Self::normalize(source))
    }

    fn format_markdown(&self, source: &str) -> TraycraftResult<String> {
        Ok(Self::normalize_markdown(source))
    }
}
