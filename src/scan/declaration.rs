use regex::Regex;

/// The value literal on the right-hand side of a recognized declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueShape<'a> {
    /// `key = ["a", "b"]` — the text between the brackets.
    Array(&'a str),
    /// `key = "1.2.3"` or `key = '>=1.0'` — the value is a version
    /// constraint, so the key names the package.
    Scalar,
    /// `key = { version = "^1.0", optional = true }` — the key names the
    /// package regardless of what the table holds.
    InlineTable,
}

/// How one line relates to a dependency declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineShape<'a> {
    /// A complete `key = value` declaration on a single line.
    Assignment { key: &'a str, value: ValueShape<'a> },
    /// `key = [` with no closing bracket on the same line; `fragment` is
    /// whatever followed the opening bracket.
    ArrayOpen { fragment: &'a str },
}

/// Classifies lines inside a dependencies section.
pub struct LineClassifier {
    assignment: Regex,
    array_open: Regex,
    quoted: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            // Both delimiters of the value literal must sit on this line.
            assignment: Regex::new(r#"^\s*([^\s=]+)\s*=\s*(\[.*\]|".*"|'.*'|\{.*\})\s*$"#)
                .expect("static regex must compile"),
            array_open: Regex::new(r"^\s*([^\s=]+)\s*=\s*\[\s*(.*)$")
                .expect("static regex must compile"),
            quoted: Regex::new(r#""([^"]*)"|'([^']*)'"#).expect("static regex must compile"),
        }
    }

    /// Decide whether a line begins a declaration, and in which shape.
    /// Lines matching neither form (blank lines, comments, bare keys,
    /// continuation fragments) return `None`.
    pub fn classify<'a>(&self, line: &'a str) -> Option<LineShape<'a>> {
        if let Some(caps) = self.assignment.captures(line) {
            let key = caps.get(1)?.as_str();
            let literal = caps.get(2)?.as_str();
            let value = if literal.starts_with('[') {
                ValueShape::Array(&literal[1..literal.len() - 1])
            } else if literal.starts_with('{') {
                ValueShape::InlineTable
            } else {
                ValueShape::Scalar
            };
            return Some(LineShape::Assignment { key, value });
        }

        if let Some(caps) = self.array_open.captures(line) {
            return Some(LineShape::ArrayOpen {
                fragment: caps.get(2)?.as_str(),
            });
        }

        None
    }

    /// All quoted tokens in an array body, double- or single-quoted, in
    /// order of appearance.
    pub fn quoted_tokens<'a>(&self, body: &'a str) -> Vec<&'a str> {
        self.quoted
            .captures_iter(body)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
            .collect()
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
