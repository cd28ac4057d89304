//! Line-by-line dependency extraction from pyproject.toml text.
//!
//! This is deliberately not a TOML parser. The scanner walks the document
//! once, tracks the active section, and recognizes just the handful of
//! shapes a dependency declaration can take: a quoted scalar, a
//! single-line array, a multi-line array, or an inline table. Malformed
//! lines are skipped, never reported; a best-effort read is the point.

pub mod declaration;
pub mod identifier;
pub mod section;

pub use declaration::{LineClassifier, LineShape, ValueShape};
pub use section::{SectionEvent, SectionTracker};

use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("no dependencies found in manifest")]
    NoDependencies,
}

/// Where the scan currently is within the document.
#[derive(Debug)]
enum ScanState {
    /// Not inside a dependencies section.
    Outside,
    /// Inside a dependencies section, between declarations.
    InDependencySection,
    /// Inside an unclosed `key = [` array; fragments accumulate here.
    InMultilineArray { buffer: String },
}

/// Extracts declared dependency names from raw manifest text.
pub struct ManifestScanner {
    classifier: LineClassifier,
}

impl ManifestScanner {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// Scan a whole document and return the sorted, deduplicated package
    /// names it declares as dependencies.
    pub fn scan(&self, document: &str) -> Result<Vec<String>, ScanError> {
        let found = self.collect(document);
        if found.is_empty() {
            return Err(ScanError::NoDependencies);
        }
        Ok(found.into_iter().collect())
    }

    /// One pass over the document, folding identifiers into a set.
    fn collect(&self, document: &str) -> BTreeSet<String> {
        let mut tracker = SectionTracker::new();
        let mut state = ScanState::Outside;
        let mut found = BTreeSet::new();

        for line in document.lines() {
            if let Some(event) = tracker.observe(line) {
                // A new section discards any half-read array, silently.
                state = if event.is_dependencies {
                    ScanState::InDependencySection
                } else {
                    ScanState::Outside
                };
                continue;
            }

            state = match state {
                ScanState::Outside => ScanState::Outside,

                ScanState::InDependencySection => match self.classifier.classify(line) {
                    Some(LineShape::Assignment { key, value }) => {
                        self.collect_assignment(key, &value, &mut found);
                        ScanState::InDependencySection
                    }
                    Some(LineShape::ArrayOpen { fragment }) => {
                        self.collect_array_body(fragment, &mut found);
                        let mut buffer = fragment.to_string();
                        buffer.push('\n');
                        ScanState::InMultilineArray { buffer }
                    }
                    None => ScanState::InDependencySection,
                },

                ScanState::InMultilineArray { mut buffer } => match line.rfind(']') {
                    // The array closes only when nothing but whitespace
                    // follows the final bracket.
                    Some(idx) if line[idx + 1..].trim().is_empty() => {
                        buffer.push_str(&line[..idx]);
                        self.collect_array_body(&buffer, &mut found);
                        ScanState::InDependencySection
                    }
                    _ => {
                        buffer.push_str(line);
                        buffer.push('\n');
                        ScanState::InMultilineArray { buffer }
                    }
                },
            };
        }

        // An array still open here is incomplete and contributes nothing.
        found
    }

    fn collect_assignment(&self, key: &str, value: &ValueShape<'_>, found: &mut BTreeSet<String>) {
        match value {
            ValueShape::Array(body) => self.collect_array_body(body, found),
            // The value is a constraint or metadata table; the key is the
            // package name.
            ValueShape::Scalar | ValueShape::InlineTable => {
                found.insert(key.to_string());
            }
        }
    }

    fn collect_array_body(&self, body: &str, found: &mut BTreeSet<String>) {
        for token in self.classifier.quoted_tokens(body) {
            found.insert(identifier::extract(token).to_string());
        }
    }
}

impl Default for ManifestScanner {
    fn default() -> Self {
        Self::new()
    }
}
