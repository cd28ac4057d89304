use regex::Regex;

/// Emitted when a line turns out to be a section header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEvent {
    /// The bracketed header text, trimmed (e.g. `tool.poetry.dependencies`).
    pub path: String,
    /// Whether the path marks a dependencies section.
    pub is_dependencies: bool,
}

/// Tracks which manifest section the scan is currently inside.
///
/// A section is considered a dependencies section when its path contains
/// the substring "dependencies", case-insensitively. That also matches
/// unrelated paths that merely contain the substring; the looseness is
/// intentional for a best-effort tool.
pub struct SectionTracker {
    header: Regex,
    path: String,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            // The entire raw line must be the bracketed header; an indented
            // or trailing-annotated header does not count.
            header: Regex::new(r"^\[(.+)\]$").expect("static regex must compile"),
            path: String::new(),
        }
    }

    /// Observe one line. Returns an event if the line is a section header,
    /// updating the tracked path; any other line leaves the path untouched.
    pub fn observe(&mut self, line: &str) -> Option<SectionEvent> {
        let caps = self.header.captures(line)?;
        self.path = caps.get(1)?.as_str().trim().to_string();
        Some(SectionEvent {
            path: self.path.clone(),
            is_dependencies: self.path.to_lowercase().contains("dependencies"),
        })
    }

    /// The most recently seen section path, empty before the first header.
    pub fn current_path(&self) -> &str {
        &self.path
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_section_header() {
        let mut tracker = SectionTracker::new();
        let event = tracker.observe("[project]").unwrap();
        assert_eq!(event.path, "project");
        assert!(!event.is_dependencies);
        assert_eq!(tracker.current_path(), "project");
    }

    #[test]
    fn test_dependencies_section_detected() {
        let mut tracker = SectionTracker::new();
        let event = tracker.observe("[project.dependencies]").unwrap();
        assert!(event.is_dependencies);

        let event = tracker.observe("[tool.poetry.dependencies]").unwrap();
        assert!(event.is_dependencies);
    }

    #[test]
    fn test_dependencies_match_is_case_insensitive() {
        let mut tracker = SectionTracker::new();
        let event = tracker.observe("[Tool.Poetry.DEPENDENCIES]").unwrap();
        assert!(event.is_dependencies);
    }

    #[test]
    fn test_substring_match_is_permissive() {
        // Coarse by design: any path containing the substring qualifies.
        let mut tracker = SectionTracker::new();
        let event = tracker.observe("[tool.mydependencies-extra]").unwrap();
        assert!(event.is_dependencies);
    }

    #[test]
    fn test_non_header_lines_keep_previous_path() {
        let mut tracker = SectionTracker::new();
        assert!(tracker.observe("[project.dependencies]").is_some());

        assert!(tracker.observe("requests = \">=2.0\"").is_none());
        assert!(tracker.observe("").is_none());
        assert_eq!(tracker.current_path(), "project.dependencies");
    }

    #[test]
    fn test_indented_header_is_not_a_header() {
        let mut tracker = SectionTracker::new();
        assert!(tracker.observe("  [project.dependencies]").is_none());
        assert!(tracker.observe("[project.dependencies] # note").is_none());
    }

    #[test]
    fn test_header_path_is_trimmed() {
        let mut tracker = SectionTracker::new();
        let event = tracker.observe("[ project.dependencies ]").unwrap();
        assert_eq!(event.path, "project.dependencies");
        assert!(event.is_dependencies);
    }
}
