use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create a temporary project directory
pub struct TempProject {
    pub dir: TempDir,
}

impl TempProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file in the project with the given content
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}

/// A pyproject.toml with PEP 621 scalar, single-line and multi-line forms
pub fn sample_pyproject_pep621() -> &'static str {
    r#"[project]
name = "demo"
version = "0.1.0"

[project.dependencies]
requests = ">=2.0"
deps = ["flask>=2.0", "click"]

[project.optional-dependencies]
dev = [
    "pytest>=7.0.0",
    "black>=22.0.0",
]
"#
}

/// A Poetry-style pyproject.toml with scalar and inline-table declarations
pub fn sample_pyproject_poetry() -> &'static str {
    r#"[tool.poetry]
name = "demo"

[tool.poetry.dependencies]
requests = "^2.28.0"
numpy = "1.24.0"
psycopg2 = { version = ">=2.9", optional = true }
"#
}

/// A pyproject.toml that declares no dependencies at all
pub fn sample_pyproject_empty() -> &'static str {
    r#"[project]
name = "demo"
version = "0.1.0"

[build-system]
requires-python = ">=3.10"
"#
}
