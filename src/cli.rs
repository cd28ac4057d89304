use clap::{Parser, ValueEnum};

/// Where the manifest is read from.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoMode {
    /// Fetch pyproject.toml from a GitHub repository.
    Remote,
    /// Read pyproject.toml from the local filesystem.
    Local,
}

/// Visualize the dependency graph of a Python package
#[derive(Parser, Debug, Clone)]
#[command(name = "depviz")]
#[command(author, version, long_about = None)]
pub struct Args {
    /// Name of the analyzed package
    #[arg(long)]
    pub package: String,

    /// Repository URL (remote mode) or path to the manifest (local mode)
    #[arg(long)]
    pub repo_url: String,

    /// Where to read the repository from
    #[arg(long, value_enum)]
    pub repo_mode: RepoMode,

    /// Branch, tag or commit to read the manifest at
    #[arg(long, default_value = "latest")]
    pub version_ref: String,

    /// Render the dependencies as an ASCII tree instead of a flat list
    #[arg(long)]
    pub ascii_tree: bool,

    /// Only show packages whose name contains this substring
    #[arg(long)]
    pub filter: Option<String>,
}

impl Args {
    /// The git ref to fetch; "latest" means the repository's main branch.
    pub fn git_ref(&self) -> &str {
        if self.version_ref == "latest" {
            "main"
        } else {
            &self.version_ref
        }
    }
}
