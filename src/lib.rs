pub mod cli;
pub mod fetch;
pub mod output;
pub mod scan;

pub use cli::{Args, RepoMode};
pub use fetch::{FetchError, GitHubClient};
pub use output::TreeRenderer;
pub use scan::{ManifestScanner, ScanError};
