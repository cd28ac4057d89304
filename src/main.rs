use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use depviz::cli::{Args, RepoMode};
use depviz::fetch::GitHubClient;
use depviz::output::TreeRenderer;
use depviz::scan::ManifestScanner;
use std::fs;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Obtain the raw manifest text. Failures stop here; the scanner is
    // never handed an absent document.
    let manifest = match args.repo_mode {
        RepoMode::Remote => GitHubClient::new()
            .fetch_manifest(&args.repo_url, args.git_ref())
            .await
            .context("failed to retrieve pyproject.toml")?,
        RepoMode::Local => load_local_manifest(&args.repo_url)?,
    };

    // 2. Extract the declared dependency names.
    let scanner = ManifestScanner::new();
    let mut dependencies = scanner.scan(&manifest)?;

    // 3. Apply the optional substring filter.
    if let Some(filter) = &args.filter {
        dependencies.retain(|name| name.contains(filter.as_str()));
        if dependencies.is_empty() {
            println!(
                "{}",
                format!("No dependencies match filter '{filter}'").dimmed()
            );
            return Ok(());
        }
    }

    // 4. Render.
    if args.ascii_tree {
        TreeRenderer::new().render(&args.package, &dependencies);
    } else {
        for name in &dependencies {
            println!("{name}");
        }
    }

    Ok(())
}

/// Read the manifest from disk; a directory path means its pyproject.toml.
fn load_local_manifest(raw_path: &str) -> Result<String> {
    let mut path = PathBuf::from(raw_path);
    if path.is_dir() {
        path = path.join("pyproject.toml");
    }
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read manifest: {}", path.display()))
}
