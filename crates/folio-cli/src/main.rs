//! Command-line viewer for a GitHub user's repositories.
//!
//! ```text
//! folio-cli repos <owner>
//! folio-cli tree <owner> <repo> [--expand <path>]...
//! ```

mod http;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::github::DEFAULT_API_BASE;
use folio_core::{GitHubApi, Toggle, TreeMaterializer};
use log::warn;

use http::HttpProvider;
use render::{render_repos, render_rows};

#[derive(Parser)]
#[command(name = "folio-cli", version, about = "Browse GitHub repositories from the terminal")]
struct Cli {
    /// Base URL of the GitHub REST API
    #[arg(long, env = "FOLIO_GITHUB_API", default_value = DEFAULT_API_BASE, global = true)]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List an owner's public repositories, newest first
    Repos {
        /// GitHub user name
        owner: String,
    },
    /// Print a repository's content tree
    Tree {
        /// GitHub user name
        owner: String,
        /// Repository name
        repo: String,
        /// Directory to expand; repeat for nested paths, parents first
        #[arg(long = "expand", value_name = "PATH")]
        expand: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Repos { owner } => {
            let provider = HttpProvider::new(GitHubApi::with_base(&cli.api_base, &owner))
                .context("failed to create HTTP client")?;
            let repos = provider
                .list_repos()
                .await
                .with_context(|| format!("failed to list repositories of {owner}"))?;
            print!("{}", render_repos(&repos));
        }
        Commands::Tree {
            owner,
            repo,
            expand,
        } => {
            let provider = HttpProvider::new(GitHubApi::with_base(&cli.api_base, &owner))
                .context("failed to create HTTP client")?;

            let mut tree = TreeMaterializer::new();
            tree.load_root(&repo, &provider).await;

            for path in &expand {
                let path = path.trim_matches('/');
                if tree.toggle(path, &provider).await == Toggle::Ignored {
                    warn!("{path} is not a listed directory");
                }
            }

            print!("{}", render_rows(&tree.visible_rows()));
        }
    }

    Ok(())
}
