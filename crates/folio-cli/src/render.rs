//! Plain-text rendering of repositories and tree rows.

use std::fmt::Write;

use folio_core::{Repo, TreeRow};

/// Indentation per nesting level.
const INDENT: &str = "  ";

/// One line per visible row, directories suffixed with `/`.
pub fn render_rows(rows: &[TreeRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let suffix = if row.entry.is_dir() { "/" } else { "" };
        let _ = writeln!(out, "{}{}{}", INDENT.repeat(row.depth), row.entry.name, suffix);
    }
    out
}

/// One line per repository: name, language, description.
pub fn render_repos(repos: &[Repo]) -> String {
    let name_width = repos.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let lang_width = repos
        .iter()
        .map(|r| r.language.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for repo in repos {
        let language = repo.language.as_deref().unwrap_or("-");
        let description = repo.description.as_deref().unwrap_or("");
        let line = format!(
            "{:name_width$}  {:lang_width$}  {}",
            repo.name, language, description
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}
