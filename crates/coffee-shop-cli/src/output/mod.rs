//! Terminal rendering for command results
//!
//! Human-readable output is made of [`status`] lines and [`Rows`] blocks.
//! With `--json` every command prints a single document via [`print_json`].

use crate::error::Result;
use console::{style, StyledObject};
use serde::Serialize;
use std::path::Path;

/// Print `data` as one pretty-printed JSON document on stdout
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Outcome marker for a one-line status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,
    Failed,
    Note,
}

impl Status {
    fn marker(self) -> StyledObject<&'static str> {
        match self {
            Status::Done => style("✓").green().bold(),
            Status::Failed => style("✗").red().bold(),
            Status::Note => style("ℹ").blue(),
        }
    }
}

/// Print a status line. Failures go to stderr so `--json` stdout stays clean.
pub fn status(kind: Status, message: &str) {
    match kind {
        Status::Failed => eprintln!("{} {}", kind.marker(), style(message).red()),
        _ => println!("{} {message}", kind.marker()),
    }
}

/// A block of key/value rows with the keys padded to a common width.
///
/// ```text
/// Auth0
///   issuer     https://tenant.us.auth0.com/
///   authorize  https://tenant.us.auth0.com/authorize
/// ```
#[derive(Debug, Default)]
pub struct Rows {
    title: Option<String>,
    rows: Vec<(String, String)>,
    dim_values: bool,
}

impl Rows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Render values dimmed, as used for URLs
    pub fn dim_values(mut self) -> Self {
        self.dim_values = true;
        self
    }

    pub fn row(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.push((key.into(), value.into()));
        self
    }

    pub fn rows<K, V>(mut self, rows: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.rows.extend(rows.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn render(&self) -> String {
        let width = self.rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let indent = if self.title.is_some() { "  " } else { "" };

        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&format!("{}\n", style(title).bold()));
        }
        for (key, value) in &self.rows {
            // Pad before styling: ANSI codes would otherwise count toward the width
            let key = style(format!("{key:<width$}")).bold();
            let value = if self.dim_values {
                style(value.as_str()).dim()
            } else {
                style(value.as_str())
            };
            out.push_str(&format!("{indent}{key}  {value}\n"));
        }
        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

/// Show `path` with the home directory abbreviated to `~`
pub fn display_path(path: &Path) -> String {
    let relative = std::env::var_os("HOME").and_then(|home| {
        path.strip_prefix(&home)
            .ok()
            .map(|rest| format!("~/{}", rest.display()))
    });
    relative.unwrap_or_else(|| path.display().to_string())
}
