//! The command line's work, minus argument parsing and stream handling.
//!
//! Summary JSON goes in, its paths are resolved from refs, each deleted path is pruned in turn,
//! and summary JSON comes out formatted as the config asks.

use crate::config::Config;
use crate::error::Result;
use crate::prune;
use crate::summary::Summary;
use tracing::{debug, info};

/// Prune `paths`, in order, from the summary JSON in `input` and return the resulting JSON.
///
/// Articles that only carry a `ref` get their path derived before pruning.
///
/// # Errors
///
/// Returns an error if the configured separator is not a single character, or if `input` is
/// not valid summary JSON.
pub fn run<S: AsRef<str>>(cfg: &Config, paths: &[S], input: &str) -> Result<String> {
    let sep = cfg.separator()?;

    let summary: Summary = serde_json::from_str(input)?;
    let summary = summary.resolve_paths(sep);
    let before = summary.article_count();
    debug!(articles = before, parts = summary.parts.len(), "loaded summary");

    let pruned = prune::delete_by_paths(&summary, paths, sep);
    let after = pruned.article_count();
    info!(
        removed = before - after,
        remaining = after,
        "pruned {} deleted path(s)",
        paths.len()
    );

    let json = if cfg.pretty {
        serde_json::to_string_pretty(&pruned)?
    } else {
        serde_json::to_string(&pruned)?
    };
    Ok(json)
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
