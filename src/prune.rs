//! Remove table-of-contents entries that point at a deleted file or directory.
//!
//! Pruning is evaluated bottom-up. Each article's children are pruned first, then the article
//! itself is judged against the deleted path:
//!
//! - a matching article with no surviving children is dropped from its list;
//! - a matching article that still has children is kept as a heading, with its `ref` cleared;
//! - anything else is left as it was.
//!
//! An article matches when its path is the deleted path or lies beneath it (see
//! [`is_inside`]). Parts are never removed, only their article trees.

use crate::location;
use crate::summary::{Article, Part, Summary};
use std::path::MAIN_SEPARATOR;
use tracing::trace;

#[must_use]
/// Delete every article under `path`, using the host platform's path separator.
pub fn delete_by_path(summary: &Summary, path: &str) -> Summary {
    delete_by_path_with_separator(summary, path, MAIN_SEPARATOR)
}

#[must_use]
/// Delete every article under `path`, where paths are separated by `sep`.
///
/// Articles that still have surviving children are unlinked rather than removed. The input
/// summary is left untouched.
pub fn delete_by_path_with_separator(summary: &Summary, path: &str, sep: char) -> Summary {
    let parts = summary
        .parts
        .iter()
        .map(|part| Part {
            title: part.title.clone(),
            articles: delete_articles_by_path(&part.articles, path, sep),
        })
        .collect();

    Summary {
        file: summary.file.clone(),
        parts,
    }
}

#[must_use]
/// Apply several deletions in order, as if by repeated [`delete_by_path_with_separator`].
pub fn delete_by_paths<S: AsRef<str>>(summary: &Summary, paths: &[S], sep: char) -> Summary {
    paths.iter().fold(summary.clone(), |pruned, path| {
        delete_by_path_with_separator(&pruned, path.as_ref(), sep)
    })
}

#[must_use]
/// Prune a list of sibling articles against `path`.
///
/// The result keeps the original order and is never longer than the input.
pub fn delete_articles_by_path(articles: &[Article], path: &str, sep: char) -> Vec<Article> {
    articles
        .iter()
        .filter_map(|article| {
            let children = delete_articles_by_path(&article.articles, path, sep);
            let inside = is_inside(article, path, sep);

            if inside && children.is_empty() {
                trace!(title = %article.title, path = ?article.path, "removing article");
                return None;
            }

            let reference = if inside {
                trace!(title = %article.title, reference = %article.reference, "unlinking article");
                String::new()
            } else {
                article.reference.clone()
            };

            Some(Article {
                title: article.title.clone(),
                level: article.level.clone(),
                reference,
                path: article.path.clone(),
                articles: children,
            })
        })
        .collect()
}

#[must_use]
/// Whether the article's path equals `potential_parent` or lies beneath it.
///
/// An article without a path is treated as having the empty path. One trailing separator on
/// either side is ignored.
pub fn is_inside(article: &Article, potential_parent: &str, sep: char) -> bool {
    let path = article.path.as_deref().unwrap_or("");
    location::is_path_inside(path, potential_parent, sep)
}

#[cfg(test)]
#[path = "tests/prune.rs"]
mod tests;
