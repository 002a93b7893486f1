//! Table-of-contents model: a summary is a list of parts, each holding a tree of articles.
//!
//! These are plain values. Operations over them (see [`crate::prune`]) build new trees rather
//! than editing in place, so a summary can be shared freely between callers. The serde field
//! names follow the summary JSON shape used by the command line (`ref` for an article's link).

use crate::location;
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Top-level table of contents, composed of ordered parts.
pub struct Summary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Source document this summary was read from, if known.
    pub file: Option<String>,
    #[serde(default)]
    /// Top-level groupings in display order.
    pub parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// A titled grouping of articles within a summary.
pub struct Part {
    #[serde(default)]
    /// Heading shown above the part; may be empty for the implicit first part.
    pub title: String,
    #[serde(default)]
    /// Root articles of this part.
    pub articles: Vec<Article>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// A navigable entry in the table of contents.
pub struct Article {
    #[serde(default)]
    /// Display title.
    pub title: String,
    #[serde(default)]
    /// Dotted position in the tree, such as `1.2.3`.
    pub level: String,
    #[serde(default, rename = "ref")]
    /// Link target; empty when the article is a heading only.
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Normalized path of the linked file, used for matching deleted paths.
    pub path: Option<String>,
    #[serde(default)]
    /// Nested child articles.
    pub articles: Vec<Article>,
}

impl Summary {
    #[must_use]
    /// Build a summary from its parts.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { file: None, parts }
    }

    #[must_use]
    /// Total number of articles across all parts, at every depth.
    pub fn article_count(&self) -> usize {
        self.parts
            .iter()
            .map(|part| count_articles(&part.articles))
            .sum()
    }

    #[must_use]
    /// Fill in every missing article path from the article's reference.
    ///
    /// Paths that are already present are kept as they are.
    pub fn resolve_paths(mut self, sep: char) -> Self {
        for part in &mut self.parts {
            resolve_article_paths(&mut part.articles, sep);
        }
        self
    }
}

impl Part {
    #[must_use]
    /// Build a part from a title and its root articles.
    pub fn new(title: impl Into<String>, articles: Vec<Article>) -> Self {
        Self {
            title: title.into(),
            articles,
        }
    }
}

impl Article {
    #[must_use]
    /// Build a childless article whose path is derived from `reference`.
    pub fn from_ref(title: impl Into<String>, reference: impl Into<String>, sep: char) -> Self {
        let reference = reference.into();
        Self {
            title: title.into(),
            path: location::path_of_ref(&reference, sep),
            reference,
            ..Self::default()
        }
    }

    #[must_use]
    /// Replace the children of this article.
    pub fn with_articles(mut self, articles: Vec<Article>) -> Self {
        self.articles = articles;
        self
    }

    #[must_use]
    /// Whether the article links anywhere at all.
    pub fn has_reference(&self) -> bool {
        !self.reference.is_empty()
    }

    #[must_use]
    /// Whether the article links outside the book.
    pub fn is_external(&self) -> bool {
        location::is_external(&self.reference)
    }
}

fn count_articles(articles: &[Article]) -> usize {
    articles
        .iter()
        .map(|article| 1 + count_articles(&article.articles))
        .sum()
}

fn resolve_article_paths(articles: &mut [Article], sep: char) {
    for article in articles {
        if article.path.is_none() && article.has_reference() {
            if article.is_external() {
                trace!(
                    title = %article.title,
                    reference = %article.reference,
                    "external link has no path"
                );
            } else {
                article.path = location::path_of_ref(&article.reference, sep);
            }
        }
        resolve_article_paths(&mut article.articles, sep);
    }
}

#[cfg(test)]
#[path = "tests/summary.rs"]
mod tests;
