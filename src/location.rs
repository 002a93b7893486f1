//! Path-string helpers shared by the summary model and the pruning pass.
//!
//! Everything here operates on plain strings with a caller-supplied separator character, so a
//! summary built on one platform can be pruned with another platform's conventions. No
//! filesystem access happens in this module.

/// Remove a single trailing separator from `path`, if there is one.
///
/// Only one separator is stripped: `"a//"` becomes `"a/"`. Interior separators, case and
/// `.`/`..` segments are left alone.
#[must_use]
pub fn strip_trailing_sep(path: &str, sep: char) -> &str {
    path.strip_suffix(sep).unwrap_or(path)
}

/// Whether `path` equals `parent` or lies beneath it, segment-wise.
///
/// Both sides have one trailing separator stripped first. The test is a literal prefix match
/// guarded at the segment boundary, so `"foo2"` is not inside `"foo"`.
#[must_use]
pub fn is_path_inside(path: &str, parent: &str, sep: char) -> bool {
    let path = strip_trailing_sep(path, sep);
    let parent = strip_trailing_sep(parent, sep);

    path.strip_prefix(parent)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(sep))
}

/// Whether a reference points outside the book (`https://...`, `mailto:...`, `//host/...`).
///
/// A scheme must be at least two characters long so that Windows drive letters (`C:`) are not
/// mistaken for one. `data:` URIs are inline content, not links, and count as internal.
#[must_use]
pub fn is_external(reference: &str) -> bool {
    if reference.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = reference.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid = starts_alpha
        && scheme.len() >= 2
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    valid && !scheme.eq_ignore_ascii_case("data")
}

/// Split `reference` at its last `#` into the pathname and the anchor.
#[must_use]
pub fn split_anchor(reference: &str) -> (&str, Option<&str>) {
    match reference.rsplit_once('#') {
        Some((pathname, anchor)) => (pathname, Some(anchor)),
        None => (reference, None),
    }
}

/// Flatten a pathname into a root-relative path joined with `sep`.
///
/// Both `/` and `sep` count as separators on input. Empty and `.` segments are dropped, and
/// `..` removes the segment before it (or nothing, at the root).
#[must_use]
pub fn flatten(pathname: &str, sep: char) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in pathname.split(['/', sep]) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join(&sep.to_string())
}

/// Derive the matching path for an article reference.
///
/// Returns `None` for empty or external references, and for references whose pathname
/// flattens to nothing (a bare `#anchor`, for instance).
#[must_use]
pub fn path_of_ref(reference: &str, sep: char) -> Option<String> {
    if reference.is_empty() || is_external(reference) {
        return None;
    }
    let (pathname, _) = split_anchor(reference);
    let flat = flatten(pathname, sep);
    (!flat.is_empty()).then_some(flat)
}

#[cfg(test)]
#[path = "tests/location.rs"]
mod tests;
