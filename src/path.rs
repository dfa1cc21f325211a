//! Path-component surgery: basename and extension extraction and rewriting.

/// Final path segment, ignoring trailing slashes. A root or empty path has
/// no basename; the result is never the literal `/`.
pub(crate) fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed
        .rfind('/')
        .map_or(trimmed, |index| &trimmed[index + 1..])
}

/// Suffix of `basename` from its last `.`, or `""` when there is none.
/// A leading dot alone does not count as an extension.
pub(crate) fn extname(basename: &str) -> &str {
    basename
        .rfind('.')
        .filter(|&index| index > 0)
        .map_or("", |index| &basename[index..])
}

/// Removes one trailing `.git`, tolerating a final slash, so both
/// `a/b.git` and `a/b.git/` become `a/b`. Anything else is unchanged.
pub(crate) fn strip_git_suffix(path: &str) -> &str {
    let stem = path.strip_suffix('/').unwrap_or(path);
    stem.strip_suffix(".git").unwrap_or(path)
}

/// Replaces the last occurrence of `needle` in `haystack`. Searching from
/// the end keeps earlier copies of a repeated segment untouched, so
/// `/gitable/gitable` only ever mutates its trailing segment.
pub(crate) fn replace_last(haystack: &str, needle: &str, replacement: &str) -> String {
    let Some(index) = haystack.rfind(needle) else {
        return haystack.to_string();
    };
    let mut out = String::with_capacity(haystack.len() - needle.len() + replacement.len());
    out.push_str(&haystack[..index]);
    out.push_str(replacement);
    out.push_str(&haystack[index + needle.len()..]);
    out
}
