//! Best-effort upgrade of human-typed strings into git repository URIs.
//!
//! The typical input is a URL copied from a browser address bar: scheme
//! slashes mangled by a shell, no scheme at all, or a provider's web URL
//! that needs `.git` appended before it will clone. Each repair is
//! conservative; input that already parses as a repository URI passes
//! through untouched.

use crate::builder::GitUriBuilder;
use crate::error::InvalidUriError;
use crate::providers::{DEFAULT_WEB_SCHEME, GIT_EXTENSION_HOSTS};
use crate::uri::GitUri;

/// Schemes whose separator slashes get repaired before parsing.
const REPAIRABLE_SCHEMES: &[&str] = &["https", "http", "file", "git", "ssh"];

pub(crate) fn heuristic_parse(input: &str) -> Result<GitUri, InvalidUriError> {
    let cleaned = repair_separators(input);
    let mut uri = upgrade(&cleaned)?;
    if GIT_EXTENSION_HOSTS.iter().any(|host| uri.matches_host(host)) {
        uri.set_git_extension()?;
    }
    Ok(uri)
}

fn upgrade(input: &str) -> Result<GitUri, InvalidUriError> {
    let uri = GitUri::parse(input)?;

    // "host.xz:8080/path?b" decomposes with the hostname in scheme
    // position; a dotted scheme is a hostname in disguise.
    if uri
        .scheme()
        .is_some_and(|scheme| scheme.split_once('.').is_some_and(|(a, b)| !a.is_empty() && !b.is_empty()))
    {
        return GitUri::parse(&format!("{DEFAULT_WEB_SCHEME}://{input}"));
    }

    // "github.com/org/repo": promote a dotted first path segment to the
    // host. Only for values with no host at all, which keeps scp URIs
    // (host present, path relative) out of reach.
    if uri.host().is_none() {
        if let Some(host) = dotted_first_segment(uri.path()) {
            let remainder = uri.path()[host.len()..].to_string();
            let mut builder = GitUriBuilder::new()
                .scheme(uri.scheme().unwrap_or(DEFAULT_WEB_SCHEME))
                .host(host)
                .path(remainder);
            if let Some(user) = uri.user() {
                builder = builder.user(user);
            }
            if let Some(query) = uri.query() {
                builder = builder.query(query);
            }
            if let Some(fragment) = uri.fragment() {
                builder = builder.fragment(fragment);
            }
            return builder.build();
        }
    }

    Ok(uri)
}

/// The first path segment when it contains an interior or trailing dot,
/// which is what a bare hostname looks like. A leading dot does not count.
fn dotted_first_segment(path: &str) -> Option<&str> {
    let segment = path.split('/').next()?;
    if segment.is_empty() {
        return None;
    }
    match segment.find('.') {
        Some(index) if index > 0 => Some(segment),
        _ => None,
    }
}

/// Collapses mangled scheme separators (`http:/x`, `file:////x`) back to
/// `scheme://`, and a leading run of slashes back to `//`. Anything else
/// passes through unchanged.
fn repair_separators(input: &str) -> String {
    for scheme in REPAIRABLE_SCHEMES {
        let len = scheme.len();
        if input.len() > len + 1
            && input[..len].eq_ignore_ascii_case(scheme)
            && input.as_bytes()[len] == b':'
            && input.as_bytes().get(len + 1) == Some(&b'/')
        {
            let rest = input[len + 1..].trim_start_matches('/');
            // A file URI keeps its empty authority: any run of slashes
            // means "file:///path", never a host named after the path.
            let separator = if scheme.eq_ignore_ascii_case("file") {
                ":///"
            } else {
                "://"
            };
            return format!("{}{separator}{rest}", &input[..len]);
        }
    }
    if let Some(rest) = input.strip_prefix("//") {
        return format!("//{}", rest.trim_start_matches('/'));
    }
    input.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_valid_uris_pass_through_unchanged() {
        let inputs = [
            "http://host.xz/path/to/repo.git/",
            "http://host.xz/path/to/repo.git",
            "ssh://user@host.xz/path/to/repo.git/",
            "ssh://user@host.xz:1234/path/to/repo.git/",
            "user@host.xz:path/to/repo.git",
            "user@host.xz:path/to/repo.git/",
            "git@github.com:martinemde/gitable.git",
        ];
        for input in inputs {
            let uri = heuristic_parse(input).unwrap();
            assert_eq!(uri.to_string(), input, "heuristic broke {input}");
        }
    }

    #[test]
    fn provider_web_urls_gain_the_git_extension() {
        let uri = heuristic_parse("https://github.com/martinemde/gitable").unwrap();
        assert_eq!(uri.to_string(), "https://github.com/martinemde/gitable.git");

        let uri = heuristic_parse("https://gitlab.com/group/project").unwrap();
        assert_eq!(uri.to_string(), "https://gitlab.com/group/project.git");

        let uri = heuristic_parse("https://bitbucket.org/team/repo").unwrap();
        assert_eq!(uri.to_string(), "https://bitbucket.org/team/repo.git");
    }

    #[test]
    fn an_existing_scheme_is_preserved() {
        let uri = heuristic_parse("http://github.com/martinemde/gitable").unwrap();
        assert_eq!(uri.to_string(), "http://github.com/martinemde/gitable.git");
    }

    #[test]
    fn a_trailing_slash_survives_the_extension() {
        let uri = heuristic_parse("https://github.com/martinemde/gitable/").unwrap();
        assert_eq!(uri.to_string(), "https://github.com/martinemde/gitable.git/");
    }

    #[test]
    fn schemeless_host_strings_are_promoted() {
        let uri = heuristic_parse("github.com/martinemde/gitable").unwrap();
        assert_eq!(uri.to_string(), "https://github.com/martinemde/gitable.git");

        let uri = heuristic_parse("host.xz/path/to/repo.git").unwrap();
        assert_eq!(uri.to_string(), "https://host.xz/path/to/repo.git");
    }

    #[test]
    fn dotted_scheme_is_treated_as_a_hostname() {
        let uri = heuristic_parse("host.xz:8080/path/repo.git?branch=x").unwrap();
        assert_eq!(uri.scheme(), Some("https"));
        assert_eq!(uri.host(), Some("host.xz"));
        assert_eq!(uri.port(), Some(8080));
    }

    #[test]
    fn mangled_scheme_separators_are_repaired() {
        let uri = heuristic_parse("http:/host.xz/repo.git").unwrap();
        assert_eq!(uri.to_string(), "http://host.xz/repo.git");

        let uri = heuristic_parse("file:////path/to/repo.git").unwrap();
        assert_eq!(uri.to_string(), "file:///path/to/repo.git");
    }

    #[test]
    fn local_paths_are_left_alone() {
        let uri = heuristic_parse("/path/to/repo.git/").unwrap();
        assert_eq!(uri.to_string(), "/path/to/repo.git/");
    }

    #[test]
    fn scp_uris_with_dotted_path_segments_are_not_corrupted() {
        let uri = heuristic_parse("host.xz:foo.bar/baz").unwrap();
        assert_eq!(uri.to_string(), "host.xz:foo.bar/baz");
        assert!(uri.is_scp());
    }

    #[test]
    fn forcing_the_extension_is_idempotent() {
        let once = heuristic_parse("https://github.com/martinemde/gitable").unwrap();
        let twice = heuristic_parse(&once.to_string()).unwrap();
        assert_eq!(once.to_string(), twice.to_string());
    }

    #[test]
    fn dotted_first_segment_requires_a_leading_name() {
        assert_eq!(dotted_first_segment("github.com/x"), Some("github.com"));
        assert_eq!(dotted_first_segment("plain/x"), None);
        assert_eq!(dotted_first_segment("/rooted/x.y"), None);
        assert_eq!(dotted_first_segment(".git/x"), None);
        assert_eq!(dotted_first_segment(""), None);
    }
}
