//! Hosting-provider knowledge, kept as data rather than dispatch logic so
//! the lists can grow without touching the parser.

/// Hosts that serve the same repository regardless of scp-relative versus
/// absolute path spelling. Equivalence compares their org/project key
/// instead of the literal path.
pub const ORG_EQUIVALENT_HOSTS: &[&str] = &["github.com", "bitbucket.org"];

/// Hosts whose web URLs are routinely pasted where a clone URI is wanted.
/// [`GitUri::heuristic_parse`] forces a `.git` extension for them.
///
/// [`GitUri::heuristic_parse`]: crate::GitUri::heuristic_parse
pub const GIT_EXTENSION_HOSTS: &[&str] = &["github.com", "gitlab.com", "bitbucket.org"];

/// The scheme assumed when a host-looking string arrives without one.
pub const DEFAULT_WEB_SCHEME: &str = "https";
