//! Two-phase construction for [`GitUri`] values.
//!
//! Fields accumulate unvalidated on the builder, in any order; [`build`]
//! runs the variant's grammar checks exactly once at the end. This is the
//! deferred-validation window: a draft may pass through transiently invalid
//! combinations (a path set before its host, for instance) without failing,
//! and no half-valid value is ever observable from outside.
//!
//! ```
//! use git_uri::GitUriBuilder;
//!
//! let uri = GitUriBuilder::new()
//!     .scheme("ssh")
//!     .path("/path/to/repo.git")
//!     .host("host.xz")
//!     .build()
//!     .unwrap();
//! assert_eq!(uri.to_string(), "ssh://host.xz/path/to/repo.git");
//! ```
//!
//! [`build`]: GitUriBuilder::build

use crate::error::{InvalidUriError, InvalidUriReason};
use crate::grammar;
use crate::uri::{GitUri, UriKind};

/// A draft [`GitUri`] whose invariants are checked by [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct GitUriBuilder {
    kind: UriKind,
    scheme: Option<String>,
    user: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl GitUriBuilder {
    /// Starts a draft in the standard (generic) form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: UriKind::Generic,
            scheme: None,
            user: None,
            password: None,
            host: None,
            port: None,
            path: String::new(),
            query: None,
            fragment: None,
        }
    }

    /// Starts a draft in the scp shorthand form.
    #[must_use]
    pub fn scp() -> Self {
        Self {
            kind: UriKind::Scp,
            ..Self::new()
        }
    }

    /// Sets the scheme.
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Sets the user.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the host. An empty host is "present but empty", as in
    /// `file:///path`.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the port.
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the query.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Sets the fragment.
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Splits a raw authority (`user:password@host:port`) into its fields.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUriError`] when the trailing port segment is not a
    /// valid port number.
    pub fn authority(mut self, authority: &str) -> Result<Self, InvalidUriError> {
        let split = grammar::split_authority(authority);
        if let Some(user) = split.user {
            self.user = Some(user.to_string());
        }
        if let Some(password) = split.password {
            self.password = Some(password.to_string());
        }
        self.host = Some(split.host.to_string());
        if let Some(port_text) = split.port {
            let port = port_text.parse::<u16>().map_err(|_| InvalidUriError {
                uri: authority.to_string(),
                reason: InvalidUriReason::InvalidPort {
                    value: port_text.to_string(),
                },
            })?;
            self.port = Some(port);
        }
        Ok(self)
    }

    /// Validates the draft and yields the finished URI.
    ///
    /// A relative non-empty path on a generic draft with a host is rooted
    /// with a leading `/` first; scp paths are kept exactly as given, so a
    /// relative scp path (`user@host:repo.git`) is never silently turned
    /// into a host-rooted one.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUriError`] naming the violated grammar rule and the
    /// rendered draft.
    pub fn build(mut self) -> Result<GitUri, InvalidUriError> {
        if self.kind == UriKind::Generic
            && self.host.is_some()
            && !self.path.is_empty()
            && !self.path.starts_with('/')
        {
            self.path.insert(0, '/');
        }
        let uri = GitUri {
            kind: self.kind,
            scheme: self.scheme,
            user: self.user,
            password: self.password,
            host: self.host,
            port: self.port,
            path: self.path,
            query: self.query,
            fragment: self.fragment,
        };
        uri.validate()?;
        Ok(uri)
    }
}

impl Default for GitUriBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_can_be_set_in_any_order() {
        let uri = GitUriBuilder::new()
            .path("/martinemde/gitable.git")
            .scheme("git")
            .host("github.com")
            .build()
            .unwrap();
        assert_eq!(uri.to_string(), "git://github.com/martinemde/gitable.git");
    }

    #[test]
    fn relative_path_is_rooted_when_a_host_is_present() {
        let uri = GitUriBuilder::new()
            .scheme("https")
            .host("github.com")
            .path("martinemde/gitable")
            .build()
            .unwrap();
        assert_eq!(uri.path(), "/martinemde/gitable");
    }

    #[test]
    fn relative_scp_path_stays_relative() {
        let uri = GitUriBuilder::scp()
            .host("github.com")
            .user("git")
            .path("martinemde/gitable.git")
            .build()
            .unwrap();
        assert_eq!(uri.path(), "martinemde/gitable.git");
        assert_eq!(uri.to_string(), "git@github.com:martinemde/gitable.git");
    }

    #[test]
    fn scp_requires_a_host() {
        let err = GitUriBuilder::scp().path("repo.git").build().unwrap_err();
        assert_eq!(err.reason, InvalidUriReason::MissingHostname);
    }

    #[test]
    fn scp_requires_a_path() {
        let err = GitUriBuilder::scp().host("host.xz").build().unwrap_err();
        assert_eq!(err.reason, InvalidUriReason::MissingHierarchicalSegment);
    }

    #[test]
    fn scp_rejects_a_scheme() {
        let err = GitUriBuilder::scp()
            .scheme("ssh")
            .host("host.xz")
            .path("repo.git")
            .build()
            .unwrap_err();
        assert_eq!(err.reason, InvalidUriReason::SchemeOnScpUri);
    }

    #[test]
    fn scp_rejects_a_port() {
        let err = GitUriBuilder::scp()
            .host("host.xz")
            .port(22)
            .path("repo.git")
            .build()
            .unwrap_err();
        assert_eq!(err.reason, InvalidUriReason::PortOnScpUri);
    }

    #[test]
    fn generic_user_without_host_is_rejected() {
        let err = GitUriBuilder::new()
            .user("git")
            .path("/repo.git")
            .build()
            .unwrap_err();
        assert_eq!(err.reason, InvalidUriReason::HostnameNotSupplied);
    }

    #[test]
    fn authority_splits_user_host_and_port() {
        let uri = GitUriBuilder::new()
            .scheme("ssh")
            .authority("user@host.xz:8888")
            .unwrap()
            .path("/repo.git")
            .build()
            .unwrap();
        assert_eq!(uri.user(), Some("user"));
        assert_eq!(uri.host(), Some("host.xz"));
        assert_eq!(uri.port(), Some(8888));
    }

    #[test]
    fn authority_with_bad_port_fails() {
        let err = GitUriBuilder::new()
            .scheme("http")
            .authority("host.xz:80a")
            .unwrap_err();
        assert_eq!(
            err.reason,
            InvalidUriReason::InvalidPort {
                value: "80a".to_string()
            }
        );
    }
}
