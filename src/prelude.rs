//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use git_uri::prelude::*;
//!
//! let uri = GitUri::parse("git://host.xz/path/to/repo.git").unwrap();
//! assert_eq!(uri.project_name(), "repo");
//! ```

pub use crate::{
    // Core types
    GitUri, UriKind,
    // Builder
    GitUriBuilder,
    // Errors
    InvalidUriError, InvalidUriReason, ParseError, TypeConversionError,
    // Provider configuration
    DEFAULT_WEB_SCHEME, GIT_EXTENSION_HOSTS, ORG_EQUIVALENT_HOSTS,
};
