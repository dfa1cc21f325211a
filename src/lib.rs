//! Parser and manipulator for git repository location strings.
//!
//! Git accepts repository locations in several surface forms: standard
//! URIs (`https://`, `ssh://`, `git://`, `file://`, and friends), bare
//! filesystem paths, and the ssh "scp-style" shorthand (`user@host:path`)
//! that standard URI syntax cannot represent. This crate recognizes which
//! grammar a string belongs to, decomposes it, and supports mutating
//! path-like pieces (extension, basename) while preserving the original
//! surface form.
//!
//! # Quick Start
//!
//! ```rust
//! use git_uri::GitUri;
//!
//! // Parse any form git clone accepts.
//! let uri = GitUri::parse("git@github.com:martinemde/gitable.git").unwrap();
//! assert!(uri.is_scp());
//! assert!(uri.is_ssh());
//! assert_eq!(uri.host(), Some("github.com"));
//! assert_eq!(uri.project_name(), "gitable");
//!
//! // Differently shaped URIs naming the same repository are equivalent.
//! assert!(uri.is_equivalent_to("https://github.com/martinemde/gitable.git"));
//!
//! // Upgrade a copied browser URL into something clonable.
//! let uri = GitUri::heuristic_parse("https://github.com/martinemde/gitable").unwrap();
//! assert_eq!(uri.to_string(), "https://github.com/martinemde/gitable.git");
//! ```
//!
//! # Recognized grammars
//!
//! | form | example |
//! |------|---------|
//! | scheme + authority + path | `https://host.xz:8888/path/to/repo.git/` |
//! | `~user` expansion | `git://host.xz/~user/path/to/repo.git/` |
//! | ssh with user | `ssh://user@host.xz/path/to/repo.git/` |
//! | scp shorthand | `user@host.xz:path/to/repo.git` |
//! | bare local path | `/path/to/repo.git/` |
//! | file scheme | `file:///path/to/repo.git/` |
//!
//! Every accepted form renders back to the exact input string.
//!
//! # Construction
//!
//! [`GitUriBuilder`] assembles a URI from fields, validating once when
//! [`build`](GitUriBuilder::build) runs:
//!
//! ```rust
//! use git_uri::GitUriBuilder;
//!
//! let uri = GitUriBuilder::scp()
//!     .user("git")
//!     .host("github.com")
//!     .path("martinemde/gitable.git")
//!     .build()
//!     .unwrap();
//! assert_eq!(uri.to_string(), "git@github.com:martinemde/gitable.git");
//! ```
//!
//! # Errors
//!
//! Two failure modes only: [`InvalidUriError`] when a string decomposes
//! but violates a grammar rule, and [`TypeConversionError`] when byte
//! input is not convertible to a string at all. Parsing is deterministic
//! and pure; a failure is always reproducible and local to one call.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod error;
mod grammar;
mod heuristic;
mod normalize;
mod path;
pub mod prelude;
pub mod providers;
mod uri;

pub use builder::GitUriBuilder;
pub use error::{InvalidUriError, InvalidUriReason, ParseError, TypeConversionError};
pub use providers::{DEFAULT_WEB_SCHEME, GIT_EXTENSION_HOSTS, ORG_EQUIVALENT_HOSTS};
pub use uri::{GitUri, UriKind};
