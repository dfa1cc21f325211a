//! Error types for git URI parsing and validation.

use std::fmt;
use std::str::Utf8Error;

/// Error raised when a string decomposes but violates a grammar invariant.
///
/// The message names the violated rule and the offending URI:
///
/// ```
/// use git_uri::GitUri;
///
/// let err = GitUri::parse("http://").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Absolute URI missing hierarchical segment: 'http://'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidUriError {
    /// The rendered URI (or draft) that failed validation
    pub uri: String,
    /// The specific rule that was violated
    pub reason: InvalidUriReason,
}

/// Grammar rules that can fail during construction or mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidUriReason {
    /// A scheme was given but neither a host nor a path is present
    MissingHierarchicalSegment,
    /// User, password, or port were given without any host
    HostnameNotSupplied,
    /// An scp-style URI has an empty host
    MissingHostname,
    /// A relative path was combined with an authority
    RelativePathWithAuthority,
    /// An scp-style URI carries a scheme
    SchemeOnScpUri,
    /// An scp-style URI carries a port
    PortOnScpUri,
    /// The authority's port segment is not a valid port number
    InvalidPort {
        /// The offending port text
        value: String,
    },
}

impl fmt::Display for InvalidUriReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHierarchicalSegment => {
                write!(f, "Absolute URI missing hierarchical segment")
            }
            Self::HostnameNotSupplied => write!(f, "Hostname not supplied"),
            Self::MissingHostname => write!(f, "Hostname segment missing"),
            Self::RelativePathWithAuthority => {
                write!(f, "Cannot have a relative path with an authority")
            }
            Self::SchemeOnScpUri => write!(f, "Scp style URI must not have a scheme"),
            Self::PortOnScpUri => write!(f, "Scp style URI cannot have a port"),
            Self::InvalidPort { value } => write!(f, "Invalid port number '{value}'"),
        }
    }
}

impl InvalidUriError {
    /// Re-anchors the error on the full input string, for errors raised
    /// while a fragment of it (an authority, say) was being examined.
    pub(crate) fn for_input(self, input: &str) -> Self {
        Self {
            uri: input.to_string(),
            reason: self.reason,
        }
    }
}

impl fmt::Display for InvalidUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}'", self.reason, self.uri)
    }
}

impl std::error::Error for InvalidUriError {}

/// Error raised when input bytes cannot be treated as a URI string.
///
/// Surfaced by the byte-oriented entry points ([`GitUri::from_bytes`] and
/// [`GitUri::from_os_str`]) when the input is not valid UTF-8.
///
/// [`GitUri::from_bytes`]: crate::GitUri::from_bytes
/// [`GitUri::from_os_str`]: crate::GitUri::from_os_str
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeConversionError {
    /// Length of the longest valid UTF-8 prefix of the input
    pub valid_up_to: usize,
}

impl fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "can't convert input into a URI string: invalid UTF-8 after byte {}",
            self.valid_up_to
        )
    }
}

impl std::error::Error for TypeConversionError {}

impl From<Utf8Error> for TypeConversionError {
    fn from(err: Utf8Error) -> Self {
        Self {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Either failure mode of the byte-oriented parse entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input decomposed but violates a grammar invariant
    Invalid(InvalidUriError),
    /// The input is not convertible to a string
    Conversion(TypeConversionError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => err.fmt(f),
            Self::Conversion(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Conversion(err) => Some(err),
        }
    }
}

impl From<InvalidUriError> for ParseError {
    fn from(err: InvalidUriError) -> Self {
        Self::Invalid(err)
    }
}

impl From<TypeConversionError> for ParseError {
    fn from(err: TypeConversionError) -> Self {
        Self::Conversion(err)
    }
}
