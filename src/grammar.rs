//! Declarative grammars for the two git URI surface forms.
//!
//! Standard URIs decompose with the RFC 3986 appendix-B expression; the scp
//! shorthand (`[user@]host:path`) is a separate pattern because authority
//! syntax cannot represent it. Dispatch between the two is a single
//! discriminator: a string whose generic decomposition found no host, and
//! which matches the scp pattern, is scp.

use std::sync::LazyLock;

use regex::Regex;

/// RFC 3986 appendix-B decomposition into scheme, authority, path, query,
/// and fragment. Matches every string; absent components simply do not
/// participate.
static URI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([^:/?#]+):)?(?://([^/?#]*))?([^?#]*)(?:\?([^#]*))?(?:#(.*))?$")
        .expect("URI pattern is valid")
});

/// The scp shorthand: an authority-looking token, a colon, and a
/// path-looking token, with no further delimiters.
static SCP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:/?#]+):([^:?#]*)$").expect("scp pattern is valid"));

/// Authority internals: optional userinfo before the last unbracketed `@`,
/// then the host, then an optional trailing `:port` unless the colon
/// belongs to a bracketed IPv6 literal.
static AUTHORITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([^\[\]]*)@)?(.*?)(?::([^:@\[\]]*))?$").expect("authority pattern is valid")
});

/// A standard URI broken into its five top-level components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UriSplit<'a> {
    pub scheme: Option<&'a str>,
    pub authority: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// An authority broken into userinfo and host parts. The port is kept as
/// raw text; converting it is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AuthoritySplit<'a> {
    pub user: Option<&'a str>,
    pub password: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<&'a str>,
}

pub(crate) fn split_uri(input: &str) -> UriSplit<'_> {
    let Some(caps) = URI_PATTERN.captures(input) else {
        // The pattern accepts any string; this arm keeps the fallback total.
        return UriSplit {
            scheme: None,
            authority: None,
            path: input,
            query: None,
            fragment: None,
        };
    };
    UriSplit {
        scheme: caps.get(1).map(|m| m.as_str()),
        authority: caps.get(2).map(|m| m.as_str()),
        path: caps.get(3).map_or("", |m| m.as_str()),
        query: caps.get(4).map(|m| m.as_str()),
        fragment: caps.get(5).map(|m| m.as_str()),
    }
}

pub(crate) fn split_authority(authority: &str) -> AuthoritySplit<'_> {
    let Some(caps) = AUTHORITY_PATTERN.captures(authority) else {
        return AuthoritySplit {
            user: None,
            password: None,
            host: authority,
            port: None,
        };
    };
    let userinfo = caps.get(1).map(|m| m.as_str());
    let (user, password) = match userinfo {
        Some(info) => match info.split_once(':') {
            Some((user, password)) => (Some(user), Some(password)),
            None => (Some(info), None),
        },
        None => (None, None),
    };
    AuthoritySplit {
        user,
        password,
        host: caps.get(2).map_or("", |m| m.as_str()),
        port: caps.get(3).map(|m| m.as_str()).filter(|port| !port.is_empty()),
    }
}

/// Returns the scp shorthand's authority and path groups, or `None` when
/// the input does not fit the shorthand.
pub(crate) fn match_scp(input: &str) -> Option<(&str, &str)> {
    let caps = SCP_PATTERN.captures(input)?;
    let authority = caps.get(1)?.as_str();
    let path = caps.get(2)?.as_str();
    Some((authority, path))
}
