//! Component normalization: case folding and percent-encoding consistency.
//!
//! Raw fields preserve the surface form of the input; the normalized views
//! produced here feed comparisons and scp rendering. Normalization decodes
//! escapes of unreserved octets (`%7E` is the same character as `~`) and
//! uppercases the hex digits of every escape that must remain encoded.

/// Unreserved characters per RFC 3986 section 2.3.
fn is_unreserved(octet: u8) -> bool {
    octet.is_ascii_alphanumeric() || matches!(octet, b'-' | b'.' | b'_' | b'~')
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Makes percent escapes consistent. Text that is not an escape passes
/// through untouched, including malformed `%` sequences.
pub(crate) fn normalize_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices();
    while let Some((index, ch)) = chars.next() {
        if ch == '%' {
            if let Some(&[first, second]) = input.as_bytes().get(index + 1..index + 3) {
                if let (Some(high), Some(low)) = (hex_value(first), hex_value(second)) {
                    let octet = high * 16 + low;
                    if is_unreserved(octet) {
                        out.push(char::from(octet));
                    } else {
                        out.push('%');
                        out.push(char::from(first.to_ascii_uppercase()));
                        out.push(char::from(second.to_ascii_uppercase()));
                    }
                    chars.next();
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Canonical host form: consistent escapes, ASCII-lowercased.
pub(crate) fn normalize_host(host: &str) -> String {
    normalize_escapes(host).to_ascii_lowercase()
}
