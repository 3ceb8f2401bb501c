//! Query-string parsing and serialization.

use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Parsed query arguments. A key without an `=value` part maps to `None`.
pub type QueryMap = HashMap<String, Option<String>>;

/// Characters escaped when serializing query names and values.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Parses the part of a location after '?'.
///
/// Values are percent-decoded, names are taken as-is, and a duplicated name
/// keeps its last occurrence.
pub(crate) fn parse(query: &str) -> QueryMap {
    let mut map = QueryMap::new();
    for piece in query.split('&') {
        match piece.find('=') {
            Some(i) => {
                let value = percent_decode_str(&piece[i + 1..])
                    .decode_utf8_lossy()
                    .into_owned();
                map.insert(piece[..i].to_owned(), Some(value));
            }
            None => {
                map.insert(piece.to_owned(), None);
            }
        }
    }
    map
}

/// Serializes name/value pairs into `a=1&b=2` form, percent-encoded.
pub(crate) fn serialize(pairs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for &(name, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.extend(utf8_percent_encode(name, QUERY));
        out.push('=');
        out.extend(utf8_percent_encode(value, QUERY));
    }
    out
}
