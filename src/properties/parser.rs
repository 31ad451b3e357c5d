//! Java properties text parsing and serialization

use super::model::Properties;
use crate::util::escape;

/// Parse Java properties text into ordered key/value pairs.
///
/// Blank lines and lines starting with `#` or `!` are skipped. Keys end at
/// the first unescaped `=` or `:`; a line with neither is a key with an empty
/// value. A line ending in an unescaped backslash continues on the next line.
/// Later duplicates overwrite earlier values. Only space, tab and form feed
/// count as whitespace; other Unicode spaces are part of the key or value.
pub fn parse_properties(text: &str) -> Properties {
    let mut props = Properties::new();
    let mut logical = String::new();
    let mut continuing = false;

    for line in physical_lines(text) {
        let line = line.trim_start_matches(escape::is_whitespace);

        if !continuing && (line.is_empty() || line.starts_with('#') || line.starts_with('!')) {
            continue;
        }

        if escape::ends_with_continuation(line) {
            logical.push_str(&line[..line.len() - 1]);
            continuing = true;
            continue;
        }

        logical.push_str(line);
        continuing = false;
        insert_entry(&mut props, &logical);
        logical.clear();
    }

    if continuing {
        tracing::trace!("Properties text ended inside a line continuation");
        insert_entry(&mut props, &logical);
    }

    tracing::debug!("Parsed properties text: {} keys", props.len());
    props
}

/// Serialize properties as `key=value` lines joined with `\r\n`
pub fn serialize_properties(props: &Properties) -> String {
    props
        .iter()
        .map(|(k, v)| format!("{}={}", escape::encode_key(k), escape::encode_value(v)))
        .collect::<Vec<_>>()
        .join("\r\n")
}

fn insert_entry(props: &mut Properties, logical: &str) {
    let (raw_key, raw_value) = match find_separator(logical) {
        Some(i) => (&logical[..i], &logical[i + 1..]),
        None => (logical, ""),
    };

    let key = escape::decode(escape::trim_unescaped_end(
        raw_key.trim_start_matches(escape::is_whitespace),
    ));
    let value = escape::decode(raw_value.trim_start_matches(escape::is_whitespace));

    if props.insert(key, value).is_some() {
        tracing::trace!("Duplicate properties key overwritten");
    }
}

/// Byte offset of the first `=` or `:` not preceded by an escaping backslash
fn find_separator(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return Some(i),
            _ => {}
        }
    }
    None
}

/// Split on `\r\n`, `\n` or `\r`
fn physical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
