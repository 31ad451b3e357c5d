//! Backslash escape handling for key/value text formats
//!
//! Decoding is lenient: unknown escapes drop the backslash, malformed
//! `\uXXXX` sequences are kept verbatim, and unpaired surrogates become
//! U+FFFD. Nothing here returns an error.

/// Decode backslash escapes (`\\`, `\n`, `\r`, `\t`, `\f`, `\uXXXX`, `\x` → `x`)
pub fn decode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    // Consecutive \u escapes are gathered so surrogate pairs can be joined
    let mut units: Vec<u16> = Vec::new();
    let mut rest = raw;

    while let Some(pos) = rest.find('\\') {
        if pos > 0 {
            flush_units(&mut units, &mut out);
            out.push_str(&rest[..pos]);
        }
        let after = &rest[pos + 1..];

        let Some(escaped) = after.chars().next() else {
            // Lone trailing backslash
            flush_units(&mut units, &mut out);
            out.push('\\');
            rest = "";
            break;
        };

        if escaped == 'u' {
            if let Some(unit) = after.get(1..5).and_then(parse_hex_unit) {
                units.push(unit);
                rest = &after[5..];
                continue;
            }
            flush_units(&mut units, &mut out);
            out.push_str("\\u");
            rest = &after[1..];
            continue;
        }

        flush_units(&mut units, &mut out);
        out.push(match escaped {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'f' => '\u{000C}',
            other => other,
        });
        rest = &after[escaped.len_utf8()..];
    }

    flush_units(&mut units, &mut out);
    out.push_str(rest);
    out
}

fn parse_hex_unit(hex: &str) -> Option<u16> {
    if hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        u16::from_str_radix(hex, 16).ok()
    } else {
        None
    }
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

/// True when `line` ends with an odd number of backslashes (a line continuation)
pub fn ends_with_continuation(line: &str) -> bool {
    trailing_backslashes(line) % 2 == 1
}

fn trailing_backslashes(text: &str) -> usize {
    text.chars().rev().take_while(|&c| c == '\\').count()
}

/// Whitespace that separates tokens in properties text: space, tab and form feed
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

/// Trim trailing whitespace that is not protected by a backslash escape
pub fn trim_unescaped_end(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches(is_whitespace);
    if trimmed.len() < raw.len() && ends_with_continuation(trimmed) {
        // Keep the escaped whitespace character
        let kept = raw[trimmed.len()..].chars().next().map_or(0, char::len_utf8);
        return &raw[..trimmed.len() + kept];
    }
    trimmed
}

/// Escape a key: backslash, space, `#`, `!`, `=`, `:` plus control and non-ASCII characters
pub fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for ch in key.chars() {
        match ch {
            ' ' | '#' | '!' | '=' | ':' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            _ => push_encoded(ch, &mut out),
        }
    }
    out
}

/// Escape a value: backslash, leading spaces, control and non-ASCII characters
pub fn encode_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut leading = true;
    for ch in value.chars() {
        match ch {
            ' ' if leading => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            _ => push_encoded(ch, &mut out),
        }
        leading &= ch == ' ';
    }
    out
}

fn push_encoded(ch: char, out: &mut String) {
    match ch {
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{000C}' => out.push_str("\\f"),
        ' '..='~' => out.push(ch),
        _ => {
            let mut buf = [0u16; 2];
            for unit in ch.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{:04X}", unit));
            }
        }
    }
}
