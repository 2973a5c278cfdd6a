//! Escape sequence decoding.
//!
//! Turns literal two-character escapes (`\` followed by a designator) into the
//! characters they stand for. The input is scanned once, left to right, and a
//! replacement is never scanned again, so `\\n` decodes to a backslash and a
//! literal `n` rather than to a newline.
//!
//! Decoding is not idempotent: decoding already-decoded text can change it
//! again (for example `\\t` -> `\t` -> tab). Callers always decode the text the
//! user typed, never a previous result.

/// Map an escape designator (the character after the backslash) to the
/// character it encodes.
fn unescape_char(designator: char) -> Option<char> {
    match designator {
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '"' => Some('"'),
        '\'' => Some('\''),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'v' => Some('\u{b}'),
        _ => None,
    }
}

/// Decode every recognized escape sequence in `input`.
///
/// Unrecognized sequences such as `\x` and a trailing lone backslash are
/// emitted unchanged. Runs in linear time and never fails.
pub fn decode(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek().copied().and_then(unescape_char) {
            Some(replacement) => {
                chars.next();
                result.push(replacement);
            }
            // Emit the backslash alone; the next character is scanned on its own.
            None => result.push(c),
        }
    }

    tracing::trace!(input_len = input.len(), output_len = result.len(), "decoded");
    result
}

/// Legend entries shown under the input area: (escape, meaning).
///
/// Label text only. Nothing here is fed through [`decode`].
pub const LEGEND: &[(&str, &str)] = &[
    ("\\n", "newline"),
    ("\\t", "tab"),
    ("\\r", "carriage return"),
    ("\\\\", "backslash"),
    ("\\\"", "quote"),
];

/// Format a legend entry as `\n → newline`.
pub fn legend_label(entry: &(&str, &str)) -> String {
    format!("{} → {}", entry.0, entry.1)
}
