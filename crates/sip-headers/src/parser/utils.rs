// Utility functions for parsing

use std::borrow::Cow;

/// Unfolds Linear White Space (LWS) according to RFC 3261.
///
/// A CRLF (or bare LF) immediately followed by SP/HTAB is a line fold and,
/// together with the surrounding whitespace, collapses into a single SP.
/// Whitespace that is not part of a fold is left untouched so quoted text
/// survives verbatim. Input without folds is borrowed, not copied.
pub fn unfold_lws(input: &str) -> Cow<'_, str> {
    if !input.contains('\n') {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let len = bytes.len();
    let mut unfolded = String::with_capacity(len);
    let mut start = 0;
    let mut i = 0;

    while i < len {
        let eol = match bytes[i] {
            b'\r' if i + 1 < len && bytes[i + 1] == b'\n' => 2,
            b'\n' => 1,
            _ => 0,
        };
        if eol > 0 && i + eol < len && (bytes[i + eol] == b' ' || bytes[i + eol] == b'\t') {
            let kept = input[start..i].trim_end_matches(|c| c == ' ' || c == '\t');
            unfolded.push_str(kept);
            unfolded.push(' ');
            i += eol;
            while i < len && (bytes[i] == b' ' || bytes[i] == b'\t') {
                i += 1;
            }
            start = i;
        } else {
            i += 1;
        }
    }
    unfolded.push_str(&input[start..]);

    Cow::Owned(unfolded)
}
