//! Raw text cleaning for the reference tokenizer.
//!
//! Every input byte falls into one of three classes:
//!
//! - ASCII letters are kept and lower-cased
//! - delimiters (`,` `|` `-` `/` and ASCII whitespace) separate tokens
//! - everything else (digits, punctuation, non-ASCII bytes) is dropped
//!   without splitting, so `"don't"` cleans to `"dont"`
//!
//! The output is ASCII, single-space separated, with no leading or trailing
//! space, which is the input contract of [`Tokenizer`](super::Tokenizer).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum ByteClass {
    Drop = 0,
    Letter = 1,
    Delimiter = 2,
}

const fn classify(b: u8) -> ByteClass {
    match b {
        b'a'..=b'z' | b'A'..=b'Z' => ByteClass::Letter,
        b',' | b'|' | b'-' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c => {
            ByteClass::Delimiter
        }
        _ => ByteClass::Drop,
    }
}

const CLASS_TABLE: [ByteClass; 256] = {
    let mut table = [ByteClass::Drop; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = classify(i as u8);
        i += 1;
    }
    table
};

/// Cleans `raw` into `out` (cleared first).
///
/// # Example
///
/// ```
/// use sift_core::analyzer::clean_into;
///
/// let mut out = String::new();
/// clean_into("Budget|Car-Rental, Toronto (ON) 2024", &mut out);
/// assert_eq!(out, "budget car rental toronto on");
/// ```
pub fn clean_into(raw: &str, out: &mut String) {
    out.clear();
    out.reserve(raw.len());

    let mut pending_space = false;
    for &b in raw.as_bytes() {
        match CLASS_TABLE[b as usize] {
            ByteClass::Letter => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(b.to_ascii_lowercase() as char);
            }
            ByteClass::Delimiter => pending_space = true,
            ByteClass::Drop => {}
        }
    }
}

/// Cleans `raw` into a new string.
pub fn clean(raw: &str) -> String {
    let mut out = String::new();
    clean_into(raw, &mut out);
    out
}

/// Normalizes a query: trims surrounding whitespace and lower-cases.
///
/// Returns `None` for an empty or all-whitespace query. Nothing else is
/// rewritten: a query with non-letter characters is kept as is and simply
/// matches nothing in a letters-only vocabulary.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
