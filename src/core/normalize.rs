//! Identifier normalization.
//!
//! Film lists carry release years ("Heat-1995") and assorted punctuation
//! ("Amelie (2001)"), while script filenames tend to be bare lowercase stems.
//! Both sides are reduced to a shared key before matching.

/// Reduce a raw identifier to its normalized matching key.
///
/// Steps, in order:
///
/// 1. remove a trailing year suffix (a hyphen followed by exactly four
///    ASCII digits at the end of the string);
/// 2. remove every character that is not a word character or whitespace;
/// 3. lowercase;
/// 4. trim leading and trailing whitespace.
///
/// The function is pure and idempotent: normalizing an already-normalized
/// key returns it unchanged.
///
/// # Examples
///
/// ```
/// use cinema_matcher::normalize_key;
///
/// assert_eq!(normalize_key("Inception-2010"), "inception");
/// assert_eq!(normalize_key("Inception"), "inception");
/// assert_eq!(normalize_key("Amelie (2001)"), "amelie 2001");
/// ```
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let stem = strip_year_suffix(raw);

    let cleaned: String = stem
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    cleaned.to_lowercase().trim().to_string()
}

/// Word characters are alphanumerics plus underscore.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Strip a trailing `-YYYY` suffix, if present.
///
/// Only a hyphen followed by exactly four digits at the very end counts;
/// "Matrix-19999" and "Blade-Runner" are left alone. At most one suffix is
/// removed, so "Alien-1979-1979" becomes "Alien-1979".
fn strip_year_suffix(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 5 {
        let split = bytes.len() - 5;
        // '-' and digits are ASCII, so the byte comparison is also a char
        // boundary check and the slice below cannot split a code point.
        if bytes[split] == b'-' && bytes[split + 1..].iter().all(u8::is_ascii_digit) {
            return &raw[..split];
        }
    }
    raw
}
