//! Accent stripping for free-text path segments.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Remove diacritical marks: decompose (NFKD) and drop combining marks.
///
/// "São Paulo" becomes "Sao Paulo". Total over all input and idempotent.
pub fn remove_diacritics(text: &str) -> String {
    text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}
