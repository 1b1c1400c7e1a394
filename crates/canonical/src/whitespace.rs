//! Whitespace normalization.
//!
//! ```rust
//! use canonical::collapse_whitespace;
//!
//! assert_eq!(collapse_whitespace("  Ho   Chi\tMinh "), "Ho Chi Minh");
//! ```

/// Collapses runs of Unicode whitespace into single ASCII spaces and trims
/// both ends.
///
/// Returns an empty string for empty or whitespace-only input. Non-breaking
/// spaces (U+00A0) count as whitespace.
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
