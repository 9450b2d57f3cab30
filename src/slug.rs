//! Slug normalization
//!
//! Turns free-form text (city names, area names, localities) into the
//! lower-case, hyphen-delimited tokens used as listing path segments.

/// Normalize free-form text into a slug
///
/// This function:
/// - Lower-cases every character
/// - Removes leading and trailing whitespace
/// - Collapses every run of whitespace into a single `-`
///
/// It never fails. Whitespace-only input yields an empty string, not a lone hyphen.
///
/// # Examples
/// ```
/// use search_path::normalize_slug;
///
/// assert_eq!(normalize_slug("Hyderabad"), "hyderabad");
/// assert_eq!(normalize_slug("  New   Delhi  "), "new-delhi");
/// assert_eq!(normalize_slug("   "), "");
/// ```
pub fn normalize_slug(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Check whether text is already a normalized slug
///
/// # Examples
/// ```
/// use search_path::is_normalized_slug;
///
/// assert!(is_normalized_slug("deep-cleaning"));
/// assert!(!is_normalized_slug("Deep Cleaning"));
/// ```
pub fn is_normalized_slug(text: &str) -> bool {
    normalize_slug(text) == text
}
