//! String conversion utilities.

/// Returns `true` when the value is empty or whitespace only.
///
/// # Examples
///
/// ```
/// use mediadmin_domain::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   "));
/// assert!(!is_blank(" Queen "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Converts a blank string to `None`, otherwise returns the trimmed value.
///
/// # Examples
///
/// ```
/// use mediadmin_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("  hello "), Some("hello"));
/// assert_eq!(none_if_blank(" "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Loose URL check used by the image fields: the value must start with `http`.
///
/// The backend owns real URL validation; this only rejects obvious typos
/// before a request is made.
pub fn is_http_url(value: &str) -> bool {
    value.trim_start().starts_with("http")
}

/// Extension trait for optional display strings.
pub trait StringExt {
    /// Converts this string to `None` if blank, otherwise `Some(self)`.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        if is_blank(&self) {
            None
        } else {
            Some(self)
        }
    }
}
