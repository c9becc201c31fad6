//! String conversion utilities.

/// Converts an empty `String` to `None`, otherwise returns `Some(value)`.
///
/// Draft fields use the empty string for "not provided"; committed
/// characters store those as `None`.
///
/// # Examples
///
/// ```
/// use heroshelf_domain::common::some_if_not_empty;
///
/// assert_eq!(some_if_not_empty("Elf".to_string()), Some("Elf".to_string()));
/// assert_eq!(some_if_not_empty(String::new()), None);
/// ```
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Trims `value` and returns it owned, or `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use heroshelf_domain::common::trimmed_non_empty;
///
/// assert_eq!(trimmed_non_empty("  Fireball "), Some("Fireball".to_string()));
/// assert_eq!(trimmed_non_empty("   "), None);
/// ```
pub fn trimmed_non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Extension trait for strings providing `into_option` as a method.
///
/// # Examples
///
/// ```
/// use heroshelf_domain::common::StringExt;
///
/// assert_eq!("Mage".to_string().into_option(), Some("Mage".to_string()));
/// assert_eq!(String::new().into_option(), None);
/// ```
pub trait StringExt {
    /// Converts this string to `None` if empty, otherwise `Some(self)`.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        some_if_not_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_some_if_not_empty_with_content() {
        assert_eq!(
            some_if_not_empty("hello".to_string()),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_some_if_not_empty_whitespace_is_kept() {
        assert_eq!(some_if_not_empty(" ".to_string()), Some(" ".to_string()));
    }

    #[test]
    fn test_trimmed_non_empty() {
        assert_eq!(trimmed_non_empty("\tStealth\n"), Some("Stealth".to_string()));
        assert_eq!(trimmed_non_empty(""), None);
        assert_eq!(trimmed_non_empty(" \t\n"), None);
    }

    #[test]
    fn test_string_ext_into_option() {
        assert_eq!("hello".to_string().into_option(), Some("hello".to_string()));
        assert_eq!(String::new().into_option(), None);
    }
}
