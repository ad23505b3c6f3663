//! Regex-aware string replacement.

use regex::Regex;

use crate::Result;

/// Replaces every match of `pattern` in `s` with `replacement`.
///
/// Like [`str::replace`], but `pattern` is a regular expression and
/// `replacement` may reference capture groups (`$1`, `${name}`).
///
/// ```
/// use zen::regexpx;
///
/// let out = regexpx::replace_all("2024-01-31", r"(\d+)-(\d+)-(\d+)", "$3.$2.$1").unwrap();
/// assert_eq!(out, "31.01.2024");
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::Regex`] if `pattern` does not compile.
pub fn replace_all(s: &str, pattern: &str, replacement: &str) -> Result<String> {
    let regex = Regex::new(pattern)?;
    Ok(regex.replace_all(s, replacement).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn replaces_every_match() {
        assert_eq!(replace_all("a1b22c333", r"\d+", "#").unwrap(), "a#b#c#");
    }

    #[test]
    fn named_groups_expand() {
        let out = replace_all("John Smith", r"(?P<first>\w+) (?P<last>\w+)", "${last}, ${first}");
        assert_eq!(out.unwrap(), "Smith, John");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(matches!(replace_all("x", "(", "y"), Err(Error::Regex(_))));
    }
}
