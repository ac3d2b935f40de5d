//! Spoken-word forms of numbers.
//!
//! The similarity scorer compares numbers letter by letter as they are spoken,
//! so the conversion from integer to words is a capability injected through
//! the [`Verbalizer`] trait. Everything locale-specific lives behind it.

use std::fmt;

use crate::error::{ErrataError, Result};

/// A number written out in full words, compounds fused without separators.
///
/// Never empty, never contains digits or whitespace.
///
/// # Example
///
/// ```
/// use errata_core::Verbalized;
///
/// let words = Verbalized::new("vierduizendtweehonderd").unwrap();
/// assert_eq!(words.char_len(), 22);
///
/// assert!(Verbalized::new("").is_err());
/// assert!(Verbalized::new("twee honderd").is_err());
/// assert!(Verbalized::new("200").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Verbalized(String);

impl Verbalized {
    /// Wraps a word string, checking the spoken-form invariants.
    pub fn new(words: impl Into<String>) -> Result<Self> {
        let words = words.into();
        if words.is_empty() {
            return Err(ErrataError::invalid("verbalization is empty"));
        }
        if let Some(c) = words
            .chars()
            .find(|c| c.is_ascii_digit() || c.is_whitespace())
        {
            return Err(ErrataError::invalid(format!("verbalization '{words}' contains '{c}'")));
        }
        Ok(Self(words))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns a new verbalization with `suffix` fused onto the end.
    pub fn fused_with(&self, suffix: &str) -> Result<Self> {
        Self::new(format!("{}{}", self.0, suffix))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Verbalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Verbalized {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Converts integers to their spoken-word form in one language.
///
/// Implementations must be pure: the same number always yields the same
/// words. `Send + Sync` lets one verbalizer serve parallel classifiers.
pub trait Verbalizer: Send + Sync {
    /// Writes `n` out in full words.
    ///
    /// # Errors
    ///
    /// Returns [`ErrataError::InvalidInput`] when `n` exceeds the range the
    /// language implementation covers.
    fn verbalize(&self, n: u64) -> Result<Verbalized>;

    /// The word for "hundred" as it is fused onto a compact hundreds reading
    /// (the Dutch "twaalf" + "honderd").
    fn hundred_suffix(&self) -> &str;

    /// Name of the language, for logs and configuration.
    fn language(&self) -> &'static str;
}

impl<V: Verbalizer + ?Sized> Verbalizer for &V {
    fn verbalize(&self, n: u64) -> Result<Verbalized> {
        (**self).verbalize(n)
    }

    fn hundred_suffix(&self) -> &str {
        (**self).hundred_suffix()
    }

    fn language(&self) -> &'static str {
        (**self).language()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_accented_letters_once() {
        let words = Verbalized::new("drieëntwintig").unwrap();
        assert_eq!(words.char_len(), 13);
        assert!(words.as_str().len() > 13);
    }

    #[test]
    fn test_fused_with() {
        let words = Verbalized::new("twaalf").unwrap();
        assert_eq!(
            words.fused_with("honderd").unwrap().as_str(),
            "twaalfhonderd"
        );
    }

    #[test]
    fn test_rejects_digits_and_spaces() {
        assert!(matches!(
            Verbalized::new("een miljoen"),
            Err(ErrataError::InvalidInput(_))
        ));
        assert!(Verbalized::new("4200").is_err());
    }
}
