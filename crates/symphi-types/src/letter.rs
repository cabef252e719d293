use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SymphiError;

/// A case-normalized Latin letter, stored as its alphabetic index `0..=25`.
///
/// `'a'` and `'A'` normalize to the same letter. Anything outside A-Z/a-z
/// is rejected at construction, so a `Letter` is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Letter(u8);

impl Letter {
    /// Normalize a character into a letter.
    pub fn from_char(ch: char) -> Result<Self, SymphiError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase() as u8 - b'A'))
        } else {
            Err(SymphiError::InvalidLetter(ch))
        }
    }

    /// Build a letter from an uppercase ASCII byte.
    ///
    /// Panics on input outside `b'A'..=b'Z'`; intended for static tables
    /// and tests where the input is a literal.
    pub const fn from_ascii_upper(byte: u8) -> Self {
        assert!(byte >= b'A' && byte <= b'Z');
        Self(byte - b'A')
    }

    /// Alphabetic index, `0` for A through `25` for Z.
    pub fn index(&self) -> u8 {
        self.0
    }

    /// One-based alphabetic position, `1` for A through `26` for Z.
    pub fn position(&self) -> u8 {
        self.0 + 1
    }

    /// Uppercase character form.
    pub fn as_char(&self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An ordered, non-empty sequence of letters.
///
/// Order is significant: transformations permute or rewrite it. The
/// non-empty invariant is enforced where external input enters
/// ([`Word::parse`]); internal permutations preserve length.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word(Vec<Letter>);

impl Word {
    /// Parse a word from a string, normalizing case.
    ///
    /// Fails with [`SymphiError::EmptyWord`] on an empty string and with
    /// [`SymphiError::InvalidLetter`] on the first non-alphabetic
    /// character; no partial word is ever produced.
    pub fn parse(input: &str) -> Result<Self, SymphiError> {
        if input.is_empty() {
            return Err(SymphiError::EmptyWord);
        }
        let letters = input
            .chars()
            .map(Letter::from_char)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(letters))
    }

    /// Assemble a word from already-validated letters.
    ///
    /// Callers transforming an existing word keep its length, which is the
    /// only way this is reached with production data.
    pub fn from_letters(letters: Vec<Letter>) -> Self {
        debug_assert!(!letters.is_empty());
        Self(letters)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            write!(f, "{}", letter.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Word {
    type Err = SymphiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
