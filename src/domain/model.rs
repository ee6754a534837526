use crate::utils::error::{Result, UsernameError};
use crate::utils::validation::{validate_positive_number, Validate};

pub const SPECIAL_CHARS: [char; 10] = ['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

pub const DEFAULT_ADJECTIVES: [&str; 8] = [
    "Happy", "Cool", "Brave", "Wild", "Gentle", "Rapid", "Silent", "Clever",
];

pub const DEFAULT_NOUNS: [&str; 8] = [
    "Tiger", "Dragon", "Eagle", "Wolf", "Phoenix", "Lion", "Shark", "Owl",
];

/// Immutable, never-empty list of capitalized words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(UsernameError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Built-in lists are non-empty by construction, so this cannot fail.
    pub fn from_defaults<const N: usize>(defaults: &[&str; N]) -> Self {
        const { assert!(N > 0, "default word list must not be empty") };
        Self {
            words: defaults.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub include_numbers: bool,
    pub include_specials: bool,
    pub min_length: Option<usize>,
}

impl GenerationOptions {
    /// Padding only happens when there is something to pad with.
    pub fn can_pad(&self) -> bool {
        self.include_numbers || self.include_specials
    }
}

impl Validate for GenerationOptions {
    fn validate(&self) -> Result<()> {
        if let Some(min_length) = self.min_length {
            validate_positive_number("min_length", min_length, 1)?;
        }
        Ok(())
    }
}

/// Everything the console collects before a batch is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequest {
    pub count: usize,
    pub options: GenerationOptions,
}

impl Validate for BatchRequest {
    fn validate(&self) -> Result<()> {
        validate_positive_number("count", self.count, 1)?;
        self.options.validate()
    }
}
