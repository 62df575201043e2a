//! The word list every simulation draws from.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::WORD_LENGTH;

/// Check that a word is exactly [`WORD_LENGTH`] lowercase ASCII letters.
pub fn check_word(word: &str) -> Result<()> {
    if word.len() != WORD_LENGTH {
        return Err(Error::InvalidWord {
            word: word.to_string(),
            reason: "wrong length",
        });
    }
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(Error::InvalidWord {
            word: word.to_string(),
            reason: "not lowercase ascii letters",
        });
    }
    Ok(())
}

/// An ordered, non-empty list of valid words. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    words: Vec<String>,
}

impl Corpus {
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        for word in &words {
            check_word(word)?;
        }
        Ok(Self { words })
    }

    /// Read one word per line, skipping anything that is not a five letter word.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            if check_word(&word).is_err() {
                debug!("skipping {:?}", word);
                continue;
            }
            words.push(word);
        }
        Self::new(words)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
