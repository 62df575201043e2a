//! Frequency tables built once per corpus.
//!
//! Every table maps a key to `count / total`, so the values in each table
//! (and in each positional column) sum to 1.0.

use std::collections::HashMap;
use std::hash::Hash;

use crate::corpus::Corpus;
use crate::WORD_LENGTH;

/// Letter, n-gram and positional probabilities for a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTables {
    letters: HashMap<u8, f64>,
    bigrams: HashMap<[u8; 2], f64>,
    trigrams: HashMap<[u8; 3], f64>,
    positions: [HashMap<u8, f64>; WORD_LENGTH],
}

impl FrequencyTables {
    pub fn build(corpus: &Corpus) -> Self {
        let words = corpus.words();
        Self {
            letters: letter_probs(words),
            bigrams: ngram_probs::<2>(words),
            trigrams: ngram_probs::<3>(words),
            positions: positional_probs(words),
        }
    }

    pub fn letter(&self, letter: u8) -> f64 {
        self.letters.get(&letter).copied().unwrap_or(0.0)
    }

    pub fn bigram(&self, gram: [u8; 2]) -> f64 {
        self.bigrams.get(&gram).copied().unwrap_or(0.0)
    }

    pub fn trigram(&self, gram: [u8; 3]) -> f64 {
        self.trigrams.get(&gram).copied().unwrap_or(0.0)
    }

    /// Probability of `letter` at index `pos`; zero for unseen letters or
    /// out of range positions.
    pub fn position(&self, pos: usize, letter: u8) -> f64 {
        self.positions
            .get(pos)
            .and_then(|column| column.get(&letter))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn letters(&self) -> &HashMap<u8, f64> {
        &self.letters
    }

    pub fn bigrams(&self) -> &HashMap<[u8; 2], f64> {
        &self.bigrams
    }

    pub fn trigrams(&self) -> &HashMap<[u8; 3], f64> {
        &self.trigrams
    }

    pub fn positions(&self) -> &[HashMap<u8, f64>; WORD_LENGTH] {
        &self.positions
    }
}

fn normalize<K: Eq + Hash>(counts: HashMap<K, usize>) -> HashMap<K, f64> {
    let total: usize = counts.values().sum();
    counts
        .into_iter()
        .map(|(key, count)| (key, count as f64 / total as f64))
        .collect()
}

fn letter_probs(words: &[String]) -> HashMap<u8, f64> {
    let mut counts = HashMap::new();
    for &b in words.iter().flat_map(|w| w.as_bytes()) {
        *counts.entry(b).or_insert(0) += 1;
    }
    normalize(counts)
}

fn ngram_probs<const N: usize>(words: &[String]) -> HashMap<[u8; N], f64> {
    let mut counts = HashMap::new();
    for word in words {
        for window in word.as_bytes().windows(N) {
            let mut gram = [0u8; N];
            gram.copy_from_slice(window);
            *counts.entry(gram).or_insert(0) += 1;
        }
    }
    normalize(counts)
}

fn positional_probs(words: &[String]) -> [HashMap<u8, f64>; WORD_LENGTH] {
    let mut counts: [HashMap<u8, usize>; WORD_LENGTH] = Default::default();
    for word in words {
        for (i, &b) in word.as_bytes().iter().enumerate().take(WORD_LENGTH) {
            *counts[i].entry(b).or_insert(0) += 1;
        }
    }
    counts.map(normalize)
}
