//! Accumulated knowledge about the target, and the candidate filter built on it.

use std::collections::{BTreeMap, BTreeSet};

use crate::feedback::{Clues, Feedback};

/// Everything learned from the guesses so far. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Confirmed letter per position (green)
    exact: BTreeMap<usize, u8>,
    /// Letters in the word, but not at the given position (yellow)
    misplaced: Vec<(u8, usize)>,
    /// Letters reported as not in the word (gray)
    absent: BTreeSet<u8>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exact(&self) -> &BTreeMap<usize, u8> {
        &self.exact
    }

    pub fn misplaced(&self) -> &[(u8, usize)] {
        &self.misplaced
    }

    pub fn absent(&self) -> &BTreeSet<u8> {
        &self.absent
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.misplaced.is_empty() && self.absent.is_empty()
    }

    /// Fold the marks of one guess into the constraints.
    pub fn absorb(&mut self, clues: &Clues) {
        for (i, letter, mark) in clues.iter() {
            match mark {
                Feedback::Correct => {
                    // a confirmed position is never overwritten
                    self.exact.entry(i).or_insert(letter);
                }
                Feedback::Present => {
                    if !self.misplaced.contains(&(letter, i)) {
                        self.misplaced.push((letter, i));
                    }
                }
                Feedback::Absent => {
                    self.absent.insert(letter);
                }
            }
        }
    }

    /// True if every constraint in `other` is also held here.
    pub fn is_superset_of(&self, other: &Constraints) -> bool {
        other
            .exact
            .iter()
            .all(|(pos, letter)| self.exact.get(pos) == Some(letter))
            && other.misplaced.iter().all(|m| self.misplaced.contains(m))
            && other.absent.is_subset(&self.absent)
    }

    fn confirmed_present(&self, letter: u8) -> bool {
        self.exact.values().any(|&l| l == letter)
            || self.misplaced.iter().any(|&(l, _)| l == letter)
    }

    /// Check if a word is consistent with everything learned so far.
    pub fn admits(&self, word: &str) -> bool {
        let bytes = word.as_bytes();

        for (&pos, &letter) in &self.exact {
            if bytes.get(pos) != Some(&letter) {
                return false;
            }
        }

        for &(letter, pos) in &self.misplaced {
            if !bytes.contains(&letter) || bytes.get(pos) == Some(&letter) {
                return false;
            }
        }

        // a gray letter only rules a word out while nothing has shown it present
        for &letter in bytes {
            if self.absent.contains(&letter) && !self.confirmed_present(letter) {
                return false;
            }
        }

        true
    }

    /// Keep the words that satisfy every constraint, in their original order.
    pub fn filter<S: AsRef<str> + Clone>(&self, pool: &[S]) -> Vec<S> {
        pool.iter()
            .filter(|word| self.admits(word.as_ref()))
            .cloned()
            .collect()
    }
}
