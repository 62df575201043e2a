//! Candidate scoring from corpus statistics.
//!
//! A word scores well when its letters are common across the corpus, its
//! letter pairs and triples are common sequences, and its letters sit where
//! they usually sit. Repeated letters are discounted since they reveal less
//! per guess.

use std::collections::{BTreeSet, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::stats::FrequencyTables;

/// Coefficients for the score terms. Callers always supply all five.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub letter: f64,
    pub bigram: f64,
    pub trigram: f64,
    pub position: f64,
    /// Multiplier applied to words with a repeated letter
    pub repeat_penalty: f64,
}

/// A candidate together with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a str,
    pub score: f64,
}

/// Score a single word. Letters and n-grams absent from the tables add nothing.
pub fn score(word: &str, tables: &FrequencyTables, weights: &Weights) -> f64 {
    let bytes = word.as_bytes();
    let distinct: BTreeSet<u8> = bytes.iter().copied().collect();

    let repeat_penalty = if distinct.len() < bytes.len() {
        weights.repeat_penalty
    } else {
        1.0
    };

    let letter_score: f64 = distinct.iter().map(|&b| tables.letter(b)).sum();
    let bigram_score: f64 = bytes
        .windows(2)
        .map(|w| tables.bigram([w[0], w[1]]))
        .sum();
    let trigram_score: f64 = bytes
        .windows(3)
        .map(|w| tables.trigram([w[0], w[1], w[2]]))
        .sum();
    let position_score: f64 = bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| tables.position(i, b))
        .sum();

    repeat_penalty
        * (weights.letter * letter_score
            + weights.bigram * bigram_score
            + weights.trigram * trigram_score
            + weights.position * position_score)
}

fn score_unused<'a>(
    pool: &[&'a str],
    used: &HashSet<&str>,
    tables: &FrequencyTables,
    weights: &Weights,
) -> Vec<ScoredWord<'a>> {
    // collect() keeps pool order
    pool.par_iter()
        .filter(|word| !used.contains(**word))
        .map(|&word| ScoredWord {
            word,
            score: score(word, tables, weights),
        })
        .collect()
}

/// The highest scoring candidate not yet guessed. Ties go to the word that
/// comes first in the pool.
pub fn best_guess<'a>(
    pool: &[&'a str],
    used: &HashSet<&str>,
    tables: &FrequencyTables,
    weights: &Weights,
) -> Option<ScoredWord<'a>> {
    score_unused(pool, used, tables, weights)
        .into_iter()
        .fold(None, |best, candidate| match best {
            Some(b) if candidate.score <= b.score => Some(b),
            _ => Some(candidate),
        })
}

/// The top `n` unused candidates, best first. Equal scores keep pool order.
pub fn rank<'a>(
    pool: &[&'a str],
    used: &HashSet<&str>,
    tables: &FrequencyTables,
    weights: &Weights,
    n: usize,
) -> Vec<ScoredWord<'a>> {
    let mut scored = score_unused(pool, used, tables, weights);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(n);
    scored
}
