//! Feedback calculation for simulated guesses.
//!
//! This module compares a guess with the target and marks every position as
//! green, yellow or gray.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Letter occurs in the target, but not here (yellow)
    Present,
    /// Letter not in target (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }
}

/// How a letter that is not an exact match gets classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackRule {
    /// Present whenever the target contains the letter anywhere. Each
    /// occurrence in the guess is tested on its own, so a doubled guess
    /// letter can earn two yellows from a single target letter.
    #[default]
    Containment,
    /// Present only if the guess does not use the letter more often than
    /// the target does; otherwise absent.
    LetterCount,
}

/// The marks for one guess, kept alongside the guessed letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clues {
    letters: [u8; WORD_LENGTH],
    marks: [Feedback; WORD_LENGTH],
}

impl Clues {
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    pub fn marks(&self) -> &[Feedback; WORD_LENGTH] {
        &self.marks
    }

    /// `(position, letter, mark)` for every position of the guess.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8, Feedback)> + '_ {
        self.letters
            .iter()
            .zip(self.marks.iter())
            .enumerate()
            .map(|(i, (&letter, &mark))| (i, letter, mark))
    }

    /// Check if every position is green
    pub fn is_win(&self) -> bool {
        self.marks.iter().all(|&m| m == Feedback::Correct)
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.marks.iter().map(|f| f.to_char()).collect()
    }
}

impl fmt::Display for Clues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Classify `guess` against `target` with the containment rule.
pub fn classify(guess: &str, target: &str) -> Clues {
    classify_with(FeedbackRule::Containment, guess, target)
}

/// Classify `guess` against `target`, position by position.
///
/// Both words must be [`WORD_LENGTH`] bytes long.
pub fn classify_with(rule: FeedbackRule, guess: &str, target: &str) -> Clues {
    let guess_bytes = guess.as_bytes();
    let target_bytes = target.as_bytes();

    debug_assert_eq!(guess_bytes.len(), WORD_LENGTH);
    debug_assert_eq!(target_bytes.len(), WORD_LENGTH);

    let mut letters = [0u8; WORD_LENGTH];
    let mut marks = [Feedback::Absent; WORD_LENGTH];

    for i in 0..WORD_LENGTH {
        let g = guess_bytes[i];
        letters[i] = g;
        marks[i] = if g == target_bytes[i] {
            Feedback::Correct
        } else if target_bytes.contains(&g) {
            match rule {
                FeedbackRule::Containment => Feedback::Present,
                FeedbackRule::LetterCount => {
                    if count(guess_bytes, g) <= count(target_bytes, g) {
                        Feedback::Present
                    } else {
                        Feedback::Absent
                    }
                }
            }
        } else {
            Feedback::Absent
        };
    }

    Clues { letters, marks }
}

fn count(word: &[u8], letter: u8) -> usize {
    word.iter().filter(|&&b| b == letter).count()
}
