//! # Wordle Sim
//!
//! A Wordle simulator driven by corpus statistics.
//!
//! Each round the simulator scores every remaining candidate from letter,
//! bigram, trigram and positional frequencies, guesses the best one, and
//! narrows the candidate pool with the feedback until the target is found or
//! the guess budget runs out.

pub mod constraints;
pub mod corpus;
pub mod error;
pub mod feedback;
pub mod report;
pub mod scorer;
pub mod simulation;
pub mod stats;

pub use constraints::Constraints;
pub use corpus::{check_word, Corpus};
pub use error::{Error, Result};
pub use feedback::{classify, classify_with, Clues, Feedback, FeedbackRule};
pub use report::{RunReport, Summary};
pub use scorer::{best_guess, rank, score, ScoredWord, Weights};
pub use simulation::{Game, GuessRecord, SimulationConfig, SimulationResult, Simulator, Step};
pub use stats::FrequencyTables;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Guess budget for a single simulation run
pub const MAX_ATTEMPTS: usize = 12;
