//! The guessing loop.
//!
//! A [`Simulator`] holds what every run shares (the corpus, its frequency
//! tables and the configuration) and hands out one [`Game`] per target. A
//! game owns its candidate pool, constraints, used guesses and log, so any
//! number of games can run side by side over the same simulator.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constraints::Constraints;
use crate::corpus::{check_word, Corpus};
use crate::error::Result;
use crate::feedback::{classify_with, FeedbackRule};
use crate::scorer::{best_guess, rank, ScoredWord, Weights};
use crate::stats::FrequencyTables;
use crate::MAX_ATTEMPTS;

fn default_max_attempts() -> usize {
    MAX_ATTEMPTS
}

/// Settings for a batch of simulations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub weights: Weights,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default)]
    pub feedback_rule: FeedbackRule,
}

impl SimulationConfig {
    pub fn new(weights: Weights) -> Self {
        Self {
            weights,
            max_attempts: MAX_ATTEMPTS,
            feedback_rule: FeedbackRule::default(),
        }
    }

    /// Load a JSON config such as
    /// `{"weights": {"letter": 1.0, "bigram": 0.5, "trigram": 0.25, "position": 0.75, "repeat_penalty": 0.9}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// One guess in the log, with the pool size it was chosen from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: String,
    pub remaining: usize,
}

/// How a simulation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationResult {
    Solved { attempts: usize, log: Vec<GuessRecord> },
    Exhausted { log: Vec<GuessRecord> },
}

impl SimulationResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SimulationResult::Solved { .. })
    }

    /// Number of guesses it took, if the target was found
    pub fn attempts(&self) -> Option<usize> {
        match self {
            SimulationResult::Solved { attempts, .. } => Some(*attempts),
            SimulationResult::Exhausted { .. } => None,
        }
    }

    pub fn log(&self) -> &[GuessRecord] {
        match self {
            SimulationResult::Solved { log, .. } | SimulationResult::Exhausted { log } => log,
        }
    }
}

/// Outcome of a single [`Game::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Solved,
    Exhausted,
}

/// Shared, read-only state for simulating against one corpus.
#[derive(Debug, Clone)]
pub struct Simulator {
    corpus: Corpus,
    tables: FrequencyTables,
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(corpus: Corpus, config: SimulationConfig) -> Self {
        let tables = FrequencyTables::build(&corpus);
        Self {
            corpus,
            tables,
            config,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn tables(&self) -> &FrequencyTables {
        &self.tables
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Start a game. `target` must already be a valid word; see [`check_word`].
    pub fn game<'a>(&'a self, target: &'a str) -> Game<'a> {
        Game::new(self, target)
    }

    /// Play a full game against `target`.
    ///
    /// A target missing from the corpus is allowed and simply runs until the
    /// pool or the guess budget is exhausted.
    pub fn simulate(&self, target: &str) -> Result<SimulationResult> {
        check_word(target)?;
        Ok(self.game(target).run())
    }

    /// Simulate every target in parallel. Results come back in input order.
    pub fn simulate_all<S: AsRef<str> + Sync>(
        &self,
        targets: &[S],
    ) -> Result<Vec<(String, SimulationResult)>> {
        targets
            .par_iter()
            .map(|target| {
                let target = target.as_ref();
                self.simulate(target).map(|result| (target.to_string(), result))
            })
            .collect()
    }

    /// Best opening guesses over the whole corpus.
    pub fn top_openers(&self, n: usize) -> Vec<ScoredWord<'_>> {
        let pool: Vec<&str> = self.corpus.words().iter().map(String::as_str).collect();
        rank(&pool, &HashSet::new(), &self.tables, &self.config.weights, n)
    }
}

/// Mutable state of one simulation run.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    simulator: &'a Simulator,
    target: &'a str,
    pool: Vec<&'a str>,
    constraints: Constraints,
    used: HashSet<&'a str>,
    log: Vec<GuessRecord>,
    attempts: usize,
}

impl<'a> Game<'a> {
    pub fn new(simulator: &'a Simulator, target: &'a str) -> Self {
        Self {
            simulator,
            target,
            pool: simulator.corpus.words().iter().map(String::as_str).collect(),
            constraints: Constraints::new(),
            used: HashSet::new(),
            log: Vec::new(),
            attempts: 0,
        }
    }

    pub fn target(&self) -> &str {
        self.target
    }

    pub fn pool(&self) -> &[&'a str] {
        &self.pool
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn log(&self) -> &[GuessRecord] {
        &self.log
    }

    /// Make one guess: select, record, compare, then narrow the pool.
    pub fn step(&mut self) -> Step {
        let simulator = self.simulator;
        let config = &simulator.config;

        if self.attempts >= config.max_attempts {
            info!(
                "gave up on {:?} after {} attempts",
                self.target, config.max_attempts
            );
            return Step::Exhausted;
        }
        if self.pool.is_empty() {
            info!("{:?}: no possible words left after filtering", self.target);
            return Step::Exhausted;
        }

        let best = match best_guess(
            &self.pool,
            &self.used,
            &simulator.tables,
            &config.weights,
        ) {
            Some(best) => best,
            None => {
                info!("{:?}: no new candidates after filtering", self.target);
                return Step::Exhausted;
            }
        };
        let guess = best.word;

        self.attempts += 1;
        self.log.push(GuessRecord {
            guess: guess.to_string(),
            remaining: self.pool.len(),
        });
        self.used.insert(guess);
        debug!(
            "{:?}: guess {} is {:?} (score {:.4}, {} candidates)",
            self.target,
            self.attempts,
            guess,
            best.score,
            self.pool.len()
        );

        if guess == self.target {
            info!("{:?}: solved in {} attempts", self.target, self.attempts);
            return Step::Solved;
        }

        let clues = classify_with(config.feedback_rule, guess, self.target);
        self.constraints.absorb(&clues);
        self.pool = self.constraints.filter(&self.pool);
        debug!(
            "{:?}: {} {} leaves {} candidates",
            self.target,
            guess,
            clues,
            self.pool.len()
        );

        Step::Continue
    }

    /// Step until the game ends.
    pub fn run(mut self) -> SimulationResult {
        loop {
            match self.step() {
                Step::Continue => {}
                Step::Solved => {
                    return SimulationResult::Solved {
                        attempts: self.attempts,
                        log: self.log,
                    }
                }
                Step::Exhausted => return SimulationResult::Exhausted { log: self.log },
            }
        }
    }
}
