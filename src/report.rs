//! Shaping simulation results for reporting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::simulation::{GuessRecord, SimulationResult};

/// One simulated target, flattened for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub word: String,
    pub solved: bool,
    pub attempts: Option<usize>,
    pub guess_log: Vec<GuessRecord>,
}

impl RunReport {
    pub fn new(word: &str, result: &SimulationResult) -> Self {
        Self {
            word: word.to_string(),
            solved: result.is_solved(),
            attempts: result.attempts(),
            guess_log: result.log().to_vec(),
        }
    }

    /// Guesses actually made, whether or not the target was found
    pub fn guesses(&self) -> usize {
        self.guess_log.len()
    }
}

/// Aggregate statistics over a batch of runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub tested: usize,
    pub solved: usize,
    pub average_attempts: Option<f64>,
    pub min_attempts: Option<usize>,
    pub max_attempts: Option<usize>,
    /// attempts -> number of targets solved in that many guesses
    pub distribution: BTreeMap<usize, usize>,
    pub failed: Vec<String>,
}

impl Summary {
    pub fn from_reports(reports: &[RunReport]) -> Self {
        let mut distribution = BTreeMap::new();
        let mut failed = Vec::new();
        let mut total = 0;

        for report in reports {
            match report.attempts {
                Some(attempts) => {
                    *distribution.entry(attempts).or_insert(0) += 1;
                    total += attempts;
                }
                None => failed.push(report.word.clone()),
            }
        }

        let solved = reports.len() - failed.len();
        Self {
            tested: reports.len(),
            solved,
            average_attempts: (solved > 0).then(|| total as f64 / solved as f64),
            min_attempts: distribution.keys().next().copied(),
            max_attempts: distribution.keys().next_back().copied(),
            distribution,
            failed,
        }
    }
}
