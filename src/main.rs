//! Wordle Sim CLI
//!
//! Runs the simulator over a word list read from disk.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use wordle_sim::{
    classify_with, Corpus, FeedbackRule, RunReport, SimulationConfig, Simulator, Summary, Weights,
};

#[derive(Parser)]
#[command(name = "wordle-sim", about = "Simulate statistics-driven Wordle games")]
struct Opts {
    /// Word list, one word per line
    #[arg(long)]
    words: PathBuf,

    /// JSON config; when given, the weight flags below are ignored
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 1.0)]
    letter: f64,
    #[arg(long, default_value_t = 0.5)]
    bigram: f64,
    #[arg(long, default_value_t = 0.25)]
    trigram: f64,
    #[arg(long, default_value_t = 0.75)]
    position: f64,
    #[arg(long, default_value_t = 0.9)]
    repeat_penalty: f64,

    #[arg(long)]
    max_attempts: Option<usize>,

    #[arg(long, value_enum)]
    feedback: Option<RuleArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play one game and print every guess
    Solve { target: String },
    /// Simulate many targets in parallel and summarize
    Bench {
        /// Only use the first N words of the list as targets
        #[arg(long)]
        limit: Option<usize>,
        /// Print per-word reports as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Show the best opening guesses
    Suggest {
        #[arg(short, default_value_t = 5)]
        n: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    Containment,
    LetterCount,
}

impl From<RuleArg> for FeedbackRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Containment => FeedbackRule::Containment,
            RuleArg::LetterCount => FeedbackRule::LetterCount,
        }
    }
}

impl Opts {
    fn simulation_config(&self) -> wordle_sim::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_path(path)?,
            None => SimulationConfig::new(Weights {
                letter: self.letter,
                bigram: self.bigram,
                trigram: self.trigram,
                position: self.position,
                repeat_penalty: self.repeat_penalty,
            }),
        };
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if let Some(rule) = self.feedback {
            config.feedback_rule = rule.into();
        }
        Ok(config)
    }
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut stderr = io::stderr();
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                let _ = write!(stderr, "\r{} {}", frames[i % frames.len()], message);
                let _ = stderr.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            let _ = write!(stderr, "\r{}\r", " ".repeat(message.len() + 3));
            let _ = stderr.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn solve(simulator: &Simulator, target: &str) -> wordle_sim::Result<()> {
    let rule = simulator.config().feedback_rule;
    let result = simulator.simulate(target)?;

    println!("Solving for: {}", target.to_uppercase());
    println!();
    for (i, record) in result.log().iter().enumerate() {
        println!(
            "Guess {}: {} → {}  ({} candidates)",
            i + 1,
            record.guess.to_uppercase(),
            classify_with(rule, &record.guess, target),
            record.remaining
        );
    }
    println!();
    match result.attempts() {
        Some(attempts) => println!("Solved in {} guesses.", attempts),
        None => println!("Failed after {} guesses.", result.log().len()),
    }
    Ok(())
}

fn bench(
    simulator: &Simulator,
    limit: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let words = simulator.corpus().words();
    let targets = &words[..limit.unwrap_or(words.len()).min(words.len())];
    info!("simulating {} targets", targets.len());

    let spinner = (!json).then(|| Spinner::new("Simulating..."));
    let start = Instant::now();
    let results = simulator.simulate_all(targets)?;
    let elapsed = start.elapsed();
    if let Some(spinner) = spinner {
        spinner.stop();
    }

    let reports: Vec<RunReport> = results
        .iter()
        .map(|(word, result)| RunReport::new(word, result))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let summary = Summary::from_reports(&reports);
    println!("Results:");
    println!("{}", "=".repeat(40));
    println!("Words tested: {}", summary.tested);
    println!("Solved: {}", summary.solved);
    if let (Some(avg), Some(min), Some(max)) = (
        summary.average_attempts,
        summary.min_attempts,
        summary.max_attempts,
    ) {
        println!("Average attempts: {:.2}", avg);
        println!("Min attempts: {}", min);
        println!("Max attempts: {}", max);
        println!();
        println!("Attempt distribution:");
        for (attempts, count) in &summary.distribution {
            let bar = "█".repeat((*count * 40 / summary.solved).max(1));
            println!("  {:>2} guesses: {:>5} {}", attempts, count, bar);
        }
    }
    if !summary.failed.is_empty() {
        println!();
        println!("{} words failed:", summary.failed.len());
        for word in &summary.failed {
            println!("  - {}", word);
        }
    }
    println!();
    println!("Time elapsed: {:.2?}", elapsed);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let opts = Opts::parse();

    let corpus = Corpus::from_path(&opts.words)?;
    info!("loaded {} words from {}", corpus.len(), opts.words.display());
    let simulator = Simulator::new(corpus, opts.simulation_config()?);

    match &opts.command {
        Command::Solve { target } => solve(&simulator, &target.to_lowercase())?,
        Command::Bench { limit, json } => bench(&simulator, *limit, *json)?,
        Command::Suggest { n } => {
            println!("{:>4} {:>8} {:>8}", "#", "Word", "Score");
            println!("{}", "-".repeat(22));
            for (i, scored) in simulator.top_openers(*n).iter().enumerate() {
                println!(
                    "{:>4} {:>8} {:>8.4}",
                    i + 1,
                    scored.word.to_uppercase(),
                    scored.score
                );
            }
        }
    }
    Ok(())
}
