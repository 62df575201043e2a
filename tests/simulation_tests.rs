use wordle_sim::{
    Corpus, Error, FeedbackRule, GuessRecord, SimulationConfig, SimulationResult, Simulator, Step,
    Weights, MAX_ATTEMPTS,
};

fn get_test_words() -> Vec<String> {
    vec![
        "crane".to_string(),
        "slate".to_string(),
        "trace".to_string(),
        "crate".to_string(),
        "raise".to_string(),
        "arise".to_string(),
        "stare".to_string(),
        "roast".to_string(),
        "toast".to_string(),
        "beast".to_string(),
    ]
}

fn weights() -> Weights {
    Weights {
        letter: 1.0,
        bigram: 0.5,
        trigram: 0.25,
        position: 0.75,
        repeat_penalty: 0.9,
    }
}

fn simulator(words: Vec<String>) -> Simulator {
    Simulator::new(Corpus::new(words).unwrap(), SimulationConfig::new(weights()))
}

fn apple_simulator() -> Simulator {
    simulator(vec![
        "apple".to_string(),
        "angle".to_string(),
        "table".to_string(),
    ])
}

fn record(guess: &str, remaining: usize) -> GuessRecord {
    GuessRecord {
        guess: guess.to_string(),
        remaining,
    }
}

#[test]
fn test_apple_example() {
    let sim = apple_simulator();
    let result = sim.simulate("apple").unwrap();

    assert_eq!(
        result,
        SimulationResult::Solved {
            attempts: 2,
            log: vec![record("angle", 3), record("apple", 1)],
        }
    );
}

#[test]
fn test_first_guess_solves() {
    let sim = apple_simulator();
    let result = sim.simulate("angle").unwrap();
    assert_eq!(result.attempts(), Some(1));
    assert_eq!(result.log(), &[record("angle", 3)]);
}

#[test]
fn test_target_missing_from_corpus() {
    let sim = apple_simulator();
    let result = sim.simulate("zzzzz").unwrap();

    assert!(!result.is_solved());
    assert_eq!(result.attempts(), None);
    assert_eq!(result, SimulationResult::Exhausted {
        log: vec![record("angle", 3)],
    });
}

#[test]
fn test_missing_target_stays_within_budget() {
    let sim = simulator(get_test_words());
    for target in ["fuzzy", "crest", "beats"] {
        let result = sim.simulate(target).unwrap();
        assert!(!result.is_solved(), "{} is not in the list", target);
        assert!(result.log().len() <= MAX_ATTEMPTS);
    }
}

#[test]
fn test_attempt_cap() {
    let mut config = SimulationConfig::new(weights());
    config.max_attempts = 1;
    let corpus = Corpus::new(vec!["apple".into(), "angle".into(), "table".into()]).unwrap();
    let sim = Simulator::new(corpus, config);

    let result = sim.simulate("apple").unwrap();
    assert_eq!(result, SimulationResult::Exhausted {
        log: vec![record("angle", 3)],
    });
}

#[test]
fn test_solve_various_targets() {
    let words = get_test_words();
    let sim = simulator(words.clone());

    for target in &words {
        let result = sim.simulate(target).unwrap();
        let attempts = result
            .attempts()
            .unwrap_or_else(|| panic!("Didn't win for target: {}", target));

        assert!(attempts <= words.len(), "Too many guesses for target: {}", target);
        assert_eq!(attempts, result.log().len());
        assert_eq!(&result.log().last().unwrap().guess, target);
    }
}

#[test]
fn test_log_never_repeats_a_guess() {
    let sim = simulator(get_test_words());
    for target in ["beast", "toast", "fuzzy"] {
        let result = sim.simulate(target).unwrap();
        let mut guesses: Vec<&str> = result.log().iter().map(|r| r.guess.as_str()).collect();
        let total = guesses.len();
        guesses.sort_unstable();
        guesses.dedup();
        assert_eq!(guesses.len(), total);
    }
}

#[test]
fn test_pool_sizes_never_grow() {
    let sim = simulator(get_test_words());
    let result = sim.simulate("toast").unwrap();
    let sizes: Vec<usize> = result.log().iter().map(|r| r.remaining).collect();
    assert_eq!(sizes[0], 10);
    for pair in sizes.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
}

#[test]
fn test_game_steps_are_monotonic() {
    let sim = simulator(get_test_words());
    let mut game = sim.game("beast");

    loop {
        let before = game.constraints().clone();
        let pool_before: Vec<&str> = game.pool().to_vec();

        let step = game.step();

        assert!(game.constraints().is_superset_of(&before));
        assert!(game.pool().len() <= pool_before.len());
        let mut it = pool_before.iter();
        assert!(game.pool().iter().all(|w| it.any(|p| p == w)));

        if step != Step::Continue {
            assert_eq!(step, Step::Solved);
            break;
        }
    }
    assert_eq!(game.attempts(), game.log().len());
}

#[test]
fn test_exhausted_game_stays_exhausted() {
    let sim = apple_simulator();
    let mut game = sim.game("zzzzz");
    assert_eq!(game.step(), Step::Continue);
    assert!(game.pool().is_empty());
    assert_eq!(game.step(), Step::Exhausted);
    assert_eq!(game.step(), Step::Exhausted);
    assert_eq!(game.log().len(), 1);
}

#[test]
fn test_invalid_target() {
    let sim = apple_simulator();
    assert!(matches!(
        sim.simulate("abc"),
        Err(Error::InvalidWord { .. })
    ));
    assert!(matches!(
        sim.simulate("Apple"),
        Err(Error::InvalidWord { .. })
    ));
}

#[test]
fn test_simulate_all_matches_sequential() {
    let words = get_test_words();
    let sim = simulator(words.clone());

    let batch = sim.simulate_all(&words).unwrap();
    assert_eq!(batch.len(), words.len());
    for ((word, result), target) in batch.iter().zip(&words) {
        assert_eq!(word, target);
        assert_eq!(result, &sim.simulate(target).unwrap());
    }
}

#[test]
fn test_simulate_all_rejects_bad_target() {
    let sim = apple_simulator();
    assert!(sim.simulate_all(&["apple", "toolong"]).is_err());
}

#[test]
fn test_letter_count_rule() {
    let mut config = SimulationConfig::new(weights());
    config.feedback_rule = FeedbackRule::LetterCount;
    let sim = Simulator::new(Corpus::new(get_test_words()).unwrap(), config);

    let result = sim.simulate("slate").unwrap();
    assert!(!result.log().is_empty());
    assert!(result.log().len() <= MAX_ATTEMPTS);
    if let Some(attempts) = result.attempts() {
        assert_eq!(result.log()[attempts - 1].guess, "slate");
    }

    // the counted rule can gray out a letter the target really has
    let corpus = Corpus::new(vec!["eexxx".into(), "abcde".into()]).unwrap();
    let mut config = SimulationConfig::new(Weights {
        letter: 0.0,
        bigram: 0.0,
        trigram: 0.0,
        position: 0.0,
        repeat_penalty: 1.0,
    });
    config.feedback_rule = FeedbackRule::LetterCount;
    let result = Simulator::new(corpus.clone(), config).simulate("abcde").unwrap();
    assert_eq!(result, SimulationResult::Exhausted {
        log: vec![record("eexxx", 2)],
    });

    config.feedback_rule = FeedbackRule::Containment;
    let result = Simulator::new(corpus, config).simulate("abcde").unwrap();
    assert_eq!(result.attempts(), Some(2));
}

#[test]
fn test_top_openers() {
    let sim = apple_simulator();
    let top = sim.top_openers(2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].word, "angle");
}

#[test]
fn test_config_from_json() {
    let config = SimulationConfig::from_json(
        r#"{"weights": {"letter": 1.0, "bigram": 0.5, "trigram": 0.25, "position": 0.75, "repeat_penalty": 0.9}}"#,
    )
    .unwrap();
    assert_eq!(config, SimulationConfig::new(weights()));
    assert_eq!(config.max_attempts, MAX_ATTEMPTS);
    assert_eq!(config.feedback_rule, FeedbackRule::Containment);

    let config = SimulationConfig::from_json(
        r#"{"weights": {"letter": 1, "bigram": 0, "trigram": 0, "position": 0, "repeat_penalty": 1},
            "max_attempts": 6, "feedback_rule": "letter-count"}"#,
    )
    .unwrap();
    assert_eq!(config.max_attempts, 6);
    assert_eq!(config.feedback_rule, FeedbackRule::LetterCount);
}

#[test]
fn test_config_requires_weights() {
    assert!(matches!(
        SimulationConfig::from_json(r#"{"max_attempts": 6}"#),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        SimulationConfig::from_json(r#"{"weights": {"letter": 1.0}}"#),
        Err(Error::Config(_))
    ));
}
