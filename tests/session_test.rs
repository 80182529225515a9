//! Tests for the game session orchestrator.

use std::fs;

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_hangman::{
    Difficulty, GameSession, LeaderboardEntry, Mode, Outcome, PlayerProfile, Rejection,
    SessionError, StaticSupplier,
};
use tempfile::TempDir;

fn profile(name: &str, level: u8) -> PlayerProfile {
    PlayerProfile::new(name, Difficulty::new(level).expect("valid level")).expect("valid name")
}

fn words(list: &[&str]) -> StaticSupplier {
    StaticSupplier::new(list.iter().copied(), Vec::<String>::new())
}

fn phrases(list: &[&str]) -> StaticSupplier {
    StaticSupplier::new(Vec::<String>::new(), list.iter().copied())
}

#[test]
fn test_word_win_scores_difficulty_and_persists() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("word_LB.json");

    let mut session = GameSession::with_rng(Mode::Words, &path, StdRng::seed_from_u64(5))
        .expect("session opens");
    session
        .start_round(profile("ann", 4), &words(&["cat"]))
        .expect("round starts");

    let report = session.submit_guess("CAT").expect("guess accepted");
    assert!(report.accepted && report.correct);
    assert_eq!(report.outcome, Outcome::Won);
    assert_eq!(report.reveal_pattern, "cat");
    assert_eq!(session.current_score(), 4);

    session.save_scores().expect("save");
    let reopened = GameSession::open(Mode::Words, &path).expect("reopen");
    assert_eq!(
        reopened.leaderboard(),
        vec![LeaderboardEntry::new("ann".to_string(), 4)]
    );
}

#[test]
fn test_phrase_win_scores_five_per_word() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = GameSession::with_rng(
        Mode::Phrases,
        dir.path().join("phrase_LB.json"),
        StdRng::seed_from_u64(5),
    )
    .expect("session opens");
    session
        .start_round(profile("bob", 1), &phrases(&["The Quick Fox"]))
        .expect("round starts");

    assert_eq!(
        session.submit_guess("fox").expect("guess").reveal_pattern,
        "___ _____ fox"
    );
    session.submit_guess("quick").expect("guess");
    let report = session.submit_guess("the").expect("guess");
    assert_eq!(report.outcome, Outcome::Won);
    assert_eq!(report.score, 15);
}

#[test]
fn test_loss_records_zero_and_blocks_guesses() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = GameSession::with_rng(
        Mode::Words,
        dir.path().join("lb.json"),
        StdRng::seed_from_u64(1),
    )
    .expect("session opens");
    session
        .start_round(profile("cid", 9), &words(&["zebra"]))
        .expect("round starts");

    let mut last = None;
    for raw in ["c", "d", "f", "g", "h", "i"] {
        last = Some(session.submit_guess(raw).expect("guess"));
    }
    let last = last.expect("at least one guess");
    assert_eq!(last.outcome, Outcome::Lost);
    assert_eq!(last.attempts_remaining, 0);
    assert_eq!(last.score, 0);

    assert!(matches!(
        session.submit_guess("z"),
        Err(SessionError::RoundOver(Outcome::Lost))
    ));
    assert_eq!(session.leaderboard().len(), 1);
    assert_eq!(*session.leaderboard()[0].score(), 0);
}

#[test]
fn test_repeated_and_invalid_do_not_spend_attempts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = GameSession::with_rng(
        Mode::Words,
        dir.path().join("lb.json"),
        StdRng::seed_from_u64(1),
    )
    .expect("session opens");
    session
        .start_round(profile("dee", 2), &words(&["otter"]))
        .expect("round starts");

    session.submit_guess("q").expect("guess");
    let repeated = session.submit_guess("Q").expect("guess");
    assert_eq!(repeated.rejection, Some(Rejection::Repeated));
    let invalid = session.submit_guess("!").expect("guess");
    assert!(matches!(invalid.rejection, Some(Rejection::Invalid(_))));
    assert_eq!(invalid.attempts_remaining, 5);
}

#[test]
fn test_corrupt_leaderboard_fails_session_open() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("lb.json");
    fs::write(&path, "this is not json").expect("write");

    let err = GameSession::open(Mode::Words, &path).unwrap_err();
    match err {
        SessionError::Leaderboard(e) => {
            assert!(e.is_corrupt());
            assert!(e.user_message().contains("leader board"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_modes_keep_separate_leaderboards() {
    let dir: TempDir = tempfile::tempdir().expect("temp dir");
    let word_path = dir.path().join("word_LB.json");
    let phrase_path = dir.path().join("phrase_LB.json");

    let mut word = GameSession::with_rng(Mode::Words, &word_path, StdRng::seed_from_u64(2))
        .expect("session opens");
    word.start_round(profile("ann", 3), &words(&["ox"]))
        .expect("round starts");
    word.submit_guess("ox").expect("guess");
    word.save_scores().expect("save");

    let phrase = GameSession::open(Mode::Phrases, &phrase_path).expect("session opens");
    assert!(phrase.leaderboard().is_empty());
    let word = GameSession::open(Mode::Words, &word_path).expect("session opens");
    assert_eq!(word.leaderboard().len(), 1);
}

#[test]
fn test_reset_round_after_finish() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut session = GameSession::with_rng(
        Mode::Words,
        dir.path().join("lb.json"),
        StdRng::seed_from_u64(3),
    )
    .expect("session opens");
    session
        .start_round(profile("eve", 6), &words(&["ox"]))
        .expect("round starts");
    session.submit_guess("ox").expect("guess");
    assert_eq!(session.current_score(), 6);

    session.reset_round().expect("reset");
    assert_eq!(session.current_score(), 0);
    let report = session.submit_guess("o").expect("guess");
    assert_eq!(report.outcome, Outcome::InProgress);
    assert_eq!(report.reveal_pattern, "o_");
}
