//! Full games through the public API

use expanded_wordle::core::{KeyboardStatus, LetterStatus, Word, WordLength};
use expanded_wordle::game::{GameStatus, GuessError, MAX_GUESSES, Session};
use expanded_wordle::wordlists::loader::load_embedded;
use expanded_wordle::wordlists::{Dictionary, WordSource, load_or_embedded};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

fn five() -> Dictionary {
    load_embedded(WordLength::Five).unwrap()
}

#[test]
fn three_guess_win() {
    let mut session = Session::with_target(five(), "crane").unwrap();
    let full = session.remaining();

    let first = session.submit_guess("adieu").unwrap();
    let second = session.submit_guess("story").unwrap();
    let third = session.submit_guess("crane").unwrap();

    assert!(first.remaining <= full);
    assert!(second.remaining <= first.remaining);
    assert_eq!(third.remaining, 1);
    assert!(third.is_win);
    assert!(third.feedback.is_perfect());
    assert_eq!(third.guess_number, 3);

    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.submit_guess("slate"), Err(GuessError::GameOver));
    assert_eq!(session.record().len(), 3);
}

#[test]
fn feedback_handles_repeated_letters() {
    let mut session = Session::with_target(five(), "alloy").unwrap();
    let outcome = session.submit_guess("lolly").unwrap();

    assert_eq!(
        outcome.feedback.statuses(),
        &[
            LetterStatus::Yellow,
            LetterStatus::Yellow,
            LetterStatus::Green,
            LetterStatus::Gray,
            LetterStatus::Green,
        ]
    );
    // The gray L must not rule out the target
    assert!(session.candidates().iter().any(|w| w.text() == "ALLOY"));
}

#[test]
fn rejected_guesses_leave_no_trace() {
    let mut session = Session::with_target(five(), "crane").unwrap();
    session.submit_guess("slate").unwrap();
    let keyboard = session.keyboard();
    let remaining = session.remaining();

    for bad in ["", "cat", "crates", "zzzzz", "cr-ne"] {
        assert!(session.submit_guess(bad).is_err(), "{bad} was accepted");
    }

    assert_eq!(session.record().len(), 1);
    assert_eq!(session.keyboard(), keyboard);
    assert_eq!(session.remaining(), remaining);
    assert_eq!(session.guesses_left(), MAX_GUESSES - 1);
}

#[test]
fn keyboard_never_downgrades() {
    let mut session = Session::with_target(five(), "crane").unwrap();
    let mut previous = KeyboardStatus::new();

    for guess in ["slate", "adieu", "story", "grate"] {
        let outcome = session.submit_guess(guess).unwrap();
        for letter in b'A'..=b'Z' {
            if let Some(before) = previous.status(letter) {
                let after = outcome.keyboard.status(letter);
                assert!(after >= Some(before), "{} went from {before:?} to {after:?}", char::from(letter));
            }
        }
        previous = outcome.keyboard;
    }
}

#[test]
fn target_is_always_a_candidate() {
    let dictionary = five();
    let words: Vec<Word> = dictionary.words().iter().step_by(37).cloned().collect();

    for target in &words {
        let mut session = Session::with_target(dictionary.clone(), target.text()).unwrap();
        for guess in ["crane", "story", "light"] {
            if session.is_over() {
                break;
            }
            let outcome = session.submit_guess(guess).unwrap();
            assert!(outcome.remaining >= 1);
            assert!(session.candidates().contains(&target));
        }
    }
}

#[test]
fn restart_resets_to_full_dictionary() {
    let mut session = Session::with_rng(five(), StdRng::seed_from_u64(42));
    session.submit_guess("adieu").unwrap();
    session.restart();

    assert!(session.record().is_empty());
    assert_eq!(session.remaining(), session.dictionary().len());
    assert_eq!(session.keyboard(), KeyboardStatus::new());
    assert!(session.dictionary().contains(session.target()));
}

#[test]
fn seeded_sessions_pick_the_same_target() {
    let a = Session::with_rng(five(), StdRng::seed_from_u64(7));
    let b = Session::with_rng(five(), StdRng::seed_from_u64(7));
    assert_eq!(a.target(), b.target());
}

#[test]
fn every_length_plays() {
    for length in WordLength::ALL {
        let dictionary = load_embedded(length).unwrap();
        let mut session = Session::with_rng(dictionary, StdRng::seed_from_u64(1));
        let target = session.target().text().to_string();

        let outcome = session.submit_guess(&target).unwrap();
        assert!(outcome.is_win);
        assert_eq!(outcome.feedback.len(), length.letters());
    }
}

#[test]
fn missing_directory_falls_back_to_embedded() {
    let source = WordSource::Directory(PathBuf::from("/nonexistent/expanded_wordle"));
    let dictionary = load_or_embedded(&source, WordLength::Six).unwrap();
    assert_eq!(dictionary.len(), load_embedded(WordLength::Six).unwrap().len());
}
