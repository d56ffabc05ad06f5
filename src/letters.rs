//! Aggregate per-letter hints derived from scored guesses.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::score::{Classification, GuessResult, Word};

/// The best-known [`Classification`] for every letter guessed so far.
///
/// This is the state behind an on-screen keyboard's coloring. Recording a
/// scored guess folds each letter into the board with [`Ord::max`] over the
/// lattice `Absent < Present < Correct`, so a letter's state can only ever
/// strengthen. A letter that once showed `Correct` keeps showing `Correct`
/// even if a later guess uses it in a position where it scores `Absent`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LetterBoard {
    states: [Option<Classification>; 26],
}

impl LetterBoard {
    /// Creates a board with no letters recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one scored guess into the board.
    pub fn record(&mut self, guess: &Word, result: &GuessResult) {
        for (letter, mark) in guess.chars().zip(result.marks()) {
            if let Some(slot) = Self::slot(letter) {
                self.states[slot] = Some(match self.states[slot] {
                    Some(previous) => previous.max(*mark),
                    None => *mark,
                });
            }
        }
    }

    /// Returns the best-known state for `letter`, if it has been guessed.
    pub fn get(&self, letter: char) -> Option<Classification> {
        Self::slot(letter).and_then(|slot| self.states[slot])
    }

    /// Returns true if no letters have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.states.iter().all(Option::is_none)
    }

    pub(crate) fn clear(&mut self) {
        self.states = [None; 26];
    }

    fn slot(letter: char) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| letter as usize - 'a' as usize)
    }
}
