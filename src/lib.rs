#![doc = include_str!("../README.md")]

// Required to rename serde
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

use thiserror::Error;

pub mod letters;
pub use letters::LetterBoard;

pub mod round;
pub use round::{GameConfig, RevealTicket, Round, Snapshot, State};

pub mod score;
pub use score::{score, Classification, GuessResult, Word};

pub mod source;
pub use source::{DictionaryLookup, FallbackPolicy, LookupError, WordListSource, WordSource};

pub mod words;

#[cfg(test)]
pub(crate) mod mock;

/// The result type used throughout `sixle`.
pub type Result<T, E = SixleError> = std::result::Result<T, E>;

/// The errors that `sixle` can produce.
#[derive(Debug, Error)]
pub enum SixleError {
    #[error("guess rejected")]
    Guess {
        #[from]
        kind: GuessError,
    },

    #[error("word source failed")]
    Source {
        #[from]
        kind: SourceError,
    },
}

/// Reasons a guess submission can be turned away.
///
/// Every variant leaves the round exactly as it was; the player corrects the
/// candidate (or resets the round) and tries again.
#[derive(Debug, Error)]
pub enum GuessError {
    /// The candidate is not the configured word length.
    #[error("guesses must be {expected} letters, but got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Neither the local wordlist nor the dictionary recognized the candidate.
    #[error("\"{0}\" is not a recognized word")]
    NotAWord(String),

    /// A guess and target of different lengths reached the scoring engine.
    /// This indicates a bug in the caller, not bad player input.
    #[error("guess is {guess} letters but the target is {target}")]
    LengthMismatch { guess: usize, target: usize },

    /// The previous guess is still being revealed.
    #[error("the last guess is still being revealed")]
    RevealPending,

    /// The round has already been won or lost.
    #[error("the round is over; reset to play again")]
    RoundOver,
}

/// Errors produced while drawing a target word.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("the target wordlist is empty")]
    EmptyWordList,

    /// The source drew a target that does not fit the round configuration.
    #[error("the source drew a {actual}-letter target but the round needs {expected}")]
    TargetLength { expected: usize, actual: usize },
}
