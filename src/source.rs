//! Word sources: target selection and guess validation.

use std::{collections::HashSet, fmt::Debug};

use rand::seq::SliceRandom;
use thiserror::Error;

use crate::{score::Word, words, Result, SourceError};

/// Supplies target words and vouches for guess candidates.
///
/// [`Round`](crate::Round) treats its word source as its only collaborator:
/// the round never performs I/O itself, so anything slow or fallible about
/// producing words lives behind this trait.
pub trait WordSource {
    /// Draws the next target word.
    fn draw_target(&mut self) -> Result<Word>;

    /// Returns true if `candidate` is a recognized word.
    ///
    /// Implementations may consult a remote dictionary. Whether an
    /// unanswerable lookup counts for or against the candidate is the
    /// source's policy, not the round's; see [`FallbackPolicy`].
    fn is_valid_guess(&self, candidate: &str) -> bool;
}

/// A remote (or otherwise fallible) dictionary membership check.
///
/// This is the seam that keeps network glue out of the engine. Implement it
/// over whatever client the application uses and hand it to
/// [`WordListSource::lookup()`]; tests inject deterministic in-memory
/// implementations instead.
pub trait DictionaryLookup: Debug {
    /// Checks whether `candidate` is a word this dictionary knows.
    fn lookup(&self, candidate: &str) -> Result<bool, LookupError>;
}

/// A dictionary lookup that could not produce an answer.
#[derive(Debug, Error)]
#[error("dictionary lookup failed: {reason}")]
pub struct LookupError {
    reason: String,
}

impl LookupError {
    /// Creates a new error from anything that can become a message.
    pub fn new(reason: impl Into<String>) -> Self {
        LookupError {
            reason: reason.into(),
        }
    }
}

/// What to do with a guess when the dictionary lookup fails.
///
/// A failed lookup means the candidate could be neither confirmed nor
/// denied. `Reject` treats it as unrecognized; `Allow` gives the player the
/// benefit of the doubt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FallbackPolicy {
    /// Treat the candidate as not a word.
    Reject,

    /// Accept the candidate.
    Allow,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        FallbackPolicy::Reject
    }
}

/// A [`WordSource`] backed by in-memory wordlists.
///
/// Targets are drawn at random without repetition; once every target has
/// been played the used set recycles. Guess validity checks the
/// accepted-guess list first and only then consults the optional
/// [`DictionaryLookup`], applying the [`FallbackPolicy`] when the lookup
/// itself fails.
///
/// Configuration methods consume the existing source and return a new one.
///
/// # Examples
///
/// ```rust
/// use sixle::{FallbackPolicy, WordListSource, WordSource};
///
/// let mut source = WordListSource::new().fallback_policy(FallbackPolicy::Reject);
///
/// let target = source.draw_target()?;
/// assert_eq!(target.len(), 6);
/// assert!(source.is_valid_guess("garden"));
/// assert!(!source.is_valid_guess("zzzzzz"));
/// #
/// # Ok::<_, sixle::SixleError>(())
/// ```
#[derive(Debug)]
pub struct WordListSource {
    targets: &'static [&'static str],
    accepted: &'static [&'static str],
    used: HashSet<&'static str>,
    lookup: Option<Box<dyn DictionaryLookup>>,
    policy: FallbackPolicy,
}

impl WordListSource {
    /// Creates a source over the embedded six-letter lists.
    pub fn new() -> Self {
        Self::with_lists(&words::TARGETS, &words::GUESSES)
    }

    /// Creates a source over custom lists.
    ///
    /// Both lists must be sorted, since validity checks binary search them,
    /// and `targets` should be a subset of `accepted` so that the target is
    /// always guessable.
    pub fn with_lists(
        targets: &'static [&'static str],
        accepted: &'static [&'static str],
    ) -> Self {
        debug_assert!(targets.windows(2).all(|pair| pair[0] <= pair[1]));
        debug_assert!(accepted.windows(2).all(|pair| pair[0] <= pair[1]));

        WordListSource {
            targets,
            accepted,
            used: HashSet::new(),
            lookup: None,
            policy: FallbackPolicy::default(),
        }
    }

    /// Adds a dictionary consulted when the accepted-guess list misses.
    pub fn lookup(self, lookup: Box<dyn DictionaryLookup>) -> Self {
        WordListSource {
            lookup: Some(lookup),
            ..self
        }
    }

    /// Sets the policy applied when the dictionary lookup fails.
    pub fn fallback_policy(self, policy: FallbackPolicy) -> Self {
        WordListSource { policy, ..self }
    }
}

impl Default for WordListSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for WordListSource {
    fn draw_target(&mut self) -> Result<Word> {
        if self.targets.is_empty() {
            return Err(SourceError::EmptyWordList.into());
        }

        // Every target gets played once before any repeats.
        let mut unused: Vec<&'static str> = self
            .targets
            .iter()
            .copied()
            .filter(|word| !self.used.contains(word))
            .collect();
        if unused.is_empty() {
            self.used.clear();
            unused = self.targets.to_vec();
        }

        let word = *unused
            .choose(&mut rand::thread_rng())
            .ok_or(SourceError::EmptyWordList)?;
        self.used.insert(word);

        Word::new(word, word.len())
    }

    fn is_valid_guess(&self, candidate: &str) -> bool {
        if self.accepted.binary_search(&candidate).is_ok() {
            return true;
        }

        match &self.lookup {
            Some(dictionary) => match dictionary.lookup(candidate) {
                Ok(known) => known,
                Err(_) => self.policy == FallbackPolicy::Allow,
            },
            None => false,
        }
    }
}
