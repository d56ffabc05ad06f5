//! Scoring guesses against a target word.

use std::{
    fmt::Display,
    ops::{Deref, Index},
};

use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GuessError, Result};

/// A validated word: ASCII letters of a fixed length, stored lowercase.
///
/// Construction is the only place letter-level validation happens; everything
/// downstream can assume a [`Word`] is well formed.
///
/// # Examples
///
/// ```rust
/// # use std::ops::Deref;
/// # use sixle::Word;
/// #
/// let word = Word::new("Garden", 6)?;
/// assert_eq!(word.deref(), "garden");
///
/// assert!(Word::new("cat", 6).is_err());
/// assert!(Word::new("g4rden", 6).is_err());
/// #
/// # Ok::<_, sixle::SixleError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Word {
    inner: String,
}

impl Word {
    /// Creates a new [`Word`] from a candidate string.
    ///
    /// The candidate is lowercased. Returns an error if it is not exactly
    /// `len` characters long or contains anything other than ASCII letters.
    pub fn new(candidate: &str, len: usize) -> Result<Self> {
        let actual = candidate.chars().count();
        if actual != len {
            return Err(GuessError::InvalidLength {
                expected: len,
                actual,
            }
            .into());
        }

        if !candidate.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GuessError::NotAWord(candidate.to_string()).into());
        }

        Ok(Word {
            inner: candidate.to_ascii_lowercase(),
        })
    }

    /// Returns the word length in letters.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the word has no letters.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Per-letter feedback for one position of a guess.
///
/// The declaration order doubles as the strengthening lattice used for
/// keyboard hints: `Absent < Present < Correct`, so merging two
/// classifications for the same letter is [`Ord::max`]. A letter can only
/// ever move up the lattice.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Classification {
    /// The target does not contain this letter, or every copy of it is
    /// already accounted for elsewhere in the guess.
    Absent,

    /// The target contains this letter, but not at this position.
    Present,

    /// The letter is at exactly this position in the target.
    Correct,
}

/// The per-letter classifications produced by scoring one guess.
///
/// Immutable once produced; one [`Classification`] per letter of the guess,
/// in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct GuessResult {
    marks: Box<[Classification]>,
}

impl GuessResult {
    pub(crate) fn new(marks: Vec<Classification>) -> Self {
        GuessResult {
            marks: marks.into_boxed_slice(),
        }
    }

    /// Returns the classifications, one per letter of the guess.
    pub fn marks(&self) -> &[Classification] {
        &self.marks
    }

    /// Returns true if every letter was classified [`Classification::Correct`].
    pub fn is_all_correct(&self) -> bool {
        self.marks.iter().all(|&m| m == Classification::Correct)
    }

    /// Returns the number of classified letters.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns true if no letters were classified.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

impl Index<usize> for GuessResult {
    type Output = Classification;

    fn index(&self, index: usize) -> &Self::Output {
        &self.marks[index]
    }
}

/// Scores `guess` against `target` and returns one [`Classification`] per
/// letter.
///
/// The score is computed in two passes so that duplicate letters are never
/// over-credited:
///
/// 1. Build a multiset of the target's letters, then mark every position
///    where guess and target agree as [`Correct`](Classification::Correct),
///    consuming that letter's count.
/// 2. Walk the remaining positions in order and mark a letter
///    [`Present`](Classification::Present) only while its count holds out;
///    everything else is [`Absent`](Classification::Absent).
///
/// Running the correctness pass to completion first matters: a duplicated
/// letter early in the guess must not consume the count that a later,
/// exactly-placed copy of the same letter is entitled to.
///
/// Both words must be the same length. A mismatch is a caller bug and fails
/// with [`GuessError::LengthMismatch`] (panicking in debug builds).
///
/// # Examples
///
/// ```rust
/// use sixle::{score, Classification::*, Word};
///
/// let target = Word::new("mammal", 6)?;
/// let guess = Word::new("llamas", 6)?;
///
/// // The target has one l and two a's, so the guess's second l and third a
/// // get no credit.
/// assert_eq!(
///     score(&guess, &target)?.marks(),
///     [Present, Absent, Present, Correct, Correct, Absent]
/// );
/// #
/// # Ok::<_, sixle::SixleError>(())
/// ```
pub fn score(guess: &Word, target: &Word) -> Result<GuessResult> {
    if guess.len() != target.len() {
        debug_assert!(
            false,
            "scored a {}-letter guess against a {}-letter target",
            guess.len(),
            target.len()
        );
        return Err(GuessError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        }
        .into());
    }

    let mut remaining = target.chars().counts();
    let mut marks = vec![Classification::Absent; guess.len()];

    // Correct letters consume their copy first so a duplicate elsewhere in
    // the guess cannot claim it as Present.
    for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
        if g == t {
            marks[i] = Classification::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count -= 1;
            }
        }
    }

    for (i, g) in guess.chars().enumerate() {
        if marks[i] == Classification::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g) {
            if *count > 0 {
                *count -= 1;
                marks[i] = Classification::Present;
            }
        }
    }

    Ok(GuessResult::new(marks))
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::SixleError;

    fn str_to_marks(input: &str) -> Vec<Classification> {
        input
            .chars()
            .map(|c| match c {
                'c' => Classification::Correct,
                'p' => Classification::Present,
                _ => Classification::Absent,
            })
            .collect()
    }

    macro_rules! score_test {
        ($fn_name:ident[$target:expr => $( [$guess:expr, $res:expr] );*]) => {
            #[test]
            fn $fn_name() -> Result<(), SixleError> {
                let target = Word::new($target, $target.len())?;
                $(
                    let guess = Word::new($guess, target.len())?;
                    assert_eq!(
                        score(&guess, &target)?.marks(),
                        str_to_marks($res).as_slice(),
                        "{} vs {}",
                        $guess,
                        $target,
                    );
                )*
                Ok(())
            }
        };
    }

    score_test! { exact_match ["garden" =>
        ["garden", "cccccc"]]
    }

    score_test! { no_overlap ["garden" =>
        ["misfit", "aaaaaa"]]
    }

    score_test! { shuffled_letters ["garden" =>
        ["grands", "cppppa"]]
    }

    // The target has one l and two a's; the guess may not earn more credit
    // for a letter than the target holds copies of it.
    score_test! { repeated_guess_letters ["mammal" =>
        ["llamas", "papcca"]]
    }

    // The n at the end of the guess sits on the target's n, so the n at the
    // front must come up Absent rather than stealing the count as Present.
    score_test! { exact_copy_wins_the_count ["garden" =>
        ["nation", "acaaac"]]
    }

    score_test! { one_copy_in_target ["silver" =>
        ["assess", "apapaa"]]
    }

    score_test! { doubled_target_letters ["cotton" =>
        ["bottle", "acccaa"]]
    }

    score_test! { all_present_no_exact ["banana" =>
        ["ananas", "pppppa"]]
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "letter guess against")]
    fn length_mismatch_is_a_caller_bug() {
        let target = Word::new("garden", 6).unwrap();
        let guess = Word::new("cat", 3).unwrap();
        let _ = score(&guess, &target);
    }

    proptest! {
        #[test]
        fn scoring_own_target_is_all_correct(w in "[a-z]{6}") {
            let word = Word::new(&w, 6).unwrap();
            prop_assert!(score(&word, &word).unwrap().is_all_correct());
        }

        #[test]
        fn correct_exactly_where_letters_match(g in "[a-z]{6}", t in "[a-z]{6}") {
            let guess = Word::new(&g, 6).unwrap();
            let target = Word::new(&t, 6).unwrap();
            let result = score(&guess, &target).unwrap();

            for (i, (gc, tc)) in g.chars().zip(t.chars()).enumerate() {
                prop_assert_eq!(result[i] == Classification::Correct, gc == tc);
            }
        }

        #[test]
        fn credit_never_exceeds_target_count(g in "[a-z]{6}", t in "[a-z]{6}") {
            let guess = Word::new(&g, 6).unwrap();
            let target = Word::new(&t, 6).unwrap();
            let result = score(&guess, &target).unwrap();

            for letter in b'a'..=b'z' {
                let letter = letter as char;
                let credited = g
                    .chars()
                    .zip(result.marks())
                    .filter(|&(c, &m)| c == letter && m != Classification::Absent)
                    .count();
                let available = t.chars().filter(|&c| c == letter).count();
                prop_assert!(credited <= available);
            }
        }
    }
}
