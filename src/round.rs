//! The round state machine: attempt history, keyboard hints, and terminal
//! conditions.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    letters::LetterBoard,
    score::{score, GuessResult, Word},
    source::{FallbackPolicy, WordSource},
    GuessError, Result, SourceError,
};

/// Number of letters in a word unless configured otherwise.
pub const DEFAULT_WORD_LEN: usize = 6;

/// Number of guesses in a round unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 7;

/// How long the presentation layer should spend revealing each letter.
pub const REVEAL_STEP: Duration = Duration::from_millis(300);

/// Extra delay after the last letter before the round settles.
pub const REVEAL_TAIL: Duration = Duration::from_millis(200);

/// Configuration accepted by [`Round`].
///
/// The fallback policy is carried here so that a single value can configure
/// a whole game; the round itself never validates words, so the policy is
/// meant to be handed to the word source (see
/// [`WordListSource::fallback_policy()`](crate::WordListSource::fallback_policy)).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of letters in every word of the round.
    pub word_len: usize,

    /// Maximum number of guesses before the round is lost.
    pub max_attempts: usize,

    /// What to do with a guess when the remote dictionary lookup fails.
    pub fallback: FallbackPolicy,
}

impl GameConfig {
    /// Creates the standard game: six-letter words, seven attempts, and
    /// guesses the dictionary cannot confirm are rejected.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            word_len: DEFAULT_WORD_LEN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fallback: FallbackPolicy::default(),
        }
    }
}

/// The phase a [`Round`] is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum State {
    /// Ready for the next guess.
    AwaitingGuess,

    /// The most recent guess is being surfaced to the player; no guesses
    /// are accepted until the reveal completes.
    Revealing,

    /// Terminal: a guess matched the target.
    Won,

    /// Terminal: the attempt budget is spent.
    Lost,
}

impl State {
    /// Returns true for [`State::Won`] and [`State::Lost`].
    pub fn is_terminal(self) -> bool {
        matches!(self, State::Won | State::Lost)
    }
}

/// Proof that a guess was accepted and is being revealed.
///
/// [`Round::submit()`] issues one of these; the presentation layer paces the
/// per-letter reveal for [`duration()`](RevealTicket::duration) and then
/// passes the ticket back to [`Round::reveal_complete()`]. A ticket issued
/// before a [`Round::reset()`] no longer matches the round and is ignored,
/// so a reveal timer that outlives its round can never fire against the
/// next one.
#[derive(Copy, Clone, Debug)]
#[must_use = "pass the ticket to Round::reveal_complete() once the reveal is paced out"]
pub struct RevealTicket {
    generation: u64,
    duration: Duration,
}

impl RevealTicket {
    /// Returns how long the reveal should take: one [`REVEAL_STEP`] per
    /// letter plus [`REVEAL_TAIL`].
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// A read-only view of a [`Round`] for the presentation layer.
///
/// The target is present only once the round is terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Snapshot {
    /// The machine state at the time of the snapshot.
    pub state: State,

    /// Every accepted guess, oldest first.
    pub guesses: Vec<Word>,

    /// One result per accepted guess, in the same order.
    pub results: Vec<GuessResult>,

    /// Aggregate keyboard hints.
    pub letters: LetterBoard,

    /// Guesses left before the round is lost.
    pub remaining_attempts: usize,

    /// The target word, revealed only after the round ends.
    pub target: Option<Word>,
}

/// One play session: a hidden target and a budget of guesses against it.
///
/// A round owns its word source, its attempt history, and the aggregate
/// [`LetterBoard`]. Submissions are serialized by construction, since
/// [`submit()`](Round::submit) takes `&mut self`; while the source's
/// (possibly remote) validity check runs, nothing else can touch the round.
///
/// # Examples
///
/// ```rust
/// use sixle::{GameConfig, Round, State, WordListSource};
///
/// let mut round = Round::new(GameConfig::new(), WordListSource::new())?;
///
/// let ticket = round.submit("planet")?;
/// assert_eq!(round.state(), State::Revealing);
///
/// // The presentation layer would sleep for ticket.duration() here.
/// round.reveal_complete(ticket);
/// assert!(matches!(round.state(), State::AwaitingGuess | State::Won));
/// #
/// # Ok::<_, sixle::SixleError>(())
/// ```
#[derive(Debug)]
pub struct Round<S> {
    config: GameConfig,
    source: S,
    target: Word,
    guesses: Vec<Word>,
    results: Vec<GuessResult>,
    letters: LetterBoard,
    state: State,
    generation: u64,
}

impl<S: WordSource> Round<S> {
    /// Draws a target from `source` and opens the round at
    /// [`State::AwaitingGuess`].
    pub fn new(config: GameConfig, mut source: S) -> Result<Self> {
        let target = draw_checked(&mut source, &config)?;

        Ok(Round {
            config,
            source,
            target,
            guesses: Vec::new(),
            results: Vec::new(),
            letters: LetterBoard::new(),
            state: State::AwaitingGuess,
            generation: 0,
        })
    }

    /// Submits a candidate guess.
    ///
    /// The candidate must be the configured length
    /// ([`GuessError::InvalidLength`]) and recognized by the word source
    /// ([`GuessError::NotAWord`]). Submissions during a reveal fail with
    /// [`GuessError::RevealPending`], and submissions after the round has
    /// ended fail with [`GuessError::RoundOver`]. Every failure leaves the
    /// round exactly as it was.
    ///
    /// On success the guess is scored, appended to the history, folded into
    /// the letter board, and the round moves to [`State::Revealing`] until
    /// the returned ticket comes back through
    /// [`reveal_complete()`](Round::reveal_complete).
    pub fn submit(&mut self, candidate: &str) -> Result<RevealTicket> {
        match self.state {
            State::AwaitingGuess => {}
            State::Revealing => return Err(GuessError::RevealPending.into()),
            State::Won | State::Lost => return Err(GuessError::RoundOver.into()),
        }

        let guess = Word::new(candidate, self.config.word_len)?;
        if !self.source.is_valid_guess(&guess) {
            return Err(GuessError::NotAWord(guess.to_string()).into());
        }

        let result = score(&guess, &self.target)?;
        self.letters.record(&guess, &result);
        self.guesses.push(guess);
        self.results.push(result);
        self.state = State::Revealing;

        Ok(RevealTicket {
            generation: self.generation,
            duration: REVEAL_STEP * self.config.word_len as u32 + REVEAL_TAIL,
        })
    }

    /// Finishes the reveal of the most recent guess and settles the round.
    ///
    /// Returns the state the round is now in: [`State::Won`] if the guess
    /// matched the target, [`State::Lost`] if the attempt budget is spent,
    /// and [`State::AwaitingGuess`] otherwise. A stale ticket, one issued
    /// before the most recent [`reset()`](Round::reset), leaves the round
    /// untouched.
    pub fn reveal_complete(&mut self, ticket: RevealTicket) -> State {
        if ticket.generation != self.generation || self.state != State::Revealing {
            return self.state;
        }

        self.state = match self.results.last() {
            Some(result) if result.is_all_correct() => State::Won,
            _ if self.guesses.len() >= self.config.max_attempts => State::Lost,
            _ => State::AwaitingGuess,
        };
        self.state
    }

    /// Abandons the current round and draws a fresh target.
    ///
    /// The history and letter board are cleared and any outstanding
    /// [`RevealTicket`] is invalidated. Available from any state, including
    /// mid-reveal.
    pub fn reset(&mut self) -> Result<()> {
        let target = draw_checked(&mut self.source, &self.config)?;

        self.target = target;
        self.guesses.clear();
        self.results.clear();
        self.letters.clear();
        self.state = State::AwaitingGuess;
        self.generation += 1;

        Ok(())
    }

    /// Returns the machine state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns every accepted guess, oldest first.
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Returns one result per accepted guess, parallel to
    /// [`guesses()`](Round::guesses).
    pub fn results(&self) -> &[GuessResult] {
        &self.results
    }

    /// Returns the aggregate keyboard hints.
    pub fn letters(&self) -> &LetterBoard {
        &self.letters
    }

    /// Returns the number of guesses left before the round is lost.
    pub fn remaining_attempts(&self) -> usize {
        self.config.max_attempts - self.guesses.len()
    }

    /// Returns the round configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the target word, but only once the round is terminal.
    ///
    /// While the round is live the target stays hidden, so a presentation
    /// layer cannot leak it by accident.
    pub fn target(&self) -> Option<&Word> {
        self.state.is_terminal().then(|| &self.target)
    }

    /// Takes a read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            guesses: self.guesses.clone(),
            results: self.results.clone(),
            letters: self.letters.clone(),
            remaining_attempts: self.remaining_attempts(),
            target: self.target().cloned(),
        }
    }
}

fn draw_checked<S: WordSource>(source: &mut S, config: &GameConfig) -> Result<Word> {
    let target = source.draw_target()?;
    if target.len() != config.word_len {
        return Err(SourceError::TargetLength {
            expected: config.word_len,
            actual: target.len(),
        }
        .into());
    }
    Ok(target)
}

#[cfg(test)]
mod test {
    use std::ops::Deref;

    use super::*;
    use crate::{mock::FixedSource, Classification, SixleError};

    const MISSES: [&str; 7] = [
        "planet", "silver", "stones", "window", "copper", "market", "branch",
    ];

    fn garden_round() -> Result<Round<FixedSource>> {
        let mut accepted = MISSES.to_vec();
        accepted.push("garden");
        Round::new(
            GameConfig::new(),
            FixedSource::new(vec!["garden"], accepted),
        )
    }

    fn reveal(round: &mut Round<FixedSource>, candidate: &str) -> Result<State> {
        let ticket = round.submit(candidate)?;
        Ok(round.reveal_complete(ticket))
    }

    #[test]
    fn winning_round() -> Result<()> {
        let mut round = garden_round()?;
        assert_eq!(round.state(), State::AwaitingGuess);
        assert_eq!(round.remaining_attempts(), 7);
        assert_eq!(round.target(), None);

        assert_eq!(reveal(&mut round, "planet")?, State::AwaitingGuess);
        assert_eq!(round.remaining_attempts(), 6);

        assert_eq!(reveal(&mut round, "garden")?, State::Won);
        assert!(round.results().last().unwrap().is_all_correct());
        assert_eq!(round.target().map(Deref::deref), Some("garden"));

        // Terminal rounds accept nothing further.
        assert!(matches!(
            round.submit("planet"),
            Err(SixleError::Guess {
                kind: GuessError::RoundOver
            })
        ));
        assert_eq!(round.guesses().len(), 2);

        Ok(())
    }

    #[test]
    fn losing_round() -> Result<()> {
        let mut round = garden_round()?;

        for (i, miss) in MISSES.iter().enumerate() {
            let state = reveal(&mut round, miss)?;
            if i < MISSES.len() - 1 {
                assert_eq!(state, State::AwaitingGuess);
            } else {
                assert_eq!(state, State::Lost);
            }
        }

        assert_eq!(round.remaining_attempts(), 0);
        assert_eq!(round.guesses().len(), round.results().len());
        assert_eq!(round.target().map(Deref::deref), Some("garden"));

        Ok(())
    }

    #[test]
    fn rejected_candidates_leave_the_round_untouched() -> Result<()> {
        let mut round = garden_round()?;

        assert!(matches!(
            round.submit("cat"),
            Err(SixleError::Guess {
                kind: GuessError::InvalidLength {
                    expected: 6,
                    actual: 3
                }
            })
        ));
        assert!(matches!(
            round.submit("zzzzzz"),
            Err(SixleError::Guess {
                kind: GuessError::NotAWord(_)
            })
        ));

        assert_eq!(round.state(), State::AwaitingGuess);
        assert!(round.guesses().is_empty());
        assert!(round.results().is_empty());
        assert!(round.letters().is_empty());
        assert_eq!(round.remaining_attempts(), 7);

        Ok(())
    }

    #[test]
    fn reveal_blocks_further_submissions() -> Result<()> {
        let mut round = garden_round()?;

        let ticket = round.submit("planet")?;
        assert!(matches!(
            round.submit("silver"),
            Err(SixleError::Guess {
                kind: GuessError::RevealPending
            })
        ));
        assert_eq!(round.guesses().len(), 1);

        round.reveal_complete(ticket);
        assert_eq!(round.state(), State::AwaitingGuess);

        Ok(())
    }

    #[test]
    fn reset_discards_a_pending_reveal() -> Result<()> {
        let mut round = garden_round()?;

        let stale = round.submit("planet")?;
        round.reset()?;
        assert_eq!(round.state(), State::AwaitingGuess);
        assert!(round.guesses().is_empty());

        // Even while the fresh round is mid-reveal, the superseded ticket
        // cannot settle it.
        let fresh = round.submit("garden")?;
        assert_eq!(round.reveal_complete(stale), State::Revealing);

        assert_eq!(round.reveal_complete(fresh), State::Won);

        Ok(())
    }

    #[test]
    fn reset_clears_history_and_redraws() -> Result<()> {
        let mut round = garden_round()?;

        assert_eq!(reveal(&mut round, "garden")?, State::Won);

        round.reset()?;
        assert_eq!(round.state(), State::AwaitingGuess);
        assert!(round.guesses().is_empty());
        assert!(round.results().is_empty());
        assert!(round.letters().is_empty());
        assert_eq!(round.remaining_attempts(), 7);
        assert_eq!(round.target(), None);

        Ok(())
    }

    #[test]
    fn letter_hints_strengthen_across_guesses() -> Result<()> {
        let mut round = garden_round()?;

        // "planet" against "garden": e lands exactly, a and n land
        // off-position.
        reveal(&mut round, "planet")?;
        assert_eq!(round.letters().get('e'), Some(Classification::Correct));
        assert_eq!(round.letters().get('a'), Some(Classification::Present));
        assert_eq!(round.letters().get('n'), Some(Classification::Present));
        assert_eq!(round.letters().get('p'), Some(Classification::Absent));

        reveal(&mut round, "garden")?;
        assert_eq!(round.letters().get('a'), Some(Classification::Correct));
        assert_eq!(round.letters().get('n'), Some(Classification::Correct));

        Ok(())
    }

    #[test]
    fn snapshot_hides_the_target_until_terminal() -> Result<()> {
        let mut round = garden_round()?;

        reveal(&mut round, "planet")?;
        let live = round.snapshot();
        assert_eq!(live.state, State::AwaitingGuess);
        assert_eq!(live.target, None);
        assert_eq!(live.guesses.len(), 1);
        assert_eq!(live.remaining_attempts, 6);

        reveal(&mut round, "garden")?;
        let done = round.snapshot();
        assert_eq!(done.state, State::Won);
        assert_eq!(done.target.as_deref(), Some("garden"));

        Ok(())
    }

    #[test]
    fn ticket_duration_scales_with_word_length() -> Result<()> {
        let mut round = garden_round()?;

        let ticket = round.submit("planet")?;
        assert_eq!(ticket.duration(), REVEAL_STEP * 6 + REVEAL_TAIL);

        Ok(())
    }

    #[test]
    fn source_target_must_fit_the_config() {
        let source = FixedSource::new(vec!["cat"], vec!["cat"]);

        assert!(matches!(
            Round::new(GameConfig::new(), source),
            Err(SixleError::Source {
                kind: SourceError::TargetLength {
                    expected: 6,
                    actual: 3
                }
            })
        ));
    }
}
