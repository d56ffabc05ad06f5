use crate::{
    score::Word,
    source::{DictionaryLookup, LookupError, WordSource},
    Result,
};

/// A word source with scripted targets and a fixed accepted-guess list.
///
/// Targets are handed out in order, wrapping around, so tests know exactly
/// what each round is playing against.
#[derive(Debug, Clone)]
pub(crate) struct FixedSource {
    targets: Vec<&'static str>,
    accepted: Vec<&'static str>,
    drawn: usize,
}

impl FixedSource {
    pub(crate) fn new(targets: Vec<&'static str>, accepted: Vec<&'static str>) -> Self {
        Self {
            targets,
            accepted,
            drawn: 0,
        }
    }
}

impl WordSource for FixedSource {
    fn draw_target(&mut self) -> Result<Word> {
        let word = self.targets[self.drawn % self.targets.len()];
        self.drawn += 1;
        Word::new(word, word.len())
    }

    fn is_valid_guess(&self, candidate: &str) -> bool {
        self.accepted.contains(&candidate)
    }
}

/// A dictionary that recognizes exactly the words it was given.
#[derive(Debug, Clone)]
pub(crate) struct StaticLookup(pub(crate) Vec<&'static str>);

impl DictionaryLookup for StaticLookup {
    fn lookup(&self, candidate: &str) -> Result<bool, LookupError> {
        Ok(self.0.contains(&candidate))
    }
}

/// A dictionary whose backing service is unreachable.
#[derive(Debug, Clone)]
pub(crate) struct DownLookup;

impl DictionaryLookup for DownLookup {
    fn lookup(&self, _candidate: &str) -> Result<bool, LookupError> {
        Err(LookupError::new("service unreachable"))
    }
}
