use crate::histogram::Histogram;
use anyhow::{Context, Result};
use std::fmt;
use std::io::{self, BufRead};

#[cfg(feature = "serialize")]
use serde::Serialize;

/// One accepted dictionary entry. The text is kept verbatim; its length is
/// its byte count, matching the histogram's raw-byte view of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct Word {
    pub text: String,
    pub histogram: Histogram,
}

impl Word {
    pub fn new(text: &str) -> Self {
        Word {
            text: text.into(),
            histogram: Histogram::new(text.as_bytes()),
        }
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Dictionary words that survived filtering against the input phrase, in
/// dictionary scan order. That order is the deterministic tie-break for the
/// search, and therefore fixes the output ordering.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<Word>,
    max_word_len: usize,
}

impl WordStore {
    /// Filter candidate words against the input histogram. Accepted words
    /// keep their scan order; words that cannot take part in any anagram of
    /// the input are dropped here so the search never has to re-validate
    /// basic feasibility.
    pub fn build<I, S>(candidates: I, input: &Histogram, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut max_word_len = 0;
        for candidate in candidates {
            if let Some(word) = accept(candidate.as_ref(), input, min_length) {
                if word.len() > max_word_len {
                    max_word_len = word.len();
                }
                words.push(word);
            }
        }
        WordStore {
            words,
            max_word_len,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest accepted word (0 if none were accepted).
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}

fn accept(text: &str, input: &Histogram, min_length: usize) -> Option<Word> {
    let len = text.len();
    if len == 0 || len < min_length {
        return None;
    }
    // A word longer than the input string is out.
    if len > input.total() {
        return None;
    }
    // A word using a character absent from the input can never fit; this
    // screens most of the dictionary before any histogram is built.
    if !text.bytes().all(|chr| input.contains(chr)) {
        return None;
    }
    let histogram = Histogram::new(text.as_bytes());
    // Cheap reject on the maximum occurrence count before the full
    // per-character comparison.
    if histogram.max_freq() > input.max_freq() {
        return None;
    }
    if !histogram.fits(input) {
        return None;
    }
    Some(Word {
        text: text.into(),
        histogram,
    })
}

/// Read a wordlist file, one word per line. Lines are trimmed; empty and
/// non-UTF-8 lines are dropped. Filtering against an input phrase is the
/// `WordStore`'s job, not the loader's.
pub fn load_wordlist<P>(filename: P) -> Result<Vec<String>>
where
    P: AsRef<std::path::Path>,
{
    let file = std::fs::File::open(&filename)
        .with_context(|| format!("could not open wordlist {:?}", filename.as_ref()))?;
    let lines = io::BufReader::new(file).lines();
    Ok(lines
        .filter_map(|line| line.ok())
        .filter_map(|line| {
            let word = line.trim();
            if word.is_empty() {
                None
            } else {
                Some(word.to_string())
            }
        })
        .collect())
}
