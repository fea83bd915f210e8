use crate::histogram::Histogram;
use crate::words::{Word, WordStore};

/// Exhaustive depth-first enumeration of the word sequences whose combined
/// letters exactly match the input histogram.
///
/// Yields each anagram as the words in the order they were chosen. The
/// search tries every store word at every level (the same word may appear
/// more than once in a sequence), so an anagram and its reorderings are
/// each found on their own branch. Iteration order follows store order at
/// every level, which makes the output deterministic for a fixed input and
/// dictionary.
pub struct AnagramSearcher<'word> {
    store: &'word WordStore,
    has_length: usize,

    /// One layer per word slot on the current branch; the last layer is
    /// the one currently scanning candidates.
    layers: Vec<SearchLayer>,
    /// Store indices of the words chosen at the layers below the top;
    /// always one shorter than `layers`. This is the breadcrumb trail used
    /// to reconstruct a finished anagram.
    chain: Vec<usize>,
}

struct SearchLayer {
    /// Next candidate position in the word store.
    word_index: usize,
    /// Letters still unused on entry to this layer. Owned by the layer;
    /// candidate words subtract from a fresh clone.
    remaining: Histogram,
    /// A word of length >= `has_length` was already chosen upstream.
    satisfied: bool,
}

impl<'word> AnagramSearcher<'word> {
    /// Set up a search of `store` for decompositions of `input`, requiring
    /// at least one word of length `has_length` per anagram.
    ///
    /// If the store is empty, or no accepted word reaches `has_length`, no
    /// sequence can ever qualify and the search starts out exhausted
    /// rather than running to a guaranteed-empty conclusion.
    pub fn new(store: &'word WordStore, input: &Histogram, has_length: usize) -> Self {
        let layers = if !store.is_empty() && store.max_word_len() >= has_length {
            vec![SearchLayer {
                word_index: 0,
                remaining: input.clone(),
                satisfied: false,
            }]
        } else {
            Vec::new()
        };
        AnagramSearcher {
            store,
            has_length,
            layers,
            chain: Vec::new(),
        }
    }
}

impl<'word> Iterator for AnagramSearcher<'word> {
    type Item = Vec<&'word Word>;

    fn next(&mut self) -> Option<Self::Item> {
        let words = self.store.words();
        'search: loop {
            // An empty layer stack means the whole tree has been walked.
            let depth = self.layers.len().checked_sub(1)?;

            while self.layers[depth].word_index < words.len() {
                let index = self.layers[depth].word_index;
                self.layers[depth].word_index += 1;

                let word = &words[index];
                let layer = &self.layers[depth];

                // Skip words longer than the remaining character count.
                if word.len() > layer.remaining.total() {
                    continue;
                }
                if !word.histogram.fits(&layer.remaining) {
                    continue;
                }

                let mut remaining = layer.remaining.clone();
                if !remaining.subtract(&word.histogram) {
                    // Cannot happen after a successful fits(); abandon the
                    // layer rather than trust the half-subtracted state.
                    break;
                }

                if remaining.is_empty() {
                    // Complete decomposition. Emit it only if some word in
                    // the sequence meets the length requirement, then keep
                    // scanning siblings: further solutions may share this
                    // prefix.
                    if layer.satisfied || word.len() >= self.has_length {
                        let mut phrase: Vec<&'word Word> =
                            self.chain.iter().map(|&i| &words[i]).collect();
                        phrase.push(word);
                        return Some(phrase);
                    }
                    continue;
                }

                let satisfied = layer.satisfied || word.len() >= self.has_length;
                // Every later word must fit inside `remaining`, so once the
                // leftover count drops below `has_length` an unsatisfied
                // branch can never recover.
                if !satisfied && remaining.total() < self.has_length {
                    continue;
                }

                self.chain.push(index);
                self.layers.push(SearchLayer {
                    word_index: 0,
                    remaining,
                    satisfied,
                });
                continue 'search;
            }

            // Candidates exhausted at this depth; backtrack.
            self.layers.pop();
            self.chain.pop();
        }
    }
}
