use std::fmt;

#[cfg(feature = "serialize")]
use serde::Serialize;

/// A multiset of characters, stored as parallel sorted arrays of distinct
/// bytes (`bins`) and their counts (`freq`).
///
/// Characters are raw bytes: no case folding or Unicode normalization is
/// applied anywhere, so a multi-byte UTF-8 character is simply a multiset
/// of its code units.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize))]
pub struct Histogram {
    bins: Vec<u8>,
    freq: Vec<usize>,
    maxfreq: usize,
    ntotal: usize,
}

impl Histogram {
    /// Build a histogram by sorting the input bytes and run-length encoding
    /// the result. An empty input yields the (valid) empty histogram.
    pub fn new(text: &[u8]) -> Self {
        let mut sorted = text.to_vec();
        sorted.sort_unstable();

        let mut bins = Vec::new();
        let mut freq = Vec::new();
        let mut maxfreq = 0;

        let mut i = 0;
        while i < sorted.len() {
            let chr = sorted[i];
            let start = i;
            while i < sorted.len() && sorted[i] == chr {
                i += 1;
            }
            let count = i - start;
            bins.push(chr);
            freq.push(count);
            if count > maxfreq {
                maxfreq = count;
            }
        }

        Histogram {
            bins,
            freq,
            maxfreq,
            ntotal: sorted.len(),
        }
    }

    /// Number of distinct characters (slots), including any that have been
    /// subtracted down to a count of zero.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ntotal == 0
    }

    /// Total number of characters represented.
    pub fn total(&self) -> usize {
        self.ntotal
    }

    /// Highest per-character count (0 for the empty histogram).
    pub fn max_freq(&self) -> usize {
        self.maxfreq
    }

    pub fn count(&self, chr: u8) -> usize {
        match self.bins.binary_search(&chr) {
            Ok(i) => self.freq[i],
            Err(_) => 0,
        }
    }

    pub fn contains(&self, chr: u8) -> bool {
        self.bins.binary_search(&chr).is_ok()
    }

    /// Multiset containment: true iff every character occurs at most as
    /// often in `self` as in `base`. The empty histogram fits everything.
    pub fn fits(&self, base: &Histogram) -> bool {
        // A histogram with more distinct characters than the base must
        // contain one the base lacks.
        if self.bins.len() > base.bins.len() {
            return false;
        }
        // It cannot fit with a larger maximum character frequency either.
        if self.maxfreq > base.maxfreq {
            return false;
        }
        // Both bin arrays are sorted, so a single ascending merge-walk
        // settles the per-character comparisons.
        let mut b = 0;
        for (i, &chr) in self.bins.iter().enumerate() {
            loop {
                match base.bins.get(b) {
                    None => return false,
                    Some(&base_chr) if base_chr < chr => b += 1,
                    Some(&base_chr) if base_chr > chr => return false,
                    Some(_) => break,
                }
            }
            if self.freq[i] > base.freq[b] {
                return false;
            }
        }
        true
    }

    /// Subtract `other`'s counts from `self`, in place, via the same
    /// merge-walk as `fits`.
    ///
    /// Returns false if `other` contains a character absent from `self` or
    /// any count would underflow; `self` is left partially modified and
    /// must be discarded by the caller. On success all invariants hold
    /// again: `total()` has dropped by `other.total()` and `max_freq()` is
    /// recomputed over every slot, including slots the subtraction never
    /// touched. Slots that reach zero stay present in `bins`.
    pub fn subtract(&mut self, other: &Histogram) -> bool {
        let mut maxfreq = 0;
        let mut t = 0;
        for (i, &chr) in other.bins.iter().enumerate() {
            // Advance to the matching slot, folding the counts we walk
            // past into the running maximum.
            loop {
                match self.bins.get(t) {
                    None => return false,
                    Some(&own_chr) if own_chr < chr => {
                        if self.freq[t] > maxfreq {
                            maxfreq = self.freq[t];
                        }
                        t += 1;
                    }
                    Some(&own_chr) if own_chr > chr => return false,
                    Some(_) => break,
                }
            }
            let take = other.freq[i];
            if take > self.freq[t] {
                return false;
            }
            self.freq[t] -= take;
            self.ntotal -= take;
            if self.freq[t] > maxfreq {
                maxfreq = self.freq[t];
            }
        }
        // Slots past the last subtracted character may now hold the
        // maximum.
        for &count in &self.freq[t..] {
            if count > maxfreq {
                maxfreq = count;
            }
        }
        self.maxfreq = maxfreq;
        true
    }
}

impl fmt::Debug for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (&chr, &count)) in self.bins.iter().zip(self.freq.iter()).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", chr as char, count)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create() {
        let h = Histogram::new(b"abcabcabc");
        assert_eq!(h.len(), 3);
        assert_eq!(h.max_freq(), 3);
        assert_eq!(h.total(), 9);
        assert_eq!(h.count(b'a'), 3);
        assert_eq!(h.count(b'z'), 0);

        let h = Histogram::new(b"aaa");
        assert_eq!(h.len(), 1);
        assert_eq!(h.max_freq(), 3);
        assert_eq!(h.total(), 3);

        let empty = Histogram::new(b"");
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.max_freq(), 0);
        assert_eq!(empty.total(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn total_matches_input_length() {
        let inputs: &[&[u8]] = &[b"", b"a", b"abc", b"aabbcc", b"mississippi"];
        for s in inputs {
            let h = Histogram::new(s);
            assert_eq!(h.total(), s.len());
        }
    }

    #[test]
    fn fits_self() {
        let inputs: &[&[u8]] = &[b"", b"a", b"abc", b"aaa", b"abcabc", b"abcabcabc"];
        for s in inputs {
            let h = Histogram::new(s);
            assert!(h.fits(&h));
        }
    }

    #[test]
    fn fits_empty() {
        let empty = Histogram::new(b"");
        let inputs: &[&[u8]] = &[b"", b"a", b"abc", b"aaa"];
        for s in inputs {
            let h = Histogram::new(s);
            assert!(empty.fits(&h));
            if !h.is_empty() {
                assert!(!h.fits(&empty));
            }
        }
    }

    #[test]
    fn fits_subset() {
        let abc = Histogram::new(b"abc");
        let aaa = Histogram::new(b"aaa");
        let a = Histogram::new(b"a");
        let abc2 = Histogram::new(b"abcabc");
        let abc3 = Histogram::new(b"abcabcabc");

        // No three a's in "abc".
        assert!(!abc.fits(&aaa));
        // Three a's in "abcabcabc".
        assert!(abc.fits(&abc3));

        // A single letter fits many.
        assert!(a.fits(&abc));
        assert!(a.fits(&aaa));
        assert!(a.fits(&abc2));

        // "abc" fits "abcabc" but not vice versa.
        assert!(abc.fits(&abc2));
        assert!(!abc2.fits(&abc));

        // "abcabc" fits "abcabcabc" but not vice versa.
        assert!(abc2.fits(&abc3));
        assert!(!abc3.fits(&abc2));
    }

    #[test]
    fn subtract() {
        let mut h = Histogram::new(b"abcabcabc");
        assert!(h.subtract(&Histogram::new(b"abc")));
        assert_eq!(h.len(), 3);
        assert_eq!(h.max_freq(), 2);
        assert_eq!(h.total(), 6);

        // Subtracting the rest leaves three slots of frequency zero.
        assert!(h.subtract(&Histogram::new(b"abcabc")));
        assert_eq!(h.len(), 3);
        assert_eq!(h.total(), 0);
        assert_eq!(h.max_freq(), 0);
        assert_eq!(h.count(b'a'), 0);
        assert_eq!(h.count(b'b'), 0);
        assert_eq!(h.count(b'c'), 0);
        assert!(h.is_empty());
    }

    #[test]
    fn subtract_missing_character() {
        let mut h = Histogram::new(b"abc");
        assert!(!h.subtract(&Histogram::new(b"d")));

        let mut h = Histogram::new(b"bcd");
        assert!(!h.subtract(&Histogram::new(b"a")));
    }

    #[test]
    fn subtract_underflow() {
        let mut h = Histogram::new(b"aab");
        assert!(!h.subtract(&Histogram::new(b"aaa")));
    }

    #[test]
    fn subtract_recomputes_maxfreq_in_untouched_slots() {
        // The maximum ends up in a slot after the subtracted range.
        let mut h = Histogram::new(b"aabbbcc");
        assert!(h.subtract(&Histogram::new(b"bbb")));
        assert_eq!(h.max_freq(), 2);
        assert_eq!(h.total(), 4);

        // And in a slot before the subtracted range.
        let mut h = Histogram::new(b"aaab");
        assert!(h.subtract(&Histogram::new(b"b")));
        assert_eq!(h.max_freq(), 3);
        assert_eq!(h.total(), 3);

        // Subtracting the empty histogram is a no-op that still leaves
        // maxfreq intact.
        let mut h = Histogram::new(b"aabc");
        assert!(h.subtract(&Histogram::new(b"")));
        assert_eq!(h.max_freq(), 2);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn clone_is_independent() {
        let orig = Histogram::new(b"aabbcc");
        let mut copy = orig.clone();
        assert!(copy.subtract(&Histogram::new(b"abc")));
        assert_eq!(copy.total(), 3);
        assert_eq!(orig.total(), 6);
        assert_eq!(orig.max_freq(), 2);
    }
}
