use anagram::{load_wordlist, AnagramSearcher, Histogram, WordStore};
use std::time;

fn main() {
    let start = time::Instant::now();
    let lines = load_wordlist("/usr/share/dict/words").unwrap();
    println!(" === Time to load wordlist: {:?} ===", start.elapsed());

    // (phrase, minlength, haslength)
    let phrases = vec![
        ("listen", 1, 1),
        ("dormitory", 2, 4),
        ("theclassroom", 3, 5),
        ("astronomer", 3, 3),
    ];
    for (phrase, min_length, has_length) in phrases {
        println!();
        println!(">>> Phrase: {} (minlength {}, haslength {}) <<<", phrase, min_length, has_length);

        let start = time::Instant::now();
        let input = Histogram::new(phrase.as_bytes());
        let store = WordStore::build(&lines, &input, min_length);
        println!(
            " === {} candidate words, longest {} ({:?}) ===",
            store.len(),
            store.max_word_len(),
            start.elapsed()
        );

        let mut results = AnagramSearcher::new(&store, &input, has_length);
        let first = results.next();
        let first_time = start.elapsed();
        let count = (first.is_some() as usize) + results.count();
        if let Some(phrase_words) = first {
            let joined: Vec<&str> = phrase_words.iter().map(|w| w.text.as_str()).collect();
            println!("first match: {}", joined.join(" "));
        }
        println!("# anagrams: {}", count);
        println!(
            " === Time to search: {:?} (first in {:?}) ===",
            start.elapsed(),
            first_time
        );
    }
}

#[test]
fn expected_phrases() {
    let dictionary = vec!["eat", "tea", "ate", "at", "e"];
    let input = Histogram::new(b"eat");
    let store = WordStore::build(&dictionary, &input, 1);

    let results: Vec<String> = AnagramSearcher::new(&store, &input, 1)
        .map(|phrase| {
            phrase
                .iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    assert_eq!(results, vec!["eat", "tea", "ate", "at e", "e at"]);
}
