use anagram::{load_wordlist, AnagramSearcher, Histogram, WordStore};
use anyhow::{bail, Result};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use structopt::StructOpt;

const DEFAULT_WORDLIST_FILE: &str = "/usr/share/dict/words";

/// Cap on bytes read from standard input; the number of anagrams explodes
/// with the input size.
const STDIN_LIMIT: u64 = 100;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "anagram",
    about = "Find anagrams of the input phrase (as arguments, else standard input)"
)]
struct Opt {
    /// Dictionary file (one word per line)
    #[structopt(short = "f", long, parse(from_os_str), default_value = DEFAULT_WORDLIST_FILE)]
    dictfile: PathBuf,

    /// All anagram words must be at least this long
    #[structopt(short = "m", long, default_value = "1")]
    minlength: u8,

    /// One anagram word must be at least this long
    #[structopt(short = "l", long, default_value = "1")]
    haslength: u8,

    /// Phrase to anagram
    #[structopt(name = "words")]
    words: Vec<String>,
}

/// The phrase comes from the positional arguments, or from standard input
/// when none were given. All whitespace is stripped either way.
fn input_phrase(words: &[String]) -> Result<Vec<u8>> {
    let mut phrase: Vec<u8> = words
        .iter()
        .flat_map(|word| word.bytes())
        .filter(|chr| !chr.is_ascii_whitespace())
        .collect();
    if phrase.is_empty() {
        let mut buf = Vec::new();
        io::stdin().take(STDIN_LIMIT).read_to_end(&mut buf)?;
        phrase = buf
            .into_iter()
            .filter(|chr| !chr.is_ascii_whitespace())
            .collect();
    }
    if phrase.is_empty() {
        bail!("no input phrase (pass words as arguments or on standard input)");
    }
    Ok(phrase)
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    if opt.minlength == 0 || opt.haslength == 0 {
        bail!("length limits must be between 1 and 255");
    }

    let phrase = input_phrase(&opt.words)?;
    let input = Histogram::new(&phrase);

    let lines = load_wordlist(&opt.dictfile)?;
    let store = WordStore::build(&lines, &input, opt.minlength as usize);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for phrase_words in AnagramSearcher::new(&store, &input, opt.haslength as usize) {
        let joined: Vec<&str> = phrase_words.iter().map(|w| w.text.as_str()).collect();
        writeln!(out, "{}", joined.join(" "))?;
    }
    out.flush()?;
    Ok(())
}
