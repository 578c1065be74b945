//! Rule-based sentence boundary detection
//!
//! A boundary is proposed at every run of terminators (`.`, `!`, `?`, `…`)
//! that is followed, after optional closing quotes or brackets, by
//! whitespace or the end of the text. `!` and `?` always end a sentence.
//! A period is vetoed by:
//!
//! - a capitalized title (`Dr. Smith`);
//! - a reference abbreviation followed by a number (`No. 5`, `Fig. 3`);
//! - an abbreviation, dotted initialism or single-letter initial, when the
//!   next word is lowercase or not a common sentence starter (`e.g. apples`,
//!   `U.S. Army`, `J. Smith`).
//!
//! A single capital letter only counts as an initial at the start of a
//! sentence, after a capitalized word or after a word that introduces a
//! name (`by J. Smith`), so `plan B. Everyone agreed.` splits. An ellipsis
//! followed by a lowercase word continues the sentence.
//!
//! Decimals and dotted numbers never reach the veto stage because the period
//! is not followed by whitespace. A blank line is always a hard break.

use crate::types::Sentence;
use rustc_hash::FxHashSet;

/// Titles that precede a name; never end a sentence when capitalized
const ENGLISH_TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "rev", "hon", "gen", "col", "lt", "sgt", "capt",
    "gov", "sen", "rep", "messrs", "mt",
];

/// Abbreviations that are not English words; end a sentence only before a
/// sentence starter
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "etc", "e.g", "i.e", "vs", "cf", "approx", "dept", "inc", "ltd", "corp", "jr", "sr", "feb",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "tue", "thu", "blvd", "a.m",
    "p.m", "ph.d", "u.s", "u.k", "u.n", "e.u",
];

/// Reference abbreviations that are also words; hold only before a number
const ENGLISH_NUMERIC_ABBREVIATIONS: &[&str] = &[
    "no", "nos", "fig", "figs", "vol", "vols", "p", "pp", "ch", "sec", "art", "eq", "op", "ca",
    "jan", "mar",
];

/// Lowercase words that commonly precede a name written with an initial
const ENGLISH_NAME_LEADERS: &[&str] = &[
    "by", "and", "with", "from", "to", "of", "for", "said", "says", "told", "&",
];

/// Words that commonly open a sentence
const ENGLISH_SENTENCE_STARTERS: &[&str] = &[
    "The", "A", "An", "This", "That", "These", "Those", "It", "Its", "He", "She", "They", "We",
    "I", "You", "There", "Here", "However", "But", "And", "So", "Then", "In", "On", "At", "For",
    "After", "Before", "When", "While", "If", "As", "Although", "Meanwhile", "Moreover",
    "Furthermore", "Therefore", "Thus", "Also", "Some", "Many", "Most", "All", "Each", "What",
    "Why", "How", "Who", "Where",
];

/// Sentence segmenter with language-specific abbreviation tables.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    titles: FxHashSet<String>,
    abbreviations: FxHashSet<String>,
    numeric_abbreviations: FxHashSet<String>,
    name_leaders: FxHashSet<String>,
    starters: FxHashSet<String>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::english()
    }
}

fn lowercase_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

impl Segmenter {
    /// Segmenter with the built-in English tables
    pub fn english() -> Self {
        Self::new(ENGLISH_TITLES, ENGLISH_ABBREVIATIONS, ENGLISH_SENTENCE_STARTERS)
            .with_numeric_abbreviations(ENGLISH_NUMERIC_ABBREVIATIONS)
            .with_name_leaders(ENGLISH_NAME_LEADERS)
    }

    /// Segmenter that only applies punctuation, initial and ellipsis rules
    pub fn punctuation_only() -> Self {
        Self::new(&[], &[], &[])
    }

    /// Build from custom tables.
    ///
    /// Titles and abbreviations are given without the trailing period and are
    /// matched case-insensitively; starters are matched exactly.
    pub fn new(titles: &[&str], abbreviations: &[&str], starters: &[&str]) -> Self {
        Self {
            titles: lowercase_set(titles),
            abbreviations: lowercase_set(abbreviations),
            numeric_abbreviations: FxHashSet::default(),
            name_leaders: FxHashSet::default(),
            starters: starters.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Abbreviations that only hold a sentence open before a number
    pub fn with_numeric_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        self.numeric_abbreviations = lowercase_set(abbreviations);
        self
    }

    /// Lowercase words after which a single capital letter is an initial
    pub fn with_name_leaders(mut self, words: &[&str]) -> Self {
        self.name_leaders = lowercase_set(words);
        self
    }

    /// Split `text` into trimmed, non-empty sentence strings
    pub fn segment(&self, text: &str) -> Vec<String> {
        self.sentences(text).into_iter().map(|s| s.text).collect()
    }

    /// Split `text` into [`Sentence`]s with contiguous indices and byte offsets
    pub fn sentences(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut out = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i].1;

            if c == '\n' {
                if let Some(resume) = blank_line_end(&chars, i) {
                    push_sentence(&mut out, text, start, chars[i].0);
                    start = byte_at(text, &chars, resume);
                    i = resume;
                    continue;
                }
                i += 1;
                continue;
            }

            if !is_terminator(c) {
                i += 1;
                continue;
            }

            let run_start = i;
            let mut j = i;
            while j < chars.len() && is_terminator(chars[j].1) {
                j += 1;
            }
            let run_end = j;
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            let followed_by_space = j >= chars.len() || chars[j].1.is_whitespace();
            if followed_by_space && self.is_boundary(text, &chars, start, run_start, run_end, j) {
                let end = byte_at(text, &chars, j);
                push_sentence(&mut out, text, start, end);
                start = end;
            }
            i = j;
        }

        push_sentence(&mut out, text, start, text.len());
        out
    }

    /// Decide whether the terminator run `chars[run_start..run_end]`, whose
    /// trailing closers end at `after`, closes a sentence.
    fn is_boundary(
        &self,
        text: &str,
        chars: &[(usize, char)],
        sentence_start: usize,
        run_start: usize,
        run_end: usize,
        after: usize,
    ) -> bool {
        let next = next_word(text, chars, after);
        let Some(next) = next else {
            return true;
        };

        let run = &chars[run_start..run_end];
        if run.iter().any(|&(_, c)| c == '!' || c == '?') {
            return true;
        }

        let next_lower = next.chars().next().is_some_and(char::is_lowercase);
        let is_ellipsis = run.len() > 1 || run[0].1 == '…';
        if is_ellipsis {
            return !next_lower;
        }

        let (prev, prev_start) = preceding_token(text, chars, sentence_start, run_start);
        let prev_lower = prev.to_lowercase();
        let capitalized = prev.chars().next().is_some_and(char::is_uppercase);

        if capitalized && self.titles.contains(&prev_lower) {
            return false;
        }

        let next_numeric = next.chars().next().is_some_and(|c| c.is_ascii_digit());
        if next_numeric && self.numeric_abbreviations.contains(&prev_lower) {
            return false;
        }

        let is_dotted = prev.contains('.')
            && prev.split('.').all(|part| {
                let letters = part.chars().count();
                (1..=2).contains(&letters) && part.chars().all(char::is_alphabetic)
            });

        if is_dotted
            || self.abbreviations.contains(&prev_lower)
            || self.is_initial(text, chars, sentence_start, prev, prev_start)
        {
            return !next_lower && self.starters.contains(next);
        }

        true
    }

    /// A single capital letter at the start of a sentence, after a
    /// capitalized word or after a name leader (`by J. Smith`)
    fn is_initial(
        &self,
        text: &str,
        chars: &[(usize, char)],
        sentence_start: usize,
        prev: &str,
        prev_start: usize,
    ) -> bool {
        let mut letters = prev.chars();
        let single_capital = matches!(
            (letters.next(), letters.next()),
            (Some(c), None) if c.is_uppercase()
        );
        if !single_capital {
            return false;
        }

        let mut i = prev_start;
        while i > 0 && chars[i - 1].0 >= sentence_start && chars[i - 1].1.is_whitespace() {
            i -= 1;
        }
        let (before, _) = preceding_token(text, chars, sentence_start, i);
        match before.chars().next() {
            None => true,
            Some(c) if c.is_uppercase() => true,
            Some(_) => self.name_leaders.contains(&before.to_lowercase()),
        }
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '“' | '‘' | '«')
}

fn byte_at(text: &str, chars: &[(usize, char)], idx: usize) -> usize {
    chars.get(idx).map_or(text.len(), |&(b, _)| b)
}

/// If the newline at `chars[i]` starts a blank line, return the index just
/// past the blank run.
fn blank_line_end(chars: &[(usize, char)], i: usize) -> Option<usize> {
    let mut j = i + 1;
    let mut newlines = 1;
    while j < chars.len() && chars[j].1.is_whitespace() {
        if chars[j].1 == '\n' {
            newlines += 1;
        }
        j += 1;
    }
    (newlines >= 2).then_some(j)
}

/// The alphanumeric word starting after whitespace and opening punctuation
fn next_word<'a>(text: &'a str, chars: &[(usize, char)], from: usize) -> Option<&'a str> {
    let mut i = from;
    while i < chars.len() && (chars[i].1.is_whitespace() || is_opener(chars[i].1)) {
        i += 1;
    }
    if i >= chars.len() {
        return None;
    }
    let begin = chars[i].0;
    let mut j = i;
    while j < chars.len() && chars[j].1.is_alphanumeric() {
        j += 1;
    }
    if j == i {
        // Punctuation or a symbol opens the next chunk; treat as a word.
        return Some(&text[begin..begin + chars[i].1.len_utf8()]);
    }
    Some(&text[begin..byte_at(text, chars, j)])
}

/// The token ending at `chars[end]`, without opening punctuation (e.g.
/// `U.S` for `(U.S.`), and the char index where the raw token starts.
///
/// Trailing commas and similar punctuation are trimmed, so `Smith,` gives
/// `Smith`.
fn preceding_token<'a>(
    text: &'a str,
    chars: &[(usize, char)],
    sentence_start: usize,
    end: usize,
) -> (&'a str, usize) {
    let end_byte = byte_at(text, chars, end);
    let mut i = end;
    while i > 0 && chars[i - 1].0 >= sentence_start && !chars[i - 1].1.is_whitespace() {
        i -= 1;
    }
    let word = &text[byte_at(text, chars, i)..end_byte];
    let word = word
        .trim_start_matches(|c: char| !c.is_alphanumeric() && c != '&')
        .trim_end_matches(|c: char| matches!(c, ',' | ';' | ':'));
    (word, i)
}

fn push_sentence(out: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    let begin = start + lead;
    out.push(Sentence::new(trimmed, out.len(), begin, begin + trimmed.len()));
}
