//! Hungarian collation for concept names
//!
//! Multi-level comparison in the spirit of the CLDR `hu` tailoring:
//!
//! - primary: letters of the Hungarian alphabet, where `cs dz dzs gy ly ny sz
//!   ty zs` are single letters and `ö`/`ü` follow `o`/`u`
//! - secondary: acute and double-acute accents (`á` vs `a`, `ő` vs `ö`)
//! - tertiary: case, lowercase first
//!
//! Ties on all three levels fall back to code-point order so the result is a
//! total order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The Hungarian alphabet, single letters and multigraphs, in sort order
const ALPHABET: [&str; 37] = [
    "a", "b", "c", "cs", "d", "dz", "dzs", "e", "f", "g", "gy", "h", "i", "j", "k", "l", "ly",
    "m", "n", "ny", "o", "ö", "p", "q", "r", "s", "sz", "t", "ty", "u", "ü", "v", "w", "x", "y",
    "z", "zs",
];

/// Multigraphs, longest first so `dzs` wins over `dz`
const MULTIGRAPHS: [&str; 9] = ["dzs", "cs", "dz", "gy", "ly", "ny", "sz", "ty", "zs"];

/// Character class at the primary level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
    OtherScript,
}

/// One collation element: a folded letter with its accent and case weights
#[derive(Debug, Clone, Copy)]
struct Folded {
    base: char,
    accent: u8,
    upper: bool,
}

/// Sort key for a string; derived `Ord` compares level by level
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(Class, u32)>,
    secondary: Vec<u8>,
    tertiary: Vec<u8>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let folded = fold(text);
        let mut key = CollationKey {
            primary: Vec::with_capacity(folded.len()),
            secondary: Vec::with_capacity(folded.len()),
            tertiary: Vec::with_capacity(folded.len()),
        };

        let mut i = 0;
        while i < folded.len() {
            let (weight, len) = match multigraph_at(&folded[i..]) {
                Some((index, len)) => ((Class::Letter, index), len),
                None => (primary_weight(folded[i].base), 1),
            };
            let group = &folded[i..i + len];
            key.primary.push(weight);
            key.secondary
                .push(group.iter().map(|f| f.accent).max().unwrap_or(0));
            // Uppercase letters in the group, so cs < Cs < CS
            let upper = group.iter().filter(|f| f.upper).count();
            key.tertiary.push(upper as u8);
            i += len;
        }

        key
    }
}

/// Compare two strings using Hungarian collation
pub fn compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a)
        .cmp(&CollationKey::new(b))
        .then_with(|| a.cmp(b))
}

/// Lowercase, strip accents that are secondary in Hungarian, keep `ö`/`ü`
fn fold(text: &str) -> Vec<Folded> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let upper = ch.is_uppercase();
        for lower in ch.to_lowercase() {
            let (base, accent) = fold_char(lower);
            out.push(Folded {
                base,
                accent,
                upper,
            });
        }
    }
    out
}

fn fold_char(ch: char) -> (char, u8) {
    match ch {
        'á' => ('a', 1),
        'é' => ('e', 1),
        'í' => ('i', 1),
        'ó' => ('o', 1),
        'ú' => ('u', 1),
        'ö' | 'ü' => (ch, 0),
        'ő' => ('ö', 1),
        'ű' => ('ü', 1),
        _ if ch.is_ascii() => (ch, 0),
        _ => {
            let mut decomposed = std::iter::once(ch).nfd();
            let base = decomposed.next().unwrap_or(ch);
            let marks = decomposed.filter(|c| is_combining_mark(*c)).count();
            (base, if marks > 0 { 2 } else { 0 })
        }
    }
}

fn multigraph_at(folded: &[Folded]) -> Option<(u32, usize)> {
    MULTIGRAPHS.iter().find_map(|graph| {
        let len = graph.chars().count();
        if folded.len() < len {
            return None;
        }
        let matches = graph
            .chars()
            .zip(&folded[..len])
            .all(|(g, f)| g == f.base && f.accent == 0);
        if !matches {
            return None;
        }
        alphabet_index(graph).map(|index| (index, len))
    })
}

fn alphabet_index(letter: &str) -> Option<u32> {
    ALPHABET
        .iter()
        .position(|l| *l == letter)
        .map(|index| index as u32)
}

fn primary_weight(ch: char) -> (Class, u32) {
    if ch.is_whitespace() {
        return (Class::Whitespace, ch as u32);
    }
    if let Some(digit) = ch.to_digit(10) {
        return (Class::Digit, digit);
    }
    if ch.is_alphabetic() {
        let mut buf = [0u8; 4];
        return match alphabet_index(ch.encode_utf8(&mut buf)) {
            Some(index) => (Class::Letter, index),
            None => (Class::OtherScript, ch as u32),
        };
    }
    (Class::Punctuation, ch as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(words: &[&str]) -> Vec<String> {
        let mut words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        words.sort_by(|a, b| compare(a, b));
        words
    }

    #[test]
    fn test_plain_latin_order() {
        assert_eq!(sorted(&["zebra", "alma", "kutya"]), ["alma", "kutya", "zebra"]);
    }

    #[test]
    fn test_digraph_sorts_after_single_letter() {
        assert_eq!(sorted(&["csiga", "cukor", "cica"]), ["cica", "cukor", "csiga"]);
        assert_eq!(sorted(&["gyár", "gumi"]), ["gumi", "gyár"]);
        assert_eq!(sorted(&["szilva", "sas", "tanár"]), ["sas", "szilva", "tanár"]);
        assert_eq!(sorted(&["zsiráf", "zebra"]), ["zebra", "zsiráf"]);
    }

    #[test]
    fn test_trigraph_dzs() {
        assert_eq!(sorted(&["dzsungel", "dzéta", "dió"]), ["dió", "dzéta", "dzsungel"]);
    }

    #[test]
    fn test_acute_is_secondary() {
        // á sorts with a, so "Álom" lands between "alma" and "azúr"
        assert_eq!(
            sorted(&["azúr", "Álom", "alma", "ablak"]),
            ["ablak", "alma", "Álom", "azúr"]
        );
        assert_eq!(compare("ar", "ár"), Ordering::Less);
    }

    #[test]
    fn test_umlaut_is_own_letter() {
        assert_eq!(
            sorted(&["őz", "ól", "ötös", "oroszlán", "pék"]),
            ["ól", "oroszlán", "ötös", "őz", "pék"]
        );
        assert_eq!(sorted(&["ütő", "uborka", "vár"]), ["uborka", "ütő", "vár"]);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare("alma", "Alma"), Ordering::Less);
        assert_eq!(compare("Alma", "alma"), Ordering::Greater);
    }

    #[test]
    fn test_uppercase_digraph() {
        assert_eq!(sorted(&["CSAK", "Cukor"]), ["Cukor", "CSAK"]);
    }

    #[test]
    fn test_digraph_case_counts_every_letter() {
        assert_eq!(sorted(&["CSAK", "Csak", "csak"]), ["csak", "Csak", "CSAK"]);
        assert_eq!(compare("Cs", "CS"), Ordering::Less);
        assert_eq!(sorted(&["DZSUDO", "dzsudo", "Dzsudo"]), ["dzsudo", "Dzsudo", "DZSUDO"]);
    }

    #[test]
    fn test_punctuation_and_digits_before_letters() {
        assert_eq!(sorted(&["b", "1a", "-a", "a"]), ["-a", "1a", "a", "b"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("fa", "fal"), Ordering::Less);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(compare("Jellemző", "Jellemző"), Ordering::Equal);
    }
}
