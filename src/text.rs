//! Text → per-line, per-word short-code tokens.
//!
//! A word token is the comma-joined short names of the word's characters.
//! Lines are kept even when empty so output line numbers match the input.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::chars::MTGOSLQ;
use crate::resolve::{CharReport, NameSource, Resolver};

static RE_NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x{05D0}-\x{05EA}]+").unwrap());

/// Unicode normalization applied before tokenizing.
///
/// Canonical reordering moves Hebrew points and accents around, so the
/// default is to leave the text as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    #[default]
    None,
    Nfc,
    Nfd,
}

impl Normalization {
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::None => text.to_string(),
            Self::Nfc => text.nfc().collect(),
            Self::Nfd => text.nfd().collect(),
        }
    }
}

/// Short names of each character of `word`.
pub fn short_names<N: NameSource>(resolver: &Resolver<'_, N>, word: &str) -> Vec<String> {
    word.chars().map(|c| resolver.resolve(c)).collect()
}

/// Short names of `word` joined with `sep` (`","` for word tokens).
pub fn join_short_names<N: NameSource>(resolver: &Resolver<'_, N>, word: &str, sep: &str) -> String {
    short_names(resolver, word).join(sep)
}

/// Only the Hebrew letters of `s`: points, accents, maqaf and so on removed.
pub fn letters(s: &str) -> String {
    RE_NON_LETTER.replace_all(s, "").into_owned()
}

/// Short codes of the accents (meteg included) that occur in `s`, in order.
pub fn accent_names<N: NameSource>(resolver: &Resolver<'_, N>, s: &str) -> Vec<&'static str> {
    s.chars()
        .filter_map(|c| resolver.table().accent_code(c))
        .collect()
}

/// `s` with every meteg/silluq removed.
pub fn remove_meteg(s: &str) -> String {
    s.chars().filter(|&c| c != MTGOSLQ).collect()
}

/// Tokenized text plus a legend of every distinct character seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transliteration {
    pub lines: Vec<Vec<String>>,
    pub legend: BTreeMap<u32, CharReport>,
}

impl Transliteration {
    pub fn from_text<N: NameSource>(resolver: &Resolver<'_, N>, text: &str) -> Self {
        let mut out = Self::default();
        for line in text.lines() {
            let words: Vec<String> = line
                .split_whitespace()
                .map(|word| {
                    for c in word.chars() {
                        out.legend
                            .entry(c as u32)
                            .or_insert_with(|| resolver.describe(c));
                    }
                    join_short_names(resolver, word, ",")
                })
                .collect();
            out.lines.push(words);
        }
        out
    }

    pub fn word_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ShortCodeTable;

    fn resolver() -> Resolver<'static> {
        Resolver::new(ShortCodeTable::standard().unwrap())
    }

    // Genesis 1:1, first two words.
    const BERESHIT: &str = "בְּרֵאשִׁ֖ית בָּרָ֣א";

    #[test]
    fn word_tokens_are_comma_joined() {
        let r = resolver();
        assert_eq!(join_short_names(&r, "שָׁ", ","), "$,a,·sh");
        assert_eq!(short_names(&r, "בּ"), vec!["v", "·"]);
    }

    #[test]
    fn transliterates_lines_and_words() {
        let r = resolver();
        let t = Transliteration::from_text(&r, &format!("{BERESHIT}\n\nאֱלֹהִ֑ים\n"));
        assert_eq!(t.lines.len(), 3);
        assert_eq!(t.lines[0].len(), 2);
        assert!(t.lines[1].is_empty());
        assert_eq!(t.lines[0][0], "v,:,·,r,‥,α,$,i,·sh,(tip),y,τ");
        assert_eq!(t.lines[2][0], "α,:∵,l,o,h,i,(atn),y,m.");
        assert_eq!(t.word_count(), 3);
    }

    #[test]
    fn legend_is_keyed_by_code_point() {
        let r = resolver();
        let t = Transliteration::from_text(&r, "בָּ בָּ");
        assert_eq!(t.legend.len(), 3);
        let bet = &t.legend[&0x05D1];
        assert_eq!(bet.short, "v");
        assert_eq!(bet.name.as_deref(), Some("HEBREW LETTER BET"));
    }

    #[test]
    fn letters_strips_marks() {
        assert_eq!(letters(BERESHIT), "בראשיתברא");
        assert_eq!(letters("עַל־פְּנֵי"), "עלפני");
    }

    #[test]
    fn accent_names_in_order() {
        let r = resolver();
        assert_eq!(accent_names(&r, BERESHIT), vec!["(tip)", "(mun)"]);
        assert!(accent_names(&r, "שָׁלוֹם").is_empty());
    }

    #[test]
    fn remove_meteg_only_drops_meteg() {
        assert_eq!(remove_meteg("בָֽרָא"), "בָרָא");
    }

    #[test]
    fn normalization_modes() {
        // Dagesh (ccc 21) before qamats (ccc 18) is reordered by NFD.
        let text = "\u{05D1}\u{05BC}\u{05B8}";
        assert_eq!(Normalization::None.apply(text), text);
        assert_eq!(Normalization::Nfd.apply(text), "\u{05D1}\u{05B8}\u{05BC}");
    }
}
