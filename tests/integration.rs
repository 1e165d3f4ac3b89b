//! End-to-end tests: Hebrew text in, JSON word tokens and legend out.
//!
//! These exercise the table, resolver, text layer, and atomic writer together,
//! the way the `convert` command drives them.

use std::collections::BTreeMap;

use diffable_hebrew::atomic::{AtomicWriter, RetryPolicy};
use diffable_hebrew::cantillation::{self, AccentMark, Role, System};
use diffable_hebrew::resolve::Resolver;
use diffable_hebrew::table::ShortCodeTable;
use diffable_hebrew::text::{Normalization, Transliteration};

// Psalm 1:1, opening words.
const PSALM: &str = "אַ֥שְֽׁרֵי הָאִ֗ישׁ\nאֲשֶׁ֤ר ׀ לֹ֥א\n";

fn resolver() -> Resolver<'static> {
    Resolver::new(ShortCodeTable::standard().unwrap())
}

#[test]
fn convert_writes_one_array_per_line() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("out").join("psalm.json");

    let result = Transliteration::from_text(&resolver(), PSALM);
    AtomicWriter::new(RetryPolicy::default())
        .write_json(&out, &result.lines, 0)
        .unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.ends_with("]\n"));
    let lines: Vec<Vec<String>> = serde_json::from_str(&written).unwrap();
    assert_eq!(lines, result.lines);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].len(), 3);
    // Standalone paseq is its own word.
    assert_eq!(lines[1][1], "|");
    assert!(!dir.path().join("out").join("psalm.tmp.json").exists());
}

#[test]
fn tokens_split_back_into_known_codes() {
    let r = resolver();
    let table = r.table();
    let result = Transliteration::from_text(&r, PSALM);
    for word in result.lines.iter().flatten() {
        for code in word.split(',') {
            assert!(
                table.char_for_code(code).is_some(),
                "{code:?} in {word:?} is not a curated code"
            );
        }
    }
}

#[test]
fn legend_round_trips_through_json() {
    let dir = tempfile::TempDir::new().unwrap();
    let legend_path = dir.path().join("legend.json");

    let result = Transliteration::from_text(&resolver(), PSALM);
    AtomicWriter::new(RetryPolicy::default())
        .write_json(&legend_path, &result.legend, 2)
        .unwrap();

    let legend: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&legend_path).unwrap()).unwrap();
    assert_eq!(legend.len(), result.legend.len());
    let paseq = &legend[&0x05C0.to_string()];
    assert_eq!(paseq["short"], "|");
    assert_eq!(paseq["name"], "HEBREW PUNCTUATION PASEQ");
}

#[test]
fn poetic_accents_in_text_are_classified() {
    let r = resolver();
    let accents: Vec<char> = PSALM
        .chars()
        .filter(|&c| r.table().accent_code(c).is_some())
        .collect();
    assert!(!accents.is_empty());
    for c in accents {
        let class = cantillation::classify(c).unwrap();
        let conj = cantillation::is_conjunctive(AccentMark::Char(c), System::Poetic);
        assert_eq!(class.role(System::Poetic) == Role::Conjunctive, conj);
    }
}

#[test]
fn normalization_changes_tokens_only_when_requested() {
    let r = resolver();
    let text = "\u{05D1}\u{05BC}\u{05B8}";
    let raw = Transliteration::from_text(&r, &Normalization::None.apply(text));
    let nfd = Transliteration::from_text(&r, &Normalization::Nfd.apply(text));
    assert_eq!(raw.lines[0][0], "v,·,a");
    assert_eq!(nfd.lines[0][0], "v,a,·");
}
