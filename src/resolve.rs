//! Short-name resolution: one character in, one diffable token out.
//!
//! Resolution order:
//! 1. curated table (letters, points, punctuation, accents)
//! 2. miscellaneous shortenings (CGJ)
//! 3. the standard Unicode name, compressed by [`shorten_name`]
//! 4. the decimal code point, for characters with no standard name
//!
//! Every step is total, so [`Resolver::resolve`] never fails.

use serde::Serialize;

use crate::error::ShortNameError;
use crate::table::ShortCodeTable;

/// Source of standard Unicode character names.
pub trait NameSource: Send + Sync {
    fn name(&self, c: char) -> Option<String>;
}

/// Standard names from the Unicode character database.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNames;

impl NameSource for UnicodeNames {
    fn name(&self, c: char) -> Option<String> {
        unicode_names2::name(c).map(|n| n.to_string())
    }
}

/// Two-word name prefixes and their abbreviations.
const PREFIX_ABBREVS: &[(&str, &str, &str)] = &[
    ("HEBREW", "LETTER", "HLE"),
    ("HEBREW", "POINT", "HPO"),
    ("HEBREW", "ACCENT", "HAC"),
    ("HEBREW", "PUNCTUATION", "HPU"),
    ("HEBREW", "MARK", "HMA"),
];

/// Compress a standard name by abbreviating a known two-word prefix.
///
/// Names of fewer than three words, and names without a known prefix, are
/// returned unchanged.
pub fn shorten_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() < 3 {
        return name.to_string();
    }
    match PREFIX_ABBREVS
        .iter()
        .find(|(w1, w2, _)| *w1 == words[0] && *w2 == words[1])
    {
        Some((_, _, abbrev)) => format!("{abbrev} {}", words[2..].join(" ")),
        None => name.to_string(),
    }
}

/// Code point, short code, and standard name of one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharReport {
    pub code_point: u32,
    pub short: String,
    pub name: Option<String>,
}

/// Resolves characters to short tokens against a shared, read-only table.
#[derive(Debug, Clone)]
pub struct Resolver<'t, N = UnicodeNames> {
    table: &'t ShortCodeTable,
    names: N,
}

impl<'t> Resolver<'t, UnicodeNames> {
    pub fn new(table: &'t ShortCodeTable) -> Self {
        Self::with_names(table, UnicodeNames)
    }
}

impl<'t, N: NameSource> Resolver<'t, N> {
    pub fn with_names(table: &'t ShortCodeTable, names: N) -> Self {
        Self { table, names }
    }

    pub fn table(&self) -> &'t ShortCodeTable {
        self.table
    }

    /// Short token for `c`. Never empty, never contains a comma.
    pub fn resolve(&self, c: char) -> String {
        let curated = [self.table.code(c), self.table.misc_code(c)];
        if let Some(code) = curated.into_iter().flatten().next() {
            return code.to_string();
        }
        match self.standard_name(c) {
            Some(name) => shorten_name(&name).replace(',', " "),
            None => (c as u32).to_string(),
        }
    }

    /// Standard name of `c`; a blank name counts as no name.
    fn standard_name(&self, c: char) -> Option<String> {
        self.names.name(c).filter(|n| !n.trim().is_empty())
    }

    /// Like [`resolve`](Self::resolve), for input that must be exactly one
    /// scalar value.
    pub fn resolve_str(&self, s: &str) -> Result<String, ShortNameError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(self.resolve(c)),
            _ => Err(ShortNameError::InvalidArgument {
                input: s.to_string(),
                count: s.chars().count(),
            }),
        }
    }

    pub fn describe(&self, c: char) -> CharReport {
        CharReport {
            code_point: c as u32,
            short: self.resolve(c),
            name: self.standard_name(c),
        }
    }

    /// Curated or miscellaneous code for `c`, or an error if it has none.
    pub fn he_char_name(&self, c: char) -> Result<&'static str, ShortNameError> {
        self.he_char_name_q(c)
            .ok_or(ShortNameError::NotCurated { code_point: c as u32 })
    }

    pub fn he_char_name_q(&self, c: char) -> Option<&'static str> {
        self.table.code(c).or_else(|| self.table.misc_code(c))
    }
}
