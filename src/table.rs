//! Curated short codes for Hebrew letters, points, punctuation, and accents.
//!
//! The codes are chosen by hand so that no two are visually confusable and
//! none contains a comma. [`ShortCodeTable::build`] checks both properties
//! and refuses to build a table that violates them.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::chars::*;
use crate::error::{TableIntegrityError, TableResult};

/// One curated entry: source character and its short code.
pub type Entry = (char, &'static str);

pub const LETTERS: &[Entry] = &[
    (ALEF, "α"), // Greek alpha
    (BET, "v"),  // v not b
    (GIMEL, "g"),
    (DALET, "d"),
    (HE, "h"),
    (VAV, "w"),
    (ZAYIN, "z"),
    (XET, "x"),
    (TET, "θ"),
    (YOD, "y"),
    (FKAF, "k."),
    (KAF, "k"),
    (LAMED, "l"),
    (FMEM, "m."),
    (MEM, "m"),
    (FNUN, "n."),
    (NUN, "n"),
    (SAMEKH, "σ"), // Greek sigma
    (AYIN, "ʕ"),   // pharyngeal voiced fricative
    (FPE, "f."),   // f. not p.
    (PE, "f"),     // f not p
    (FTSADI, "ц."),
    (TSADI, "ц"), // Cyrillic tse
    (QOF, "q"),
    (RESH, "r"),
    (SHIN, "$"),
    (TAV, "τ"), // Greek tau
];

pub const POINTS: &[Entry] = &[
    (VARIKA, "varika"),
    (DAGOMOSD, "·"),
    (RAFE, "‾"),
    (SHIND, "·sh"),
    (SIND, "·si"),
    (SHEVA, ":"), // na or nax
    (XSEGOL, ":∵"),
    (XPATAX, ":_"),
    (XQAMATS, ":a"),
    (XIRIQ, "i"),
    (TSERE, "‥"),
    (SEGOL_V, "∵"),
    (PATAX, "_"),
    (QAMATS, "a"), // gadol or qatan
    (QAMATS_Q, "oa"),
    (XOLAM_XFV, "xxfv"),
    (XOLAM, "o"),
    (QUBUTS, "u"),
];

pub const PUNCTUATION: &[Entry] = &[
    (MAQ, "-"),
    (PASOLEG, "|"),
    (SOPA, "(sopa)"),
    (MCIRC, "ḿ"),
];

/// Accents, with meteg/silluq counted among them.
pub const ACCENTS: &[Entry] = &[
    (Z_OR_TSOR, "~"),
    (ZSH_OR_TSIT, "≁"),
    (MTGOSLQ, "(mos)"),
    (ATN, "(atn)"),
    (SEG_A, "(seg_a)"),
    (SHA, "(sha)"),
    (ZAQ_Q, "(zaq_q)"),
    (ZAQ_G, "(zaq_g)"),
    (TIP, "(tip)"),
    (REV, "(rev)"),
    (PASH, "(pash)"),
    (YET, "(yet)"),
    (TEV, "(tev)"),
    (GER, "(ger)"),
    (GER_M, "(ger_m)"),
    (GER_2, "(ger_2)"),
    (QAR, "(qar)"),
    (TEL_G, "(tel_g)"),
    (PAZ, "(paz)"),
    (ATN_H, "(atn_h)"),
    (MUN, "(mun)"),
    (MAH, "(mah)"),
    (MER, "(mer)"),
    (MER_2, "(mer_2)"),
    (DAR, "(dar)"),
    (QOM, "(qom)"),
    (TEL_Q, "(tel_q)"),
    (YBY, "(yby)"),
    (OLE, "(ole)"),
    (ILU, "(ilu)"),
    (DEX, "(dex)"),
];

/// Shortenings for non-Hebrew marks that show up in Hebrew text.
pub const MISC: &[Entry] = &[(CGJ, "CGJ")];

/// Immutable, collision-checked character → short code mapping.
#[derive(Debug)]
pub struct ShortCodeTable {
    entries: Vec<Entry>,
    curated: HashMap<char, &'static str>,
    misc: HashMap<char, &'static str>,
    by_code: HashMap<&'static str, char>,
}

static STANDARD: OnceLock<TableResult<ShortCodeTable>> = OnceLock::new();

impl ShortCodeTable {
    /// Build a table from curated sub-tables (concatenated in the given order)
    /// and a miscellaneous shortenings table.
    ///
    /// Short codes must be unique across both, non-empty, and comma-free.
    pub fn build(curated: &[&[Entry]], misc: &[Entry]) -> TableResult<Self> {
        let mut table = Self {
            entries: Vec::new(),
            curated: HashMap::new(),
            misc: HashMap::new(),
            by_code: HashMap::new(),
        };
        for &entry in curated.iter().flat_map(|sub| sub.iter()) {
            table.insert(entry, false)?;
        }
        for &entry in misc {
            table.insert(entry, true)?;
        }
        Ok(table)
    }

    fn insert(&mut self, (c, code): Entry, is_misc: bool) -> TableResult<()> {
        if code.is_empty() {
            return Err(TableIntegrityError::EmptyCode {
                code_point: c as u32,
            });
        }
        if code.contains(',') {
            return Err(TableIntegrityError::CommaInCode {
                code: code.to_string(),
                code_point: c as u32,
            });
        }
        if self.curated.contains_key(&c) || self.misc.contains_key(&c) {
            return Err(TableIntegrityError::DuplicateChar {
                code_point: c as u32,
            });
        }
        if let Some(&first) = self.by_code.get(code) {
            return Err(TableIntegrityError::DuplicateCode {
                code: code.to_string(),
                first: first as u32,
                second: c as u32,
            });
        }
        self.by_code.insert(code, c);
        if is_misc {
            self.misc.insert(c, code);
        } else {
            self.curated.insert(c, code);
        }
        self.entries.push((c, code));
        Ok(())
    }

    /// The built-in table: letters, points, punctuation, accents, then misc.
    ///
    /// Built once per process. An integrity error here is a data defect and
    /// is returned on every call.
    pub fn standard() -> TableResult<&'static ShortCodeTable> {
        STANDARD
            .get_or_init(|| Self::build(&[LETTERS, POINTS, PUNCTUATION, ACCENTS], MISC))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Curated code for `c` (letters, points, punctuation, accents).
    pub fn code(&self, c: char) -> Option<&'static str> {
        self.curated.get(&c).copied()
    }

    /// Miscellaneous shortening for `c`.
    pub fn misc_code(&self, c: char) -> Option<&'static str> {
        self.misc.get(&c).copied()
    }

    /// Curated code for `c` if it is an accent or meteg/silluq.
    pub fn accent_code(&self, c: char) -> Option<&'static str> {
        if is_accent_or_meteg(c) {
            self.code(c)
        } else {
            None
        }
    }

    /// Reverse lookup: the character a short code stands for.
    pub fn char_for_code(&self, code: &str) -> Option<char> {
        self.by_code.get(code).copied()
    }

    /// All entries in table order, misc last.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
