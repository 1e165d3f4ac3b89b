//! Cantillation taxonomy: placement, encoding, and per-system role of each accent.
//!
//! The catalog is closed and hand-curated. An accent can be conjunctive in one
//! system and disjunctive (or absent) in the other, so roles are always kept
//! per [`System`].

use std::sync::OnceLock;

use serde::Serialize;

use crate::chars::*;

/// One of the two cantillation systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum System {
    /// The 21 prose books.
    Prose,
    /// Psalms, Proverbs, and Job.
    Poetic,
}

impl System {
    pub fn from_is_poetic(is_poetic: bool) -> Self {
        if is_poetic { Self::Poetic } else { Self::Prose }
    }
}

/// A value for each cantillation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CantSys<T> {
    pub prose: T,
    pub poetic: T,
}

impl<T> CantSys<T> {
    pub const fn new(prose: T, poetic: T) -> Self {
        Self { prose, poetic }
    }

    pub fn get(&self, system: System) -> &T {
        match system {
            System::Prose => &self.prose,
            System::Poetic => &self.poetic,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> CantSys<U> {
        CantSys {
            prose: f(self.prose),
            poetic: f(self.poetic),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    /// The accent has its own Unicode code point.
    DedicatedCodePoint,
    /// The accent is written as a combination of characters by convention.
    MultiCharConvention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Conjunctive,
    Disjunctive,
    NotPresent,
}

/// Accents that Unicode does not encode with a code point of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// Meteg sign on the stressed syllable of the last word of a verse.
    Silluq,
    /// Shalshelet followed by paseq.
    ShalsheletLegarmeih,
    /// Munah followed by paseq.
    MunahLegarmeih,
    /// Prose zarqa (written with U+05AE).
    Zarqa,
    /// Mahapakh followed by paseq.
    MehuppakLegarmeih,
    /// Qadma followed by paseq.
    AzlaLegarmeih,
    /// Poetic tsinnor (written with U+05AE).
    Tsinnor,
    /// Poetic tsinnorit (written with U+0598).
    Tsinnorit,
}

impl Convention {
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Silluq => "nu_slq",
            Self::ShalsheletLegarmeih => "nu_sha_leg",
            Self::MunahLegarmeih => "nu_mun_leg",
            Self::Zarqa => "nu_z",
            Self::MehuppakLegarmeih => "nu_mah_leg",
            Self::AzlaLegarmeih => "nu_azl_leg",
            Self::Tsinnor => "nu_tsor",
            Self::Tsinnorit => "nu_tsit",
        }
    }
}

/// An accent, either a code point or a multi-character convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccentMark {
    Char(char),
    Convention(Convention),
}

/// Classification record for one accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccentClass {
    pub mark: AccentMark,
    pub placement: Placement,
    pub roles: CantSys<Role>,
}

impl AccentClass {
    pub fn encoding(&self) -> Encoding {
        match self.mark {
            AccentMark::Char(_) => Encoding::DedicatedCodePoint,
            AccentMark::Convention(_) => Encoding::MultiCharConvention,
        }
    }

    pub fn role(&self, system: System) -> Role {
        *self.roles.get(system)
    }
}

/// Geresh followed by telisha gedola.
pub const G1_TG: [char; 2] = [GER, TEL_G];
/// Gershayim followed by telisha gedola.
pub const G2_TG: [char; 2] = [GER_2, TEL_G];

use self::AccentMark::{Char as C, Convention as N};
use self::Placement::{Above, Below};
use self::Role::{Conjunctive as Cj, Disjunctive as Dj, NotPresent as Np};

const fn class(mark: AccentMark, placement: Placement, prose: Role, poetic: Role) -> AccentClass {
    AccentClass {
        mark,
        placement,
        roles: CantSys::new(prose, poetic),
    }
}

const CATALOG: &[AccentClass] = &[
    class(C(ATN), Below, Dj, Dj),
    class(C(SEG_A), Above, Dj, Np),
    // Prose shalshelet is disjunctive; poetic shalshelet qetannah is conjunctive.
    class(C(SHA), Above, Dj, Cj),
    class(C(ZAQ_Q), Above, Dj, Np),
    class(C(ZAQ_G), Above, Dj, Np),
    // Poetic tarha.
    class(C(TIP), Below, Dj, Cj),
    class(C(REV), Above, Dj, Dj),
    // Poetic tsinnorit is the Tsinnorit convention.
    class(C(ZSH_OR_TSIT), Above, Dj, Np),
    class(C(PASH), Above, Dj, Np),
    class(C(YET), Below, Dj, Np),
    class(C(TEV), Below, Dj, Np),
    class(C(GER), Above, Dj, Np),
    class(C(GER_M), Above, Dj, Np),
    class(C(GER_2), Above, Dj, Np),
    class(C(QAR), Above, Dj, Np),
    class(C(TEL_G), Above, Dj, Np),
    class(C(PAZ), Above, Dj, Dj),
    class(C(ATN_H), Below, Np, Cj),
    class(C(MUN), Below, Cj, Cj),
    class(C(MAH), Below, Cj, Cj),
    // Poetic merkha as yored (in oleh we-yored) is disjunctive.
    class(C(MER), Below, Cj, Cj),
    class(C(MER_2), Below, Cj, Np),
    class(C(DAR), Below, Cj, Np),
    class(C(QOM), Above, Cj, Cj),
    class(C(TEL_Q), Above, Cj, Np),
    class(C(YBY), Below, Cj, Cj),
    class(C(OLE), Above, Np, Dj),
    class(C(ILU), Above, Np, Cj),
    class(C(DEX), Below, Np, Dj),
    class(C(Z_OR_TSOR), Above, Dj, Dj),
    // Meteg has no phrasing role; as silluq it is the Silluq convention.
    class(C(MTGOSLQ), Below, Np, Np),
    class(N(Convention::Silluq), Below, Dj, Dj),
    class(N(Convention::ShalsheletLegarmeih), Above, Dj, Dj),
    class(N(Convention::MunahLegarmeih), Below, Dj, Dj),
    class(N(Convention::Zarqa), Above, Dj, Np),
    class(N(Convention::MehuppakLegarmeih), Below, Np, Dj),
    class(N(Convention::AzlaLegarmeih), Above, Np, Dj),
    class(N(Convention::Tsinnor), Above, Np, Dj),
    class(N(Convention::Tsinnorit), Above, Np, Cj),
];

// Yeivin, Introduction to the Tiberian Masorah, #194.
const CONJUNCTIVES_PROSE: &[AccentMark] = &[
    C(MUN),
    C(MAH),
    C(MER),
    C(DAR),
    C(QOM),
    C(TEL_Q),
    C(YBY),
    C(MER_2),
];

// Yeivin #358, plus atnah hafukh from #361.
const CONJUNCTIVES_POETIC: &[AccentMark] = &[
    C(MUN),
    C(MER),
    C(ILU),
    C(TIP),
    C(YBY),
    C(MAH),
    C(QOM),
    C(SHA),
    N(Convention::Tsinnorit),
    C(ATN_H),
];

static CONJUNCTIVES: CantSys<&[AccentMark]> = CantSys::new(CONJUNCTIVES_PROSE, CONJUNCTIVES_POETIC);

/// Every classified accent, code points first.
pub fn all_classes() -> &'static [AccentClass] {
    CATALOG
}

/// Classification of an accent mark, if it is in the catalog.
pub fn classify_mark(mark: AccentMark) -> Option<&'static AccentClass> {
    CATALOG.iter().find(|c| c.mark == mark)
}

/// Classification of an accent code point.
pub fn classify(c: char) -> Option<&'static AccentClass> {
    static BY_CHAR: OnceLock<std::collections::HashMap<char, &'static AccentClass>> =
        OnceLock::new();
    BY_CHAR
        .get_or_init(|| {
            CATALOG
                .iter()
                .filter_map(|class| match class.mark {
                    AccentMark::Char(ch) => Some((ch, class)),
                    AccentMark::Convention(_) => None,
                })
                .collect()
        })
        .get(&c)
        .copied()
}

/// Conjunctive accents of each system, in the traditional listing order.
pub fn conjunctives() -> &'static CantSys<&'static [AccentMark]> {
    &CONJUNCTIVES
}

/// Whether `mark` is conjunctive in `system`.
pub fn is_conjunctive(mark: AccentMark, system: System) -> bool {
    conjunctives().get(system).contains(&mark)
}
