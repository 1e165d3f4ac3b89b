//! Named Hebrew code points.
//!
//! Letters, points, accents, and punctuation as `char` constants, so the
//! curated tables and the cantillation taxonomy can refer to them by name
//! instead of by raw code point.

// -- Letters: U+05D0–U+05EA --
pub const ALEF: char = '\u{05D0}';
pub const BET: char = '\u{05D1}';
pub const GIMEL: char = '\u{05D2}';
pub const DALET: char = '\u{05D3}';
pub const HE: char = '\u{05D4}';
pub const VAV: char = '\u{05D5}';
pub const ZAYIN: char = '\u{05D6}';
pub const XET: char = '\u{05D7}';
pub const TET: char = '\u{05D8}';
pub const YOD: char = '\u{05D9}';
pub const FKAF: char = '\u{05DA}';
pub const KAF: char = '\u{05DB}';
pub const LAMED: char = '\u{05DC}';
pub const FMEM: char = '\u{05DD}';
pub const MEM: char = '\u{05DE}';
pub const FNUN: char = '\u{05DF}';
pub const NUN: char = '\u{05E0}';
pub const SAMEKH: char = '\u{05E1}';
pub const AYIN: char = '\u{05E2}';
pub const FPE: char = '\u{05E3}';
pub const PE: char = '\u{05E4}';
pub const FTSADI: char = '\u{05E5}';
pub const TSADI: char = '\u{05E6}';
pub const QOF: char = '\u{05E7}';
pub const RESH: char = '\u{05E8}';
pub const SHIN: char = '\u{05E9}';
pub const TAV: char = '\u{05EA}';

// -- Points --
pub const SHEVA: char = '\u{05B0}';
pub const XSEGOL: char = '\u{05B1}';
pub const XPATAX: char = '\u{05B2}';
pub const XQAMATS: char = '\u{05B3}';
pub const XIRIQ: char = '\u{05B4}';
pub const TSERE: char = '\u{05B5}';
pub const SEGOL_V: char = '\u{05B6}';
pub const PATAX: char = '\u{05B7}';
pub const QAMATS: char = '\u{05B8}';
pub const XOLAM: char = '\u{05B9}';
pub const XOLAM_XFV: char = '\u{05BA}';
pub const QUBUTS: char = '\u{05BB}';
/// Dagesh or mapiq.
pub const DAGOMOSD: char = '\u{05BC}';
/// Meteg or silluq. Treated as an accent, not a point.
pub const MTGOSLQ: char = '\u{05BD}';
pub const RAFE: char = '\u{05BF}';
pub const SHIND: char = '\u{05C1}';
pub const SIND: char = '\u{05C2}';
pub const QAMATS_Q: char = '\u{05C7}';
pub const VARIKA: char = '\u{FB1E}';

// -- Accents: U+0591–U+05AE --
pub const ATN: char = '\u{0591}';
/// Segol the accent (segolta), as opposed to [`SEGOL_V`] the vowel.
pub const SEG_A: char = '\u{0592}';
pub const SHA: char = '\u{0593}';
pub const ZAQ_Q: char = '\u{0594}';
pub const ZAQ_G: char = '\u{0595}';
pub const TIP: char = '\u{0596}';
pub const REV: char = '\u{0597}';
/// Unicode ZARQA: in practice the zarqa stress helper, or tsinnorit.
pub const ZSH_OR_TSIT: char = '\u{0598}';
pub const PASH: char = '\u{0599}';
pub const YET: char = '\u{059A}';
pub const TEV: char = '\u{059B}';
pub const GER: char = '\u{059C}';
pub const GER_M: char = '\u{059D}';
pub const GER_2: char = '\u{059E}';
pub const QAR: char = '\u{059F}';
pub const TEL_G: char = '\u{05A0}';
pub const PAZ: char = '\u{05A1}';
pub const ATN_H: char = '\u{05A2}';
pub const MUN: char = '\u{05A3}';
pub const MAH: char = '\u{05A4}';
pub const MER: char = '\u{05A5}';
pub const MER_2: char = '\u{05A6}';
pub const DAR: char = '\u{05A7}';
/// Qadma (azla) or metigah.
pub const QOM: char = '\u{05A8}';
pub const TEL_Q: char = '\u{05A9}';
/// Yerah ben yomo, also known as galgal.
pub const YBY: char = '\u{05AA}';
pub const OLE: char = '\u{05AB}';
pub const ILU: char = '\u{05AC}';
pub const DEX: char = '\u{05AD}';
/// Unicode ZINOR: zarqa in prose, tsinnor in the poetic books.
pub const Z_OR_TSOR: char = '\u{05AE}';

// -- Punctuation --
pub const MAQ: char = '\u{05BE}';
/// Paseq, also the vertical stroke of legarmeih.
pub const PASOLEG: char = '\u{05C0}';
pub const SOPA: char = '\u{05C3}';
/// Masora circle.
pub const MCIRC: char = '\u{05AF}';

// -- Miscellaneous --
pub const CGJ: char = '\u{034F}';

/// Whether `c` is one of the 27 Hebrew letters (finals included).
pub fn is_letter(c: char) -> bool {
    (ALEF..=TAV).contains(&c)
}

/// Whether `c` is an accent (U+0591–U+05AE) or meteg/silluq.
pub fn is_accent_or_meteg(c: char) -> bool {
    (ATN..=Z_OR_TSOR).contains(&c) || c == MTGOSLQ
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_range() {
        assert!(is_letter(ALEF));
        assert!(is_letter(FKAF));
        assert!(is_letter(TAV));
        assert!(!is_letter(QAMATS));
        assert!(!is_letter(MAQ));
    }

    #[test]
    fn accent_range_includes_meteg() {
        assert!(is_accent_or_meteg(ATN));
        assert!(is_accent_or_meteg(Z_OR_TSOR));
        assert!(is_accent_or_meteg(MTGOSLQ));
        assert!(!is_accent_or_meteg(MCIRC));
        assert!(!is_accent_or_meteg(SHEVA));
    }
}
