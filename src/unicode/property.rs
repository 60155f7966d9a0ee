//! Break property classes and code point classification.
//!
//! Each boundary kind has its own closed class enumeration. Lookups are a
//! binary search over the generated range tables; anything not listed takes
//! the property's default class.

use super::engine::Decision;
use super::tables;
use super::{grapheme, line, sentence, word};

const SURROGATES: std::ops::RangeInclusive<u32> = 0xD800..=0xDFFF;

/// The four boundary kinds of the Unicode segmentation standards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Extended grapheme clusters (UAX #29).
    Grapheme,
    /// Words (UAX #29).
    Word,
    /// Sentences (UAX #29).
    Sentence,
    /// Line break opportunities (UAX #14).
    Line,
}

/// `Grapheme_Cluster_Break` classes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphemeClass {
    Other,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
}

impl GraphemeClass {
    pub const COUNT: usize = 14;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Other,
        Self::CR,
        Self::LF,
        Self::Control,
        Self::Extend,
        Self::ZWJ,
        Self::RegionalIndicator,
        Self::Prepend,
        Self::SpacingMark,
        Self::L,
        Self::V,
        Self::T,
        Self::LV,
        Self::LVT,
    ];
}

/// `Word_Break` classes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordClass {
    Other,
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
}

impl WordClass {
    pub const COUNT: usize = 19;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Other,
        Self::CR,
        Self::LF,
        Self::Newline,
        Self::Extend,
        Self::ZWJ,
        Self::RegionalIndicator,
        Self::Format,
        Self::Katakana,
        Self::HebrewLetter,
        Self::ALetter,
        Self::SingleQuote,
        Self::DoubleQuote,
        Self::MidNumLet,
        Self::MidLetter,
        Self::MidNum,
        Self::Numeric,
        Self::ExtendNumLet,
        Self::WSegSpace,
    ];

    /// ALetter or Hebrew_Letter.
    pub(crate) const fn is_ah_letter(self) -> bool {
        matches!(self, Self::ALetter | Self::HebrewLetter)
    }

    /// MidNumLet or Single_Quote.
    pub(crate) const fn is_mid_num_let_q(self) -> bool {
        matches!(self, Self::MidNumLet | Self::SingleQuote)
    }

    pub(crate) const fn is_newline(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Newline)
    }
}

/// `Sentence_Break` classes.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentenceClass {
    Other,
    CR,
    LF,
    Extend,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    SContinue,
    STerm,
    Close,
}

impl SentenceClass {
    pub const COUNT: usize = 15;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Other,
        Self::CR,
        Self::LF,
        Self::Extend,
        Self::Sep,
        Self::Format,
        Self::Sp,
        Self::Lower,
        Self::Upper,
        Self::OLetter,
        Self::Numeric,
        Self::ATerm,
        Self::SContinue,
        Self::STerm,
        Self::Close,
    ];

    /// Sep, CR or LF.
    pub(crate) const fn is_para_sep(self) -> bool {
        matches!(self, Self::Sep | Self::CR | Self::LF)
    }

    /// ATerm or STerm.
    pub(crate) const fn is_sa_term(self) -> bool {
        matches!(self, Self::ATerm | Self::STerm)
    }
}

/// `Line_Break` classes, including the ones resolved away by rule LB1.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineClass {
    BK,
    CR,
    LF,
    NL,
    SP,
    ZW,
    WJ,
    GL,
    CB,
    CL,
    CP,
    EX,
    IS,
    SY,
    OP,
    QU,
    NS,
    B2,
    BA,
    BB,
    HY,
    IN,
    NU,
    PR,
    PO,
    AL,
    HL,
    ID,
    EB,
    EM,
    JL,
    JV,
    JT,
    H2,
    H3,
    RI,
    AK,
    AP,
    AS,
    VF,
    VI,
    CM,
    ZWJ,
    AI,
    SA,
    SG,
    CJ,
    XX,
}

impl LineClass {
    pub const COUNT: usize = 48;
    pub const ALL: [Self; Self::COUNT] = [
        Self::BK,
        Self::CR,
        Self::LF,
        Self::NL,
        Self::SP,
        Self::ZW,
        Self::WJ,
        Self::GL,
        Self::CB,
        Self::CL,
        Self::CP,
        Self::EX,
        Self::IS,
        Self::SY,
        Self::OP,
        Self::QU,
        Self::NS,
        Self::B2,
        Self::BA,
        Self::BB,
        Self::HY,
        Self::IN,
        Self::NU,
        Self::PR,
        Self::PO,
        Self::AL,
        Self::HL,
        Self::ID,
        Self::EB,
        Self::EM,
        Self::JL,
        Self::JV,
        Self::JT,
        Self::H2,
        Self::H3,
        Self::RI,
        Self::AK,
        Self::AP,
        Self::AS,
        Self::VF,
        Self::VI,
        Self::CM,
        Self::ZWJ,
        Self::AI,
        Self::SA,
        Self::SG,
        Self::CJ,
        Self::XX,
    ];

    /// Mandatory break classes (BK, CR, LF, NL).
    #[must_use]
    pub const fn is_hard_break(self) -> bool {
        matches!(self, Self::BK | Self::CR | Self::LF | Self::NL)
    }

    /// AL or HL.
    pub(crate) const fn is_alphabetic(self) -> bool {
        matches!(self, Self::AL | Self::HL)
    }
}

/// `Indic_Conjunct_Break` values other than `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndicConjunct {
    Consonant,
    Extend,
    Linker,
}

/// A break property class of one boundary kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyClass {
    Grapheme(GraphemeClass),
    Word(WordClass),
    Sentence(SentenceClass),
    Line(LineClass),
}

impl PropertyClass {
    /// The boundary kind this class belongs to.
    #[must_use]
    pub const fn kind(self) -> BoundaryKind {
        match self {
            Self::Grapheme(_) => BoundaryKind::Grapheme,
            Self::Word(_) => BoundaryKind::Word,
            Self::Sentence(_) => BoundaryKind::Sentence,
            Self::Line(_) => BoundaryKind::Line,
        }
    }
}

/// Classify a character for the given boundary kind.
///
/// Line classes are returned as stored in the property data, before the
/// LB1 resolution of AI, SA, SG, CJ and XX.
#[must_use]
pub fn classify(c: char, kind: BoundaryKind) -> PropertyClass {
    let cp = u32::from(c);
    match kind {
        BoundaryKind::Grapheme => PropertyClass::Grapheme(grapheme_class(cp)),
        BoundaryKind::Word => PropertyClass::Word(word_class(cp)),
        BoundaryKind::Sentence => PropertyClass::Sentence(sentence_class(cp)),
        BoundaryKind::Line => PropertyClass::Line(line_class(cp)),
    }
}

/// Look up the pairwise decision between two adjacent classes.
///
/// Only the rules that depend on nothing but the two classes are encoded;
/// `Decision::Indeterminate` means the outcome rests on context rules or on
/// the kind's default.
///
/// # Panics
///
/// Panics if the two classes belong to different boundary kinds.
#[must_use]
pub fn pairwise(prev: PropertyClass, curr: PropertyClass) -> Decision {
    match (prev, curr) {
        (PropertyClass::Grapheme(b), PropertyClass::Grapheme(a)) => grapheme::pair(b, a).decision,
        (PropertyClass::Word(b), PropertyClass::Word(a)) => word::pair(b, a).decision,
        (PropertyClass::Sentence(b), PropertyClass::Sentence(a)) => sentence::pair(b, a).decision,
        (PropertyClass::Line(b), PropertyClass::Line(a)) => line::pair(b, a).decision,
        (prev, curr) => panic!(
            "pairwise lookup across boundary kinds: {:?} vs {:?}",
            prev.kind(),
            curr.kind()
        ),
    }
}

fn lookup<T: Copy>(table: &[(u32, u32, T)], cp: u32) -> Option<T> {
    table
        .binary_search_by(|&(lo, hi, _)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|idx| table[idx].2)
}

fn contains(table: &[(u32, u32)], cp: u32) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

pub(crate) fn grapheme_class(cp: u32) -> GraphemeClass {
    if SURROGATES.contains(&cp) {
        return GraphemeClass::Control;
    }
    lookup(tables::GRAPHEME_CLUSTER_BREAK, cp).unwrap_or(GraphemeClass::Other)
}

pub(crate) fn word_class(cp: u32) -> WordClass {
    lookup(tables::WORD_BREAK, cp).unwrap_or(WordClass::Other)
}

pub(crate) fn sentence_class(cp: u32) -> SentenceClass {
    lookup(tables::SENTENCE_BREAK, cp).unwrap_or(SentenceClass::Other)
}

pub(crate) fn line_class(cp: u32) -> LineClass {
    if SURROGATES.contains(&cp) {
        return LineClass::SG;
    }
    lookup(tables::LINE_BREAK, cp).unwrap_or(LineClass::XX)
}

pub(crate) fn indic_conjunct(cp: u32) -> Option<IndicConjunct> {
    lookup(tables::INDIC_CONJUNCT_BREAK, cp)
}

pub(crate) fn is_extended_pictographic(cp: u32) -> bool {
    contains(tables::EXTENDED_PICTOGRAPHIC, cp)
}

pub(crate) fn is_unassigned_pictographic(cp: u32) -> bool {
    contains(tables::EXTENDED_PICTOGRAPHIC_UNASSIGNED, cp)
}

/// East Asian Width of F, W or H.
pub(crate) fn is_east_asian_wide(cp: u32) -> bool {
    contains(tables::EAST_ASIAN_WIDE, cp)
}

/// East Asian Width of A.
pub(crate) fn is_east_asian_ambiguous(cp: u32) -> bool {
    contains(tables::EAST_ASIAN_AMBIGUOUS, cp)
}

pub(crate) fn is_initial_quote(cp: u32) -> bool {
    contains(tables::INITIAL_PUNCTUATION_QUOTES, cp)
}

pub(crate) fn is_final_quote(cp: u32) -> bool {
    contains(tables::FINAL_PUNCTUATION_QUOTES, cp)
}

pub(crate) fn is_southeast_asian_mark(cp: u32) -> bool {
    contains(tables::SOUTHEAST_ASIAN_MARKS, cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted_and_disjoint() {
        fn check<T>(table: &[(u32, u32, T)]) {
            for pair in table.windows(2) {
                assert!(pair[0].0 <= pair[0].1);
                assert!(pair[0].1 < pair[1].0, "overlap at {:#X}", pair[1].0);
            }
        }
        check(tables::GRAPHEME_CLUSTER_BREAK);
        check(tables::WORD_BREAK);
        check(tables::SENTENCE_BREAK);
        check(tables::LINE_BREAK);
        check(tables::INDIC_CONJUNCT_BREAK);
        for set in [
            tables::EXTENDED_PICTOGRAPHIC,
            tables::EAST_ASIAN_WIDE,
            tables::EAST_ASIAN_AMBIGUOUS,
        ] {
            for pair in set.windows(2) {
                assert!(pair[0].1 < pair[1].0);
            }
        }
    }

    #[test]
    fn test_classify_grapheme() {
        assert_eq!(
            classify('\r', BoundaryKind::Grapheme),
            PropertyClass::Grapheme(GraphemeClass::CR)
        );
        assert_eq!(
            classify('\u{0301}', BoundaryKind::Grapheme),
            PropertyClass::Grapheme(GraphemeClass::Extend)
        );
        assert_eq!(
            classify('\u{1F1FA}', BoundaryKind::Grapheme),
            PropertyClass::Grapheme(GraphemeClass::RegionalIndicator)
        );
        assert_eq!(
            classify('\u{AC00}', BoundaryKind::Grapheme),
            PropertyClass::Grapheme(GraphemeClass::LV)
        );
        assert_eq!(
            classify('a', BoundaryKind::Grapheme),
            PropertyClass::Grapheme(GraphemeClass::Other)
        );
    }

    #[test]
    fn test_classify_word_and_sentence() {
        assert_eq!(
            classify('a', BoundaryKind::Word),
            PropertyClass::Word(WordClass::ALetter)
        );
        assert_eq!(
            classify('7', BoundaryKind::Word),
            PropertyClass::Word(WordClass::Numeric)
        );
        assert_eq!(
            classify(',', BoundaryKind::Word),
            PropertyClass::Word(WordClass::MidNum)
        );
        assert_eq!(
            classify('.', BoundaryKind::Sentence),
            PropertyClass::Sentence(SentenceClass::ATerm)
        );
        assert_eq!(
            classify('?', BoundaryKind::Sentence),
            PropertyClass::Sentence(SentenceClass::STerm)
        );
        assert_eq!(
            classify('A', BoundaryKind::Sentence),
            PropertyClass::Sentence(SentenceClass::Upper)
        );
    }

    #[test]
    fn test_classify_line() {
        assert_eq!(
            classify(' ', BoundaryKind::Line),
            PropertyClass::Line(LineClass::SP)
        );
        assert_eq!(
            classify('(', BoundaryKind::Line),
            PropertyClass::Line(LineClass::OP)
        );
        assert_eq!(
            classify('\u{4E2D}', BoundaryKind::Line),
            PropertyClass::Line(LineClass::ID)
        );
        // Unassigned code points default to XX.
        assert_eq!(
            classify('\u{E0080}', BoundaryKind::Line),
            PropertyClass::Line(LineClass::XX)
        );
    }

    #[test]
    fn test_auxiliary_properties() {
        assert!(is_extended_pictographic(0x1F600));
        assert!(!is_extended_pictographic(u32::from('a')));
        assert!(is_east_asian_wide(0x4E2D));
        assert!(is_east_asian_ambiguous(0x03B1));
        assert!(is_initial_quote(0x201C));
        assert!(is_final_quote(0x201D));
        assert_eq!(indic_conjunct(0x0915), Some(IndicConjunct::Consonant));
        assert_eq!(indic_conjunct(0x094D), Some(IndicConjunct::Linker));
    }

    #[test]
    fn test_surrogates_have_standard_classes() {
        assert_eq!(grapheme_class(0xD800), GraphemeClass::Control);
        assert_eq!(line_class(0xDFFF), LineClass::SG);
        assert_eq!(word_class(0xDC00), WordClass::Other);
    }

    #[test]
    fn test_pairwise_lookup() {
        let cr = PropertyClass::Grapheme(GraphemeClass::CR);
        let lf = PropertyClass::Grapheme(GraphemeClass::LF);
        assert_eq!(pairwise(cr, lf), Decision::NoBreak);
        assert_eq!(pairwise(lf, cr), Decision::Break);

        let sp = PropertyClass::Line(LineClass::SP);
        let al = PropertyClass::Line(LineClass::AL);
        assert_eq!(pairwise(sp, al), Decision::Break);
        assert_eq!(pairwise(al, al), Decision::NoBreak);
        let id = PropertyClass::Line(LineClass::ID);
        assert_eq!(pairwise(id, id), Decision::Indeterminate);
    }

    #[test]
    #[should_panic(expected = "across boundary kinds")]
    fn test_pairwise_mixed_kinds_panics() {
        let _ = pairwise(
            PropertyClass::Grapheme(GraphemeClass::Other),
            PropertyClass::Word(WordClass::Other),
        );
    }
}
