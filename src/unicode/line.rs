//! Line break opportunities (UAX #14).
//!
//! Rule numbering follows the Unicode Line Breaking Algorithm. LB1 resolves
//! the context-free classes while tokenizing; LB9 and LB10 fold combining
//! marks into their base. Mandatory breaks (after BK, CR, LF, NL) are
//! reported as ordinary break opportunities; callers that need to tell them
//! apart check the class of the preceding character.

use super::engine::{CodePoint, ContextRule, PairEntry, decide, expand};
use super::property::{
    LineClass as L, is_east_asian_ambiguous, is_east_asian_wide, is_final_quote,
    is_initial_quote, is_southeast_asian_mark, is_unassigned_pictographic, line_class,
};

const DOTTED_CIRCLE: u32 = 0x25CC;
const HYPHEN: u32 = 0x2010;

#[repr(u8)]
#[derive(Clone, Copy)]
enum Rule {
    Lb4,
    Lb5,
    Lb6,
    Lb7,
    Lb8,
    Lb8a,
    Lb11,
    Lb12,
    Lb12a,
    Lb13,
    Lb14,
    Lb15a,
    Lb15b,
    Lb15c,
    Lb15d,
    Lb16,
    Lb17,
    Lb18,
    Lb19,
    Lb19a,
    Lb20,
    Lb20a,
    Lb21,
    Lb21a,
    Lb21b,
    Lb22,
    Lb23,
    Lb23a,
    Lb24,
    Lb25,
    Lb26,
    Lb27,
    Lb28,
    Lb28a,
    Lb29,
    Lb30,
    Lb30a,
    Lb30b,
}

const fn is_hangul(c: L) -> bool {
    matches!(c, L::JL | L::JV | L::JT | L::H2 | L::H3)
}

const fn pair_rule(b: L, a: L) -> PairEntry {
    if matches!(b, L::BK) {
        return PairEntry::breaks(Rule::Lb4 as u8);
    }
    if matches!((b, a), (L::CR, L::LF)) {
        return PairEntry::joins(Rule::Lb5 as u8);
    }
    if matches!(b, L::CR | L::LF | L::NL) {
        return PairEntry::breaks(Rule::Lb5 as u8);
    }
    if a.is_hard_break() {
        return PairEntry::joins(Rule::Lb6 as u8);
    }
    if matches!(a, L::SP | L::ZW) {
        return PairEntry::joins(Rule::Lb7 as u8);
    }
    if matches!(a, L::WJ) || matches!(b, L::WJ) {
        return PairEntry::joins(Rule::Lb11 as u8);
    }
    if matches!(b, L::GL) {
        return PairEntry::joins(Rule::Lb12 as u8);
    }
    if !matches!(b, L::SP | L::BA | L::HY) && matches!(a, L::GL) {
        return PairEntry::joins(Rule::Lb12a as u8);
    }
    if matches!(a, L::CL | L::CP | L::EX | L::SY) {
        return PairEntry::joins(Rule::Lb13 as u8);
    }
    if matches!(a, L::IS) {
        return PairEntry::joins(Rule::Lb15d as u8);
    }
    if matches!(b, L::SP) {
        return PairEntry::breaks(Rule::Lb18 as u8);
    }
    if matches!(a, L::CB) || matches!(b, L::CB) {
        return PairEntry::breaks(Rule::Lb20 as u8);
    }
    if matches!(a, L::BA | L::HY | L::NS) || matches!(b, L::BB) {
        return PairEntry::joins(Rule::Lb21 as u8);
    }
    if matches!((b, a), (L::SY, L::HL)) {
        return PairEntry::joins(Rule::Lb21b as u8);
    }
    if matches!(a, L::IN) {
        return PairEntry::joins(Rule::Lb22 as u8);
    }
    if (b.is_alphabetic() && matches!(a, L::NU)) || (matches!(b, L::NU) && a.is_alphabetic()) {
        return PairEntry::joins(Rule::Lb23 as u8);
    }
    if (matches!(b, L::PR) && matches!(a, L::ID | L::EB | L::EM))
        || (matches!(b, L::ID | L::EB | L::EM) && matches!(a, L::PO))
    {
        return PairEntry::joins(Rule::Lb23a as u8);
    }
    if (matches!(b, L::PR | L::PO) && a.is_alphabetic())
        || (b.is_alphabetic() && matches!(a, L::PR | L::PO))
    {
        return PairEntry::joins(Rule::Lb24 as u8);
    }
    if matches!(
        (b, a),
        (L::CL | L::CP | L::NU, L::PO | L::PR)
            | (L::PO | L::PR, L::OP | L::NU)
            | (L::HY | L::IS | L::NU | L::SY, L::NU)
    ) {
        return PairEntry::joins(Rule::Lb25 as u8);
    }
    if (matches!(b, L::JL) && matches!(a, L::JL | L::JV | L::H2 | L::H3))
        || (matches!(b, L::JV | L::H2) && matches!(a, L::JV | L::JT))
        || (matches!(b, L::JT | L::H3) && matches!(a, L::JT))
    {
        return PairEntry::joins(Rule::Lb26 as u8);
    }
    if (is_hangul(b) && matches!(a, L::PO)) || (matches!(b, L::PR) && is_hangul(a)) {
        return PairEntry::joins(Rule::Lb27 as u8);
    }
    if b.is_alphabetic() && a.is_alphabetic() {
        return PairEntry::joins(Rule::Lb28 as u8);
    }
    if matches!(b, L::IS) && a.is_alphabetic() {
        return PairEntry::joins(Rule::Lb29 as u8);
    }
    PairEntry::UNDECIDED
}

static PAIRS: [[PairEntry; L::COUNT]; L::COUNT] = {
    let mut table = [[PairEntry::UNDECIDED; L::COUNT]; L::COUNT];
    let mut b = 0;
    while b < L::COUNT {
        let mut a = 0;
        while a < L::COUNT {
            table[b][a] = pair_rule(L::ALL[b], L::ALL[a]);
            a += 1;
        }
        b += 1;
    }
    table
};

pub(crate) fn pair(b: L, a: L) -> PairEntry {
    PAIRS[b as usize][a as usize]
}

/// LB1 resolution of the classes the pair rules never see.
pub(crate) fn resolve(cp: u32, legacy: bool) -> L {
    let class = line_class(cp);
    if legacy && (class == L::AI || (class == L::AL && is_east_asian_ambiguous(cp))) {
        return L::ID;
    }
    match class {
        L::AI | L::SG | L::XX => L::AL,
        L::SA if is_southeast_asian_mark(cp) => L::CM,
        L::SA => L::AL,
        L::CJ => L::NS,
        other => other,
    }
}

#[derive(Clone, Copy, Debug)]
struct Token {
    offset: usize,
    class: L,
    /// First code point of the token.
    cp: u32,
    /// The token's last character is a ZWJ.
    ends_with_zwj: bool,
    wide: bool,
    initial_quote: bool,
    final_quote: bool,
    unassigned_pictographic: bool,
}

struct Lines {
    tokens: Vec<Token>,
}

impl Lines {
    fn tokenize(points: &[CodePoint], legacy: bool) -> Self {
        let mut tokens: Vec<Token> = Vec::with_capacity(points.len());
        for point in points {
            let class = resolve(point.cp, legacy);
            let combining = matches!(class, L::CM | L::ZWJ);
            if combining {
                // LB9: X (CM | ZWJ)* → X, unless X is a space or break.
                if let Some(last) = tokens.last_mut() {
                    if !last.class.is_hard_break() && !matches!(last.class, L::SP | L::ZW) {
                        last.ends_with_zwj = class == L::ZWJ;
                        continue;
                    }
                }
            }
            tokens.push(Token {
                offset: point.offset,
                // LB10: a lone combining mark behaves as AL.
                class: if combining { L::AL } else { class },
                cp: point.cp,
                ends_with_zwj: class == L::ZWJ,
                wide: is_east_asian_wide(point.cp),
                initial_quote: is_initial_quote(point.cp),
                final_quote: is_final_quote(point.cp),
                unassigned_pictographic: is_unassigned_pictographic(point.cp),
            });
        }
        Self { tokens }
    }

    fn class(&self, idx: usize) -> L {
        self.tokens[idx].class
    }

    fn class_at(&self, idx: Option<usize>) -> Option<L> {
        idx.and_then(|i| self.tokens.get(i)).map(|t| t.class)
    }

    /// Index of the last non-space token before `i`.
    fn before_spaces(&self, i: usize) -> Option<usize> {
        self.tokens[..i].iter().rposition(|t| t.class != L::SP)
    }

    fn is_aksara_start(&self, idx: Option<usize>) -> bool {
        idx.and_then(|i| self.tokens.get(i))
            .is_some_and(|t| matches!(t.class, L::AK | L::AS) || t.cp == DOTTED_CIRCLE)
    }
}

/// LB8: ZW SP* ÷
fn lb8(seq: &Lines, i: usize) -> Option<bool> {
    (seq.class_at(seq.before_spaces(i)) == Some(L::ZW)).then_some(true)
}

/// LB8a: ZWJ ×
fn lb8a(seq: &Lines, i: usize) -> Option<bool> {
    seq.tokens[i - 1].ends_with_zwj.then_some(false)
}

/// LB14: OP SP* ×
fn lb14(seq: &Lines, i: usize) -> Option<bool> {
    (seq.class_at(seq.before_spaces(i)) == Some(L::OP)).then_some(false)
}

/// LB15a: (sot | BK | CR | LF | NL | OP | QU | GL | SP | ZW) [\p{Pi}&QU] SP* ×
fn lb15a(seq: &Lines, i: usize) -> Option<bool> {
    let j = seq.before_spaces(i)?;
    let quote = &seq.tokens[j];
    if quote.class != L::QU || !quote.initial_quote {
        return None;
    }
    let opens = j == 0
        || matches!(
            seq.class(j - 1),
            L::BK | L::CR | L::LF | L::NL | L::OP | L::QU | L::GL | L::SP | L::ZW
        );
    opens.then_some(false)
}

/// LB15b: × [\p{Pf}&QU] (SP | GL | WJ | CL | QU | CP | EX | IS | SY | BK | CR | LF | NL | ZW | eot)
fn lb15b(seq: &Lines, i: usize) -> Option<bool> {
    let quote = &seq.tokens[i];
    if quote.class != L::QU || !quote.final_quote {
        return None;
    }
    let closes = seq.class_at(Some(i + 1)).is_none_or(|next| {
        matches!(
            next,
            L::SP
                | L::GL
                | L::WJ
                | L::CL
                | L::QU
                | L::CP
                | L::EX
                | L::IS
                | L::SY
                | L::BK
                | L::CR
                | L::LF
                | L::NL
                | L::ZW
        )
    });
    closes.then_some(false)
}

/// LB15c: SP ÷ IS NU
fn lb15c(seq: &Lines, i: usize) -> Option<bool> {
    (seq.class(i - 1) == L::SP && seq.class(i) == L::IS && seq.class_at(Some(i + 1)) == Some(L::NU))
        .then_some(true)
}

/// LB16: (CL | CP) SP* × NS
fn lb16(seq: &Lines, i: usize) -> Option<bool> {
    (seq.class(i) == L::NS
        && matches!(seq.class_at(seq.before_spaces(i)), Some(L::CL | L::CP)))
    .then_some(false)
}

/// LB17: B2 SP* × B2
fn lb17(seq: &Lines, i: usize) -> Option<bool> {
    (seq.class(i) == L::B2 && seq.class_at(seq.before_spaces(i)) == Some(L::B2)).then_some(false)
}

/// LB19: × [QU - \p{Pi}], [QU - \p{Pf}] ×
fn lb19(seq: &Lines, i: usize) -> Option<bool> {
    let (prev, curr) = (&seq.tokens[i - 1], &seq.tokens[i]);
    let joins = (curr.class == L::QU && !curr.initial_quote)
        || (prev.class == L::QU && !prev.final_quote);
    joins.then_some(false)
}

/// LB19a: quotation marks bind unless flanked by East Asian characters.
fn lb19a(seq: &Lines, i: usize) -> Option<bool> {
    let (prev, curr) = (&seq.tokens[i - 1], &seq.tokens[i]);
    let next_wide = seq.tokens.get(i + 1).is_some_and(|t| t.wide);
    let before_prev_wide = i >= 2 && seq.tokens[i - 2].wide;
    let joins = (curr.class == L::QU && (!prev.wide || !next_wide))
        || (prev.class == L::QU && (!curr.wide || !before_prev_wide));
    joins.then_some(false)
}

/// LB20a: (sot | BK | CR | LF | NL | SP | ZW | CB | GL) (HY | U+2010) × (AL | HL)
fn lb20a(seq: &Lines, i: usize) -> Option<bool> {
    let prev = &seq.tokens[i - 1];
    if !(prev.class == L::HY || prev.cp == HYPHEN) || !seq.class(i).is_alphabetic() {
        return None;
    }
    let word_start = i == 1
        || matches!(
            seq.class(i - 2),
            L::BK | L::CR | L::LF | L::NL | L::SP | L::ZW | L::CB | L::GL
        );
    word_start.then_some(false)
}

/// LB21a: HL (HY | [BA - $EastAsian]) × [^HL]
fn lb21a(seq: &Lines, i: usize) -> Option<bool> {
    let prev = &seq.tokens[i - 1];
    (i >= 2
        && seq.class(i - 2) == L::HL
        && (prev.class == L::HY || (prev.class == L::BA && !prev.wide))
        && seq.class(i) != L::HL)
        .then_some(false)
}

/// LB28a: orthographic syllables of Brahmic scripts.
fn lb28a(seq: &Lines, i: usize) -> Option<bool> {
    let (b, a) = (seq.class(i - 1), seq.class(i));
    let joins = (b == L::AP && seq.is_aksara_start(Some(i)))
        || (seq.is_aksara_start(Some(i - 1)) && matches!(a, L::VF | L::VI))
        || (seq.is_aksara_start(i.checked_sub(2))
            && b == L::VI
            && (a == L::AK || seq.tokens[i].cp == DOTTED_CIRCLE))
        || (seq.is_aksara_start(Some(i - 1))
            && seq.is_aksara_start(Some(i))
            && seq.class_at(Some(i + 1)) == Some(L::VF));
    joins.then_some(false)
}

/// LB30: (AL | HL | NU) × [OP - $EastAsian], [CP - $EastAsian] × (AL | HL | NU)
fn lb30(seq: &Lines, i: usize) -> Option<bool> {
    let (prev, curr) = (&seq.tokens[i - 1], &seq.tokens[i]);
    let joins = ((prev.class.is_alphabetic() || prev.class == L::NU)
        && curr.class == L::OP
        && !curr.wide)
        || (prev.class == L::CP
            && !prev.wide
            && (curr.class.is_alphabetic() || curr.class == L::NU));
    joins.then_some(false)
}

/// LB30a: regional indicators pair up.
fn lb30a(seq: &Lines, i: usize) -> Option<bool> {
    if seq.class(i - 1) != L::RI || seq.class(i) != L::RI {
        return None;
    }
    let run = seq.tokens[..i]
        .iter()
        .rev()
        .take_while(|t| t.class == L::RI)
        .count();
    Some(run % 2 == 0)
}

/// LB30b: EB × EM, [\p{Extended_Pictographic}&\p{Cn}] × EM
fn lb30b(seq: &Lines, i: usize) -> Option<bool> {
    let prev = &seq.tokens[i - 1];
    (seq.class(i) == L::EM && (prev.class == L::EB || prev.unassigned_pictographic))
        .then_some(false)
}

const CONTEXT_RULES: &[ContextRule<Lines>] = &[
    ContextRule {
        rule: Rule::Lb8 as u8,
        check: lb8,
    },
    ContextRule {
        rule: Rule::Lb8a as u8,
        check: lb8a,
    },
    ContextRule {
        rule: Rule::Lb14 as u8,
        check: lb14,
    },
    ContextRule {
        rule: Rule::Lb15a as u8,
        check: lb15a,
    },
    ContextRule {
        rule: Rule::Lb15b as u8,
        check: lb15b,
    },
    ContextRule {
        rule: Rule::Lb15c as u8,
        check: lb15c,
    },
    ContextRule {
        rule: Rule::Lb16 as u8,
        check: lb16,
    },
    ContextRule {
        rule: Rule::Lb17 as u8,
        check: lb17,
    },
    ContextRule {
        rule: Rule::Lb19 as u8,
        check: lb19,
    },
    ContextRule {
        rule: Rule::Lb19a as u8,
        check: lb19a,
    },
    ContextRule {
        rule: Rule::Lb20a as u8,
        check: lb20a,
    },
    ContextRule {
        rule: Rule::Lb21a as u8,
        check: lb21a,
    },
    ContextRule {
        rule: Rule::Lb28a as u8,
        check: lb28a,
    },
    ContextRule {
        rule: Rule::Lb30 as u8,
        check: lb30,
    },
    ContextRule {
        rule: Rule::Lb30a as u8,
        check: lb30a,
    },
    ContextRule {
        rule: Rule::Lb30b as u8,
        check: lb30b,
    },
];

pub(crate) fn breakables(points: &[CodePoint], total: usize, legacy: bool) -> Vec<bool> {
    let seq = Lines::tokenize(points, legacy);
    let decisions = seq.tokens.iter().enumerate().map(|(i, token)| {
        let breakable = i == 0
            || decide(
                &seq,
                i,
                pair(seq.class(i - 1), seq.class(i)),
                CONTEXT_RULES,
                // LB31: break everywhere else.
                true,
            );
        (token.offset, breakable)
    });
    expand(total, decisions)
}

#[cfg(test)]
mod tests {
    use crate::unicode::{line_break_boundaries, line_break_units};

    fn units(s: &str) -> Vec<&str> {
        line_break_units(s, false).collect()
    }

    #[test]
    fn test_breaks_after_spaces() {
        let b: Vec<usize> = line_break_boundaries("Hello, world.", false).collect();
        assert_eq!(b, vec![0, 7, 13]);
    }

    #[test]
    fn test_punctuation_and_quotes() {
        let s = "The quick (“brown”) fox can’t jump 32.3 feet, right?";
        assert_eq!(
            units(s),
            vec![
                "The ",
                "quick ",
                "(“brown”) ",
                "fox ",
                "can’t ",
                "jump ",
                "32.3 ",
                "feet, ",
                "right?"
            ]
        );
    }

    #[test]
    fn test_ideographs_break_between() {
        assert_eq!(units("中文字"), vec!["中", "文", "字"]);
        // No break before a closing ideographic full stop.
        assert_eq!(units("中。"), vec!["中。"]);
    }

    #[test]
    fn test_legacy_mode_treats_ambiguous_as_ideographic() {
        assert_eq!(units("αα"), vec!["αα"]);
        let legacy: Vec<&str> = line_break_units("αα", true).collect();
        assert_eq!(legacy, vec!["α", "α"]);
    }

    #[test]
    fn test_mandatory_breaks() {
        assert_eq!(units("a\nb"), vec!["a\n", "b"]);
        assert_eq!(units("a\r\nb"), vec!["a\r\n", "b"]);
    }

    #[test]
    fn test_word_joiner_and_glue() {
        assert_eq!(units("a\u{2060}b c"), vec!["a\u{2060}b ", "c"]);
        assert_eq!(units("a\u{00A0}b"), vec!["a\u{00A0}b"]);
    }

    #[test]
    fn test_combining_marks_follow_base() {
        assert_eq!(units("e\u{0301} x"), vec!["e\u{0301} ", "x"]);
    }

    #[test]
    fn test_hyphen_break_opportunity() {
        assert_eq!(units("well-known"), vec!["well-", "known"]);
    }

    #[test]
    fn test_numeric_prefix_postfix() {
        assert_eq!(units("$100 50%"), vec!["$100 ", "50%"]);
    }
}
