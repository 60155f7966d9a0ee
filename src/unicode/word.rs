//! Word boundaries (UAX #29).

use super::engine::{CodePoint, ContextRule, PairEntry, decide, expand};
use super::property::{WordClass as W, is_extended_pictographic, word_class};

#[repr(u8)]
#[derive(Clone, Copy)]
enum Rule {
    Wb3,
    Wb3a,
    Wb3b,
    Wb3c,
    Wb3d,
    Wb5,
    Wb6,
    Wb7,
    Wb7a,
    Wb7b,
    Wb7c,
    Wb8,
    Wb9,
    Wb10,
    Wb11,
    Wb12,
    Wb13,
    Wb13a,
    Wb13b,
    Wb15,
}

const fn pair_rule(b: W, a: W) -> PairEntry {
    if matches!((b, a), (W::CR, W::LF)) {
        return PairEntry::joins(Rule::Wb3 as u8);
    }
    if b.is_newline() {
        return PairEntry::breaks(Rule::Wb3a as u8);
    }
    if a.is_newline() {
        return PairEntry::breaks(Rule::Wb3b as u8);
    }
    if b.is_ah_letter() && a.is_ah_letter() {
        return PairEntry::joins(Rule::Wb5 as u8);
    }
    if matches!((b, a), (W::HebrewLetter, W::SingleQuote)) {
        return PairEntry::joins(Rule::Wb7a as u8);
    }
    if matches!((b, a), (W::Numeric, W::Numeric)) {
        return PairEntry::joins(Rule::Wb8 as u8);
    }
    if b.is_ah_letter() && matches!(a, W::Numeric) {
        return PairEntry::joins(Rule::Wb9 as u8);
    }
    if matches!(b, W::Numeric) && a.is_ah_letter() {
        return PairEntry::joins(Rule::Wb10 as u8);
    }
    if matches!((b, a), (W::Katakana, W::Katakana)) {
        return PairEntry::joins(Rule::Wb13 as u8);
    }
    if (b.is_ah_letter() || matches!(b, W::Numeric | W::Katakana | W::ExtendNumLet))
        && matches!(a, W::ExtendNumLet)
    {
        return PairEntry::joins(Rule::Wb13a as u8);
    }
    if matches!(b, W::ExtendNumLet) && (a.is_ah_letter() || matches!(a, W::Numeric | W::Katakana))
    {
        return PairEntry::joins(Rule::Wb13b as u8);
    }
    PairEntry::UNDECIDED
}

static PAIRS: [[PairEntry; W::COUNT]; W::COUNT] = {
    let mut table = [[PairEntry::UNDECIDED; W::COUNT]; W::COUNT];
    let mut b = 0;
    while b < W::COUNT {
        let mut a = 0;
        while a < W::COUNT {
            table[b][a] = pair_rule(W::ALL[b], W::ALL[a]);
            a += 1;
        }
        b += 1;
    }
    table
};

pub(crate) fn pair(b: W, a: W) -> PairEntry {
    PAIRS[b as usize][a as usize]
}

/// A base character plus the Extend/Format/ZWJ characters absorbed by WB4.
#[derive(Clone, Copy, Debug)]
struct Token {
    offset: usize,
    class: W,
    /// The token's last character is a ZWJ.
    ends_with_zwj: bool,
    /// The token absorbed at least one character.
    absorbed: bool,
    pictographic: bool,
}

struct Words {
    tokens: Vec<Token>,
}

impl Words {
    fn tokenize(points: &[CodePoint]) -> Self {
        let mut tokens: Vec<Token> = Vec::with_capacity(points.len());
        let mut open = false;
        for point in points {
            let class = word_class(point.cp);
            if class.is_newline() {
                open = false;
            } else if matches!(class, W::Extend | W::Format | W::ZWJ) && open {
                if let Some(last) = tokens.last_mut() {
                    last.absorbed = true;
                    last.ends_with_zwj = class == W::ZWJ;
                    continue;
                }
            } else {
                open = true;
            }
            tokens.push(Token {
                offset: point.offset,
                class,
                ends_with_zwj: class == W::ZWJ,
                absorbed: false,
                pictographic: is_extended_pictographic(point.cp),
            });
        }
        Self { tokens }
    }

    fn class(&self, idx: usize) -> W {
        self.tokens[idx].class
    }

    fn before(&self, i: usize, back: usize) -> Option<W> {
        i.checked_sub(back).map(|idx| self.class(idx))
    }

    fn after(&self, i: usize) -> Option<W> {
        self.tokens.get(i + 1).map(|t| t.class)
    }
}

fn is_mid_letter(class: W) -> bool {
    class == W::MidLetter || class.is_mid_num_let_q()
}

fn is_mid_num(class: W) -> bool {
    class == W::MidNum || class.is_mid_num_let_q()
}

/// WB3c: ZWJ × \p{Extended_Pictographic}
fn wb3c(seq: &Words, i: usize) -> Option<bool> {
    (seq.tokens[i - 1].ends_with_zwj && seq.tokens[i].pictographic).then_some(false)
}

/// WB3d: WSegSpace × WSegSpace
fn wb3d(seq: &Words, i: usize) -> Option<bool> {
    let prev = &seq.tokens[i - 1];
    (prev.class == W::WSegSpace && seq.class(i) == W::WSegSpace && !prev.absorbed)
        .then_some(false)
}

/// WB6: AHLetter × (MidLetter | MidNumLetQ) AHLetter
fn wb6(seq: &Words, i: usize) -> Option<bool> {
    (seq.class(i - 1).is_ah_letter()
        && is_mid_letter(seq.class(i))
        && seq.after(i).is_some_and(W::is_ah_letter))
    .then_some(false)
}

/// WB7: AHLetter (MidLetter | MidNumLetQ) × AHLetter
fn wb7(seq: &Words, i: usize) -> Option<bool> {
    (seq.before(i, 2).is_some_and(W::is_ah_letter)
        && is_mid_letter(seq.class(i - 1))
        && seq.class(i).is_ah_letter())
    .then_some(false)
}

/// WB7b: Hebrew_Letter × Double_Quote Hebrew_Letter
fn wb7b(seq: &Words, i: usize) -> Option<bool> {
    (seq.class(i - 1) == W::HebrewLetter
        && seq.class(i) == W::DoubleQuote
        && seq.after(i) == Some(W::HebrewLetter))
    .then_some(false)
}

/// WB7c: Hebrew_Letter Double_Quote × Hebrew_Letter
fn wb7c(seq: &Words, i: usize) -> Option<bool> {
    (seq.before(i, 2) == Some(W::HebrewLetter)
        && seq.class(i - 1) == W::DoubleQuote
        && seq.class(i) == W::HebrewLetter)
    .then_some(false)
}

/// WB11: Numeric (MidNum | MidNumLetQ) × Numeric
fn wb11(seq: &Words, i: usize) -> Option<bool> {
    (seq.before(i, 2) == Some(W::Numeric)
        && is_mid_num(seq.class(i - 1))
        && seq.class(i) == W::Numeric)
        .then_some(false)
}

/// WB12: Numeric × (MidNum | MidNumLetQ) Numeric
fn wb12(seq: &Words, i: usize) -> Option<bool> {
    (seq.class(i - 1) == W::Numeric
        && is_mid_num(seq.class(i))
        && seq.after(i) == Some(W::Numeric))
    .then_some(false)
}

/// WB15, WB16: regional indicators pair up.
fn wb15(seq: &Words, i: usize) -> Option<bool> {
    if seq.class(i - 1) != W::RegionalIndicator || seq.class(i) != W::RegionalIndicator {
        return None;
    }
    let run = seq.tokens[..i]
        .iter()
        .rev()
        .take_while(|t| t.class == W::RegionalIndicator)
        .count();
    Some(run % 2 == 0)
}

const CONTEXT_RULES: &[ContextRule<Words>] = &[
    ContextRule {
        rule: Rule::Wb3c as u8,
        check: wb3c,
    },
    ContextRule {
        rule: Rule::Wb3d as u8,
        check: wb3d,
    },
    ContextRule {
        rule: Rule::Wb6 as u8,
        check: wb6,
    },
    ContextRule {
        rule: Rule::Wb7 as u8,
        check: wb7,
    },
    ContextRule {
        rule: Rule::Wb7b as u8,
        check: wb7b,
    },
    ContextRule {
        rule: Rule::Wb7c as u8,
        check: wb7c,
    },
    ContextRule {
        rule: Rule::Wb11 as u8,
        check: wb11,
    },
    ContextRule {
        rule: Rule::Wb12 as u8,
        check: wb12,
    },
    ContextRule {
        rule: Rule::Wb15 as u8,
        check: wb15,
    },
];

pub(crate) fn breakables(points: &[CodePoint], total: usize) -> Vec<bool> {
    let seq = Words::tokenize(points);
    let decisions = seq.tokens.iter().enumerate().map(|(i, token)| {
        let breakable = i == 0
            || decide(
                &seq,
                i,
                pair(seq.class(i - 1), seq.class(i)),
                CONTEXT_RULES,
                true,
            );
        (token.offset, breakable)
    });
    expand(total, decisions)
}

#[cfg(test)]
mod tests {
    use crate::unicode::{BoundaryKind, boundaries, break_units};

    fn words(s: &str) -> Vec<&str> {
        break_units(s, BoundaryKind::Word).collect()
    }

    #[test]
    fn test_hello_world_boundaries() {
        let b: Vec<usize> = boundaries("Hello, world.", BoundaryKind::Word).collect();
        assert_eq!(b, vec![0, 5, 6, 7, 12, 13]);
    }

    #[test]
    fn test_contractions_and_decimals() {
        assert_eq!(
            words("can’t jump 32.3 feet"),
            vec!["can’t", " ", "jump", " ", "32.3", " ", "feet"]
        );
        assert_eq!(words("e.g."), vec!["e.g", "."]);
    }

    #[test]
    fn test_punctuation_splits() {
        assert_eq!(
            words("(“brown”)"),
            vec!["(", "“", "brown", "”", ")"]
        );
    }

    #[test]
    fn test_format_characters_are_absorbed() {
        // A soft hyphen inside a word does not split it.
        assert_eq!(words("co\u{00AD}op"), vec!["co\u{00AD}op"]);
    }

    #[test]
    fn test_spaces_stay_together() {
        assert_eq!(words("a   b"), vec!["a", "   ", "b"]);
    }

    #[test]
    fn test_newlines_always_split() {
        assert_eq!(words("a\r\n\nb"), vec!["a", "\r\n", "\n", "b"]);
    }

    #[test]
    fn test_katakana_and_extend_num_let() {
        assert_eq!(words("カタカナ"), vec!["カタカナ"]);
        assert_eq!(words("foo_bar1"), vec!["foo_bar1"]);
    }

    #[test]
    fn test_regional_indicators_pair() {
        assert_eq!(words("🇺🇸🇫🇷"), vec!["🇺🇸", "🇫🇷"]);
    }
}
