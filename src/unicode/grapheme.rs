//! Extended grapheme cluster boundaries (UAX #29).

use super::engine::{CodePoint, ContextRule, PairEntry, decide, expand};
use super::property::{
    GraphemeClass as G, IndicConjunct, grapheme_class, indic_conjunct, is_extended_pictographic,
};

#[repr(u8)]
#[derive(Clone, Copy)]
enum Rule {
    Gb3,
    Gb4,
    Gb5,
    Gb6,
    Gb7,
    Gb8,
    Gb9,
    Gb9a,
    Gb9b,
    Gb9c,
    Gb11,
    Gb12,
}

const fn pair_rule(b: G, a: G) -> PairEntry {
    if matches!((b, a), (G::CR, G::LF)) {
        return PairEntry::joins(Rule::Gb3 as u8);
    }
    if matches!(b, G::Control | G::CR | G::LF) {
        return PairEntry::breaks(Rule::Gb4 as u8);
    }
    if matches!(a, G::Control | G::CR | G::LF) {
        return PairEntry::breaks(Rule::Gb5 as u8);
    }
    if matches!(b, G::L) && matches!(a, G::L | G::V | G::LV | G::LVT) {
        return PairEntry::joins(Rule::Gb6 as u8);
    }
    if matches!(b, G::LV | G::V) && matches!(a, G::V | G::T) {
        return PairEntry::joins(Rule::Gb7 as u8);
    }
    if matches!(b, G::LVT | G::T) && matches!(a, G::T) {
        return PairEntry::joins(Rule::Gb8 as u8);
    }
    if matches!(a, G::Extend | G::ZWJ) {
        return PairEntry::joins(Rule::Gb9 as u8);
    }
    if matches!(a, G::SpacingMark) {
        return PairEntry::joins(Rule::Gb9a as u8);
    }
    if matches!(b, G::Prepend) {
        return PairEntry::joins(Rule::Gb9b as u8);
    }
    PairEntry::UNDECIDED
}

static PAIRS: [[PairEntry; G::COUNT]; G::COUNT] = {
    let mut table = [[PairEntry::UNDECIDED; G::COUNT]; G::COUNT];
    let mut b = 0;
    while b < G::COUNT {
        let mut a = 0;
        while a < G::COUNT {
            table[b][a] = pair_rule(G::ALL[b], G::ALL[a]);
            a += 1;
        }
        b += 1;
    }
    table
};

pub(crate) fn pair(b: G, a: G) -> PairEntry {
    PAIRS[b as usize][a as usize]
}

struct Clusters {
    cps: Vec<u32>,
    classes: Vec<G>,
}

impl Clusters {
    fn conjunct(&self, idx: usize) -> Option<IndicConjunct> {
        indic_conjunct(self.cps[idx])
    }
}

/// GB9c: Consonant [Extend Linker]* Linker [Extend Linker]* × Consonant
fn gb9c(seq: &Clusters, i: usize) -> Option<bool> {
    if seq.conjunct(i) != Some(IndicConjunct::Consonant) {
        return None;
    }
    let mut linker = false;
    for j in (0..i).rev() {
        match seq.conjunct(j) {
            Some(IndicConjunct::Linker) => linker = true,
            Some(IndicConjunct::Extend) => {}
            Some(IndicConjunct::Consonant) => return linker.then_some(false),
            None => return None,
        }
    }
    None
}

/// GB11: ExtPict Extend* ZWJ × ExtPict
fn gb11(seq: &Clusters, i: usize) -> Option<bool> {
    if seq.classes[i - 1] != G::ZWJ || !is_extended_pictographic(seq.cps[i]) {
        return None;
    }
    seq.classes[..i - 1]
        .iter()
        .rposition(|&c| c != G::Extend)
        .is_some_and(|j| is_extended_pictographic(seq.cps[j]))
        .then_some(false)
}

/// GB12, GB13: regional indicators pair up.
fn gb12(seq: &Clusters, i: usize) -> Option<bool> {
    if seq.classes[i - 1] != G::RegionalIndicator || seq.classes[i] != G::RegionalIndicator {
        return None;
    }
    let run = seq.classes[..i]
        .iter()
        .rev()
        .take_while(|&&c| c == G::RegionalIndicator)
        .count();
    Some(run % 2 == 0)
}

const CONTEXT_RULES: &[ContextRule<Clusters>] = &[
    ContextRule {
        rule: Rule::Gb9c as u8,
        check: gb9c,
    },
    ContextRule {
        rule: Rule::Gb11 as u8,
        check: gb11,
    },
    ContextRule {
        rule: Rule::Gb12 as u8,
        check: gb12,
    },
];

pub(crate) fn breakables(points: &[CodePoint], total: usize) -> Vec<bool> {
    let seq = Clusters {
        cps: points.iter().map(|p| p.cp).collect(),
        classes: points.iter().map(|p| grapheme_class(p.cp)).collect(),
    };
    let decisions = points.iter().enumerate().map(|(i, point)| {
        let breakable = i == 0
            || decide(
                &seq,
                i,
                pair(seq.classes[i - 1], seq.classes[i]),
                CONTEXT_RULES,
                true,
            );
        (point.offset, breakable)
    });
    expand(total, decisions)
}

#[cfg(test)]
mod tests {
    use crate::unicode::{BoundaryKind, boundaries, break_units};

    fn clusters(s: &str) -> Vec<&str> {
        break_units(s, BoundaryKind::Grapheme).collect()
    }

    #[test]
    fn test_combining_mark_joins_base() {
        assert_eq!(clusters("g\u{0308}o"), vec!["g\u{0308}", "o"]);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq!(clusters("\r\nab"), vec!["\r\n", "a", "b"]);
        assert_eq!(clusters("\n\r"), vec!["\n", "\r"]);
    }

    #[test]
    fn test_regional_indicators_pair() {
        assert_eq!(clusters("🇺🇸🇫🇷"), vec!["🇺🇸", "🇫🇷"]);
        // An odd indicator stands alone.
        assert_eq!(clusters("🇺🇸🇫").len(), 2);
    }

    #[test]
    fn test_zwj_emoji_sequence() {
        assert_eq!(clusters("👨\u{200D}👩\u{200D}👧"), vec!["👨\u{200D}👩\u{200D}👧"]);
        // ZWJ after a non-pictographic base does not glue the next emoji.
        assert_eq!(clusters("a\u{200D}👩").len(), 2);
    }

    #[test]
    fn test_hangul_syllables() {
        // L V T jamo compose into one cluster.
        assert_eq!(clusters("\u{1100}\u{1161}\u{11A8}").len(), 1);
        assert_eq!(clusters("\u{AC00}\u{AC00}").len(), 2);
    }

    #[test]
    fn test_indic_conjunct() {
        // KA VIRAMA SSA is one aksara.
        assert_eq!(clusters("\u{0915}\u{094D}\u{0937}").len(), 1);
        // Without the linker the consonants separate.
        assert_eq!(clusters("\u{0915}\u{0937}").len(), 2);
    }

    #[test]
    fn test_prepend() {
        assert_eq!(clusters("\u{0600}1").len(), 1);
    }

    #[test]
    fn test_boundaries_edges() {
        assert_eq!(boundaries("", BoundaryKind::Grapheme).count(), 0);
        assert_eq!(
            boundaries("é", BoundaryKind::Grapheme).collect::<Vec<_>>(),
            vec![0, 2]
        );
    }
}
