//! Shared machinery of the four boundary algorithms.
//!
//! Every algorithm has the same shape: decode the input into code points,
//! reduce them into tokens (absorbing combining classes into their base),
//! decide break/no-break before each token, then expand the per-token
//! decisions back into one flag per code unit.
//!
//! Decisions come from two sources. A static pairwise table covers the rules
//! that look at nothing but the two adjacent classes; each entry records the
//! number of the rule that produced it. Context rules (look-behind over
//! spaces, run parity, look-ahead) are evaluated in rule order and win only
//! when their number precedes the table entry's rule.

/// Outcome of a pairwise lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// A boundary is allowed between the two classes.
    Break,
    /// No boundary between the two classes.
    NoBreak,
    /// No pairwise rule applies; context rules or the default decide.
    Indeterminate,
}

/// One cell of a pairwise table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PairEntry {
    /// Ordinal of the deciding rule, `u8::MAX` when undecided.
    pub rule: u8,
    pub decision: Decision,
}

impl PairEntry {
    pub(crate) const UNDECIDED: Self = Self {
        rule: u8::MAX,
        decision: Decision::Indeterminate,
    };

    pub(crate) const fn breaks(rule: u8) -> Self {
        Self {
            rule,
            decision: Decision::Break,
        }
    }

    pub(crate) const fn joins(rule: u8) -> Self {
        Self {
            rule,
            decision: Decision::NoBreak,
        }
    }

    const fn resolve(self, default: bool) -> bool {
        match self.decision {
            Decision::Break => true,
            Decision::NoBreak => false,
            Decision::Indeterminate => default,
        }
    }
}

/// A numbered rule that needs more than the two adjacent classes.
///
/// `check` returns `Some(true)` for a break, `Some(false)` for no break and
/// `None` when the rule does not apply at token `i`.
pub(crate) struct ContextRule<T> {
    pub rule: u8,
    pub check: fn(&T, usize) -> Option<bool>,
}

/// Decide whether token `i` starts a new segment.
pub(crate) fn decide<T>(
    seq: &T,
    i: usize,
    pair: PairEntry,
    rules: &[ContextRule<T>],
    default: bool,
) -> bool {
    for rule in rules {
        if pair.rule < rule.rule {
            break;
        }
        if let Some(decision) = (rule.check)(seq, i) {
            return decision;
        }
    }
    pair.resolve(default)
}

/// A decoded code point and its extent in code units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CodePoint {
    pub offset: usize,
    pub len: usize,
    /// Scalar value, or the raw value of an unpaired surrogate.
    pub cp: u32,
}

pub(crate) fn code_points_utf8(s: &str) -> Vec<CodePoint> {
    s.char_indices()
        .map(|(offset, c)| CodePoint {
            offset,
            len: c.len_utf8(),
            cp: u32::from(c),
        })
        .collect()
}

pub(crate) fn code_points_utf16(units: &[u16]) -> Vec<CodePoint> {
    let mut out = Vec::with_capacity(units.len());
    let mut offset = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        let (cp, len) = match decoded {
            Ok(c) => (u32::from(c), c.len_utf16()),
            Err(err) => (u32::from(err.unpaired_surrogate()), 1),
        };
        out.push(CodePoint { offset, len, cp });
        offset += len;
    }
    out
}

/// Expand per-token decisions into one flag per code unit.
///
/// Only the first code unit of each token can be breakable.
pub(crate) fn expand(total: usize, decisions: impl IntoIterator<Item = (usize, bool)>) -> Vec<bool> {
    let mut flags = vec![false; total];
    for (offset, breakable) in decisions {
        flags[offset] = breakable;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_offsets() {
        let points = code_points_utf8("aé中😀");
        let offsets: Vec<(usize, usize)> = points.iter().map(|p| (p.offset, p.len)).collect();
        assert_eq!(offsets, vec![(0, 1), (1, 2), (3, 3), (6, 4)]);
    }

    #[test]
    fn test_decode_utf16_with_lone_surrogate() {
        // 'a', lone high surrogate, a valid pair, 'b'
        let units = [0x61, 0xD800, 0xD83D, 0xDE00, 0x62];
        let points = code_points_utf16(&units);
        assert_eq!(points.len(), 4);
        assert_eq!(points[1].cp, 0xD800);
        assert_eq!(points[1].len, 1);
        assert_eq!(points[2].cp, 0x1F600);
        assert_eq!(points[2].len, 2);
        assert_eq!(points[3].offset, 4);
    }

    #[test]
    fn test_expand_marks_token_starts() {
        let flags = expand(5, [(0, true), (2, false), (3, true)]);
        assert_eq!(flags, vec![true, false, false, true, false]);
    }

    #[test]
    fn test_context_rule_priority() {
        struct Seq;
        fn never(_: &Seq, _: usize) -> Option<bool> {
            None
        }
        fn always_join(_: &Seq, _: usize) -> Option<bool> {
            Some(false)
        }
        let rules = [
            ContextRule { rule: 1, check: never },
            ContextRule {
                rule: 5,
                check: always_join,
            },
        ];
        // Table rule 3 outranks context rule 5.
        assert!(decide(&Seq, 1, PairEntry::breaks(3), &rules, false));
        // Table rule 7 is outranked.
        assert!(!decide(&Seq, 1, PairEntry::breaks(7), &rules, true));
        // Undecided falls through every rule.
        assert!(!decide(&Seq, 1, PairEntry::UNDECIDED, &rules, true));
        assert!(decide(&Seq, 1, PairEntry::UNDECIDED, &rules[..1], true));
    }
}
