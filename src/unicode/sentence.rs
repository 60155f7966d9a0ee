//! Sentence boundaries (UAX #29).

use super::engine::{CodePoint, ContextRule, PairEntry, decide, expand};
use super::property::{SentenceClass as S, sentence_class};

#[repr(u8)]
#[derive(Clone, Copy)]
enum Rule {
    Sb3,
    Sb4,
    Sb6,
    Sb7,
    Sb8,
    Sb8a,
    Sb9,
    Sb10,
    Sb11,
}

const fn pair_rule(b: S, a: S) -> PairEntry {
    if matches!((b, a), (S::CR, S::LF)) {
        return PairEntry::joins(Rule::Sb3 as u8);
    }
    if b.is_para_sep() {
        return PairEntry::breaks(Rule::Sb4 as u8);
    }
    if matches!((b, a), (S::ATerm, S::Numeric)) {
        return PairEntry::joins(Rule::Sb6 as u8);
    }
    PairEntry::UNDECIDED
}

static PAIRS: [[PairEntry; S::COUNT]; S::COUNT] = {
    let mut table = [[PairEntry::UNDECIDED; S::COUNT]; S::COUNT];
    let mut b = 0;
    while b < S::COUNT {
        let mut a = 0;
        while a < S::COUNT {
            table[b][a] = pair_rule(S::ALL[b], S::ALL[a]);
            a += 1;
        }
        b += 1;
    }
    table
};

pub(crate) fn pair(b: S, a: S) -> PairEntry {
    PAIRS[b as usize][a as usize]
}

/// Runs of one class, with Extend/Format folded into the run before (SB5).
struct Sentences {
    offsets: Vec<usize>,
    classes: Vec<S>,
}

/// The terminator context `SATerm Close* Sp*` ending before a token.
#[derive(Clone, Copy)]
struct Terminator {
    term: S,
    spaced: bool,
}

impl Sentences {
    fn tokenize(points: &[CodePoint]) -> Self {
        let mut offsets = Vec::new();
        let mut classes = Vec::new();
        let mut run: Option<S> = None;
        for point in points {
            let class = sentence_class(point.cp);
            let joins = match run {
                _ if class.is_para_sep() => false,
                Some(_) if matches!(class, S::Extend | S::Format) => true,
                Some(prev) => prev == class,
                None => false,
            };
            if !joins {
                offsets.push(point.offset);
                classes.push(class);
                run = (!class.is_para_sep()).then_some(class);
            }
        }
        Self { offsets, classes }
    }

    fn terminator(&self, i: usize) -> Option<Terminator> {
        let mut j = i;
        let mut spaced = false;
        while j > 0 && self.classes[j - 1] == S::Sp {
            spaced = true;
            j -= 1;
        }
        while j > 0 && self.classes[j - 1] == S::Close {
            j -= 1;
        }
        let term = *self.classes[..j].last()?;
        term.is_sa_term().then_some(Terminator { term, spaced })
    }

    /// SB8 look-ahead: the next letter-like class is Lower.
    fn lower_follows(&self, i: usize) -> bool {
        self.classes[i..]
            .iter()
            .find(|c| {
                matches!(c, S::OLetter | S::Upper | S::Lower | S::STerm | S::ATerm)
                    || c.is_para_sep()
            })
            .is_some_and(|&c| c == S::Lower)
    }
}

/// SB7: (Upper | Lower) ATerm × Upper
fn sb7(seq: &Sentences, i: usize) -> Option<bool> {
    (i >= 2
        && matches!(seq.classes[i - 2], S::Upper | S::Lower)
        && seq.classes[i - 1] == S::ATerm
        && seq.classes[i] == S::Upper)
        .then_some(false)
}

/// SB8: ATerm Close* Sp* × ( ¬(OLetter | Upper | Lower | ParaSep | SATerm) )* Lower
fn sb8(seq: &Sentences, i: usize) -> Option<bool> {
    let ctx = seq.terminator(i)?;
    (ctx.term == S::ATerm && seq.lower_follows(i)).then_some(false)
}

/// SB8a: SATerm Close* Sp* × (SContinue | SATerm)
fn sb8a(seq: &Sentences, i: usize) -> Option<bool> {
    seq.terminator(i)?;
    matches!(seq.classes[i], S::SContinue | S::STerm | S::ATerm).then_some(false)
}

/// SB9: SATerm Close* × (Close | Sp | ParaSep)
fn sb9(seq: &Sentences, i: usize) -> Option<bool> {
    let ctx = seq.terminator(i)?;
    let a = seq.classes[i];
    (!ctx.spaced && (matches!(a, S::Close | S::Sp) || a.is_para_sep())).then_some(false)
}

/// SB10: SATerm Close* Sp* × (Sp | ParaSep)
fn sb10(seq: &Sentences, i: usize) -> Option<bool> {
    seq.terminator(i)?;
    let a = seq.classes[i];
    (a == S::Sp || a.is_para_sep()).then_some(false)
}

/// SB11: SATerm Close* Sp* ParaSep? ÷
fn sb11(seq: &Sentences, i: usize) -> Option<bool> {
    seq.terminator(i).map(|_| true)
}

const CONTEXT_RULES: &[ContextRule<Sentences>] = &[
    ContextRule {
        rule: Rule::Sb7 as u8,
        check: sb7,
    },
    ContextRule {
        rule: Rule::Sb8 as u8,
        check: sb8,
    },
    ContextRule {
        rule: Rule::Sb8a as u8,
        check: sb8a,
    },
    ContextRule {
        rule: Rule::Sb9 as u8,
        check: sb9,
    },
    ContextRule {
        rule: Rule::Sb10 as u8,
        check: sb10,
    },
    ContextRule {
        rule: Rule::Sb11 as u8,
        check: sb11,
    },
];

pub(crate) fn breakables(points: &[CodePoint], total: usize) -> Vec<bool> {
    let seq = Sentences::tokenize(points);
    let decisions = seq.offsets.iter().enumerate().map(|(i, &offset)| {
        let breakable = i == 0
            || decide(
                &seq,
                i,
                pair(seq.classes[i - 1], seq.classes[i]),
                CONTEXT_RULES,
                // SB998: otherwise, do not break.
                false,
            );
        (offset, breakable)
    });
    expand(total, decisions)
}

#[cfg(test)]
mod tests {
    use crate::unicode::{BoundaryKind, boundaries, break_units};

    fn sentences(s: &str) -> Vec<&str> {
        break_units(s, BoundaryKind::Sentence).collect()
    }

    #[test]
    fn test_quoted_question() {
        let s = "He said, “Are you going?” John shook his head.";
        let b: Vec<usize> = boundaries(s, BoundaryKind::Sentence).collect();
        assert_eq!(b, vec![0, 30, 50]);
    }

    #[test]
    fn test_simple_sentences() {
        assert_eq!(
            sentences("This is a test. Another one! Done"),
            vec!["This is a test. ", "Another one! ", "Done"]
        );
    }

    #[test]
    fn test_abbreviation_before_lowercase() {
        assert_eq!(sentences("Etc. is fine. etc. ok"), vec!["Etc. is fine. etc. ok"]);
    }

    #[test]
    fn test_decimal_and_initials() {
        assert_eq!(sentences("It costs 3.5 dollars."), vec!["It costs 3.5 dollars."]);
        assert_eq!(sentences("U.S. Army"), vec!["U.S. ", "Army"]);
    }

    #[test]
    fn test_paragraph_separator_breaks() {
        assert_eq!(sentences("one\ntwo"), vec!["one\n", "two"]);
        assert_eq!(sentences("end.\r\nNext"), vec!["end.\r\n", "Next"]);
    }
}
