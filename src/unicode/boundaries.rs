//! Breakable flags and the iterators built on them.

/// One flag per code unit: `true` where a segment may start.
///
/// Produced by [`breakables`](super::breakables) and friends. The flag array
/// has the same length as the input measured in code units (bytes for
/// `&str`, UTF-16 units for `&[u16]`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breakables {
    flags: Vec<bool>,
}

impl Breakables {
    pub(crate) const fn from_flags(flags: Vec<bool>) -> Self {
        Self { flags }
    }

    /// Number of code units covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Check if the input was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Borrow the raw flags.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.flags
    }

    /// Whether a segment may start at code unit `idx`.
    #[must_use]
    pub fn is_breakable(&self, idx: usize) -> bool {
        self.flags.get(idx).copied().unwrap_or(false)
    }

    /// Override decisions with a caller-supplied rule.
    ///
    /// `tailor` receives each code unit index and the current flag and
    /// returns the new flag. Offset 0 always remains a boundary.
    #[must_use]
    pub fn tailor<F>(mut self, mut tailor: F) -> Self
    where
        F: FnMut(usize, bool) -> bool,
    {
        for (idx, flag) in self.flags.iter_mut().enumerate() {
            *flag = tailor(idx, *flag);
        }
        if let Some(first) = self.flags.first_mut() {
            *first = true;
        }
        self
    }

    /// Iterate boundary offsets from 0 through the input length.
    #[must_use]
    pub fn boundaries(&self) -> Boundaries {
        Boundaries::new(self.flags.clone())
    }

    /// Consume into a boundary iterator.
    #[must_use]
    pub fn into_boundaries(self) -> Boundaries {
        Boundaries::new(self.flags)
    }

    /// Split `text` at the breakable positions.
    ///
    /// `text` must be the string these flags were computed from; offsets that
    /// do not fall on a character boundary of `text` are skipped.
    #[must_use]
    pub fn split<'a>(&self, text: &'a str) -> BreakUnits<'a> {
        BreakUnits::new(text, self.boundaries())
    }

    /// Split UTF-16 `units` at the breakable positions.
    #[must_use]
    pub fn split_utf16<'a>(&self, units: &'a [u16]) -> BreakUnits16<'a> {
        BreakUnits16 {
            units,
            bounds: self.boundaries(),
            prev: None,
        }
    }
}

/// Iterator over boundary offsets.
///
/// Yields 0, every breakable offset, then the input length. Empty input
/// yields nothing. Cloning restarts from the clone's position.
#[derive(Clone, Debug)]
pub struct Boundaries {
    flags: Vec<bool>,
    next: usize,
    done: bool,
}

impl Boundaries {
    const fn new(flags: Vec<bool>) -> Self {
        Self {
            flags,
            next: 0,
            done: false,
        }
    }
}

impl Iterator for Boundaries {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        let len = self.flags.len();
        while self.next < len {
            let idx = self.next;
            self.next += 1;
            if idx == 0 || self.flags[idx] {
                return Some(idx);
            }
        }
        self.done = true;
        (len > 0).then_some(len)
    }
}

impl std::iter::FusedIterator for Boundaries {}

/// Iterator over the substrings between consecutive boundaries.
#[derive(Clone, Debug)]
pub struct BreakUnits<'a> {
    text: &'a str,
    bounds: Boundaries,
    prev: Option<usize>,
}

impl<'a> BreakUnits<'a> {
    pub(crate) const fn new(text: &'a str, bounds: Boundaries) -> Self {
        Self {
            text,
            bounds,
            prev: None,
        }
    }
}

impl<'a> Iterator for BreakUnits<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            let boundary = self.bounds.next()?;
            if !self.text.is_char_boundary(boundary) {
                continue;
            }
            match self.prev.replace(boundary) {
                Some(start) => return self.text.get(start..boundary),
                None => continue,
            }
        }
    }
}

/// Iterator over UTF-16 slices between consecutive boundaries.
#[derive(Clone, Debug)]
pub struct BreakUnits16<'a> {
    units: &'a [u16],
    bounds: Boundaries,
    prev: Option<usize>,
}

impl<'a> Iterator for BreakUnits16<'a> {
    type Item = &'a [u16];

    fn next(&mut self) -> Option<&'a [u16]> {
        loop {
            let boundary = self.bounds.next()?;
            if let Some(start) = self.prev.replace(boundary) {
                return self.units.get(start..boundary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_include_both_ends() {
        let b = Breakables::from_flags(vec![true, false, true, false]);
        assert_eq!(b.boundaries().collect::<Vec<_>>(), vec![0, 2, 4]);
    }

    #[test]
    fn test_empty_yields_nothing() {
        let b = Breakables::default();
        assert_eq!(b.boundaries().next(), None);
        assert_eq!(b.split("").next(), None);
    }

    #[test]
    fn test_boundaries_restart_by_clone() {
        let b = Breakables::from_flags(vec![true, true, false]);
        let mut iter = b.boundaries();
        assert_eq!(iter.next(), Some(0));
        let rest = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(rest.collect::<Vec<_>>(), vec![1, 3]);
        // A fresh iterator starts over.
        assert_eq!(b.boundaries().count(), 3);
    }

    #[test]
    fn test_tailor_keeps_start() {
        let b = Breakables::from_flags(vec![true, true, true]).tailor(|_, _| false);
        assert_eq!(b.as_slice(), &[true, false, false]);
        assert_eq!(b.split("abc").collect::<Vec<_>>(), vec!["abc"]);
    }

    #[test]
    fn test_split_skips_mid_character_offsets() {
        // A tailored flag inside 'é' is ignored when slicing.
        let b = Breakables::from_flags(vec![true, true]);
        assert_eq!(b.split("é").collect::<Vec<_>>(), vec!["é"]);
    }

    #[test]
    fn test_split_utf16() {
        let units: Vec<u16> = "ab".encode_utf16().collect();
        let b = Breakables::from_flags(vec![true, true]);
        let parts: Vec<&[u16]> = b.split_utf16(&units).collect();
        assert_eq!(parts, vec![&units[..1], &units[1..]]);
    }
}
