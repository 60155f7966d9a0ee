//! Text wrapping at line break opportunities.
//!
//! [`wrap`] drives a [`Formatter`]: it splits the input into paragraphs at
//! line terminators and into fields at tabs, then feeds each field to the
//! formatter one wrapped line at a time. [`TextWrapper`] is the fixed-width
//! formatter that collects plain `String` lines.

use super::width::{WidthMethod, cluster_width};
use super::{grapheme_cluster_boundaries, grapheme_clusters, line_break_boundaries};

/// Receiver of wrapped text.
pub trait Formatter {
    /// Logical wrap width; `None` disables wrapping.
    fn wrap_width(&self) -> Option<usize>;

    /// Logical distance between tab stops.
    fn tab_width(&self) -> usize;

    /// Cumulative logical width at each byte of `s`.
    ///
    /// Entry `i` is the width of `s[..=i]` rounded to whole clusters.
    fn text_extents(&self, s: &str) -> Vec<usize>;

    /// Put `text` on the current line. `extents` are relative to its start.
    fn handle_text(&mut self, text: &str, extents: &[usize]);

    /// End the current line.
    fn handle_new_line(&mut self);
}

/// Wrap `s` through `formatter` and return the number of lines produced.
///
/// `cur` is the starting column of the text and `offset` the left margin of
/// the wrapping area, used to place tab stops. With `char_wrap`, lines break
/// at any grapheme cluster boundary instead of at line break opportunities.
///
/// A unit wider than the wrap width on an otherwise empty line overflows
/// rather than producing an empty line.
pub fn wrap<F>(formatter: &mut F, s: &str, mut cur: usize, offset: usize, char_wrap: bool) -> usize
where
    F: Formatter + ?Sized,
{
    let mut lines = 0;
    for paragraph in paragraphs(s) {
        for (idx, field) in paragraph.split('\t').enumerate() {
            if idx > 0 {
                let tab_width = formatter.tab_width();
                let advance = if tab_width == 0 {
                    0
                } else {
                    tab_width - (offset + cur) % tab_width
                };
                lines += wrap_field(formatter, "\t", &[advance], &mut cur, char_wrap);
            }
            if !field.is_empty() {
                let extents = formatter.text_extents(field);
                lines += wrap_field(formatter, field, &extents, &mut cur, char_wrap);
            }
        }
        formatter.handle_new_line();
        lines += 1;
        cur = 0;
    }
    lines
}

fn wrap_field<F>(
    formatter: &mut F,
    field: &str,
    extents: &[usize],
    cur: &mut usize,
    char_wrap: bool,
) -> usize
where
    F: Formatter + ?Sized,
{
    let bounds = if char_wrap {
        grapheme_cluster_boundaries(field)
    } else {
        line_break_boundaries(field, false)
    };
    let mut lines = 0;
    let mut prev_boundary = 0;
    let mut prev_extent = 0;
    let mut breakpoint = 0;
    for boundary in bounds.filter(|&b| b > 0) {
        let extent = extents.get(boundary - 1).copied().unwrap_or(prev_extent);
        let advance = extent.saturating_sub(prev_extent);
        if let Some(width) = formatter.wrap_width() {
            if *cur > 0 && *cur + advance > width {
                let line_extents = partial_extents(extents, breakpoint, prev_boundary);
                formatter.handle_text(&field[breakpoint..prev_boundary], &line_extents);
                formatter.handle_new_line();
                lines += 1;
                *cur = 0;
                breakpoint = prev_boundary;
            }
        }
        *cur += advance;
        prev_boundary = boundary;
        prev_extent = extent;
    }
    let line_extents = partial_extents(extents, breakpoint, extents.len());
    formatter.handle_text(&field[breakpoint..], &line_extents);
    lines
}

fn partial_extents(extents: &[usize], start: usize, stop: usize) -> Vec<usize> {
    let base = start.checked_sub(1).map_or(0, |idx| extents[idx]);
    extents[start..stop].iter().map(|e| e - base).collect()
}

fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split at line terminators (CR LF counts once), dropping the terminators.
fn paragraphs(s: &str) -> impl Iterator<Item = &str> {
    let mut rest = s;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((idx, c)) = rest.char_indices().find(|&(_, c)| is_line_terminator(c)) else {
            let paragraph = rest;
            rest = "";
            return Some(paragraph);
        };
        let paragraph = &rest[..idx];
        let mut end = idx + c.len_utf8();
        if c == '\r' && rest[end..].starts_with('\n') {
            end += 1;
        }
        rest = &rest[end..];
        Some(paragraph)
    })
}

/// Cumulative cluster widths for every byte of `s`.
#[must_use]
pub fn text_extents(s: &str, method: WidthMethod) -> Vec<usize> {
    let mut extents = Vec::with_capacity(s.len());
    let mut total = 0;
    for cluster in grapheme_clusters(s) {
        total += cluster_width(cluster, method);
        extents.extend(std::iter::repeat_n(total, cluster.len()));
    }
    extents
}

/// Options for [`wrap_text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrapOptions {
    /// Wrap width in columns; `None` disables wrapping.
    pub width: Option<usize>,
    /// Distance between tab stops.
    pub tab_width: usize,
    /// Narrow character used to fill tab advances.
    pub tab_char: char,
    /// Count East Asian ambiguous characters as two columns.
    pub ambiguous_as_wide: bool,
    /// Column at which the text starts.
    pub cur: usize,
    /// Left margin of the wrapping area, for tab stops.
    pub offset: usize,
    /// Break at grapheme clusters instead of line break opportunities.
    pub char_wrap: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: None,
            tab_width: 8,
            tab_char: ' ',
            ambiguous_as_wide: false,
            cur: 0,
            offset: 0,
            char_wrap: false,
        }
    }
}

/// Fixed-width formatter collecting wrapped lines.
#[derive(Clone, Debug)]
pub struct TextWrapper {
    width: Option<usize>,
    tab_width: usize,
    tab_char: char,
    method: WidthMethod,
    lines: Vec<String>,
}

impl TextWrapper {
    /// Create a formatter from wrap options.
    #[must_use]
    pub fn new(options: &WrapOptions) -> Self {
        Self {
            width: options.width,
            tab_width: options.tab_width,
            tab_char: options.tab_char,
            method: WidthMethod::from_ambiguous_as_wide(options.ambiguous_as_wide),
            lines: vec![String::new()],
        }
    }

    /// Discard collected lines.
    pub fn reset(&mut self) {
        self.lines.clear();
        self.lines.push(String::new());
    }

    /// Collected lines, without a trailing empty line.
    #[must_use]
    pub fn into_lines(mut self) -> Vec<String> {
        if self.lines.last().is_some_and(String::is_empty) {
            self.lines.pop();
        }
        self.lines
    }
}

impl Formatter for TextWrapper {
    fn wrap_width(&self) -> Option<usize> {
        self.width
    }

    fn tab_width(&self) -> usize {
        self.tab_width
    }

    fn text_extents(&self, s: &str) -> Vec<usize> {
        text_extents(s, self.method)
    }

    fn handle_text(&mut self, text: &str, extents: &[usize]) {
        let Some(line) = self.lines.last_mut() else {
            return;
        };
        if text == "\t" {
            let advance = extents.first().copied().unwrap_or(0);
            line.extend(std::iter::repeat_n(self.tab_char, advance));
        } else {
            line.push_str(text);
        }
    }

    fn handle_new_line(&mut self) {
        self.lines.push(String::new());
    }
}

/// Wrap `s` into fixed-width lines.
#[must_use]
pub fn wrap_text(s: &str, options: &WrapOptions) -> Vec<String> {
    let mut wrapper = TextWrapper::new(options);
    wrap(&mut wrapper, s, options.cur, options.offset, options.char_wrap);
    wrapper.into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(s: &str, width: usize) -> Vec<String> {
        wrap_text(
            s,
            &WrapOptions {
                width: Some(width),
                ..WrapOptions::default()
            },
        )
    }

    #[test]
    fn test_wraps_at_spaces() {
        assert_eq!(
            wrapped("The quick brown fox", 10),
            vec!["The quick ", "brown fox"]
        );
    }

    #[test]
    fn test_no_width_keeps_paragraphs() {
        let lines = wrap_text("one\ntwo\r\nthree", &WrapOptions::default());
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_wide_characters_count_double() {
        assert_eq!(wrapped("中文字符", 4), vec!["中文", "字符"]);
    }

    #[test]
    fn test_ambiguous_as_wide() {
        let options = WrapOptions {
            width: Some(2),
            ambiguous_as_wide: true,
            char_wrap: true,
            ..WrapOptions::default()
        };
        assert_eq!(wrap_text("αβ", &options), vec!["α", "β"]);
        let narrow = WrapOptions {
            ambiguous_as_wide: false,
            ..options
        };
        assert_eq!(wrap_text("αβ", &narrow), vec!["αβ"]);
    }

    #[test]
    fn test_char_wrap_splits_words() {
        let options = WrapOptions {
            width: Some(3),
            char_wrap: true,
            ..WrapOptions::default()
        };
        assert_eq!(wrap_text("abcdefg", &options), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_tabs_advance_to_stops() {
        let options = WrapOptions {
            tab_width: 4,
            tab_char: '.',
            ..WrapOptions::default()
        };
        assert_eq!(wrap_text("ab\tc", &options), vec!["ab..c"]);
    }

    #[test]
    fn test_overlong_word_overflows() {
        assert_eq!(wrapped("abcdefgh ij", 4), vec!["abcdefgh ", "ij"]);
    }

    #[test]
    fn test_line_count() {
        let mut wrapper = TextWrapper::new(&WrapOptions {
            width: Some(5),
            ..WrapOptions::default()
        });
        assert_eq!(wrap(&mut wrapper, "aaa bbb\nccc", 0, 0, false), 3);
        assert_eq!(wrapper.into_lines(), vec!["aaa ", "bbb", "ccc"]);
    }

    #[test]
    fn test_extents_follow_clusters() {
        assert_eq!(text_extents("abc", WidthMethod::Narrow), vec![1, 2, 3]);
        // 'e' + combining acute share one column.
        assert_eq!(text_extents("e\u{0301}", WidthMethod::Narrow), vec![1, 1, 1]);
        assert_eq!(text_extents("あ", WidthMethod::Narrow), vec![2, 2, 2]);
    }
}
