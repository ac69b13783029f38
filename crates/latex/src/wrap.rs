//! Nearest-word-boundary line wrapping.
//!
//! Lines are measured in chars. A break is only ever placed on an ASCII space or
//! between two space-separated tokens, so a token longer than the width stays
//! on one line. Tabs and no-break spaces are part of the token they sit in.

use crate::error::{LatexError, Result};

/// Wraps text at a fixed column width, keeping explicit line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordWrapper {
    width: usize,
}

/// Byte offsets of one break: the head ends at `head_end`, the rest of the
/// line resumes at `tail_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Break {
    head_end: usize,
    tail_start: usize,
}

impl WordWrapper {
    /// Create a wrapper for the given width.
    ///
    /// # Errors
    ///
    /// Returns [`LatexError::InvalidWrapWidth`] when `width` is zero.
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(LatexError::InvalidWrapWidth { width });
        }
        Ok(Self { width })
    }

    /// The configured width in chars
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Wrap `text`, returning the lines joined with `\n`.
    ///
    /// Each `\n`-separated segment of the input is wrapped on its own, so
    /// breaks already present are kept. Trailing whitespace of the result is
    /// trimmed.
    #[must_use]
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        for segment in text.split('\n') {
            for line in self.wrap_segment(segment) {
                out.push_str(line);
                out.push('\n');
            }
        }
        out.truncate(out.trim_end().len());
        out
    }

    /// Wrap a single segment that contains no `\n`.
    #[must_use]
    pub fn wrap_segment<'a>(&self, segment: &'a str) -> Vec<&'a str> {
        let mut lines = Vec::new();
        let mut rest = segment;

        while rest.chars().count() > self.width {
            let Some(brk) = self.find_break(rest) else {
                break;
            };
            lines.push(&rest[..brk.head_end]);
            rest = &rest[brk.tail_start..];
        }

        lines.push(rest);
        lines
    }

    /// Locate the break for a line longer than the width, if one exists.
    fn find_break(&self, line: &str) -> Option<Break> {
        let chars: Vec<(usize, char)> = line.char_indices().collect();
        let &(at, ch) = chars.get(self.width)?;

        // A space sitting exactly on the width is consumed by the break
        if is_break_space(ch) {
            return Some(Break {
                head_end: at,
                tail_start: at + ch.len_utf8(),
            });
        }

        let split = |offset: usize| {
            let byte = chars.get(offset).map_or(line.len(), |&(b, _)| b);
            Break {
                head_end: byte,
                tail_start: byte,
            }
        };

        let boundaries = token_boundaries(&chars);
        for pair in boundaries.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if upper == self.width {
                return Some(split(upper));
            }
            if lower <= self.width && self.width < upper {
                return Some(split(lower));
            }
        }

        // Only the first token overflows: it stays whole, the rest wraps
        match boundaries.as_slice() {
            [first, _, ..] if *first > self.width => Some(split(*first)),
            _ => None,
        }
    }
}

/// Only a plain space separates tokens.
fn is_break_space(c: char) -> bool {
    c == ' '
}

/// Char offset reached by each space-delimited token.
///
/// Every token but the last owns the whitespace after it, so its boundary is
/// where the next token starts. The last boundary is the end of the last token.
fn token_boundaries(chars: &[(usize, char)]) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut last_end = 0;
    let mut in_token = false;

    for (i, &(_, c)) in chars.iter().enumerate() {
        if is_break_space(c) {
            if in_token {
                last_end = i;
                in_token = false;
            }
        } else if !in_token {
            starts.push(i);
            in_token = true;
        }
    }
    if in_token {
        last_end = chars.len();
    }

    let mut boundaries: Vec<usize> = starts.iter().skip(1).copied().collect();
    if !starts.is_empty() {
        boundaries.push(last_end);
    }
    boundaries
}
