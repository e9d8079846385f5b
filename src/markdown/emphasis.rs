//! Bold, italic and strikethrough substitution.
//!
//! Five independent passes run in a fixed order: `**`, `*`, `__`, `_`, `~`.
//! Each pass sees the output of the previous one, so interleaved emphasis
//! such as `*a _b* c_` produces overlapping tags rather than a properly
//! nested tree. Unpaired delimiters are left in the text.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static DOUBLE_ASTERISK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("double asterisk pattern is valid"));

static DOUBLE_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("double underscore pattern is valid"));

static TILDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~(.+?)~").expect("tilde pattern is valid"));

/// Inline formatting produced by a delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emphasis {
    Bold,
    Italic,
    Strikethrough,
}

impl Emphasis {
    /// HTML element name used for this emphasis.
    fn tag(self) -> &'static str {
        match self {
            Self::Bold => "strong",
            Self::Italic => "em",
            Self::Strikethrough => "del",
        }
    }
}

/// What replaces a matched delimiter span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Inner content wrapped in the emphasis element.
    Tagged,
    /// Inner content only, delimiters dropped.
    Bare,
}

impl Substitution {
    fn write(self, emphasis: Emphasis, inner: &str, out: &mut String) {
        match self {
            Self::Tagged => {
                let tag = emphasis.tag();
                out.push('<');
                out.push_str(tag);
                out.push('>');
                out.push_str(inner);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            Self::Bare => out.push_str(inner),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Delimiter {
    DoubleAsterisk,
    Asterisk,
    DoubleUnderscore,
    Underscore,
    Tilde,
}

impl Delimiter {
    const ORDER: [Self; 5] = [
        Self::DoubleAsterisk,
        Self::Asterisk,
        Self::DoubleUnderscore,
        Self::Underscore,
        Self::Tilde,
    ];

    fn emphasis(self) -> Emphasis {
        match self {
            Self::DoubleAsterisk | Self::Asterisk => Emphasis::Bold,
            Self::DoubleUnderscore | Self::Underscore => Emphasis::Italic,
            Self::Tilde => Emphasis::Strikethrough,
        }
    }

    fn apply(self, text: &str, substitution: Substitution) -> String {
        let emphasis = self.emphasis();
        let write = |inner: &str, out: &mut String| substitution.write(emphasis, inner, out);

        match self {
            Self::DoubleAsterisk => replace_paired(&DOUBLE_ASTERISK, text, write),
            Self::Asterisk => replace_lone(text, b'*', write),
            Self::DoubleUnderscore => replace_paired(&DOUBLE_UNDERSCORE, text, write),
            Self::Underscore => replace_lone(text, b'_', write),
            Self::Tilde => replace_paired(&TILDE, text, write),
        }
    }
}

/// Runs all emphasis passes over `text` in their fixed order.
///
/// # Arguments
///
/// * `text`: Text to transform, already escaped when producing HTML
/// * `substitution`: Whether matches become tags or bare content
///
/// # Returns
///
/// Text with every matched delimiter span substituted
pub fn apply_emphasis(text: &str, substitution: Substitution) -> String {
    Delimiter::ORDER
        .iter()
        .fold(text.to_string(), |acc, delimiter| delimiter.apply(&acc, substitution))
}

fn replace_paired(pattern: &Regex, text: &str, write: impl Fn(&str, &mut String)) -> String {
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            let mut out = String::new();
            write(&caps[1], &mut out);
            out
        })
        .into_owned()
}

/// Replaces spans opened and closed by a lone `delim` byte.
///
/// A delimiter is lone when neither neighbour is another `delim`. The span
/// content is at least one character, holds no newline, and ends at the
/// first lone delimiter after the opener. Neighbours are always read from
/// `text` as given, including delimiters consumed by an earlier match.
fn replace_lone(text: &str, delim: u8, write: impl Fn(&str, &mut String)) -> String {
    let bytes = text.as_bytes();
    let is_lone = |i: usize| {
        bytes[i] == delim
            && (i == 0 || bytes[i - 1] != delim)
            && bytes.get(i + 1) != Some(&delim)
    };

    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if !is_lone(pos) {
            pos += 1;
            continue;
        }

        let mut close = None;
        let mut end = pos + 1;
        while end < bytes.len() && bytes[end] != b'\n' {
            if end > pos + 1 && is_lone(end) {
                close = Some(end);
                break;
            }
            end += 1;
        }

        match close {
            Some(end) => {
                result.push_str(&text[copied..pos]);
                write(&text[pos + 1..end], &mut result);
                copied = end + 1;
                pos = end + 1;
            }
            None => pos += 1,
        }
    }

    result.push_str(&text[copied..]);
    result
}
