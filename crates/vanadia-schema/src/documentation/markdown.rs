//! Inline markdown rendering for schema descriptions
//!
//! Only three span kinds are recognised, applied in this order:
//! - `` `code` `` becomes `<code>code</code>`
//! - `__bold__` / `**bold**` becomes `<strong>bold</strong>`
//! - `_italic_` / `*italic*` becomes `<em>italic</em>`
//!
//! Matching is non-greedy and there is no escaping, so an unmatched delimiter is
//! kept as-is. Emphasis may wrap a code span, but text inside a code span is
//! never rescanned by the later passes.
//!
//! Copyright (c) 2025 Vanadia Team
//! Licensed under the Apache-2.0 license

use regex::{Captures, Regex};
use std::sync::OnceLock;

static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();

fn code_regex() -> &'static Regex {
    CODE_REGEX.get_or_init(|| Regex::new(r"`(.*?)`").unwrap())
}

fn bold_regex() -> &'static Regex {
    BOLD_REGEX.get_or_init(|| Regex::new(r"__(.*?)__|\*\*(.*?)\*\*").unwrap())
}

fn italic_regex() -> &'static Regex {
    ITALIC_REGEX.get_or_init(|| Regex::new(r"_(.*?)_|\*(.*?)\*").unwrap())
}

/// Render the supported inline markdown spans in `text` as HTML
pub fn render_markdown(text: &str) -> String {
    let sentinel = placeholder_sentinel(text);
    let mut code_spans = Vec::new();

    // Code spans are swapped for placeholders so emphasis can wrap them but
    // never reach inside them.
    let masked = code_regex().replace_all(text, |caps: &Captures| {
        let index = code_spans.len();
        code_spans.push(caps.get(1).map_or("", |m| m.as_str()).to_string());
        format!("{sentinel}{index}{sentinel}")
    });

    let bold = replace_spans(bold_regex(), &masked, "strong");
    let emphasised = replace_spans(italic_regex(), &bold, "em");

    if code_spans.is_empty() {
        return emphasised;
    }
    restore_code_spans(&emphasised, sentinel, &code_spans)
}

/// First private-use character absent from `text`
fn placeholder_sentinel(text: &str) -> char {
    ('\u{E000}'..='\u{F8FF}')
        .find(|c| !text.contains(*c))
        .unwrap_or('\u{FFFF}')
}

/// Text between sentinels alternates plain text and code span indices.
fn restore_code_spans(masked: &str, sentinel: char, code_spans: &[String]) -> String {
    let mut out = String::with_capacity(masked.len() + code_spans.len() * 13);
    for (i, part) in masked.split(sentinel).enumerate() {
        if i % 2 == 0 {
            out.push_str(part);
            continue;
        }
        match part.parse::<usize>().ok().and_then(|index| code_spans.get(index)) {
            Some(code) => {
                out.push_str("<code>");
                out.push_str(code);
                out.push_str("</code>");
            }
            None => out.push_str(part),
        }
    }
    out
}

/// Each pattern has one capture group per delimiter alternative.
fn replace_spans(regex: &Regex, text: &str, tag: &str) -> String {
    regex
        .replace_all(text, |caps: &Captures| {
            let inner = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            format!("<{tag}>{inner}</{tag}>")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_span() {
        assert_eq!(render_markdown("use `id` here"), "use <code>id</code> here");
    }

    #[test]
    fn test_bold_both_delimiters() {
        assert_eq!(render_markdown("__a__ and **b**"), "<strong>a</strong> and <strong>b</strong>");
    }

    #[test]
    fn test_italic_both_delimiters() {
        assert_eq!(render_markdown("_a_ and *b*"), "<em>a</em> and <em>b</em>");
    }

    #[test]
    fn test_pass_ordering() {
        assert_eq!(render_markdown("`a` **b**"), "<code>a</code> <strong>b</strong>");
    }

    #[test]
    fn test_code_contents_not_rescanned() {
        assert_eq!(render_markdown("`**x**`"), "<code>**x**</code>");
        assert_eq!(render_markdown("`snake_case_name`"), "<code>snake_case_name</code>");
    }

    #[test]
    fn test_emphasis_wrapping_code() {
        assert_eq!(render_markdown("**`id`**"), "<strong><code>id</code></strong>");
        assert_eq!(render_markdown("__`id`__ is set"), "<strong><code>id</code></strong> is set");
        assert_eq!(render_markdown("_`id`_"), "<em><code>id</code></em>");
        assert_eq!(render_markdown("*a `b` c*"), "<em>a <code>b</code> c</em>");
    }

    #[test]
    fn test_code_spans_inside_emphasis_keep_delimiters() {
        assert_eq!(
            render_markdown("**see `a_b` and `c*d`**"),
            "<strong>see <code>a_b</code> and <code>c*d</code></strong>"
        );
    }

    #[test]
    fn test_private_use_text_is_preserved() {
        let text = "\u{E000}0\u{E000} `x`";
        assert_eq!(render_markdown(text), "\u{E000}0\u{E000} <code>x</code>");
    }

    #[test]
    fn test_non_greedy() {
        assert_eq!(render_markdown("`a` b `c`"), "<code>a</code> b <code>c</code>");
        assert_eq!(render_markdown("*a* b *c*"), "<em>a</em> b <em>c</em>");
    }

    #[test]
    fn test_unmatched_delimiters_verbatim() {
        assert_eq!(render_markdown("a `b"), "a `b");
        assert_eq!(render_markdown("2 * 3"), "2 * 3");
    }

    #[test]
    fn test_lone_double_delimiter_is_empty_emphasis() {
        // not bold without a closing pair, but two adjacent single delimiters
        assert_eq!(render_markdown("__open"), "<em></em>open");
    }

    #[test]
    fn test_plain_text_and_empty() {
        assert_eq!(render_markdown(""), "");
        assert_eq!(render_markdown("The user's name."), "The user's name.");
    }

    #[test]
    fn test_multiline_spans_do_not_match() {
        assert_eq!(render_markdown("*a\nb*"), "*a\nb*");
    }
}
