//! Markdown/Unicode-preserving text reversal.
//!
//! Reverses text the way a reader would expect "backwards" text to look:
//! grapheme clusters stay intact (no splitting a flag emoji or a combining
//! accent off its base), inline markdown delimiters stay attached to the
//! text they wrapped, heading and list markers stay pinned to the front of
//! their line, code blocks and inline code survive byte-for-byte, and the
//! line order flips top-to-bottom.
//!
//! The transformation is a total function: there is no error path. Malformed
//! markdown (unbalanced delimiters, unterminated code fences) degrades to
//! best-effort literal treatment rather than failing.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

// Protected spans. Fenced blocks are extracted first so a fence containing
// backticks is never mis-parsed as inline code. Inline spans do not cross
// line boundaries.
static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("valid regex"));
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`\n]*`").expect("valid regex"));

// Leading line markers. Heading wins over list so "# - x" is a heading.
static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+").expect("valid regex"));
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+").expect("valid regex"));

// Placeholder tokens substituted for protected spans while the surrounding
// text is reordered.
static PLACEHOLDER_AT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^__(?:CODEBLOCK|INLINECODE)_\d+__").expect("valid regex"));
static CODE_BLOCK_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__CODEBLOCK_(\d+)__").expect("valid regex"));
static INLINE_CODE_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__INLINECODE_(\d+)__").expect("valid regex"));

/// Inline markdown delimiters, longest first so `**` is never read as two
/// `*` tokens. Delimiter characters are relocated but never reversed.
const DELIMITERS: [&str; 4] = ["**", "__", "~~", "*"];

/// One lexical unit of a line. Only `Text` is ever reversed; the other two
/// variants pass through verbatim, which makes the "never reverse inside a
/// placeholder or delimiter" rule structural rather than checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// A run of ordinary text, reversed at grapheme granularity
    Text(&'a str),
    /// A markdown delimiter (`**`, `__`, `~~`, `*`), preserved verbatim
    Delimiter(&'a str),
    /// A protected-span placeholder, opaque and atomic
    Placeholder(&'a str),
}

/// Protected spans lifted out of the input before any reversal happens.
#[derive(Debug, Default)]
struct ProtectedSpans {
    code_blocks: Vec<String>,
    inline_codes: Vec<String>,
}

/// Reverses `input` while preserving markdown structure, emoji, and code.
///
/// Pipeline: extract protected spans behind placeholders, reverse each
/// line's content (markers pinned, delimiters relocated, text reversed by
/// grapheme), reverse the line order, then restore the protected spans.
///
/// Total over all string input; the empty string maps to itself.
#[must_use]
pub fn reverse_formatted_text(input: &str) -> String {
    let (masked, spans) = extract_protected_spans(input);

    let reversed_lines: Vec<String> = masked.split('\n').map(reverse_line).collect();

    let mut joined = String::with_capacity(masked.len());
    for (i, line) in reversed_lines.iter().rev().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(line);
    }

    restore_protected_spans(&joined, &spans)
}

/// Replaces every fenced code block, then every inline code span, with an
/// indexed placeholder token. Returns the masked text and the side tables
/// holding the original bytes.
///
/// Unterminated fences simply fail to match and pass through as plain text.
fn extract_protected_spans(input: &str) -> (String, ProtectedSpans) {
    let mut spans = ProtectedSpans::default();

    let masked = CODE_BLOCK.replace_all(input, |caps: &Captures<'_>| {
        let index = spans.code_blocks.len();
        spans.code_blocks.push(caps[0].to_string());
        format!("__CODEBLOCK_{index}__")
    });

    let masked = INLINE_CODE.replace_all(&masked, |caps: &Captures<'_>| {
        let index = spans.inline_codes.len();
        spans.inline_codes.push(caps[0].to_string());
        format!("__INLINECODE_{index}__")
    });

    (masked.into_owned(), spans)
}

/// Substitutes the original protected-span bytes back into their
/// placeholder positions. A placeholder with no table entry (the user
/// literally typed one) is left untouched.
fn restore_protected_spans(text: &str, spans: &ProtectedSpans) -> String {
    let restored = CODE_BLOCK_SLOT.replace_all(text, |caps: &Captures<'_>| {
        lookup_span(&spans.code_blocks, caps)
    });
    INLINE_CODE_SLOT
        .replace_all(&restored, |caps: &Captures<'_>| {
            lookup_span(&spans.inline_codes, caps)
        })
        .into_owned()
}

fn lookup_span(table: &[String], caps: &Captures<'_>) -> String {
    caps[1]
        .parse::<usize>()
        .ok()
        .and_then(|index| table.get(index))
        .cloned()
        .unwrap_or_else(|| caps[0].to_string())
}

/// Reverses a single line: the leading heading/list marker (captured from
/// the original line, never re-derived from reversed text) stays in front,
/// text tokens are grapheme-reversed, and the token order flips so
/// delimiters stay attached to the words they wrapped.
fn reverse_line(line: &str) -> String {
    let (marker, content) = split_line_marker(line);

    let mut pieces: Vec<String> = tokenize(content)
        .into_iter()
        .map(|token| match token {
            Token::Text(text) => reverse_graphemes(text),
            Token::Delimiter(verbatim) | Token::Placeholder(verbatim) => verbatim.to_string(),
        })
        .collect();
    pieces.reverse();

    let mut out = String::with_capacity(line.len());
    out.push_str(marker);
    for piece in &pieces {
        out.push_str(piece);
    }
    out
}

/// Splits a line into its optional leading marker and the remaining content.
fn split_line_marker(line: &str) -> (&str, &str) {
    let marker_end = HEADING_MARKER
        .find(line)
        .or_else(|| LIST_MARKER.find(line))
        .map_or(0, |found| found.end());
    line.split_at(marker_end)
}

/// Lexes a line into text runs, delimiters, and placeholders. Placeholders
/// are matched before delimiters; their surrounding `__` would otherwise be
/// read as bold-alt markers and the stem reversed.
fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];

        if let Some(found) = PLACEHOLDER_AT_START.find(rest) {
            push_pending_text(&mut tokens, line, text_start, pos);
            tokens.push(Token::Placeholder(&rest[..found.end()]));
            pos += found.end();
            text_start = pos;
        } else if let Some(delimiter) = DELIMITERS.iter().find(|d| rest.starts_with(**d)) {
            push_pending_text(&mut tokens, line, text_start, pos);
            tokens.push(Token::Delimiter(&rest[..delimiter.len()]));
            pos += delimiter.len();
            text_start = pos;
        } else {
            // Advance one code point; delimiters and placeholders are ASCII
            // so no boundary can be skipped.
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    push_pending_text(&mut tokens, line, text_start, line.len());

    tokens
}

fn push_pending_text<'a>(tokens: &mut Vec<Token<'a>>, line: &'a str, start: usize, end: usize) {
    if start < end {
        tokens.push(Token::Text(&line[start..end]));
    }
}

/// Reverses a string at grapheme-cluster granularity, so multi-code-point
/// emoji and combining sequences stay intact.
fn reverse_graphemes(text: &str) -> String {
    text.graphemes(true).rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_word() {
        assert_eq!(reverse_formatted_text("Hello"), "olleH");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(reverse_formatted_text(""), "");
    }

    #[test]
    fn test_bold_wrapper_preserved() {
        assert_eq!(reverse_formatted_text("**Hello**"), "**olleH**");
    }

    #[test]
    fn test_delimiters_stay_attached_to_their_word() {
        // Token order reversal moves the formatted word to the end with its
        // markers still around it.
        assert_eq!(reverse_formatted_text("**Hello** world"), "dlrow **olleH**");
    }

    #[test]
    fn test_underline_and_strikethrough() {
        assert_eq!(reverse_formatted_text("__under__"), "__rednu__");
        assert_eq!(reverse_formatted_text("~~gone~~"), "~~enog~~");
        assert_eq!(reverse_formatted_text("*slant*"), "*tnals*");
    }

    #[test]
    fn test_line_order_reversed() {
        assert_eq!(reverse_formatted_text("First\nSecond"), "dnoceS\ntsriF");
    }

    #[test]
    fn test_inline_code_untouched() {
        assert_eq!(reverse_formatted_text("`a*b`"), "`a*b`");
    }

    #[test]
    fn test_inline_code_with_surrounding_text() {
        let output = reverse_formatted_text("run `a*b` now");
        assert!(output.contains("`a*b`"), "span mangled: {output}");
        assert!(output.starts_with("won "), "got: {output}");
    }

    #[test]
    fn test_list_marker_pinned() {
        assert_eq!(reverse_formatted_text("- item one"), "- eno meti");
    }

    #[test]
    fn test_heading_marker_pinned() {
        assert_eq!(reverse_formatted_text("# Hello World"), "# dlroW olleH");
    }

    #[test]
    fn test_all_list_marker_variants() {
        assert_eq!(reverse_formatted_text("* starred"), "* derrats");
        assert_eq!(reverse_formatted_text("+ plussed"), "+ dessulp");
    }

    #[test]
    fn test_deep_heading() {
        assert_eq!(reverse_formatted_text("###### deep"), "###### peed");
    }

    #[test]
    fn test_reversed_line_starting_with_hash_is_not_a_marker() {
        // "c# ba" reverses to "ab #c"; the original line had no marker, so
        // the "# " that appears mid-pipeline must not be re-stripped.
        assert_eq!(reverse_formatted_text("ab #c"), "c# ba");
    }

    #[test]
    fn test_grapheme_integrity_family_emoji() {
        let input = "hi 👩‍👩‍👧‍👦 there";
        let output = reverse_formatted_text(input);
        assert!(output.contains("👩‍👩‍👧‍👦"), "emoji split: {output}");
        assert_eq!(output, "ereht 👩‍👩‍👧‍👦 ih");
    }

    #[test]
    fn test_grapheme_integrity_combining_accent() {
        // "e" + U+0301 must stay one unit
        let input = "abe\u{301}";
        let output = reverse_formatted_text(input);
        assert_eq!(output, "e\u{301}ba");
    }

    #[test]
    fn test_code_block_bytes_invariant() {
        let input = "before\n```\nlet x = **1**;\n`tick`\n```\nafter";
        let output = reverse_formatted_text(input);
        assert!(
            output.contains("```\nlet x = **1**;\n`tick`\n```"),
            "block mangled: {output}"
        );
        // Line order around the block flips
        assert!(output.starts_with("retfa"), "got: {output}");
        assert!(output.ends_with("erofeb"), "got: {output}");
    }

    #[test]
    fn test_unterminated_fence_is_plain_text() {
        let output = reverse_formatted_text("```rust\nno close");
        // The fence chars are treated as ordinary text and reverse with it
        assert_eq!(output, "esolc on\ntsur```");
    }

    #[test]
    fn test_multiple_inline_spans_keep_their_own_content() {
        let output = reverse_formatted_text("`one` and `two`");
        assert!(output.contains("`one`"), "got: {output}");
        assert!(output.contains("`two`"), "got: {output}");
        assert_eq!(output, "`two` dna `one`");
    }

    #[test]
    fn test_literal_placeholder_text_survives() {
        // No extraction happened, so index 7 has no table entry; the token
        // passes through untouched instead of panicking or vanishing.
        assert_eq!(
            reverse_formatted_text("__CODEBLOCK_7__"),
            "__CODEBLOCK_7__"
        );
    }

    #[test]
    fn test_double_reversal_is_identity() {
        let cases = [
            "Hello world",
            "**bold** and *ital* and ~~strike~~",
            "line one\nline two\nline three",
            "emoji 🇦🇺 flags",
        ];
        for case in cases {
            assert_eq!(
                reverse_formatted_text(&reverse_formatted_text(case)),
                case,
                "not an involution for {case:?}"
            );
        }
    }

    #[test]
    fn test_markers_on_multiple_lines() {
        let input = "# Title\n- first\n- second";
        let output = reverse_formatted_text(input);
        assert_eq!(output, "- dnoces\n- tsrif\n# eltiT");
    }

    #[test]
    fn test_unbalanced_delimiters_best_effort() {
        // Lexical split, no validation: the lone ** relocates like any
        // other delimiter token.
        assert_eq!(reverse_formatted_text("**oops"), "spoo**");
    }

    #[test]
    fn test_tokenize_classifies_placeholder_atomically() {
        let tokens = tokenize("__INLINECODE_0__");
        assert_eq!(tokens, vec![Token::Placeholder("__INLINECODE_0__")]);
    }

    #[test]
    fn test_tokenize_longest_delimiter_first() {
        let tokens = tokenize("**a*");
        assert_eq!(
            tokens,
            vec![
                Token::Delimiter("**"),
                Token::Text("a"),
                Token::Delimiter("*"),
            ]
        );
    }

    #[test]
    fn test_split_line_marker_prefers_heading() {
        let (marker, rest) = split_line_marker("## x");
        assert_eq!(marker, "## ");
        assert_eq!(rest, "x");

        let (marker, rest) = split_line_marker("no marker");
        assert_eq!(marker, "");
        assert_eq!(rest, "no marker");
    }
}
