//! Whitespace layouts of MathML markup.
//!
//! [`pretty`] puts every tag on its own line and indents by nesting depth,
//! [`flatten`] collapses the markup onto a single line. Neither is a real XML
//! parser: both work on tag boundaries only, so malformed or unbalanced markup
//! is reformatted on a best-effort basis rather than rejected.
//!
//! ```
//! let pretty = tex2mml::pretty("<a><b>x</b></a>");
//! assert_eq!(pretty, "<a>\n  <b>x</b>\n</a>");
//! assert_eq!(tex2mml::flatten(&pretty), "<a><b>x</b></a>");
//! ```

use crate::error::{Error, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

/// One level of indentation.
pub const INDENT: &str = "  ";

lazy_static! {
    static ref TAG_NAME: Regex = Regex::new(r"<([A-Za-z0-9_]+)").unwrap();
    static ref INTER_TAG_SPACE: Regex = Regex::new(r">\s+<").unwrap();
}

/// Indent markup, one tag or text run per line.
///
/// Lines are only broken between a `>` and the following `<`; line feeds
/// already in the markup stay where they are. Never fails; if reformatting
/// would lose content the input is returned unchanged.
pub fn pretty(markup: &str) -> String {
    try_pretty(markup).unwrap_or_else(|e| {
        log::warn!("{e}, keeping markup as is");
        markup.to_owned()
    })
}

/// Like [`pretty`], but reports [`Error::Format`] instead of falling back.
pub fn try_pretty(markup: &str) -> Result<String> {
    let lines = split_between_tags(markup);
    let mut depth = 0usize;
    let formatted = lines
        .iter()
        .map(|line| {
            if line.starts_with("</") {
                depth = depth.saturating_sub(1);
            }
            let emitted = format!("{}{line}", INDENT.repeat(depth));
            if opens_element(line) {
                depth += 1;
            }
            emitted
        })
        .join("\n");

    // only the separators between tags may differ from the input
    if lines.concat() != markup.trim() {
        return Err(Error::Format(
            "indented markup differs from input content".to_owned(),
        ));
    }
    Ok(formatted)
}

/// Split at every `><`, keeping both brackets, and trim the pieces.
fn split_between_tags(markup: &str) -> Vec<String> {
    let pieces: Vec<&str> = markup.split("><").collect();
    let last = pieces.len() - 1;
    pieces
        .iter()
        .enumerate()
        .map(|(i, piece)| {
            let open = if i > 0 { "<" } else { "" };
            let close = if i < last { ">" } else { "" };
            format!("{open}{piece}{close}").trim().to_owned()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Whether `line` opens an element that stays open past the end of the line.
fn opens_element(line: &str) -> bool {
    if !line.starts_with('<') || line.starts_with("</") || line.ends_with("/>") {
        return false;
    }
    match TAG_NAME.captures(line) {
        Some(caps) => !line.contains(&format!("</{}>", &caps[1])),
        None => false,
    }
}

/// Collapse markup onto a single line.
///
/// Whitespace between a `>` and the next `<` is removed, remaining line feeds
/// are dropped and the result is trimmed. Text content keeps its inner
/// whitespace. Idempotent.
pub fn flatten(markup: &str) -> String {
    INTER_TAG_SPACE
        .replace_all(markup, "><")
        .replace('\n', "")
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "x",
        "<a><b>x</b></a>",
        "<a>\n  <b>x</b>\n</a>",
        "</a><b>",
        "<a/><b></b>",
        r#"<math display="block"><mfrac><mn>1</mn><mn>2</mn></mfrac></math>"#,
        "<mrow><mi>a</mi> <mo>+</mo>\n\t<mi>b</mi></mrow>",
        "  <a>  text with  spaces </a>  ",
        "<?xml version=\"1.0\"?><math><mi>x</mi></math>",
        "<a><b><c>",
        "</a></b></c>",
        "<a>x<br/>y</a>",
        "><><><",
    ];

    #[test]
    fn nested_elements() {
        assert_eq!(pretty("<a><b>x</b></a>"), "<a>\n  <b>x</b>\n</a>");
    }

    #[test]
    fn flattens_indented_markup() {
        assert_eq!(flatten("<a>\n  <b>x</b>\n</a>"), "<a><b>x</b></a>");
    }

    #[test]
    fn unmatched_closing_tag_clamps_at_zero() {
        assert_eq!(pretty("</a><b>"), "</a>\n<b>");
        assert_eq!(pretty("</a></b><c></c>"), "</a>\n</b>\n<c>\n</c>");
    }

    #[test]
    fn empty_input() {
        assert_eq!(pretty(""), "");
        assert_eq!(flatten(""), "");
        assert_eq!(pretty("  \n "), "");
    }

    #[test]
    fn self_closing_and_empty_elements_stay_at_top_level() {
        let out = pretty("<a/><b></b>");
        assert_eq!(out, "<a/>\n<b>\n</b>");
        assert!(out.lines().all(|line| !line.starts_with(' ')));
    }

    #[test]
    fn mathml_fraction() {
        let input = r#"<math display="block"><mfrac><mn>1</mn><mn>2</mn></mfrac></math>"#;
        let expected = "<math display=\"block\">\n  <mfrac>\n    <mn>1</mn>\n    <mn>2</mn>\n  </mfrac>\n</math>";
        assert_eq!(pretty(input), expected);
    }

    #[test]
    fn text_runs_do_not_change_depth() {
        assert_eq!(pretty("<a>x<b>y</b></a>"), "<a>x<b>y</b>\n</a>");
        assert_eq!(pretty("<a>text</a><b>"), "<a>text</a>\n<b>");
    }

    #[test]
    fn existing_line_breaks_are_kept() {
        let input = "<a>\n<b>x</b>\n</a>";
        assert_eq!(pretty(input), input);
    }

    #[test]
    fn line_break_inside_text_is_kept() {
        let input = "<mtext>a \n b</mtext>";
        assert_eq!(try_pretty(input), Ok(input.to_owned()));
        assert_eq!(
            pretty("<math><mtext>a \n b</mtext></math>"),
            "<math>\n  <mtext>a \n b</mtext>\n</math>"
        );
    }

    #[test]
    fn only_whitespace_between_tags_changes() {
        for sample in SAMPLES.iter().filter(|sample| !sample.contains('\n')) {
            let rejoined = pretty(sample).lines().map(str::trim_start).join("");
            assert_eq!(rejoined, sample.trim(), "{sample:?}");
        }
    }

    #[test]
    fn unnamed_tags_do_not_indent() {
        assert_eq!(pretty("<!-- c --><a></a>"), "<!-- c -->\n<a>\n</a>");
        assert_eq!(pretty("<><a></a>"), "<>\n<a>\n</a>");
    }

    #[test]
    fn unicode_tag_names_do_not_indent() {
        assert_eq!(pretty("<é><a></a>"), "<é>\n<a>\n</a>");
    }

    #[test]
    fn unbalanced_markup_keeps_indenting() {
        assert_eq!(pretty("<a><b><c>"), "<a>\n  <b>\n    <c>");
    }

    #[test]
    fn pretty_preserves_content() {
        for sample in SAMPLES {
            assert_eq!(flatten(&pretty(sample)), flatten(sample), "{sample:?}");
            assert!(try_pretty(sample).is_ok(), "{sample:?}");
        }
    }

    #[test]
    fn flatten_is_idempotent() {
        for sample in SAMPLES {
            let once = flatten(sample);
            assert_eq!(flatten(&once), once, "{sample:?}");
            let pretty_once = flatten(&pretty(sample));
            assert_eq!(flatten(&pretty_once), pretty_once, "{sample:?}");
        }
    }

    #[test]
    fn flatten_keeps_text_whitespace() {
        assert_eq!(
            flatten("<mtext> two  words </mtext>\n<mi>x</mi>"),
            "<mtext> two  words </mtext><mi>x</mi>"
        );
    }

    #[test]
    fn pretty_lines_are_indented_by_two_spaces() {
        let out = pretty("<a><b><c>x</c></b></a>");
        let indents: Vec<_> = out
            .lines()
            .map(|line| line.len() - line.trim_start().len())
            .collect();
        assert_eq!(indents, [0, 2, 4, 2, 0]);
    }
}
