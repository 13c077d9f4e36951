//! Escaping of LaTeX input and normalization of the MathML namespace.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

/// Namespace URI of MathML.
pub const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

lazy_static! {
    static ref NAMESPACE_ATTR: Regex =
        Regex::new(r#" xmlns="http://www\.w3\.org/1998/Math/MathML""#).unwrap();
    static ref MATH_START: Regex = Regex::new(r"<math(\s[^>]*)?>").unwrap();
}

/// Replace every `<` with `&lt;` and every `>` with `&gt;`.
pub fn escape_input(input: &str) -> String {
    input.replace('<', "&lt;").replace('>', "&gt;")
}

/// Remove every MathML namespace attribute.
pub fn strip_namespace(markup: &str) -> Cow<'_, str> {
    NAMESPACE_ATTR.replace_all(markup, "")
}

/// Add the MathML namespace to every `<math>` start tag lacking an `xmlns` attribute.
pub fn ensure_namespace(markup: &str) -> Cow<'_, str> {
    MATH_START.replace_all(markup, |caps: &regex::Captures<'_>| {
        let attrs = caps.get(1).map_or("", |m| m.as_str());
        if attrs.contains("xmlns=") {
            caps[0].to_owned()
        } else {
            format!(r#"<math xmlns="{MATHML_NAMESPACE}"{attrs}>"#)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(escape_input("a<b>c"), "a&lt;b&gt;c");
        assert_eq!(escape_input(r"\frac{1}{2}"), r"\frac{1}{2}");
    }

    #[test]
    fn strips_namespace() {
        let markup = r#"<math xmlns="http://www.w3.org/1998/Math/MathML" display="block"><mi>x</mi></math>"#;
        assert_eq!(
            strip_namespace(markup),
            r#"<math display="block"><mi>x</mi></math>"#
        );
    }

    #[test]
    fn adds_missing_namespace() {
        assert_eq!(
            ensure_namespace("<math><mi>x</mi></math>"),
            r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mi>x</mi></math>"#
        );
        assert_eq!(
            ensure_namespace(r#"<math display="block"><mi>x</mi></math>"#),
            r#"<math xmlns="http://www.w3.org/1998/Math/MathML" display="block"><mi>x</mi></math>"#
        );
    }

    #[test]
    fn keeps_existing_namespace() {
        let markup = r#"<math xmlns="http://www.w3.org/1998/Math/MathML"><mi>x</mi></math>"#;
        assert_eq!(ensure_namespace(markup), markup);
    }

    #[test]
    fn ignores_other_elements() {
        assert_eq!(ensure_namespace("<mathvariant>"), "<mathvariant>");
    }
}
