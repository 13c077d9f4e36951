use super::*;

#[test]
fn test_convert() {
    let mathml = convert("x").unwrap();
    assert!(mathml.contains("<math"));
    assert!(mathml.contains("<mi>x</mi>"));
}

#[test]
fn test_display_mode() {
    let opts = Opts::builder().display_mode(true).build().unwrap();
    let mathml = convert_with_opts("x", opts).unwrap();
    assert!(mathml.contains(r#"display="block""#));
}

#[test]
fn test_namespace_stripped_by_default() {
    let mathml = convert(r"\frac{1}{2}").unwrap();
    assert!(!mathml.contains(sanitize::MATHML_NAMESPACE));
}

#[test]
fn test_xml_namespace() {
    let opts = Opts::builder().xml(true).build().unwrap();
    let mathml = convert_with_opts(r"\frac{1}{2}", opts).unwrap();
    assert!(mathml.contains(r#"xmlns="http://www.w3.org/1998/Math/MathML""#));
}

#[test]
fn test_conversion_error() {
    let opts = Opts::builder().throw_on_error(true).build().unwrap();
    let err = convert_with_opts("a^b^c", opts).unwrap_err();
    assert!(matches!(err, Error::Conversion(_)), "{err:?}");
}

#[test]
fn test_error_rendered_inline() {
    let opts = Opts::builder().throw_on_error(false).build().unwrap();
    let mathml = convert_with_opts("a^b^c", opts).unwrap();
    assert!(!mathml.is_empty());
}

#[test]
fn test_invalid_input_converts_by_default() {
    let mathml = convert("a^b^c").unwrap();
    assert!(mathml.contains("<math"));
}

#[test]
fn test_builtin_converter() {
    let mathml = BuiltinConverter.convert("y", &Opts::default()).unwrap();
    assert!(mathml.contains("<mi>y</mi>"));
}

#[test]
fn test_pretty_converted_markup() {
    let mathml = convert(r"\frac{a}{b}").unwrap();
    let formatted = pretty(&mathml);
    assert!(formatted.lines().count() > 1);
    assert!(formatted.lines().any(|line| line.starts_with("  ")));
    assert_eq!(flatten(&formatted), flatten(&mathml));
}

#[test]
fn test_flatten_converted_markup() {
    let mathml = convert(r"\sqrt{x} + 1").unwrap();
    let flat = flatten(&pretty(&mathml));
    assert!(!flat.contains('\n'));
    assert_eq!(flat, flatten(&mathml));
}
