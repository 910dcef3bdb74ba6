use rstest::rstest;
use xmlnodes::{ParseError, XmlNodes};

fn parse_error(xml: &str) -> ParseError {
    let mut nodes = XmlNodes::new();
    let err = nodes.parse(xml).unwrap_err();
    err.parse_error().cloned().unwrap()
}

#[test]
fn test_mismatched_close_tag() {
    let xml = r#"<a><b></c></a>"#;
    let err = parse_error(xml);
    assert!(matches!(err, ParseError::MismatchedCloseTag { .. }));
    assert_eq!(err.position(), Some(6));
}

#[test]
fn test_unclosed_tag() {
    let xml = r#"<a>text</a"#;
    let err = parse_error(xml);
    assert_eq!(err, ParseError::UnclosedTag { position: 7 });
}

#[test]
fn test_unclosed_element() {
    let xml = r#"<a><b>1</b>"#;
    let err = parse_error(xml);
    assert!(matches!(err, ParseError::UnclosedElement { ref name } if name == "a"));
}

#[test]
fn test_self_closing_is_not_supported() {
    // `<a/>` opens an element named `a/` that is never closed
    let err = parse_error("<a/>");
    assert!(matches!(err, ParseError::UnclosedElement { .. }));
}

#[rstest]
#[case("<a><b></c></a>")]
#[case("</a>")]
#[case("<a></b>")]
#[case("<a>")]
#[case("<a")]
#[case("<a><b></a></b>")]
fn test_from_string_malformed_leaves_empty_tree(#[case] xml: &str) {
    let mut nodes = XmlNodes::new();
    let root = nodes.new_root();
    nodes.add_child(root, "existing").unwrap();
    assert!(nodes.from_string(root, xml).is_err());
    assert_eq!(nodes.children_count(root), 0);
    assert_eq!(nodes.value(root), "");
}

#[test]
fn test_display() {
    let mut nodes = XmlNodes::new();
    let err = nodes.parse("<a></b>").unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse error: closing tag </b> at 3 does not match open element <a>"
    );
    assert_eq!(
        err.parse_error().unwrap().to_string(),
        "closing tag </b> at 3 does not match open element <a>"
    );
}

#[test]
fn test_error_wraps_parse_error() {
    let err: xmlnodes::Error = ParseError::UnclosedTag { position: 0 }.into();
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::UnclosedTag { position: 0 })
    );
}

#[test]
fn test_empty_names_round_trip() {
    let mut nodes = XmlNodes::new();
    let root = nodes.parse("<list><></><>x</></list>").unwrap();
    let list = nodes.first_child(root).unwrap();
    assert_eq!(nodes.children_count(list), 2);
    let serialized = nodes.to_string(list);
    let root = nodes.parse(&serialized).unwrap();
    assert_eq!(nodes.to_string(nodes.first_child(root).unwrap()), serialized);
}
