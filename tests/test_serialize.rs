use xmlnodes::{Output, Parameters, XmlNodes};

#[test]
fn test_serialize_node() {
    let mut nodes = XmlNodes::new();
    let root = nodes.parse("<doc><a><b>x</b></a></doc>").unwrap();
    let doc = nodes.first_child(root).unwrap();
    let a = nodes.first_child(doc).unwrap();
    assert_eq!(nodes.to_string(a), "<a>\n\t<b>x</b>\n</a>\n");
}

#[test]
fn test_serialize_document_without_root_tag() {
    let mut nodes = XmlNodes::new();
    let root = nodes.parse("<a>1</a>").unwrap();
    assert_eq!(nodes.document_to_string(root), "<a>1</a>\n");
    assert!(nodes.to_string(root).starts_with("<__ROOT__>"));
}

#[test]
fn test_serialize_with_parameters() {
    let mut nodes = XmlNodes::new();
    let root = nodes.parse("<a><b>1</b></a>").unwrap();
    let parameters = Parameters {
        indentation: "    ".to_string(),
    };
    assert_eq!(
        nodes.document_to_string_with(&parameters, root),
        "<a>\n    <b>1</b>\n</a>\n"
    );
}

#[test]
fn test_write_to_writer() {
    let mut nodes = XmlNodes::new();
    let root = nodes.parse(r#"<a k="v">1</a>"#).unwrap();
    let a = nodes.first_child(root).unwrap();
    let mut buf = Vec::new();
    nodes.print_to(a, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "<a k=\"v\">1</a>\n");
}

#[test]
fn test_outputs_of_leaf() {
    let mut nodes = XmlNodes::new();
    let root = nodes.parse("<a>1</a>").unwrap();
    let a = nodes.first_child(root).unwrap();
    let outputs = nodes.outputs(a).collect::<Vec<_>>();
    assert_eq!(
        outputs,
        vec![
            Output::StartTagOpen { name: "a", depth: 0 },
            Output::StartTagClose {
                has_children: false
            },
            Output::Value("1"),
            Output::EndTag {
                name: "a",
                depth: 0,
                has_children: false
            },
        ]
    );
}
