//! Parse/serialize round trips over realistic stylesheet inputs.

use std::io::Write;

use horizon_cascade_tree::{NodeKind, StyleSheet};

#[test]
fn nested_structure_roundtrip() {
    let css = r#"
        .card {
          color: red;
          border: 1px solid black;
        }

        @media (max-width: 599px) {
          .card {
            color: blue;
          }
        }

        @value gutter: 16px;
    "#;
    let sheet = StyleSheet::parse(css).unwrap();

    let expected = "\
.card {
  color: red;
  border: 1px solid black;
}

@media (max-width: 599px) {
  .card {
    color: blue;
  }
}

@value gutter: 16px;
";
    assert_eq!(sheet.to_css(), expected);

    // Serialized output parses back to the same shape.
    let reparsed = StyleSheet::parse(&sheet.to_css()).unwrap();
    assert_eq!(reparsed.to_css(), sheet.to_css());
}

#[test]
fn quoted_braces_do_not_break_structure() {
    let css = r#".a { content: "} {"; }"#;
    let sheet = StyleSheet::parse(css).unwrap();
    let rule = sheet.children(sheet.root()).unwrap()[0];
    let decl = sheet.children(rule).unwrap()[0];
    assert_eq!(
        sheet.declaration(decl).unwrap(),
        ("content", "\"} {\"")
    );
}

#[test]
fn from_file_reads_stylesheet() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, ".a {{ color: red; }}").unwrap();

    let sheet = StyleSheet::from_file(file.path()).unwrap();
    assert_eq!(sheet.children(sheet.root()).unwrap().len(), 1);
}

#[test]
fn from_file_missing_path_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.css");
    assert!(matches!(
        StyleSheet::from_file(&missing),
        Err(horizon_cascade_tree::Error::Io { .. })
    ));
}

#[test]
fn mutations_roundtrip_through_serialization() {
    let mut sheet = StyleSheet::parse(".a { color: red; }").unwrap();
    let rule = sheet.children(sheet.root()).unwrap()[0];

    let media = sheet
        .insert_after(
            rule,
            NodeKind::AtRule {
                name: "media".into(),
                params: "print".into(),
                has_block: true,
            },
        )
        .unwrap();
    let inner = sheet
        .append(media, NodeKind::Rule { selector: ".a".into() })
        .unwrap();
    sheet
        .prepend(
            inner,
            NodeKind::Declaration {
                property: "color".into(),
                value: "black".into(),
            },
        )
        .unwrap();

    assert_eq!(
        sheet.to_css(),
        ".a {\n  color: red;\n}\n\n@media print {\n  .a {\n    color: black;\n  }\n}\n"
    );
}
