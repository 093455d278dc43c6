//! End-to-end stylesheet rewrites through the public API.

use horizon_cascade::{Error, expand_stylesheet, prepare_value_at_rules};
use horizon_cascade_tree::{NodeId, NodeKind, StyleSheet};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn expanded(css: &str) -> StyleSheet {
    init_tracing();
    let mut sheet = StyleSheet::parse(css).unwrap();
    expand_stylesheet(&mut sheet).unwrap();
    sheet
}

fn top_level(sheet: &StyleSheet) -> Vec<NodeId> {
    sheet.children(sheet.root()).unwrap().to_vec()
}

/// The single declaration of the rule inside an `@media` block.
fn media_declaration(sheet: &StyleSheet, media: NodeId) -> (String, String) {
    let inner = sheet.children(media).unwrap()[0];
    let decl = sheet.children(inner).unwrap()[0];
    let (property, value) = sheet.declaration(decl).unwrap();
    (property.to_string(), value.to_string())
}

#[test]
fn else_only_value_is_resolved_in_place() {
    let sheet = expanded(r#".root { padding: media-value(else: "50px") }"#);

    let nodes = top_level(&sheet);
    assert_eq!(nodes.len(), 1);
    let decls = sheet.children(nodes[0]).unwrap();
    assert_eq!(decls.len(), 1);
    assert_eq!(sheet.declaration(decls[0]).unwrap(), ("padding", "50px"));
}

#[test]
fn else_only_value_as_infix() {
    let sheet = expanded(r#".root { padding: 50px media-value(else: "50px") 50px }"#);

    let rule = top_level(&sheet)[0];
    let decl = sheet.children(rule).unwrap()[0];
    assert_eq!(
        sheet.declaration(decl).unwrap(),
        ("padding", "50px 50px 50px")
    );
}

#[test]
fn case_without_else_moves_into_media_block() {
    let sheet = expanded(r#".root { padding: media-value(case: "a" as: "50px") }"#);

    let nodes = top_level(&sheet);
    assert_eq!(nodes.len(), 2);

    // The original rule keeps no declaration.
    assert!(sheet.children(nodes[0]).unwrap().is_empty());

    assert_eq!(
        sheet.kind(nodes[1]).unwrap(),
        &NodeKind::AtRule {
            name: "media".into(),
            params: "a".into(),
            has_block: true,
        }
    );
    let inner = sheet.children(nodes[1]).unwrap()[0];
    assert_eq!(
        sheet.kind(inner).unwrap(),
        &NodeKind::Rule { selector: ".root".into() }
    );
    assert_eq!(
        media_declaration(&sheet, nodes[1]),
        ("padding".to_string(), "50px".to_string())
    );
}

#[test]
fn branching_keeps_default_in_rule() {
    let sheet = expanded(
        ".root {\n  padding: media-value(\n    case: \"a\" as: \"25px\",\n    else: \"50px\",\n  )\n}",
    );

    let nodes = top_level(&sheet);
    assert_eq!(nodes.len(), 2);

    let decl = sheet.children(nodes[0]).unwrap()[0];
    assert_eq!(sheet.declaration(decl).unwrap(), ("padding", "50px"));
    assert_eq!(
        media_declaration(&sheet, nodes[1]),
        ("padding".to_string(), "25px".to_string())
    );
}

#[test]
fn branching_as_infix() {
    let sheet = expanded(
        ".root {\n  padding: 0 media-value(\n    case: \"a\" as: \"25px\",\n    else: \"50px\",\n  ) 1em;\n}",
    );

    let nodes = top_level(&sheet);
    let decl = sheet.children(nodes[0]).unwrap()[0];
    assert_eq!(sheet.declaration(decl).unwrap(), ("padding", "0 50px 1em"));
    assert_eq!(
        media_declaration(&sheet, nodes[1]),
        ("padding".to_string(), "0 25px 1em".to_string())
    );
}

#[test]
fn shared_queries_combine_positionally() {
    let css = ".root {\n  padding: media-value(\n      case: \"a\" as: \"25px\",\n      case: \"b\" as: \"50px\",\n    ) media-value(\n      case: \"a\" as: \"15px\",\n      case: \"b\" as: \"30px\",\n    );\n}";
    let sheet = expanded(css);

    let nodes = top_level(&sheet);
    assert_eq!(nodes.len(), 3);
    assert!(sheet.children(nodes[0]).unwrap().is_empty());

    // Media blocks appear in first-declared order.
    assert_eq!(
        sheet.kind(nodes[1]).unwrap(),
        &NodeKind::AtRule {
            name: "media".into(),
            params: "a".into(),
            has_block: true,
        }
    );
    assert_eq!(
        media_declaration(&sheet, nodes[1]),
        ("padding".to_string(), "25px 15px".to_string())
    );
    assert_eq!(
        media_declaration(&sheet, nodes[2]),
        ("padding".to_string(), "50px 30px".to_string())
    );
}

#[test]
fn declarations_sharing_a_query_share_a_block() {
    let css = ".root {\n  padding: media-value(case: \"a\" as: \"1px\");\n  margin: media-value(case: \"a\" as: \"2px\");\n}";
    let sheet = expanded(css);

    let nodes = top_level(&sheet);
    assert_eq!(nodes.len(), 2);

    let inner = sheet.children(nodes[1]).unwrap()[0];
    let decls = sheet.children(inner).unwrap();
    assert_eq!(decls.len(), 2);

    // Source order survives the reverse-order replay.
    assert_eq!(sheet.declaration(decls[0]).unwrap(), ("padding", "1px"));
    assert_eq!(sheet.declaration(decls[1]).unwrap(), ("margin", "2px"));
}

#[test]
fn plain_declarations_are_untouched() {
    let css = ".root { color: red; padding: 1px 2px; }";
    let sheet = expanded(css);
    assert_eq!(sheet.to_css(), ".root {\n  color: red;\n  padding: 1px 2px;\n}\n");
}

#[test]
fn rules_after_the_expanded_one_are_unaffected() {
    let css = ".a { padding: media-value(case: \"q\" as: \"1px\", else: \"2px\"); }\n.b { color: red; }";
    let sheet = expanded(css);

    assert_eq!(
        sheet.to_css(),
        ".a {\n  padding: 2px;\n}\n\n@media q {\n  .a {\n    padding: 1px;\n  }\n}\n\n.b {\n  color: red;\n}\n"
    );
}

#[test]
fn full_rewrite_output() {
    let css = ".root { padding: media-value(case: \"(max-width: 599px)\" as: \"25px\", else: \"50px\"); }";
    let sheet = expanded(css);

    assert_eq!(
        sheet.to_css(),
        ".root {\n  padding: 50px;\n}\n\n@media (max-width: 599px) {\n  .root {\n    padding: 25px;\n  }\n}\n"
    );
}

#[test]
fn syntax_error_names_the_declaration() {
    init_tracing();
    let mut sheet =
        StyleSheet::parse(r#".root { padding: media-value(case "a" as: "1px") }"#).unwrap();
    let err = expand_stylesheet(&mut sheet).unwrap_err();
    match err {
        Error::InDeclaration { property, source } => {
            assert_eq!(property, "padding");
            assert!(matches!(*source, Error::Syntax { .. }));
        }
        other => panic!("expected a declaration-scoped error, got {other:?}"),
    }
}

#[test]
fn non_exhaustive_queries_abort_the_run() {
    init_tracing();
    let mut sheet = StyleSheet::parse(
        r#".root { padding: media-value(case: "a" as: "1px") media-value(case: "b" as: "2px") }"#,
    )
    .unwrap();
    let err = expand_stylesheet(&mut sheet).unwrap_err();
    match err {
        Error::InDeclaration { source, .. } => {
            assert!(matches!(*source, Error::NonExhaustive { .. }));
        }
        other => panic!("expected a declaration-scoped error, got {other:?}"),
    }
}

#[test]
fn responsive_value_outside_a_rule_is_rejected() {
    init_tracing();
    let mut sheet = StyleSheet::parse(
        r#"@media print { .a { color: red; } }"#,
    )
    .unwrap();

    // Hand-build a declaration directly inside the at-rule block.
    let media = sheet.at_rules("media")[0];
    sheet
        .prepend(media, NodeKind::Declaration {
            property: "padding".into(),
            value: r#"media-value(case: "a" as: "1px")"#.into(),
        })
        .unwrap();

    let err = expand_stylesheet(&mut sheet).unwrap_err();
    match err {
        Error::InDeclaration { source, .. } => {
            assert!(matches!(*source, Error::Validation { .. }));
        }
        other => panic!("expected a declaration-scoped error, got {other:?}"),
    }
}

#[test]
fn value_at_rule_prep_then_expansion() {
    init_tracing();
    let css = "@value pad: 16px;\n.root { padding: media-value(else: \"50px\"); }";
    let mut sheet = StyleSheet::parse(css).unwrap();
    prepare_value_at_rules(&mut sheet);
    expand_stylesheet(&mut sheet).unwrap();

    assert_eq!(
        sheet.to_css(),
        "@value pad: 16px;\n\n.root {\n  padding: 50px;\n}\n"
    );
}
