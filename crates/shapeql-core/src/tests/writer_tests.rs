use crate::QueryWriter;

#[test]
fn write_line_joins_tokens_with_single_space() {
    let mut writer = QueryWriter::new();
    writer.write_line(&["human(id: 1)", "{"]);
    assert_eq!(writer.as_str(), "human(id: 1) {\n");
}

#[test]
fn scope_with_empty_label_writes_bare_brace() {
    let mut writer = QueryWriter::new();
    writer.scope("", |writer| writer.write_line(&["name"]));
    assert_eq!(writer.as_str(), "{\n  name\n}\n");
}

#[test]
fn nested_scopes_indent_two_spaces_per_level() {
    let mut writer = QueryWriter::new();
    writer.scope("query Q", |writer| {
        assert_eq!(writer.level(), 1);
        writer.scope("hero", |writer| {
            assert_eq!(writer.level(), 2);
            writer.write_line(&["name"]);
        });
        writer.write_line(&["id"]);
    });

    assert_eq!(writer.level(), 0);
    assert_eq!(writer.into_string(), concat!(
        "query Q {\n",
        "  hero {\n",
        "    name\n",
        "  }\n",
        "  id\n",
        "}\n",
    ));
}

#[test]
fn rollback_discards_text_and_restores_level() {
    let mut writer = QueryWriter::new();
    writer.write_line(&["kept"]);
    let checkpoint = writer.checkpoint();
    writer.write_line(&["dropped"]);
    writer.rollback(checkpoint);

    assert_eq!(writer.as_str(), "kept\n");
    assert_eq!(writer.level(), 0);
    assert_eq!(writer.as_bytes(), b"kept\n");
}
