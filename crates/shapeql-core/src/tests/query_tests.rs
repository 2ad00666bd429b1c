use crate::CompileError;
use crate::FieldDescriptor;
use crate::GlobalId;
use crate::Query;
use crate::TypeDescriptor;

fn hero_with_friends() -> TypeDescriptor {
    TypeDescriptor::object(vec![
        FieldDescriptor::new("Hero", TypeDescriptor::object(vec![
            FieldDescriptor::new("Name", TypeDescriptor::Scalar),
            FieldDescriptor::new("Friends", TypeDescriptor::list(
                TypeDescriptor::object(vec![
                    FieldDescriptor::new("Name", TypeDescriptor::Scalar),
                ]),
            )),
        ])).with_arguments("episode: $episode"),
    ])
}

#[test]
fn named_query_renders_signature_with_variables() {
    let text = Query::from_descriptor("HeroNameAndFriends", hero_with_friends())
        .define_variable("episode", "Episode")
        .compile()
        .unwrap();

    assert_eq!(text, concat!(
        "query HeroNameAndFriends($episode: Episode) {\n",
        "  hero(episode: $episode) {\n",
        "    name\n",
        "    friends {\n",
        "      name\n",
        "    }\n",
        "  }\n",
        "}\n",
    ));
}

#[test]
fn signature_variants() {
    let anonymous = Query::from_descriptor("", hero_with_friends())
        .define_variable("episode", "Episode");
    assert_eq!(anonymous.signature(), "");

    let no_variables = Query::from_descriptor("HeroName", hero_with_friends());
    assert_eq!(no_variables.signature(), "query HeroName");

    let several = Query::from_descriptor("Q", hero_with_friends())
        .define_variable("episode", "Episode")
        .define_variable("first", "Int!")
        .define_variable("after", "String");
    assert_eq!(
        several.signature(),
        "query Q($episode: Episode, $first: Int!, $after: String)",
    );
}

#[test]
fn redefining_variable_replaces_type_in_place() {
    let query = Query::from_descriptor("Q", hero_with_friends())
        .define_variable("episode", "Episode")
        .define_variable("first", "Int")
        .define_variable("episode", "Episode!");

    let variables: Vec<String> =
        query.variables()
            .map(|variable| variable.to_string())
            .collect();
    assert_eq!(variables, vec!["$episode: Episode!", "$first: Int"]);
}

#[test]
fn compile_bytes_matches_compile() {
    let query = Query::from_descriptor("", hero_with_friends());
    assert_eq!(
        query.compile_bytes().unwrap(),
        query.compile().unwrap().into_bytes(),
    );
}

#[test]
fn output_ends_with_newline() {
    let text = Query::from_descriptor("", hero_with_friends()).compile().unwrap();
    assert!(text.ends_with("}\n"));
    assert!(!text.ends_with("\n\n"));
}

#[test]
fn scalar_root_is_rejected() {
    let err = Query::new::<String>("").compile().unwrap_err();
    assert_eq!(err, CompileError::InvalidRootShape { root_kind: "scalar" });
    assert_eq!(err.to_string(), "query object must be a non-empty struct");

    let err = Query::new::<GlobalId>("Named").compile().unwrap_err();
    assert!(matches!(err, CompileError::InvalidRootShape { .. }));
}

#[test]
fn list_root_is_rejected() {
    let err = Query::new::<Vec<i32>>("").compile().unwrap_err();
    assert_eq!(err, CompileError::InvalidRootShape { root_kind: "list" });
}

#[test]
fn empty_object_root_is_rejected() {
    let err = Query::from_descriptor("", TypeDescriptor::object(vec![]))
        .compile()
        .unwrap_err();
    assert_eq!(err, CompileError::InvalidRootShape { root_kind: "object" });
}

#[test]
fn query_accessors() {
    let query = Query::from_descriptor("HeroName", hero_with_friends())
        .define_variable("episode", "Episode");
    assert_eq!(query.name(), "HeroName");
    assert_eq!(query.root_descriptor().kind_name(), "object");

    let variable = query.variables().next().unwrap();
    assert_eq!(variable.name(), "episode");
    assert_eq!(variable.type_name(), "Episode");
}
