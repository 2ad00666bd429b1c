//! JSON documents describing a query's shape at runtime.
//!
//! ```json
//! {
//!   "name": "HeroNameAndFriends",
//!   "variables": { "episode": "Episode" },
//!   "fields": {
//!     "Hero": {
//!       "args": "episode: $episode",
//!       "fields": {
//!         "Name": null,
//!         "Friends": { "list": true, "fields": { "Name": null } }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! A `null` field is a scalar. Object keys are declared identifiers and go
//! through the usual name normalization.

use anyhow::Context;
use indexmap::IndexMap;
use shapeql::FieldDescriptor;
use shapeql::Query;
use shapeql::TypeDescriptor;
use std::path::Path;

type FieldSpecMap = IndexMap<String, Option<FieldSpec>>;

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ShapeFile {
    pub fields: FieldSpecMap,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub variables: IndexMap<String, String>,
}
impl ShapeFile {
    pub fn from_str(source: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {path:?}"))?;
        Self::from_str(&source)
            .with_context(|| format!("failed to parse shape file {path:?}"))
    }

    pub fn to_query(&self) -> anyhow::Result<Query> {
        let root = TypeDescriptor::object(field_descriptors(&self.fields)?);
        let query =
            self.variables
                .iter()
                .fold(Query::from_descriptor(&self.name, root), |query, (name, type_name)| {
                    query.define_variable(name, type_name)
                });
        Ok(query)
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FieldSpec {
    #[serde(default)]
    pub args: Option<String>,
    #[serde(default)]
    pub connection: bool,
    #[serde(default)]
    pub fields: Option<FieldSpecMap>,
    #[serde(default)]
    pub leaf: bool,
    #[serde(default)]
    pub list: bool,
}
impl FieldSpec {
    fn type_descriptor(&self, declared: &str) -> anyhow::Result<TypeDescriptor> {
        let element = match (&self.fields, self.leaf, self.connection) {
            (_, true, true) => anyhow::bail!(
                "field `{declared}` cannot be both `leaf` and `connection`"
            ),
            (_, true, false) => TypeDescriptor::Custom(shapeql::render_leaf),
            (Some(fields), false, true) => {
                TypeDescriptor::connection(field_descriptors(fields)?)
            },
            (Some(fields), false, false) => {
                TypeDescriptor::object(field_descriptors(fields)?)
            },
            (None, false, true) => anyhow::bail!(
                "connection field `{declared}` must declare its `fields`"
            ),
            (None, false, false) => TypeDescriptor::Scalar,
        };

        Ok(if self.list {
            TypeDescriptor::list(element)
        } else {
            element
        })
    }
}

fn field_descriptors(fields: &FieldSpecMap) -> anyhow::Result<Vec<FieldDescriptor>> {
    fields.iter().map(|(declared, spec)| {
        let spec = spec.as_ref();
        let type_descriptor = match spec {
            Some(spec) => spec.type_descriptor(declared)?,
            None => TypeDescriptor::Scalar,
        };
        let field = FieldDescriptor::new(declared, type_descriptor);
        Ok(match spec.and_then(|spec| spec.args.as_deref()) {
            Some(args) => field.with_arguments(args),
            None => field,
        })
    }).collect()
}

#[cfg(test)]
mod tests {
    use super::ShapeFile;

    #[test]
    fn compiles_named_query_with_variables() {
        let shape = ShapeFile::from_str(r#"{
            "name": "HeroNameAndFriends",
            "variables": { "episode": "Episode" },
            "fields": {
                "Hero": {
                    "args": "episode: $episode",
                    "fields": {
                        "Name": null,
                        "Friends": { "list": true, "fields": { "Name": null } }
                    }
                }
            }
        }"#).unwrap();

        let text = shape.to_query().unwrap().compile().unwrap();
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
    fn connection_and_leaf_fields() {
        let shape = ShapeFile::from_str(r#"{
            "fields": {
                "FriendsConnection": {
                    "args": "first: 2",
                    "fields": {
                        "Edges": { "list": true, "fields": { "Cursor": null } },
                        "Connection": {
                            "connection": true,
                            "fields": { "TotalCount": null }
                        },
                        "Avatar": { "leaf": true, "fields": { "URL": null } }
                    }
                }
            }
        }"#).unwrap();

        let text = shape.to_query().unwrap().compile().unwrap();
        assert_eq!(text, concat!(
            "{\n",
            "  friendsConnection(first: 2) {\n",
            "    edges {\n",
            "      cursor\n",
            "    }\n",
            "    totalCount\n",
            "    avatar\n",
            "  }\n",
            "}\n",
        ));
    }

    #[test]
    fn invalid_field_specs_are_rejected() {
        let shape = ShapeFile::from_str(r#"{
            "fields": { "Page": { "connection": true } }
        }"#).unwrap();
        let err = shape.to_query().unwrap_err();
        assert!(err.to_string().contains("must declare its `fields`"));

        let shape = ShapeFile::from_str(r#"{
            "fields": { "Page": { "connection": true, "leaf": true } }
        }"#).unwrap();
        assert!(shape.to_query().is_err());

        assert!(ShapeFile::from_str(r#"{ "fields": {}, "extra": 1 }"#).is_err());
    }

    #[test]
    fn empty_root_fails_to_compile() {
        let shape = ShapeFile::from_str(r#"{ "fields": {} }"#).unwrap();
        let err = shape.to_query().unwrap().compile().unwrap_err();
        assert_eq!(err.to_string(), "query object must be a non-empty struct");
    }
}
