use crate::Shape;
use crate::QueryWriter;
use crate::TypeDescriptor;
use crate::compile;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, CompileError>;

/// A variable declared in a [`Query`]'s signature, rendered as
/// `$<name>: <type_name>`.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryVariable {
    name: String,
    type_name: String,
}
impl QueryVariable {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl std::fmt::Display for QueryVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}: {}", self.name, self.type_name)
    }
}

/// A named (or anonymous) query over a root shape.
///
/// ```
/// use shapeql_core::FieldDescriptor;
/// use shapeql_core::Query;
/// use shapeql_core::TypeDescriptor;
///
/// let root = TypeDescriptor::object(vec![
///     FieldDescriptor::new("Hero", TypeDescriptor::object(vec![
///         FieldDescriptor::new("Name", TypeDescriptor::Scalar),
///     ])).with_arguments("episode: $episode"),
/// ]);
///
/// let text = Query::from_descriptor("HeroName", root)
///     .define_variable("episode", "Episode")
///     .compile()
///     .unwrap();
///
/// assert_eq!(text, concat!(
///     "query HeroName($episode: Episode) {\n",
///     "  hero(episode: $episode) {\n",
///     "    name\n",
///     "  }\n",
///     "}\n",
/// ));
/// ```
#[derive(Clone, Debug)]
pub struct Query {
    name: String,
    root: TypeDescriptor,
    variables: IndexMap<String, QueryVariable>,
}
impl Query {
    /// A query whose root selection set is the shape `T`. An empty `name`
    /// produces an anonymous query.
    pub fn new<T: Shape>(name: impl Into<String>) -> Self {
        Self::from_descriptor(name, T::type_descriptor())
    }

    pub fn from_descriptor(name: impl Into<String>, root: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            root,
            variables: IndexMap::new(),
        }
    }

    /// Render the full query text.
    pub fn compile(&self) -> Result<String> {
        let fields = match self.root.fields() {
            Some(fields) if !fields.is_empty() => fields,
            _ => return Err(CompileError::InvalidRootShape {
                root_kind: self.root.kind_name(),
            }),
        };

        let mut writer = QueryWriter::new();
        writer.scope(&self.signature(), |writer| {
            compile::compile_members(writer, &fields);
        });
        Ok(writer.into_string())
    }

    /// [`Query::compile()`] as UTF-8 bytes.
    pub fn compile_bytes(&self) -> Result<Vec<u8>> {
        self.compile().map(String::into_bytes)
    }

    /// Declare `$<name>: <type_name>` in the query signature. Declaring the
    /// same name again replaces its type but keeps its position.
    pub fn define_variable(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.variables.insert(name.to_owned(), QueryVariable {
            name,
            type_name: type_name.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn root_descriptor(&self) -> &TypeDescriptor {
        &self.root
    }

    /// `query <name>(<variables>)`, or an empty string for an anonymous
    /// query. Variables cannot be declared on an anonymous query and are
    /// left out of its text.
    pub fn signature(&self) -> String {
        if self.name.is_empty() {
            return String::new();
        }
        if self.variables.is_empty() {
            return format!("query {}", self.name);
        }
        let variables =
            self.variables
                .values()
                .map(QueryVariable::to_string)
                .collect::<Vec<_>>()
                .join(", ");
        format!("query {}({variables})", self.name)
    }

    pub fn variables(&self) -> impl Iterator<Item = &QueryVariable> {
        self.variables.values()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("query object must be a non-empty struct")]
    InvalidRootShape {
        root_kind: &'static str,
    },
}
