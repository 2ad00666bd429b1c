use crate::BindError;
use crate::QueryWriter;
use crate::bind::json_kind;
use crate::naming;
use serde_json::Map;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use thiserror::Error;

/// Signature of a custom field renderer. Receives the field's label (name
/// plus any argument annotation).
pub type RenderFn = fn(&mut QueryWriter, &str) -> Result<(), RenderError>;

/// A type that can be described as a GraphQL selection and populated from a
/// GraphQL JSON response.
///
/// Implementations for structs are normally generated by
/// `#[derive(shapeql::Shape)]`.
pub trait Shape {
    /// Describes how a field of this type is rendered in query text.
    fn type_descriptor() -> TypeDescriptor;

    /// The member fields of an object-like shape, in declaration order.
    fn field_descriptors() -> Vec<FieldDescriptor> {
        Vec::new()
    }

    /// Decode `value` (the raw JSON found under this field's key) into
    /// `self`.
    fn bind_value(&mut self, value: &Value) -> Result<(), BindError>;

    /// Populate each member field of `self` from `members`, skipping members
    /// whose key is absent.
    fn bind_members(
        &mut self,
        _members: &Map<String, Value>,
    ) -> Result<(), BindError> {
        Err(BindError::NoMembers {
            type_name: std::any::type_name::<Self>(),
        })
    }
}

/// Implemented by shapes that render themselves instead of following the
/// structural rules. Select it with `#[graphql(custom_render)]`.
pub trait RenderAsField {
    fn render_as_field(
        writer: &mut QueryWriter,
        label: &str,
    ) -> Result<(), RenderError>;
}

/// Renders a field as a bare leaf name regardless of its members.
pub fn render_leaf(
    writer: &mut QueryWriter,
    label: &str,
) -> Result<(), RenderError> {
    writer.write_line(&[label]);
    Ok(())
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("failed to render field `{field}`: {message}")]
pub struct RenderError {
    pub field: String,
    pub message: String,
}
impl RenderError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// How a field of some type is turned into selection text.
#[derive(Clone, Debug)]
pub enum TypeDescriptor {
    /// Members are selected directly inside the enclosing field's scope.
    Connection(Fields),
    Custom(RenderFn),
    /// Renders exactly like its element type.
    List(Box<TypeDescriptor>),
    Object(Fields),
    Scalar,
}
impl TypeDescriptor {
    pub fn connection(fields: Vec<FieldDescriptor>) -> Self {
        Self::Connection(Fields::Owned(fields.into()))
    }

    pub fn list(element: TypeDescriptor) -> Self {
        Self::List(Box::new(element))
    }

    pub fn object(fields: Vec<FieldDescriptor>) -> Self {
        Self::Object(Fields::Owned(fields.into()))
    }

    /// Short name of this descriptor's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Connection(_) => "connection",
            Self::Custom(_) => "custom",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Scalar => "scalar",
        }
    }

    /// The member fields of an object or connection descriptor.
    pub fn fields(&self) -> Option<Cow<'_, [FieldDescriptor]>> {
        match self {
            Self::Connection(fields) | Self::Object(fields) => {
                Some(fields.resolve())
            },
            _ => None,
        }
    }
}

/// Member list of an object-like [`TypeDescriptor`].
///
/// `Static` lists are produced on demand so that a shape may refer to itself
/// (through a list, `Option` or `Box`) without building an infinite
/// descriptor tree.
#[derive(Clone, Debug)]
pub enum Fields {
    Owned(Arc<[FieldDescriptor]>),
    Static(fn() -> Vec<FieldDescriptor>),
}
impl Fields {
    pub fn resolve(&self) -> Cow<'_, [FieldDescriptor]> {
        match self {
            Self::Owned(fields) => Cow::Borrowed(&fields[..]),
            Self::Static(fields_fn) => Cow::Owned(fields_fn()),
        }
    }
}

/// One member of a shape: its GraphQL name, optional argument annotation and
/// type.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    arguments: Option<String>,
    name: String,
    type_descriptor: TypeDescriptor,
}
impl FieldDescriptor {
    /// `declared` is normalized with [`naming::field_name()`].
    pub fn new(declared: &str, type_descriptor: TypeDescriptor) -> Self {
        Self {
            arguments: None,
            name: naming::field_name(declared),
            type_descriptor,
        }
    }

    pub fn arguments(&self) -> Option<&str> {
        self.arguments.as_deref()
    }

    /// Name plus `(<arguments>)` when an argument annotation is present.
    pub fn label(&self) -> String {
        match &self.arguments {
            Some(arguments) => format!("{}({arguments})", self.name),
            None => self.name.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.type_descriptor
    }

    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }
}

macro_rules! impl_scalar_shape {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Shape for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::Scalar
                }

                fn bind_value(&mut self, value: &Value) -> Result<(), BindError> {
                    if !value.is_null() {
                        *self = <$ty as serde::Deserialize>::deserialize(value)?;
                    }
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_shape!(
    bool, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, String, Value,
);

impl<T: Shape + Default> Shape for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::list(T::type_descriptor())
    }

    fn bind_value(&mut self, value: &Value) -> Result<(), BindError> {
        let items = match value {
            Value::Null => return Ok(()),
            Value::Array(items) => items,
            other => return Err(BindError::UnexpectedJson {
                expected: "array",
                found: json_kind(other),
            }),
        };

        let mut bound = Vec::with_capacity(items.len());
        for item in items {
            let mut element = T::default();
            element.bind_value(item)?;
            bound.push(element);
        }
        *self = bound;
        Ok(())
    }
}

impl<T: Shape + Default> Shape for Option<T> {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }

    fn field_descriptors() -> Vec<FieldDescriptor> {
        T::field_descriptors()
    }

    fn bind_value(&mut self, value: &Value) -> Result<(), BindError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        self.get_or_insert_with(T::default).bind_value(value)
    }

    fn bind_members(
        &mut self,
        members: &Map<String, Value>,
    ) -> Result<(), BindError> {
        self.get_or_insert_with(T::default).bind_members(members)
    }
}

impl<T: Shape> Shape for Box<T> {
    fn type_descriptor() -> TypeDescriptor {
        T::type_descriptor()
    }

    fn field_descriptors() -> Vec<FieldDescriptor> {
        T::field_descriptors()
    }

    fn bind_value(&mut self, value: &Value) -> Result<(), BindError> {
        self.as_mut().bind_value(value)
    }

    fn bind_members(
        &mut self,
        members: &Map<String, Value>,
    ) -> Result<(), BindError> {
        self.as_mut().bind_members(members)
    }
}
