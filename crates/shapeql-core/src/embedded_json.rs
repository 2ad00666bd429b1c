use crate::BindError;
use crate::Shape;
use crate::TypeDescriptor;
use crate::bind::json_kind;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A scalar field whose response value is a JSON string that itself holds a
/// JSON document, e.g. `"{\"theme\":\"dark\"}"`. Binding decodes the inner
/// document into `T`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmbeddedJson<T>(pub T);
impl<T> EmbeddedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
impl<T> std::ops::Deref for EmbeddedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}
impl<T: DeserializeOwned> Shape for EmbeddedJson<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Scalar
    }

    fn bind_value(&mut self, value: &Value) -> Result<(), BindError> {
        match value {
            Value::Null => Ok(()),
            Value::String(document) => {
                self.0 = serde_json::from_str(document)?;
                Ok(())
            },
            other => Err(BindError::UnexpectedJson {
                expected: "string",
                found: json_kind(other),
            }),
        }
    }
}
