//! Populating shapes from GraphQL JSON responses.

use crate::GlobalIdError;
use crate::Shape;
use crate::TypeDescriptor;
use crate::naming;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

type Result<T> = std::result::Result<T, BindError>;

/// Bind the `data` object of a GraphQL response onto `target`.
///
/// Fields of `target` without a matching key in the response are left as
/// they are. The first field that fails to decode aborts binding; fields
/// bound before it keep their new values.
///
/// The payload must be a JSON object; a missing or `null` `data` member
/// binds nothing.
pub fn bind<T: Shape>(payload: &[u8], target: &mut T) -> Result<()> {
    let envelope: Map<String, Value> = serde_json::from_slice(payload)?;
    match envelope.get("data") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Object(data)) => target.bind_members(data),
        Some(other) => Err(BindError::UnexpectedJson {
            expected: "object",
            found: json_kind(other),
        }),
    }
}

/// [`bind()`] for a response held as a string.
pub fn bind_str<T: Shape>(payload: &str, target: &mut T) -> Result<()> {
    bind(payload.as_bytes(), target)
}

/// Bind the member declared as `declared` from the response object
/// `members` into `slot`.
///
/// Connection-typed members take their own members from `members` itself
/// rather than from a nested object, and are left untouched when none of
/// their members is present.
pub fn bind_member<T: Shape>(
    slot: &mut T,
    declared: &str,
    members: &Map<String, Value>,
) -> Result<()> {
    if let TypeDescriptor::Connection(fields) = T::type_descriptor() {
        let present =
            fields.resolve()
                .iter()
                .any(|field| members.contains_key(field.name()));
        return if present {
            slot.bind_members(members)
        } else {
            Ok(())
        };
    }
    match members.get(&naming::field_name(declared)) {
        Some(value) => slot.bind_value(value),
        None => Ok(()),
    }
}

/// [`Shape::bind_value()`] for object-like shapes: binds the members of a
/// JSON object and ignores `null`.
pub fn bind_object<T: Shape>(target: &mut T, value: &Value) -> Result<()> {
    match value {
        Value::Null => Ok(()),
        Value::Object(members) => target.bind_members(members),
        other => Err(BindError::UnexpectedJson {
            expected: "object",
            found: json_kind(other),
        }),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Array(_) => "array",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
        Value::Number(_) => "number",
        Value::Object(_) => "object",
        Value::String(_) => "string",
    }
}

#[derive(Debug, Error)]
pub enum BindError {
    #[error("invalid global id: {0}")]
    GlobalId(#[from] GlobalIdError),

    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{type_name}` has no members to bind")]
    NoMembers {
        type_name: &'static str,
    },

    #[error("expected a JSON {expected}, found {found}")]
    UnexpectedJson {
        expected: &'static str,
        found: &'static str,
    },
}
