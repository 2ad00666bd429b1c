use crate::BindError;
use crate::Shape;
use crate::TypeDescriptor;
use crate::bind::json_kind;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use std::num::ParseIntError;
use std::string::FromUtf8Error;
use thiserror::Error;

type Result<T> = std::result::Result<T, GlobalIdError>;

/// Decode an opaque global ID of the form `base64("<typename>:<id>")` into
/// its numeric id.
///
/// ```
/// // base64("Human:1000")
/// assert_eq!(shapeql_core::decode_global_id("SHVtYW46MTAwMA==").unwrap(), 1000);
/// ```
pub fn decode_global_id(token: &str) -> Result<i64> {
    let decoded = String::from_utf8(STANDARD.decode(token)?)?;

    let segments: Vec<&str> = decoded.split(':').collect();
    let [_type_name, id] = segments.as_slice() else {
        return Err(GlobalIdError::UnexpectedSegments {
            segment_count: segments.len(),
            payload: decoded.to_owned(),
        });
    };

    id.parse::<i64>().map_err(|err| GlobalIdError::InvalidNumericId {
        payload: decoded.to_owned(),
        source: err,
    })
}

/// A numeric identifier bound from a server-issued opaque global ID.
///
/// Selected as a scalar; the response value must be a JSON string accepted
/// by [`decode_global_id()`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GlobalId(pub i64);
impl GlobalId {
    pub fn decode(token: &str) -> Result<Self> {
        decode_global_id(token).map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
impl Shape for GlobalId {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Scalar
    }

    fn bind_value(&mut self, value: &Value) -> std::result::Result<(), BindError> {
        match value {
            Value::Null => Ok(()),
            Value::String(token) => {
                *self = Self::decode(token)?;
                Ok(())
            },
            other => Err(GlobalIdError::ExpectedString {
                found: json_kind(other),
            }.into()),
        }
    }
}
impl std::fmt::Display for GlobalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<GlobalId> for i64 {
    fn from(id: GlobalId) -> Self {
        id.0
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GlobalIdError {
    #[error("global id is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("expected global id to be a string, found {found}")]
    ExpectedString {
        found: &'static str,
    },

    #[error("invalid id in `{payload}`: {source}")]
    InvalidNumericId {
        payload: String,
        source: ParseIntError,
    },

    #[error("decoded global id is not UTF-8: {0}")]
    NotUtf8(#[from] FromUtf8Error),

    #[error(
        "unexpected decoded id `{payload}`: expected 2 `:`-separated \
        segments, found {segment_count}"
    )]
    UnexpectedSegments {
        payload: String,
        segment_count: usize,
    },
}
