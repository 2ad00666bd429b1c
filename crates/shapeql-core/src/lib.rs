//! Translate between Rust data shapes and GraphQL.
//!
//! A [`Shape`] describes a GraphQL selection set. [`Query`] compiles a root
//! shape into query text, and [`bind()`] populates a shape from the JSON
//! response to that query.

pub mod bind;
pub mod compile;
mod connection;
mod embedded_json;
mod global_id;
pub mod naming;
mod query;
mod shape;
mod writer;

pub use bind::bind;
pub use bind::bind_str;
pub use bind::BindError;
pub use connection::Connection;
pub use connection::Edge;
pub use connection::PageInfo;
pub use embedded_json::EmbeddedJson;
pub use global_id::decode_global_id;
pub use global_id::GlobalId;
pub use global_id::GlobalIdError;
pub use query::CompileError;
pub use query::Query;
pub use query::QueryVariable;
pub use shape::render_leaf;
pub use shape::FieldDescriptor;
pub use shape::Fields;
pub use shape::RenderAsField;
pub use shape::RenderError;
pub use shape::RenderFn;
pub use shape::Shape;
pub use shape::TypeDescriptor;
pub use writer::QueryWriter;
pub use writer::WriterCheckpoint;

#[doc(hidden)]
pub use serde_json;

#[cfg(test)]
mod tests;
