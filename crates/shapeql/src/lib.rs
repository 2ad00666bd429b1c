pub use shapeql_core::*;

#[cfg(feature = "macros")]
pub use shapeql_macros::Shape;

/// Derive macros for describing GraphQL shapes at Rust compile-time (e.g.
/// `#[derive(Shape)]` to turn a struct into a [`Shape`](crate::Shape)).
#[cfg(feature = "macros")]
pub mod macros {
    pub use shapeql_macros::*;
}

// Lets `#[derive(Shape)]` output (which names `::shapeql`) resolve in this
// crate's own tests.
#[cfg(test)]
extern crate self as shapeql;
