mod shape_attributes;
mod shape_derive;

#[cfg(test)]
mod tests;

use syn::DeriveInput;
use syn::parse_macro_input;

/// Implements [`Shape`](shapeql::Shape) for a struct with named fields.
///
/// Each Rust field becomes one selection, named after the field: the
/// identifier is split on `_`, each segment is capitalized, `ID`/`URL` are
/// rewritten to `Id`/`Url` and the first letter is lower-cased
/// (`friends_connection` selects `friendsConnection`).
///
/// Field attributes:
///
/// * `#[graphql(args = "...")]` attaches an argument list verbatim.
/// * `#[graphql(rename = "...")]` replaces the Rust identifier as the source
///   of the field's name.
///
/// Struct attributes:
///
/// * `#[graphql(leaf)]` selects fields of this type as a bare name.
/// * `#[graphql(custom_render)]` renders fields of this type through the
///   type's [`RenderAsField`](shapeql::RenderAsField) impl.
///
/// Example usage:
///
/// ```rust
/// use shapeql::Query;
/// use shapeql::Shape;
///
/// #[derive(Default, Shape)]
/// struct HumanQuery {
///     #[graphql(args = r#"id: "1000""#)]
///     human: Human,
/// }
///
/// #[derive(Default, Shape)]
/// struct Human {
///     name: String,
///     #[graphql(args = "unit: FOOT")]
///     height: f32,
/// }
///
/// let text = Query::new::<HumanQuery>("").compile().unwrap();
/// assert_eq!(text, concat!(
///     "{\n",
///     "  human(id: \"1000\") {\n",
///     "    name\n",
///     "    height(unit: FOOT)\n",
///     "  }\n",
///     "}\n",
/// ));
///
/// let mut response = HumanQuery::default();
/// shapeql::bind_str(
///     r#"{"data":{"human":{"name":"Luke Skywalker","height":5.6430448}}}"#,
///     &mut response,
/// ).unwrap();
/// assert_eq!(response.human.name, "Luke Skywalker");
/// ```
#[proc_macro_derive(Shape, attributes(graphql))]
pub fn derive_shape(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    shape_derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
