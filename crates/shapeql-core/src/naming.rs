//! Mapping from declared field identifiers to GraphQL field names.
//!
//! The same derivation is used when emitting selections and when looking up
//! response keys, so a field always round-trips under one name.

/// Derive the GraphQL field name for a declared identifier.
///
/// Every `ID` becomes `Id` and every `URL` becomes `Url` (case-sensitive,
/// plain substring replacement), then only the first character is
/// lower-cased:
///
/// ```
/// use shapeql_core::naming::field_name;
///
/// assert_eq!(field_name("HumanID"), "humanId");
/// assert_eq!(field_name("PhotoURL"), "photoUrl");
/// assert_eq!(field_name("FriendsConnection"), "friendsConnection");
/// ```
///
/// The replacement is blind to word boundaries, so an identifier that only
/// happens to contain `ID` or `URL` is rewritten as well.
pub fn field_name(declared: &str) -> String {
    let name = declared.replace("ID", "Id").replace("URL", "Url");
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => name,
    }
}

/// [`field_name()`] followed by `(<arguments>)` when an argument annotation
/// is present. The annotation is attached verbatim.
pub fn field_label(declared: &str, arguments: Option<&str>) -> String {
    let name = field_name(declared);
    match arguments {
        Some(arguments) => format!("{name}({arguments})"),
        None => name,
    }
}

/// Turn a Rust field identifier into the declared identifier that
/// [`field_name()`] expects.
///
/// A raw-identifier prefix is dropped, the identifier is split on `_` and the
/// first character of every segment is upper-cased. Identifiers without
/// underscores keep their casing, so `HumanID` stays `HumanID`:
///
/// ```
/// use shapeql_core::naming::declared_identifier;
///
/// assert_eq!(declared_identifier("friends_connection"), "FriendsConnection");
/// assert_eq!(declared_identifier("r#type"), "Type");
/// assert_eq!(declared_identifier("HumanID"), "HumanID");
/// ```
pub fn declared_identifier(rust_ident: &str) -> String {
    let ident = rust_ident.strip_prefix("r#").unwrap_or(rust_ident);
    ident
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}
