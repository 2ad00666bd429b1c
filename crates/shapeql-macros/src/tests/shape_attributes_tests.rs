use crate::shape_attributes::FieldAttributes;
use crate::shape_attributes::RenderMode;
use crate::shape_attributes::StructAttributes;
use syn::parse_quote;

#[test]
fn struct_without_attributes_is_structural() {
    let input: syn::DeriveInput = parse_quote! {
        #[derive(Default)]
        struct Human { name: String }
    };
    let attrs = StructAttributes::from_attrs(&input.attrs).unwrap();
    assert_eq!(attrs.render_mode, RenderMode::Structural);
}

#[test]
fn struct_render_modes() {
    let input: syn::DeriveInput = parse_quote! {
        #[graphql(leaf)]
        struct Avatar { url: String }
    };
    let attrs = StructAttributes::from_attrs(&input.attrs).unwrap();
    assert_eq!(attrs.render_mode, RenderMode::Leaf);

    let input: syn::DeriveInput = parse_quote! {
        #[graphql(custom_render)]
        struct Avatar { url: String }
    };
    let attrs = StructAttributes::from_attrs(&input.attrs).unwrap();
    assert_eq!(attrs.render_mode, RenderMode::CustomRender);
}

#[test]
fn conflicting_render_modes_are_rejected() {
    let input: syn::DeriveInput = parse_quote! {
        #[graphql(leaf)]
        #[graphql(custom_render)]
        struct Avatar { url: String }
    };
    let err = StructAttributes::from_attrs(&input.attrs).unwrap_err();
    assert!(err.to_string().contains("may only be specified once"));
}

#[test]
fn unknown_struct_attribute_is_rejected() {
    let input: syn::DeriveInput = parse_quote! {
        #[graphql(flatten)]
        struct Avatar { url: String }
    };
    let err = StructAttributes::from_attrs(&input.attrs).unwrap_err();
    assert!(err.to_string().contains("unsupported `graphql` struct attribute"));
}

#[test]
fn field_args_and_rename() {
    let field: syn::Field = parse_quote! {
        #[graphql(args = "unit: FOOT", rename = "HeightInFeet")]
        height: f32
    };
    let attrs = FieldAttributes::from_attrs(&field.attrs).unwrap();
    assert_eq!(attrs.arguments.unwrap().value(), "unit: FOOT");
    assert_eq!(attrs.rename.unwrap().value(), "HeightInFeet");
}

#[test]
fn field_attributes_may_be_split() {
    let field: syn::Field = parse_quote! {
        #[serde(default)]
        #[graphql(args = "first: 2")]
        #[graphql(rename = "FriendsConnection")]
        friends: Vec<String>
    };
    let attrs = FieldAttributes::from_attrs(&field.attrs).unwrap();
    assert_eq!(attrs.arguments.unwrap().value(), "first: 2");
    assert_eq!(attrs.rename.unwrap().value(), "FriendsConnection");
}

#[test]
fn duplicate_field_args_are_rejected() {
    let field: syn::Field = parse_quote! {
        #[graphql(args = "a: 1", args = "b: 2")]
        height: f32
    };
    let err = FieldAttributes::from_attrs(&field.attrs).unwrap_err();
    assert!(err.to_string().contains("`args` may only be specified once"));
}

#[test]
fn empty_rename_is_rejected() {
    let field: syn::Field = parse_quote! {
        #[graphql(rename = "")]
        height: f32
    };
    let err = FieldAttributes::from_attrs(&field.attrs).unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn non_string_field_value_is_rejected() {
    let field: syn::Field = parse_quote! {
        #[graphql(args = 5)]
        height: f32
    };
    assert!(FieldAttributes::from_attrs(&field.attrs).is_err());
}

#[test]
fn unknown_field_attribute_is_rejected() {
    let field: syn::Field = parse_quote! {
        #[graphql(alias = "tallness")]
        height: f32
    };
    let err = FieldAttributes::from_attrs(&field.attrs).unwrap_err();
    assert!(err.to_string().contains("unsupported `graphql` field attribute"));
}
