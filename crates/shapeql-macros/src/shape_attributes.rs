use syn::Attribute;
use syn::LitStr;
use syn::meta::ParseNestedMeta;

const ATTRIBUTE_NAME: &str = "graphql";

/// How fields of a derived type are rendered in query text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum RenderMode {
    CustomRender,
    Leaf,
    #[default]
    Structural,
}

/// `#[graphql(...)]` options on the struct itself.
#[derive(Debug, Default)]
pub(crate) struct StructAttributes {
    pub render_mode: RenderMode,
}
impl StructAttributes {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in graphql_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                let mode =
                    if meta.path.is_ident("leaf") {
                        RenderMode::Leaf
                    } else if meta.path.is_ident("custom_render") {
                        RenderMode::CustomRender
                    } else {
                        return Err(meta.error(
                            "unsupported `graphql` struct attribute, expected \
                            `leaf` or `custom_render`",
                        ));
                    };

                if parsed.render_mode != RenderMode::Structural {
                    return Err(meta.error(
                        "`leaf` and `custom_render` may only be specified once",
                    ));
                }
                parsed.render_mode = mode;
                Ok(())
            })?;
        }
        Ok(parsed)
    }
}

/// `#[graphql(...)]` options on one struct field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    pub arguments: Option<LitStr>,
    pub rename: Option<LitStr>,
}
impl FieldAttributes {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in graphql_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("args") {
                    set_once(&mut parsed.arguments, &meta, "args")
                } else if meta.path.is_ident("rename") {
                    set_once(&mut parsed.rename, &meta, "rename")?;
                    if parsed.rename.as_ref().is_some_and(|name| name.value().is_empty()) {
                        return Err(meta.error("`rename` must not be empty"));
                    }
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported `graphql` field attribute, expected \
                        `args` or `rename`",
                    ))
                }
            })?;
        }
        Ok(parsed)
    }
}

fn graphql_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident(ATTRIBUTE_NAME))
}

fn set_once(
    slot: &mut Option<LitStr>,
    meta: &ParseNestedMeta<'_>,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("`{key}` may only be specified once")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}
