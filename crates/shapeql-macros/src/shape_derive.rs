use crate::shape_attributes::FieldAttributes;
use crate::shape_attributes::RenderMode;
use crate::shape_attributes::StructAttributes;
use proc_macro2::TokenStream;
use quote::quote;
use shapeql_core::naming;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::Ident;
use syn::LitStr;
use syn::Type;
use syn::parse_quote;

/// One named field of the struct being derived.
pub(crate) struct ShapeMember {
    pub(crate) arguments: Option<LitStr>,
    pub(crate) declared: String,
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
}
impl ShapeMember {
    pub fn from_field(field: &syn::Field) -> syn::Result<Self> {
        // Only called for named fields.
        let ident = field.ident.clone().ok_or_else(|| {
            syn::Error::new_spanned(field, "expected a named field")
        })?;
        let attrs = FieldAttributes::from_attrs(&field.attrs)?;
        let declared = match &attrs.rename {
            Some(rename) => rename.value(),
            None => naming::declared_identifier(&ident.to_string()),
        };

        Ok(Self {
            arguments: attrs.arguments,
            declared,
            ident,
            ty: field.ty.clone(),
        })
    }

    fn bind_tokens(&self) -> TokenStream {
        let declared = &self.declared;
        let ident = &self.ident;
        quote! {
            ::shapeql::bind::bind_member(&mut self.#ident, #declared, members)?;
        }
    }

    fn descriptor_tokens(&self) -> TokenStream {
        let declared = &self.declared;
        let ty = &self.ty;
        let descriptor = quote! {
            ::shapeql::FieldDescriptor::new(
                #declared,
                <#ty as ::shapeql::Shape>::type_descriptor(),
            )
        };
        match &self.arguments {
            Some(arguments) => quote! { #descriptor.with_arguments(#arguments) },
            None => descriptor,
        }
    }
}

pub(crate) fn members(input: &DeriveInput) -> syn::Result<Vec<ShapeMember>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => return Err(syn::Error::new_spanned(
                &input.ident,
                "`#[derive(Shape)]` requires a struct with named fields",
            )),
        },
        Data::Enum(data) => return Err(syn::Error::new(
            data.enum_token.span,
            "`#[derive(Shape)]` is not supported on enums",
        )),
        Data::Union(data) => return Err(syn::Error::new(
            data.union_token.span,
            "`#[derive(Shape)]` is not supported on unions",
        )),
    };
    fields.iter().map(ShapeMember::from_field).collect()
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_attrs = StructAttributes::from_attrs(&input.attrs)?;
    let members = members(input)?;

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::shapeql::Shape));
        param.bounds.push(parse_quote!(::core::default::Default));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let ident = &input.ident;

    let type_descriptor = match struct_attrs.render_mode {
        RenderMode::CustomRender => quote! {
            ::shapeql::TypeDescriptor::Custom(
                <Self as ::shapeql::RenderAsField>::render_as_field,
            )
        },
        RenderMode::Leaf => quote! {
            ::shapeql::TypeDescriptor::Custom(::shapeql::render_leaf)
        },
        RenderMode::Structural => quote! {
            ::shapeql::TypeDescriptor::Object(::shapeql::Fields::Static(
                <Self as ::shapeql::Shape>::field_descriptors,
            ))
        },
    };
    let descriptors = members.iter().map(ShapeMember::descriptor_tokens);
    let binds = members.iter().map(ShapeMember::bind_tokens);

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::shapeql::Shape for #ident #ty_generics #where_clause {
            fn type_descriptor() -> ::shapeql::TypeDescriptor {
                #type_descriptor
            }

            fn field_descriptors() -> ::std::vec::Vec<::shapeql::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn bind_value(
                &mut self,
                value: &::shapeql::serde_json::Value,
            ) -> ::core::result::Result<(), ::shapeql::BindError> {
                ::shapeql::bind::bind_object(self, value)
            }

            #[allow(unused_variables)]
            fn bind_members(
                &mut self,
                members: &::shapeql::serde_json::Map<
                    ::std::string::String,
                    ::shapeql::serde_json::Value,
                >,
            ) -> ::core::result::Result<(), ::shapeql::BindError> {
                #(#binds)*
                ::core::result::Result::Ok(())
            }
        }
    })
}
