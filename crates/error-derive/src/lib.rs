//! `#[derive(Error)]` for error enums
//!
//! Every variant needs a `#[msg = ...]` attribute, which becomes its
//! [Display](std::fmt::Display) output.
//!
//! * Unit variants display the message as-is.
//! * Tuple variants must have exactly one field, which is the error
//!   [source](std::error::Error::source). A `From` implementation for the
//!   field type is generated.
//! * Struct variants may refer to their fields inside the message, like
//!   `#[msg = "expected {expected} items, found {found}"]`.

use proc_macro::TokenStream;
use quote::quote;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item: syn::ItemEnum = syn::parse(input).expect("Could not parse input as enum");

    let name = item.ident;
    let mut variant_displays = vec![];
    let mut from_impls = vec![];
    let mut variant_sources = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;

        let display_attribute = variant
            .attrs
            .iter()
            .flat_map(|attr| match &attr.meta {
                syn::Meta::NameValue(name_value) => Some(name_value),
                _ => None,
            })
            .flat_map(|attr| {
                let ident = attr.path.get_ident()?.to_string();

                Some((ident, &attr.value))
            })
            .find(|(name, _)| name == "msg")
            .map(|(_, value)| value);

        let Some(display_value) = display_attribute else {
            panic!("{name}::{ident} needs a #[msg = ...] attribute");
        };

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays.push(
                    quote!(Self::#ident => ::std::fmt::Display::fmt(&(#display_value), f)),
                );
            },
            syn::Fields::Unnamed(unnamed_fields) => {
                if unnamed_fields.unnamed.len() != 1 {
                    panic!("{name}::{ident} needs exactly one field");
                }

                let field = &unnamed_fields.unnamed[0];
                let ty = &field.ty;

                from_impls.push(quote!(
                    #[automatically_derived]
                    impl From<#ty> for #name {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
                variant_displays.push(
                    quote!(Self::#ident(_) => ::std::fmt::Display::fmt(&(#display_value), f)),
                );
                variant_sources.push(quote!(Self::#ident(ref value) => Some(value)));
            },
            syn::Fields::Named(named_fields) => {
                let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(format_string),
                    ..
                }) = display_value
                else {
                    panic!("{name}::{ident} has named fields, its message must be a string literal");
                };

                // Bind every field by name so the format string can capture them
                let field_names = named_fields
                    .named
                    .iter()
                    .map(|field| field.ident.as_ref().expect("named field without a name"));

                variant_displays.push(quote!(
                    #[allow(unused_variables)]
                    Self::#ident { #(#field_names),* } => write!(f, #format_string)
                ));
            },
        }
    }

    quote!(
        #[automatically_derived]
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::result::Result<(), ::std::fmt::Error> {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl ::std::error::Error for #name {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #variant_sources,
                    )*
                    _ => None,
                }
            }
        }
    )
    .into()
}
