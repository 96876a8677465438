// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mavcodec contributors

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitInt, LitStr};

/// Message-level `#[mavlink(...)]` attributes.
struct MessageAttrs {
    id: u32,
    name: Option<String>,
}

/// Field-level `#[mavlink(...)]` attributes.
#[derive(Default)]
struct FieldAttrs {
    name: Option<String>,
    len: Option<usize>,
    extension: bool,
}

/// `#[derive(MavMessage)]` macro: generates the `MavMessage` impl
///
/// Every field type must implement `mavcodec::WireValue`: primitives,
/// `String` (char buffer, length from `len`), `[T; N]` arrays and enums
/// declared with `mav_enum!`. Any other type fails to compile.
///
/// Attributes:
/// - struct: `#[mavlink(id = N)]` (required), `#[mavlink(name = "WIRE_NAME")]`
///   (defaults to the struct name in UPPER_SNAKE_CASE)
/// - field: `#[mavlink(name = "wire_name")]`, `#[mavlink(len = N)]`
///   (`String` only, any other type fails to compile), `#[mavlink(extension)]`
///
/// Example:
/// ```ignore
/// use mavcodec::MavMessage;
///
/// #[derive(MavMessage)]
/// #[mavlink(id = 253, name = "STATUSTEXT")]
/// struct StatusText {
///     severity: MavSeverity,
///     #[mavlink(len = 50)]
///     text: String,
///     #[mavlink(extension)]
///     id: u16,
///     #[mavlink(extension)]
///     chunk_seq: u8,
/// }
/// ```
#[proc_macro_derive(MavMessage, attributes(mavlink))]
pub fn derive_mav_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "MavMessage cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Only named fields are supported",
                ))
            }
        },
        _ => return Err(syn::Error::new_spanned(input, "Only structs are supported")),
    };

    let attrs = parse_message_attrs(input)?;
    let id = attrs.id;
    let wire_name = attrs
        .name
        .unwrap_or_else(|| upper_snake_case(&ident.to_string()));

    let mut specs = Vec::new();
    let mut len_checks = Vec::new();
    let mut zeros = Vec::new();
    let mut encode_arms = Vec::new();
    let mut decode_arms = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        let ty = &field.ty;
        let fattrs = parse_field_attrs(field)?;
        let field_name = fattrs
            .name
            .unwrap_or_else(|| field_ident.unraw().to_string());
        let is_extension = fattrs.extension;
        let array_length = match fattrs.len {
            Some(len) => {
                if matches!(ty, syn::Type::Array(_)) {
                    return Err(syn::Error::new_spanned(
                        ty,
                        "`len` applies to String fields only; arrays take their length from the type",
                    ));
                }
                let message = format!("{}.{}: `len` applies to String fields only", ident, field_ident);
                len_checks.push(quote! {
                    const _: () = ::std::assert!(
                        ::std::matches!(
                            <#ty as ::mavcodec::WireValue>::FIELD_TYPE,
                            ::mavcodec::FieldType::Char
                        ) && <#ty as ::mavcodec::WireValue>::ARRAY_LENGTH == 0,
                        #message
                    );
                });
                quote! { #len }
            }
            None => quote! { <#ty as ::mavcodec::WireValue>::ARRAY_LENGTH },
        };

        specs.push(quote! {
            ::mavcodec::FieldSpec {
                name: ::std::borrow::Cow::Borrowed(#field_name),
                ftype: <#ty as ::mavcodec::WireValue>::FIELD_TYPE,
                is_enum: <#ty as ::mavcodec::WireValue>::IS_ENUM,
                array_length: #array_length,
                is_extension: #is_extension,
            }
        });
        zeros.push(quote! {
            #field_ident: <#ty as ::mavcodec::WireValue>::zero()
        });
        encode_arms.push(quote! {
            #index => ::mavcodec::WireValue::encode(&self.#field_ident, cursor, field),
        });
        decode_arms.push(quote! {
            #index => self.#field_ident = <#ty as ::mavcodec::WireValue>::decode(cursor, field),
        });
    }

    Ok(quote! {
        #(#len_checks)*

        impl ::mavcodec::MavMessage for #ident {
            const ID: u32 = #id;
            const NAME: &'static str = #wire_name;
            const FIELDS: &'static [::mavcodec::FieldSpec] = &[
                #(#specs),*
            ];

            fn zeroed() -> Self {
                Self {
                    #(#zeros),*
                }
            }

            fn encode_field(
                &self,
                index: usize,
                cursor: &mut ::mavcodec::ser::CursorMut<'_>,
                field: &::mavcodec::FieldDescriptor,
            ) {
                match index {
                    #(#encode_arms)*
                    _ => {}
                }
            }

            fn decode_field(
                &mut self,
                index: usize,
                cursor: &mut ::mavcodec::ser::Cursor<'_>,
                field: &::mavcodec::FieldDescriptor,
            ) {
                match index {
                    #(#decode_arms)*
                    _ => {}
                }
            }
        }
    })
}

fn parse_message_attrs(input: &DeriveInput) -> syn::Result<MessageAttrs> {
    let mut id = None;
    let mut name = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("mavlink")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                let lit: LitInt = meta.value()?.parse()?;
                let value: u32 = lit.base10_parse()?;
                if value > 0x00FF_FFFF {
                    return Err(meta.error("message id must fit in 24 bits"));
                }
                id = Some(value);
                Ok(())
            } else if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `id` or `name`"))
            }
        })?;
    }

    let Some(id) = id else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "missing #[mavlink(id = N)]",
        ));
    };
    Ok(MessageAttrs { id, name })
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("mavlink")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("extension") {
                attrs.extension = true;
                Ok(())
            } else if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                attrs.name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("len") {
                let lit: LitInt = meta.value()?.parse()?;
                let len: usize = lit.base10_parse()?;
                if len == 0 || len > 255 {
                    return Err(meta.error("len must be between 1 and 255"));
                }
                attrs.len = Some(len);
                Ok(())
            } else {
                Err(meta.error("expected `extension`, `name` or `len`"))
            }
        })?;
    }

    Ok(attrs)
}

/// `GpsRawInt` -> `GPS_RAW_INT`
fn upper_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for (i, ch) in ident.char_indices() {
        if ch.is_ascii_uppercase() && i > 0 {
            out.push('_');
        }
        out.push(ch.to_ascii_uppercase());
    }
    out
}
