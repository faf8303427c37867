//! Implementation of the `#[derive(Members)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, FieldsNamed, Generics, Ident, parse_macro_input};

/// Main implementation of the Members derive macro.
pub fn derive_members_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;

    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => {
                generate_member_methods(name, &input.generics, named_fields)
            }
            Fields::Unnamed(_) => syn::Error::new_spanned(
                name,
                "Members can only be derived for structs with named fields, not tuple structs. \
                 Use member!(Type, 0) for tuple fields.",
            )
            .to_compile_error(),
            Fields::Unit => syn::Error::new_spanned(
                name,
                "Members cannot be derived for unit structs (structs with no fields).",
            )
            .to_compile_error(),
        },
        Data::Enum(_) => {
            syn::Error::new_spanned(name, "Members can only be derived for structs, not enums.")
                .to_compile_error()
        }
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Members cannot be derived for unions.")
                .to_compile_error()
        }
    }
}

fn generate_member_methods(name: &Ident, generics: &Generics, fields: &FieldsNamed) -> TokenStream2 {
    let methods = fields.named.iter().filter_map(|field| {
        let field_name = field.ident.as_ref()?;
        let field_type = &field.ty;
        let method_name = format_ident!("{}_member", field_name);
        let documentation = format!("Returns a member accessor for the `{field_name}` field.");

        Some(quote! {
            #[doc = #documentation]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::fnadapt::adaptors::MemberVariableMut<Self, Value = #field_type> + Copy {
                ::fnadapt::adaptors::FieldAccessor::new(
                    |object: &Self| &object.#field_name,
                    |object: &mut Self| &mut object.#field_name,
                )
            }
        })
    });

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    }
}
