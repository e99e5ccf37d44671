// ignition-chat/ignition-proc-macros
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Implements `From<&crate::app::deps::AppDependencies>` for an app service.
///
/// Every named field is cloned from the field with the same name on `AppDependencies`.
#[proc_macro_derive(InjectDependencies)]
pub fn inject_deps(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let Data::Struct(struct_data) = &input.data else {
        return syn::Error::new(input.span(), "InjectDependencies only supports structs.")
            .to_compile_error()
            .into();
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return syn::Error::new(
            input.span(),
            "InjectDependencies only supports structs with named fields.",
        )
        .to_compile_error()
        .into();
    };

    let field_initialization = fields.named.iter().filter_map(|field| {
        let ident = field.ident.as_ref()?;
        Some(quote_spanned! { field.span() =>
            #ident: deps.#ident.clone()
        })
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics From<&crate::app::deps::AppDependencies> for #name #ty_generics #where_clause {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
