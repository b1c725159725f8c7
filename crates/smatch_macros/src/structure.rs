//! `Structure` derive implementation.
//!
//! Generates `smatch::Structure` with the fields exposed as a list of
//! references in declaration order.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Lifetime};

use crate::utils::{cons_list, field_members, validate_struct};

/// Main entry point for the Structure derive macro.
pub fn derive_structure(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_structure_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_structure_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let fields = validate_struct(input, "Structure")?;
    let lifetime = Lifetime::new("'__smatch", Span::call_site());

    let fields_type = cons_list(fields.iter().map(|field| {
        let ty = &field.ty;
        quote! { &#lifetime #ty }
    }));
    let fields_expr = cons_list(
        field_members(fields)
            .into_iter()
            .map(|member| quote! { &self.#member }),
    );

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::smatch::Structure for #name #ty_generics #where_clause {
            type Fields<#lifetime> = #fields_type where Self: #lifetime;

            #[inline]
            fn fields(&self) -> Self::Fields<'_> {
                #fields_expr
            }
        }
    })
}
