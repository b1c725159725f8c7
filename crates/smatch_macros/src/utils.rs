//! Shared utilities for the derive macros.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    ext::IdentExt, punctuated::Punctuated, token::Comma, Data, DeriveInput, Fields, Ident,
    Index, Member, Variant,
};

/// Validate that the input is a struct, returning its fields.
pub fn validate_struct<'a>(input: &'a DeriveInput, macro_name: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data) => Ok(&data.fields),
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

/// Validate that the input is an enum, returning its variants.
pub fn validate_enum<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Variant, Comma>> {
    match &input.data {
        Data::Enum(data) => Ok(&data.variants),
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports enums"),
        )),
    }
}

/// Field accessors in declaration order: names for named fields, indices for
/// tuple fields.
pub fn field_members(fields: &Fields) -> Vec<Member> {
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| match &field.ident {
            Some(name) => Member::Named(name.clone()),
            None => Member::Unnamed(Index::from(index)),
        })
        .collect()
}

/// Nested-pair list `(a, (b, ()))`; the same spelling serves types,
/// expressions and patterns.
pub fn cons_list<I>(items: I) -> TokenStream2
where
    I: IntoIterator<Item = TokenStream2>,
    I::IntoIter: DoubleEndedIterator,
{
    items
        .into_iter()
        .rev()
        .fold(quote! { () }, |tail, head| quote! { (#head, #tail) })
}

/// `HttpStatus` → `http_status`, `IOError` → `io_error`.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let word_start = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_uppercase() && next.is_some_and(char::is_lowercase),
            };
            if word_start {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Module identifier derived from a type name. Keywords become raw
/// identifiers; path keywords, which cannot be raw, get a trailing `_`.
pub fn module_ident(type_name: &Ident) -> Ident {
    let name = snake_case(&type_name.unraw().to_string());
    match name.as_str() {
        "crate" | "self" | "super" => Ident::new(&format!("{name}_"), type_name.span()),
        _ => syn::parse_str::<Ident>(&name)
            .unwrap_or_else(|_| Ident::new_raw(&name, type_name.span())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Shape"), "shape");
        assert_eq!(snake_case("HttpStatus"), "http_status");
        assert_eq!(snake_case("IOError"), "io_error");
        assert_eq!(snake_case("Vec3Kind"), "vec3_kind");
        assert_eq!(snake_case("Already_Snake"), "already_snake");
        assert_eq!(snake_case("A"), "a");
    }

    #[test]
    fn test_module_ident_escapes_keywords() {
        let ident = module_ident(&Ident::new("Type", Span::call_site()));
        assert_eq!(ident.to_string(), "r#type");

        let ident = module_ident(&Ident::new("Token", Span::call_site()));
        assert_eq!(ident.to_string(), "token");

        let ident = module_ident(&Ident::new("Super", Span::call_site()));
        assert_eq!(ident.to_string(), "super_");
    }

    #[test]
    fn test_cons_list() {
        assert_eq!(cons_list(Vec::new()).to_string(), quote! { () }.to_string());
        assert_eq!(
            cons_list(vec![quote! { a }, quote! { b }]).to_string(),
            quote! { (a, (b, ())) }.to_string()
        );
    }

    #[test]
    fn test_field_members() {
        let input: DeriveInput = syn::parse_quote! {
            struct Pair(u8, u16);
        };
        let members = validate_struct(&input, "Structure").map(field_members);
        assert_eq!(members.ok(), Some(vec![Member::from(0), Member::from(1)]));
    }
}
