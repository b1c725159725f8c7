//! `Variants` derive implementation.
//!
//! For an enum `Shape` this generates:
//!
//! - a module `shape` holding one pattern type per variant;
//! - `smatch::Matcher<Shape>` for every pattern type;
//! - `smatch::Exhaustive` for `Shape`, one flag slot per variant;
//! - `smatch::Coverage` and `smatch::Totality` for every pattern type.
//!
//! Impls live next to the enum, outside the generated module, so paths in the
//! enum's field types resolve the way they do in the enum itself.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, DeriveInput, Generics, Ident, Lifetime, Type, Variant};

use crate::utils::{cons_list, field_members, module_ident, validate_enum};

/// Slots available in the exhaustiveness flag sets.
const MAX_VARIANTS: usize = 16;

/// Main entry point for the Variants derive macro.
pub fn derive_variants(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_variants_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// How a variant's payload is matched.
enum Payload<'a> {
    /// No fields: the pattern is a unit struct.
    Unit,
    /// One field: the inner pattern is a `Matcher` for the field type.
    Single(&'a Type),
    /// Several fields: the inner pattern is a sub-pattern list over them.
    Fields(Vec<&'a Type>),
}

impl<'a> Payload<'a> {
    fn of(variant: &'a Variant) -> Self {
        let types: Vec<&Type> = variant.fields.iter().map(|field| &field.ty).collect();
        match types.as_slice() {
            [] => Payload::Unit,
            [ty] => Payload::Single(ty),
            _ => Payload::Fields(types),
        }
    }
}

/// Shared pieces of every generated impl.
struct Context<'a> {
    input: &'a DeriveInput,
    module: Ident,
    lifetime: Lifetime,
    pattern_param: Ident,
    variant_count: usize,
}

fn derive_variants_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let variants = validate_enum(input, "Variants")?;
    if variants.len() > MAX_VARIANTS {
        return Err(syn::Error::new_spanned(
            &input.ident,
            format!(
                "Variants derive supports at most {MAX_VARIANTS} variants, found {}",
                variants.len()
            ),
        ));
    }

    let cx = Context {
        input,
        module: parse_module_attribute(input)?.unwrap_or_else(|| module_ident(&input.ident)),
        lifetime: Lifetime::new("'__smatch", Span::call_site()),
        pattern_param: Ident::new("__P", Span::call_site()),
        variant_count: variants.len(),
    };

    let pattern_types = variants.iter().map(|variant| generate_pattern_type(&cx, variant));
    let matcher_impls = variants.iter().map(|variant| generate_matcher_impl(&cx, variant));
    let coverage_impls = variants
        .iter()
        .enumerate()
        .map(|(slot, variant)| generate_coverage_impls(&cx, slot, variant));
    let exhaustive_impl = generate_exhaustive_impl(&cx);

    let vis = &input.vis;
    let module = &cx.module;
    let module_doc = format!("Patterns for the variants of `{}`.", input.ident);

    Ok(quote! {
        #[doc = #module_doc]
        #vis mod #module {
            #(#pattern_types)*
        }

        #exhaustive_impl
        #(#matcher_impls)*
        #(#coverage_impls)*
    })
}

/// Parse `#[smatch(module = name)]`.
fn parse_module_attribute(input: &DeriveInput) -> syn::Result<Option<Ident>> {
    let mut module = None;
    for attr in &input.attrs {
        if attr.path().is_ident("smatch") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("module") {
                    module = Some(meta.value()?.parse::<Ident>()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported smatch attribute, expected `module = name`"))
                }
            })?;
        }
    }
    Ok(module)
}

fn generate_pattern_type(cx: &Context<'_>, variant: &Variant) -> TokenStream2 {
    let name = &variant.ident;
    let enum_name = &cx.input.ident;

    match Payload::of(variant) {
        Payload::Unit => {
            let doc = format!("Matches `{enum_name}::{name}`.");
            quote! {
                #[doc = #doc]
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                pub struct #name;
            }
        }
        Payload::Single(_) => {
            let doc = format!(
                "Matches `{enum_name}::{name}` whose field matches the inner pattern."
            );
            quote! {
                #[doc = #doc]
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                pub struct #name<P>(pub P);
            }
        }
        Payload::Fields(_) => {
            let doc = format!(
                "Matches `{enum_name}::{name}` whose fields match the inner sub-pattern list."
            );
            quote! {
                #[doc = #doc]
                #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
                pub struct #name<P>(pub P);
            }
        }
    }
}

/// Enum generics extended with the subject lifetime, plus an optional
/// pattern parameter, with the given extra where-predicates.
fn extended_generics(
    cx: &Context<'_>,
    with_pattern: bool,
    predicates: &[syn::WherePredicate],
) -> Generics {
    let mut generics = cx.input.generics.clone();
    let lifetime = &cx.lifetime;
    generics.params.insert(0, parse_quote!(#lifetime));
    if with_pattern {
        let param = &cx.pattern_param;
        generics.params.push(parse_quote!(#param));
    }
    generics
        .make_where_clause()
        .predicates
        .extend(predicates.iter().cloned());
    generics
}

fn generate_matcher_impl(cx: &Context<'_>, variant: &Variant) -> TokenStream2 {
    let enum_name = &cx.input.ident;
    let (_, enum_ty_generics, _) = cx.input.generics.split_for_impl();
    let subject: Type = parse_quote!(#enum_name #enum_ty_generics);
    let module = &cx.module;
    let name = &variant.ident;
    let lifetime = &cx.lifetime;
    let param = &cx.pattern_param;

    let members = field_members(&variant.fields);
    let bindings: Vec<Ident> = (0..members.len())
        .map(|index| format_ident!("__field{}", index))
        .collect();
    let destructure = quote! { #enum_name::#name { #(#members: #bindings),* } };
    let field_refs = cons_list(bindings.iter().map(|binding| quote! { #binding }));

    let subject_outlives: syn::WherePredicate = parse_quote!(#subject: #lifetime);

    let (generics, pattern_ty, bindings_ty, check_body, get_body) = match Payload::of(variant) {
        Payload::Unit => (
            extended_generics(cx, false, &[subject_outlives]),
            quote! { #module::#name },
            quote! { () },
            quote! { ::core::matches!(subject, #enum_name::#name { .. }) },
            quote! {},
        ),
        Payload::Single(ty) => {
            let field = &bindings[0];
            let bound: syn::WherePredicate =
                parse_quote!(#param: ::smatch::Matcher<#lifetime, #ty>);
            (
                extended_generics(cx, true, &[subject_outlives, bound]),
                quote! { #module::#name<#param> },
                quote! { <#param as ::smatch::Matcher<#lifetime, #ty>>::Bindings },
                quote! {
                    match subject {
                        #destructure => ::smatch::Matcher::check(&self.0, #field),
                        _ => false,
                    }
                },
                quote! {
                    match subject {
                        #destructure => ::smatch::Matcher::get(&self.0, #field),
                        _ => ::core::unreachable!("`get` called on a subject `check` rejected"),
                    }
                },
            )
        }
        Payload::Fields(types) => {
            let fields_ty = cons_list(types.iter().map(|ty| quote! { &#lifetime #ty }));
            let bound: syn::WherePredicate =
                parse_quote!(#param: ::smatch::FieldPatterns<#lifetime, #fields_ty>);
            (
                extended_generics(cx, true, &[subject_outlives, bound]),
                quote! { #module::#name<#param> },
                quote! { <#param as ::smatch::FieldPatterns<#lifetime, #fields_ty>>::Bindings },
                quote! {
                    match subject {
                        #destructure => ::smatch::FieldPatterns::check_fields(&self.0, #field_refs),
                        _ => false,
                    }
                },
                quote! {
                    match subject {
                        #destructure => ::smatch::FieldPatterns::get_fields(&self.0, #field_refs),
                        _ => ::core::unreachable!("`get` called on a subject `check` rejected"),
                    }
                },
            )
        }
    };

    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let subject_arg = if matches!(Payload::of(variant), Payload::Unit) {
        quote! { _subject }
    } else {
        quote! { subject }
    };

    quote! {
        impl #impl_generics ::smatch::Matcher<#lifetime, #subject> for #pattern_ty #where_clause {
            type Bindings = #bindings_ty;

            #[inline]
            #[allow(unreachable_patterns)]
            fn check(&self, subject: &#lifetime #subject) -> bool {
                #check_body
            }

            #[inline]
            #[allow(unreachable_patterns)]
            fn get(&self, #subject_arg: &#lifetime #subject) -> Self::Bindings {
                #get_body
            }
        }
    }
}

fn generate_exhaustive_impl(cx: &Context<'_>) -> TokenStream2 {
    let enum_name = &cx.input.ident;
    let (impl_generics, ty_generics, where_clause) = cx.input.generics.split_for_impl();
    let missing = (0..cx.variant_count).map(|_| quote! { ::smatch::exhaustive::Missing });

    quote! {
        impl #impl_generics ::smatch::Exhaustive for #enum_name #ty_generics #where_clause {
            type Empty = (#(#missing,)*);
        }
    }
}

/// `Coverage` and `Totality` for one variant's pattern type.
///
/// The cover is partial over the enum: the variant's slot holds what the
/// inner pattern covers of the payload (everything for unit variants) and
/// every other slot is missing. The pattern is total only when the enum has
/// a single variant.
fn generate_coverage_impls(cx: &Context<'_>, slot: usize, variant: &Variant) -> TokenStream2 {
    let module = &cx.module;
    let name = &variant.ident;
    let param = &cx.pattern_param;

    let payload = Payload::of(variant);
    let own_cover = match payload {
        Payload::Unit => quote! { ::smatch::exhaustive::Covered },
        Payload::Single(_) => quote! { <#param as ::smatch::Coverage>::Cover },
        Payload::Fields(_) => quote! { <#param as ::smatch::Totality>::Flag },
    };
    let covers = (0..cx.variant_count).map(|index| {
        if index == slot {
            own_cover.clone()
        } else {
            quote! { ::smatch::exhaustive::Missing }
        }
    });

    let (pattern_ty, coverage_generics, totality_generics, total_flag) = match payload {
        Payload::Unit => {
            let total_flag = if cx.variant_count == 1 {
                quote! { ::smatch::exhaustive::Covered }
            } else {
                quote! { ::smatch::exhaustive::Missing }
            };
            (quote! { #module::#name }, quote! {}, quote! {}, total_flag)
        }
        Payload::Single(_) | Payload::Fields(_) => {
            let coverage_bound = match payload {
                Payload::Single(_) => quote! { ::smatch::Coverage },
                Payload::Unit | Payload::Fields(_) => quote! { ::smatch::Totality },
            };
            let total_flag = if cx.variant_count == 1 {
                quote! { <#param as ::smatch::Totality>::Flag }
            } else {
                quote! { ::smatch::exhaustive::Missing }
            };
            (
                quote! { #module::#name<#param> },
                quote! { <#param: #coverage_bound> },
                quote! { <#param: ::smatch::Totality> },
                total_flag,
            )
        }
    };

    quote! {
        impl #coverage_generics ::smatch::Coverage for #pattern_ty {
            type Cover = ::smatch::exhaustive::Partial<(#(#covers,)*)>;
        }

        impl #totality_generics ::smatch::Totality for #pattern_ty {
            type Flag = #total_flag;
        }
    }
}
