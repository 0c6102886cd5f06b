//! `#[derive(WalkAst)]`: generates `crate::walk::Walk` impls for syntax
//! nodes. Every field is walked in declaration order; leaf types opt out via
//! the no-op impls in `walk.rs`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, quote_spanned};
use syn::{Data, DeriveInput, Fields, Index, parse_macro_input, spanned::Spanned};

#[proc_macro_derive(WalkAst)]
pub fn derive_walk_ast(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let span = input.span();

    let body = match &input.data {
        Data::Struct(s) => struct_body(&s.fields),
        Data::Enum(e) => enum_body(e),
        Data::Union(u) => {
            return syn::Error::new_spanned(u.union_token, "WalkAst cannot be derived for unions")
                .into_compile_error()
                .into();
        }
    };

    quote_spanned! {span =>
        impl<'ast> crate::walk::Walk<'ast> for #name {
            #[inline(always)]
            fn walk<V: crate::walk::Visitor<'ast> + ?Sized>(
                &self,
                a: &'ast crate::ast::AstArena,
                v: &mut V
            ) {
                #body
            }
        }
    }
    .into()
}

fn struct_body(fields: &Fields) -> TokenStream2 {
    let calls = fields.iter().enumerate().map(|(i, f)| {
        let access = match &f.ident {
            Some(name) => quote! { &self.#name },
            None => {
                let idx = Index::from(i);
                quote! { &self.#idx }
            }
        };
        quote! { crate::walk::Walk::walk(#access, a, v); }
    });
    quote! { #(#calls)* }
}

fn enum_body(data: &syn::DataEnum) -> TokenStream2 {
    let arms = data.variants.iter().map(|variant| {
        let tag = &variant.ident;
        match &variant.fields {
            Fields::Unit => quote! { Self::#tag => {} },
            Fields::Named(named) => {
                let bindings: Vec<_> = named
                    .named
                    .iter()
                    .map(|f| f.ident.clone().expect("named field"))
                    .collect();
                quote! {
                    Self::#tag { #(#bindings),* } => {
                        #(crate::walk::Walk::walk(#bindings, a, v);)*
                    }
                }
            }
            Fields::Unnamed(unnamed) => {
                let bindings: Vec<_> = (0..unnamed.unnamed.len())
                    .map(|i| format_ident!("f{}", i))
                    .collect();
                quote! {
                    Self::#tag(#(#bindings),*) => {
                        #(crate::walk::Walk::walk(#bindings, a, v);)*
                    }
                }
            }
        }
    });

    quote! {
        match self {
            #(#arms)*
        }
    }
}
