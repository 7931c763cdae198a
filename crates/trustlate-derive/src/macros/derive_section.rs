//! Implementation of the `Section` and `Catalog` derive macros.

use crate::options::{FieldKind, SectionOpts, classify};
use darling::FromDeriveInput as _;
use proc_macro_error2::abort;
use proc_macro2::TokenStream;
use quote::quote;
use syn::spanned::Spanned as _;
use syn::{DeriveInput, parse_macro_input};

pub fn from(input: proc_macro::TokenStream, catalog: bool) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match SectionOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(err) => return err.write_errors().into(),
    };

    match expand(&opts, catalog) {
        Ok(tokens) => tokens.into(),
        Err(err) => abort!(err),
    }
}

pub(crate) fn expand(opts: &SectionOpts, catalog: bool) -> syn::Result<TokenStream> {
    let ident = &opts.ident;
    if !opts.generics.params.is_empty() {
        return Err(syn::Error::new(
            opts.generics.span(),
            "catalog sections cannot be generic",
        ));
    }

    let rule = opts.rule();
    let mut errors: Vec<syn::Error> = Vec::new();

    let mut keys: Vec<String> = Vec::new();
    let mut children = Vec::new();
    let mut accessors = Vec::new();

    for field in opts.fields() {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };

        let key = field.key(rule);
        if key.is_empty() {
            errors.push(syn::Error::new(field_ident.span(), "keys cannot be empty"));
            continue;
        }
        if key.contains('.') {
            errors.push(syn::Error::new(
                field_ident.span(),
                format!("key `{key}` cannot contain '.'"),
            ));
            continue;
        }
        if keys.contains(&key) {
            errors.push(syn::Error::new(
                field_ident.span(),
                format!("duplicate key `{key}` in `{ident}`"),
            ));
            continue;
        }

        let kind = match classify(&field.ty) {
            Ok(kind) => kind,
            Err(err) => {
                errors.push(err);
                continue;
            },
        };

        let child = match &kind {
            FieldKind::Literal => quote! {
                children.push((#key, ::trustlate::__core::Node::literal(self.#field_ident)));
            },
            FieldKind::Template(params) => {
                let names = params.iter().map(|param| param.name.as_str());
                let args = (0..params.len()).map(|idx| quote! { __args[#idx] });
                quote! {
                    {
                        let render = self.#field_ident;
                        children.push((
                            #key,
                            ::trustlate::__core::Node::template(
                                &[#(#names),*],
                                move |__args: &[&str]| render(#(#args),*),
                            ),
                        ));
                    }
                }
            },
            FieldKind::Section => quote! {
                children.push((#key, ::trustlate::__core::Node::section(&self.#field_ident)));
            },
        };
        children.push(child);

        if let FieldKind::Template(params) = &kind {
            let vis = &field.vis;
            let params: Vec<_> = params.iter().map(|param| &param.ident).collect();
            accessors.push(quote! {
                #vis fn #field_ident(&self, #(#params: &str),*) -> ::std::string::String {
                    (self.#field_ident)(#(#params),*)
                }
            });
        }

        keys.push(key);
    }

    if let Some(combined) = errors.into_iter().reduce(|mut combined, err| {
        combined.combine(err);
        combined
    }) {
        return Err(combined);
    }

    let capacity = children.len();
    let accessors = if accessors.is_empty() {
        quote! {}
    } else {
        quote! {
            impl #ident {
                #(#accessors)*
            }
        }
    };
    let catalog_impl = if catalog {
        quote! {
            impl ::trustlate::__core::Catalog for #ident {}
        }
    } else {
        quote! {}
    };

    Ok(quote! {
        impl ::trustlate::__core::Section for #ident {
            fn children(&self) -> ::std::vec::Vec<(&'static str, ::trustlate::__core::Node<'_>)> {
                let mut children = ::std::vec::Vec::with_capacity(#capacity);
                #(#children)*
                children
            }
        }

        #accessors
        #catalog_impl
    })
}
