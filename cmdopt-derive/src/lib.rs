//! Derive macro for cmdopt option structs
//!
//! `#[derive(Options)]` generates the field table the `cmdopt` encoder walks
//! to build a process argument vector.
//!
//! # Example
//!
//! ```rust,ignore
//! use cmdopt::{ExtraOpts, Options};
//!
//! #[derive(Debug, Default, Options)]
//! pub struct CompactOptions {
//!     #[opt("data-dir")]
//!     pub data_dir: std::path::PathBuf,
//!     #[opt("wait,noval")]
//!     pub wait: bool,
//!     #[opt(flatten)]
//!     pub log: LogOpts,
//!     #[opt(extra)]
//!     pub extra: ExtraOpts,
//! }
//! ```

use darling::ast::Data;
use darling::util::Ignored;
use darling::{FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::ParseStream;
use syn::{parse_macro_input, DeriveInput, Ident, LitStr};

#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_named))]
struct OptionsInput {
    ident: Ident,
    generics: syn::Generics,
    data: Data<Ignored, OptionsField>,
}

#[derive(Debug, FromField)]
#[darling(forward_attrs(opt))]
struct OptionsField {
    ident: Option<Ident>,
    vis: syn::Visibility,
    attrs: Vec<syn::Attribute>,
}

/// What a single `#[opt(..)]` attribute asks for
enum FieldKind {
    /// `#[opt("name,modifier,...")]`
    Tag(LitStr),
    /// `#[opt(flatten)]`
    Flatten,
    /// `#[opt(extra)]`
    Extra,
}

fn parse_opt_attr(attr: &syn::Attribute) -> syn::Result<FieldKind> {
    attr.parse_args_with(|input: ParseStream| {
        if input.peek(LitStr) {
            return Ok(FieldKind::Tag(input.parse()?));
        }
        let ident: Ident = input.parse()?;
        match ident.to_string().as_str() {
            "flatten" => Ok(FieldKind::Flatten),
            "extra" => Ok(FieldKind::Extra),
            _ => Err(syn::Error::new(
                ident.span(),
                "expected a tag string, `flatten` or `extra`",
            )),
        }
    })
}

/// Derive macro for `cmdopt::Options`
///
/// Lists every field carrying an `#[opt]` attribute, in declaration order.
///
/// # Attributes
///
/// - `#[opt("name,modifier,...")]` - Option tag; the field type must implement `cmdopt::FlagValue`.
///   Only `pub` fields are emitted by the encoder.
/// - `#[opt(flatten)]` - Splice in the fields of a nested `Options` value at this position
/// - `#[opt(extra)]` - A `cmdopt::ExtraOpts` list appended after all tagged fields
///
/// Fields without `#[opt]` are ignored.
#[proc_macro_derive(Options, attributes(opt))]
pub fn derive_options(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let parsed = match OptionsInput::from_derive_input(&input) {
        Ok(v) => v,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    let fields = match parsed.data {
        Data::Struct(fields) => fields.fields,
        Data::Enum(_) => unreachable!("darling rejects enums for struct_named"),
    };

    let mut errors = darling::Error::accumulator();
    let mut field_stmts = Vec::new();
    let mut extra_stmts = Vec::new();

    for field in &fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let mut opt_attrs = field.attrs.iter();
        let Some(attr) = opt_attrs.next() else {
            continue;
        };
        if let Some(dup) = opt_attrs.next() {
            errors.push(darling::Error::custom("duplicate #[opt] attribute").with_span(dup));
            continue;
        }

        let kind = match parse_opt_attr(attr) {
            Ok(kind) => kind,
            Err(e) => {
                errors.push(darling::Error::from(e));
                continue;
            }
        };

        let rust_name = ident.to_string();
        match kind {
            FieldKind::Tag(tag) => {
                let exported = matches!(field.vis, syn::Visibility::Public(_));
                field_stmts.push(quote! {
                    fields.push(
                        ::cmdopt::Field::new(#rust_name, #tag, &self.#ident).exported(#exported),
                    );
                });
            }
            FieldKind::Flatten => {
                field_stmts.push(quote! {
                    fields.extend(::cmdopt::Options::fields(&self.#ident));
                });
                extra_stmts.push(quote! {
                    extra.extend(::cmdopt::Options::extra_args(&self.#ident));
                });
            }
            FieldKind::Extra => {
                extra_stmts.push(quote! {
                    extra.extend(
                        ::cmdopt::ExtraOpts::iter(&self.#ident).map(::std::string::String::as_str),
                    );
                });
            }
        }
    }

    if let Err(e) = errors.finish() {
        return TokenStream::from(e.write_errors());
    }

    let struct_name = &parsed.ident;
    let (impl_generics, ty_generics, where_clause) = parsed.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::cmdopt::Options for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::cmdopt::Field<'_>> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::new();
                #(#field_stmts)*
                fields
            }

            fn extra_args(&self) -> ::std::vec::Vec<&str> {
                #[allow(unused_mut)]
                let mut extra = ::std::vec::Vec::new();
                #(#extra_stmts)*
                extra
            }
        }
    };

    TokenStream::from(expanded)
}
