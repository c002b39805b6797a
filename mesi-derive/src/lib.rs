//! Derive macro implementation used by `mesi-core`.
//!
//! `mesi-derive` is an implementation detail of this workspace. The `Dimension` derive expands in
//! terms of `crate::Dimension` and `crate::DimVector`, so it is intended to be used by `mesi-core`
//! (or by crates that expose an identical crate-root API). Other crates point it at the right path
//! with `crate = some::path`.
//!
//! Most users should depend on `mesi` instead and use the predefined dimensions.
//!
//! # Generated impls
//!
//! For a tag type `MyDim`, the derive implements `crate::Dimension for MyDim` with a constant
//! dimension vector.
//!
//! # Attributes
//!
//! The derive reads a required `#[dimension(...)]` attribute listing nonzero exponents by base
//! dimension name: `length`, `time`, `mass`, `current`, `temperature`, `amount`,
//! `luminous_intensity`. An exponent is an integer (`time = -2`) or a fraction in a string
//! (`current = "1/2"`). Fractions are reduced here, so `"2/4"` and `"1/2"` are the same exponent.
//! Omitted dimensions have exponent zero.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, DeriveInput, Ident, LitInt, LitStr, Path, Token,
};

/// Base dimension names in canonical order.
const NAMES: [&str; 7] = [
    "length",
    "time",
    "mass",
    "current",
    "temperature",
    "amount",
    "luminous_intensity",
];

/// Derive `crate::Dimension` from a `#[dimension(...)]` attribute.
///
/// This macro is intended for use by `mesi-core`.
#[proc_macro_derive(Dimension, attributes(dimension))]
pub fn derive_dimension(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_dimension_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_dimension_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let attr = parse_dimension_attribute(&input.attrs)?;
    let krate = attr
        .krate
        .unwrap_or_else(|| syn::parse_quote!(crate));
    let pairs = attr.exponents.iter().map(|(num, den)| quote!((#num, #den)));

    let expanded = quote! {
        impl #impl_generics #krate::Dimension for #name #ty_generics #where_clause {
            const VECTOR: #krate::DimVector = #krate::DimVector::from_reduced([#(#pairs),*]);
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[dimension(...)]` attribute.
struct DimensionAttribute {
    /// Reduced `(numerator, denominator)` per base dimension, canonical order.
    exponents: [(i32, i32); 7],
    /// Path of the crate exposing `Dimension` and `DimVector`.
    krate: Option<Path>,
}

/// One comma-separated entry of the attribute.
enum Entry {
    /// `crate = some::path`
    Crate(Path),
    /// `name = exponent`
    Exponent(Ident, (i32, i32)),
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![crate]) {
            input.parse::<Token![crate]>()?;
            input.parse::<Token![=]>()?;
            return Ok(Entry::Crate(input.parse()?));
        }
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let exponent = parse_exponent(input)?;
        Ok(Entry::Exponent(ident, exponent))
    }
}

impl Parse for DimensionAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut exponents = [(0i32, 1i32); 7];
        let mut seen = [false; 7];
        let mut krate: Option<Path> = None;

        for entry in Punctuated::<Entry, Token![,]>::parse_terminated(input)? {
            match entry {
                Entry::Crate(path) => krate = Some(path),
                Entry::Exponent(ident, exponent) => {
                    let key = ident.to_string();
                    let index = NAMES.iter().position(|n| *n == key).ok_or_else(|| {
                        syn::Error::new(ident.span(), format!("unknown base dimension `{}`", key))
                    })?;
                    if seen[index] {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("duplicate exponent for `{}`", key),
                        ));
                    }
                    seen[index] = true;
                    exponents[index] = exponent;
                }
            }
        }

        Ok(DimensionAttribute { exponents, krate })
    }
}

/// Parses `-2`, `3` or `"n/d"` and reduces the fraction.
fn parse_exponent(input: ParseStream) -> syn::Result<(i32, i32)> {
    if input.peek(LitStr) {
        let lit: LitStr = input.parse()?;
        let text = lit.value();
        let (num, den) = match text.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (text.trim(), "1"),
        };
        let parse = |s: &str| {
            s.parse::<i32>().map_err(|_| {
                syn::Error::new(lit.span(), format!("invalid exponent fraction `{}`", text))
            })
        };
        reduce(parse(num)?, parse(den)?, lit.span())
    } else {
        let negative = input.peek(Token![-]);
        if negative {
            input.parse::<Token![-]>()?;
        }
        let lit: LitInt = input.parse()?;
        let magnitude: i64 = lit.base10_parse()?;
        let value = if negative { -magnitude } else { magnitude };
        let value = i32::try_from(value)
            .map_err(|_| syn::Error::new(lit.span(), "exponent does not fit in i32"))?;
        Ok((value, 1))
    }
}

/// Lowest terms with a positive denominator.
fn reduce(num: i32, den: i32, span: Span) -> syn::Result<(i32, i32)> {
    if den == 0 {
        return Err(syn::Error::new(span, "exponent denominator must be non-zero"));
    }
    let (mut n, mut d) = (i64::from(num), i64::from(den));
    if d < 0 {
        n = -n;
        d = -d;
    }
    let g = gcd(n.unsigned_abs(), d.unsigned_abs()) as i64;
    let (n, d) = if g == 0 { (0, 1) } else { (n / g, d / g) };
    match (i32::try_from(n), i32::try_from(d)) {
        (Ok(n), Ok(d)) => Ok((n, d)),
        _ => Err(syn::Error::new(span, "exponent does not fit in i32")),
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

fn parse_dimension_attribute(attrs: &[Attribute]) -> syn::Result<DimensionAttribute> {
    for attr in attrs {
        if attr.path().is_ident("dimension") {
            return attr.parse_args::<DimensionAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[dimension(...)] attribute",
    ))
}
