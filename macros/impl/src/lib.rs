//! Procedural macro implementations backing `primer-macros`.
//!
//! Use the re-exports in `primer-macros` rather than depending on this crate
//! directly: the expansions refer to `::primer_macros::tracing` and
//! `::primer_macros::tracing_subscriber`.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse_macro_input, spanned::Spanned, AttributeArgs, Ident, ItemFn, Lit, Meta, NestedMeta,
};

/// Levels accepted by `level = "..."`.
const LEVELS: [&str; 5] = ["TRACE", "DEBUG", "INFO", "WARN", "ERROR"];

/// Level used when none is provided.
const DEFAULT_LEVEL: &str = "DEBUG";

/// Run a test with a `tracing` subscriber that writes to the test harness.
///
/// Logs are captured per test (and only shown on failure) because the
/// subscriber uses the test writer. The maximum level defaults to `DEBUG`
/// and can be overridden:
///
/// ```ignore
/// use primer_macros::test_traced;
///
/// #[test_traced(level = "INFO")]
/// fn test_info_level() {
///     tracing::info!("shown");
///     tracing::debug!("filtered");
/// }
/// ```
#[proc_macro_attribute]
pub fn test_traced(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AttributeArgs);
    let input = parse_macro_input!(item as ItemFn);

    // Parse the requested level
    let mut level = DEFAULT_LEVEL.to_string();
    for arg in args {
        match arg {
            NestedMeta::Meta(Meta::NameValue(nv)) if nv.path.is_ident("level") => match nv.lit {
                Lit::Str(lit) => {
                    let value = lit.value().to_uppercase();
                    if !LEVELS.contains(&value.as_str()) {
                        return syn::Error::new(
                            lit.span(),
                            format!("invalid level `{}`; expected one of {:?}", value, LEVELS),
                        )
                        .to_compile_error()
                        .into();
                    }
                    level = value;
                }
                other => {
                    return syn::Error::new(other.span(), "level must be a string literal")
                        .to_compile_error()
                        .into();
                }
            },
            other => {
                return syn::Error::new(other.span(), "unsupported argument; expected `level`")
                    .to_compile_error()
                    .into();
            }
        }
    }
    let level = Ident::new(&level, Span::call_site());

    // Rebuild the function with a scoped subscriber around its body
    let attrs = &input.attrs;
    let vis = &input.vis;
    let name = &input.sig.ident;
    let output = &input.sig.output;
    let block = &input.block;
    let expanded = quote! {
        #[test]
        #(#attrs)*
        #vis fn #name() #output {
            let subscriber = ::primer_macros::tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(::primer_macros::tracing::Level::#level)
                .with_line_number(true)
                .finish();
            let dispatcher = ::primer_macros::tracing::Dispatch::new(subscriber);
            ::primer_macros::tracing::dispatcher::with_default(&dispatcher, || #block)
        }
    };
    TokenStream::from(expanded)
}
