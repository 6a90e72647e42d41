use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, GenericParam, Generics};

/// Derives `outcome::FailurePayload` for a type that is itself an error.
///
/// The generated implementation reports the value through `as_error`, so
/// the raising extractors re-raise it unchanged instead of wrapping it.
/// Coercing `&Self` to `&dyn Error` only compiles when the deriving type
/// implements `std::error::Error`, which keeps the derive honest.
#[proc_macro_derive(FailurePayload)]
pub fn derive_failure_payload(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Used in the quasi-quotation below as `#name`.
    let name = input.ident;

    // Payloads are rendered into diagnostics, so a structure can only be
    // error-shaped; there is no sensible reading of a union here.
    if let Data::Union(data) = &input.data {
        return quote_spanned!(data.union_token.span() =>
            compile_error!("FailurePayload can only be derived for structs and enums");
        )
        .into();
    }

    // Add a bound `T: Display` to every type parameter T.
    let generics = add_trait_bounds(input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Build the output, possibly using quasi-quotation
    let expanded = quote! {
        // The generated impl.
        impl #impl_generics outcome::FailurePayload for #name #ty_generics #where_clause {
            fn as_error(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                ::std::option::Option::Some(self)
            }
        }
    };

    // Hand the output tokens back to the compiler.
    proc_macro::TokenStream::from(expanded)
}

// Add a bound `T: Display` to every type parameter T.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in &mut generics.params {
        if let GenericParam::Type(ref mut type_param) = *param {
            type_param.bounds.push(parse_quote!(::std::fmt::Display));
        }
    }
    generics
}
