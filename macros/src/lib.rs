//! `#[derive(Payload)]` for the mailroom actor runtime.
//!
//! Enums get a `name()` that returns the active variant, which is what the
//! runtime prints in its `message posted` trace events. Structs keep the
//! default type-name `name()`. Unions are rejected.
//!
//! ```rust,ignore
//! use mailroom::Payload;
//!
//! #[derive(Debug, Payload)]
//! enum Net {
//!     Listen { port: u16 },
//!     Accepted(std::net::TcpStream),
//!     Closed,
//! }
//! // Net::Closed.name() == "Closed"
//! ```
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Variant, parse_macro_input};

#[proc_macro_derive(Payload)]
pub fn derive_payload(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match &input.data {
        Data::Enum(data) => {
            let arms = data.variants.iter().map(variant_arm);
            quote! {
                fn name(&self) -> ::std::borrow::Cow<'static, str> {
                    match self {
                        #(#arms,)*
                    }
                }
            }
        }
        Data::Struct(_) => TokenStream2::new(),
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "Payload can only be derived for enums and structs",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics mailroom::Payload for #ident #ty_generics #where_clause {
            #body
        }
    })
}

fn variant_arm(variant: &Variant) -> TokenStream2 {
    let ident = &variant.ident;
    let name = ident.to_string();
    let fields = match &variant.fields {
        Fields::Unit => TokenStream2::new(),
        Fields::Unnamed(_) => quote! { (..) },
        Fields::Named(_) => quote! { { .. } },
    };
    quote! { Self::#ident #fields => ::std::borrow::Cow::Borrowed(#name) }
}
