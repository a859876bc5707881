mod methods;
mod model;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for simpleorm types
    simpleorm: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impl = self.expand_model_impl();
        let model_methods = self.expand_model_methods();

        wrap_in_const(quote! {
            #model_impl
            #model_methods
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        simpleorm: quote!(_simpleorm::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use simpleorm as _simpleorm;
            #code
        };
    }
}
