use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let simpleorm = &self.simpleorm;
        let model_ident = &self.model.ident;
        let model_name = syn::LitStr::new(&model_ident.to_string(), model_ident.span());
        let table = &self.model.table;
        let schema_fields = self.expand_schema_fields();
        let load_fields = self.expand_load_fields();
        let push_values = self.expand_push_values();

        quote! {
            impl #simpleorm::Model for #model_ident {
                fn id() -> #simpleorm::ModelId {
                    static ID: #simpleorm::OnceLock<#simpleorm::ModelId> = #simpleorm::OnceLock::new();
                    *ID.get_or_init(#simpleorm::ModelId::generate)
                }

                fn schema() -> #simpleorm::Result<#simpleorm::schema::Model> {
                    #simpleorm::schema::Model::builder(#model_name, #table)
                        .id(<Self as #simpleorm::Model>::id())
                        #( #schema_fields )*
                        .build()
                }

                fn load(mut instance: #simpleorm::Instance) -> #simpleorm::Result<Self> {
                    Ok(Self {
                        #( #load_fields )*
                    })
                }

                fn values(&self) -> #simpleorm::Vec<(&'static str, #simpleorm::Value)> {
                    let mut values = #simpleorm::Vec::new();
                    #( #push_values )*
                    values
                }
            }
        }
    }

    fn expand_schema_fields(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let simpleorm = &self.simpleorm;

        self.model.fields.iter().map(move |field| {
            let column = &field.column;
            let ty = &field.ty;
            let primary = field.is_key().then(|| quote!(.primary()));

            quote! {
                .field(
                    #simpleorm::Field::new(#column, <#ty as #simpleorm::Primitive>::FIELD_TY)
                    #primary
                )
            }
        })
    }

    fn expand_load_fields(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let simpleorm = &self.simpleorm;

        self.model.fields.iter().map(move |field| {
            let ident = &field.ident;
            let column = &field.column;

            quote! {
                #ident: #simpleorm::Primitive::load(
                    instance.take(#column).unwrap_or_default()
                )?,
            }
        })
    }

    fn expand_push_values(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let simpleorm = &self.simpleorm;

        self.model.fields.iter().map(move |field| {
            let ident = &field.ident;
            let column = &field.column;

            quote! {
                if let #simpleorm::Option::Some(value) = #simpleorm::Primitive::to_value(&self.#ident) {
                    values.push((#column, value));
                }
            }
        })
    }
}
