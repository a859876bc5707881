use super::Expand;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

impl Expand<'_> {
    pub(super) fn expand_model_methods(&self) -> TokenStream {
        let simpleorm = &self.simpleorm;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let key = self.model.primary_key_field();
        let key_column = &key.column;
        let field_getters = self.expand_field_getters();

        quote! {
            impl #model_ident {
                /// Creates the model's table.
                #vis async fn create_table(db: &#simpleorm::Db) -> #simpleorm::Result<()> {
                    db.create_table::<Self>().await
                }

                /// Drops the model's table.
                #vis async fn drop_table(db: &#simpleorm::Db) -> #simpleorm::Result<()> {
                    db.drop_table::<Self>().await
                }

                /// Returns the first record whose `field` column equals `value`.
                #vis async fn get_one(
                    db: &#simpleorm::Db,
                    field: &str,
                    value: impl #simpleorm::Into<#simpleorm::Value>,
                ) -> #simpleorm::Result<Self> {
                    db.get_one::<Self>(field, value).await
                }

                /// Returns every record whose `field` column equals `value`.
                #vis async fn get_many(
                    db: &#simpleorm::Db,
                    field: &str,
                    value: impl #simpleorm::Into<#simpleorm::Value>,
                ) -> #simpleorm::Result<#simpleorm::Vec<Self>> {
                    db.get_many::<Self>(field, value).await
                }

                /// Inserts the record as a new row.
                #vis async fn save(&self, db: &#simpleorm::Db) -> #simpleorm::Result<()> {
                    db.save(self).await
                }

                #[doc = concat!("Deletes the row whose `", #key_column, "` matches this record.")]
                #vis async fn delete(&self, db: &#simpleorm::Db) -> #simpleorm::Result<()> {
                    db.delete(self).await
                }

                #( #field_getters )*
            }
        }
    }

    fn expand_field_getters(&self) -> impl Iterator<Item = TokenStream> + '_ {
        let simpleorm = &self.simpleorm;
        let vis = &self.model.vis;

        self.model.fields.iter().map(move |field| {
            let column = &field.column;
            let get_by = format_ident!("get_by_{}", field.name(), span = field.ident.span());
            let get_many_by =
                format_ident!("get_many_by_{}", field.name(), span = field.ident.span());

            quote! {
                #vis async fn #get_by(
                    db: &#simpleorm::Db,
                    value: impl #simpleorm::Into<#simpleorm::Value>,
                ) -> #simpleorm::Result<Self> {
                    db.get_one::<Self>(#column, value).await
                }

                #vis async fn #get_many_by(
                    db: &#simpleorm::Db,
                    value: impl #simpleorm::Into<#simpleorm::Value>,
                ) -> #simpleorm::Result<#simpleorm::Vec<Self>> {
                    db.get_many::<Self>(#column, value).await
                }
            }
        })
    }
}
