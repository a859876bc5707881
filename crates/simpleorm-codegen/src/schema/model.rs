use super::{ErrorSet, Field, ModelAttr};

#[derive(Debug)]
pub(crate) struct Model {
    /// Model visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields
    pub(crate) fields: Vec<Field>,

    /// Index of the `#[key]` field
    pub(crate) primary_key: usize,

    /// Table the model maps to
    pub(crate) table: syn::LitStr,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut model_attr = ModelAttr::default();
        let mut fields = vec![];
        let mut errs = ErrorSet::new();

        if let Err(err) = model_attr.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in &node.named {
            match Field::from_ast(node) {
                Ok(field) => {
                    if let Some(other) = fields
                        .iter()
                        .find(|other: &&Field| other.column.value() == field.column.value())
                    {
                        errs.push(syn::Error::new_spanned(
                            &field.column,
                            format!(
                                "column `{}` is already mapped by field `{}`",
                                field.column.value(),
                                other.ident
                            ),
                        ));
                    }

                    fields.push(field);
                }
                Err(err) => errs.push(err),
            }
        }

        let keys: Vec<_> = fields.iter().filter(|field| field.is_key()).collect();

        if keys.len() > 1 {
            for field in &keys[1..] {
                errs.push(syn::Error::new_spanned(
                    &field.attrs.key,
                    "model must have exactly one #[key] field",
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let Some(primary_key) = fields.iter().position(Field::is_key) else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "model must have a field annotated with #[key]",
            ));
        };

        let Some(table) = model_attr.table else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "model must have a `#[table = \"table_name\"]` attribute",
            ));
        };

        Ok(Model {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            primary_key,
            table,
        })
    }

    pub(crate) fn primary_key_field(&self) -> &Field {
        &self.fields[self.primary_key]
    }
}
