use super::ErrorSet;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Rust field identifier
    pub(crate) ident: syn::Ident,

    /// Database column name
    pub(crate) column: syn::LitStr,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Column name given with `#[column("name")]`
    pub(crate) column: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    match attr.parse_args::<syn::LitStr>() {
                        Ok(lit) if lit.value().is_empty() => errs.push(syn::Error::new_spanned(
                            lit,
                            "column name must not be empty",
                        )),
                        Ok(lit) => attrs.column = Some(lit),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let column = attrs
            .column
            .clone()
            .unwrap_or_else(|| syn::LitStr::new(&unraw(ident), ident.span()));

        Ok(Field {
            attrs,
            ident: ident.clone(),
            column,
            ty: field.ty.clone(),
        })
    }

    pub(crate) fn is_key(&self) -> bool {
        self.attrs.key.is_some()
    }

    /// Identifier with any `r#` prefix removed, for building method names.
    pub(crate) fn name(&self) -> String {
        unraw(&self.ident)
    }
}

fn unraw(ident: &syn::Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(name) => name.to_string(),
        None => name,
    }
}
