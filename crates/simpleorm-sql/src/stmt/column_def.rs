use super::Name;

use simpleorm_core::schema::{Field, FieldTy};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Column name
    pub name: Name,

    /// Column type
    pub ty: FieldTy,

    /// True for the primary key column, which is also `NOT NULL` and
    /// auto-incrementing
    pub primary: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(field: &Field) -> ColumnDef {
        ColumnDef {
            name: Name::from(&field.name[..]),
            ty: field.ty,
            primary: field.primary,
        }
    }
}
