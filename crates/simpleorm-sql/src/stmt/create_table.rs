use super::{ColumnDef, Name, Statement};

use simpleorm_core::schema::Model;

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions, in field declaration order
    pub columns: Vec<ColumnDef>,

    /// Primary key column
    pub primary_key: Name,
}

impl Statement {
    pub fn create_table(model: &Model) -> Self {
        CreateTable {
            name: Name::from(&model.table[..]),
            columns: model.fields.iter().map(ColumnDef::from_schema).collect(),
            primary_key: Name::from(&model.primary_field().name[..]),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
