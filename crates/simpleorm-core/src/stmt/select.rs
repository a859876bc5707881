use super::{Filter, Statement};
use crate::schema::{FieldId, ModelId};

/// `SELECT <columns> FROM <table> WHERE <column>=?`
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub model: ModelId,

    /// Columns to return. Drivers return each row's values in this order,
    /// reading them by column name.
    pub returning: Vec<FieldId>,

    pub filter: Filter,
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
