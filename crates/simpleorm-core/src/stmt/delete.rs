use super::{Filter, Statement};
use crate::schema::ModelId;

/// `DELETE FROM <table> WHERE <column>=?`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Model whose table rows are deleted from
    pub model: ModelId,

    /// Rows to delete
    pub filter: Filter,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
