mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;

mod value_record;
pub use value_record::ValueRecord;

use crate::schema::ModelId;

/// A data statement against a single model's table.
///
/// Table and column names are not stored in the statement. They are resolved
/// against the schema when the statement is serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
}

impl Statement {
    /// The model whose table the statement targets.
    pub fn model(&self) -> ModelId {
        match self {
            Statement::Delete(stmt) => stmt.model,
            Statement::Insert(stmt) => stmt.model,
            Statement::Select(stmt) => stmt.model,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(_))
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Statement::Select(stmt) => Some(stmt),
            _ => None,
        }
    }
}
