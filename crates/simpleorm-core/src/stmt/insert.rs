use super::{Statement, ValueRecord};
use crate::schema::{FieldId, ModelId};

/// `INSERT INTO <table>(<columns>) VALUES (<placeholders>)`
///
/// Only the columns that were given a value are listed. Omitted columns take
/// whatever the table definition provides (NULL or the auto-increment value).
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub model: ModelId,

    /// Columns being set, in the order the values were supplied
    pub columns: Vec<FieldId>,

    /// One value per column
    pub values: ValueRecord,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
