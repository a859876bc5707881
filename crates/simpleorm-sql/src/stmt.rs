mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod name;
pub use name::Name;

pub use simpleorm_core::stmt::*;

/// A statement the serializer knows how to write: the data statements from
/// `simpleorm_core` plus table DDL.
#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    Delete(Delete),
    Insert(Insert),
    Select(Select),
}

impl Statement {
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

impl From<simpleorm_core::stmt::Statement> for Statement {
    fn from(value: simpleorm_core::stmt::Statement) -> Self {
        match value {
            simpleorm_core::stmt::Statement::Delete(stmt) => Statement::Delete(stmt),
            simpleorm_core::stmt::Statement::Insert(stmt) => Statement::Insert(stmt),
            simpleorm_core::stmt::Statement::Select(stmt) => Statement::Select(stmt),
        }
    }
}
