use crate::{schema::ModelId, stmt};

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create the table for a model
    CreateTable(CreateTable),

    /// Drop the table for a model
    DropTable(DropTable),

    /// Execute a data statement
    QuerySql(QuerySql),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    pub model: ModelId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropTable {
    pub model: ModelId,

    /// Adds an `IF EXISTS` clause
    pub if_exists: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySql {
    pub stmt: stmt::Statement,
}

impl Operation {
    pub fn is_query_sql(&self) -> bool {
        matches!(self, Operation::QuerySql(_))
    }

    pub fn as_query_sql(&self) -> Option<&QuerySql> {
        match self {
            Operation::QuerySql(op) => Some(op),
            _ => None,
        }
    }
}

impl From<CreateTable> for Operation {
    fn from(value: CreateTable) -> Self {
        Operation::CreateTable(value)
    }
}

impl From<DropTable> for Operation {
    fn from(value: DropTable) -> Self {
        Operation::DropTable(value)
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Operation::QuerySql(value)
    }
}

impl From<stmt::Statement> for Operation {
    fn from(stmt: stmt::Statement) -> Self {
        Operation::QuerySql(QuerySql { stmt })
    }
}
