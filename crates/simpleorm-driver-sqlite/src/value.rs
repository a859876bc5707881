use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use simpleorm_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Reads the named column of a row, given the type of the field it
    /// belongs to.
    pub fn from_sql(row: &Row, column: &str, ty: stmt::Type) -> Result<Self> {
        let value: SqlValue = row.get(column).map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => CoreValue::Null,
            SqlValue::Integer(value) => match ty {
                stmt::Type::I64 => CoreValue::I64(value),
                stmt::Type::String => CoreValue::String(value.to_string()),
            },
            SqlValue::Text(value) => match ty {
                stmt::Type::String => CoreValue::String(value),
                stmt::Type::I64 => {
                    return Err(Error::type_conversion(CoreValue::String(value), "i64"))
                }
            },
            value => {
                return Err(simpleorm_core::err!(
                    "unsupported SQLite value for {ty:?} column; value={value:?}"
                ))
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
