mod value;
pub(crate) use value::Value;

use rusqlite::Connection as RusqliteConnection;
use simpleorm_core::{
    async_trait,
    driver::{operation::DropTable, Driver, Operation, Response},
    schema::Schema,
    stmt::{self, ValueRecord},
    Error, Result,
};
use simpleorm_sql as sql;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use url::Url;

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    async fn connect(&self) -> Result<Box<dyn simpleorm_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

/// A single open SQLite database handle.
#[derive(Debug)]
pub struct Connection {
    db: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        RusqliteConnection::open_in_memory()
            .map(|db| Connection { db })
            .map_err(Error::driver_operation_failed)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        RusqliteConnection::open(path)
            .map(|db| Connection { db })
            .map_err(Error::driver_operation_failed)
    }

    /// Runs a statement that returns no rows, reporting the affected count.
    fn run(&self, sql: &str, params: &[Value]) -> Result<u64> {
        let mut prepared = self
            .db
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let count = prepared
            .execute(rusqlite::params_from_iter(params))
            .map_err(Error::driver_operation_failed)?;

        Ok(count as u64)
    }

    /// Runs a select and decodes each row using the returned fields' types.
    fn query(
        &self,
        schema: &Schema,
        select: &stmt::Select,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<ValueRecord>> {
        let mut prepared = self
            .db
            .prepare_cached(sql)
            .map_err(Error::driver_operation_failed)?;

        let mut rows = prepared
            .query(rusqlite::params_from_iter(params))
            .map_err(Error::driver_operation_failed)?;

        let mut records = vec![];

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let record = select
                .returning
                .iter()
                .map(|id| {
                    let field = schema.field(*id);
                    Value::from_sql(row, &field.name, field.ty.value_ty()).map(Value::into_inner)
                })
                .collect::<Result<Vec<_>>>()?;

            records.push(ValueRecord::from_vec(record));
        }

        Ok(records)
    }
}

fn lower(schema: &Schema, op: Operation) -> Result<sql::Statement> {
    Ok(match op {
        Operation::CreateTable(op) => sql::Statement::create_table(schema.model(op.model)?),
        Operation::DropTable(DropTable { model, if_exists: true }) => {
            sql::Statement::drop_table_if_exists(schema.model(model)?)
        }
        Operation::DropTable(DropTable { model, .. }) => {
            sql::Statement::drop_table(schema.model(model)?)
        }
        Operation::QuerySql(op) => op.stmt.into(),
    })
}

#[async_trait]
impl simpleorm_core::driver::Connection for Connection {
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        let statement = lower(schema, op)?;

        let mut params: Vec<stmt::Value> = vec![];
        let sql_str = sql::Serializer::sqlite(schema).serialize(&statement, &mut params);
        log::debug!("sql; {sql_str}; params={params:?}");

        let params: Vec<Value> = params.into_iter().map(Value::from).collect();

        match statement.as_select() {
            Some(select) => self
                .query(schema, select, &sql_str, &params)
                .map(Response::values),
            None => self.run(&sql_str, &params).map(Response::count),
        }
    }
}
