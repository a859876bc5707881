mod value;
pub(crate) use value::Value;

use mysql_async::{prelude::Queryable, Conn, Opts};
use simpleorm_core::{
    async_trait,
    driver::{operation::DropTable, Driver, Operation, Response},
    schema::Schema,
    stmt::{self, ValueRecord},
    Error, Result,
};
use simpleorm_sql as sql;
use std::sync::Arc;
use url::Url;

#[derive(Debug)]
pub struct MySQL {
    opts: Opts,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `mysql` scheme; url={}",
                url_str
            )));
        }

        url.host_str().ok_or_else(|| {
            Error::invalid_connection_url(format!("missing host in connection URL; url={}", url))
        })?;

        if url.path().is_empty() || url.path() == "/" {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={}",
                url
            )));
        }

        let opts = Opts::from_url(url.as_ref()).map_err(Error::driver_operation_failed)?;

        Ok(Self { opts })
    }
}

impl From<Opts> for MySQL {
    fn from(opts: Opts) -> Self {
        Self { opts }
    }
}

#[async_trait]
impl Driver for MySQL {
    async fn connect(&self) -> Result<Box<dyn simpleorm_core::driver::Connection>> {
        let conn = Conn::new(self.opts.clone())
            .await
            .map_err(Error::driver_operation_failed)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl simpleorm_core::driver::Connection for Connection {
    async fn exec(&mut self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        let sql: sql::Statement = match op {
            Operation::CreateTable(op) => sql::Statement::create_table(schema.model(op.model)?),
            Operation::DropTable(DropTable { model, if_exists }) => {
                let model = schema.model(model)?;
                if if_exists {
                    sql::Statement::drop_table_if_exists(model)
                } else {
                    sql::Statement::drop_table(model)
                }
            }
            Operation::QuerySql(op) => op.stmt.into(),
        };

        let mut params: Vec<stmt::Value> = Vec::new();
        let sql_as_str = sql::Serializer::mysql(schema).serialize(&sql, &mut params);
        log::debug!("sql; {sql_as_str}; params={params:?}");

        let args = params.into_iter().map(Value::from).collect::<Vec<_>>();
        let args = mysql_async::Params::Positional(args.iter().map(Value::to_mysql).collect());

        let Some(select) = sql.as_select() else {
            let result = self
                .conn
                .exec_iter(sql_as_str.as_str(), args)
                .await
                .map_err(Error::driver_operation_failed)?;
            let count = result.affected_rows();
            result
                .drop_result()
                .await
                .map_err(Error::driver_operation_failed)?;

            return Ok(Response::count(count));
        };

        let rows: Vec<mysql_async::Row> = self
            .conn
            .exec(sql_as_str.as_str(), args)
            .await
            .map_err(Error::driver_operation_failed)?;

        let mut records = Vec::with_capacity(rows.len());

        for mut row in rows {
            let mut values = Vec::with_capacity(select.returning.len());

            // Columns are read by name, so the row layout does not need to
            // match the field declaration order.
            for id in &select.returning {
                let field = schema.field(*id);
                let value: mysql_async::Value =
                    row.take(field.name.as_str()).ok_or_else(|| {
                        Error::driver_operation_failed(std::io::Error::new(
                            std::io::ErrorKind::InvalidData,
                            format!("column `{}` missing from result set", field.name),
                        ))
                    })?;

                values.push(Value::from_sql(value, field.ty.value_ty())?.into_inner());
            }

            records.push(ValueRecord::from_vec(values));
        }

        Ok(Response::values(records))
    }
}
