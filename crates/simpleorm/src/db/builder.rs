use super::{connect, Db};
use crate::{driver::Driver, schema, Model, Result};

use simpleorm_core::Schema;
use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Model definitions, checked when the schema is built
    models: Vec<Result<schema::Model>>,

    /// Schema builder
    core: schema::Builder,
}

impl Builder {
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(T::schema());
        self
    }

    /// Registers a model described at runtime.
    pub fn register_model(&mut self, model: schema::Model) -> &mut Self {
        self.models.push(Ok(model));
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    pub fn build_schema(&mut self) -> Result<Schema> {
        for model in self.models.drain(..) {
            self.core.register(model?);
        }

        self.core.build()
    }

    /// Connects to the database at `url`.
    ///
    /// The scheme picks the driver: `mysql://..` or `sqlite:..`.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = connect::driver_for_url(url)?;
        self.build_boxed(driver).await
    }

    /// Connects to a MySQL server.
    pub async fn connect_mysql(
        &mut self,
        host: &str,
        user: &str,
        password: &str,
        database: &str,
    ) -> Result<Db> {
        let url = connect::mysql_url(host, user, password, database)?;
        self.connect(url.as_str()).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_boxed(Box::new(driver)).await
    }

    async fn build_boxed(&mut self, driver: Box<dyn Driver>) -> Result<Db> {
        let schema = Arc::new(self.build_schema()?);
        let connection = driver.connect().await?;

        log::debug!("connected; driver={driver:?}; models={}", schema.len());

        Ok(Db::new(schema, connection))
    }
}
