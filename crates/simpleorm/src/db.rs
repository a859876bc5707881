mod builder;
pub use builder::Builder;

mod connect;
pub use connect::driver_for_url;

use crate::{
    driver::Connection,
    engine::Engine,
    schema::{self, Schema},
    Error, Instance, Model, Result, Value,
};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared state between all `Db` clones.
struct Shared {
    engine: Engine,
    connection: Mutex<Box<dyn Connection>>,
}

/// A database handle.
///
/// All clones share one connection. Operations run one at a time, in the
/// order they acquire it.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(schema: Arc<Schema>, connection: Box<dyn Connection>) -> Db {
        Db {
            shared: Arc::new(Shared {
                engine: Engine::new(schema),
                connection: Mutex::new(connection),
            }),
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.engine.schema
    }

    /// Returns the registered model mapped to `table`.
    pub fn model(&self, table: &str) -> Result<&Arc<schema::Model>> {
        self.schema().model_by_table(table)
    }

    /// Creates an unsaved instance of the model mapped to `table`.
    pub fn instance<K, V>(
        &self,
        table: &str,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Instance>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        Instance::new(self.model(table)?.clone(), values)
    }

    /// Creates the table for `M`.
    pub async fn create_table<M: Model>(&self) -> Result<()> {
        let model = self.model_for::<M>()?;
        self.create_table_for(model).await
    }

    /// Drops the table for `M`.
    pub async fn drop_table<M: Model>(&self) -> Result<()> {
        let model = self.model_for::<M>()?;
        self.drop_table_for(model).await
    }

    /// Returns the first row whose `field` column equals `value`.
    pub async fn get_one<M: Model>(&self, field: &str, value: impl Into<Value>) -> Result<M> {
        let model = self.model_for::<M>()?;
        let value = value.into();

        let Some(instance) = self
            .select(model, field, value.clone())
            .await?
            .into_iter()
            .next()
        else {
            return Err(Error::record_not_found(format!(
                "table={}; {field}={value}",
                model.table
            )));
        };

        M::load(instance)
    }

    /// Returns every row whose `field` column equals `value`.
    pub async fn get_many<M: Model>(
        &self,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Vec<M>> {
        let model = self.model_for::<M>()?;

        self.select(model, field, value.into())
            .await?
            .into_iter()
            .map(M::load)
            .collect()
    }

    /// Inserts a new row holding the record's supplied fields.
    ///
    /// Saving always inserts. Saving the same record twice stores two rows.
    pub async fn save<M: Model>(&self, record: &M) -> Result<()> {
        let instance = Instance::new(self.model_for::<M>()?.clone(), record.values())?;
        self.save_instance(&instance).await
    }

    /// Deletes the row matching the record's primary key.
    pub async fn delete<M: Model>(&self, record: &M) -> Result<()> {
        let instance = Instance::new(self.model_for::<M>()?.clone(), record.values())?;
        self.delete_instance(&instance).await
    }

    /// Creates the table for a registered model.
    pub async fn create_table_for(&self, model: &schema::Model) -> Result<()> {
        let model = self.check_registered(model)?;
        let mut connection = self.shared.connection.lock().await;
        self.shared
            .engine
            .create_table(&mut **connection, model)
            .await
    }

    /// Drops the table for a registered model.
    pub async fn drop_table_for(&self, model: &schema::Model) -> Result<()> {
        let model = self.check_registered(model)?;
        let mut connection = self.shared.connection.lock().await;
        self.shared
            .engine
            .drop_table(&mut **connection, model, false)
            .await
    }

    /// Returns every row of `model` whose `field` column equals `value`.
    pub async fn select(
        &self,
        model: &Arc<schema::Model>,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<Vec<Instance>> {
        let model = self.check_registered(model)?;
        let mut connection = self.shared.connection.lock().await;
        self.shared
            .engine
            .select(&mut **connection, model, field, value.into())
            .await
    }

    /// Inserts a new row holding the instance's values.
    pub async fn save_instance(&self, instance: &Instance) -> Result<()> {
        let model = self.check_registered(instance.model())?;

        let mut connection = self.shared.connection.lock().await;
        self.shared
            .engine
            .insert(&mut **connection, model, instance)
            .await
    }

    /// Deletes the row matching the instance's primary key.
    pub async fn delete_instance(&self, instance: &Instance) -> Result<()> {
        let model = self.check_registered(instance.model())?;

        let mut connection = self.shared.connection.lock().await;
        self.shared
            .engine
            .delete(&mut **connection, model, instance)
            .await
    }

    /// Drops and recreates the table of every registered model.
    pub async fn reset_db(&self) -> Result<()> {
        let mut connection = self.shared.connection.lock().await;

        for model in self.schema().models() {
            self.shared
                .engine
                .drop_table(&mut **connection, model, true)
                .await?;
            self.shared
                .engine
                .create_table(&mut **connection, model)
                .await?;
        }

        Ok(())
    }

    fn model_for<M: Model>(&self) -> Result<&Arc<schema::Model>> {
        self.schema().model(M::id())
    }

    /// Returns this database's registered copy of `model`.
    fn check_registered(&self, model: &schema::Model) -> Result<&Arc<schema::Model>> {
        let registered = self.schema().model(model.id)?;

        if registered.table != model.table {
            return Err(Error::invalid_schema(format!(
                "model `{}` does not belong to this database; table={}",
                model.name, model.table
            )));
        }

        Ok(registered)
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("engine", &self.shared.engine)
            .finish()
    }
}
