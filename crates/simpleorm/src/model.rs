use crate::{schema, Instance, Result, Value};

use simpleorm_core::schema::ModelId;

/// A Rust type mapped to one database table.
///
/// Implemented by `#[derive(Model)]`.
pub trait Model: Sized + Send + Sync + 'static {
    /// Unique identifier for this model within the process.
    fn id() -> ModelId;

    /// Describes the model's table and fields.
    fn schema() -> Result<schema::Model>;

    /// Load an instance of the model from a row read back from the database.
    fn load(instance: Instance) -> Result<Self>;

    /// The values supplied on this instance, keyed by column name, in
    /// declaration order. Fields holding no value are left out.
    fn values(&self) -> Vec<(&'static str, Value)>;
}
