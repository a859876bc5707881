mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldId, FieldTy};

mod model;
pub use model::{Model, ModelBuilder, ModelId};

use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// The registry of every model known to a database handle.
///
/// Built once by [`Builder`] and shared, read-only, by every operation.
#[derive(Debug, Default)]
pub struct Schema {
    models: IndexMap<ModelId, Arc<Model>>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Get a model by ID
    pub fn model(&self, id: ModelId) -> Result<&Arc<Model>> {
        self.models
            .get(&id)
            .ok_or_else(|| Error::invalid_schema(format!("model not registered; id={id:?}")))
    }

    /// Get a model by the name of the table it maps to
    pub fn model_by_table(&self, table: &str) -> Result<&Arc<Model>> {
        self.models
            .values()
            .find(|model| model.table == table)
            .ok_or_else(|| {
                Error::invalid_schema(format!("no model registered for table `{table}`"))
            })
    }

    /// Get a field by ID
    ///
    /// # Panics
    ///
    /// Panics if the field does not belong to a registered model. Field IDs
    /// are only ever produced by the schema itself.
    pub fn field(&self, id: FieldId) -> &Field {
        let model = self
            .models
            .get(&id.model)
            .unwrap_or_else(|| panic!("invalid field ID; id={id:?}"));
        model.field_by_id(id)
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Arc<Model>> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
