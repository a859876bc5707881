use crate::{schema, Error, Result, Value};

use indexmap::IndexMap;
use std::sync::Arc;

/// A record of a registered model, held as column values keyed by name.
///
/// An instance only holds the columns it was given. Columns never set have
/// no value, which is different from holding [`Value::Null`]: unset columns
/// are left out of inserts entirely.
#[derive(Debug, Clone)]
pub struct Instance {
    model: Arc<schema::Model>,
    values: IndexMap<String, Value>,
}

impl Instance {
    /// Creates an instance from `(column, value)` pairs.
    ///
    /// Fails if a column is not declared on the model or a value cannot be
    /// stored in its column.
    pub fn new<K, V>(
        model: Arc<schema::Model>,
        values: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Instance>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut instance = Instance {
            model,
            values: IndexMap::new(),
        };

        for (name, value) in values {
            instance.set(name.as_ref(), value)?;
        }

        Ok(instance)
    }

    /// Builds an instance from a row returned for the given columns.
    pub(crate) fn from_row(
        model: Arc<schema::Model>,
        returning: &[schema::FieldId],
        row: impl IntoIterator<Item = Value>,
    ) -> Instance {
        let values = returning
            .iter()
            .zip(row)
            .map(|(id, value)| (model.field_by_id(*id).name.clone(), value))
            .collect();

        Instance { model, values }
    }

    pub fn model(&self) -> &Arc<schema::Model> {
        &self.model
    }

    /// Returns the value held for `name`, or `None` if it was never set.
    pub fn get(&self, name: &str) -> Result<Option<&Value>> {
        self.model.resolve_field(name)?;
        Ok(self.values.get(name))
    }

    /// Sets a column's value, replacing any earlier one.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let field = self
            .model
            .field(name)
            .ok_or_else(|| Error::unknown_field(&self.model.table, name))?;

        if !value.is_a(field.ty.value_ty()) {
            return Err(Error::type_conversion(value, field.render_type()));
        }

        self.values.insert(field.name.clone(), value);
        Ok(())
    }

    /// Removes and returns the value held for `name`.
    pub fn take(&mut self, name: &str) -> Option<Value> {
        self.values.shift_remove(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The primary key value, if one is held and it is not null.
    pub fn primary_key(&self) -> Option<&Value> {
        self.values
            .get(&self.model.primary_field().name)
            .filter(|value| !value.is_null())
    }

    /// Columns holding a value, in the order they were set.
    pub fn values(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (&name[..], value))
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.model.id == other.model.id && self.values == other.values
    }
}
