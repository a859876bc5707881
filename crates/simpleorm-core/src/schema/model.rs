use super::{Field, FieldId};
use crate::{Error, Result};

use indexmap::IndexSet;

/// Metadata describing one model and the table it maps to.
#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model
    pub id: ModelId,

    /// Name of the model type
    pub name: String,

    /// Name of the database table
    pub table: String,

    /// Declared fields, in declaration order
    pub fields: IndexSet<Field>,

    /// Index of the primary key field within `fields`
    pub primary: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl ModelId {
    /// Generates a model ID that is unique for the life of the process.
    pub fn generate() -> ModelId {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static NEXT_MODEL_ID: AtomicUsize = AtomicUsize::new(0);

        ModelId(NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Collects a model's fields and checks its primary key.
#[derive(Debug)]
pub struct ModelBuilder {
    id: Option<ModelId>,
    name: String,
    table: String,
    fields: Vec<Field>,
}

impl Model {
    pub fn builder(name: impl Into<String>, table: impl Into<String>) -> ModelBuilder {
        ModelBuilder {
            id: None,
            name: name.into(),
            table: table.into(),
            fields: vec![],
        }
    }

    /// Returns the declared field with the given name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.fields.get_index_of(name).map(|index| FieldId {
            model: self.id,
            index,
        })
    }

    /// Like [`Model::field_id`], failing with an unknown field error.
    pub fn resolve_field(&self, name: &str) -> Result<FieldId> {
        self.field_id(name)
            .ok_or_else(|| Error::unknown_field(&self.table, name))
    }

    pub fn field_by_id(&self, id: FieldId) -> &Field {
        assert_eq!(id.model, self.id, "field belongs to another model");
        self.fields
            .get_index(id.index)
            .unwrap_or_else(|| panic!("invalid field ID; id={id:?}"))
    }

    pub fn primary_field(&self) -> &Field {
        self.field_by_id(self.primary_key_id())
    }

    pub fn primary_key_id(&self) -> FieldId {
        FieldId {
            model: self.id,
            index: self.primary,
        }
    }

    /// IDs of every declared field, in declaration order
    pub fn field_ids(&self) -> impl ExactSizeIterator<Item = FieldId> + '_ {
        (0..self.fields.len()).map(|index| FieldId {
            model: self.id,
            index,
        })
    }
}

impl ModelBuilder {
    /// Uses the given ID instead of generating one.
    pub fn id(mut self, id: ModelId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Result<Model> {
        let mut fields = IndexSet::with_capacity(self.fields.len());

        for field in self.fields {
            if fields.contains(&field) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` declares field `{}` more than once",
                    self.name, field.name
                )));
            }

            fields.insert(field);
        }

        let primary: Vec<_> = fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.primary)
            .map(|(index, _)| index)
            .collect();

        let [primary] = primary[..] else {
            return Err(Error::invalid_schema(format!(
                "model `{}` must declare exactly one primary key field, found {}",
                self.name,
                primary.len()
            )));
        };

        Ok(Model {
            id: self.id.unwrap_or_else(ModelId::generate),
            name: self.name,
            table: self.table,
            fields,
            primary,
        })
    }
}
