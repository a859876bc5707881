use super::{Model, Schema};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::{collections::HashSet, sync::Arc};

/// Assembles a [`Schema`] from registered models.
#[derive(Debug, Default)]
pub struct Builder {
    models: Vec<Model>,

    /// Prefix prepended to every table name
    table_name_prefix: Option<String>,
}

impl Builder {
    pub fn register(&mut self, model: Model) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn build(&mut self) -> Result<Schema> {
        let mut models = IndexMap::with_capacity(self.models.len());
        let mut tables = HashSet::new();

        for mut model in self.models.drain(..) {
            if let Some(prefix) = &self.table_name_prefix {
                model.table = format!("{prefix}{}", model.table);
            }

            if !tables.insert(model.table.clone()) {
                return Err(Error::invalid_schema(format!(
                    "table `{}` is mapped by more than one model",
                    model.table
                )));
            }

            if models.contains_key(&model.id) {
                return Err(Error::invalid_schema(format!(
                    "model `{}` registered more than once",
                    model.name
                )));
            }

            models.insert(model.id, Arc::new(model));
        }

        Ok(Schema { models })
    }
}
