use crate::{
    driver::{
        operation::{CreateTable, DropTable},
        Connection, Operation,
    },
    schema::{self, Schema},
    Error, Instance, Result, Value,
};

use simpleorm_core::stmt::{Delete, Filter, Insert, Select, Statement, ValueRecord};
use std::sync::Arc;

/// Translates record-level requests into driver operations and runs them.
#[derive(Debug, Clone)]
pub(crate) struct Engine {
    pub(crate) schema: Arc<Schema>,
}

impl Engine {
    pub(crate) fn new(schema: Arc<Schema>) -> Engine {
        Engine { schema }
    }

    pub(crate) async fn create_table(
        &self,
        connection: &mut dyn Connection,
        model: &schema::Model,
    ) -> Result<()> {
        log::debug!("create table; table={}", model.table);
        self.exec(connection, CreateTable { model: model.id }.into())
            .await?;
        Ok(())
    }

    pub(crate) async fn drop_table(
        &self,
        connection: &mut dyn Connection,
        model: &schema::Model,
        if_exists: bool,
    ) -> Result<()> {
        log::debug!("drop table; table={}; if_exists={if_exists}", model.table);
        let op = DropTable {
            model: model.id,
            if_exists,
        };
        self.exec(connection, op.into()).await?;
        Ok(())
    }

    /// Selects every row whose `field` column equals `value`.
    pub(crate) async fn select(
        &self,
        connection: &mut dyn Connection,
        model: &Arc<schema::Model>,
        field: &str,
        value: Value,
    ) -> Result<Vec<Instance>> {
        let field_id = model.resolve_field(field)?;
        let ty = model.field_by_id(field_id).ty;

        if !value.is_a(ty.value_ty()) {
            return Err(Error::type_conversion(value, ty.render_type()));
        }

        let filter = Filter::eq(field_id, value);
        let returning: Vec<_> = model.field_ids().collect();

        let stmt = Select {
            model: model.id,
            returning: returning.clone(),
            filter,
        };

        let rows = self
            .exec(connection, Statement::from(stmt).into())
            .await?
            .into_values()?;

        log::debug!(
            "select; table={}; field={field}; rows={}",
            model.table,
            rows.len()
        );

        Ok(rows
            .into_iter()
            .map(|row| Instance::from_row(model.clone(), &returning, row))
            .collect())
    }

    /// Inserts the columns the instance holds.
    pub(crate) async fn insert(
        &self,
        connection: &mut dyn Connection,
        model: &schema::Model,
        instance: &Instance,
    ) -> Result<()> {
        let len = instance.values().len();
        let mut columns = Vec::with_capacity(len);
        let mut values = Vec::with_capacity(len);

        for (name, value) in instance.values() {
            columns.push(model.resolve_field(name)?);
            values.push(value.clone());
        }

        let stmt = Insert {
            model: model.id,
            columns,
            values: ValueRecord::from_vec(values),
        };

        let count = self
            .exec(connection, Statement::from(stmt).into())
            .await?
            .into_count()?;

        log::debug!("insert; table={}; rows={count}", model.table);
        Ok(())
    }

    /// Deletes the row matching the instance's primary key.
    pub(crate) async fn delete(
        &self,
        connection: &mut dyn Connection,
        model: &schema::Model,
        instance: &Instance,
    ) -> Result<()> {
        let primary = &model.primary_field().name;
        let key = instance
            .values()
            .find(|(name, _)| *name == primary.as_str())
            .map(|(_, value)| value)
            .filter(|value| !value.is_null());

        let Some(key) = key else {
            return Err(Error::missing_primary_key(&model.table, primary));
        };

        let stmt = Delete {
            model: model.id,
            filter: Filter::eq(model.primary_key_id(), key.clone()),
        };

        let count = self
            .exec(connection, Statement::from(stmt).into())
            .await?
            .into_count()?;

        log::debug!("delete; table={}; key={key}; rows={count}", model.table);
        Ok(())
    }

    async fn exec(
        &self,
        connection: &mut dyn Connection,
        op: Operation,
    ) -> Result<crate::driver::Response> {
        log::trace!("exec; op={op:?}");
        connection.exec(&self.schema, op).await
    }
}
