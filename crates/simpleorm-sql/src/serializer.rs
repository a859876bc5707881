#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod statement;

use crate::stmt::Statement;

use simpleorm_core::schema::{FieldId, Model, ModelId, Schema};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a Schema,

    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl<'a> Serializer<'a> {
    /// Writes `stmt` as SQL text. Values are never inlined: each one is pushed
    /// onto `params` and a placeholder is written in its place.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }

    fn model(&self, id: ModelId) -> &'a Model {
        match self.schema.model(id) {
            Ok(model) => model,
            Err(err) => panic!("statement references an unknown model; {err}"),
        }
    }

    fn table_name(&self, id: ModelId) -> Ident<&'a str> {
        Ident(&self.model(id).table)
    }

    fn column_name(&self, id: FieldId) -> Ident<&'a str> {
        Ident(&self.schema.field(id).name)
    }
}
