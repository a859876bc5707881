use super::ModelId;
use crate::stmt;

use std::{
    borrow::Borrow,
    hash::{Hash, Hasher},
};

/// A declared column on a model.
///
/// Two fields are equal when their names are equal, regardless of type or
/// primary-key flag. Together with the [`Borrow<str>`] impl this lets a bare
/// name (or a [`Field::key`]) stand in for a field when testing whether a
/// name is declared on a model.
#[derive(Debug, Clone)]
pub struct Field {
    /// The column name as it exists in the database
    pub name: String,

    /// True if the field is the model's primary key
    pub primary: bool,

    /// The kind of values stored in the column
    pub ty: FieldTy,
}

/// The kinds of field a model can declare.
///
/// Adding a kind means adding a variant here with its own SQL keyword in
/// [`FieldTy::render_type`] and its own value type in [`FieldTy::value_ty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldTy {
    String,
    Integer,
}

/// Uniquely identifies a field within a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldTy) -> Field {
        Field {
            name: name.into(),
            primary: false,
            ty,
        }
    }

    /// A `TEXT` field
    pub fn string(name: impl Into<String>) -> Field {
        Field::new(name, FieldTy::String)
    }

    /// A `BIGINT` field
    pub fn integer(name: impl Into<String>) -> Field {
        Field::new(name, FieldTy::Integer)
    }

    /// A name-only field used purely as a lookup key.
    pub fn key(name: impl Into<String>) -> Field {
        Field::string(name)
    }

    /// Marks the field as the model's primary key.
    pub fn primary(mut self) -> Field {
        self.primary = true;
        self
    }

    pub fn render_type(&self) -> &'static str {
        self.ty.render_type()
    }
}

impl FieldTy {
    /// The SQL column type keyword
    pub fn render_type(self) -> &'static str {
        match self {
            FieldTy::String => "TEXT",
            FieldTy::Integer => "BIGINT",
        }
    }

    /// The type values of this field load as
    pub fn value_ty(self) -> stmt::Type {
        match self {
            FieldTy::String => stmt::Type::String,
            FieldTy::Integer => stmt::Type::I64,
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Field {}

impl Hash for Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Borrow<str> for Field {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Field:{}", self.render_type())
    }
}
