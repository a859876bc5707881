use super::Value;
use crate::schema::FieldId;

/// A single `<column>=?` predicate.
///
/// Lookups match on exactly one field. There is no support for combining
/// predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: FieldId,
    pub value: Value,
}

impl Filter {
    pub fn eq(field: FieldId, value: impl Into<Value>) -> Filter {
        Filter {
            field,
            value: value.into(),
        }
    }
}
