use super::Error;

/// Error when a record is deleted without a value for its primary key.
///
/// Records saved without their auto-increment key do not learn the
/// generated value; they must be fetched again before they can be deleted.
#[derive(Debug)]
pub(super) struct MissingPrimaryKey {
    table: Box<str>,
    column: Box<str>,
}

impl std::error::Error for MissingPrimaryKey {}

impl core::fmt::Display for MissingPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing primary key: `{}`.`{}` has no value; fetch the record before deleting it",
            self.table, self.column
        )
    }
}

impl Error {
    /// Creates a missing primary key error.
    pub fn missing_primary_key(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKey {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
