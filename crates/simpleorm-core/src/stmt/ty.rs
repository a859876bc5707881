/// The type a column's values load as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Signed 64-bit integer (`BIGINT`)
    I64,

    /// Unicode string (`TEXT`)
    String,
}

impl Type {
    pub fn is_i64(self) -> bool {
        matches!(self, Type::I64)
    }

    pub fn is_string(self) -> bool {
        matches!(self, Type::String)
    }
}
