use super::{Formatter, Params, ToSql};

/// A back-tick quoted identifier. The name is written as is; identifiers come
/// from the schema and are trusted.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push('`');
        f.dst.push_str(self.0.as_ref());
        f.dst.push('`');
    }
}
