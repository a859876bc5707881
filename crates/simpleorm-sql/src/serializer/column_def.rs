use super::{Flavor, Formatter, Ident, Params, ToSql};

use crate::stmt;

use simpleorm_core::schema::FieldTy;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);

        if !self.primary {
            fmt!(f, name " " self.ty.render_type());
            return;
        }

        match f.serializer.flavor {
            Flavor::Mysql => {
                fmt!(f, name " " self.ty.render_type() " NOT NULL AUTO_INCREMENT");
            }
            // SQLite has no AUTO_INCREMENT. An `INTEGER` primary key aliases
            // the rowid, which is assigned when the column is omitted.
            Flavor::Sqlite => match self.ty {
                FieldTy::Integer => fmt!(f, name " INTEGER NOT NULL"),
                _ => fmt!(f, name " " self.ty.render_type() " NOT NULL"),
            },
        }
    }
}
