use super::{Comma, Formatter, Ident, Params, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);
        let columns = Comma(&self.columns);
        let primary_key = Ident(&self.primary_key);

        fmt!(f, "CREATE TABLE " name " (" columns ",PRIMARY KEY (" primary_key "))");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = Ident(&self.name);

        if self.if_exists {
            fmt!(f, "DROP TABLE IF EXISTS " name);
        } else {
            fmt!(f, "DROP TABLE " name);
        }
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table = f.serializer.table_name(self.model);
        let filter = &self.filter;

        fmt!(f, "DELETE FROM " table " WHERE " filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let serializer = f.serializer;
        let table = serializer.table_name(self.model);
        let columns = Comma(self.columns.iter().map(move |id| serializer.column_name(*id)));
        let values = Comma(self.values.iter());

        fmt!(f, "INSERT INTO " table "(" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let serializer = f.serializer;
        let table = serializer.table_name(self.model);

        // The column list is not quoted
        let returning = Comma(
            self.returning
                .iter()
                .map(move |id| &serializer.schema.field(*id).name[..]),
        );
        let filter = &self.filter;

        fmt!(f, "SELECT " returning " FROM " table " WHERE " filter);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let column = f.serializer.column_name(self.field);
        let value = &self.value;

        fmt!(f, column "=" value);
    }
}
