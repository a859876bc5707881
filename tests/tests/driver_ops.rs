use pretty_assertions::assert_eq;
use simpleorm::driver::{operation::Operation, Rows};
use simpleorm_core::stmt::{Statement, Value};
use tests::{models, tests, Setup};

#[derive(Debug, simpleorm::Model)]
#[table = "users"]
struct User {
    #[key]
    id: Option<i64>,

    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<i64>,
}

async fn table_operations(s: impl Setup) {
    let db = s.connect(models!(User)).await.unwrap();
    let model_id = <User as simpleorm::Model>::id();

    User::create_table(&db).await.unwrap();
    User::drop_table(&db).await.unwrap();

    let Operation::CreateTable(create) = s.ops().pop().operation else {
        panic!("expected CreateTable");
    };
    assert_eq!(create.model, model_id);

    let Operation::DropTable(drop_table) = s.ops().pop().operation else {
        panic!("expected DropTable");
    };
    assert_eq!(drop_table.model, model_id);
    assert!(!drop_table.if_exists);

    assert!(s.ops().is_empty());
}

async fn insert_lists_supplied_fields(s: impl Setup) {
    let db = s.setup(models!(User)).await;
    let model = db.schema().model(<User as simpleorm::Model>::id()).unwrap().clone();

    let user = User {
        id: None,
        first_name: Some("John".to_string()),
        last_name: Some("Smith".to_string()),
        age: None,
    };
    user.save(&db).await.unwrap();

    let op = s.ops().pop();
    assert!(op.operation.is_query_sql());
    assert_eq!(
        op.operation.as_query_sql().map(|query| query.stmt.model()),
        Some(model.id)
    );

    let Operation::QuerySql(query) = op.operation else {
        panic!("expected QuerySql");
    };
    let Statement::Insert(insert) = query.stmt else {
        panic!("expected Insert");
    };

    let columns: Vec<_> = insert
        .columns
        .iter()
        .map(|id| &model.field_by_id(*id).name[..])
        .collect();
    assert_eq!(columns, ["first_name", "last_name"]);
    assert_eq!(
        insert.values.iter().cloned().collect::<Vec<_>>(),
        vec![Value::from("John"), Value::from("Smith")]
    );
    assert_eq!(op.response.rows, Rows::Count(1));
}

async fn select_returns_all_columns(s: impl Setup) {
    let db = s.setup(models!(User)).await;
    let model = db.schema().model(<User as simpleorm::Model>::id()).unwrap().clone();

    let _ = User::get_many_by_age(&db, 30).await.unwrap();

    let Operation::QuerySql(query) = s.ops().pop().operation else {
        panic!("expected QuerySql");
    };
    let Statement::Select(select) = query.stmt else {
        panic!("expected Select");
    };

    assert_eq!(select.returning, model.field_ids().collect::<Vec<_>>());
    assert_eq!(select.filter.field, model.field_id("age").unwrap());
    assert_eq!(select.filter.value, Value::I64(30));
}

async fn delete_filters_on_primary_key(s: impl Setup) {
    let db = s.setup(models!(User)).await;
    let model = db.schema().model(<User as simpleorm::Model>::id()).unwrap().clone();

    let user = User {
        id: Some(9),
        first_name: Some("Ann".to_string()),
        last_name: None,
        age: None,
    };
    user.save(&db).await.unwrap();
    s.ops().clear();

    user.delete(&db).await.unwrap();

    let op = s.ops().pop();
    let Operation::QuerySql(query) = op.operation else {
        panic!("expected QuerySql");
    };
    let Statement::Delete(delete) = query.stmt else {
        panic!("expected Delete");
    };

    assert_eq!(delete.filter.field, model.primary_key_id());
    assert_eq!(delete.filter.value, Value::I64(9));
    assert_eq!(op.response.rows, Rows::Count(1));
}

async fn reset_db_recreates_tables(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    User {
        id: None,
        first_name: Some("John".to_string()),
        last_name: None,
        age: None,
    }
    .save(&db)
    .await
    .unwrap();

    db.reset_db().await.unwrap();

    let users = User::get_many_by_first_name(&db, "John").await.unwrap();
    assert!(users.is_empty());
}

tests!(
    table_operations,
    insert_lists_supplied_fields,
    select_returns_all_columns,
    delete_filters_on_primary_key,
    reset_db_recreates_tables,
);
