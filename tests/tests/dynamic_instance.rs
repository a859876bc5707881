use pretty_assertions::assert_eq;
use simpleorm::{
    schema::{self, Field},
    Instance, Value,
};
use std::sync::Arc;
use tests::{tests, Setup};

fn users() -> schema::Model {
    schema::Model::builder("User", "users")
        .field(Field::integer("id").primary())
        .field(Field::string("first_name"))
        .field(Field::string("last_name"))
        .field(Field::integer("age"))
        .build()
        .unwrap()
}

async fn instance_round_trip(s: impl Setup) {
    let mut builder = simpleorm::Db::builder();
    builder.register_model(users());
    let db = s.setup(builder).await;

    let table = db.schema().models().next().unwrap().table.clone();
    let model = db.model(&table).unwrap().clone();

    let john = db
        .instance(
            &table,
            [
                ("first_name", Value::from("John")),
                ("last_name", Value::from("Smith")),
                ("age", Value::from(30)),
            ],
        )
        .unwrap();
    assert_eq!(john.get("id").unwrap(), None);

    db.save_instance(&john).await.unwrap();

    let mut found = db.select(&model, "last_name", "Smith").await.unwrap();
    assert_eq!(found.len(), 1);

    let mut loaded = found.remove(0);
    assert!(loaded.primary_key().is_some());
    assert_eq!(loaded.get("first_name").unwrap(), Some(&Value::from("John")));
    assert_eq!(loaded.get("age").unwrap(), Some(&Value::I64(30)));

    // Assignment only changes the in-memory instance
    loaded.set("age", 31).unwrap();
    assert_eq!(loaded.get("age").unwrap(), Some(&Value::I64(31)));

    let stored = db.select(&model, "first_name", "John").await.unwrap();
    assert_eq!(stored[0].get("age").unwrap(), Some(&Value::I64(30)));

    db.delete_instance(&loaded).await.unwrap();
    assert!(db
        .select(&model, "last_name", "Smith")
        .await
        .unwrap()
        .is_empty());
}

async fn instance_rejects_unknown_field(s: impl Setup) {
    let mut builder = simpleorm::Db::builder();
    builder.register_model(users());
    let db = s.setup(builder).await;

    let table = db.schema().models().next().unwrap().table.clone();

    let err = db.instance(&table, [("nickname", "Jo")]).unwrap_err();
    assert!(err.is_unknown_field());

    let mut instance = db.instance(&table, [("first_name", "Jo")]).unwrap();
    assert!(instance.set("nickname", "Jo").unwrap_err().is_unknown_field());
    assert!(instance.get("nickname").unwrap_err().is_unknown_field());
}

async fn delete_instance_without_key(s: impl Setup) {
    let mut builder = simpleorm::Db::builder();
    builder.register_model(users());
    let db = s.setup(builder).await;

    let table = db.schema().models().next().unwrap().table.clone();
    let instance = db.instance(&table, [("first_name", "Jo")]).unwrap();

    let err = db.delete_instance(&instance).await.unwrap_err();
    assert!(err.is_missing_primary_key());
    assert!(s.ops().is_empty());
}

async fn unknown_table(s: impl Setup) {
    let mut builder = simpleorm::Db::builder();
    builder.register_model(users());
    let db = s.setup(builder).await;

    let err = db
        .instance("accounts", [("id", Value::from(1))])
        .unwrap_err();
    assert!(err.is_invalid_schema());
}

async fn unregistered_model(s: impl Setup) {
    let mut builder = simpleorm::Db::builder();
    builder.register_model(users());
    let db = s.setup(builder).await;

    // Same shape as the registered model, but a model of its own
    let other = Arc::new(users());

    let err = db.select(&other, "last_name", "Smith").await.unwrap_err();
    assert!(err.is_invalid_schema());

    assert!(db.create_table_for(&other).await.unwrap_err().is_invalid_schema());
    assert!(db.drop_table_for(&other).await.unwrap_err().is_invalid_schema());

    let instance = Instance::new(
        other.clone(),
        [("id", Value::from(1)), ("first_name", Value::from("Jo"))],
    )
    .unwrap();

    assert!(db.save_instance(&instance).await.unwrap_err().is_invalid_schema());
    assert!(db
        .delete_instance(&instance)
        .await
        .unwrap_err()
        .is_invalid_schema());

    assert!(s.ops().is_empty());
}

async fn model_with_foreign_table(s: impl Setup) {
    let mut builder = simpleorm::Db::builder();
    builder.register_model(users());
    let db = s.setup(builder).await;

    let registered = db.schema().models().next().unwrap().clone();

    // Reuses the registered model's ID but maps to another table
    let accounts = Arc::new(
        schema::Model::builder("Account", "accounts")
            .id(registered.id)
            .field(Field::integer("id").primary())
            .build()
            .unwrap(),
    );

    let err = db.select(&accounts, "id", 1).await.unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: model `Account` does not belong to this database; table=accounts"
    );

    let instance = Instance::new(accounts.clone(), [("id", 1)]).unwrap();
    assert!(db.save_instance(&instance).await.unwrap_err().is_invalid_schema());
    assert!(db
        .delete_instance(&instance)
        .await
        .unwrap_err()
        .is_invalid_schema());
    assert!(db.create_table_for(&accounts).await.unwrap_err().is_invalid_schema());

    assert!(s.ops().is_empty());
}

tests!(
    instance_round_trip,
    instance_rejects_unknown_field,
    delete_instance_without_key,
    unknown_table,
    unregistered_model,
    model_with_foreign_table,
);
