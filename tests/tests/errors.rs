use tests::{models, tests, Setup};

#[derive(Debug, simpleorm::Model)]
#[table = "users"]
struct User {
    #[key]
    id: Option<i64>,

    first_name: Option<String>,
    last_name: Option<String>,
}

async fn lookup_by_unknown_field(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    let err = User::get_one(&db, "nickname", "Jo").await.unwrap_err();
    assert!(err.is_unknown_field());
    assert!(err.to_string().contains("`nickname`"));

    let err = User::get_many(&db, "nickname", "Jo").await.unwrap_err();
    assert!(err.is_unknown_field());

    // Rejected before reaching the database
    assert!(s.ops().is_empty());
}

async fn delete_without_primary_key(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    let user = User {
        id: None,
        first_name: Some("John".to_string()),
        last_name: Some("Smith".to_string()),
    };
    user.save(&db).await.unwrap();
    s.ops().clear();

    let err = user.delete(&db).await.unwrap_err();
    assert!(err.is_missing_primary_key());
    assert!(s.ops().is_empty());

    // The saved row is untouched
    let users = User::get_many_by_last_name(&db, "Smith").await.unwrap();
    assert_eq!(users.len(), 1);
}

async fn wrong_value_type(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    let err = User::get_by_id(&db, "one").await.unwrap_err();
    assert!(err.is_type_conversion());
    assert!(s.ops().is_empty());
}

async fn table_missing(s: impl Setup) {
    let db = s.connect(models!(User)).await.unwrap();

    let err = User::get_by_last_name(&db, "Smith").await.unwrap_err();
    assert!(err.is_driver_operation_failed());
}

async fn create_table_twice(s: impl Setup) {
    let db = s.connect(models!(User)).await.unwrap();

    User::create_table(&db).await.unwrap();
    let err = User::create_table(&db).await.unwrap_err();
    assert!(err.is_driver_operation_failed());
}

async fn unregistered_model(s: impl Setup) {
    #[derive(Debug, simpleorm::Model)]
    #[table = "posts"]
    struct Post {
        #[key]
        id: Option<i64>,
    }

    let db = s.setup(models!(User)).await;

    let err = Post::create_table(&db).await.unwrap_err();
    assert!(err.is_invalid_schema());
}

tests!(
    lookup_by_unknown_field,
    delete_without_primary_key,
    wrong_value_type,
    table_missing,
    create_table_twice,
    unregistered_model,
);
