use pretty_assertions::assert_eq;
use tests::{models, tests, Setup};

#[derive(Debug, PartialEq, simpleorm::Model)]
#[table = "users"]
struct User {
    #[key]
    id: Option<i64>,

    first_name: Option<String>,
    last_name: Option<String>,
    age: Option<i64>,
}

impl User {
    fn new(first_name: &str, last_name: &str, age: i64) -> User {
        User {
            id: None,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            age: Some(age),
        }
    }
}

async fn crud_user_lifecycle(s: impl Setup) {
    let db = s.connect(models!(User)).await.unwrap();

    User::create_table(&db).await.unwrap();

    User::new("John", "Smith", 30).save(&db).await.unwrap();

    let john = User::get_one(&db, "last_name", "Smith").await.unwrap();
    assert!(john.id.is_some());
    assert_eq!(john.first_name.as_deref(), Some("John"));
    assert_eq!(john.last_name.as_deref(), Some("Smith"));
    assert_eq!(john.age, Some(30));

    User::new("Jane", "Smith", 28).save(&db).await.unwrap();

    let mut smiths = User::get_many(&db, "last_name", "Smith").await.unwrap();
    smiths.sort_by_key(|user| user.id);
    let names: Vec<_> = smiths
        .iter()
        .map(|user| user.first_name.as_deref().unwrap())
        .collect();
    assert_eq!(names, ["John", "Jane"]);

    john.delete(&db).await.unwrap();

    let remaining = User::get_many(&db, "last_name", "Smith").await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].first_name.as_deref(), Some("Jane"));

    User::drop_table(&db).await.unwrap();
}

async fn lookup_by_primary_key(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    User::new("John", "Smith", 30).save(&db).await.unwrap();
    let john = User::get_by_last_name(&db, "Smith").await.unwrap();

    let by_id = User::get_by_id(&db, john.id).await.unwrap();
    assert_eq!(by_id, john);

    let by_db = db.get_one::<User>("id", john.id).await.unwrap();
    assert_eq!(by_db, john);
}

async fn get_many_no_match_is_empty(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    User::new("John", "Smith", 30).save(&db).await.unwrap();

    let users = User::get_many_by_last_name(&db, "Jones").await.unwrap();
    assert!(users.is_empty());
}

async fn get_one_not_found(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    let err = User::get_one(&db, "last_name", "Nobody").await.unwrap_err();
    assert!(err.is_record_not_found());
    assert!(err.to_string().contains("last_name=\"Nobody\""));
}

async fn get_one_returns_a_match(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    User::new("John", "Smith", 30).save(&db).await.unwrap();
    User::new("Jane", "Smith", 28).save(&db).await.unwrap();

    let user = User::get_by_last_name(&db, "Smith").await.unwrap();
    assert!(matches!(user.first_name.as_deref(), Some("John" | "Jane")));
}

async fn save_twice_inserts_twice(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    let user = User::new("John", "Smith", 30);
    user.save(&db).await.unwrap();
    user.save(&db).await.unwrap();

    let mut users = User::get_many_by_first_name(&db, "John").await.unwrap();
    assert_eq!(users.len(), 2);

    users.sort_by_key(|user| user.id);
    assert_ne!(users[0].id, users[1].id);
}

async fn delete_removes_only_that_row(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    for (first_name, age) in [("John", 30), ("Jane", 28), ("Jim", 41)] {
        User::new(first_name, "Smith", age).save(&db).await.unwrap();
    }

    let jane = User::get_by_first_name(&db, "Jane").await.unwrap();
    jane.delete(&db).await.unwrap();

    let mut names: Vec<_> = User::get_many_by_last_name(&db, "Smith")
        .await
        .unwrap()
        .into_iter()
        .map(|user| user.first_name.unwrap())
        .collect();
    names.sort();

    assert_eq!(names, ["Jim", "John"]);

    // Deleting a row that no longer exists is not an error
    jane.delete(&db).await.unwrap();
}

async fn unsupplied_fields_load_as_none(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    let user = User {
        id: None,
        first_name: Some("Madonna".to_string()),
        last_name: None,
        age: None,
    };
    user.save(&db).await.unwrap();

    let loaded = User::get_by_first_name(&db, "Madonna").await.unwrap();
    assert!(loaded.id.is_some());
    assert_eq!(loaded.last_name, None);
    assert_eq!(loaded.age, None);
}

async fn explicit_primary_key_is_stored(s: impl Setup) {
    let db = s.setup(models!(User)).await;

    let user = User {
        id: Some(42),
        ..User::new("John", "Smith", 30)
    };
    user.save(&db).await.unwrap();

    let loaded = User::get_by_id(&db, 42).await.unwrap();
    assert_eq!(loaded, user);
}

tests!(
    crud_user_lifecycle,
    lookup_by_primary_key,
    get_many_no_match_is_empty,
    get_one_not_found,
    get_one_returns_a_match,
    save_twice_inserts_twice,
    delete_removes_only_that_row,
    unsupplied_fields_load_as_none,
    explicit_primary_key_is_stored,
);
