use tests::{models, tests, Setup};

fn assert_sync_send<T: Send + Sync>(val: T) -> T {
    val
}

fn assert_send<T: Send>(val: T) -> T {
    val
}

#[derive(Debug, simpleorm::Model)]
#[table = "users"]
struct User {
    #[key]
    id: Option<i64>,

    email: String,
}

async fn ensure_types_sync_send(s: impl Setup) {
    let db = assert_sync_send(s.setup(models!(User)).await);

    let res = assert_send(User::get_many_by_email(&db, "hello@example.com"))
        .await
        .unwrap();
    assert!(res.is_empty());

    // Clones share one connection
    let other = db.clone();
    let handle = tokio::spawn(async move {
        User {
            id: None,
            email: "hello@example.com".to_string(),
        }
        .save(&other)
        .await
    });
    handle.await.unwrap().unwrap();

    let res = User::get_many_by_email(&db, "hello@example.com").await.unwrap();
    assert_eq!(res.len(), 1);
}

tests!(ensure_types_sync_send);
