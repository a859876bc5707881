#[derive(simpleorm::Model)]
#[table = "items"]
struct Item {
    #[key]
    #[column("item_id")]
    id: i64,

    #[column("label")]
    name: String,
}

fn main() {
    use simpleorm::Model;

    let item = Item {
        id: 1,
        name: "chair".to_string(),
    };

    let columns: Vec<_> = item.values().into_iter().map(|(column, _)| column).collect();
    assert_eq!(columns, ["item_id", "label"]);
}
