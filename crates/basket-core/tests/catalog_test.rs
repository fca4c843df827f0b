use basket_core::errors::BasketError;
use basket_core::{Catalog, Product, PurchaseRecord, UserHistory};

fn sample() -> Vec<Product> {
    vec![
        Product::new(1, "Headphones", "Audio", 120.0).with_tags(["wireless", "music"]),
        Product::new(2, "Laptop", "Electronics", 900.0).with_tags(["work"]),
        Product::new(3, "Speaker", "Audio", 80.0).with_tags(["music"]),
        Product::new(4, "Novel", "Books", 15.0).with_tags(["fiction"]),
    ]
}

#[test]
fn categories_follow_first_appearance_order() {
    let catalog = Catalog::new(sample()).unwrap();
    assert_eq!(catalog.categories(), ["Audio", "Electronics", "Books"]);
}

#[test]
fn tag_vocabulary_is_sorted_and_deduplicated() {
    let catalog = Catalog::new(sample()).unwrap();
    assert_eq!(catalog.tags(), ["fiction", "music", "wireless", "work"]);
    assert_eq!(catalog.tag_index("wireless"), Some(2));
    assert_eq!(catalog.tag_index("missing"), None);
}

#[test]
fn lookup_by_id() {
    let catalog = Catalog::new(sample()).unwrap();
    assert_eq!(catalog.get(3).unwrap().name, "Speaker");
    assert_eq!(catalog.products()[3].id, 4);
    assert!(catalog.get(99).is_none());
    assert_eq!(catalog.max_price(), 900.0);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut products = sample();
    products.push(Product::new(1, "Clone", "Audio", 10.0));
    let err = Catalog::new(products).unwrap_err();
    assert!(matches!(err, BasketError::DuplicateProduct { id: 1 }));
}

#[test]
fn malformed_rows_load_but_do_not_extend_the_category_set() {
    let json = r#"[
        {"id": 1, "name": "Mouse", "category": "Electronics", "price": 25.0, "tags": ["work"]},
        {"id": 2, "name": "Mystery", "price": 10.0}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.categories(), ["Electronics"]);
    let mystery = catalog.get(2).unwrap();
    assert!(mystery.category_name().is_none());
    assert!(mystery.tags.is_none());
}

#[test]
fn history_tracks_order() {
    let products = sample();
    let mut history = UserHistory::new();
    for p in [&products[0], &products[1], &products[2]] {
        history.push(PurchaseRecord::now(p.clone()));
    }
    assert_eq!(history.len(), 3);
    let purchased = history.purchased_ids();
    assert!(purchased.contains(&2));
    assert!(!purchased.contains(&4));
    assert_eq!(history.recent(2)[0].product.id, 2);
    assert_eq!(history.recent(10).len(), 3);
}

#[test]
fn history_serializes_as_a_plain_sequence() {
    let products = sample();
    let history: UserHistory = products
        .iter()
        .take(2)
        .cloned()
        .map(PurchaseRecord::now)
        .collect();
    let json = serde_json::to_string(&history).unwrap();
    assert!(json.starts_with('['));
    let back: UserHistory = serde_json::from_str(&json).unwrap();
    assert_eq!(back, history);
}
