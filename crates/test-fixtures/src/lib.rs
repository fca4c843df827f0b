//! Shared catalogs and history builders for Basket tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use basket_core::{Catalog, Product, ProductId, PurchaseRecord, UserHistory};

/// Five categories, five products each, overlapping tags across categories.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Headphones", "Audio", 120.0).with_tags(["wireless", "music"]),
        Product::new(2, "Bluetooth Speaker", "Audio", 80.0).with_tags(["wireless", "portable"]),
        Product::new(3, "Studio Monitors", "Audio", 350.0).with_tags(["studio", "music"]),
        Product::new(4, "Turntable", "Audio", 220.0).with_tags(["vinyl", "music"]),
        Product::new(5, "Earbuds", "Audio", 60.0).with_tags(["wireless", "sport"]),
        Product::new(6, "Laptop", "Electronics", 1200.0).with_tags(["work", "portable"]),
        Product::new(7, "Tablet", "Electronics", 450.0).with_tags(["portable", "reading"]),
        Product::new(8, "Smartwatch", "Electronics", 250.0).with_tags(["sport", "wireless"]),
        Product::new(9, "Webcam", "Electronics", 90.0).with_tags(["work", "video"]),
        Product::new(10, "E-Reader", "Electronics", 130.0).with_tags(["reading", "portable"]),
        Product::new(11, "Sci-Fi Novel", "Books", 18.0).with_tags(["fiction", "reading"]),
        Product::new(12, "Cookbook", "Books", 30.0).with_tags(["cooking", "reading"]),
        Product::new(13, "Music Theory", "Books", 40.0).with_tags(["music", "reading"]),
        Product::new(14, "Travel Guide", "Books", 25.0).with_tags(["travel", "reading"]),
        Product::new(15, "Running Manual", "Books", 22.0).with_tags(["sport", "reading"]),
        Product::new(16, "Chef Knife", "Home", 75.0).with_tags(["cooking"]),
        Product::new(17, "Desk Lamp", "Home", 45.0).with_tags(["work", "reading"]),
        Product::new(18, "Coffee Maker", "Home", 110.0).with_tags(["cooking", "morning"]),
        Product::new(19, "Record Shelf", "Home", 95.0).with_tags(["vinyl"]),
        Product::new(20, "Air Purifier", "Home", 180.0).with_tags(["health"]),
        Product::new(21, "Yoga Mat", "Sports", 35.0).with_tags(["sport", "health"]),
        Product::new(22, "Running Shoes", "Sports", 140.0).with_tags(["sport", "running"]),
        Product::new(23, "Water Bottle", "Sports", 20.0).with_tags(["sport", "portable"]),
        Product::new(24, "Dumbbells", "Sports", 65.0).with_tags(["sport", "strength"]),
        Product::new(25, "Bike Helmet", "Sports", 85.0).with_tags(["sport", "travel"]),
    ]
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_products()).expect("sample catalog ids are unique")
}

/// One purchased Audio product plus five unpurchased Audio and five
/// unpurchased Electronics products. No unpurchased product shares a tag
/// with the purchase. Every price is 100.
pub fn audio_electronics_products() -> Vec<Product> {
    let mut products =
        vec![Product::new(1, "Wireless Headphones", "Audio", 100.0).with_tags(["wireless"])];
    for i in 0..5 {
        products.push(
            Product::new(10 + i, format!("Audio {i}"), "Audio", 100.0).with_tags(["studio"]),
        );
    }
    for i in 0..5 {
        products.push(
            Product::new(20 + i, format!("Gadget {i}"), "Electronics", 100.0)
                .with_tags(["gadget"]),
        );
    }
    products
}

pub fn audio_electronics_catalog() -> Catalog {
    Catalog::new(audio_electronics_products()).expect("fixture ids are unique")
}

/// Deterministic purchase timestamp: `minutes` after a fixed epoch.
pub fn fixed_time(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
        + Duration::minutes(minutes)
}

/// History of the given catalog products, purchased one minute apart.
pub fn history_of(catalog: &Catalog, ids: &[ProductId]) -> UserHistory {
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let product = catalog
                .get(*id)
                .unwrap_or_else(|| panic!("product {id} not in fixture catalog"))
                .clone();
            PurchaseRecord::new(product, fixed_time(i as i64))
        })
        .collect()
}

/// Catalog JSON containing one row with no category and one with no tags.
pub fn malformed_catalog_json() -> String {
    serde_json::json!([
        {"id": 1, "name": "Headphones", "category": "Audio", "price": 100.0,
         "tags": ["wireless"]},
        {"id": 2, "name": "Speaker", "category": "Audio", "price": 90.0,
         "tags": ["portable"]},
        {"id": 3, "name": "Mystery Box", "price": 50.0, "tags": ["surprise"]},
        {"id": 4, "name": "Laptop", "category": "Electronics", "price": 800.0},
        {"id": 5, "name": "Tablet", "category": "Electronics", "price": 300.0,
         "tags": ["portable"]},
        {"id": 6, "name": "Phone", "category": "Electronics", "price": 600.0,
         "tags": ["wireless"]}
    ])
    .to_string()
}
