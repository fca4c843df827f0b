use basket_core::config::FeatureConfig;
use basket_core::errors::ValidationError;
use basket_core::{Catalog, Product, UserHistory};
use basket_features::FeatureExtractor;
use proptest::prelude::*;
use test_fixtures::{history_of, malformed_catalog_json, sample_catalog};

fn extractor(catalog: &Catalog) -> FeatureExtractor {
    FeatureExtractor::new(catalog, &FeatureConfig::default())
}

#[test]
fn dimension_is_categories_plus_tags_plus_three() {
    let catalog = sample_catalog();
    let fx = extractor(&catalog);
    assert_eq!(
        fx.dim(),
        catalog.categories().len() + catalog.tags().len() + 3
    );
}

#[test]
fn empty_history_uses_neutral_price_features() {
    let catalog = sample_catalog();
    let fx = extractor(&catalog);
    let laptop = catalog.get(6).unwrap();
    let v = fx.extract(laptop, &UserHistory::new()).unwrap();
    let layout = fx.layout();

    assert_eq!(v.len(), fx.dim());
    assert_eq!(v.category_index(layout), catalog.category_index("Electronics"));
    assert_eq!(v.price_norm(layout), 1.0); // the laptop is the priciest product
    assert_eq!(v.price_deviation(layout), 0.5);
    assert_eq!(v.in_price_band(layout), 0.0);
}

#[test]
fn tag_indicators_match_product_tags() {
    let catalog = sample_catalog();
    let fx = extractor(&catalog);
    let speaker = catalog.get(2).unwrap();
    let v = fx.extract(speaker, &UserHistory::new()).unwrap();
    let tags: Vec<&str> = v
        .tag_indices(fx.layout())
        .map(|i| fx.layout().tags()[i].as_str())
        .collect();
    assert_eq!(tags, ["portable", "wireless"]);
}

#[test]
fn price_band_and_deviation_follow_history() {
    let catalog = sample_catalog();
    let fx = extractor(&catalog);
    // Prices 80 and 120: mean 100, band [80, 120].
    let history = history_of(&catalog, &[1, 2]);
    let layout = fx.layout();

    let webcam = catalog.get(9).unwrap(); // 90
    let v = fx.extract(webcam, &history).unwrap();
    assert_eq!(v.in_price_band(layout), 1.0);
    assert!((v.price_deviation(layout) - 0.1).abs() < 1e-12);

    let laptop = catalog.get(6).unwrap(); // 1200
    let v = fx.extract(laptop, &history).unwrap();
    assert_eq!(v.in_price_band(layout), 0.0);
    assert_eq!(v.price_deviation(layout), 1.0);
}

#[test]
fn configured_reference_price_caps_at_one() {
    let catalog = sample_catalog();
    let fx = FeatureExtractor::new(
        &catalog,
        &FeatureConfig {
            max_reference_price: Some(100.0),
        },
    );
    let layout = fx.layout();
    let cheap = fx.extract(catalog.get(11).unwrap(), &UserHistory::new()).unwrap();
    assert!((cheap.price_norm(layout) - 0.18).abs() < 1e-12);
    let pricey = fx.extract(catalog.get(6).unwrap(), &UserHistory::new()).unwrap();
    assert_eq!(pricey.price_norm(layout), 1.0);
}

#[test]
fn malformed_products_fail_individually() {
    let catalog = Catalog::from_json(&malformed_catalog_json()).unwrap();
    let fx = extractor(&catalog);
    let history = UserHistory::new();

    let err = fx.extract(catalog.get(3).unwrap(), &history).unwrap_err();
    assert_eq!(err, ValidationError::MissingCategory { id: 3 });

    let err = fx.extract(catalog.get(4).unwrap(), &history).unwrap_err();
    assert_eq!(err, ValidationError::MissingTags { id: 4 });

    assert!(fx.extract(catalog.get(5).unwrap(), &history).is_ok());
}

#[test]
fn foreign_category_and_bad_price_are_rejected() {
    let catalog = sample_catalog();
    let fx = extractor(&catalog);
    let history = UserHistory::new();

    let garden = Product::new(99, "Rake", "Garden", 10.0);
    assert!(matches!(
        fx.extract(&garden, &history),
        Err(ValidationError::UnknownCategory { id: 99, .. })
    ));

    let free = Product::new(98, "Sticker", "Books", 0.0);
    assert!(matches!(
        fx.extract(&free, &history),
        Err(ValidationError::InvalidPrice { id: 98, .. })
    ));
}

#[test]
fn profile_counts_recent_categories() {
    let catalog = sample_catalog();
    let fx = extractor(&catalog);
    // Audio, Books, Books, Home: the last three span Books and Home.
    let history = history_of(&catalog, &[1, 11, 12, 16]);
    let profile = fx.profile(&history);
    let audio = catalog.category_index("Audio").unwrap();
    let books = catalog.category_index("Books").unwrap();
    let home = catalog.category_index("Home").unwrap();

    assert_eq!(profile.len, 4);
    assert_eq!(profile.count(books), 2);
    assert_eq!(profile.category_share(books), 0.5);
    assert!(!profile.is_recent(audio));
    assert!(profile.is_recent(books));
    assert!(profile.is_recent(home));
    assert_eq!(profile.distinct_categories(), 3);
    assert!(profile.has_seen_tag(catalog.tag_index("cooking").unwrap()));
}

proptest! {
    #[test]
    fn extraction_is_deterministic_with_constant_dimension(
        ids in prop::collection::vec(1u64..=25, 0..8),
        target in 1u64..=25,
    ) {
        let catalog = sample_catalog();
        let fx = extractor(&catalog);
        let history = history_of(&catalog, &ids);
        let product = catalog.get(target).unwrap();

        let a = fx.extract(product, &history).unwrap();
        let b = fx.extract(product, &history).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), fx.dim());
        prop_assert!(a.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
