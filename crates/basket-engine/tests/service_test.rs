use std::collections::HashSet;
use std::sync::Arc;

use basket_core::config::{BasketConfig, ScoreFloorConfig, ScorerBackend};
use basket_core::models::ModelParameters;
use basket_core::{Catalog, UserHistory};
use basket_engine::rationale::POPULAR_PICK;
use basket_engine::{desired_count, RecommendationService};
use proptest::prelude::*;
use test_fixtures::{
    audio_electronics_catalog, history_of, malformed_catalog_json, sample_catalog,
};

fn config(backend: ScorerBackend) -> BasketConfig {
    let mut config = BasketConfig::default();
    config.scoring.backend = backend;
    config
}

fn service(catalog: Catalog, backend: ScorerBackend) -> RecommendationService {
    RecommendationService::new(Arc::new(catalog), config(backend)).unwrap()
}

const BACKENDS: [ScorerBackend; 2] = [ScorerBackend::Heuristic, ScorerBackend::Neural];

#[test]
fn purchased_products_are_never_recommended() {
    for backend in BACKENDS {
        let catalog = sample_catalog();
        let history = history_of(&catalog, &[1, 6, 11, 16]);
        let mut svc = service(catalog, backend);
        let batch = svc.update(&history).unwrap();
        let purchased = history.purchased_ids();
        assert!(!batch.recommendations.is_empty());
        assert!(batch
            .recommendations
            .iter()
            .all(|r| !purchased.contains(&r.product.id)));
    }
}

#[test]
fn length_is_min_of_n_and_available() {
    let catalog = sample_catalog();
    let history = history_of(&catalog, &[1, 2, 3]);
    let mut svc = service(catalog, ScorerBackend::Heuristic);
    svc.train(&history).unwrap();

    assert_eq!(svc.recommend(&history, 6).unwrap().len(), 6);
    // 25 products, 3 purchased.
    assert_eq!(svc.recommend(&history, 50).unwrap().len(), 22);
    assert!(svc.recommend(&history, 0).unwrap().is_empty());
}

#[test]
fn scores_stay_in_unit_interval() {
    for backend in BACKENDS {
        let catalog = sample_catalog();
        let history = history_of(&catalog, &[3, 3, 6, 22]);
        let mut svc = service(catalog, backend);
        svc.train(&history).unwrap();
        for rec in svc.recommend(&history, 25).unwrap() {
            let s = rec.score.value();
            assert!((0.0..=1.0).contains(&s), "{backend}: score {s}");
        }
    }
}

#[test]
fn inference_is_deterministic() {
    for backend in BACKENDS {
        let catalog = sample_catalog();
        let history = history_of(&catalog, &[1, 12]);
        let mut svc = service(catalog, backend);
        svc.train(&history).unwrap();
        let first = svc.recommend(&history, 6).unwrap();
        let second = svc.recommend(&history, 6).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn identically_configured_services_agree() {
    let history = history_of(&sample_catalog(), &[4, 19]);
    let mut a = service(sample_catalog(), ScorerBackend::Neural);
    let mut b = service(sample_catalog(), ScorerBackend::Neural);
    assert_eq!(
        a.update(&history).unwrap().recommendations,
        b.update(&history).unwrap().recommendations
    );
}

#[test]
fn update_returns_desired_count() {
    let catalog = sample_catalog();
    let ids: Vec<u64> = (1..=12).collect();
    let mut svc = service(catalog.clone(), ScorerBackend::Heuristic);
    for len in [1usize, 2, 3, 5, 8, 10, 12] {
        let history = history_of(&catalog, &ids[..len]);
        let batch = svc.update(&history).unwrap();
        assert_eq!(batch.recommendations.len(), desired_count(len), "len {len}");
    }
}

#[test]
fn empty_history_update_is_a_no_op() {
    let mut svc = service(sample_catalog(), ScorerBackend::Heuristic);
    let batch = svc.update(&UserHistory::new()).unwrap();
    assert!(batch.recommendations.is_empty());
    assert_eq!(batch.stats.generation, 0);
    assert!(batch.stats.training_log.is_empty());
}

#[test]
fn every_train_advances_generation() {
    let catalog = sample_catalog();
    let history = history_of(&catalog, &[1, 2]);
    let mut svc = service(catalog, ScorerBackend::Heuristic);

    svc.train(&history).unwrap();
    svc.train(&history).unwrap();

    let stats = svc.stats();
    assert_eq!(stats.generation, 2);
    assert_eq!(stats.training_log.len(), 2);
    assert_eq!(stats.training_log[0].generation, 1);
    assert_eq!(stats.training_log[1].generation, 2);
    assert_eq!(stats.latest_event().unwrap().num_purchases, 2);
}

#[test]
fn six_recommendations_span_two_categories() {
    for backend in BACKENDS {
        let catalog = sample_catalog();
        let history = history_of(&catalog, &[1, 2, 3, 4]);
        let mut svc = service(catalog, backend);
        svc.train(&history).unwrap();
        let recs = svc.recommend(&history, 6).unwrap();
        let categories: HashSet<_> = recs.iter().filter_map(|r| r.category()).collect();
        assert!(categories.len() >= 2, "{backend}: {categories:?}");
    }
}

#[test]
fn audio_repeats_above_floor_fill_the_list() {
    let catalog = audio_electronics_catalog();
    let history = history_of(&catalog, &[1]);
    let mut svc = service(catalog, ScorerBackend::Heuristic);
    let batch = svc.update(&history).unwrap();

    assert_eq!(batch.recommendations.len(), 4);
    assert!(batch
        .recommendations
        .iter()
        .all(|r| r.category() == Some("Audio")));
}

#[test]
fn audio_repeats_below_floor_make_room_for_electronics() {
    let catalog = audio_electronics_catalog();
    let history = history_of(&catalog, &[1]);
    let mut config = config(ScorerBackend::Heuristic);
    config.ranking.floor = ScoreFloorConfig {
        fixed: Some(0.9995),
        ..ScoreFloorConfig::default()
    };
    let mut svc = RecommendationService::new(Arc::new(catalog), config).unwrap();
    let batch = svc.update(&history).unwrap();

    let audio = batch
        .recommendations
        .iter()
        .filter(|r| r.category() == Some("Audio"))
        .count();
    assert_eq!(batch.recommendations.len(), 4);
    assert_eq!(audio, 3);
    assert_eq!(batch.recommendations[3].category(), Some("Electronics"));
}

#[test]
fn rationale_prefers_category_frequency() {
    let catalog = sample_catalog();
    let history = history_of(&catalog, &[1, 2]);
    let mut svc = service(catalog, ScorerBackend::Heuristic);
    svc.train(&history).unwrap();
    let recs = svc.recommend(&history, 23).unwrap();

    let earbuds = recs.iter().find(|r| r.product.id == 5).unwrap();
    assert_eq!(earbuds.rationale, "You often buy Audio (2 purchases)");
    // Smartwatch shares "wireless" with the history.
    let watch = recs.iter().find(|r| r.product.id == 8).unwrap();
    assert_eq!(watch.rationale, "Matches your interests: wireless");
}

#[test]
fn reset_returns_to_untrained_state() {
    for backend in BACKENDS {
        let catalog = sample_catalog();
        let history = history_of(&catalog, &[1, 6]);
        let mut svc = service(catalog, backend);
        let untrained = svc.stats().parameters;
        svc.update(&history).unwrap();
        svc.reset();

        let stats = svc.stats();
        assert_eq!(stats.generation, 0);
        assert!(stats.training_log.is_empty());
        assert_eq!(stats.parameters, untrained);
        assert!(svc.recommend(&UserHistory::new(), 6).unwrap().is_empty());
    }
}

#[test]
fn featured_ranks_whole_catalog_by_prior() {
    let svc = service(sample_catalog(), ScorerBackend::Heuristic);
    let featured = svc.featured(6);
    assert_eq!(featured.len(), 6);
    assert!(featured.iter().all(|r| r.rationale == POPULAR_PICK));
    assert!(featured.iter().all(|r| r.score.value() < 0.3));
    assert_eq!(featured, svc.featured(6));
}

#[test]
fn malformed_products_are_excluded() {
    let catalog = Catalog::from_json(&malformed_catalog_json()).unwrap();
    let history = history_of(&catalog, &[1]);
    let mut svc = service(catalog, ScorerBackend::Heuristic);
    let batch = svc.update(&history).unwrap();
    let ids: HashSet<u64> = batch.recommendations.iter().map(|r| r.product.id).collect();
    assert!(!ids.contains(&3));
    assert!(!ids.contains(&4));
    assert_eq!(ids, HashSet::from([2, 5, 6]));
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = BasketConfig::default();
    config.scoring.hidden_layers = vec![];
    assert!(RecommendationService::new(Arc::new(sample_catalog()), config).is_err());
}

#[test]
fn non_finite_config_is_rejected_before_scorer_construction() {
    let mut config = BasketConfig::default();
    config.training.initial_weight_max = f64::INFINITY;
    assert!(RecommendationService::new(Arc::new(sample_catalog()), config).is_err());

    let mut config = BasketConfig::default();
    config.training.learning_rate = f64::NAN;
    assert!(RecommendationService::new(Arc::new(sample_catalog()), config).is_err());
}

#[test]
fn stats_expose_backend_parameters() {
    let catalog = sample_catalog();
    let history = history_of(&catalog, &[1]);
    let mut heuristic = service(catalog.clone(), ScorerBackend::Heuristic);
    let mut neural = service(catalog, ScorerBackend::Neural);
    heuristic.update(&history).unwrap();
    neural.update(&history).unwrap();

    assert!(matches!(
        heuristic.stats().parameters,
        ModelParameters::Heuristic { .. }
    ));
    match neural.stats().parameters {
        ModelParameters::Neural { layers } => assert_eq!(layers.len(), 3),
        other => panic!("expected neural parameters, got {other:?}"),
    }
}

#[test]
fn quality_report_follows_the_latest_pass() {
    let catalog = sample_catalog();
    let history = history_of(&catalog, &[1, 2, 11]);
    let mut svc = service(catalog, ScorerBackend::Heuristic);
    let batch = svc.update(&history).unwrap();

    let report = svc.quality_report(&history, &batch.recommendations).unwrap();
    assert_eq!(report.loss_trend.len(), 1);
    assert!((0.0..=100.0).contains(&report.precision_at_k));
    assert!((0.0..=100.0).contains(&report.accuracy));
    assert!(svc
        .quality_report(&history_of(svc.catalog(), &[1]), &batch.recommendations)
        .is_none());
}

fn arb_ids() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..=25, 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn recommendations_are_unique_unpurchased_and_bounded(ids in arb_ids(), n in 0usize..30) {
        let catalog = sample_catalog();
        let history = history_of(&catalog, &ids);
        let mut svc = service(catalog, ScorerBackend::Heuristic);
        svc.train(&history).unwrap();
        let recs = svc.recommend(&history, n).unwrap();

        let purchased = history.purchased_ids();
        let available = if history.is_empty() { 0 } else { 25 - purchased.len() };
        prop_assert_eq!(recs.len(), n.min(available));

        let unique: HashSet<u64> = recs.iter().map(|r| r.product.id).collect();
        prop_assert_eq!(unique.len(), recs.len());
        prop_assert!(unique.is_disjoint(&purchased));
        for rec in &recs {
            prop_assert!((0.0..=1.0).contains(&rec.score.value()));
        }
    }

    #[test]
    fn generation_counts_non_empty_passes(passes in prop::collection::vec(arb_ids(), 1..6)) {
        let catalog = sample_catalog();
        let mut svc = service(catalog.clone(), ScorerBackend::Heuristic);
        let mut expected = 0u64;
        for ids in &passes {
            let history = history_of(&catalog, ids);
            svc.train(&history).unwrap();
            if !history.is_empty() {
                expected += 1;
            }
        }
        prop_assert_eq!(svc.generation(), expected);
        prop_assert_eq!(svc.stats().training_log.len() as u64, expected);
    }
}
