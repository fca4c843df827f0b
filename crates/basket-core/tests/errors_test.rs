use basket_core::errors::*;

#[test]
fn training_error_diverged_carries_epoch_and_loss() {
    let err = TrainingError::Diverged {
        epoch: 7,
        loss: f64::INFINITY,
    };
    let msg = err.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains("inf"));
}

#[test]
fn training_error_resource_exhausted_carries_values() {
    let err = TrainingError::ResourceExhausted {
        examples: 5000,
        limit: 2000,
    };
    let msg = err.to_string();
    assert!(msg.contains("5000"));
    assert!(msg.contains("2000"));
}

#[test]
fn validation_error_carries_product_id() {
    let err = ValidationError::MissingCategory { id: 42 };
    assert!(err.to_string().contains("42"));

    let err = ValidationError::UnknownCategory {
        id: 9,
        category: "Garden".into(),
    };
    assert!(err.to_string().contains("Garden"));
}

#[test]
fn config_error_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "ranking.floor.fixed".into(),
        message: "must be between 0.0 and 1.0".into(),
    };
    assert!(err.to_string().contains("ranking.floor.fixed"));
}

// --- From impls ---

#[test]
fn training_error_converts_to_basket_error() {
    let err: BasketError = TrainingError::DimensionMismatch {
        expected: 10,
        actual: 4,
    }
    .into();
    assert!(matches!(err, BasketError::Training(_)));
    assert!(err.to_string().contains("10"));
}

#[test]
fn validation_error_converts_to_basket_error() {
    let err: BasketError = ValidationError::MissingTags { id: 3 }.into();
    assert!(matches!(err, BasketError::Validation(_)));
}

#[test]
fn store_error_converts_to_basket_error() {
    let err: BasketError = StoreError::Corrupt {
        user_id: "ana".into(),
        details: "truncated".into(),
    }
    .into();
    assert!(matches!(err, BasketError::Store(_)));
    assert!(err.to_string().contains("ana"));
}

#[test]
fn serde_json_error_converts_to_serialization() {
    let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
    let err: BasketError = json_err.into();
    assert!(matches!(err, BasketError::Serialization(_)));
}

#[test]
fn session_errors_name_the_user() {
    let missing = BasketError::SessionNotFound {
        user_id: "ana".to_string(),
    };
    assert!(missing.to_string().contains("ana"));
    let poisoned = BasketError::SessionPoisoned {
        user_id: "ben".to_string(),
    };
    assert!(poisoned.to_string().contains("ben"));
}
