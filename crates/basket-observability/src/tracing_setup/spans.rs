//! Span definitions per operation: training, recommendation, ranking.

/// Create a training span.
#[macro_export]
macro_rules! training_span {
    ($backend:expr, $num_purchases:expr) => {
        tracing::info_span!(
            "basket.training",
            backend = %$backend,
            num_purchases = $num_purchases
        )
    };
}

/// Create a recommendation span.
#[macro_export]
macro_rules! recommend_span {
    ($history_len:expr, $target:expr) => {
        tracing::info_span!(
            "basket.recommend",
            history_len = $history_len,
            target = $target
        )
    };
}

/// Create a ranking span.
#[macro_export]
macro_rules! ranking_span {
    ($candidates:expr, $target:expr) => {
        tracing::debug_span!("basket.ranking", candidates = $candidates, target = $target)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const TRAINING: &str = "basket.training";
    pub const RECOMMEND: &str = "basket.recommend";
    pub const RANKING: &str = "basket.ranking";
}
