/// Basket engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of trailing purchases considered "recent" for the recency bonus.
pub const RECENT_PURCHASE_WINDOW: usize = 3;

/// Number of derived price scalars appended to every feature vector.
pub const DERIVED_FEATURE_COUNT: usize = 3;

/// Price deviation reported for a product when the history is empty.
pub const EMPTY_HISTORY_PRICE_DEVIATION: f64 = 0.5;

/// Maximum number of shared tags named in a rationale.
pub const MAX_RATIONALE_TAGS: usize = 2;
