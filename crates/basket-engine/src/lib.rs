//! # basket-engine
//!
//! Orchestrates a train-then-recommend pass over the feature, scoring,
//! learning and ranking crates. One [`RecommendationService`] per user
//! session; [`SessionManager`] owns the sessions and persists histories
//! through an [`IHistoryStore`](basket_core::traits::IHistoryStore).

pub mod count;
pub mod rationale;
pub mod service;
pub mod session;
pub mod store;

pub use count::desired_count;
pub use service::RecommendationService;
pub use session::{Session, SessionManager, SessionSnapshot};
pub use store::InMemoryHistoryStore;
