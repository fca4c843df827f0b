//! Per-user sessions: one service and one history each, behind a lock.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use basket_core::errors::{BasketError, BasketResult};
use basket_core::models::{ModelStats, RecommendationBatch};
use basket_core::traits::IHistoryStore;
use basket_core::{BasketConfig, Catalog, ProductId, PurchaseRecord, Recommendation, UserHistory};

use crate::service::RecommendationService;

/// A logged-in user's model, history and latest recommendations.
#[derive(Debug)]
pub struct Session {
    user_id: String,
    service: RecommendationService,
    history: UserHistory,
    recommendations: Vec<Recommendation>,
}

impl Session {
    fn new(user_id: String, service: RecommendationService, history: UserHistory) -> Self {
        Self {
            user_id,
            service,
            history,
            recommendations: Vec::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn history(&self) -> &UserHistory {
        &self.history
    }

    pub fn service(&self) -> &RecommendationService {
        &self.service
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    fn run_pass(&mut self) -> BasketResult<RecommendationBatch> {
        let batch = self.service.update(&self.history)?;
        self.recommendations = batch.recommendations.clone();
        Ok(batch)
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user_id: self.user_id.clone(),
            history: self.history.clone(),
            recommendations: self.recommendations.clone(),
            stats: self.service.stats(),
        }
    }
}

/// Owned copy of a session's observable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user_id: String,
    pub history: UserHistory,
    pub recommendations: Vec<Recommendation>,
    pub stats: ModelStats,
}

/// Concurrent session registry keyed by user id.
///
/// Each mutation holds that session's lock for the full train-then-recommend
/// pass, so passes on one session never interleave. Distinct sessions run
/// independently.
pub struct SessionManager {
    catalog: Arc<Catalog>,
    config: BasketConfig,
    store: Arc<dyn IHistoryStore>,
    sessions: DashMap<String, Arc<Mutex<Session>>>,
}

impl SessionManager {
    pub fn new(
        catalog: Arc<Catalog>,
        config: BasketConfig,
        store: Arc<dyn IHistoryStore>,
    ) -> BasketResult<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            store,
            sessions: DashMap::new(),
        })
    }

    /// Start (or restart) a session from the stored history.
    ///
    /// A non-empty stored history gets one pass immediately.
    pub fn login(&self, user_id: &str) -> BasketResult<SessionSnapshot> {
        let history = self.store.load(user_id)?;
        let service = RecommendationService::new(Arc::clone(&self.catalog), self.config.clone())?;
        let mut session = Session::new(user_id.to_string(), service, history);
        if !session.history.is_empty() {
            session.run_pass()?;
        }
        let snapshot = session.snapshot();
        self.sessions
            .insert(user_id.to_string(), Arc::new(Mutex::new(session)));
        info!(
            user_id = user_id,
            num_purchases = snapshot.history.len(),
            "session started"
        );
        Ok(snapshot)
    }

    /// Append purchases of catalog products, persist, and run one pass.
    ///
    /// Unknown ids reject the whole call before anything is recorded.
    pub fn purchase(
        &self,
        user_id: &str,
        product_ids: &[ProductId],
        at: DateTime<Utc>,
    ) -> BasketResult<RecommendationBatch> {
        let records = product_ids
            .iter()
            .map(|&id| {
                self.catalog
                    .get(id)
                    .cloned()
                    .map(|product| PurchaseRecord::new(product, at))
                    .ok_or(BasketError::UnknownProduct { id })
            })
            .collect::<BasketResult<Vec<_>>>()?;

        let handle = self.handle(user_id)?;
        let mut session = lock(&handle, user_id)?;

        let mut next = session.history.clone();
        next.extend(records);
        self.store.save(user_id, &next)?;
        session.history = next;

        session.run_pass()
    }

    pub fn current(&self, user_id: &str) -> BasketResult<SessionSnapshot> {
        let handle = self.handle(user_id)?;
        let session = lock(&handle, user_id)?;
        Ok(session.snapshot())
    }

    /// Clear the history (stored copy included) and reset the model.
    pub fn reset(&self, user_id: &str) -> BasketResult<SessionSnapshot> {
        let handle = self.handle(user_id)?;
        let mut session = lock(&handle, user_id)?;
        self.store.clear(user_id)?;
        session.history.clear();
        session.recommendations.clear();
        session.service.reset();
        info!(user_id = user_id, "session reset");
        Ok(session.snapshot())
    }

    /// Drop the session. The stored history is kept.
    pub fn logout(&self, user_id: &str) -> BasketResult<()> {
        if self.sessions.remove(user_id).is_none() {
            return Err(BasketError::SessionNotFound {
                user_id: user_id.to_string(),
            });
        }
        info!(user_id = user_id, "session ended");
        Ok(())
    }

    /// Cold-start list for visitors without a session.
    pub fn featured(&self, n: usize) -> BasketResult<Vec<Recommendation>> {
        let service = RecommendationService::new(Arc::clone(&self.catalog), self.config.clone())?;
        Ok(service.featured(n))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn user_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }

    // Clone the handle so the map shard is released before locking.
    fn handle(&self, user_id: &str) -> BasketResult<Arc<Mutex<Session>>> {
        self.sessions
            .get(user_id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| BasketError::SessionNotFound {
                user_id: user_id.to_string(),
            })
    }
}

fn lock<'a>(handle: &'a Mutex<Session>, user_id: &str) -> BasketResult<MutexGuard<'a, Session>> {
    handle.lock().map_err(|_| BasketError::SessionPoisoned {
        user_id: user_id.to_string(),
    })
}
