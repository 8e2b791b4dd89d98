use crate::catalog::models::LatLng;
use crate::guessing::MatchMode;
use crate::sessions::models::{GameSession, RoundOutcome, SessionPhase};
use crate::storage::interface::{
    CoverageCacheRepo, GuessFlowRepo, ISessionStorage, RoundFlowRepo, SessionRepo,
};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, GameSession>>>,
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn create(&self, mode: MatchMode) -> String {
        let session_id = generate_session_id();
        let session = GameSession::new(mode);
        self.storage.write().await.insert(session_id.clone(), session);
        session_id
    }

    async fn exists(&self, session_id: &str) -> bool {
        self.storage.read().await.contains_key(session_id)
    }

    async fn snapshot(&self, session_id: &str) -> GameSession {
        self.storage.read().await.get(session_id).unwrap().clone()
    }
}

impl RoundFlowRepo for HashMapSessionsStorage {
    async fn phase(&self, session_id: &str) -> SessionPhase {
        self.storage.read().await.get(session_id).unwrap().phase.clone()
    }

    async fn used_ids(&self, session_id: &str) -> HashSet<String> {
        self.storage
            .read()
            .await
            .get(session_id)
            .unwrap()
            .used_ids
            .clone()
    }

    async fn mark_used(&self, session_id: &str, place_id: &str) {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .unwrap()
            .used_ids
            .insert(place_id.to_string());
    }

    async fn clear_used(&self, session_id: &str) {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .unwrap()
            .used_ids
            .clear();
    }

    async fn begin_round(&self, session_id: &str, place_id: &str, position: LatLng) {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .unwrap()
            .begin_round(place_id, position);
    }

    async fn mark_unplayable(&self, session_id: &str) {
        self.storage.write().await.get_mut(session_id).unwrap().phase =
            SessionPhase::Unplayable;
    }
}

impl GuessFlowRepo for HashMapSessionsStorage {
    async fn resolve_round(&self, session_id: &str, outcome: RoundOutcome) -> Option<GameSession> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard.get_mut(session_id).unwrap();
        session.resolve_round(outcome).then(|| session.clone())
    }
}

impl CoverageCacheRepo for HashMapSessionsStorage {
    async fn cached_coverage(&self, session_id: &str, place_id: &str) -> Option<Option<LatLng>> {
        self.storage
            .read()
            .await
            .get(session_id)
            .unwrap()
            .coverage_cache
            .get(place_id)
            .copied()
    }

    async fn record_coverage(&self, session_id: &str, place_id: &str, outcome: Option<LatLng>) {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .unwrap()
            .coverage_cache
            .insert(place_id.to_string(), outcome);
    }
}

fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect()
}
