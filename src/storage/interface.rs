use crate::catalog::models::LatLng;
use crate::guessing::MatchMode;
use crate::sessions::models::{GameSession, RoundOutcome, SessionPhase};
use std::collections::HashSet;

pub trait ISessionStorage: SessionRepo + RoundFlowRepo + GuessFlowRepo + CoverageCacheRepo {}

pub trait SessionRepo {
    async fn create(&self, mode: MatchMode) -> String;

    async fn exists(&self, session_id: &str) -> bool;

    async fn snapshot(&self, session_id: &str) -> GameSession;
}

pub trait RoundFlowRepo {
    async fn phase(&self, session_id: &str) -> SessionPhase;

    async fn used_ids(&self, session_id: &str) -> HashSet<String>;

    async fn mark_used(&self, session_id: &str, place_id: &str);

    async fn clear_used(&self, session_id: &str);

    async fn begin_round(&self, session_id: &str, place_id: &str, position: LatLng);

    async fn mark_unplayable(&self, session_id: &str);
}

pub trait GuessFlowRepo {
    /// Applies the outcome to the active round atomically; `None` when no
    /// round was active (nothing was mutated).
    async fn resolve_round(&self, session_id: &str, outcome: RoundOutcome) -> Option<GameSession>;
}

pub trait CoverageCacheRepo {
    /// Outer `None`: nothing cached yet. Inner `None`: cached "no coverage".
    async fn cached_coverage(&self, session_id: &str, place_id: &str) -> Option<Option<LatLng>>;

    async fn record_coverage(&self, session_id: &str, place_id: &str, outcome: Option<LatLng>);
}
