use crate::catalog::models::LatLng;
use crate::guessing::MatchMode;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug)]
pub struct GameSession {
    pub mode: MatchMode,
    pub used_ids: HashSet<String>,
    /// Lookup outcomes memoized per place id, negative outcomes included.
    pub coverage_cache: HashMap<String, Option<LatLng>>,
    pub phase: SessionPhase,
    pub score: i64,
    pub rounds_played: u64,
}

impl GameSession {
    pub fn new(mode: MatchMode) -> Self {
        GameSession {
            mode,
            used_ids: HashSet::new(),
            coverage_cache: HashMap::new(),
            phase: SessionPhase::Idle,
            score: 0,
            rounds_played: 0,
        }
    }

    pub fn begin_round(&mut self, place_id: &str, resolved_position: LatLng) {
        self.phase = SessionPhase::Active {
            place_id: place_id.to_string(),
            resolved_position,
        };
    }

    /// Applies a round outcome: adjusts the score, bumps the round counter
    /// and moves to `Resolved`. Returns `false` without touching anything
    /// when no round is active.
    pub fn resolve_round(&mut self, outcome: RoundOutcome) -> bool {
        let place_id = match &self.phase {
            SessionPhase::Active { place_id, .. } => place_id.clone(),
            _ => return false,
        };
        self.score += match outcome {
            RoundOutcome::Correct => 1,
            RoundOutcome::Incorrect | RoundOutcome::GaveUp => -1,
        };
        self.rounds_played += 1;
        self.phase = SessionPhase::Resolved { place_id, outcome };
        true
    }

    pub fn may_start_round(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Idle | SessionPhase::Resolved { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    Idle,
    Active {
        place_id: String,
        resolved_position: LatLng,
    },
    Resolved {
        place_id: String,
        outcome: RoundOutcome,
    },
    Unplayable,
}

impl SessionPhase {
    /// Wire name; the active place id stays server-side so that the state
    /// endpoint cannot be used to peek at the answer.
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Active { .. } => "active",
            SessionPhase::Resolved { .. } => "resolved",
            SessionPhase::Unplayable => "unplayable",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundOutcome {
    Correct,
    Incorrect,
    GaveUp,
}
