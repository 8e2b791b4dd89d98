use crate::app_context::AppContext;
use crate::guessing;
use crate::selection;
use crate::sessions::consts::MAX_GUESS_LENGTH;
use crate::sessions::handlers::responses::{
    GiveUpError, GiveUpResponse, GuessSubmissionError, NextRoundError, NextRoundResponse,
    SessionStateError, SessionStateResponse, SubmitGuessResponse,
};
use crate::sessions::message_types::{
    AnswerRevealed, AnswerRevealedPayload, ScoreChanged, ScoreChangedPayload,
    ServerSentPresenterMessage, SessionRestarted, SessionUnplayable, ShowPanorama,
    ShowPanoramaPayload, StatusSeverity,
};
use crate::sessions::models::{GameSession, RoundOutcome, SessionPhase};
use crate::storage::interface::ISessionStorage;
use unicode_segmentation::UnicodeSegmentation;

pub struct SessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
    session_id: String,
}

impl<SS> SessionHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, session_id: String) -> Self {
        Self {
            app_context,
            session_id,
        }
    }

    pub async fn state(&self) -> SessionStateResponse {
        if !self.app_context.sessions.exists(&self.session_id).await {
            return SessionStateResponse {
                error: true,
                error_code: Some(SessionStateError::SessionNotFound),
                score: None,
                rounds_played: None,
                phase: None,
            };
        }
        let session = self.app_context.sessions.snapshot(&self.session_id).await;
        SessionStateResponse {
            error: false,
            error_code: None,
            score: Some(session.score),
            rounds_played: Some(session.rounds_played),
            phase: Some(session.phase.name().to_string()),
        }
    }

    /// Picks the next place and resolves it to a panorama position. Places
    /// without nearby imagery are skipped (and stay marked as used); the
    /// whole pool is reset and retried once before the session is declared
    /// unplayable.
    pub async fn next_round(&self) -> NextRoundResponse {
        if !self.app_context.sessions.exists(&self.session_id).await {
            return NextRoundResponse {
                error: true,
                error_code: Some(NextRoundError::SessionNotFound),
                messages: vec![],
            };
        }
        match self.app_context.sessions.phase(&self.session_id).await {
            SessionPhase::Unplayable => {
                return NextRoundResponse {
                    error: true,
                    error_code: Some(NextRoundError::SessionUnplayable),
                    messages: unplayable_messages(),
                };
            }
            SessionPhase::Active { .. } => {
                return NextRoundResponse {
                    error: true,
                    error_code: Some(NextRoundError::RoundStillActive),
                    messages: vec![],
                };
            }
            SessionPhase::Idle | SessionPhase::Resolved { .. } => {}
        }

        let mut messages = Vec::new();
        let mut pool_was_reset = false;
        let mut attempts = 0;
        let max_attempts = self.app_context.catalog.len();
        loop {
            if attempts > max_attempts {
                return self.declare_unplayable(messages).await;
            }
            let used_ids = self.app_context.sessions.used_ids(&self.session_id).await;
            let selected = {
                let mut rng = rand::thread_rng();
                selection::select_next(&self.app_context.catalog, &used_ids, &mut rng).cloned()
            };
            let place = match selected {
                Some(place) => place,
                None => {
                    if pool_was_reset {
                        return self.declare_unplayable(messages).await;
                    }
                    pool_was_reset = true;
                    self.app_context.sessions.clear_used(&self.session_id).await;
                    tracing::info!(
                        session_id = %self.session_id,
                        "Every place has been played; restarting the pool.",
                    );
                    messages.push(ServerSentPresenterMessage::SessionRestarted {
                        r#type: SessionRestarted,
                    });
                    messages.push(ServerSentPresenterMessage::status(
                        StatusSeverity::Info,
                        "You have seen every place; starting over.",
                    ));
                    continue;
                }
            };
            self.app_context
                .sessions
                .mark_used(&self.session_id, &place.id)
                .await;
            attempts += 1;

            let cached = self
                .app_context
                .sessions
                .cached_coverage(&self.session_id, &place.id)
                .await;
            let outcome = match cached {
                Some(outcome) => outcome,
                None => {
                    let outcome = self.app_context.resolver.resolve(place.position).await;
                    self.app_context
                        .sessions
                        .record_coverage(&self.session_id, &place.id, outcome)
                        .await;
                    outcome
                }
            };
            let position = match outcome {
                Some(position) => position,
                None => {
                    tracing::info!(
                        session_id = %self.session_id,
                        place_id = %place.id,
                        "No imagery near the place; trying another one.",
                    );
                    continue;
                }
            };

            self.app_context
                .sessions
                .begin_round(&self.session_id, &place.id, position)
                .await;
            messages.push(ServerSentPresenterMessage::ShowPanorama {
                r#type: ShowPanorama,
                payload: ShowPanoramaPayload {
                    position,
                    point_of_view: place.point_of_view,
                },
            });
            messages.push(ServerSentPresenterMessage::status(
                StatusSeverity::Info,
                "Where is this? Type your guess.",
            ));
            return NextRoundResponse {
                error: false,
                error_code: None,
                messages,
            };
        }
    }

    pub async fn submit_guess(&self, raw_guess: &str) -> SubmitGuessResponse {
        if !self.app_context.sessions.exists(&self.session_id).await {
            return SubmitGuessResponse {
                error: true,
                error_code: Some(GuessSubmissionError::SessionNotFound),
                correct: None,
                messages: vec![],
            };
        }
        let session = self.app_context.sessions.snapshot(&self.session_id).await;
        let place_id = match &session.phase {
            SessionPhase::Active { place_id, .. } => place_id.clone(),
            _ => {
                return SubmitGuessResponse {
                    error: true,
                    error_code: Some(GuessSubmissionError::NoActiveRound),
                    correct: None,
                    messages: vec![],
                };
            }
        };
        if raw_guess.graphemes(true).count() > MAX_GUESS_LENGTH {
            return SubmitGuessResponse {
                error: true,
                error_code: Some(GuessSubmissionError::GuessTooLong),
                correct: None,
                messages: vec![ServerSentPresenterMessage::status(
                    StatusSeverity::Warn,
                    "That guess is too long.",
                )],
            };
        }
        if guessing::normalize(raw_guess).is_empty() {
            return SubmitGuessResponse {
                error: true,
                error_code: Some(GuessSubmissionError::EmptyGuess),
                correct: None,
                messages: vec![ServerSentPresenterMessage::status(
                    StatusSeverity::Warn,
                    "Type a guess before submitting.",
                )],
            };
        }

        let place = self.app_context.catalog.by_id(&place_id).unwrap();
        let correct = guessing::is_correct(raw_guess, place, session.mode);
        let outcome = if correct {
            RoundOutcome::Correct
        } else {
            RoundOutcome::Incorrect
        };
        let updated = match self
            .app_context
            .sessions
            .resolve_round(&self.session_id, outcome)
            .await
        {
            Some(updated) => updated,
            None => {
                return SubmitGuessResponse {
                    error: true,
                    error_code: Some(GuessSubmissionError::NoActiveRound),
                    correct: None,
                    messages: vec![],
                };
            }
        };

        let mut messages = Vec::with_capacity(3);
        if correct {
            messages.push(ServerSentPresenterMessage::status(
                StatusSeverity::Success,
                "Correct!",
            ));
        } else {
            messages.push(ServerSentPresenterMessage::status(
                StatusSeverity::Warn,
                "Not this time.",
            ));
        }
        messages.extend(reveal_messages(&updated, place_id.as_str(), &self.app_context));
        SubmitGuessResponse {
            error: false,
            error_code: None,
            correct: Some(correct),
            messages,
        }
    }

    pub async fn give_up(&self) -> GiveUpResponse {
        if !self.app_context.sessions.exists(&self.session_id).await {
            return GiveUpResponse {
                error: true,
                error_code: Some(GiveUpError::SessionNotFound),
                messages: vec![],
            };
        }
        let updated = match self
            .app_context
            .sessions
            .resolve_round(&self.session_id, RoundOutcome::GaveUp)
            .await
        {
            Some(updated) => updated,
            None => {
                return GiveUpResponse {
                    error: true,
                    error_code: Some(GiveUpError::NoActiveRound),
                    messages: vec![],
                };
            }
        };
        let place_id = match &updated.phase {
            SessionPhase::Resolved { place_id, .. } => place_id.clone(),
            _ => unreachable!("a resolved round always carries its place id"),
        };
        let mut messages = vec![ServerSentPresenterMessage::status(
            StatusSeverity::Warn,
            "Better luck next time.",
        )];
        messages.extend(reveal_messages(&updated, place_id.as_str(), &self.app_context));
        GiveUpResponse {
            error: false,
            error_code: None,
            messages,
        }
    }

    async fn declare_unplayable(
        &self,
        mut messages: Vec<ServerSentPresenterMessage>,
    ) -> NextRoundResponse {
        self.app_context
            .sessions
            .mark_unplayable(&self.session_id)
            .await;
        tracing::warn!(
            session_id = %self.session_id,
            "No place in the catalog has panorama coverage; the session is unplayable.",
        );
        messages.extend(unplayable_messages());
        NextRoundResponse {
            error: true,
            error_code: Some(NextRoundError::SessionUnplayable),
            messages,
        }
    }
}

fn reveal_messages<SS>(
    session: &GameSession,
    place_id: &str,
    app_context: &AppContext<SS>,
) -> Vec<ServerSentPresenterMessage>
where
    SS: ISessionStorage,
{
    let place = app_context.catalog.by_id(place_id).unwrap();
    vec![
        ServerSentPresenterMessage::ScoreChanged {
            r#type: ScoreChanged,
            payload: ScoreChangedPayload {
                score: session.score,
                rounds_played: session.rounds_played,
            },
        },
        ServerSentPresenterMessage::AnswerRevealed {
            r#type: AnswerRevealed,
            payload: AnswerRevealedPayload {
                name: place.name.clone(),
                city: place.city.clone(),
                country: place.country.clone(),
            },
        },
    ]
}

fn unplayable_messages() -> Vec<ServerSentPresenterMessage> {
    vec![
        ServerSentPresenterMessage::status(
            StatusSeverity::Error,
            "No playable places are left; the game cannot continue.",
        ),
        ServerSentPresenterMessage::SessionUnplayable {
            r#type: SessionUnplayable,
        },
    ]
}
