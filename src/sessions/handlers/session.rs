use crate::app_context::AppContext;
use crate::sessions::handlers::http::SessionHttpHandler;
use crate::sessions::handlers::responses::{CreateSessionResponse, SessionStateResponse};
use crate::sessions::message_types::CreateSessionPayload;
use crate::storage::interface::ISessionStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn create<SS>(
    State(app_context): State<AppContext<SS>>,
    payload: Option<Json<CreateSessionPayload>>,
) -> Json<CreateSessionResponse>
where
    SS: ISessionStorage,
{
    let mode = payload.and_then(|Json(payload)| payload.mode).unwrap_or_default();
    let session_id = app_context.sessions.create(mode).await;
    tracing::info!(session_id = %session_id, ?mode, "Created a new game session.");
    Json(CreateSessionResponse { session_id })
}

pub async fn state<SS>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<SS>>,
) -> Json<SessionStateResponse>
where
    SS: ISessionStorage,
{
    let response = SessionHttpHandler::new(app_context, session_id).state().await;
    Json(response)
}
