use crate::app_context::AppContext;
use crate::sessions::handlers::http::SessionHttpHandler;
use crate::sessions::handlers::responses::{GiveUpResponse, NextRoundResponse, SubmitGuessResponse};
use crate::sessions::message_types::SubmitGuessPayload;
use crate::storage::interface::ISessionStorage;
use axum::extract::{Path, State};
use axum::response::Json;

pub async fn next_round<SS>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<SS>>,
) -> Json<NextRoundResponse>
where
    SS: ISessionStorage,
{
    let response = SessionHttpHandler::new(app_context, session_id)
        .next_round()
        .await;
    Json(response)
}

pub async fn submit_guess<SS>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<SS>>,
    Json(payload): Json<SubmitGuessPayload>,
) -> Json<SubmitGuessResponse>
where
    SS: ISessionStorage,
{
    let response = SessionHttpHandler::new(app_context, session_id)
        .submit_guess(&payload.guess)
        .await;
    Json(response)
}

pub async fn give_up<SS>(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<SS>>,
) -> Json<GiveUpResponse>
where
    SS: ISessionStorage,
{
    let response = SessionHttpHandler::new(app_context, session_id)
        .give_up()
        .await;
    Json(response)
}
