use crate::sessions::message_types::ServerSentPresenterMessage;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStateResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionStateError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds_played: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionStateError {
    SessionNotFound,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<NextRoundError>,
    pub messages: Vec<ServerSentPresenterMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NextRoundError {
    SessionNotFound,
    RoundStillActive,
    SessionUnplayable,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GuessSubmissionError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
    pub messages: Vec<ServerSentPresenterMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessSubmissionError {
    SessionNotFound,
    NoActiveRound,
    EmptyGuess,
    GuessTooLong,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiveUpResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GiveUpError>,
    pub messages: Vec<ServerSentPresenterMessage>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GiveUpError {
    SessionNotFound,
    NoActiveRound,
}
