use crate::catalog::models::{LatLng, PointOfView};
use crate::guessing::MatchMode;
use serde::{Deserialize, Serialize};
use serde_unit_struct::Serialize_unit_struct;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServerSentPresenterMessage {
    ShowPanorama {
        r#type: ShowPanorama,
        payload: ShowPanoramaPayload,
    },
    StatusMessage {
        r#type: StatusMessage,
        payload: StatusMessagePayload,
    },
    ScoreChanged {
        r#type: ScoreChanged,
        payload: ScoreChangedPayload,
    },
    AnswerRevealed {
        r#type: AnswerRevealed,
        payload: AnswerRevealedPayload,
    },
    SessionRestarted {
        r#type: SessionRestarted,
    },
    SessionUnplayable {
        r#type: SessionUnplayable,
    },
}

#[derive(Debug, Serialize_unit_struct)]
pub struct ShowPanorama;

#[derive(Debug, Serialize_unit_struct)]
pub struct StatusMessage;

#[derive(Debug, Serialize_unit_struct)]
pub struct ScoreChanged;

#[derive(Debug, Serialize_unit_struct)]
pub struct AnswerRevealed;

#[derive(Debug, Serialize_unit_struct)]
pub struct SessionRestarted;

#[derive(Debug, Serialize_unit_struct)]
pub struct SessionUnplayable;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowPanoramaPayload {
    pub position: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_view: Option<PointOfView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessagePayload {
    pub severity: StatusSeverity,
    pub text: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusSeverity {
    Info,
    Success,
    Warn,
    Error,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreChangedPayload {
    pub score: i64,
    pub rounds_played: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRevealedPayload {
    pub name: String,
    pub city: String,
    pub country: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionPayload {
    #[serde(default)]
    pub mode: Option<MatchMode>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessPayload {
    pub guess: String,
}

impl ServerSentPresenterMessage {
    pub fn status(severity: StatusSeverity, text: impl Into<String>) -> Self {
        ServerSentPresenterMessage::StatusMessage {
            r#type: StatusMessage,
            payload: StatusMessagePayload {
                severity,
                text: text.into(),
            },
        }
    }
}
