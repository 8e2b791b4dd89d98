use crate::catalog::Catalog;
use crate::http::tests::{
    test_catalog, test_place, test_server, test_server_with, CoveredEverywhereLookup,
    CoveredNowhereLookup,
};
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;

async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").json(&json!({})).await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["sessionId"].as_str().unwrap().to_string()
}

fn message_types(body: &Value) -> Vec<String> {
    body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|message| message["type"].as_str().unwrap().to_string())
        .collect()
}

fn single_place_server() -> TestServer {
    let catalog = Catalog::new(vec![test_place("eiffel-tower", "Eiffel Tower", "Paris", "France")]);
    test_server_with(catalog, Arc::new(CoveredEverywhereLookup))
}

#[tokio::test]
async fn creating_a_session_returns_an_id() {
    let server = test_server();

    let response = server.post("/sessions").json(&json!({"mode": "country"})).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(!body["sessionId"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn a_full_round_from_panorama_to_correct_guess() {
    let server = single_place_server();
    let session_id = create_session(&server).await;

    let response = server.post(&format!("/sessions/{session_id}/next-round")).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    let types = message_types(&body);
    assert!(types.contains(&"ShowPanorama".to_string()));
    let panorama = &body["messages"][0]["payload"];
    assert_eq!(panorama["position"]["lat"], 48.85826);

    let response = server
        .post(&format!("/sessions/{session_id}/submit-guess"))
        .json(&json!({"guess": "Paris, France"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["correct"], true);
    let score_changed = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|message| message["type"] == "ScoreChanged")
        .unwrap();
    assert_eq!(score_changed["payload"]["score"], 1);
    assert_eq!(score_changed["payload"]["roundsPlayed"], 1);
    let revealed = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|message| message["type"] == "AnswerRevealed")
        .unwrap();
    assert_eq!(revealed["payload"]["name"], "Eiffel Tower");

    let response = server.get(&format!("/sessions/{session_id}")).await;
    let body: Value = response.json();
    assert_eq!(body["score"], 1);
    assert_eq!(body["roundsPlayed"], 1);
    assert_eq!(body["phase"], "resolved");
}

#[tokio::test]
async fn an_exhausted_pool_is_reset_and_the_game_goes_on() {
    let server = single_place_server();
    let session_id = create_session(&server).await;

    let response = server.post(&format!("/sessions/{session_id}/next-round")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    server
        .post(&format!("/sessions/{session_id}/submit-guess"))
        .json(&json!({"guess": "paris"}))
        .await;

    // The only place has been played; the next round must reset the pool
    // and serve it again instead of giving up.
    let response = server.post(&format!("/sessions/{session_id}/next-round")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    let types = message_types(&body);
    assert_eq!(types[0], "SessionRestarted");
    assert!(types.contains(&"ShowPanorama".to_string()));

    let response = server.post(&format!("/sessions/{session_id}/give-up")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    let score_changed = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|message| message["type"] == "ScoreChanged")
        .unwrap();
    assert_eq!(score_changed["payload"]["score"], 0);
    assert_eq!(score_changed["payload"]["roundsPlayed"], 2);
}

#[tokio::test]
async fn a_wrong_guess_decrements_the_score() {
    let server = single_place_server();
    let session_id = create_session(&server).await;
    server.post(&format!("/sessions/{session_id}/next-round")).await;

    let response = server
        .post(&format!("/sessions/{session_id}/submit-guess"))
        .json(&json!({"guess": "atlantis"}))
        .await;

    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["correct"], false);
    let score_changed = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .find(|message| message["type"] == "ScoreChanged")
        .unwrap();
    assert_eq!(score_changed["payload"]["score"], -1);
}

#[tokio::test]
async fn guessing_with_no_active_round_is_a_no_op() {
    let server = test_server();
    let session_id = create_session(&server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/submit-guess"))
        .json(&json!({"guess": "paris"}))
        .await;
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["errorCode"], "noActiveRound");

    let response = server.post(&format!("/sessions/{session_id}/give-up")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["errorCode"], "noActiveRound");

    let response = server.get(&format!("/sessions/{session_id}")).await;
    let body: Value = response.json();
    assert_eq!(body["score"], 0);
    assert_eq!(body["roundsPlayed"], 0);
    assert_eq!(body["phase"], "idle");
}

#[tokio::test]
async fn an_empty_guess_does_not_resolve_the_round() {
    let server = single_place_server();
    let session_id = create_session(&server).await;
    server.post(&format!("/sessions/{session_id}/next-round")).await;

    let response = server
        .post(&format!("/sessions/{session_id}/submit-guess"))
        .json(&json!({"guess": "   "}))
        .await;
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["errorCode"], "emptyGuess");

    // The round is still open and a real guess still lands.
    let response = server
        .post(&format!("/sessions/{session_id}/submit-guess"))
        .json(&json!({"guess": "eiffel tower"}))
        .await;
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["correct"], true);
}

#[tokio::test]
async fn requesting_a_round_while_one_is_active_is_rejected() {
    let server = test_server();
    let session_id = create_session(&server).await;
    server.post(&format!("/sessions/{session_id}/next-round")).await;

    let response = server.post(&format!("/sessions/{session_id}/next-round")).await;

    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["errorCode"], "roundStillActive");
}

#[tokio::test]
async fn a_catalog_without_any_coverage_is_unplayable() {
    let server = test_server_with(test_catalog(), Arc::new(CoveredNowhereLookup));
    let session_id = create_session(&server).await;

    let response = server.post(&format!("/sessions/{session_id}/next-round")).await;
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["errorCode"], "sessionUnplayable");
    assert!(message_types(&body).contains(&"SessionUnplayable".to_string()));

    // Terminal: asking again changes nothing.
    let response = server.post(&format!("/sessions/{session_id}/next-round")).await;
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "sessionUnplayable");

    let response = server.get(&format!("/sessions/{session_id}")).await;
    let body: Value = response.json();
    assert_eq!(body["phase"], "unplayable");
}

#[tokio::test]
async fn unknown_sessions_are_reported() {
    let server = test_server();

    let response = server.post("/sessions/not-a-session/next-round").await;
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "sessionNotFound");

    let response = server.get("/sessions/not-a-session").await;
    let body: Value = response.json();
    assert_eq!(body["errorCode"], "sessionNotFound");
}

#[tokio::test]
async fn country_mode_only_accepts_the_country() {
    let server = single_place_server();
    let response = server.post("/sessions").json(&json!({"mode": "country"})).await;
    let body: Value = response.json();
    let session_id = body["sessionId"].as_str().unwrap().to_string();
    server.post(&format!("/sessions/{session_id}/next-round")).await;

    let response = server
        .post(&format!("/sessions/{session_id}/submit-guess"))
        .json(&json!({"guess": "paris"}))
        .await;

    let body: Value = response.json();
    assert_eq!(body["correct"], false);
}
