//! Tests for the HTTP transport against a stub engine.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use ludo_client::{
    ClientErrorKind, GameClient, GameTransport, HttpTransport, Phase, ScreenState,
};

const SESSION: &str = "XYZ789";

/// Session id the stub answers with a bare 400.
const EMPTY_400: &str = "EMPTY";

/// Requests the stub received, as (route, body).
#[derive(Clone, Default)]
struct Stub {
    received: Arc<Mutex<Vec<(String, Value)>>>,
}

impl Stub {
    fn record(&self, route: &str, body: &str) {
        let body = serde_json::from_str(body).unwrap_or(Value::Null);
        self.received
            .lock()
            .expect("lock")
            .push((route.to_string(), body));
    }

    fn bodies(&self, route: &str) -> Vec<Value> {
        self.received
            .lock()
            .expect("lock")
            .iter()
            .filter(|(r, _)| r == route)
            .map(|(_, b)| b.clone())
            .collect()
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"status": "error", "message": "Game not found"})),
    )
        .into_response()
}

fn snapshot_json() -> Value {
    let base = json!({"row": 6, "col": 1, "progress": -1, "home": false});
    let players: Vec<Value> = ["Green", "Red", "Blue", "Yellow"]
        .iter()
        .enumerate()
        .map(|(id, name)| {
            json!({
                "id": id,
                "name": name,
                "color": "#000000",
                "pieces": [base, base, base, base],
            })
        })
        .collect();
    json!({
        "state": 1,
        "current_turn": 0,
        "last_roll": 0,
        "players": players,
        "winner": -1,
    })
}

async fn create(State(stub): State<Stub>) -> Json<Value> {
    stub.record("create", "");
    Json(json!({"status": "success", "data": {"gameId": SESSION}}))
}

async fn state(State(stub): State<Stub>, Path(id): Path<String>) -> Response {
    stub.record("state", "");
    if id == EMPTY_400 {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if id != SESSION {
        return not_found();
    }
    Json(json!({"status": "success", "data": snapshot_json()})).into_response()
}

async fn roll(State(stub): State<Stub>, Path(id): Path<String>, body: String) -> Response {
    stub.record("roll", &body);
    if id != SESSION {
        return not_found();
    }
    Json(json!({"status": "success", "data": {"roll": 4}})).into_response()
}

async fn move_piece(
    State(stub): State<Stub>,
    Path(id): Path<String>,
    body: String,
) -> Response {
    stub.record("move", &body);
    if id != SESSION {
        return not_found();
    }
    Json(json!({"status": "error", "message": "Invalid move"})).into_response()
}

async fn reset(State(stub): State<Stub>, Path(id): Path<String>) -> Response {
    stub.record("reset", "");
    if id != SESSION {
        return not_found();
    }
    Json(json!({"status": "success"})).into_response()
}

async fn spawn_engine() -> (String, Stub) {
    let stub = Stub::default();
    let app = Router::new()
        .route("/api/v1/game/create", post(create))
        .route("/api/v1/game/{id}/state", get(state))
        .route("/api/v1/game/{id}/roll", post(roll))
        .route("/api/v1/game/{id}/move", post(move_piece))
        .route("/api/v1/game/{id}/reset", post(reset))
        .with_state(stub.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    (format!("http://{addr}"), stub)
}

fn transport(url: &str) -> HttpTransport {
    HttpTransport::new(url, Duration::from_secs(5)).expect("transport")
}

#[tokio::test]
async fn test_create_and_fetch_state() {
    let (url, _stub) = spawn_engine().await;
    let transport = transport(&url);

    let created = transport.create_game().await.expect("create");
    let id = created.into_result().expect("success").expect("data").game_id;
    assert_eq!(id, SESSION);

    let state = transport.get_state(&id).await.expect("state");
    let snapshot = state.into_result().expect("success").expect("data");
    assert_eq!(snapshot.state, Phase::AwaitingRoll);
    assert_eq!(snapshot.players.len(), 4);
    assert_eq!(snapshot.players[3].id, Some(3));
    assert!(snapshot.players[0].pieces.iter().all(|p| p.is_in_base()));
    assert_eq!(snapshot.winner_index(), None);
}

#[tokio::test]
async fn test_unknown_session_error_envelope() {
    let (url, _stub) = spawn_engine().await;
    let transport = transport(&url);

    let envelope = transport.get_state("NOPE").await.expect("404 still decodes");

    assert!(!envelope.is_success());
    let err = envelope.into_result().expect_err("failure status");
    assert_eq!(err.kind, ClientErrorKind::Server("Game not found".to_string()));
}

#[tokio::test]
async fn test_roll_sends_player_id() {
    let (url, stub) = spawn_engine().await;
    let transport = transport(&url);

    let envelope = transport.roll(SESSION, 2).await.expect("roll");

    assert_eq!(envelope.data.map(|d| d.roll), Some(4));
    assert_eq!(stub.bodies("roll"), vec![json!({"playerId": 2})]);
}

#[tokio::test]
async fn test_move_sends_player_and_piece() {
    let (url, stub) = spawn_engine().await;
    let transport = transport(&url);

    let envelope = transport.move_piece(SESSION, 1, 3).await.expect("move");

    assert_eq!(envelope.message.as_deref(), Some("Invalid move"));
    assert_eq!(
        stub.bodies("move"),
        vec![json!({"playerId": 1, "pieceId": 3})]
    );
}

#[tokio::test]
async fn test_empty_error_body_is_transport_failure() {
    let (url, _stub) = spawn_engine().await;
    let transport = transport(&url);

    let err = transport.get_state(EMPTY_400).await.expect_err("empty body");

    match err.kind {
        ClientErrorKind::Transport(msg) => assert!(msg.starts_with("HTTP 400"), "{msg}"),
        other => panic!("unexpected kind: {other}"),
    }
}

#[tokio::test]
async fn test_unreachable_engine_is_transport_failure() {
    let transport = transport("http://127.0.0.1:1");

    let err = transport.create_game().await.expect_err("no engine");

    assert!(matches!(err.kind, ClientErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_client_plays_against_stub() {
    let (url, stub) = spawn_engine().await;
    let mut client =
        GameClient::new(transport(&url), ScreenState::new()).with_roll_delay(Duration::ZERO);

    client.create_session().await.expect("session");
    assert_eq!(client.view().pieces().len(), 16);
    assert!(*client.view().roll_enabled());

    let roll = client.roll_dice(0).await.expect("roll");
    assert_eq!(roll, 4);
    assert!(
        client
            .view()
            .log_lines()
            .contains(&"Player 0 rolled a 4".to_string())
    );

    let _ = client.move_piece(0).await.expect_err("stub rejects moves");
    assert!(
        client
            .view()
            .log_lines()
            .contains(&"Invalid move: Invalid move".to_string())
    );

    client.reset_game().await.expect("reset");
    assert_eq!(stub.bodies("reset").len(), 1);
    assert_eq!(stub.bodies("state").len(), 3);
}
