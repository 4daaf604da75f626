//! Tests for decoding engine responses.

use ludo_client::protocol::{IN_BASE, MoveRequest, NO_WINNER, RollRequest};
use ludo_client::{ClientErrorKind, CreateData, Envelope, Phase, RollData, StateSnapshot};
use serde_json::json;

const STATE_BODY: &str = r##"{
  "status": "success",
  "data": {
    "state": 2,
    "current_turn": 1,
    "last_roll": 6,
    "winner": -1,
    "players": [
      {"id": 0, "name": "Green", "color": "#10b981", "pieces": [
        {"row": 6, "col": 1, "progress": 0, "home": false},
        {"row": 6, "col": 1, "progress": -1, "home": false},
        {"row": 7, "col": 6, "progress": 56, "home": true},
        {"row": 6, "col": 1, "progress": -1, "home": false}
      ]},
      {"id": 1, "name": "Red", "color": "#ef4444", "pieces": [
        {"row": 1, "col": 8, "progress": -1, "home": false}
      ]}
    ]
  }
}"##;

#[test]
fn test_decode_state_envelope() {
    let envelope: Envelope<StateSnapshot> = serde_json::from_str(STATE_BODY).expect("decode");
    assert!(envelope.is_success());

    let snapshot = envelope.data.expect("data");
    assert_eq!(snapshot.state, Phase::AwaitingMove);
    assert_eq!(snapshot.current_turn, 1);
    assert_eq!(snapshot.last_roll, 6);
    assert_eq!(snapshot.winner, NO_WINNER);
    assert_eq!(snapshot.players[0].color.as_deref(), Some("#10b981"));

    let green = &snapshot.players[0].pieces;
    assert!(!green[0].is_in_base());
    assert_eq!(green[1].progress, IN_BASE);
    assert!(green[2].home);
}

#[test]
fn test_missing_optional_fields() {
    let body = json!({
        "state": 1,
        "current_turn": 0,
        "last_roll": 0,
        "winner": -1,
        "players": [{"name": "Solo", "pieces": [{"row": 0, "col": 0, "progress": -1}]}]
    });

    let snapshot: StateSnapshot = serde_json::from_value(body).expect("decode");
    assert_eq!(snapshot.players[0].id, None);
    assert!(!snapshot.players[0].pieces[0].home);
}

#[test]
fn test_phase_codes() {
    let phases: Vec<Phase> = (0_i64..5).map(Phase::from).collect();
    assert_eq!(
        phases,
        vec![
            Phase::WaitingForPlayers,
            Phase::AwaitingRoll,
            Phase::AwaitingMove,
            Phase::GameOver,
            Phase::Unknown(4),
        ]
    );
    assert_eq!(serde_json::to_value(Phase::GameOver).expect("encode"), json!(3));
    assert!(Phase::AwaitingRoll.allows_roll());
    assert!(!Phase::AwaitingMove.allows_roll());
    assert!(Phase::AwaitingMove.allows_move());
}

#[test]
fn test_winner_lookup() {
    let mut snapshot: StateSnapshot = serde_json::from_str::<Envelope<StateSnapshot>>(STATE_BODY)
        .expect("decode")
        .data
        .expect("data");
    assert_eq!(snapshot.winner_index(), None);
    assert_eq!(snapshot.winner_name(), None);

    snapshot.winner = 1;
    assert_eq!(snapshot.winner_index(), Some(1));
    assert_eq!(snapshot.winner_name(), Some("Red"));

    snapshot.winner = 3;
    assert_eq!(snapshot.winner_index(), Some(3));
    assert_eq!(snapshot.winner_name(), None);
}

#[test]
fn test_error_envelope() {
    let envelope: Envelope<RollData> =
        serde_json::from_str(r#"{"status": "error", "message": "Already rolled, waiting for move"}"#)
            .expect("decode");

    let err = envelope.into_result().expect_err("failure");
    assert_eq!(
        err.kind,
        ClientErrorKind::Server("Already rolled, waiting for move".to_string())
    );
}

#[test]
fn test_error_without_message() {
    let envelope: Envelope<RollData> =
        serde_json::from_str(r#"{"status": "error"}"#).expect("decode");
    assert_eq!(envelope.failure_message(), "status 'error'");
}

#[test]
fn test_create_payload_uses_game_id() {
    let envelope: Envelope<CreateData> =
        serde_json::from_str(r#"{"status": "success", "data": {"gameId": "QK7Z2M"}}"#)
            .expect("decode");
    assert_eq!(envelope.data.map(|d| d.game_id).as_deref(), Some("QK7Z2M"));
}

#[test]
fn test_request_bodies_are_camel_case() {
    assert_eq!(
        serde_json::to_value(RollRequest { player_id: 3 }).expect("encode"),
        json!({"playerId": 3})
    );
    assert_eq!(
        serde_json::to_value(MoveRequest {
            player_id: 0,
            piece_id: 2
        })
        .expect("encode"),
        json!({"playerId": 0, "pieceId": 2})
    );
}
