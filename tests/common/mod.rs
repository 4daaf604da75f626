//! Shared fixtures: an in-memory engine and a view that records calls.

#![allow(dead_code)]

use std::sync::Mutex;

use ludo_client::{
    ClientError, CreateData, Envelope, GameTransport, GameView, MoveData, Phase, PieceState,
    PlayerIndex, PlayerState, RenderedPiece, RollData, ScreenState, StateSnapshot,
};

/// A request the mock engine received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create,
    State(String),
    Roll(String, PlayerIndex),
    Move(String, PlayerIndex, usize),
    Reset(String),
}

/// Engine stand-in answering every call with a configurable reply.
pub struct MockTransport {
    create: Mutex<Result<Envelope<CreateData>, ClientError>>,
    state: Mutex<Result<Envelope<StateSnapshot>, ClientError>>,
    roll: Mutex<Result<Envelope<RollData>, ClientError>>,
    moves: Mutex<Result<Envelope<MoveData>, ClientError>>,
    reset: Mutex<Result<Envelope<serde_json::Value>, ClientError>>,
    calls: Mutex<Vec<Call>>,
}

impl MockTransport {
    /// Engine that creates session `ABC123` and reports `snapshot`.
    pub fn new(snapshot: StateSnapshot) -> Self {
        Self {
            create: Mutex::new(Ok(Envelope::success(CreateData {
                game_id: "ABC123".to_string(),
            }))),
            state: Mutex::new(Ok(Envelope::success(snapshot))),
            roll: Mutex::new(Ok(Envelope::success(RollData { roll: 6 }))),
            moves: Mutex::new(Ok(Envelope::success(MoveData { moved: true }))),
            reset: Mutex::new(Ok(Envelope {
                status: "success".to_string(),
                data: None,
                message: None,
            })),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_create(&self, reply: Result<Envelope<CreateData>, ClientError>) {
        *self.create.lock().expect("lock") = reply;
    }

    pub fn set_state(&self, reply: Result<Envelope<StateSnapshot>, ClientError>) {
        *self.state.lock().expect("lock") = reply;
    }

    pub fn set_snapshot(&self, snapshot: StateSnapshot) {
        self.set_state(Ok(Envelope::success(snapshot)));
    }

    pub fn set_roll(&self, reply: Result<Envelope<RollData>, ClientError>) {
        *self.roll.lock().expect("lock") = reply;
    }

    pub fn set_move(&self, reply: Result<Envelope<MoveData>, ClientError>) {
        *self.moves.lock().expect("lock") = reply;
    }

    pub fn set_reset(&self, reply: Result<Envelope<serde_json::Value>, ClientError>) {
        *self.reset.lock().expect("lock") = reply;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("lock").clone()
    }

    pub fn state_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::State(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("lock").push(call);
    }
}

#[async_trait::async_trait]
impl GameTransport for MockTransport {
    async fn create_game(&self) -> Result<Envelope<CreateData>, ClientError> {
        self.record(Call::Create);
        self.create.lock().expect("lock").clone()
    }

    async fn get_state(&self, session: &str) -> Result<Envelope<StateSnapshot>, ClientError> {
        self.record(Call::State(session.to_string()));
        self.state.lock().expect("lock").clone()
    }

    async fn roll(
        &self,
        session: &str,
        player: PlayerIndex,
    ) -> Result<Envelope<RollData>, ClientError> {
        self.record(Call::Roll(session.to_string(), player));
        self.roll.lock().expect("lock").clone()
    }

    async fn move_piece(
        &self,
        session: &str,
        player: PlayerIndex,
        piece: usize,
    ) -> Result<Envelope<MoveData>, ClientError> {
        self.record(Call::Move(session.to_string(), player, piece));
        self.moves.lock().expect("lock").clone()
    }

    async fn reset(&self, session: &str) -> Result<Envelope<serde_json::Value>, ClientError> {
        self.record(Call::Reset(session.to_string()));
        self.reset.lock().expect("lock").clone()
    }
}

/// A view call, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    RollEnabled(bool),
    Rolling(bool),
    Pieces(usize),
    ShowWinner(String),
    HideWinner,
    Log(String),
}

/// [`ScreenState`] plus an ordered record of control changes.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub screen: ScreenState,
    pub events: Vec<ViewEvent>,
}

impl GameView for RecordingView {
    fn render_turn(&mut self, player: PlayerIndex, name: &str) {
        self.screen.render_turn(player, name);
    }

    fn clear_turn(&mut self) {
        self.screen.clear_turn();
    }

    fn render_dice(&mut self, value: Option<u8>) {
        self.screen.render_dice(value);
    }

    fn set_rolling(&mut self, rolling: bool) {
        self.events.push(ViewEvent::Rolling(rolling));
        self.screen.set_rolling(rolling);
    }

    fn set_roll_enabled(&mut self, enabled: bool) {
        self.events.push(ViewEvent::RollEnabled(enabled));
        self.screen.set_roll_enabled(enabled);
    }

    fn render_phase(&mut self, phase: Phase) {
        self.screen.render_phase(phase);
    }

    fn replace_pieces(&mut self, pieces: Vec<RenderedPiece>) {
        self.events.push(ViewEvent::Pieces(pieces.len()));
        self.screen.replace_pieces(pieces);
    }

    fn show_winner(&mut self, name: &str) {
        self.events.push(ViewEvent::ShowWinner(name.to_string()));
        self.screen.show_winner(name);
    }

    fn hide_winner(&mut self) {
        self.events.push(ViewEvent::HideWinner);
        self.screen.hide_winner();
    }

    fn log(&mut self, message: &str) {
        self.events.push(ViewEvent::Log(message.to_string()));
        self.screen.log(message);
    }
}

/// Four pieces waiting in base.
pub fn base_pieces() -> Vec<PieceState> {
    vec![PieceState::in_base(); 4]
}

/// Four seats named A–D, everything in base, nobody has won.
pub fn fresh_snapshot(phase: Phase, current_turn: PlayerIndex) -> StateSnapshot {
    StateSnapshot {
        state: phase,
        current_turn,
        last_roll: 0,
        players: ["A", "B", "C", "D"]
            .into_iter()
            .map(|name| PlayerState::new(name, base_pieces()))
            .collect(),
        winner: -1,
    }
}
