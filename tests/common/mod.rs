//! Scripted server double shared by the client tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use strictly_chess::{
    BoardSnapshot, ChessApi, ClientError, ClientErrorKind, MoveOutcome, MoveRequest, MoveStatus,
    ScoreResponse, Square,
};

/// A server call as observed by the double.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchBoard,
    SubmitMove(MoveRequest),
    FetchMoveStatus,
    FetchScore,
}

#[derive(Debug, Default)]
struct Script {
    boards: VecDeque<BoardSnapshot>,
    move_outcomes: VecDeque<Result<MoveOutcome, ClientError>>,
    move_statuses: VecDeque<MoveStatus>,
    score: Option<ScoreResponse>,
    calls: Vec<Call>,
}

/// [`ChessApi`] that replays queued answers and records every call.
#[derive(Debug, Clone, Default)]
pub struct ScriptedApi {
    script: Arc<Mutex<Script>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_board(&self, board: BoardSnapshot) -> &Self {
        self.script.lock().unwrap().boards.push_back(board);
        self
    }

    pub fn push_outcome(&self, outcome: MoveOutcome) -> &Self {
        self.script.lock().unwrap().move_outcomes.push_back(Ok(outcome));
        self
    }

    pub fn push_transport_failure(&self) -> &Self {
        self.script
            .lock()
            .unwrap()
            .move_outcomes
            .push_back(Err(ClientError::new(ClientErrorKind::Http(
                "connection refused".to_string(),
            ))));
        self
    }

    pub fn push_status(&self, board: BoardSnapshot, game_over: bool) -> &Self {
        self.script
            .lock()
            .unwrap()
            .move_statuses
            .push_back(MoveStatus::new(board, game_over));
        self
    }

    pub fn set_score(&self, white: f64, black: f64) -> &Self {
        self.script.lock().unwrap().score = Some(ScoreResponse {
            white_score: white,
            black_score: black,
        });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    fn record(&self, call: Call) {
        self.script.lock().unwrap().calls.push(call);
    }
}

fn unscripted(what: &str) -> ClientError {
    ClientError::new(ClientErrorKind::Http(format!("no scripted {}", what)))
}

#[async_trait]
impl ChessApi for ScriptedApi {
    async fn fetch_board(&self) -> Result<BoardSnapshot, ClientError> {
        self.record(Call::FetchBoard);
        self.script
            .lock()
            .unwrap()
            .boards
            .pop_front()
            .ok_or_else(|| unscripted("board"))
    }

    async fn submit_move(&self, request: MoveRequest) -> Result<MoveOutcome, ClientError> {
        self.record(Call::SubmitMove(request));
        self.script
            .lock()
            .unwrap()
            .move_outcomes
            .pop_front()
            .unwrap_or_else(|| Err(unscripted("move outcome")))
    }

    async fn fetch_move_status(&self) -> Result<MoveStatus, ClientError> {
        self.record(Call::FetchMoveStatus);
        self.script
            .lock()
            .unwrap()
            .move_statuses
            .pop_front()
            .ok_or_else(|| unscripted("move status"))
    }

    async fn fetch_score(&self) -> Result<ScoreResponse, ClientError> {
        self.record(Call::FetchScore);
        self.script
            .lock()
            .unwrap()
            .score
            .ok_or_else(|| unscripted("score"))
    }
}

/// Parses a square literal.
pub fn sq(s: &str) -> Square {
    s.parse().expect("valid square literal")
}

/// The standard starting position with letter piece codes.
pub fn initial_board() -> BoardSnapshot {
    let back = ["r", "n", "b", "q", "k", "b", "n", "r"];
    let files = ["a", "b", "c", "d", "e", "f", "g", "h"];
    let mut board = BoardSnapshot::new();
    for (i, file) in files.iter().enumerate() {
        for rank in 1..=8 {
            let content = match rank {
                1 => back[i].to_uppercase(),
                2 => "P".to_string(),
                7 => "p".to_string(),
                8 => back[i].to_string(),
                _ => String::new(),
            };
            board.insert(sq(&format!("{}{}", file, rank)), content);
        }
    }
    board
}

/// `board` with the piece on `from` moved to `to`.
pub fn after_move(board: &BoardSnapshot, from: &str, to: &str) -> BoardSnapshot {
    let mut next = board.clone();
    let piece = next.insert(sq(from), String::new()).unwrap_or_default();
    next.insert(sq(to), piece);
    next
}
