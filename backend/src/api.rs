//! JSON routes over a shared game
//!
//! | Method | Path         | Purpose                              |
//! |--------|--------------|--------------------------------------|
//! | GET    | `/`          | Plain-text banner                    |
//! | POST   | `/api/move`  | Play `from` -> `to` for the side to move |
//! | GET    | `/api/state` | Board snapshot                       |
//!
//! A move request is replayed as two clicks: `from` first, and `to` only when
//! the first click selected a piece. The mutex is held across both clicks so no
//! other request can observe or interleave with a half-played move.

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use chess_logic::{ClickOutcome, Color, GameState, PieceType, Square};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

#[derive(Clone, Default)]
pub struct AppState {
    game: Arc<Mutex<GameState>>,
}

impl AppState {
    pub fn new(game: GameState) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameState> {
        // GameState is left consistent after every click, so a poisoned lock is still usable
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub from: String,
    pub to: String,
    /// Accepted for client compatibility, the side to move is tracked server-side
    #[serde(default)]
    pub player: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MoveResponse {
    Success {
        turn: Color,
        captured: Option<PieceType>,
    },
    Rejected {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub square: Square,
    pub color: Color,
    pub piece_type: PieceType,
    pub has_moved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateResponse {
    pub turn: Color,
    pub pieces: Vec<PieceSnapshot>,
}

/// Router over a fresh game
pub fn router() -> Router {
    router_with_state(AppState::default())
}

pub fn router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/move", post(make_move))
        .route("/api/state", get(game_state))
        .with_state(state)
}

async fn index() -> &'static str {
    "Chess move service. POST /api/move {\"from\":\"e2\",\"to\":\"e4\"}, GET /api/state"
}

async fn make_move(
    State(state): State<AppState>,
    Json(payload): Json<MoveRequest>,
) -> Json<MoveResponse> {
    debug!(
        "[API] Move request {} -> {} (player {:?})",
        payload.from, payload.to, payload.player
    );
    let response = {
        let mut game = state.lock();
        apply_move(&mut game, &payload.from, &payload.to)
    };
    match &response {
        MoveResponse::Success { turn, captured } => {
            info!(
                "[API] {} -> {} played, {} to move{}",
                payload.from,
                payload.to,
                turn,
                captured.map(|c| format!(", captured {c}")).unwrap_or_default()
            );
        }
        MoveResponse::Rejected { reason } => {
            info!("[API] {} -> {} rejected: {}", payload.from, payload.to, reason);
        }
    }
    Json(response)
}

async fn game_state(State(state): State<AppState>) -> Json<StateResponse> {
    Json(snapshot(&state.lock()))
}

/// Replay a move as the click pair a player would make
pub fn apply_move(game: &mut GameState, from: &str, to: &str) -> MoveResponse {
    let rejected = |reason: String| MoveResponse::Rejected { reason };

    let from_square: Square = match from.parse() {
        Ok(square) => square,
        Err(e) => return rejected(e.to_string()),
    };
    let to_square: Square = match to.parse() {
        Ok(square) => square,
        Err(e) => return rejected(e.to_string()),
    };

    let turn = game.current_turn();
    match game.handle_click(from_square) {
        ClickOutcome::Selected { .. } => {}
        _ => return rejected(format!("no {turn} piece on {from_square}")),
    }

    match game.handle_click(to_square) {
        ClickOutcome::Moved(record) => MoveResponse::Success {
            turn: game.current_turn(),
            captured: record.captured,
        },
        _ => rejected(format!("{to_square} is not reachable from {from_square}")),
    }
}

pub fn snapshot(game: &GameState) -> StateResponse {
    StateResponse {
        turn: game.current_turn(),
        pieces: game
            .board()
            .pieces()
            .map(|(_, piece)| PieceSnapshot {
                square: piece.position,
                color: piece.color,
                piece_type: piece.piece_type,
                has_moved: piece.has_moved,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_logic::SelectionPhase;

    #[test]
    fn test_apply_move_commits_pawn_push() {
        let mut game = GameState::new();
        let response = apply_move(&mut game, "e2", "e4");
        assert_eq!(
            response,
            MoveResponse::Success {
                turn: Color::Black,
                captured: None
            }
        );
        assert_eq!(game.current_turn(), Color::Black);
    }

    #[test]
    fn test_apply_move_rejects_bad_notation() {
        let mut game = GameState::new();
        let before = game.clone();
        assert!(matches!(
            apply_move(&mut game, "z9", "e4"),
            MoveResponse::Rejected { .. }
        ));
        assert!(matches!(
            apply_move(&mut game, "e2", "e"),
            MoveResponse::Rejected { .. }
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_move_rejects_opponent_piece() {
        let mut game = GameState::new();
        let response = apply_move(&mut game, "e7", "e5");
        assert_eq!(
            response,
            MoveResponse::Rejected {
                reason: "no White piece on e7".to_string()
            }
        );
        assert_eq!(game.phase(), SelectionPhase::Idle);
    }

    #[test]
    fn test_apply_move_unreachable_leaves_no_selection() {
        let mut game = GameState::new();
        let response = apply_move(&mut game, "e2", "e5");
        assert_eq!(
            response,
            MoveResponse::Rejected {
                reason: "e5 is not reachable from e2".to_string()
            }
        );
        assert_eq!(game.phase(), SelectionPhase::Idle);
        assert_eq!(game.current_turn(), Color::White);
    }

    #[test]
    fn test_move_response_wire_format() {
        let json = serde_json::to_value(MoveResponse::Success {
            turn: Color::Black,
            captured: Some(PieceType::Pawn),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "success", "turn": "black", "captured": "pawn"})
        );
    }

    #[test]
    fn test_move_request_accepts_player_field() {
        let request: MoveRequest =
            serde_json::from_str(r#"{"from":"e2","to":"e4","player":"white"}"#).unwrap();
        assert_eq!(request.player.as_deref(), Some("white"));
        let request: MoveRequest = serde_json::from_str(r#"{"from":"e2","to":"e4"}"#).unwrap();
        assert!(request.player.is_none());
    }

    #[test]
    fn test_snapshot_lists_every_piece() {
        let snap = snapshot(&GameState::new());
        assert_eq!(snap.turn, Color::White);
        assert_eq!(snap.pieces.len(), 32);
        assert!(snap.pieces.iter().all(|p| !p.has_moved));
    }
}
