// src/game.rs
// Unified Game struct holding all shared game state, so every action runs
// to completion against a single owner and the draw invariants hold.

use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::card::{Card, CardGenerator};
use crate::defs::{Ball, CARDCONFIG, DrawError, LASTNUMBER, Number};
use crate::draw::perform_draw;
use crate::pool::Pool;

/// Behavior knobs for a game, filled in from configuration.
#[derive(Debug, Clone, Copy)]
pub struct GameOptions {
    /// Mark the matching card cell automatically on each draw.
    pub auto_mark: bool,
    pub card_rows: u8,
    pub free_center: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            auto_mark: true,
            card_rows: CARDCONFIG.rows,
            free_center: CARDCONFIG.free_center,
        }
    }
}

/// Game struct that holds all shared game state components.
/// This provides a single point of access for all game operations.
#[derive(Clone)]
pub struct Game {
    id: Arc<Mutex<String>>,
    created_at: Arc<Mutex<SystemTime>>,
    pool: Arc<Mutex<Pool>>,
    board: Arc<Mutex<Board>>,
    card: Arc<Mutex<Option<Card>>>,
    options: GameOptions,
}

impl Game {
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    pub fn with_options(options: GameOptions) -> Self {
        let mut rng = rand::rng();
        let game_id = format!("game_{:08x}", rng.random::<u32>());

        Self {
            id: Arc::new(Mutex::new(game_id)),
            created_at: Arc::new(Mutex::new(SystemTime::now())),
            pool: Arc::new(Mutex::new(Pool::new())),
            board: Arc::new(Mutex::new(Board::new())),
            card: Arc::new(Mutex::new(None)),
            options,
        }
    }

    pub fn id(&self) -> String {
        self.id.lock().unwrap().clone()
    }

    pub fn created_at(&self) -> SystemTime {
        *self.created_at.lock().unwrap()
    }

    pub fn created_at_string(&self) -> String {
        let created_at = *self.created_at.lock().unwrap();
        match created_at.duration_since(std::time::UNIX_EPOCH) {
            Ok(duration) => {
                let datetime: DateTime<Utc> = DateTime::from_timestamp(duration.as_secs() as i64, 0)
                    .unwrap_or_else(Utc::now);
                datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string()
            }
            Err(_) => "Unknown time".to_string(),
        }
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    /// Draws one ball: removes it from the pool, appends it to the board,
    /// and auto-marks the dealt card when configured. `EmptyPool` once the
    /// game is over; state stays untouched in that case.
    pub fn draw_ball(&self) -> Result<Ball, DrawError> {
        perform_draw(&self.pool, &self.board, &self.card, self.options.auto_mark)
    }

    /// Deals a fresh card. Any previous card and its marks are discarded.
    pub fn deal_card(&self) -> Result<(), DrawError> {
        let card = CardGenerator::new().generate(self.options.card_rows, self.options.free_center)?;
        let mut slot = self
            .card
            .lock()
            .map_err(|_| DrawError::StateLock("card"))?;
        *slot = Some(card);
        Ok(())
    }

    /// Flips the player mark on the card cell carrying `number`.
    /// Returns whether such a cell exists.
    pub fn toggle_card_mark(&self, number: Number) -> bool {
        match self.card.lock() {
            Ok(mut card) => card.as_mut().is_some_and(|card| card.toggle(number)),
            Err(_) => false,
        }
    }

    pub fn card_snapshot(&self) -> Option<Card> {
        self.card.lock().ok().and_then(|card| card.clone())
    }

    pub fn has_card(&self) -> bool {
        self.card.lock().map(|card| card.is_some()).unwrap_or(false)
    }

    /// Balls left in the pool.
    pub fn remaining(&self) -> usize {
        self.pool.lock().map(|pool| pool.len()).unwrap_or(0)
    }

    /// Balls drawn so far this game.
    pub fn draw_count(&self) -> usize {
        self.board.lock().map(|board| board.len()).unwrap_or(0)
    }

    pub fn drawn_balls(&self) -> Vec<Ball> {
        self.board
            .lock()
            .map(|board| board.balls().to_vec())
            .unwrap_or_default()
    }

    pub fn last_drawn(&self) -> Option<Ball> {
        self.board.lock().ok().and_then(|board| board.last_drawn())
    }

    pub fn board_snapshot(&self) -> Board {
        self.board
            .lock()
            .map(|board| board.clone())
            .unwrap_or_default()
    }

    pub fn has_game_started(&self) -> bool {
        self.draw_count() > 0
    }

    pub fn is_pool_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The game ends when every ball has been drawn.
    pub fn is_game_over(&self) -> bool {
        self.is_pool_empty()
    }

    /// Resets to a fresh game: new id, full pool, empty board. The dealt
    /// card stays as-is; cards regenerate only through `deal_card`.
    pub fn reset_game(&self) -> Result<Vec<String>, Vec<String>> {
        let mut reset_components = Vec::new();
        let mut errors = Vec::new();

        let mut rng = rand::rng();
        let new_id = format!("game_{:08x}", rng.random::<u32>());

        if let Ok(mut id_lock) = self.id.lock() {
            *id_lock = new_id.clone();
            reset_components.push(format!("New game ID generated: {new_id}"));
        } else {
            errors.push("Failed to lock game ID for reset".to_string());
        }

        if let Ok(mut created_at_lock) = self.created_at.lock() {
            *created_at_lock = SystemTime::now();
        } else {
            errors.push("Failed to lock creation time for reset".to_string());
        }

        // Reset in the same order draws acquire the locks: pool, then board
        if let Ok(mut pool) = self.pool.lock() {
            *pool = Pool::new();
            reset_components.push(format!("Pool refilled with balls 1-{LASTNUMBER}"));
        } else {
            errors.push("Failed to lock pool for reset".to_string());
        }

        if let Ok(mut board) = self.board.lock() {
            *board = Board::new();
            reset_components.push("Board state cleared".to_string());
        } else {
            errors.push("Failed to lock board for reset".to_string());
        }

        if errors.is_empty() {
            Ok(reset_components)
        } else {
            Err(errors)
        }
    }

    /// One-line state summary for logging.
    pub fn game_info(&self) -> String {
        format!(
            "Game[id={}, created={}, drawn={}, remaining={}, card={}, started={}]",
            self.id(),
            self.created_at_string(),
            self.draw_count(),
            self.remaining(),
            self.has_card(),
            self.has_game_started()
        )
    }

    /// Current game state as pretty JSON, for on-demand inspection output.
    /// Nothing is written to disk.
    pub fn state_json(&self) -> Result<String, String> {
        let state = self.create_serializable_state()?;
        serde_json::to_string_pretty(&state)
            .map_err(|e| format!("Failed to serialize game state: {e}"))
    }

    fn create_serializable_state(&self) -> Result<SerializableGameState, String> {
        let pool = {
            let guard = self.pool.lock().map_err(|_| "Failed to lock pool")?;
            guard.clone()
        };

        let board = {
            let guard = self.board.lock().map_err(|_| "Failed to lock board")?;
            guard.clone()
        };

        let card = {
            let guard = self.card.lock().map_err(|_| "Failed to lock card")?;
            guard.clone()
        };

        Ok(SerializableGameState {
            id: self.id(),
            created_at: self.created_at(),
            remaining: pool.len(),
            draw_count: board.len(),
            pool,
            board,
            card,
        })
    }
}

/// Serializable view of the Game for JSON output.
#[derive(Serialize, Deserialize)]
pub struct SerializableGameState {
    pub id: String,
    pub created_at: SystemTime,
    pub remaining: usize,
    pub draw_count: usize,
    pub pool: Pool,
    pub board: Board,
    pub card: Option<Card>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
