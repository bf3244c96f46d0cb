// src/draw.rs
// Core draw logic shared between the caller loop and the Game wrapper.

use std::sync::{Arc, Mutex};

use crate::board::Board;
use crate::card::Card;
use crate::defs::{Ball, DrawError};
use crate::pool::Pool;

/// Draws one ball and applies it to the shared game state: the ball leaves
/// the pool, lands on the board, and (with `auto_mark`, when a card is
/// dealt) marks the matching card cell. Fails without touching any state
/// when the pool is empty.
pub fn perform_draw(
    pool_ref: &Arc<Mutex<Pool>>,
    board_ref: &Arc<Mutex<Board>>,
    card_ref: &Arc<Mutex<Option<Card>>>,
    auto_mark: bool,
) -> Result<Ball, DrawError> {
    // Open the pool mutex once for both the empty check and the draw
    let ball = {
        let mut pool = pool_ref
            .lock()
            .map_err(|_| DrawError::StateLock("pool"))?;
        if pool.is_empty() {
            return Err(DrawError::EmptyPool);
        }
        pool.draw()?
    };

    {
        let mut board = board_ref
            .lock()
            .map_err(|_| DrawError::StateLock("board"))?;
        board.push(ball);
    }

    if auto_mark {
        let mut card = card_ref
            .lock()
            .map_err(|_| DrawError::StateLock("card"))?;
        if let Some(card) = card.as_mut() {
            card.mark(ball.number);
        }
    }

    Ok(ball)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardGenerator;

    fn shared_state() -> (Arc<Mutex<Pool>>, Arc<Mutex<Board>>, Arc<Mutex<Option<Card>>>) {
        (
            Arc::new(Mutex::new(Pool::new())),
            Arc::new(Mutex::new(Board::new())),
            Arc::new(Mutex::new(None)),
        )
    }

    #[test]
    fn test_draw_moves_ball_from_pool_to_board() {
        let (pool, board, card) = shared_state();
        let ball = perform_draw(&pool, &board, &card, true).unwrap();

        assert_eq!(pool.lock().unwrap().len(), 74);
        let board = board.lock().unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.last_drawn(), Some(ball));
    }

    #[test]
    fn test_draw_marks_dealt_card() {
        let (pool, board, card) = shared_state();
        *card.lock().unwrap() = Some(CardGenerator::new().generate(5, true).unwrap());

        // Drain the pool; by the end every card number has been drawn.
        for _ in 0..75 {
            perform_draw(&pool, &board, &card, true).unwrap();
        }

        let card = card.lock().unwrap();
        let card = card.as_ref().unwrap();
        assert_eq!(card.marked_count(), 25); // 24 numbers + free center
    }

    #[test]
    fn test_draw_without_auto_mark_leaves_card_alone() {
        let (pool, board, card) = shared_state();
        *card.lock().unwrap() = Some(CardGenerator::new().generate(5, true).unwrap());

        for _ in 0..75 {
            perform_draw(&pool, &board, &card, false).unwrap();
        }

        let card = card.lock().unwrap();
        assert_eq!(card.as_ref().unwrap().marked_count(), 1); // free center only
    }

    #[test]
    fn test_draw_from_empty_pool_changes_nothing() {
        let (pool, board, card) = shared_state();
        for _ in 0..75 {
            perform_draw(&pool, &board, &card, true).unwrap();
        }

        assert_eq!(
            perform_draw(&pool, &board, &card, true),
            Err(DrawError::EmptyPool)
        );
        assert_eq!(pool.lock().unwrap().len(), 0);
        assert_eq!(board.lock().unwrap().len(), 75);
    }
}
