// src/pool.rs
// The ball pool: every ball not yet drawn in the current game.

use serde::{Deserialize, Serialize};

use crate::defs::{Ball, DrawError, FIRSTNUMBER, LASTNUMBER};
use crate::rng;

#[derive(Clone, Serialize, Deserialize)]
pub struct Pool {
    balls: Vec<Ball>,
}

impl Pool {
    /// A full pool holding the 75 canonical balls, B-1 through O-75.
    pub fn new() -> Self {
        Pool {
            balls: (FIRSTNUMBER..=LASTNUMBER)
                .filter_map(Ball::from_number)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    fn remove(&mut self, index: usize) -> Ball {
        self.balls.remove(index)
    }

    /// Removes and returns a uniformly random remaining ball.
    pub fn draw(&mut self) -> Result<Ball, DrawError> {
        if self.is_empty() {
            return Err(DrawError::EmptyPool);
        }
        let random_index = rng::random_index(self.len());
        Ok(self.remove(random_index))
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::Number;

    #[test]
    fn test_new_pool_is_full() {
        let pool = Pool::new();
        assert_eq!(pool.len(), 75);
        assert!(!pool.is_empty());
    }

    #[test]
    fn test_new_pool_has_canonical_contents() {
        let pool = Pool::new();
        let mut numbers: Vec<Number> = pool.balls().iter().map(|ball| ball.number).collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=75).collect::<Vec<_>>());

        // Spot-check the column labeling at the range boundaries.
        let labels: Vec<String> = pool.balls().iter().map(Ball::label).collect();
        for expected in ["B-1", "B-15", "I-16", "N-31", "G-46", "O-61", "O-75"] {
            assert!(labels.iter().any(|label| label == expected));
        }
    }

    #[test]
    fn test_draw_removes_one_ball() {
        let mut pool = Pool::new();
        let drawn = pool.draw().unwrap();
        assert_eq!(pool.len(), 74);
        assert!(!pool.balls().contains(&drawn));
    }

    #[test]
    fn test_draw_until_empty_yields_distinct_balls() {
        let mut pool = Pool::new();
        let mut drawn = Vec::new();
        while !pool.is_empty() {
            drawn.push(pool.draw().unwrap());
        }
        assert_eq!(drawn.len(), 75);

        let mut numbers: Vec<Number> = drawn.iter().map(|ball| ball.number).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 75);
    }

    #[test]
    fn test_draw_from_empty_pool_fails() {
        let mut pool = Pool::new();
        for _ in 0..75 {
            pool.draw().unwrap();
        }
        assert_eq!(pool.draw(), Err(DrawError::EmptyPool));
        assert_eq!(pool.len(), 0);
    }
}
