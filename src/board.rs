// src/board.rs
// Caller board state: the drawn balls of the current game, in draw order.

use serde::{Deserialize, Serialize};

use crate::defs::{Ball, Number};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Board(Vec<Ball>);

impl Board {
    pub fn new() -> Self {
        Board(Vec::new())
    }

    /// Appends a drawn ball. Draw order is preserved; the board never
    /// reorders or removes entries within a game.
    pub fn push(&mut self, ball: Ball) {
        self.0.push(ball);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.0
    }

    pub fn last_drawn(&self) -> Option<Ball> {
        self.0.last().copied()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.0.iter().any(|ball| ball.number == number)
    }

    pub fn sorted_numbers(&self) -> Vec<Number> {
        let mut sorted: Vec<Number> = self.0.iter().map(|ball| ball.number).collect();
        sorted.sort_unstable();
        sorted
    }

    /// The up-to-n balls drawn before the most recent one, newest first.
    /// Empty until at least two balls have been drawn.
    pub fn recent(&self, n: usize) -> Vec<Ball> {
        if self.0.len() <= 1 {
            return Vec::new();
        }

        let available_previous = self.0.len() - 1;
        let balls_to_show = std::cmp::min(n, available_previous);
        let start_index = self.0.len() - balls_to_show - 1;
        let end_index = self.0.len() - 1;

        let mut result: Vec<Ball> = self.0[start_index..end_index].to_vec();
        result.reverse();
        result
    }
}
