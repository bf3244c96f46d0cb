// src/card.rs
// Player card generation and marking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::defs::{CARDCONFIG, Column, DrawError, Number};
use crate::rng;

/// One card cell. The free center carries no number and starts marked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCell {
    number: Option<Number>,
    marked: bool,
}

impl CardCell {
    fn numbered(number: Number) -> Self {
        CardCell {
            number: Some(number),
            marked: false,
        }
    }

    fn free() -> Self {
        CardCell {
            number: None,
            marked: true,
        }
    }

    pub fn number(&self) -> Option<Number> {
        self.number
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn is_free(&self) -> bool {
        self.number.is_none()
    }
}

/// A rows x 5 grid of cells, one column per letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    cells: Vec<Vec<CardCell>>,
}

impl Card {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, column: usize) -> &CardCell {
        &self.cells[row][column]
    }

    /// Every assigned number on the card, row by row.
    pub fn numbers(&self) -> Vec<Number> {
        self.cells
            .iter()
            .flat_map(|row| row.iter().filter_map(CardCell::number))
            .collect()
    }

    pub fn contains(&self, number: Number) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().any(|cell| cell.number == Some(number)))
    }

    /// Marks the cell carrying `number`, if any. Returns whether a cell
    /// was marked.
    pub fn mark(&mut self, number: Number) -> bool {
        for row in &mut self.cells {
            for cell in row {
                if cell.number == Some(number) {
                    cell.marked = true;
                    return true;
                }
            }
        }
        false
    }

    /// Flips the marked state of the cell carrying `number`, if any.
    pub fn toggle(&mut self, number: Number) -> bool {
        for row in &mut self.cells {
            for cell in row {
                if cell.number == Some(number) {
                    cell.marked = !cell.marked;
                    return true;
                }
            }
        }
        false
    }

    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_marked())
            .count()
    }
}

#[derive(Debug, Clone)]
pub struct CardGenerator;

impl CardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Assigns one number per `(min, max)` cell range. A single exclusion
    /// set spans the entire pass, so no two cells receive the same number
    /// even when their ranges overlap.
    pub fn assign_numbers(
        &self,
        cell_ranges: &[(Number, Number)],
    ) -> Result<Vec<Number>, DrawError> {
        let mut exclusions: HashSet<Number> = HashSet::new();
        cell_ranges
            .iter()
            .map(|&(min, max)| rng::random_excluding(min, max, &mut exclusions))
            .collect()
    }

    /// Builds a fresh card: `rows` rows by one column per letter, each cell
    /// drawn from its column's fixed range. With `free_center` and odd
    /// geometry the middle cell stays unnumbered and pre-marked.
    /// Regeneration always yields unmarked numbered cells.
    pub fn generate(&self, rows: u8, free_center: bool) -> Result<Card, DrawError> {
        let rows = rows as usize;
        let columns = CARDCONFIG.columns as usize;
        let center = (rows / 2, columns / 2);
        let has_free_center = free_center && rows % 2 == 1;

        // One exclusion set for the whole card, same as assign_numbers.
        let mut exclusions: HashSet<Number> = HashSet::new();
        let mut cells = Vec::with_capacity(rows);
        for row in 0..rows {
            let mut card_row = Vec::with_capacity(columns);
            for (column_index, column) in Column::ALL.iter().enumerate() {
                if has_free_center && (row, column_index) == center {
                    card_row.push(CardCell::free());
                    continue;
                }
                let range = column.range();
                let number = rng::random_excluding(*range.start(), *range.end(), &mut exclusions)?;
                card_row.push(CardCell::numbered(number));
            }
            cells.push(card_row);
        }

        Ok(Card { cells })
    }
}

impl Default for CardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_numbers_are_distinct_and_in_range() {
        let generator = CardGenerator::new();
        let ranges = [(1, 15), (16, 30), (31, 45), (46, 60), (61, 75)];
        let numbers = generator.assign_numbers(&ranges).unwrap();

        assert_eq!(numbers.len(), 5);
        for (number, (min, max)) in numbers.iter().zip(ranges.iter()) {
            assert!((min..=max).contains(&number));
        }

        let mut deduped = numbers.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), numbers.len());
    }

    #[test]
    fn test_assign_numbers_with_overlapping_ranges_stays_distinct() {
        let generator = CardGenerator::new();
        let ranges = vec![(1, 5); 5];
        let mut numbers = generator.assign_numbers(&ranges).unwrap();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_assign_numbers_fails_on_exhausted_range() {
        let generator = CardGenerator::new();
        let ranges = vec![(1, 5); 6];
        assert_eq!(
            generator.assign_numbers(&ranges),
            Err(DrawError::RangeExhausted { min: 1, max: 5 })
        );
    }

    #[test]
    fn test_generate_card_shape_and_free_center() {
        let card = CardGenerator::new().generate(5, true).unwrap();
        assert_eq!(card.rows(), 5);
        assert_eq!(card.columns(), 5);

        let center = card.cell(2, 2);
        assert!(center.is_free());
        assert!(center.is_marked());
        assert_eq!(card.numbers().len(), 24);
    }

    #[test]
    fn test_generate_card_without_free_center() {
        let card = CardGenerator::new().generate(5, false).unwrap();
        assert!(!card.cell(2, 2).is_free());
        assert_eq!(card.numbers().len(), 25);
    }

    #[test]
    fn test_generated_numbers_match_their_column_ranges() {
        let card = CardGenerator::new().generate(5, true).unwrap();
        for row in 0..card.rows() {
            for (column_index, column) in Column::ALL.iter().enumerate() {
                if let Some(number) = card.cell(row, column_index).number() {
                    assert!(column.range().contains(&number));
                }
            }
        }
    }

    #[test]
    fn test_generated_numbers_are_unique_across_card() {
        let card = CardGenerator::new().generate(5, true).unwrap();
        let mut numbers = card.numbers();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 24);
    }

    #[test]
    fn test_three_row_card() {
        let card = CardGenerator::new().generate(3, true).unwrap();
        assert_eq!(card.rows(), 3);
        assert!(card.cell(1, 2).is_free());
        assert_eq!(card.numbers().len(), 14);
    }

    #[test]
    fn test_mark_and_toggle() {
        let mut card = CardGenerator::new().generate(5, true).unwrap();
        let number = card.numbers()[0];

        assert!(card.mark(number));
        assert!(card.contains(number));
        // free center starts marked, so the marked count is 2 now
        assert_eq!(card.marked_count(), 2);

        assert!(card.toggle(number));
        assert_eq!(card.marked_count(), 1);
        assert!(card.toggle(number));
        assert_eq!(card.marked_count(), 2);

        // numbers not on the card are reported, not invented
        assert!(!card.mark(0));
        assert!(!card.toggle(0));
    }
}
