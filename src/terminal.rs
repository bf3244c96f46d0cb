// src/terminal.rs
// Terminal input/output for the bingo caller.

use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode},
};

use crate::board::Board;
use crate::card::Card;
use crate::defs::{Ball, Column, Number};

/// One user action per keypress; each runs to completion before the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Draw,
    NewCard,
    ToggleMark,
    Reset,
    Quit,
}

pub fn clear_screen() {
    print!("\x1Bc");
}

/// Renders the caller board: one row per letter, 15 numbers each.
pub fn print_board(board: &Board) {
    let last = board.last_drawn().map(|ball| ball.number);
    for column in Column::ALL {
        print!("\x1b[1m{}\x1b[0m", column.letter());
        for number in column.range() {
            if Some(number) == last {
                print!(" \x1b[1;32m{number:2}\x1b[0m"); // Bold green for the last ball
            } else if board.contains(number) {
                print!(" \x1b[1;33m{number:2}\x1b[0m"); // Bold yellow for drawn balls
            } else {
                print!(" {number:2}");
            }
        }
        println!();
    }
}

/// Renders the player card, marked cells highlighted.
pub fn print_card(card: &Card) {
    print!(" ");
    for column in Column::ALL {
        print!(" \x1b[1m{:>2}\x1b[0m", column.letter());
    }
    println!();

    for row in 0..card.rows() {
        print!(" ");
        for col in 0..card.columns() {
            let cell = card.cell(row, col);
            match cell.number() {
                Some(number) if cell.is_marked() => print!(" \x1b[1;33m{number:2}\x1b[0m"),
                Some(number) => print!(" {number:2}"),
                None => print!(" \x1b[1;33m *\x1b[0m"), // free center
            }
        }
        println!();
    }
}

pub fn print_recent(board: &Board, n: usize) {
    let labels: Vec<String> = board.recent(n).iter().map(Ball::label).collect();
    println!("Previous balls: {labels:?}");
}

pub fn show_on_terminal(
    board: &Board,
    card: Option<&Card>,
    remaining: usize,
    recent_window: usize,
) {
    match board.last_drawn() {
        Some(ball) => println!("Last ball: \x1b[1;32m{ball}\x1b[0m"),
        None => println!("Last ball: none drawn yet"),
    }
    print_recent(board, recent_window);

    println!("\nCaller board:");
    print_board(board);

    if let Some(card) = card {
        println!("\nYour card:");
        print_card(card);
    }

    match remaining {
        0 => println!("\nEvery ball has been drawn. The round is over!"),
        _ => println!("\nBalls remaining: {remaining}"),
    }

    println!();
}

/// Waits for a keypress in raw mode and maps it to a `KeyAction`.
pub fn wait_for_user_action() -> KeyAction {
    println!("ENTER/d: draw   c: new card   m: mark   r: reset   ESC/q: quit");

    // Enable raw mode to capture individual key presses
    enable_raw_mode().unwrap();

    // Clear any pending events in the buffer
    while event::poll(std::time::Duration::from_millis(0)).unwrap() {
        event::read().unwrap();
    }

    let action = loop {
        if let Ok(Event::Key(key_event)) = event::read() {
            // Only process key press events, not key release events
            if key_event.kind == event::KeyEventKind::Press {
                match key_event.code {
                    KeyCode::Enter | KeyCode::Char('d') => break KeyAction::Draw,
                    KeyCode::Char('c') => break KeyAction::NewCard,
                    KeyCode::Char('m') => break KeyAction::ToggleMark,
                    KeyCode::Char('r') => break KeyAction::Reset,
                    KeyCode::Esc | KeyCode::Char('q') => break KeyAction::Quit,
                    _ => {}
                }
            }
        }
    };

    disable_raw_mode().unwrap();
    action
}

/// Line-buffered number prompt, used outside raw mode for mark toggling.
pub fn prompt_number(prompt: &str) -> Option<Number> {
    use std::io::{self, Write};

    print!("{prompt} ");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).ok()?;
    line.trim().parse::<Number>().ok()
}
