// src/main.rs
// Interactive bingo caller: draw balls, track history, play a card.

use clap::Parser;

use bingo::config::CallerConfig;
use bingo::defs::DrawError;
use bingo::game::{Game, GameOptions};
use bingo::logging;
use bingo::terminal;

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Bingo Caller - draw balls, track history and play a card")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Start without dealing a player card
    #[arg(long)]
    no_card: bool,

    /// Print the game state as JSON when exiting
    #[arg(long)]
    dump_state: bool,

    /// Path to the caller configuration file
    #[arg(long, default_value = "conf/caller.conf")]
    config: String,
}

fn main() {
    let args = Args::parse();
    let config = CallerConfig::load_or_default(&args.config);

    let game = Game::with_options(GameOptions {
        auto_mark: config.auto_mark,
        card_rows: config.card_rows,
        free_center: config.free_center,
    });
    logging::info(&format!("New game started: {}", game.game_info()));

    if !args.no_card {
        match game.deal_card() {
            Ok(()) => logging::info("Player card dealt"),
            Err(e) => logging::error(&format!("Could not deal card: {e}")),
        }
    }

    loop {
        terminal::clear_screen();
        let card = game.card_snapshot();
        terminal::show_on_terminal(
            &game.board_snapshot(),
            card.as_ref(),
            game.remaining(),
            config.recent_window,
        );

        match terminal::wait_for_user_action() {
            terminal::KeyAction::Draw => match game.draw_ball() {
                Ok(ball) => {
                    if game.is_game_over() {
                        logging::info(&format!("Last ball drawn: {ball}. Round complete."));
                    }
                }
                Err(DrawError::EmptyPool) => {
                    logging::warning("No balls left to draw. Reset to start a new round.");
                }
                Err(e) => logging::error_stderr(&format!("Draw failed: {e}")),
            },
            terminal::KeyAction::NewCard => match game.deal_card() {
                Ok(()) => logging::info("Fresh player card dealt"),
                Err(e) => logging::error(&format!("Could not deal card: {e}")),
            },
            terminal::KeyAction::ToggleMark => {
                if let Some(number) = terminal::prompt_number("Number to mark or unmark:") {
                    if !game.toggle_card_mark(number) {
                        logging::warning(&format!("No card cell carries {number}"));
                    }
                }
            }
            terminal::KeyAction::Reset => match game.reset_game() {
                Ok(_) => logging::info(&format!("Game reset: {}", game.game_info())),
                Err(errors) => {
                    for error in errors {
                        logging::error_stderr(&error);
                    }
                }
            },
            terminal::KeyAction::Quit => break,
        }
    }

    if args.dump_state {
        match game.state_json() {
            Ok(json) => println!("{json}"),
            Err(e) => logging::error_stderr(&e),
        }
    }

    logging::info(&format!("Exiting: {}", game.game_info()));
}
