use std::io::{self, BufRead, Write};

use super::{ScriptedClicks, TerminalDisplay};
use crate::feedback::compute_feedback;
use crate::game_logic::{GameEngine, GameState};
use crate::game_state::{Color, PromotionRole};
use crate::{BoardDisplay, PromotionPicker};

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Asks on stdin until a valid promotion role is typed.
///
/// Falls back to a queen if stdin closes.
#[derive(Debug, Default)]
struct StdinPromotion;

impl PromotionPicker for StdinPromotion {
    fn pick_promotion(&mut self, color: Color) -> PromotionRole {
        let stdin = io::stdin();
        loop {
            print!("Promote {color} pawn to (q)ueen, k(n)ight, (r)ook or (b)ishop: ");
            if io::stdout().flush().is_err() {
                return PromotionRole::Queen;
            }

            let mut input = String::new();
            match stdin.lock().read_line(&mut input) {
                Ok(0) | Err(_) => return PromotionRole::Queen,
                Ok(_) => {}
            }
            if let Some(role) = parse_promotion(input.trim()) {
                return role;
            }
        }
    }
}

fn parse_promotion(input: &str) -> Option<PromotionRole> {
    match input.to_ascii_lowercase().as_str() {
        "q" | "queen" => Some(PromotionRole::Queen),
        "n" | "knight" => Some(PromotionRole::Knight),
        "r" | "rook" => Some(PromotionRole::Rook),
        "b" | "bishop" => Some(PromotionRole::Bishop),
        _ => None,
    }
}

/// Runs an interactive terminal game driven by square clicks.
pub fn run_interactive_terminal() {
    let mut engine = GameEngine::new();
    let mut display = TerminalDisplay::new();
    let mut picker = StdinPromotion;

    redraw(&mut display, &engine.state());

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to flush stdout: {}", e);
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                break;
            }
        }

        let command = input.trim();
        match command {
            "" => continue,
            "r" => {
                engine.reset();
                redraw(&mut display, &engine.state());
                println!("\n🔄 Reset to initial position");
            }
            "p" => redraw(&mut display, &engine.state()),
            "q" => break,
            script => {
                let mut clicks = ScriptedClicks::new();
                match clicks.push_script(script) {
                    Ok(()) => {
                        let mut state = engine.state();
                        clicks.drain(|point| state = engine.click(point, &mut picker));
                        redraw(&mut display, &state);
                    }
                    Err(e) => println!("❌ {}", e),
                }
            }
        }
    }
}

/// Draws the complete interface: help text, board and status.
fn redraw(display: &mut TerminalDisplay, state: &GameState) {
    clear_screen();
    println!("♟️  Chess Referee");
    println!();
    println!("Commands: <square> (click) | r (reset) | p (refresh) | q (quit)");
    println!();

    if let Err(e) = display.show(state.board(), &compute_feedback(state)) {
        log::warn!("display update failed: {e}");
    }

    println!();
    println!("{} to move", state.board().side_to_move());
    if state.status().must_warn_user() {
        println!("⚠️  {}", state.status());
    }
}
