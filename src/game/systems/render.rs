//! Render step.
//!
//! Chooses what the matrix shows for the current phase.

use crate::config::game::{RESTART_TEXT, TITLE_TEXT};
use crate::device::Display;
use crate::game::state::GameSession;
use crate::game::types::{GameState, TextMode};

pub fn render_step(session: &mut GameSession, display: &mut impl Display) {
    match session.state {
        GameState::Init => {
            if !session.title_shown {
                display.set_text_mode(TextMode::Scroll);
                display.show_text(TITLE_TEXT);
                session.title_shown = true;
            }
            display.refresh();
        }
        GameState::Playing => {
            if !session.arena_drawn {
                draw_arena(session, display);
            }
            display.refresh();
        }
        GameState::Over => {
            session.reset_requested = true;
            display.clear();
            session.player.reset(display);
            display.show_text(RESTART_TEXT);
            display.set_text_mode(TextMode::Scroll);
            session.arena_drawn = false;
        }
    }
}

/// Puts the player and the house on an empty matrix.
fn draw_arena(session: &mut GameSession, display: &mut impl Display) {
    display.clear();
    session.player.init(display);
    session.house.init(display);
    session.arena_drawn = true;
}
