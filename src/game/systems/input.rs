//! Navigation switch step.
//!
//! Starts a round on Select, moves the player while playing and broadcasts
//! moves made from the side of the matrix facing the opponent.

use log::{debug, info};

use crate::config::game::{TRANSMIT_MAX_X, TRANSMIT_MAX_X_WEST, TRANSMIT_MIN_X, WIN_SIGNAL};
use crate::device::{Display, InputSource, Transport};
use crate::game::codec::encode_for_opponent;
use crate::game::state::GameSession;
use crate::game::types::{GameState, NavEvent, TextMode};

/// Whether a move in `event`'s direction, starting at column `x`, is sent to
/// the opponent. West reaches one column further than the other directions.
pub fn in_transmit_window(event: NavEvent, x: i8) -> bool {
    let max = match event {
        NavEvent::West => TRANSMIT_MAX_X_WEST,
        _ => TRANSMIT_MAX_X,
    };
    (TRANSMIT_MIN_X..=max).contains(&x)
}

pub fn input_step(
    session: &mut GameSession,
    input: &mut impl InputSource,
    transport: &mut impl Transport,
    display: &mut impl Display,
) {
    input.poll();

    match session.state {
        GameState::Init => {
            if input.take_event(NavEvent::Select) {
                session.transition(GameState::Playing);
                display.set_text_mode(TextMode::Step);
                display.clear();
            }
        }
        GameState::Playing => {
            if !session.house.is_intact(&*display) {
                info!("[Controller] house destroyed, signalling opponent");
                transport.write_byte(WIN_SIGNAL);
                session.player.reset(display);
                session.transition(GameState::Over);
                return;
            }

            for event in NavEvent::DIRECTIONS {
                if input.take_event(event) {
                    move_player(session, event, transport, display);
                }
            }
        }
        GameState::Over => {
            if input.take_event(NavEvent::Select) {
                session.reset_requested = true;
            }
        }
    }
}

/// Applies one directional press and announces the result if the player
/// started inside the transmit window. The announcement goes out even when
/// the move itself was dropped.
fn move_player(
    session: &mut GameSession,
    event: NavEvent,
    transport: &mut impl Transport,
    display: &mut impl Display,
) {
    let Some((dx, dy)) = event.delta() else {
        return;
    };
    let announce = in_transmit_window(event, session.player.x());

    session.player.step(dx, dy, display);

    if announce {
        let packet = encode_for_opponent(session.player.position());
        debug!("[Controller] {:?} to {}, sending {}", event, session.player.position(), packet);
        transport.write_byte(packet);
    }
}
