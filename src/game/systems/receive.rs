//! Infrared receive step.

use log::{debug, info};

use crate::device::{Display, Transport};
use crate::game::codec::{decode, is_win_signal};
use crate::game::state::GameSession;
use crate::game::types::GameState;

/// Reads at most one byte while playing. Leaving OVER happens here: the first
/// receive tick in OVER returns the session to INIT whatever the link holds.
pub fn receive_step(
    session: &mut GameSession,
    transport: &mut impl Transport,
    display: &mut impl Display,
) {
    match session.state {
        GameState::Init => {}
        GameState::Playing => {
            if !transport.byte_ready() {
                return;
            }
            let byte = transport.read_byte();
            if is_win_signal(byte) {
                info!("[Controller] opponent's house destroyed, round won");
                session.transition(GameState::Over);
                display.clear();
                session.player.reset(display);
            } else {
                let pos = decode(byte);
                debug!("[Controller] opponent at {} (byte {})", pos, byte);
                session.remote.redraw(pos, display);
            }
        }
        GameState::Over => session.transition(GameState::Init),
    }
}
