//! Single-byte coordinate codec for the infrared link.
//!
//! A packet is `y * CODEC_SCALE + x + CODEC_BIAS`. The bias keeps every packet
//! a device can produce well away from `WIN_SIGNAL`. Inputs outside the
//! display window are a caller error and are not validated.

use crate::config::game::{CODEC_BIAS, CODEC_SCALE, DISPLAY_HEIGHT, WIN_SIGNAL};
use crate::game::types::Position;

/// Packs a position into one byte.
pub fn encode(pos: Position) -> i8 {
    let value = pos.y as i16 * CODEC_SCALE as i16 + pos.x as i16 + CODEC_BIAS as i16;
    value as i8
}

/// Unpacks a byte produced by [`encode`].
pub fn decode(byte: i8) -> Position {
    let value = byte as i16;
    let x = value.rem_euclid(CODEC_SCALE as i16);
    let y = (value - CODEC_BIAS as i16 - x) / CODEC_SCALE as i16;
    Position::new(x as i8, y as i8)
}

/// The position as drawn on the opposing device. The two matrices face each
/// other, so both axes flip.
pub fn mirror(pos: Position) -> Position {
    Position::new(pos.x.wrapping_neg(), (DISPLAY_HEIGHT - 1).wrapping_sub(pos.y))
}

/// Packet announcing the local player's position to the opponent.
pub fn encode_for_opponent(pos: Position) -> i8 {
    encode(mirror(pos))
}

/// True when the byte means the sender's house is gone.
pub fn is_win_signal(byte: i8) -> bool {
    byte == WIN_SIGNAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game::{DISPLAY_WIDTH, MAX_X, MAX_Y, MIN_X, MIN_Y, TRANSMIT_MAX_X_WEST, TRANSMIT_MIN_X};
    use proptest::prelude::*;

    #[test]
    fn test_encode_matches_device_formula() {
        // (H - y - 2) * 5 + (W - x) + 50 as computed on the handheld.
        for x in (MIN_X + 1)..MAX_X {
            for y in (MIN_Y + 1)..MAX_Y {
                let device = (DISPLAY_HEIGHT - y - 2) * CODEC_SCALE + (DISPLAY_WIDTH - x) + CODEC_BIAS;
                assert_eq!(encode_for_opponent(Position::new(x, y)), device, "x={x} y={y}");
            }
        }
    }

    #[test]
    fn test_decode_known_packets() {
        assert_eq!(decode(50), Position::new(0, 0));
        assert_eq!(decode(84), Position::new(4, 6));
        assert_eq!(decode(67), Position::new(2, 3));
    }

    #[test]
    fn test_mirror_flips_both_axes() {
        assert_eq!(mirror(Position::new(0, 0)), Position::new(0, 6));
        assert_eq!(mirror(Position::new(-3, 2)), Position::new(3, 4));
        assert_eq!(mirror(mirror(Position::new(-4, 5))), Position::new(-4, 5));
    }

    #[test]
    fn test_mirror_wraps_far_outside_display() {
        assert_eq!(mirror(Position::new(i8::MIN, i8::MIN)), Position::new(i8::MIN, -122));
        assert_eq!(mirror(Position::new(i8::MAX, -122)), Position::new(-i8::MAX, i8::MIN));
        let _ = encode_for_opponent(Position::new(i8::MIN, i8::MIN));
    }

    #[test]
    fn test_east_edge_packet_wraps_to_far_column() {
        // A move from x=0 to x=1 is still broadcast; the receiver sees it one
        // row up in the far column.
        let packet = encode_for_opponent(Position::new(1, 3));
        assert_eq!(decode(packet), Position::new(4, 2));
    }

    #[test]
    fn test_no_reachable_position_encodes_to_win_signal() {
        for x in (MIN_X + 1)..MAX_X {
            for y in (MIN_Y + 1)..MAX_Y {
                let packet = encode_for_opponent(Position::new(x, y));
                assert!(!is_win_signal(packet), "({x}, {y}) collides with WIN");
                assert!((46..=84).contains(&packet));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_round_trip_on_display(x in 0i8..DISPLAY_WIDTH, y in 0i8..DISPLAY_HEIGHT) {
            let pos = Position::new(x, y);
            prop_assert_eq!(decode(encode(pos)), pos);
        }

        #[test]
        fn prop_transmit_window_decodes_to_mirror(x in (TRANSMIT_MIN_X + 1)..=0i8, y in 0i8..DISPLAY_HEIGHT) {
            let pos = Position::new(x, y);
            prop_assert_eq!(decode(encode_for_opponent(pos)), mirror(pos));
        }

        #[test]
        fn prop_west_window_never_hits_sentinel(x in TRANSMIT_MIN_X..=TRANSMIT_MAX_X_WEST, y in 0i8..DISPLAY_HEIGHT) {
            prop_assert_ne!(encode_for_opponent(Position::new(x, y)), WIN_SIGNAL);
        }
    }
}
