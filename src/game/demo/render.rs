//! Terminal rendering of a simulated handheld.

use crate::device::LedMatrix;
use crate::game::demo::board::Device;

/// Draws the matrix as text, one LED per cell.
pub fn render_matrix(matrix: &LedMatrix) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        for on in row {
            out.push_str(if *on { "██" } else { "··" });
        }
        out.push('\n');
    }
    if let Some(text) = matrix.text() {
        out.push_str(&format!("[{}]\n", text));
    }
    out
}

/// Print the device's matrix and phase.
pub fn print_device(device: &Device) {
    println!("--- {} ({}) ---", device.name, device.state());
    let player = device.session.player();
    println!("Player: ({}, {})", player.x(), player.y());
    print!("{}", render_matrix(device.matrix()));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Display;
    use crate::game::types::Position;

    #[test]
    fn test_render_matrix_marks_lit_pixels() {
        let mut matrix = LedMatrix::new();
        matrix.draw_point(Position::new(0, 0), true);
        matrix.show_text("HOUSE");
        let text = render_matrix(&matrix);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "██········");
        assert_eq!(lines[7], "[HOUSE]");
    }
}
