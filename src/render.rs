//! Renders a module matrix as Unicode block characters.

use crate::matrix::{add_border, scale_matrix};

// Each module renders two characters wide so the symbol stays roughly
// square in a terminal's cell grid.
const FULL_BLOCK: &str = "██";
const EMPTY_BLOCK: &str = "  ";

/// Scales the matrix to `target_size`, pads it with `border` rings of light
/// modules, and produces one printable line per row.
///
/// The glyphs are the same whether or not the output is interactive; only
/// the banner around the symbol depends on that, and the banner belongs to
/// the caller.
pub fn render_lines(matrix: Vec<Vec<bool>>, target_size: usize, border: usize) -> Vec<String> {
    let matrix = add_border(scale_matrix(matrix, target_size), border);
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|&module| if module { FULL_BLOCK } else { EMPTY_BLOCK })
                .collect()
        })
        .collect()
}

/// Prints the given module matrix to standard output, row by row.
pub fn print_qr(matrix: Vec<Vec<bool>>, target_size: usize, border: usize) {
    for line in render_lines(matrix, target_size, border) {
        println!("{}", line);
    }
}
