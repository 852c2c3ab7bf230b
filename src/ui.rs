#![cfg(feature = "std")]

//! Terminal rendering and coordinate parsing for the CLI front-end.

use crate::{
    bitgrid::BitGrid,
    board::Board,
    common::{CellState, Coord},
    game::GameController,
};

/// `A1`-style label: column letter, then 1-based row.
pub fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.y as u8) as char;
    format!("{}{}", col, coord.x + 1)
}

/// Parse `A1`-style input for a `width × height` board.
pub fn parse_coord(input: &str, width: usize, height: usize) -> Result<Coord, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= width {
        return Err(format!("Column '{}' out of bounds", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, height))?;
    if row == 0 || row > height {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, height));
    }
    Ok(Coord::from_index(row - 1, col))
}

fn header(width: usize) -> String {
    let mut out = String::from("     ");
    for c in 0..width {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    out
}

/// Glyph for one cell of the player's own board.
fn own_cell(board: &Board, r: usize, c: usize) -> char {
    let at = Coord::from_index(r, c);
    match board.cell_state(at) {
        Ok(CellState::Hit) => 'X',
        Ok(CellState::Missed) => 'o',
        Ok(CellState::Bonus) => 'B',
        _ if board.fleet().ship_map().get(r, c).unwrap_or(false) => 'S',
        _ if board.bonuses().get(r, c).unwrap_or(false) => 'b',
        _ => '.',
    }
}

/// Player's own board: ships, hidden bonuses and the AI's shots so far.
pub fn render_board(board: &Board) -> String {
    let mut out = header(board.width());
    for r in 0..board.height() {
        out.push_str(&format!("   {:2}", r + 1));
        for c in 0..board.width() {
            out.push(' ');
            out.push(own_cell(board, r, c));
        }
        out.push('\n');
    }
    out.push_str("   Legend: S=Ship  X=Hit  o=Miss  b=Bonus  B=Bonus taken  .=Water\n");
    for ship in board.fleet().ships() {
        let status = if ship.is_sunk() { "SUNK" } else { "Active" };
        out.push_str(&format!(
            "     {} ({}): {}\n",
            ship.ship_type().name(),
            ship.ship_type().length(),
            status
        ));
    }
    out
}

/// What the player knows of the AI board.
pub fn render_guess_board(hits: &BitGrid, misses: &BitGrid, bonuses: &BitGrid) -> String {
    let mut out = header(hits.width());
    for r in 0..hits.height() {
        out.push_str(&format!("   {:2}", r + 1));
        for c in 0..hits.width() {
            let ch = if hits.get(r, c).unwrap_or(false) {
                'X'
            } else if bonuses.get(r, c).unwrap_or(false) {
                'B'
            } else if misses.get(r, c).unwrap_or(false) {
                'o'
            } else {
                '.'
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("   Legend: X=Hit  o=Miss  B=Bonus  .=Unknown\n");
    out
}

/// Display the opponent board (top) and the player's board (bottom).
pub fn print_player_view(controller: &GameController) {
    std::println!("Opponent board:");
    std::print!(
        "{}",
        render_guess_board(
            controller.play_hits(),
            controller.play_misses(),
            controller.play_bonuses()
        )
    );
    std::println!("\nYour board:");
    std::print!("{}", render_board(controller.board()));
}
