//! Text rendering of the board and the help screen.

use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};

use crate::game::{Board, Cell, Player};

fn divider(out: &mut String, width: usize) {
    for _ in 0..width {
        out.push_str("+---");
    }
    out.push_str("+\n");
}

fn cell_text(cell: Cell, colour: bool) -> String {
    let symbol = match cell.player() {
        Some(player) => player.symbol(),
        None => ' ',
    };
    let text = format!(" {} ", symbol);
    if !colour {
        return text;
    }
    match cell {
        Cell::Empty => text,
        Cell::Red => text.black().on_red().bold().to_string(),
        Cell::Blue => text.black().on_blue().bold().to_string(),
    }
}

/// Draw the board top row first, with 1-based column numbers underneath.
pub fn render_board(board: &Board, colour: bool) -> String {
    let mut out = String::new();

    for row in board.rows_top_down() {
        divider(&mut out, board.width());
        for cell in row {
            out.push('|');
            out.push_str(&cell_text(cell, colour));
        }
        out.push_str("|\n");
    }
    divider(&mut out, board.width());

    out.push(' ');
    for col in 1..=board.width() {
        let _ = write!(out, "{:^4}", col);
    }
    out.push('\n');
    out
}

/// Move the cursor home, clearing the screen first when `clear` is set.
pub fn reset_screen<W: Write>(out: &mut W, clear: bool) -> io::Result<()> {
    if clear {
        queue!(out, Clear(ClearType::All))?;
    }
    queue!(out, MoveTo(0, 0))
}

pub fn how_to_play() -> String {
    let mut example = Board::new(7, 6);
    for (col, player) in [
        (2, Player::Blue),
        (4, Player::Red),
        (5, Player::Red),
        (6, Player::Blue),
        (6, Player::Blue),
        (6, Player::Red),
    ] {
        example
            .drop_piece(col, player)
            .expect("example move fits");
    }

    let mut text = String::new();
    text.push_str("Connect Four is based on a Milton Bradley game.\n");
    text.push_str("https://en.wikipedia.org/wiki/Connect_Four\n\n");
    text.push_str("At the top of the screen is the puzzle\nExample:\n");
    text.push_str(&render_board(&example, false));
    text.push('\n');
    text.push_str("And below it is the input\nExample:\n");
    text.push_str("Turn: Blue\nColumn number? \n\n");
    text.push_str(
        "Enter a column number and your piece will fall to the bottom or onto another piece.\n",
    );
    text.push_str(
        "Line up the connect length (4 by default) across, up and down or diagonally to win.\n",
    );
    text.push_str("Type 'exit' to quit\n");
    text
}
