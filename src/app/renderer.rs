use std::collections::HashSet;
use std::fmt;
use std::io::{Stdout, Write};

use crossterm::{
    QueueableCommand, cursor, queue,
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::projection::OccupancyGrid;

/// What one projected coordinate is drawn as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Tile {
    Wall,
    Floor,
    Player,
    Start,
    Finish,
    Hint,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub(super) const TILE_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "▓▓".with(Color::DarkGrey),
            Tile::Floor => "  ".with(Color::Reset),
            Tile::Player => ":)".with(Color::Green),
            Tile::Start => "()".with(Color::Cyan),
            Tile::Finish => "$$".with(Color::Red),
            Tile::Hint => "<>".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Everything drawn on top of the bare occupancy grid.
pub(super) struct Overlay<'a> {
    /// Player position in projected coordinates
    pub player: (u16, u16),
    /// Start marker position in projected coordinates
    pub start: (u16, u16),
    /// Finish marker position in projected coordinates
    pub finish: (u16, u16),
    /// Projected coordinates of the solver path, drawn when hints are on
    pub hint: Option<&'a [(u16, u16)]>,
}

/// Draws the maze and its overlay, one two-column tile per projected
/// coordinate, with a key legend underneath.
pub(super) fn draw(
    stdout: &mut Stdout,
    cells: &OccupancyGrid,
    overlay: &Overlay<'_>,
) -> std::io::Result<()> {
    let hint_cells: HashSet<(u16, u16)> = overlay.hint.unwrap_or(&[]).iter().copied().collect();

    queue!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    for y in 0..cells.side() {
        stdout.queue(cursor::MoveTo(0, y))?;
        for x in 0..cells.side() {
            let tile = if (x, y) == overlay.player {
                Tile::Player
            } else if (x, y) == overlay.finish {
                Tile::Finish
            } else if (x, y) == overlay.start {
                Tile::Start
            } else if hint_cells.contains(&(x, y)) {
                Tile::Hint
            } else if cells[(x, y)] {
                Tile::Floor
            } else {
                Tile::Wall
            };
            stdout.queue(style::Print(tile))?;
        }
    }

    queue!(stdout, cursor::MoveTo(0, cells.side() + 1))?;
    stdout.queue(style::PrintStyledContent(
        "Move: WASD / arrow keys   Hint: h   Quit: q".with(Color::DarkGrey),
    ))?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tile_is_two_columns_wide() {
        use unicode_width::UnicodeWidthStr;
        for tile in [
            Tile::Wall,
            Tile::Floor,
            Tile::Player,
            Tile::Start,
            Tile::Finish,
            Tile::Hint,
        ] {
            // Strip the color escapes by measuring the raw symbol
            let rendered = format!("{tile}");
            let stripped: String = {
                let mut out = String::new();
                let mut in_escape = false;
                for c in rendered.chars() {
                    match c {
                        '\x1b' => in_escape = true,
                        'm' if in_escape => in_escape = false,
                        _ if !in_escape => out.push(c),
                        _ => {}
                    }
                }
                out
            };
            assert_eq!(stripped.width(), Tile::TILE_WIDTH as usize);
        }
    }
}
