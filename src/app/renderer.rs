use std::io::Write;

use crossterm::{
    queue,
    style::{self, Color, Stylize},
};

use crate::maze::{Coord, WallGraph};

/// Knock out the entrance (left side of cell (0, 0)) and the exit (right side of the
/// bottom-right cell) so the maze can be walked from one corner to the other.
/// An empty grid has no doors and is left as is.
pub fn open_entrance_and_exit(walls: &mut WallGraph, width: u16, height: u16) {
    if width == 0 || height == 0 {
        return;
    }
    walls.remove_edge((0, 0), (0, 1));
    walls.remove_edge((width, height), (width, height - 1));
}

/// Draws a wall graph as box-drawing text, one terminal line per lattice row and one per
/// cell row, with `y = 0` on top.
#[derive(Debug, Clone)]
pub struct WallRenderer {
    /// Paint walls with `wall_color` using ANSI escapes
    color: bool,
    wall_color: Color,
}

impl Default for WallRenderer {
    fn default() -> Self {
        Self {
            color: true,
            wall_color: Color::White,
        }
    }
}

impl WallRenderer {
    /// Number of horizontal glyphs drawn for the inside of one cell.
    pub const CELL_WIDTH: usize = 3;

    pub fn new(color: bool) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_wall_color(mut self, wall_color: Color) -> Self {
        self.wall_color = wall_color;
        self
    }

    /// Pick the junction glyph for a lattice point from the walls that touch it.
    fn junction(up: bool, down: bool, left: bool, right: bool) -> char {
        match (up, down, left, right) {
            (false, false, false, false) => ' ',
            (false, false, false, true) => '╶',
            (false, false, true, false) => '╴',
            (false, false, true, true) => '─',
            (false, true, false, false) => '╷',
            (false, true, false, true) => '┌',
            (false, true, true, false) => '┐',
            (false, true, true, true) => '┬',
            (true, false, false, false) => '╵',
            (true, false, false, true) => '└',
            (true, false, true, false) => '┘',
            (true, false, true, true) => '┴',
            (true, true, false, false) => '│',
            (true, true, false, true) => '├',
            (true, true, true, false) => '┤',
            (true, true, true, true) => '┼',
        }
    }

    fn has_wall(walls: &WallGraph, a: Coord, b: Coord) -> bool {
        walls.contains_edge(a, b)
    }

    /// Lay out the maze as plain text lines.
    pub fn lines(&self, walls: &WallGraph, width: u16, height: u16) -> Vec<String> {
        let horizontal = "─".repeat(Self::CELL_WIDTH);
        let gap = " ".repeat(Self::CELL_WIDTH);
        let mut lines = Vec::with_capacity(2 * height as usize + 1);

        for y in 0..=height {
            let mut line = String::new();
            for x in 0..=width {
                let up = y > 0 && Self::has_wall(walls, (x, y), (x, y - 1));
                let down = y < height && Self::has_wall(walls, (x, y), (x, y + 1));
                let left = x > 0 && Self::has_wall(walls, (x, y), (x - 1, y));
                let right = x < width && Self::has_wall(walls, (x, y), (x + 1, y));
                line.push(Self::junction(up, down, left, right));
                if x < width {
                    line.push_str(if right { &horizontal } else { &gap });
                }
            }
            lines.push(line);

            if y < height {
                let mut line = String::new();
                for x in 0..=width {
                    let wall = Self::has_wall(walls, (x, y), (x, y + 1));
                    line.push(if wall { '│' } else { ' ' });
                    if x < width {
                        line.push_str(&gap);
                    }
                }
                lines.push(line);
            }
        }

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            let expected = width as usize * (Self::CELL_WIDTH + 1) + 1;
            for line in &lines {
                assert_eq!(
                    line.width(),
                    expected,
                    "Every rendered line must be exactly {expected} columns wide."
                );
            }
        }

        lines
    }

    /// Render the maze without any escape codes.
    pub fn render_to_string(&self, walls: &WallGraph, width: u16, height: u16) -> String {
        let mut text = self.lines(walls, width, height).join("\n");
        text.push('\n');
        text
    }

    /// Render the maze to `out`, colored if enabled.
    pub fn render(
        &self,
        out: &mut impl Write,
        walls: &WallGraph,
        width: u16,
        height: u16,
    ) -> std::io::Result<()> {
        for line in self.lines(walls, width, height) {
            if self.color {
                queue!(
                    out,
                    style::PrintStyledContent(line.with(self.wall_color)),
                    style::Print("\n")
                )?;
            } else {
                queue!(out, style::Print(line), style::Print("\n"))?;
            }
        }
        out.flush()
    }
}
