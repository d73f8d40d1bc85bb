//! Character-grid renderer
//!
//! Arena coordinates are scaled onto a fixed grid of cells. A cell is filled
//! when a shape overlaps any part of it, so small shapes never vanish.

use glam::Vec2;

use crate::platform::Renderer;
use crate::sim::{BrickColor, Rect, Snapshot};

/// Default grid size (cells)
pub const DEFAULT_COLS: usize = 80;
pub const DEFAULT_ROWS: usize = 30;

const EMPTY: char = ' ';
const PADDLE: char = '=';
const BALL: char = 'o';

/// Glyph for a brick color
fn brick_glyph(color: BrickColor) -> char {
    match color {
        BrickColor::Red => '#',
        BrickColor::Orange => '%',
        BrickColor::Yellow => '*',
        BrickColor::Green => '+',
        BrickColor::Blue => '~',
    }
}

/// Renders snapshots as text, keeping the most recent frame
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cols: usize,
    rows: usize,
    frame: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

impl TextRenderer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            frame: String::new(),
        }
    }

    /// The most recently rendered frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Draw a snapshot into a fresh frame
    pub fn draw(&self, snapshot: &Snapshot) -> String {
        let mut grid = Grid::new(self.cols, self.rows, snapshot.arena);

        for brick in &snapshot.bricks {
            grid.fill_rect(&brick.rect, brick_glyph(brick.color));
        }
        grid.fill_rect(&snapshot.paddle, PADDLE);
        grid.plot(snapshot.ball_pos, BALL);

        if snapshot.game_won {
            grid.banner("YOU WIN!");
        } else if snapshot.game_over {
            grid.banner("GAME OVER");
        }

        let border = format!("+{}+", "-".repeat(self.cols));
        let mut out = String::with_capacity((self.cols + 3) * (self.rows + 3));
        out.push_str(&format!(
            "Score: {:<6} Bricks: {:<4} Tick: {}\n",
            snapshot.score,
            snapshot.visible_bricks(),
            snapshot.tick
        ));
        out.push_str(&border);
        out.push('\n');
        for row in grid.cells.chunks(self.cols) {
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push_str(&border);
        out.push('\n');
        out
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frame = self.draw(snapshot);
    }
}

/// Cell buffer with arena-to-cell scaling
struct Grid {
    cols: usize,
    rows: usize,
    cell: Vec2,
    cells: Vec<char>,
}

impl Grid {
    fn new(cols: usize, rows: usize, arena: Vec2) -> Self {
        Self {
            cols,
            rows,
            cell: Vec2::new(arena.x / cols as f32, arena.y / rows as f32),
            cells: vec![EMPTY; cols * rows],
        }
    }

    /// Cell span `[start, end)` covering `[lo, hi]` along one axis
    fn span(lo: f32, hi: f32, cell: f32, count: usize) -> (usize, usize) {
        let start = (lo / cell).floor().max(0.0) as usize;
        let end = ((hi / cell).ceil().max(0.0) as usize).min(count);
        (start.min(count), end)
    }

    fn fill_rect(&mut self, rect: &Rect, glyph: char) {
        let (c0, c1) = Self::span(rect.left(), rect.right(), self.cell.x, self.cols);
        let (r0, r1) = Self::span(rect.top(), rect.bottom(), self.cell.y, self.rows);
        for row in r0..r1 {
            for col in c0..c1 {
                self.cells[row * self.cols + col] = glyph;
            }
        }
    }

    fn plot(&mut self, point: Vec2, glyph: char) {
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return;
        }
        let col = (point.x / self.cell.x) as usize;
        let row = (point.y / self.cell.y) as usize;
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = glyph;
        }
    }

    /// Centered message with a restart prompt underneath
    fn banner(&mut self, message: &str) {
        let middle = self.rows / 2;
        self.write_centered(middle, &format!(" {message} "));
        if middle + 1 < self.rows {
            self.write_centered(middle + 1, " [ restart ] ");
        }
    }

    fn write_centered(&mut self, row: usize, text: &str) {
        let chars: Vec<char> = text.chars().take(self.cols).collect();
        let start = (self.cols - chars.len()) / 2;
        let base = row * self.cols + start;
        self.cells[base..base + chars.len()].copy_from_slice(&chars);
    }
}
