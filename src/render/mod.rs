//=========================================================================
// Maze Renderer
//
// Rasterizes a `MazeSnapshot` onto a `Canvas`.
//
// Geometry (cell size `c`, wall thickness `t`):
// ```text
//   x = col * c                      maze area: cols*c + t  by  rows*c + t
//   ┌──t──┬────────┬──           status bar:  STATUS_BAR_HEIGHT px below,
//   t     │        │                          after a 1px gap
//   ├─────┼──── c ─┤
// ```
// Each present wall is a `t`-thick segment between two cell corners.
// Markers are inset so they never cover a wall.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod canvas;

//=== Public API ==========================================================

pub use canvas::{colors, Canvas, Rgb};

//=== Internal Dependencies ===============================================

use crate::game::{GamePhase, MazeSnapshot};
use crate::maze::{Cell, Position};

//=== RenderConfig ========================================================

/// Height of the status strip under the maze, in pixels.
pub const STATUS_BAR_HEIGHT: u32 = 40;

/// Pixel geometry. Affects drawing only, never game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub cell_size: u32,
    pub wall_thickness: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: 24,
            wall_thickness: 2,
        }
    }
}

impl RenderConfig {
    /// Window inner size for a `rows` x `cols` maze plus the status bar.
    pub fn window_size(&self, rows: usize, cols: usize) -> (u32, u32) {
        let (maze_w, maze_h) = self.maze_size(rows, cols);
        (maze_w + 1, maze_h + 1 + STATUS_BAR_HEIGHT)
    }

    fn maze_size(&self, rows: usize, cols: usize) -> (u32, u32) {
        (
            cols as u32 * self.cell_size + self.wall_thickness,
            rows as u32 * self.cell_size + self.wall_thickness,
        )
    }

    /// Top-left corner of a cell.
    #[inline]
    fn origin(&self, pos: Position) -> (u32, u32) {
        (pos.x as u32 * self.cell_size, pos.y as u32 * self.cell_size)
    }
}

//=== MazePainter =========================================================

/// Draws snapshots with a fixed geometry.
pub struct MazePainter {
    config: RenderConfig,
}

impl MazePainter {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Canvas sized for `snapshot`'s grid.
    pub fn canvas_for(&self, snapshot: &MazeSnapshot) -> Canvas {
        let (w, h) = self.config.window_size(snapshot.grid.rows(), snapshot.grid.cols());
        Canvas::new(w, h)
    }

    /// Draws the whole frame: background, walls, markers, player, status bar.
    pub fn paint(&self, canvas: &mut Canvas, snapshot: &MazeSnapshot) {
        let grid = &snapshot.grid;
        let (maze_w, maze_h) = self.config.maze_size(grid.rows(), grid.cols());

        canvas.clear(colors::GAINSBORO);
        canvas.fill_rect(0, 0, maze_w, maze_h, colors::WHITE);

        for (pos, cell) in grid.iter() {
            self.paint_walls(canvas, pos, cell);
        }

        self.paint_marker(canvas, snapshot.start(), colors::LIGHT_GREEN);
        self.paint_marker(canvas, snapshot.goal, colors::ORANGE_RED);
        self.paint_player(canvas, snapshot.player);

        let bar_color = match snapshot.phase() {
            GamePhase::Playing => colors::GAINSBORO,
            GamePhase::Won => colors::LIGHT_GREEN,
        };
        canvas.fill_rect(0, maze_h + 1, canvas.width(), STATUS_BAR_HEIGHT, bar_color);
    }

    //--- Internal Helpers -------------------------------------------------

    fn paint_walls(&self, canvas: &mut Canvas, pos: Position, cell: &Cell) {
        let RenderConfig { cell_size: c, wall_thickness: t } = self.config;
        let (x, y) = self.config.origin(pos);

        if cell.top {
            canvas.fill_rect(x, y, c + t, t, colors::BLACK);
        }
        if cell.right {
            canvas.fill_rect(x + c, y, t, c + t, colors::BLACK);
        }
        if cell.bottom {
            canvas.fill_rect(x, y + c, c + t, t, colors::BLACK);
        }
        if cell.left {
            canvas.fill_rect(x, y, t, c + t, colors::BLACK);
        }
    }

    fn paint_marker(&self, canvas: &mut Canvas, pos: Position, color: Rgb) {
        let RenderConfig { cell_size: c, wall_thickness: t } = self.config;
        let (x, y) = self.config.origin(pos);
        let size = c.saturating_sub(t + 2);
        canvas.fill_rect(x + t + 1, y + t + 1, size, size, color);
    }

    fn paint_player(&self, canvas: &mut Canvas, pos: Position) {
        let RenderConfig { cell_size: c, wall_thickness: t } = self.config;
        let (x, y) = self.config.origin(pos);
        let radius = c * 35 / 100;
        canvas.fill_circle(x + (c + t) / 2, y + (c + t) / 2, radius, colors::DEEP_SKY_BLUE);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;
    use crate::maze::{Direction, Grid};

    //--- Test Helpers -----------------------------------------------------

    /// 3x3 maze with a corridor along the top row and down the right side.
    fn snapshot() -> MazeSnapshot {
        let mut grid = Grid::new(3, 3);
        grid.carve(Position::new(0, 0), Direction::Right);
        grid.carve(Position::new(1, 0), Direction::Right);
        grid.carve(Position::new(2, 0), Direction::Down);
        grid.carve(Position::new(2, 1), Direction::Down);
        grid.carve(Position::new(0, 0), Direction::Down);
        grid.carve(Position::new(0, 1), Direction::Down);
        grid.carve(Position::new(0, 2), Direction::Right);
        grid.carve(Position::new(1, 2), Direction::Up);
        GameState::with_grid(grid).snapshot()
    }

    fn painted(snapshot: &MazeSnapshot) -> Canvas {
        let painter = MazePainter::new(RenderConfig::default());
        let mut canvas = painter.canvas_for(snapshot);
        painter.paint(&mut canvas, snapshot);
        canvas
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn window_size_matches_default_layout() {
        let config = RenderConfig::default();
        assert_eq!(config.window_size(21, 31), (31 * 24 + 3, 21 * 24 + 3 + 40));
    }

    #[test]
    fn border_walls_are_black() {
        let canvas = painted(&snapshot());
        assert_eq!(canvas.pixel(0, 0), Some(colors::BLACK));
        assert_eq!(canvas.pixel(73, 73), Some(colors::BLACK));
        assert_eq!(canvas.pixel(12, 0), Some(colors::BLACK));
    }

    #[test]
    fn open_passage_is_white_and_wall_is_black() {
        let canvas = painted(&snapshot());

        // Between (0,0) and (1,0): carved.
        assert_eq!(canvas.pixel(24, 12), Some(colors::WHITE));
        // Below (1,0): wall.
        assert_eq!(canvas.pixel(36, 25), Some(colors::BLACK));
    }

    #[test]
    fn markers_use_their_colors() {
        let mut snap = snapshot();
        snap.player = Position::new(1, 1);
        let canvas = painted(&snap);

        assert_eq!(canvas.pixel(4, 4), Some(colors::LIGHT_GREEN));
        assert_eq!(canvas.pixel(48 + 4, 48 + 4), Some(colors::ORANGE_RED));
        assert_eq!(canvas.pixel(24 + 13, 24 + 13), Some(colors::DEEP_SKY_BLUE));
    }

    #[test]
    fn player_drawn_over_start() {
        let canvas = painted(&snapshot());
        assert_eq!(canvas.pixel(13, 13), Some(colors::DEEP_SKY_BLUE));
    }

    #[test]
    fn status_bar_turns_green_when_won() {
        let mut snap = snapshot();
        let bar_y = 3 * 24 + 2 + 1 + 10;

        let canvas = painted(&snap);
        assert_eq!(canvas.pixel(5, bar_y), Some(colors::GAINSBORO));

        snap.won = true;
        snap.player = snap.goal;
        let canvas = painted(&snap);
        assert_eq!(canvas.pixel(5, bar_y), Some(colors::LIGHT_GREEN));
    }
}
