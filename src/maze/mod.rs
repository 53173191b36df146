//=========================================================================
// Maze Data Model
//=========================================================================
//
// Grid of wall-flagged cells produced by the generator and consumed by
// the movement rules and the renderer.
//
// Layout:
//   cells: Vec<Cell>   (row-major, index = row * cols + col)
//
//   (0,0) ─────────► col
//     │  ┌───┬───┐
//     │  │   │   │   row increases downward,
//     ▼  ├───┼───┤   column increases rightward
//    row │   │   │
//        └───┴───┘
//
// A passage exists between two adjacent cells iff the facing wall flags
// on both sides are cleared. `Grid::carve` is the only way to clear them,
// so passages are always symmetric.
//
//=========================================================================

//=== Module Declarations =================================================

mod generator;

//=== Public API ==========================================================

pub use generator::generate;

//=== Direction ===========================================================

/// One of the four axis directions, in clockwise order starting at Up.
///
/// Also names the wall on that side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Row/column offsets and the wall pair a step crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub d_row: isize,
    pub d_col: isize,
    /// Wall cleared on the cell the step starts from.
    pub near_wall: Direction,
    /// Wall cleared on the cell the step lands on.
    pub far_wall: Direction,
}

const STEPS: [Step; 4] = [
    Step { d_row: -1, d_col: 0, near_wall: Direction::Up, far_wall: Direction::Down },
    Step { d_row: 0, d_col: 1, near_wall: Direction::Right, far_wall: Direction::Left },
    Step { d_row: 1, d_col: 0, near_wall: Direction::Down, far_wall: Direction::Up },
    Step { d_row: 0, d_col: -1, near_wall: Direction::Left, far_wall: Direction::Right },
];

impl Direction {
    /// All directions in table order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[inline]
    pub const fn step(self) -> Step {
        STEPS[self as usize]
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        self.step().far_wall
    }
}

//=== Position ============================================================

/// Cell coordinate: `x` is the column, `y` is the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The fixed start cell, top-left corner.
    pub const ORIGIN: Position = Position::new(0, 0);
}

//=== Cell ================================================================

/// Four independent wall flags. `true` means the wall is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Cell {
    /// A fully walled cell.
    pub const CLOSED: Cell = Cell {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// Returns `true` if the wall on `side` is present.
    #[inline]
    pub fn has_wall(&self, side: Direction) -> bool {
        match side {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    fn clear_wall(&mut self, side: Direction) {
        match side {
            Direction::Up => self.top = false,
            Direction::Right => self.right = false,
            Direction::Down => self.bottom = false,
            Direction::Left => self.left = false,
        }
    }

    /// Number of open sides.
    pub fn open_sides(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| !self.has_wall(d)).count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::CLOSED
    }
}

//=== Grid ================================================================

/// Minimum accepted value for both dimensions.
pub const MIN_DIMENSION: usize = 3;

/// Rectangular grid of cells stored in one contiguous row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every wall present.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `cols` is 2 or less.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= MIN_DIMENSION, "Rows must be greater than 2, got {}", rows);
        assert!(cols >= MIN_DIMENSION, "Cols must be greater than 2, got {}", cols);

        Self {
            rows,
            cols,
            cells: vec![Cell::CLOSED; rows * cols],
        }
    }

    //--- Geometry ---------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least 3x3 cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    #[inline]
    pub(crate) fn index_of(&self, pos: Position) -> usize {
        pos.y * self.cols + pos.x
    }

    #[inline]
    pub(crate) fn position_of(&self, index: usize) -> Position {
        Position::new(index % self.cols, index / self.cols)
    }

    /// Bottom-right corner; the goal cell.
    #[inline]
    pub fn far_corner(&self) -> Position {
        Position::new(self.cols - 1, self.rows - 1)
    }

    /// Adjacent cell in `dir`, or `None` at the grid edge (no wraparound).
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let step = dir.step();
        let x = pos.x.checked_add_signed(step.d_col)?;
        let y = pos.y.checked_add_signed(step.d_row)?;
        let next = Position::new(x, y);
        self.contains(next).then_some(next)
    }

    //--- Cell Access ------------------------------------------------------

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[inline]
    pub fn cell(&self, pos: Position) -> &Cell {
        assert!(self.contains(pos), "Position {:?} outside {}x{} grid", pos, self.rows, self.cols);
        &self.cells[self.index_of(pos)]
    }

    /// Iterates `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (self.position_of(i), cell))
    }

    /// Returns `true` if a step from `pos` towards `dir` crosses no wall.
    #[inline]
    pub fn is_open(&self, pos: Position, dir: Direction) -> bool {
        !self.cell(pos).has_wall(dir)
    }

    //--- Mutation ---------------------------------------------------------

    /// Removes the wall pair between `pos` and its neighbor in `dir`.
    ///
    /// Returns the neighbor, or `None` (grid untouched) at the edge.
    pub fn carve(&mut self, pos: Position, dir: Direction) -> Option<Position> {
        let next = self.neighbor(pos, dir)?;
        let step = dir.step();

        let near = self.index_of(pos);
        let far = self.index_of(next);
        self.cells[near].clear_wall(step.near_wall);
        self.cells[far].clear_wall(step.far_wall);

        Some(next)
    }

    //--- Topology ---------------------------------------------------------

    /// Number of open passages between adjacent cells.
    ///
    /// Counts each passage once (right and bottom sides only).
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| usize::from(!c.right) + usize::from(!c.bottom))
            .sum()
    }

    /// Cells reachable from `pos` through one open wall.
    pub fn open_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&d| self.is_open(pos, d))
            .filter_map(move |d| self.neighbor(pos, d))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
