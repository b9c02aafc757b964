use std::collections::VecDeque;

use rand::Rng;

use super::action::Direction;

/// Body of a fresh snake, head first
pub const INITIAL_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];

/// Direction of a fresh snake
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Bring each coordinate back into `[0, count)` by re-entering from the
    /// opposite side. Only handles cells at most one step outside the grid.
    pub fn wrapped(&self, count: i32) -> Self {
        Self {
            x: wrap_axis(self.x, count),
            y: wrap_axis(self.y, count),
        }
    }

    /// Check if the cell lies on a `count` x `count` grid
    pub fn is_on_grid(&self, count: i32) -> bool {
        (0..count).contains(&self.x) && (0..count).contains(&self.y)
    }
}

fn wrap_axis(value: i32, count: i32) -> i32 {
    if value >= count {
        0
    } else if value < 0 {
        count - 1
    } else {
        value
    }
}

/// Check if `cell` is one of `cells`
pub fn is_occupied<'a>(cells: impl IntoIterator<Item = &'a Cell>, cell: Cell) -> bool {
    cells.into_iter().any(|occupied| *occupied == cell)
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Cell>,
    /// Current direction of movement
    pub direction: Direction,
    /// Keep the tail on the next advance
    grow: bool,
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

impl Snake {
    /// Create a snake in its starting position
    pub fn new() -> Self {
        Self::from_body(INITIAL_BODY, INITIAL_DIRECTION)
    }

    /// Create a snake from explicit segments, head first.
    ///
    /// # Panics
    ///
    /// Panics if `body` yields no cells.
    pub fn from_body(body: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = body.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one cell");

        Self {
            body,
            direction,
            grow: false,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// All segments, head first
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Body segments excluding the head
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter().skip(1)
    }

    /// Check if cell collides with snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        is_occupied(self.segments(), cell)
    }

    /// Where the head goes on the next advance, before any wrapping
    pub fn next_head(&self) -> Cell {
        self.head().moved_in_direction(self.direction)
    }

    /// Move one cell in the current direction. The tail stays put once after
    /// [`Snake::grow`] was called.
    pub fn advance(&mut self) {
        self.body.push_front(self.next_head());

        if self.grow {
            self.grow = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Arm growth for the next advance
    pub fn grow(&mut self) {
        self.grow = true;
    }

    pub fn is_growing(&self) -> bool {
        self.grow
    }

    /// Replace the head cell in place
    pub fn set_head(&mut self, cell: Cell) {
        self.body[0] = cell;
    }

    /// Back to the starting position and direction
    pub fn reset(&mut self) {
        self.body = INITIAL_BODY.into_iter().collect();
        self.direction = INITIAL_DIRECTION;
        self.grow = false;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The piece of food on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Create food on a random cell not covered by `occupied`
    pub fn new<R: Rng + ?Sized>(occupied: &VecDeque<Cell>, grid_count: i32, rng: &mut R) -> Self {
        Self {
            position: random_free_cell(occupied, grid_count, rng),
        }
    }

    /// Create food on a fixed cell
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a random cell not covered by `occupied`.
    ///
    /// Sampling is retried without bound, so this never returns when
    /// `occupied` covers the whole grid.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        occupied: &VecDeque<Cell>,
        grid_count: i32,
        rng: &mut R,
    ) {
        self.position = random_free_cell(occupied, grid_count, rng);
    }
}

fn random_cell<R: Rng + ?Sized>(grid_count: i32, rng: &mut R) -> Cell {
    Cell::new(rng.gen_range(0..grid_count), rng.gen_range(0..grid_count))
}

fn random_free_cell<R: Rng + ?Sized>(
    occupied: &VecDeque<Cell>,
    grid_count: i32,
    rng: &mut R,
) -> Cell {
    loop {
        let cell = random_cell(grid_count, rng);
        if !is_occupied(occupied, cell) {
            return cell;
        }
    }
}
