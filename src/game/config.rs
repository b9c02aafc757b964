/// Fixed parameters of the game board and window.
///
/// Rules are not configurable; this only gathers the constants in one place so the
/// frontends and the engine agree on them.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Number of cells along each side of the square grid
    pub grid_count: i32,
    /// Side of one cell in pixels
    pub cell_size: f32,
    /// Margin between the window edge and the board, in pixels
    pub padding: f32,
    /// Seconds between two game ticks
    pub tick_interval: f64,
    /// Render frames per second the frontends aim for
    pub target_fps: u32,
    /// Window title, also drawn above the board
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_count: 25,
            cell_size: 30.0,
            padding: 75.0,
            tick_interval: 0.2,
            target_fps: 60,
            title: "Snake's Greedy Hunt".to_owned(),
        }
    }
}

impl GameConfig {
    /// Width and height of the (square) window in pixels
    pub fn window_size(&self) -> i32 {
        (2.0 * self.padding + self.cell_size * self.grid_count as f32) as i32
    }

    /// Side of the playing board in pixels
    pub fn board_size(&self) -> f32 {
        self.cell_size * self.grid_count as f32
    }
}
