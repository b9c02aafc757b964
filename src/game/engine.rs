use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    action::Direction,
    config::GameConfig,
    state::{Food, Snake},
};

/// Sound effect a frontend should play after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// The snake ate the food
    Eat,
    /// The round ended
    Wall,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Whether the snake moved (false while stopped)
    pub advanced: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Whether the round ended this tick
    pub game_over: bool,
}

impl TickReport {
    /// Sound effects to play, in the order the events happened
    pub fn cues(&self) -> impl Iterator<Item = SoundCue> {
        let eat = self.ate_food.then_some(SoundCue::Eat);
        let wall = self.game_over.then_some(SoundCue::Wall);
        eat.into_iter().chain(wall)
    }

    /// Fold a later report into this one
    pub fn merge(&mut self, other: TickReport) {
        self.advanced |= other.advanced;
        self.ate_food |= other.ate_food;
        self.game_over |= other.game_over;
    }
}

/// One game: the snake, its food and the score counters.
///
/// The game starts running. After a game over it stays stopped until a
/// direction is accepted by [`Game::steer`].
pub struct Game {
    config: GameConfig,
    snake: Snake,
    food: Food,
    running: bool,
    score: u32,
    high_score: u32,
    rng: StdRng,
}

impl Game {
    /// Create a game with an entropy-seeded food placement
    pub fn new(config: GameConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    /// Create a game whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::new(snake.body(), config.grid_count, &mut rng);

        Self {
            config,
            snake,
            food,
            running: true,
            score: 0,
            high_score: 0,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Advance the game by one tick.
    ///
    /// The order is fixed: move, eat, wrap at the edges, then check whether
    /// the head ran into the body.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        if !self.running {
            return report;
        }

        self.snake.advance();
        report.advanced = true;

        report.ate_food = self.check_food_collision();
        self.wrap_edges();
        report.game_over = self.check_tail_collision();

        trace!(
            "tick: head at ({}, {}), length {}",
            self.snake.head().x,
            self.snake.head().y,
            self.snake.len()
        );

        report
    }

    /// Turn the snake and (re)start the game.
    ///
    /// Returns false, leaving the game untouched, when `direction` would
    /// reverse the current travel axis.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.snake.direction.is_opposite(direction) {
            return false;
        }

        if !self.running {
            debug!("round restarted heading {direction:?}");
        } else if self.snake.direction != direction {
            debug!("direction changed to {direction:?}");
        }

        self.snake.direction = direction;
        self.running = true;
        true
    }

    fn check_food_collision(&mut self) -> bool {
        if self.snake.head() != self.food.position() {
            return false;
        }

        self.food
            .place(self.snake.body(), self.config.grid_count, &mut self.rng);
        self.snake.grow();
        self.score += 1;
        debug!("food eaten, score {}", self.score);
        true
    }

    fn wrap_edges(&mut self) {
        let head = self.snake.head();
        let wrapped = head.wrapped(self.config.grid_count);
        if wrapped != head {
            self.snake.set_head(wrapped);
        }
    }

    fn check_tail_collision(&mut self) -> bool {
        if self.snake.collides_with_body(self.snake.head()) {
            self.game_over();
            return true;
        }
        false
    }

    fn game_over(&mut self) {
        self.high_score = self.high_score.max(self.score);
        info!(
            "game over with score {} (high score {})",
            self.score, self.high_score
        );

        self.snake.reset();
        self.food
            .place(self.snake.body(), self.config.grid_count, &mut self.rng);
        self.running = false;
        self.score = 0;
    }

    #[cfg(test)]
    fn replace_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    #[cfg(test)]
    fn replace_food(&mut self, food: Food) {
        self.food = food;
    }
}
