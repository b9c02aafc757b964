//! Frame-to-tick plumbing shared by the frontends.
//!
//! Frontends render every frame but the game only moves when the tick
//! interval has elapsed. Direction keys are accepted at most once per tick.

use super::{
    action::Direction,
    config::GameConfig,
    engine::{Game, TickReport},
};

/// Decides when the next tick is due, given the current time in seconds
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    last_tick: f64,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true, and records `now` as the last tick, once at least
    /// `interval` seconds have passed since the previous tick.
    pub fn is_due(&mut self, interval: f64, now: f64) -> bool {
        if now - self.last_tick >= interval {
            self.last_tick = now;
            return true;
        }
        false
    }
}

/// One-shot permission to change direction, re-armed every tick
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGate {
    armed: bool,
}

impl MoveGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }
}

/// Drives a [`Game`] from frame updates and direction key presses
pub struct Controller {
    game: Game,
    scheduler: TickScheduler,
    gate: MoveGate,
}

impl Controller {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            scheduler: TickScheduler::new(),
            gate: MoveGate::new(),
        }
    }

    /// Build a controller for a fresh game, seeded when `seed` is given
    pub fn from_config(config: GameConfig, seed: Option<u64>) -> Self {
        let game = match seed {
            Some(seed) => Game::with_seed(config, seed),
            None => Game::new(config),
        };
        Self::new(game)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn gate(&self) -> &MoveGate {
        &self.gate
    }

    /// Process one frame at time `now` (seconds).
    ///
    /// Ticks the game if the interval elapsed, which also re-arms the move
    /// gate, then offers the pressed directions to the game in order. The
    /// first direction the game accepts closes the gate; later presses in
    /// the same tick window are dropped.
    pub fn frame(
        &mut self,
        now: f64,
        pressed: impl IntoIterator<Item = Direction>,
    ) -> TickReport {
        let mut report = TickReport::default();

        if self.scheduler.is_due(self.game.config().tick_interval, now) {
            self.gate.arm();
            report.merge(self.game.tick());
        }

        for direction in pressed {
            if self.gate.is_armed() && self.game.steer(direction) {
                self.gate.disarm();
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::Cell;

    fn controller() -> Controller {
        Controller::from_config(GameConfig::default(), Some(3))
    }

    #[test]
    fn test_scheduler_waits_for_interval() {
        let mut scheduler = TickScheduler::new();

        assert!(!scheduler.is_due(0.2, 0.1));
        assert!(scheduler.is_due(0.2, 0.2));
        assert_eq!(scheduler.last_tick, 0.2);
        assert!(!scheduler.is_due(0.2, 0.35));
        assert!(scheduler.is_due(0.2, 0.45));
        assert_eq!(scheduler.last_tick, 0.45);
    }

    #[test]
    fn test_gate_is_one_shot() {
        let mut gate = MoveGate::new();
        assert!(!gate.is_armed());

        gate.arm();
        gate.arm();
        assert!(gate.is_armed());

        gate.disarm();
        assert!(!gate.is_armed());
    }

    #[test]
    fn test_no_tick_before_interval() {
        let mut controller = controller();

        let report = controller.frame(0.1, []);

        assert!(!report.advanced);
        assert_eq!(controller.game().snake().head(), Cell::new(6, 9));
        assert!(!controller.gate().is_armed());
    }

    #[test]
    fn test_keys_ignored_before_first_tick() {
        let mut controller = controller();

        controller.frame(0.05, [Direction::Up]);

        assert_eq!(controller.game().snake().direction, Direction::Right);
    }

    #[test]
    fn test_one_direction_change_per_tick() {
        let mut controller = controller();

        let report = controller.frame(0.2, [Direction::Up, Direction::Left]);

        assert!(report.advanced);
        assert_eq!(controller.game().snake().direction, Direction::Up);
        assert!(!controller.gate().is_armed());

        controller.frame(0.25, [Direction::Left]);
        assert_eq!(controller.game().snake().direction, Direction::Up);

        controller.frame(0.5, [Direction::Left]);
        assert_eq!(controller.game().snake().direction, Direction::Left);
    }

    #[test]
    fn test_rejected_reversal_keeps_gate_armed() {
        let mut controller = controller();

        controller.frame(0.2, [Direction::Left, Direction::Down]);

        assert_eq!(controller.game().snake().direction, Direction::Down);
        assert!(!controller.gate().is_armed());
    }

    #[test]
    fn test_gate_rearms_every_tick() {
        let mut controller = controller();

        controller.frame(0.2, []);
        assert!(controller.gate().is_armed());

        controller.frame(0.3, [Direction::Down]);
        assert!(!controller.gate().is_armed());

        controller.frame(0.5, []);
        assert!(controller.gate().is_armed());
    }
}
