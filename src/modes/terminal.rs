use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use crate::game::{Controller, Direction, GameConfig, TickReport};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Play inside the terminal
pub struct TerminalMode {
    controller: Controller,
    renderer: Renderer,
    input_handler: InputHandler,
    frame_budget: Duration,
    should_quit: bool,
}

impl TerminalMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let frame_budget = Duration::from_secs_f64(1.0 / f64::from(config.target_fps));

        Self {
            controller: Controller::from_config(config, seed),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            frame_budget,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        // Draw on stdout so stderr stays free for logs
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    fn run_game_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let started = Instant::now();

        while !self.should_quit {
            let frame_start = Instant::now();

            let steering = self.drain_input()?;
            let report = self
                .controller
                .frame(started.elapsed().as_secs_f64(), steering);
            announce_cues(report);

            terminal
                .draw(|frame| {
                    self.renderer.render(frame, self.controller.game());
                })
                .context("Failed to draw frame")?;

            // Sleep out the rest of the frame, waking early for input
            let spent = frame_start.elapsed();
            if spent < self.frame_budget {
                event::poll(self.frame_budget - spent).context("Failed to poll events")?;
            }
        }

        info!("quitting");
        Ok(())
    }

    /// Read every pending event, returning the pressed directions in order
    fn drain_input(&mut self) -> Result<Vec<Direction>> {
        let mut steering = Vec::new();

        while event::poll(Duration::ZERO).context("Failed to poll events")? {
            let Event::Key(key) = event::read().context("Failed to read event")? else {
                continue;
            };

            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => steering.push(direction),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }

        Ok(steering)
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn announce_cues(report: TickReport) {
    for cue in report.cues() {
        debug!("sound cue {cue:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_initialization() {
        let mode = TerminalMode::new(GameConfig::default(), Some(8));

        assert!(mode.controller.game().is_running());
        assert_eq!(mode.controller.game().score(), 0);
        assert_eq!(mode.frame_budget, Duration::from_secs_f64(1.0 / 60.0));
        assert!(!mode.should_quit);
    }
}
