use std::path::PathBuf;

use log::{debug, info};
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::{Conf, get_time, next_frame};

use crate::assets::{AssetPaths, Assets};
use crate::game::{Controller, GameConfig, TickReport};
use crate::input::{KeyAction, window::pressed_actions};
use crate::render::{ScreenLayout, WindowRenderer};

/// Play in a macroquad window
pub struct WindowMode {
    config: GameConfig,
    asset_dir: PathBuf,
    seed: Option<u64>,
}

impl WindowMode {
    pub fn new(config: GameConfig, asset_dir: PathBuf, seed: Option<u64>) -> Self {
        Self {
            config,
            asset_dir,
            seed,
        }
    }

    pub fn window_conf(&self) -> Conf {
        let size = self.config.window_size();
        Conf {
            window_title: self.config.title.clone(),
            window_width: size,
            window_height: size,
            window_resizable: false,
            // Frames are paced by vsync in `next_frame`
            platform: Platform {
                swap_interval: Some(1),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Open the window and play until it is closed or a quit key is pressed
    pub fn run(self) {
        info!("opening a {0}x{0} window", self.config.window_size());
        macroquad::Window::from_config(self.window_conf(), self.run_game_loop());
        info!("window closed");
    }

    async fn run_game_loop(self) {
        let assets = Assets::load(&AssetPaths::in_dir(&self.asset_dir)).await;
        let renderer = WindowRenderer::new(ScreenLayout::new(&self.config));
        let mut controller = Controller::from_config(self.config, self.seed);

        loop {
            let frame_start = get_time();

            let mut steering = Vec::new();
            let mut should_quit = false;
            for action in pressed_actions() {
                match action {
                    KeyAction::Steer(direction) => steering.push(direction),
                    KeyAction::Quit => should_quit = true,
                    KeyAction::None => {}
                }
            }
            if should_quit {
                debug!("quit key pressed");
                break;
            }

            let report = controller.frame(frame_start, steering);
            play_cues(&assets, report);

            renderer.render(controller.game(), assets.food_texture());
            next_frame().await;
        }
    }
}

fn play_cues(assets: &Assets, report: TickReport) {
    for cue in report.cues() {
        assets.play(cue);
    }
}
