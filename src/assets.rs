//! Textures and sounds of the windowed frontend.
//!
//! Everything is loaded once before the first frame and released when
//! [`Assets`] is dropped. A file that fails to load is logged and skipped.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use macroquad::audio::{Sound, load_sound, play_sound_once};
use macroquad::texture::{FilterMode, Texture2D, load_texture};

use crate::game::SoundCue;

/// Locations of the asset files below an asset directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub food_texture: PathBuf,
    pub eat_sound: PathBuf,
    pub wall_sound: PathBuf,
}

impl AssetPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            food_texture: dir.join("graphics").join("food.png"),
            eat_sound: dir.join("sounds").join("eat.wav"),
            wall_sound: dir.join("sounds").join("wall.wav"),
        }
    }
}

pub struct Assets {
    food_texture: Option<Texture2D>,
    eat_sound: Option<Sound>,
    wall_sound: Option<Sound>,
}

impl Assets {
    pub async fn load(paths: &AssetPaths) -> Self {
        Self {
            food_texture: load_food_texture(&paths.food_texture).await,
            eat_sound: load_cue(&paths.eat_sound).await,
            wall_sound: load_cue(&paths.wall_sound).await,
        }
    }

    pub fn food_texture(&self) -> Option<&Texture2D> {
        self.food_texture.as_ref()
    }

    pub fn play(&self, cue: SoundCue) {
        let sound = match cue {
            SoundCue::Eat => &self.eat_sound,
            SoundCue::Wall => &self.wall_sound,
        };
        if let Some(sound) = sound {
            play_sound_once(sound);
        }
    }
}

impl Drop for Assets {
    fn drop(&mut self) {
        debug!("releasing textures and sounds");
    }
}

async fn load_food_texture(path: &Path) -> Option<Texture2D> {
    match load_texture(&path.to_string_lossy()).await {
        Ok(texture) => {
            texture.set_filter(FilterMode::Nearest);
            debug!("loaded texture {}", path.display());
            Some(texture)
        }
        Err(err) => {
            warn!(
                "could not load texture {}: {err}; drawing food as a dot",
                path.display()
            );
            None
        }
    }
}

async fn load_cue(path: &Path) -> Option<Sound> {
    match load_sound(&path.to_string_lossy()).await {
        Ok(sound) => {
            debug!("loaded sound {}", path.display());
            Some(sound)
        }
        Err(err) => {
            warn!("could not load sound {}: {err}; playing nothing", path.display());
            None
        }
    }
}
