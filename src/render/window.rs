use macroquad::prelude::*;

use super::layout::{
    BORDER_THICKNESS, DARK_GREEN, FONT_SIZE, GREEN, PixelRect, Rgba, SEGMENT_ROUNDNESS,
    ScreenLayout, TextAnchor,
};
use crate::game::Game;

fn color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Draws the game into the macroquad window
pub struct WindowRenderer {
    layout: ScreenLayout,
}

impl WindowRenderer {
    pub fn new(layout: ScreenLayout) -> Self {
        Self { layout }
    }

    /// Draw one frame. Without a food texture the food is drawn as a dot.
    pub fn render(&self, game: &Game, food_texture: Option<&Texture2D>) {
        clear_background(color(GREEN));

        let border = self.layout.border();
        draw_rectangle_lines(
            border.x,
            border.y,
            border.w,
            border.h,
            BORDER_THICKNESS,
            color(DARK_GREEN),
        );

        draw_text_top_left(&game.config().title, self.layout.title_anchor());
        draw_text_top_left(&game.score().to_string(), self.layout.score_anchor());
        draw_text_top_left(
            &format!("High Score: {}", game.high_score()),
            self.layout.high_score_anchor(),
        );

        self.render_food(game, food_texture);
        self.render_snake(game);
    }

    fn render_food(&self, game: &Game, texture: Option<&Texture2D>) {
        let rect = self.layout.cell_rect(game.food().position());

        match texture {
            Some(texture) => draw_texture_ex(
                texture,
                rect.x,
                rect.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(rect.w, rect.h)),
                    ..Default::default()
                },
            ),
            None => draw_circle(
                rect.x + rect.w / 2.0,
                rect.y + rect.h / 2.0,
                rect.w / 3.0,
                color(DARK_GREEN),
            ),
        }
    }

    fn render_snake(&self, game: &Game) {
        for cell in game.snake().body() {
            draw_rounded_rect(
                self.layout.cell_rect(*cell),
                SEGMENT_ROUNDNESS,
                color(DARK_GREEN),
            );
        }
    }
}

/// macroquad anchors text on its baseline; shift it so `anchor` is the top-left corner.
fn draw_text_top_left(text: &str, anchor: TextAnchor) {
    let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(text, anchor.x, anchor.y + dims.offset_y, FONT_SIZE, color(DARK_GREEN));
}

fn draw_rounded_rect(rect: PixelRect, roundness: f32, color: Color) {
    let radius = roundness * rect.w.min(rect.h) / 2.0;

    draw_rectangle(rect.x + radius, rect.y, rect.w - 2.0 * radius, rect.h, color);
    draw_rectangle(rect.x, rect.y + radius, rect.w, rect.h - 2.0 * radius, color);

    for (cx, cy) in [
        (rect.x + radius, rect.y + radius),
        (rect.x + rect.w - radius, rect.y + radius),
        (rect.x + radius, rect.y + rect.h - radius),
        (rect.x + rect.w - radius, rect.y + rect.h - radius),
    ] {
        draw_circle(cx, cy, radius, color);
    }
}
