//! Screen geometry and colours of the board, independent of any graphics backend.

use crate::game::{Cell, GameConfig};

/// An 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Background colour
pub const GREEN: Rgba = Rgba::opaque(173, 204, 96);
/// Snake, border and text colour
pub const DARK_GREEN: Rgba = Rgba::opaque(43, 51, 24);

/// Size of the title, score and high score text
pub const FONT_SIZE: f32 = 40.0;
/// How round a snake segment is, from 0 (square) to 1 (pill)
pub const SEGMENT_ROUNDNESS: f32 = 0.5;
/// Thickness of the board border
pub const BORDER_THICKNESS: f32 = 5.0;

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Top-left anchor of a line of text, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextAnchor {
    pub x: f32,
    pub y: f32,
}

/// Where everything goes in the window
#[derive(Debug, Clone)]
pub struct ScreenLayout {
    cell_size: f32,
    padding: f32,
    board_size: f32,
}

impl ScreenLayout {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            padding: config.padding,
            board_size: config.board_size(),
        }
    }

    /// Pixel rectangle covered by a grid cell
    pub fn cell_rect(&self, cell: Cell) -> PixelRect {
        PixelRect {
            x: self.padding + cell.x as f32 * self.cell_size,
            y: self.padding + cell.y as f32 * self.cell_size,
            w: self.cell_size,
            h: self.cell_size,
        }
    }

    /// Border drawn just outside the board
    pub fn border(&self) -> PixelRect {
        let inset = BORDER_THICKNESS;
        PixelRect {
            x: self.padding - inset,
            y: self.padding - inset,
            w: self.board_size + 2.0 * inset,
            h: self.board_size + 2.0 * inset,
        }
    }

    pub fn title_anchor(&self) -> TextAnchor {
        TextAnchor {
            x: self.padding - BORDER_THICKNESS,
            y: 20.0,
        }
    }

    pub fn score_anchor(&self) -> TextAnchor {
        TextAnchor {
            x: self.padding - BORDER_THICKNESS,
            y: self.padding + self.board_size + 10.0,
        }
    }

    pub fn high_score_anchor(&self) -> TextAnchor {
        TextAnchor {
            x: self.padding - BORDER_THICKNESS + self.board_size / 2.0,
            y: self.padding + self.board_size + 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(&GameConfig::default())
    }

    #[test]
    fn test_cell_rect() {
        let layout = layout();

        assert_eq!(
            layout.cell_rect(Cell::new(0, 0)),
            PixelRect {
                x: 75.0,
                y: 75.0,
                w: 30.0,
                h: 30.0
            }
        );

        let corner = layout.cell_rect(Cell::new(24, 24));
        assert_eq!((corner.x, corner.y), (795.0, 795.0));
        assert_eq!(corner.x + corner.w, 825.0);
    }

    #[test]
    fn test_border_surrounds_board() {
        let border = layout().border();

        assert_eq!(
            border,
            PixelRect {
                x: 70.0,
                y: 70.0,
                w: 760.0,
                h: 760.0
            }
        );
    }

    #[test]
    fn test_text_anchors() {
        let layout = layout();

        assert_eq!(layout.title_anchor(), TextAnchor { x: 70.0, y: 20.0 });
        assert_eq!(layout.score_anchor(), TextAnchor { x: 70.0, y: 835.0 });
        assert_eq!(
            layout.high_score_anchor(),
            TextAnchor { x: 445.0, y: 835.0 }
        );
    }
}
