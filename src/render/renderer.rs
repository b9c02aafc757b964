use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::layout::{DARK_GREEN, GREEN, Rgba};
use crate::game::{Cell, Game, is_occupied};

fn color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}

/// Draws the game as a grid of glyphs in the terminal
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &Game) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], game);
        frame.render_widget(stats, chunks[0]);

        let grid = self.render_grid(chunks[1], game);
        frame.render_widget(grid, chunks[1]);

        let controls = self.render_controls(chunks[2], game);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, game: &Game) -> Paragraph<'_> {
        let count = game.config().grid_count;
        let board = Style::default().bg(color(GREEN));
        let snake = game.snake();
        let mut lines = Vec::new();

        for y in 0..count {
            let mut spans = Vec::new();

            for x in 0..count {
                let cell = Cell::new(x, y);

                let span = if cell == snake.head() {
                    Span::styled(
                        "■ ",
                        board.fg(color(DARK_GREEN)).add_modifier(Modifier::BOLD),
                    )
                } else if is_occupied(snake.segments(), cell) {
                    Span::styled("□ ", board.fg(color(DARK_GREEN)))
                } else if cell == game.food().position() {
                    Span::styled("● ", board.fg(Color::Red).add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("  ", board)
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(color(DARK_GREEN)))
                    .title(format!(" {} ", game.config().title)),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, game: &Game) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.high_score().to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect, game: &Game) -> Paragraph<'_> {
        let mut spans = Vec::new();
        if !game.is_running() {
            spans.push(Span::styled(
                "Press a direction to play | ",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        }
        spans.extend([
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(game: &Game) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let renderer = Renderer::new();
        terminal
            .draw(|frame| renderer.render(frame, game))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_scores_and_title() {
        let game = Game::with_seed(GameConfig::default(), 5);
        let text = screen_text(&game);

        assert!(text.contains("Score: 0"));
        assert!(text.contains("High Score: 0"));
        assert!(text.contains("Snake's Greedy Hunt"));
        assert!(!text.contains("Press a direction"));
    }

    #[test]
    fn test_renders_snake_and_food() {
        let game = Game::with_seed(GameConfig::default(), 5);
        let text = screen_text(&game);

        assert_eq!(text.matches('■').count(), 1);
        assert_eq!(text.matches('□').count(), 2);
        assert_eq!(text.matches('●').count(), 1);
    }
}
