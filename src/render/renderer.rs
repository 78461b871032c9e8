use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph,
        canvas::{Canvas, Points, Rectangle},
    },
};

use crate::game::{GameSession, GameStatus, Position, SceneView};
use crate::metrics::GameMetrics;

/// Side of a drawn segment, in tiles
const SEGMENT_SIZE: f64 = 0.8;
/// Sampling step used to fill segment squares
const FILL_STEP: f64 = 0.1;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &GameSession, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(session, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game area horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let scene = session.scene();
        let half_extent = view_half_extent(&scene);
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .marker(Marker::HalfBlock)
            .x_bounds([-half_extent, half_extent])
            .y_bounds([-half_extent, half_extent])
            .paint(|ctx| {
                let scale = scene.scale as f64;

                for tile in scene.tiles {
                    ctx.draw(&Rectangle {
                        x: (tile.x as f64 - 0.5) * scale,
                        y: (tile.y as f64 - 0.5) * scale,
                        width: scale,
                        height: scale,
                        color: Color::DarkGray,
                    });
                }

                let food = square_points(scene.food, scale);
                ctx.draw(&Points {
                    coords: &food,
                    color: Color::Red,
                });

                // Tail first so the head is drawn on top
                for (i, segment) in scene.segments.iter().enumerate().rev() {
                    let color = if i == 0 { Color::Cyan } else { Color::Green };
                    let coords = square_points(segment.position, scale);
                    ctx.draw(&Points {
                        coords: &coords,
                        color,
                    });
                }
            });
        frame.render_widget(canvas, game_area);

        if session.status() != GameStatus::Running {
            let popup = centered_rect(50, 40, game_area);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(session, metrics), popup);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_stats(&self, session: &GameSession, metrics: &GameMetrics) -> Paragraph<'_> {
        let state = session.state();
        let text = vec![Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.len().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Food: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.food_eaten.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Moves: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.moves.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, session: &GameSession, metrics: &GameMetrics) -> Paragraph<'_> {
        let headline = match session.status() {
            GameStatus::BoardFull => Span::styled(
                "BOARD FULL",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            _ => Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![headline]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Length: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.state().snake.len().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.best_length.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Half the canvas width in scene units. Covers the board and any segment
/// that wandered off it, since the board edge is cosmetic.
fn view_half_extent(scene: &SceneView<'_>) -> f64 {
    let board = scene
        .tiles
        .iter()
        .map(|t| t.x.abs().max(t.y.abs()))
        .fold(0.0f32, f32::max);
    let farthest = scene
        .segments
        .iter()
        .map(|s| s.position.x.abs().max(s.position.y.abs()))
        .chain(std::iter::once(scene.food.x.abs().max(scene.food.y.abs())))
        .fold(board, f32::max);

    (farthest as f64 + 1.0) * scene.scale as f64
}

/// Points filling a segment-sized square around `center`, in scaled units
fn square_points(center: Position, scale: f64) -> Vec<(f64, f64)> {
    let steps = (SEGMENT_SIZE / FILL_STEP).round() as usize;
    let origin_x = center.x as f64 - SEGMENT_SIZE / 2.0;
    let origin_y = center.y as f64 - SEGMENT_SIZE / 2.0;

    (0..=steps)
        .flat_map(|i| {
            (0..=steps).map(move |j| {
                (
                    (origin_x + i as f64 * FILL_STEP) * scale,
                    (origin_y + j as f64 * FILL_STEP) * scale,
                )
            })
        })
        .collect()
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
