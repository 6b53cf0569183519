use std::collections::HashSet;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::Board;
use crate::session::{Screen, Session};

/// Draws whatever the session says is on screen. The renderer holds no game
/// data of its own; everything it shows comes out of the session each frame.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Screen body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let header = self.render_header(session);
        frame.render_widget(header, chunks[0]);

        // Center the screen body horizontally
        let body_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(5),
                Constraint::Percentage(90),
                Constraint::Percentage(5),
            ])
            .split(chunks[1])[1];

        match &session.screen {
            Screen::Welcome => {
                frame.render_widget(self.render_welcome(session), body_area);
            }
            Screen::Playing(board) => {
                frame.render_widget(self.render_field(board, false), body_area);
            }
            Screen::Paused(board) => {
                frame.render_widget(self.render_field(board, true), body_area);
            }
            Screen::GameOver(board) => {
                frame.render_widget(self.render_game_over(board, session), body_area);
            }
        }

        let footer = self.render_footer(session);
        frame.render_widget(footer, chunks[2]);
    }

    fn render_header(&self, session: &Session) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                session
                    .screen
                    .board()
                    .map(|board| board.score)
                    .unwrap_or(0)
                    .to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High-Score: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                session.high_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if !session.audio_on {
            spans.push(Span::raw("    "));
            spans.push(Span::styled("[muted]", Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_welcome(&self, session: &Session) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Welcome to Snakes!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "(Press Spacebar To Play.)",
                Style::default().fg(Color::Cyan),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("High-Score: ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    session.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_field(&self, board: &Board, paused: bool) -> Paragraph<'_> {
        let config = board.config();
        let cols = (config.width / config.cell_size).max(1);
        let rows = (config.height / config.cell_size).max(1);

        let to_cell = |x: i32, y: i32| {
            (
                (x / config.cell_size).clamp(0, cols - 1),
                (y / config.cell_size).clamp(0, rows - 1),
            )
        };

        let head = to_cell(board.head.x, board.head.y);
        let body: HashSet<(i32, i32)> = board
            .cells
            .iter()
            .map(|segment| to_cell(segment.x, segment.y))
            .collect();
        let food = to_cell(board.food.x, board.food.y);

        let mut lines = Vec::with_capacity(rows as usize);
        for y in 0..rows {
            let mut spans = Vec::with_capacity(cols as usize);
            for x in 0..cols {
                let cell = if (x, y) == head {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if body.contains(&(x, y)) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if (x, y) == food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };
                spans.push(cell);
            }
            lines.push(Line::from(spans));
        }

        let (title, border_color) = if paused {
            (" Paused (Press P To Resume.) ", Color::Red)
        } else {
            (" Snakes ", Color::White)
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(border_color))
                    .title(title),
            )
    }

    fn render_game_over(&self, board: &Board, session: &Session) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    board.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("High-Score: ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    session.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to continue or ", Style::default().fg(Color::Gray)),
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

    fn render_footer(&self, session: &Session) -> Paragraph<'_> {
        let line = if let Some(status) = &session.status {
            Line::from(vec![Span::styled(
                status.clone(),
                Style::default().fg(Color::Yellow),
            )])
        } else {
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("P", Style::default().fg(Color::Cyan)),
                Span::raw(" to pause | "),
                Span::styled("M", Style::default().fg(Color::Cyan)),
                Span::raw(" to mute | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
