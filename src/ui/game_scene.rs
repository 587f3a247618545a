//! Draws a `FrameSnapshot` into the terminal.

use super::game_common::{
    game_layout, render_info_panel_frame, render_message_box, render_outer_frame,
    render_status_bar,
};
use super::responsive::{render_too_small, SizeTier};
use crate::game::{FrameSnapshot, Phase};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONTROLS: &[(&str, &str)] = &[("[Space/Click]", "Flap"), ("[q/Esc]", "Quit")];

/// Play-field area for a terminal of the given size, or `None` when it is too small.
pub fn play_area(area: Rect) -> Option<Rect> {
    match SizeTier::from_area(area) {
        SizeTier::TooSmall => None,
        tier => Some(game_layout(area, tier == SizeTier::Full).content),
    }
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, snapshot: &FrameSnapshot) {
    let area = frame.size();
    let tier = SizeTier::from_area(area);
    if tier == SizeTier::TooSmall {
        render_too_small(frame, area);
        return;
    }

    let border = match snapshot.phase {
        Phase::Start => Color::Cyan,
        Phase::Play => Color::Green,
        Phase::End => Color::Red,
    };
    render_outer_frame(frame, area, " Flappy ", border);

    let layout = game_layout(area, tier == SizeTier::Full);
    render_play_field(frame, layout.content, snapshot);
    render_status(frame, layout.status_bar, snapshot);
    if let Some(info) = layout.info_panel {
        render_info_panel(frame, info, snapshot);
    }

    match snapshot.phase {
        Phase::Start => render_message_box(
            frame,
            layout.content,
            "FLAPPY",
            Color::Yellow,
            &[snapshot.message.clone()],
        ),
        Phase::End => render_message_box(
            frame,
            layout.content,
            "GAME OVER",
            Color::Red,
            &[
                format!("You passed {} obstacles.", snapshot.score),
                snapshot.message.clone(),
            ],
        ),
        Phase::Play => {}
    }
}

/// Glyph for the front of the sprite, tilted with its rotation.
fn head_glyph(rotation_deg: f64) -> &'static str {
    if rotation_deg < -10.0 {
        "▲"
    } else if rotation_deg > 20.0 {
        "▼"
    } else {
        "►"
    }
}

/// Rasterise the play field: each cell shows whatever covers its centre.
fn render_play_field(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let px_per_col = snapshot.viewport.width / area.width as f64;
    let px_per_row = snapshot.viewport.height / area.height as f64;
    let player = snapshot.player;

    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let barrier_style = Style::default().fg(Color::Green);

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let cy = (row as f64 + 0.5) * px_per_row;
        let mut spans = Vec::with_capacity(area.width as usize);

        for col in 0..area.width {
            let cx = (col as f64 + 0.5) * px_per_col;

            if snapshot.player_visible && player.contains(cx, cy) {
                let glyph = if player.contains(cx + px_per_col, cy) {
                    "■"
                } else {
                    head_glyph(snapshot.rotation_deg)
                };
                spans.push(Span::styled(glyph, bird_style));
                continue;
            }

            let is_barrier = snapshot
                .obstacles
                .iter()
                .any(|(top, bottom)| top.contains(cx, cy) || bottom.contains(cx, cy));
            if is_barrier {
                spans.push(Span::styled("█", barrier_style));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    let (text, color) = match snapshot.phase {
        Phase::Start => (snapshot.message.as_str(), Color::Yellow),
        Phase::Play => (snapshot.score_text.as_str(), Color::Green),
        Phase::End => (snapshot.score_text.as_str(), Color::Red),
    };
    render_status_bar(frame, area, text, color, CONTROLS);
}

fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &FrameSnapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let phase = match snapshot.phase {
        Phase::Start => "Ready",
        Phase::Play => "Flying",
        Phase::End => "Crashed",
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" State: ", Style::default().fg(Color::DarkGray)),
            Span::styled(phase, Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                snapshot.obstacles.len().to_string(),
                Style::default().fg(Color::Green),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentAudio;
    use crate::core::Viewport;
    use crate::game::{Session, Tuning};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(snapshot: &FrameSnapshot, cols: u16, rows: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|f| render_game(f, snapshot)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn session_for(cols: u16, rows: u16) -> Session {
        let area = play_area(Rect::new(0, 0, cols, rows)).unwrap();
        let viewport = Viewport::from_cells(area.width, area.height, 8.0, 16.0);
        Session::new(Tuning::default(), viewport, Box::new(SilentAudio))
    }

    #[test]
    fn test_start_screen_shows_prompt() {
        let session = session_for(80, 24);
        let screen = draw(&session.snapshot(), 80, 24);
        assert!(screen.contains("Press Space or Tap to Start"));
        assert!(screen.contains("FLAPPY"));
        assert!(!screen.contains("►"));
    }

    #[test]
    fn test_play_screen_shows_score_and_sprite() {
        let mut session = session_for(80, 24);
        session.start();
        let screen = draw(&session.snapshot(), 80, 24);
        assert!(screen.contains("Score: 0"));
        assert!(screen.contains("►"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut session = session_for(80, 24);
        session.start();
        session.end(crate::game::EndCause::Floor);
        let screen = draw(&session.snapshot(), 80, 24);
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("You passed 0 obstacles."));
    }

    #[test]
    fn test_barriers_are_drawn() {
        let mut session = session_for(80, 24);
        session.start();
        session.state_mut().obstacles.push(crate::game::Obstacle {
            x: 400.0,
            width: 60.0,
            barrier_height: 300.0,
            gap_top: 100.0,
            gap_height: 120.0,
            scored: false,
        });
        let screen = draw(&session.snapshot(), 80, 24);
        assert!(screen.contains("█"));
    }

    #[test]
    fn test_tiny_terminal_shows_warning() {
        let session = session_for(80, 24);
        let screen = draw(&session.snapshot(), 30, 10);
        assert!(screen.contains("Terminal too small"));
        assert!(play_area(Rect::new(0, 0, 30, 10)).is_none());
    }

    #[test]
    fn test_head_glyph_follows_rotation() {
        assert_eq!(head_glyph(-16.5), "▲");
        assert_eq!(head_glyph(0.0), "►");
        assert_eq!(head_glyph(60.0), "▼");
    }
}
