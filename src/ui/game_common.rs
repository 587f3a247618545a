//! Layout and chrome shared by the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the info panel on roomy terminals.
pub const INFO_PANEL_WIDTH: u16 = 22;

/// Layout areas returned by `game_layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Play field - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, absent on compact terminals
    pub info_panel: Option<Rect>,
}

/// Split the screen into play field, status bar and optional info panel.
///
/// Pure so the main loop can size the simulation before drawing.
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [play field]                  │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn game_layout(area: Rect, with_info_panel: bool) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let (left, info_panel) = if with_info_panel {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
            .split(inner);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (inner, None)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(left);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel,
    }
}

/// Clear the area and draw the titled outer border.
pub fn render_outer_frame(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - A 2-line area at the bottom of the game panel
/// * `status_text` - The status message to display (line 1)
/// * `status_color` - Color for the status message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Space]", "Flap"), ("[Esc]", "Quit")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render an info panel frame with standard " Info " title and DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Draw a bordered message box centred in `area` without clearing what is
/// around it, so the play field stays visible behind.
pub fn render_message_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    title_color: Color,
    lines: &[String],
) {
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let width = (content_width + 6).min(area.width);
    let height = (lines.len() as u16 + 4).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let box_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(box_area);
    frame.render_widget(block, box_area);

    let mut text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    text.extend(
        lines
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::White)))),
    );

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_info_panel() {
        let layout = game_layout(Rect::new(0, 0, 100, 30), true);
        let info = layout.info_panel.unwrap();
        assert_eq!(info.width, INFO_PANEL_WIDTH);
        assert_eq!(layout.content.width, 98 - INFO_PANEL_WIDTH);
        assert_eq!(layout.status_bar.height, 2);
        assert_eq!(layout.content.height, 26);
        assert_eq!(layout.content.x, 1);
        assert_eq!(layout.content.y, 1);
    }

    #[test]
    fn test_compact_layout_uses_full_width() {
        let layout = game_layout(Rect::new(0, 0, 50, 16), false);
        assert!(layout.info_panel.is_none());
        assert_eq!(layout.content.width, 48);
        assert_eq!(layout.content.height, 12);
    }
}
