//! Terminal size classification.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// How much room the terminal gives us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeTier {
    TooSmall,
    /// Play area only, no info panel.
    Compact, // 40x14+
    Full,    // 70x20+
}

const FULL_MIN_COLS: u16 = 70;
const FULL_MIN_ROWS: u16 = 20;
const COMPACT_MIN_COLS: u16 = 40;
const COMPACT_MIN_ROWS: u16 = 14;

impl SizeTier {
    pub fn classify(cols: u16, rows: u16) -> Self {
        if cols >= FULL_MIN_COLS && rows >= FULL_MIN_ROWS {
            SizeTier::Full
        } else if cols >= COMPACT_MIN_COLS && rows >= COMPACT_MIN_ROWS {
            SizeTier::Compact
        } else {
            SizeTier::TooSmall
        }
    }

    pub fn from_area(area: Rect) -> Self {
        Self::classify(area.width, area.height)
    }
}

/// Render a "terminal too small" message.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                COMPACT_MIN_COLS, COMPACT_MIN_ROWS, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_classification() {
        assert_eq!(SizeTier::classify(120, 40), SizeTier::Full);
        assert_eq!(SizeTier::classify(70, 20), SizeTier::Full);
    }

    #[test]
    fn test_compact_classification() {
        assert_eq!(SizeTier::classify(69, 40), SizeTier::Compact);
        assert_eq!(SizeTier::classify(120, 19), SizeTier::Compact);
        assert_eq!(SizeTier::classify(40, 14), SizeTier::Compact);
    }

    #[test]
    fn test_too_small() {
        assert_eq!(SizeTier::classify(39, 20), SizeTier::TooSmall);
        assert_eq!(SizeTier::classify(100, 13), SizeTier::TooSmall);
        assert_eq!(SizeTier::classify(0, 0), SizeTier::TooSmall);
    }
}
