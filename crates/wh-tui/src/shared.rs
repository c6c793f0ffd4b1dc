//! Shared utilities for tabs: layout helpers, notices, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Green.
    Ok,
    /// Red.
    Bad,
}

/// A short status message shown in a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Success or failure.
    pub kind: NoticeKind,
    /// Bold first line.
    pub title: String,
    /// Further lines.
    pub lines: Vec<String>,
}

impl Notice {
    /// A success notice.
    pub fn ok(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Ok,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// A failure notice.
    pub fn bad(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Bad,
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// Append a line.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Render as a bordered paragraph.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let color = match self.kind {
            NoticeKind::Ok => Color::Green,
            NoticeKind::Bad => Color::Red,
        };
        let mut text = vec![Line::from(Span::styled(
            self.title.clone(),
            Style::default().fg(color).bold(),
        ))];
        text.extend(
            self.lines
                .iter()
                .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(Color::White)))),
        );
        let paragraph = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        frame.render_widget(paragraph, area);
    }
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the global help popup.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Everywhere:"),
        Line::from("  F1 / F2 / F3  Wallet / Experience / States"),
        Line::from("  Ctrl+1..3     Same, where the terminal sends it"),
        Line::from("  F10 / ?       Toggle this help"),
        Line::from("  Ctrl+C        Quit"),
        Line::from(""),
        Line::from("Wallet:"),
        Line::from("  0-9 .         Type into the focused field"),
        Line::from("  Tab / \u{2191}\u{2193}     Move between fields"),
        Line::from("  + / -         Add / Spend mode"),
        Line::from("  Enter         Apply the change"),
        Line::from("  x             Clear the change"),
        Line::from("  o             Settings (save, reset, import, export)"),
        Line::from(""),
        Line::from("Experience:"),
        Line::from("  j / k         Select cost band"),
        Line::from("  h / l         Select chip, Enter adds it"),
        Line::from("  c             Type a custom delta"),
        Line::from("  r             Reset tally"),
        Line::from(""),
        Line::from("States:"),
        Line::from("  /             Search     s  Cycle sort"),
        Line::from("  Enter         Details    Esc  Back"),
        Line::from(""),
        Line::from("  q             Quit (outside text fields)"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 20);
        assert_eq!((inner.x, inner.y), (25, 10));
    }

    #[test]
    fn notice_builder() {
        let n = Notice::bad("Nope").line("first").line("second");
        assert_eq!(n.kind, NoticeKind::Bad);
        assert_eq!(n.lines, vec!["first", "second"]);
    }
}
