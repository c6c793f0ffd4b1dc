//! Experience tab: advance cost table and the session XP tally.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use wh_reference::xp::{self, AdvanceKind};
use wh_reference::tally::parse_delta;
use wh_reference::{CHIPS, Tally};

use super::{InputMode, Tab};

/// Experience tab state.
pub struct ExperienceTab {
    /// Selected row of the cost table.
    cursor: usize,
    /// Selected chip.
    chip: usize,
    tally: Tally,
    /// Custom delta being typed, if any.
    entry: Option<String>,
}

impl Default for ExperienceTab {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceTab {
    /// A fresh tab with the tally at zero.
    pub fn new() -> Self {
        Self {
            cursor: 0,
            // first positive chip
            chip: CHIPS.iter().position(|c| *c > 0).unwrap_or(0),
            tally: Tally::new(),
            entry: None,
        }
    }

    /// Current tally value.
    pub fn tally(&self) -> i64 {
        self.tally.value()
    }

    /// Selected chip delta.
    pub fn chip(&self) -> i64 {
        CHIPS[self.chip]
    }

    /// Selected cost band.
    pub fn selected_band(&self) -> &'static xp::CostBand {
        &xp::bands()[self.cursor]
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.entry = None,
            KeyCode::Enter => {
                self.tally.add(parse_delta(entry));
                self.entry = None;
            }
            KeyCode::Backspace => {
                entry.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                entry.push(c);
            }
            _ => {}
        }
    }
}

impl Tab for ExperienceTab {
    fn input_mode(&self) -> InputMode {
        if self.entry.is_some() {
            InputMode::TextInput
        } else {
            InputMode::VimNav
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.entry.is_some() {
            self.handle_entry_key(key);
            return false;
        }
        let rows = xp::bands().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.cursor + 1 < rows {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => self.cursor = rows - 1,
            KeyCode::Char('h') | KeyCode::Left => self.chip = self.chip.saturating_sub(1),
            KeyCode::Char('l') | KeyCode::Right => {
                if self.chip + 1 < CHIPS.len() {
                    self.chip += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.tally.add(CHIPS[self.chip]);
            }
            KeyCode::Char('r') => self.tally.reset(),
            KeyCode::Char('c') => self.entry = Some(String::new()),
            _ => {}
        }
        false
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let header = Row::new(vec!["Advances", "Characteristic", "Skill"])
            .style(Style::default().fg(Color::Yellow).bold());
        let rows: Vec<Row> = xp::bands()
            .iter()
            .map(|b| {
                Row::new(vec![
                    Cell::from(b.label),
                    Cell::from(b.characteristic.to_string()),
                    Cell::from(b.skill.to_string()),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(15),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(" Advance costs (XP) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
        .highlight_symbol("\u{25b6} ");
        let mut state = TableState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(table, chunks[0], &mut state);

        let band = self.selected_band();
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(
                format!("Band {}", band.label),
                Style::default().fg(Color::White).bold(),
            )),
            Line::from(format!(
                "  next {}: {} XP",
                AdvanceKind::Characteristic,
                band.cost(AdvanceKind::Characteristic)
            )),
            Line::from(format!(
                "  next {}: {} XP",
                AdvanceKind::Skill,
                band.cost(AdvanceKind::Skill)
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Tally: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.tally.value().to_string(),
                    Style::default().fg(Color::Green).bold(),
                ),
            ]),
            Line::from(""),
        ];
        let chip_spans: Vec<Span<'static>> = CHIPS
            .iter()
            .enumerate()
            .flat_map(|(i, delta)| {
                let style = if i == self.chip {
                    Style::default().fg(Color::Black).bg(Color::Yellow).bold()
                } else {
                    Style::default().fg(Color::White)
                };
                vec![Span::styled(format!(" {delta:+} "), style), Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(chip_spans));
        if let Some(entry) = &self.entry {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Custom: ", Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{entry}_"), Style::default().fg(Color::Yellow)),
            ]));
        }

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title(" XP tally ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(panel, chunks[1]);
    }

    fn status_hint(&self) -> &str {
        if self.entry.is_some() {
            return "type a delta  Enter:add  Esc:cancel";
        }
        "j/k:band  h/l:chip  Enter/Space:add chip  c:custom  r:reset  Tab:view  ?:help  q:quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn chips_add_to_tally() {
        let mut tab = ExperienceTab::new();
        assert_eq!(tab.chip(), 1);
        tab.handle_key(key(KeyCode::Enter));
        tab.handle_key(key(KeyCode::Char('l')));
        tab.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(tab.tally(), 6);
        tab.handle_key(key(KeyCode::Char('r')));
        assert_eq!(tab.tally(), 0);
    }

    #[test]
    fn negative_chip() {
        let mut tab = ExperienceTab::new();
        tab.handle_key(key(KeyCode::Char('h')));
        assert_eq!(tab.chip(), -1);
        tab.handle_key(key(KeyCode::Enter));
        assert_eq!(tab.tally(), -1);
    }

    #[test]
    fn custom_delta() {
        let mut tab = ExperienceTab::new();
        tab.handle_key(key(KeyCode::Char('c')));
        assert_eq!(tab.input_mode(), InputMode::TextInput);
        for c in "-12.7".chars() {
            tab.handle_key(key(KeyCode::Char(c)));
        }
        tab.handle_key(key(KeyCode::Enter));
        assert_eq!(tab.tally(), -12);
        assert_eq!(tab.input_mode(), InputMode::VimNav);
    }

    #[test]
    fn band_cursor_is_bounded() {
        let mut tab = ExperienceTab::new();
        tab.handle_key(key(KeyCode::Char('k')));
        assert_eq!(tab.selected_band().label, "0 to 5");
        tab.handle_key(key(KeyCode::Char('G')));
        tab.handle_key(key(KeyCode::Char('j')));
        assert_eq!(tab.selected_band().label, "71+");
    }
}
