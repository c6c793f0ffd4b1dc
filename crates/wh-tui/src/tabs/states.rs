//! States tab: searchable, sortable conditions catalogue with a detail view.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use wh_reference::states::{self, Condition, SortMode};

use super::{InputMode, Tab};

/// States tab state.
pub struct StatesTab {
    query: String,
    searching: bool,
    sort: SortMode,
    visible: Vec<&'static Condition>,
    cursor: usize,
    detail: Option<&'static Condition>,
}

impl Default for StatesTab {
    fn default() -> Self {
        Self::new()
    }
}

impl StatesTab {
    /// The full catalogue, sorted by name.
    pub fn new() -> Self {
        let mut tab = Self {
            query: String::new(),
            searching: false,
            sort: SortMode::default(),
            visible: Vec::new(),
            cursor: 0,
            detail: None,
        };
        tab.refresh();
        tab
    }

    /// Entries currently listed.
    pub fn visible(&self) -> &[&'static Condition] {
        &self.visible
    }

    /// Current sort.
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// The entry open in the detail view.
    pub fn detail(&self) -> Option<&'static Condition> {
        self.detail
    }

    fn refresh(&mut self) {
        self.visible = states::search(&self.query, self.sort);
        if self.cursor >= self.visible.len() {
            self.cursor = self.visible.len().saturating_sub(1);
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.searching = false;
                self.query.clear();
                self.refresh();
            }
            KeyCode::Enter => self.searching = false,
            KeyCode::Backspace => {
                self.query.pop();
                self.cursor = 0;
                self.refresh();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.cursor = 0;
                self.refresh();
            }
            _ => {}
        }
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, condition: &Condition) {
        let lines = vec![
            Line::from(vec![
                Span::styled(condition.name, Style::default().fg(Color::White).bold()),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", condition.tag),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            Line::from(""),
            Line::from(condition.text),
        ];
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        frame.render_widget(paragraph, area);
    }
}

impl Tab for StatesTab {
    fn input_mode(&self) -> InputMode {
        if self.searching {
            InputMode::TextInput
        } else {
            InputMode::VimNav
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.searching {
            self.handle_search_key(key);
            return false;
        }
        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter) {
                self.detail = None;
            }
            return false;
        }
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if self.cursor + 1 < self.visible.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Char('g') => self.cursor = 0,
            KeyCode::Char('G') => self.cursor = self.visible.len().saturating_sub(1),
            KeyCode::Char('/') => {
                self.searching = true;
                self.query.clear();
                self.refresh();
            }
            KeyCode::Char('s') => {
                self.sort = self.sort.next();
                self.refresh();
            }
            KeyCode::Enter => self.detail = self.visible.get(self.cursor).copied(),
            KeyCode::Esc => {
                self.query.clear();
                self.refresh();
            }
            _ => {}
        }
        false
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        if let Some(condition) = self.detail {
            self.draw_detail(frame, area, condition);
            return;
        }

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|c| {
                ListItem::new(Line::from(vec![
                    Span::styled(c.name, Style::default().fg(Color::White).bold()),
                    Span::raw("  "),
                    Span::styled(c.tag, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let mut title = format!(
            " States ({}, sort: {}) ",
            states::visible_count(self.visible.len()),
            self.sort
        );
        if !self.query.is_empty() || self.searching {
            title = format!("{title}filter: \"{}\" ", self.query);
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White).bold())
            .highlight_symbol("\u{25b6} ");

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn status_hint(&self) -> &str {
        if self.searching {
            "type to filter  Enter:keep  Esc:clear"
        } else if self.detail.is_some() {
            "Esc:back  Tab:view  ?:help  q:quit"
        } else {
            "j/k:navigate  Enter:details  /:search  s:sort  Tab:view  ?:help  q:quit"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use wh_reference::CATALOGUE;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn search_filters_list() {
        let mut tab = StatesTab::new();
        assert_eq!(tab.visible().len(), CATALOGUE.len());
        tab.handle_key(key(KeyCode::Char('/')));
        assert_eq!(tab.input_mode(), InputMode::TextInput);
        for c in "blind".chars() {
            tab.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(tab.visible().len(), 1);
        tab.handle_key(key(KeyCode::Enter));
        assert_eq!(tab.input_mode(), InputMode::VimNav);
        assert_eq!(tab.visible()[0].name, "Blinded");
    }

    #[test]
    fn escape_while_searching_clears() {
        let mut tab = StatesTab::new();
        tab.handle_key(key(KeyCode::Char('/')));
        tab.handle_key(key(KeyCode::Char('z')));
        tab.handle_key(key(KeyCode::Esc));
        assert_eq!(tab.visible().len(), CATALOGUE.len());
    }

    #[test]
    fn new_search_starts_from_full_list() {
        let mut tab = StatesTab::new();
        tab.handle_key(key(KeyCode::Char('/')));
        for c in "blind".chars() {
            tab.handle_key(key(KeyCode::Char(c)));
        }
        tab.handle_key(key(KeyCode::Enter));
        assert_eq!(tab.visible().len(), 1);

        tab.handle_key(key(KeyCode::Char('/')));
        assert_eq!(tab.visible().len(), CATALOGUE.len());
    }

    #[test]
    fn sort_cycles() {
        let mut tab = StatesTab::new();
        tab.handle_key(key(KeyCode::Char('s')));
        assert_eq!(tab.sort(), SortMode::NameDesc);
        assert_eq!(tab.visible()[0].name, "Unconscious");
    }

    #[test]
    fn detail_view() {
        let mut tab = StatesTab::new();
        tab.handle_key(key(KeyCode::Char('j')));
        tab.handle_key(key(KeyCode::Enter));
        assert_eq!(tab.detail().map(|c| c.name), Some("Animosity (Target)"));
        tab.handle_key(key(KeyCode::Esc));
        assert!(tab.detail().is_none());
    }
}
