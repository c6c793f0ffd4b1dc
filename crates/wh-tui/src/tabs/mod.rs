//! Tab definitions, trait, and tab bar rendering.

pub mod states;
pub mod wallet;
pub mod xp;

use ratatui::prelude::*;

/// Identifies which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    /// Wallet and currency operations.
    Wallet,
    /// Advance costs and XP tally.
    Experience,
    /// Conditions catalogue.
    States,
}

impl TabId {
    /// All tab IDs in display order.
    pub const ALL: [TabId; 3] = [TabId::Wallet, TabId::Experience, TabId::States];

    /// Parse a tab name from a string.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.to_lowercase().as_str() {
            "wallet" | "purse" => Some(TabId::Wallet),
            "xp" | "experience" => Some(TabId::Experience),
            "states" | "conditions" => Some(TabId::States),
            _ => None,
        }
    }

    /// Index of this tab in the tab bar.
    pub fn index(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Get the next tab (wrapping).
    pub fn next(self) -> TabId {
        TabId::ALL[(self.index() + 1) % TabId::ALL.len()]
    }

    /// Get the previous tab (wrapping).
    pub fn prev(self) -> TabId {
        TabId::ALL[(self.index() + TabId::ALL.len() - 1) % TabId::ALL.len()]
    }

    fn title(self) -> &'static str {
        match self {
            TabId::Wallet => "[1]Wallet",
            TabId::Experience => "[2]Experience",
            TabId::States => "[3]States",
        }
    }
}

/// Whether a tab consumes keyboard input or uses vim-like navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Vim-like navigation. Top-level handles tab switching, `q` and `?`.
    VimNav,
    /// Text input: most keys go to the tab.
    TextInput,
}

/// Trait that each tab screen implements.
pub trait Tab {
    /// Return the input mode for event routing.
    fn input_mode(&self) -> InputMode;

    /// Handle a key event. Return `true` if the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool;

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: TabId, area: Rect) {
    let mut spans = Vec::new();

    for (i, tab) in TabId::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *tab == active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tab.title(), style));
    }

    let paragraph = ratatui::widgets::Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}
