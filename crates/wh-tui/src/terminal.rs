//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use wh_store::KeyValueStore;

use crate::app::TuiApp;
use crate::tabs::{self, InputMode, TabId};

/// Launch the TUI application.
pub fn run<S: KeyValueStore>(mut app: TuiApp<S>) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp<S>,
) -> Result<(), String> {
    loop {
        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if let Event::Key(key) = event::read().map_err(|e| format!("event error: {e}"))?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, key);
        }
    }
}

/// Route a key press: global shortcuts first, then the active tab.
pub fn handle_key<S: KeyValueStore>(app: &mut TuiApp<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Function keys and Ctrl+digit work in every mode
    if let Some(tab) = function_key_to_tab(key.code) {
        app.switch_tab(tab);
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && let Some(tab) = digit_to_tab(key.code)
    {
        app.switch_tab(tab);
        return;
    }
    if key.code == KeyCode::F(10) {
        app.show_help = !app.show_help;
        return;
    }

    match app.active_input_mode() {
        InputMode::VimNav => {
            match key.code {
                KeyCode::Char('q') => {
                    app.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    app.show_help = !app.show_help;
                    return;
                }
                KeyCode::Tab => {
                    app.switch_tab(app.active_tab.next());
                    return;
                }
                KeyCode::BackTab => {
                    app.switch_tab(app.active_tab.prev());
                    return;
                }
                _ => {}
            }
            if let Some(tab) = digit_to_tab(key.code) {
                app.switch_tab(tab);
                return;
            }
            if app.active_tab_mut().handle_key(key) {
                app.should_quit = true;
            }
        }
        InputMode::TextInput => {
            if app.show_help && matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                app.show_help = false;
                return;
            }
            if app.active_tab_mut().handle_key(key) {
                app.should_quit = true;
            }
        }
    }
}

fn function_key_to_tab(code: KeyCode) -> Option<TabId> {
    match code {
        KeyCode::F(n @ 1..=3) => TabId::ALL.get(n as usize - 1).copied(),
        _ => None,
    }
}

fn digit_to_tab(code: KeyCode) -> Option<TabId> {
    match code {
        KeyCode::Char(c @ '1'..='3') => c
            .to_digit(10)
            .and_then(|d| TabId::ALL.get(d as usize - 1).copied()),
        _ => None,
    }
}

fn draw<S: KeyValueStore>(frame: &mut Frame, app: &TuiApp<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tab_bar(frame, app.active_tab, chunks[0]);

    app.active_tab_ref().draw(frame, chunks[1]);

    let hint = app.active_tab_ref().status_hint();
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
