//! Wallet tab: the purse, add/spend operations, and the settings modal.
//!
//! The six amount fields hold raw text exactly as typed; they are coerced
//! to [`Money`] only when read. Results and settings messages are kept as
//! [`Notice`]s until the next action replaces them.

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use wh_core::{
    Applied, EXPECTED_SHAPE, Mode, Money, Settings, WalletError, apply_operation, format_export,
    parse_import,
};
use wh_store::{KeyValueStore, Vault, read_payload, write_payload};

use super::{InputMode, Tab};
use crate::shared::{Notice, centered_rect};

/// Default file for export/import from the settings modal.
pub const DEFAULT_TRANSFER_PATH: &str = "wallet-export.json";

/// An editable amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Wallet pennies.
    WalletPennies,
    /// Wallet shillings.
    WalletShillings,
    /// Wallet crowns.
    WalletCrowns,
    /// Change pennies.
    ChangePennies,
    /// Change shillings.
    ChangeShillings,
    /// Change crowns.
    ChangeCrowns,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::WalletPennies,
        Field::WalletShillings,
        Field::WalletCrowns,
        Field::ChangePennies,
        Field::ChangeShillings,
        Field::ChangeCrowns,
    ];

    fn index(self) -> usize {
        Field::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// The next field (wrapping).
    pub fn next(self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    /// The previous field (wrapping).
    pub fn prev(self) -> Field {
        Field::ALL[(self.index() + Field::ALL.len() - 1) % Field::ALL.len()]
    }

    fn label(self) -> &'static str {
        match self {
            Field::WalletPennies | Field::ChangePennies => "Pennies  ",
            Field::WalletShillings | Field::ChangeShillings => "Shillings",
            Field::WalletCrowns | Field::ChangeCrowns => "Crowns   ",
        }
    }
}

/// Rows of the settings modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalRow {
    /// Toggle auto-apply.
    AutoApply,
    /// Persist the wallet fields.
    SaveWallet,
    /// Zero the wallet fields.
    ResetWallet,
    /// Write the export envelope to the path.
    Export,
    /// Read a payload from the path.
    Import,
    /// The transfer file path (editable).
    Path,
}

impl ModalRow {
    const ALL: [ModalRow; 6] = [
        ModalRow::AutoApply,
        ModalRow::SaveWallet,
        ModalRow::ResetWallet,
        ModalRow::Export,
        ModalRow::Import,
        ModalRow::Path,
    ];
}

/// Wallet tab state.
pub struct WalletTab<S> {
    vault: Vault<S>,
    settings: Settings,
    fields: [String; 6],
    focus: Field,
    mode: Mode,
    result: Option<Notice>,
    settings_message: Option<Notice>,
    modal_cursor: Option<usize>,
    transfer_path: String,
}

impl<S: KeyValueStore> WalletTab<S> {
    /// Load settings and wallet from `vault`.
    pub fn new(vault: Vault<S>) -> Self {
        let settings = vault.load_settings();
        let (wallet, load_error) = match vault.load_wallet_or_default() {
            Ok(wallet) => (wallet, None),
            Err(e) => (
                vault.config().starter_purse.normalized(),
                Some(Notice::bad("Could not load wallet.").line(e.to_string())),
            ),
        };
        let mut tab = Self {
            vault,
            settings,
            fields: Default::default(),
            focus: Field::ChangePennies,
            mode: Mode::default(),
            result: None,
            settings_message: load_error,
            modal_cursor: None,
            transfer_path: DEFAULT_TRANSFER_PATH.to_string(),
        };
        tab.set_wallet(wallet);
        tab
    }

    /// The wallet as currently typed (possibly unnormalized).
    pub fn wallet(&self) -> Money {
        Money::from_fields(&self.fields[0], &self.fields[1], &self.fields[2])
    }

    /// The change as currently typed.
    pub fn change(&self) -> Money {
        Money::from_fields(&self.fields[3], &self.fields[4], &self.fields[5])
    }

    /// Current settings.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Current operation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The focused field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Outcome of the last operation, if any.
    pub fn result(&self) -> Option<&Notice> {
        self.result.as_ref()
    }

    /// Last settings-modal message, if any.
    pub fn settings_message(&self) -> Option<&Notice> {
        self.settings_message.as_ref()
    }

    /// Whether the settings modal is open.
    pub fn modal_open(&self) -> bool {
        self.modal_cursor.is_some()
    }

    /// The backing vault.
    pub fn vault(&self) -> &Vault<S> {
        &self.vault
    }

    /// Replace the wallet fields with `money`, as given.
    pub fn set_wallet(&mut self, money: Money) {
        self.fields[0] = money.pennies.to_string();
        self.fields[1] = money.shillings.to_string();
        self.fields[2] = money.crowns.to_string();
    }

    /// Replace the change fields.
    pub fn set_change(&mut self, money: Money) {
        self.fields[3] = money.pennies.to_string();
        self.fields[4] = money.shillings.to_string();
        self.fields[5] = money.crowns.to_string();
    }

    /// Empty the change fields.
    pub fn clear_change(&mut self) {
        for field in &mut self.fields[3..] {
            field.clear();
        }
    }

    /// Switch to `mode`.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    fn type_char(&mut self, c: char) {
        self.fields[self.focus.index()].push(c);
    }

    fn backspace(&mut self) {
        self.fields[self.focus.index()].pop();
    }

    /// Run the operation on the typed wallet and change.
    pub fn apply(&mut self) {
        let wallet = self.wallet();
        let change = self.change();
        let notice = match apply_operation(&wallet, &change, self.mode) {
            Ok(applied) => self.commit(applied),
            Err(WalletError::NoOp) => {
                Notice::bad("Nothing to do.").line("Enter an amount to add or spend.")
            }
            Err(e @ WalletError::InsufficientFunds { .. }) => Notice::bad("Insufficient funds.")
                .line("You do not have enough coin for this operation.")
                .line(e.to_string()),
        };
        self.result = Some(notice);
    }

    fn commit(&mut self, applied: Applied) -> Notice {
        let notice = Notice::ok(format!("{}: {}", applied.mode.past_tense(), applied.change))
            .line(format!("New balance: {}", applied.after));
        match applied.commit(&self.settings) {
            Some(after) => {
                self.set_wallet(after);
                match self.vault.save_wallet(&after) {
                    Ok(_) => notice,
                    Err(e) => notice.line(format!("Could not save the wallet: {e}")),
                }
            }
            None => notice.line("Auto-apply is OFF: the wallet above was not changed."),
        }
    }

    /// Open the settings modal.
    pub fn open_settings(&mut self) {
        self.modal_cursor = Some(0);
        self.settings_message = None;
    }

    /// Close the settings modal.
    pub fn close_settings(&mut self) {
        self.modal_cursor = None;
        self.settings_message = None;
    }

    /// Flip auto-apply and persist it.
    pub fn toggle_auto_apply(&mut self) {
        self.settings.auto_apply = !self.settings.auto_apply;
        let label = self.settings.auto_apply_label();
        self.settings_message = Some(match self.vault.save_settings(&self.settings) {
            Ok(()) => Notice::ok("Saved.").line(format!("Auto-apply: {label}")),
            Err(e) => Notice::bad("Could not save settings.")
                .line(e.to_string())
                .line(format!("Auto-apply is {label} for this session.")),
        });
    }

    /// Persist the typed wallet.
    pub fn save_wallet(&mut self) {
        let wallet = self.wallet();
        self.settings_message = Some(match self.vault.save_wallet(&wallet) {
            Ok(saved) => Notice::ok("Wallet saved.").line(saved.to_string()),
            Err(e) => Notice::bad("Could not save.")
                .line("Storage may be blocked.")
                .line(e.to_string()),
        });
    }

    /// Zero the wallet fields. Storage is not touched.
    pub fn reset_wallet(&mut self) {
        self.set_wallet(Money::ZERO);
        self.result = None;
        self.settings_message = Some(Notice::ok("Reset.").line("Wallet set to 0."));
    }

    /// Write the export envelope to `path`.
    pub fn export_to(&mut self, path: &Path) {
        let written = format_export(&self.wallet(), &self.settings)
            .map_err(|e| e.to_string())
            .and_then(|text| write_payload(path, &text).map_err(|e| e.to_string()));
        self.settings_message = Some(match written {
            Ok(()) => Notice::ok("Export ready.").line(path.display().to_string()),
            Err(e) => Notice::bad("Export failed.").line(e),
        });
    }

    /// Read a payload from `path` into the wallet fields (and settings).
    pub fn import_from(&mut self, path: &Path) {
        let text = match read_payload(path) {
            Ok(text) => text,
            Err(e) => {
                self.settings_message = Some(Notice::bad("Could not read file.").line(e.to_string()));
                return;
            }
        };
        let imported = match parse_import(&text) {
            Ok(imported) => imported,
            Err(e) => {
                self.settings_message = Some(
                    Notice::bad("Invalid JSON.")
                        .line(e.to_string())
                        .line(format!("Format: {EXPECTED_SHAPE}")),
                );
                return;
            }
        };

        self.set_wallet(imported.wallet);
        self.result = None;
        let mut notice = Notice::ok("Imported.").line(imported.wallet.to_string());
        if imported.auto_apply.is_some() {
            self.settings = imported.merged_settings(self.settings);
            notice = notice.line(format!("Auto-apply: {}", self.settings.auto_apply_label()));
            if let Err(e) = self.vault.save_settings(&self.settings) {
                notice = notice.line(format!("Could not save settings: {e}"));
            }
        }
        self.settings_message = Some(notice);
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(cursor) = self.modal_cursor else {
            return;
        };
        let row = ModalRow::ALL[cursor];
        match key.code {
            KeyCode::Esc => self.close_settings(),
            KeyCode::Up => self.modal_cursor = Some(cursor.saturating_sub(1)),
            KeyCode::Down => self.modal_cursor = Some((cursor + 1).min(ModalRow::ALL.len() - 1)),
            KeyCode::Enter => self.run_modal_row(row),
            KeyCode::Backspace if row == ModalRow::Path => {
                self.transfer_path.pop();
            }
            KeyCode::Char(c) if row == ModalRow::Path => self.transfer_path.push(c),
            KeyCode::Char('a') => self.run_modal_row(ModalRow::AutoApply),
            KeyCode::Char('s') => self.run_modal_row(ModalRow::SaveWallet),
            KeyCode::Char('r') => self.run_modal_row(ModalRow::ResetWallet),
            KeyCode::Char('e') => self.run_modal_row(ModalRow::Export),
            KeyCode::Char('i') => self.run_modal_row(ModalRow::Import),
            _ => {}
        }
    }

    fn run_modal_row(&mut self, row: ModalRow) {
        let path = std::path::PathBuf::from(self.transfer_path.trim());
        match row {
            ModalRow::AutoApply => self.toggle_auto_apply(),
            ModalRow::SaveWallet => self.save_wallet(),
            ModalRow::ResetWallet => self.reset_wallet(),
            ModalRow::Export => self.export_to(&path),
            ModalRow::Import => self.import_from(&path),
            ModalRow::Path => {}
        }
    }

    fn field_line(&self, field: Field) -> Line<'static> {
        let focused = self.focus == field && !self.modal_open();
        let value = &self.fields[field.index()];
        let shown = if value.is_empty() { "0".to_string() } else { value.clone() };
        let style = if focused {
            Style::default().fg(Color::Black).bg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if focused { "_" } else { " " };
        Line::from(vec![
            Span::styled(format!("  {} ", field.label()), Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {shown}{cursor} "), style),
        ])
    }

    fn draw_modal(&self, frame: &mut Frame, cursor: usize) {
        let area = centered_rect(60, 60, frame.area());
        let block = Block::default()
            .title(" Wallet settings ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(inner);

        let lines: Vec<Line<'static>> = ModalRow::ALL
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let text = match row {
                    ModalRow::AutoApply => {
                        let mark = if self.settings.auto_apply { "x" } else { " " };
                        format!("[{mark}] Auto-apply results to the wallet   (a)")
                    }
                    ModalRow::SaveWallet => "Save wallet                          (s)".to_string(),
                    ModalRow::ResetWallet => "Reset wallet to 0                    (r)".to_string(),
                    ModalRow::Export => "Export to file                       (e)".to_string(),
                    ModalRow::Import => "Import from file                     (i)".to_string(),
                    ModalRow::Path => format!("File: {}", self.transfer_path),
                };
                let style = if i == cursor {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(Span::styled(text, style))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        if let Some(message) = &self.settings_message {
            message.render(frame, chunks[1]);
        }
    }
}

impl<S: KeyValueStore> Tab for WalletTab<S> {
    fn input_mode(&self) -> InputMode {
        InputMode::TextInput
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.modal_open() {
            self.handle_modal_key(key);
            return false;
        }
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => self.type_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.apply(),
            KeyCode::Char('+') => self.mode = Mode::Add,
            KeyCode::Char('-') => self.mode = Mode::Spend,
            KeyCode::Char('m') => self.mode = self.mode.toggled(),
            KeyCode::Char('x') => self.clear_change(),
            KeyCode::Char('o') => self.open_settings(),
            KeyCode::Char('q') => return true,
            _ => {}
        }
        false
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Wallet
                Constraint::Length(7), // Change
                Constraint::Min(0),    // Result
            ])
            .split(area);

        let wallet = self.wallet();
        let mut wallet_lines: Vec<Line<'static>> = [
            Field::WalletPennies,
            Field::WalletShillings,
            Field::WalletCrowns,
        ]
        .into_iter()
        .map(|f| self.field_line(f))
        .collect();
        wallet_lines.push(Line::from(Span::styled(
            format!("  = {} ({} P)", wallet.normalized(), wallet.total()),
            Style::default().fg(Color::DarkGray),
        )));
        let wallet_block = Block::default()
            .title(format!(" Wallet  (auto-apply {}) ", self.settings.auto_apply_label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        frame.render_widget(Paragraph::new(wallet_lines).block(wallet_block), chunks[0]);

        let seg = |mode: Mode, label: &'static str| {
            if self.mode == mode {
                Span::styled(label, Style::default().fg(Color::Black).bg(Color::Green).bold())
            } else {
                Span::styled(label, Style::default().fg(Color::DarkGray))
            }
        };
        let mut change_lines = vec![
            Line::from(vec![
                Span::raw("  "),
                seg(Mode::Spend, " Spend "),
                Span::raw(" "),
                seg(Mode::Add, " Add "),
            ]),
            Line::from(""),
        ];
        change_lines.extend(
            [Field::ChangePennies, Field::ChangeShillings, Field::ChangeCrowns]
                .into_iter()
                .map(|f| self.field_line(f)),
        );
        let change_block = Block::default()
            .title(" Change ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));
        frame.render_widget(Paragraph::new(change_lines).block(change_block), chunks[1]);

        if let Some(result) = &self.result {
            result.render(frame, chunks[2]);
        }

        if let Some(cursor) = self.modal_cursor {
            self.draw_modal(frame, cursor);
        }
    }

    fn status_hint(&self) -> &str {
        if self.modal_open() {
            "\u{2191}/\u{2193}:select  Enter:run  a/s/r/e/i:shortcuts  Esc:close"
        } else {
            "0-9:type  Tab:field  +/-:mode  Enter:apply  x:clear  o:settings  F1-F3:tabs  q:quit"
        }
    }
}
