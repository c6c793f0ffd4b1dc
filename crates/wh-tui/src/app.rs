//! Top-level application state managing tabs and the persisted wallet.

use wh_store::{KeyValueStore, Vault};

use crate::tabs::states::StatesTab;
use crate::tabs::wallet::WalletTab;
use crate::tabs::xp::ExperienceTab;
use crate::tabs::{InputMode, Tab, TabId};

/// Main application state for the TUI.
pub struct TuiApp<S> {
    /// Currently active tab.
    pub active_tab: TabId,
    /// Whether to show the global help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Wallet tab, owns the vault.
    pub wallet: WalletTab<S>,
    /// Experience tab.
    pub xp: ExperienceTab,
    /// States tab.
    pub states: StatesTab,
}

impl<S: KeyValueStore> TuiApp<S> {
    /// Create a new app over a vault. Wallet and settings load immediately.
    pub fn new(vault: Vault<S>, start_tab: TabId) -> Self {
        Self {
            active_tab: start_tab,
            show_help: false,
            should_quit: false,
            wallet: WalletTab::new(vault),
            xp: ExperienceTab::new(),
            states: StatesTab::new(),
        }
    }

    /// Get the input mode of the currently active tab.
    pub fn active_input_mode(&self) -> InputMode {
        self.active_tab_ref().input_mode()
    }

    /// Get a reference to the active tab.
    pub fn active_tab_ref(&self) -> &dyn Tab {
        match self.active_tab {
            TabId::Wallet => &self.wallet,
            TabId::Experience => &self.xp,
            TabId::States => &self.states,
        }
    }

    /// Get a mutable reference to the active tab.
    pub fn active_tab_mut(&mut self) -> &mut dyn Tab {
        match self.active_tab {
            TabId::Wallet => &mut self.wallet,
            TabId::Experience => &mut self.xp,
            TabId::States => &mut self.states,
        }
    }

    /// Switch to a tab by ID.
    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }
}
