//! Terminal UI for the WFRP session helper.
//!
//! A ratatui interface with three tabs: the wallet with its settings
//! panel, advance costs with an XP tally, and the conditions catalogue.

pub mod app;
pub mod shared;
pub mod tabs;
pub mod terminal;
