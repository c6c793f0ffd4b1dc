//! Configuration for the persistence layer.

use std::path::{Path, PathBuf};

use wh_core::Money;

/// Default directory for stored records.
pub const DEFAULT_DATA_DIR: &str = ".wh";

/// Key of the wallet record.
pub const WALLET_KEY: &str = "wfrp_wallet";

/// Key of the settings record.
pub const SETTINGS_KEY: &str = "wfrp_settings";

/// Where and under which keys state is stored.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON file per key.
    pub data_dir: PathBuf,
    /// Key of the wallet record.
    pub wallet_key: String,
    /// Key of the settings record.
    pub settings_key: String,
    /// Wallet used when none has been stored yet.
    pub starter_purse: Money,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            wallet_key: WALLET_KEY.to_string(),
            settings_key: SETTINGS_KEY.to_string(),
            starter_purse: Money::new(15, 32, 10),
        }
    }
}

impl StoreConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the starter purse.
    pub fn with_starter_purse(mut self, purse: Money) -> Self {
        self.starter_purse = purse;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.data_dir, PathBuf::from(".wh"));
        assert_eq!(cfg.wallet_key, "wfrp_wallet");
        assert_eq!(cfg.settings_key, "wfrp_settings");
        assert_eq!(cfg.starter_purse, Money::new(15, 32, 10));
    }

    #[test]
    fn builder_methods() {
        let cfg = StoreConfig::default()
            .with_data_dir("/tmp/purse")
            .with_starter_purse(Money::ZERO);
        assert_eq!(cfg.data_dir, PathBuf::from("/tmp/purse"));
        assert_eq!(cfg.starter_purse, Money::ZERO);
    }
}
