//! Wallet and settings records on top of a [`KeyValueStore`].

use serde_json::Value;
use wh_core::{Money, Settings};

use crate::config::StoreConfig;
use crate::error::{StorageError, StoreResult};
use crate::store::{FileStore, KeyValueStore};

/// The two persisted records of the helper.
#[derive(Debug, Clone)]
pub struct Vault<S> {
    store: S,
    config: StoreConfig,
}

impl Vault<FileStore> {
    /// Open the file store described by `config`.
    pub fn open(config: StoreConfig) -> Self {
        let store = FileStore::new(&config.data_dir);
        Self::new(store, config)
    }
}

impl<S: KeyValueStore> Vault<S> {
    /// Wrap an existing store.
    pub fn new(store: S, config: StoreConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The configuration in use.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Stored settings, or the defaults if absent, malformed or unreadable.
    pub fn load_settings(&self) -> Settings {
        match self.store.get(&self.config.settings_key) {
            Ok(Some(text)) => match serde_json::from_str::<Value>(&text) {
                Ok(value) => Settings::from_record(&value),
                Err(e) => {
                    tracing::warn!(error = %e, "settings record is not JSON, using defaults");
                    Settings::default()
                }
            },
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!(error = %e, "cannot load settings, using defaults");
                Settings::default()
            }
        }
    }

    /// Persist `settings`.
    pub fn save_settings(&mut self, settings: &Settings) -> StoreResult<()> {
        let key = self.config.settings_key.clone();
        let text = serde_json::to_string(settings).map_err(|source| StorageError::Encode {
            key: key.clone(),
            source,
        })?;
        self.store.set(&key, &text)?;
        tracing::info!(auto_apply = settings.auto_apply, "saved settings");
        Ok(())
    }

    /// The stored wallet, normalized. A record that is not JSON counts as
    /// absent.
    pub fn load_wallet(&self) -> StoreResult<Option<Money>> {
        let Some(text) = self.store.get(&self.config.wallet_key)? else {
            return Ok(None);
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(Some(Money::coerce(&value).normalized())),
            Err(e) => {
                tracing::warn!(error = %e, "wallet record is not JSON, ignoring it");
                Ok(None)
            }
        }
    }

    /// The stored wallet, or the normalized starter purse if there is none.
    /// A read failure is returned, never replaced by the starter purse.
    pub fn load_wallet_or_default(&self) -> StoreResult<Money> {
        Ok(self
            .load_wallet()?
            .unwrap_or_else(|| self.config.starter_purse.normalized()))
    }

    /// Persist `wallet` in normalized form. Returns what was written.
    pub fn save_wallet(&mut self, wallet: &Money) -> StoreResult<Money> {
        let normalized = wallet.normalized();
        let key = self.config.wallet_key.clone();
        let text = serde_json::to_string(&normalized).map_err(|source| StorageError::Encode {
            key: key.clone(),
            source,
        })?;
        self.store.set(&key, &text)?;
        tracing::info!(total = normalized.total(), "saved wallet");
        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn vault() -> Vault<MemoryStore> {
        Vault::new(MemoryStore::new(), StoreConfig::default())
    }

    #[test]
    fn settings_default_when_absent() {
        assert!(vault().load_settings().auto_apply);
    }

    #[test]
    fn settings_default_when_blocked() {
        let v = Vault::new(MemoryStore::blocked(), StoreConfig::default());
        assert!(v.load_settings().auto_apply);
    }

    #[test]
    fn settings_default_when_garbage() {
        let mut v = vault();
        v.store_mut().set("wfrp_settings", "{oops").unwrap();
        assert!(v.load_settings().auto_apply);
        v.store_mut()
            .set("wfrp_settings", r#"{"autoApply":"off"}"#)
            .unwrap();
        assert!(v.load_settings().auto_apply);
    }

    #[test]
    fn settings_round_trip() {
        let mut v = vault();
        v.save_settings(&Settings::default().with_auto_apply(false))
            .unwrap();
        assert_eq!(v.store().peek("wfrp_settings"), Some(r#"{"autoApply":false}"#));
        assert!(!v.load_settings().auto_apply);
    }

    #[test]
    fn wallet_written_normalized() {
        let mut v = vault();
        let written = v.save_wallet(&Money::new(15, 32, 10)).unwrap();
        assert_eq!(written, Money::new(3, 13, 11));
        assert_eq!(
            v.store().peek("wfrp_wallet"),
            Some(r#"{"pennies":3,"shillings":13,"crowns":11}"#)
        );
        assert_eq!(v.load_wallet().unwrap(), Some(Money::new(3, 13, 11)));
    }

    #[test]
    fn wallet_absent_uses_starter_purse() {
        let v = vault();
        assert_eq!(v.load_wallet().unwrap(), None);
        assert_eq!(v.load_wallet_or_default().unwrap(), Money::new(3, 13, 11));
    }

    #[test]
    fn legacy_wallet_record_is_read() {
        let mut v = vault();
        v.store_mut()
            .set("wfrp_wallet", r#"{"p":13,"s":0,"zk":1}"#)
            .unwrap();
        assert_eq!(v.load_wallet().unwrap(), Some(Money::new(1, 1, 1)));
    }

    #[test]
    fn garbage_wallet_counts_as_absent() {
        let mut v = vault();
        v.store_mut().set("wfrp_wallet", "not json").unwrap();
        assert_eq!(v.load_wallet().unwrap(), None);
    }

    #[test]
    fn blocked_store_reports_errors() {
        let mut v = Vault::new(MemoryStore::blocked(), StoreConfig::default());
        assert!(v.load_wallet().is_err());
        assert!(v.save_wallet(&Money::ZERO).is_err());
        assert!(v.save_settings(&Settings::default()).is_err());
        assert!(v.load_wallet_or_default().is_err());
    }
}
