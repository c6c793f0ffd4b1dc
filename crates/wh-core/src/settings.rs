//! User settings.

use serde::Serialize;
use serde_json::Value;

/// Persistent user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Commit a successful wallet operation into the wallet right away.
    pub auto_apply: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { auto_apply: true }
    }
}

impl Settings {
    /// Read a stored settings record. Fields that are missing or not
    /// booleans keep their defaults.
    pub fn from_record(value: &Value) -> Self {
        let mut settings = Self::default();
        if let Some(flag) = value.get("autoApply").and_then(Value::as_bool) {
            settings.auto_apply = flag;
        }
        settings
    }

    /// Set the auto-apply flag.
    pub fn with_auto_apply(mut self, auto_apply: bool) -> Self {
        self.auto_apply = auto_apply;
        self
    }

    /// `"ON"` or `"OFF"`, for status lines.
    pub fn auto_apply_label(&self) -> &'static str {
        if self.auto_apply { "ON" } else { "OFF" }
    }
}
