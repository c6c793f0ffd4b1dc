//! Import and export of the wallet as JSON text.
//!
//! Two payload shapes are accepted on import:
//!
//! ```text
//! {"pennies": 1, "shillings": 2, "crowns": 3}
//! {"wallet": {"pennies": 1, "shillings": 2, "crowns": 3}, "settings": {"autoApply": false}}
//! ```
//!
//! Export always writes the second (envelope) shape.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ParseError, ParseResult};
use crate::money::Money;
use crate::settings::Settings;

/// Shape hint shown to users when an import fails.
pub const EXPECTED_SHAPE: &str = r#"{"pennies":0,"shillings":0,"crowns":0}"#;

/// A parsed payload, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportPayload {
    /// The whole document is the wallet.
    Bare(Value),
    /// A `wallet` sub-object, with an optional `settings.autoApply`.
    Envelope {
        /// The `wallet` field.
        wallet: Value,
        /// `settings.autoApply`, when present and boolean.
        auto_apply: Option<bool>,
    },
}

impl ImportPayload {
    /// Decide the shape by the presence of a `wallet` field.
    pub fn classify(mut value: Value) -> Self {
        let wallet = value.as_object_mut().and_then(|obj| obj.remove("wallet"));
        match wallet {
            Some(wallet) => {
                let auto_apply = value
                    .get("settings")
                    .and_then(|s| s.get("autoApply"))
                    .and_then(Value::as_bool);
                ImportPayload::Envelope { wallet, auto_apply }
            }
            None => ImportPayload::Bare(value),
        }
    }

    /// Coerce into a normalized wallet plus the optional settings flag.
    pub fn into_imported(self) -> Imported {
        match self {
            ImportPayload::Bare(value) => Imported {
                wallet: Money::coerce(&value).normalized(),
                auto_apply: None,
            },
            ImportPayload::Envelope { wallet, auto_apply } => Imported {
                wallet: Money::coerce(&wallet).normalized(),
                auto_apply,
            },
        }
    }
}

/// Result of a successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Imported {
    /// The imported wallet, normalized.
    pub wallet: Money,
    /// Auto-apply flag carried by an envelope, if any.
    pub auto_apply: Option<bool>,
}

impl Imported {
    /// Apply the carried flag (if any) on top of `current`.
    pub fn merged_settings(&self, current: Settings) -> Settings {
        match self.auto_apply {
            Some(flag) => current.with_auto_apply(flag),
            None => current,
        }
    }
}

/// Parse import text. Only unparseable text fails.
pub fn parse_import(raw: &str) -> ParseResult<Imported> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let value: Value = serde_json::from_str(text)?;
    Ok(ImportPayload::classify(value).into_imported())
}

/// Export document. Field order is the key order on output.
#[derive(Serialize)]
struct Envelope<'a> {
    wallet: Money,
    settings: &'a Settings,
}

/// Render the export envelope for `money` (normalized) and `settings`.
pub fn format_export(money: &Money, settings: &Settings) -> serde_json::Result<String> {
    serde_json::to_string(&Envelope {
        wallet: money.normalized(),
        settings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_object() {
        let imported = parse_import(r#"{"pennies":30,"shillings":0,"crowns":1}"#).unwrap();
        assert_eq!(imported.wallet, Money::new(6, 2, 1));
        assert_eq!(imported.auto_apply, None);
    }

    #[test]
    fn envelope_takes_precedence() {
        let imported = parse_import(
            r#"{"pennies":99,"wallet":{"pennies":1,"shillings":2,"crowns":3},"settings":{"autoApply":false}}"#,
        )
        .unwrap();
        assert_eq!(imported.wallet, Money::new(1, 2, 3));
        assert_eq!(imported.auto_apply, Some(false));
    }

    #[test]
    fn envelope_without_settings() {
        let imported = parse_import(r#"{"wallet":{"crowns":2}}"#).unwrap();
        assert_eq!(imported.wallet, Money::new(0, 0, 2));
        assert_eq!(imported.auto_apply, None);
    }

    #[test]
    fn garbage_fields_become_zero() {
        let imported = parse_import(r#"{"pennies":"lots","shillings":-4}"#).unwrap();
        assert_eq!(imported.wallet, Money::ZERO);
        let imported = parse_import("[1,2,3]").unwrap();
        assert_eq!(imported.wallet, Money::ZERO);
    }

    #[test]
    fn non_boolean_auto_apply_ignored() {
        let imported =
            parse_import(r#"{"wallet":{},"settings":{"autoApply":"false"}}"#).unwrap();
        assert_eq!(imported.auto_apply, None);
    }

    #[test]
    fn malformed_text_fails() {
        assert!(matches!(
            parse_import("not json"),
            Err(ParseError::Syntax { .. })
        ));
        assert_eq!(parse_import("   \n"), Err(ParseError::Empty));
    }

    #[test]
    fn classify_detects_envelope() {
        let payload = ImportPayload::classify(json!({"wallet": null}));
        assert_eq!(
            payload,
            ImportPayload::Envelope {
                wallet: Value::Null,
                auto_apply: None
            }
        );
        let payload = ImportPayload::classify(json!({"pennies": 1}));
        assert!(matches!(payload, ImportPayload::Bare(_)));
    }

    #[test]
    fn merged_settings() {
        let imported = parse_import(r#"{"wallet":{},"settings":{"autoApply":false}}"#).unwrap();
        assert!(!imported.merged_settings(Settings::default()).auto_apply);
        let bare = parse_import("{}").unwrap();
        assert!(bare.merged_settings(Settings::default()).auto_apply);
    }

    #[test]
    fn export_is_normalized_envelope() {
        let text = format_export(&Money::new(15, 32, 10), &Settings::default()).unwrap();
        insta::assert_snapshot!(
            text,
            @r#"{"wallet":{"pennies":3,"shillings":13,"crowns":11},"settings":{"autoApply":true}}"#
        );
    }

    #[test]
    fn export_then_import() {
        let settings = Settings::default().with_auto_apply(false);
        let text = format_export(&Money::new(7, 3, 2), &settings).unwrap();
        let imported = parse_import(&text).unwrap();
        assert_eq!(imported.wallet, Money::new(7, 3, 2));
        assert_eq!(imported.auto_apply, Some(false));
    }
}
