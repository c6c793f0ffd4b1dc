//! Currency engine for the WFRP session helper.
//!
//! Converts between the three-denomination [`Money`] record and a single
//! penny [`Total`], applies add/spend operations to a wallet without ever
//! committing them, and reads/writes the JSON import/export payload.
//! Everything here is pure; storage and presentation live in other crates.

pub mod error;
pub mod money;
pub mod settings;
pub mod transfer;
pub mod wallet;

pub use error::{ParseError, ParseResult, WalletError, WalletResult};
pub use money::{Money, Total, clamp_total, to_money, to_total};
pub use settings::Settings;
pub use transfer::{EXPECTED_SHAPE, ImportPayload, Imported, format_export, parse_import};
pub use wallet::{Applied, Mode, apply_operation};
