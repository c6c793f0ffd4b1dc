//! Static reference data for a WFRP session.
//!
//! Advance cost bands, the conditions and psychology catalogue with search
//! and sorting, and a small XP tally.

pub mod states;
pub mod tally;
pub mod xp;

pub use states::{CATALOGUE, Condition, SortMode};
pub use tally::{CHIPS, Tally};
pub use xp::{AdvanceKind, CostBand, DEV_COSTS};
