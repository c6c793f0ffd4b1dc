//! Experience costs for characteristic and skill advances.
//!
//! The cost of the next advance depends on how many advances have already
//! been taken, in bands of five.

use std::fmt;

/// What is being advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceKind {
    /// A characteristic (WS, BS, S, ...).
    Characteristic,
    /// A skill.
    Skill,
}

impl AdvanceKind {
    /// Parse `characteristic`/`skill` (and short forms).
    pub fn parse(s: &str) -> Option<AdvanceKind> {
        match s.trim().to_lowercase().as_str() {
            "characteristic" | "char" | "c" => Some(AdvanceKind::Characteristic),
            "skill" | "s" => Some(AdvanceKind::Skill),
            _ => None,
        }
    }
}

impl fmt::Display for AdvanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvanceKind::Characteristic => write!(f, "characteristic"),
            AdvanceKind::Skill => write!(f, "skill"),
        }
    }
}

/// One row of the cost table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBand {
    /// Row label, e.g. `"6 to 10"`.
    pub label: &'static str,
    /// Lowest advance count in the band.
    pub min: u32,
    /// Highest advance count in the band; `None` for the open-ended last band.
    pub max: Option<u32>,
    /// XP per characteristic advance.
    pub characteristic: u32,
    /// XP per skill advance.
    pub skill: u32,
}

impl CostBand {
    /// XP per advance of `kind` in this band.
    pub fn cost(&self, kind: AdvanceKind) -> u32 {
        match kind {
            AdvanceKind::Characteristic => self.characteristic,
            AdvanceKind::Skill => self.skill,
        }
    }

    /// Whether `advances` falls in this band.
    pub fn contains(&self, advances: u32) -> bool {
        advances >= self.min && self.max.is_none_or(|max| advances <= max)
    }
}

const fn band(label: &'static str, min: u32, max: u32, characteristic: u32, skill: u32) -> CostBand {
    CostBand {
        label,
        min,
        max: Some(max),
        characteristic,
        skill,
    }
}

/// The advance cost table.
pub const DEV_COSTS: [CostBand; 15] = [
    band("0 to 5", 0, 5, 25, 10),
    band("6 to 10", 6, 10, 30, 15),
    band("11 to 15", 11, 15, 40, 20),
    band("16 to 20", 16, 20, 50, 30),
    band("21 to 25", 21, 25, 70, 40),
    band("26 to 30", 26, 30, 90, 60),
    band("31 to 35", 31, 35, 120, 80),
    band("36 to 40", 36, 40, 150, 110),
    band("41 to 45", 41, 45, 190, 140),
    band("46 to 50", 46, 50, 230, 180),
    band("51 to 55", 51, 55, 280, 220),
    band("56 to 60", 56, 60, 330, 270),
    band("61 to 65", 61, 65, 390, 320),
    band("66 to 70", 66, 70, 450, 380),
    CostBand {
        label: "71+",
        min: 71,
        max: None,
        characteristic: 520,
        skill: 440,
    },
];

/// All bands in order.
pub fn bands() -> &'static [CostBand] {
    &DEV_COSTS
}

/// The band containing `advances`.
pub fn band_for(advances: u32) -> &'static CostBand {
    DEV_COSTS
        .iter()
        .find(|b| b.contains(advances))
        .unwrap_or(&DEV_COSTS[DEV_COSTS.len() - 1])
}

/// XP for one more advance when `advances` have been taken.
pub fn cost_of_next(kind: AdvanceKind, advances: u32) -> u32 {
    band_for(advances).cost(kind)
}

/// XP to go from `from` advances to `to` advances. Zero if `to <= from`.
pub fn cost_between(kind: AdvanceKind, from: u32, to: u32) -> u64 {
    if to <= from {
        return 0;
    }
    let (from, to) = (u64::from(from), u64::from(to));
    DEV_COSTS
        .iter()
        .map(|b| {
            let lo = from.max(u64::from(b.min));
            let hi = match b.max {
                Some(max) => to.min(u64::from(max) + 1),
                None => to,
            };
            if hi > lo {
                (hi - lo) * u64::from(b.cost(kind))
            } else {
                0
            }
        })
        .sum()
}
