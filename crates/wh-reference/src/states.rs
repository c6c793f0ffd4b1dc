//! Catalogue of conditions and psychology states.

use std::cmp::Ordering;
use std::fmt;

/// One catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    /// Display name; `(X)` marks a rated state.
    pub name: &'static str,
    /// Category shown as a badge.
    pub tag: &'static str,
    /// Rules summary.
    pub text: &'static str,
}

const CONDITION: &str = "Condition";
const PSYCHOLOGY: &str = "Psychology";

/// The full catalogue, in book order.
pub const CATALOGUE: &[Condition] = &[
    Condition {
        name: "Ablaze",
        tag: CONDITION,
        text: "You are on fire. At the end of each round take 1d10 wounds, modified by Toughness Bonus and armour, minimum 1. Remove one Ablaze with a successful Athletics test; extra SL remove more.",
    },
    Condition {
        name: "Bleeding",
        tag: CONDITION,
        text: "Lose 1 wound per Bleeding condition at the end of each round, ignoring all modifiers. At 0 wounds each round carries a chance of death. Removed by Heal tests, spells or bandages.",
    },
    Condition {
        name: "Blinded",
        tag: CONDITION,
        text: "-10 to tests relying on sight per condition; opponents gain +10 to hit you in melee. One condition is removed at the end of every other round.",
    },
    Condition {
        name: "Broken",
        tag: CONDITION,
        text: "You are terrified and flee. -10 to all tests not spent running or hiding. Remove one condition at the end of each round spent out of sight of enemies, or with a successful Cool test.",
    },
    Condition {
        name: "Deafened",
        tag: CONDITION,
        text: "-10 to tests relying on hearing per condition; attackers from the flanks or rear gain +10 to hit. One condition is removed at the end of every other round.",
    },
    Condition {
        name: "Entangled",
        tag: CONDITION,
        text: "You cannot move and -10 applies to tests involving movement per condition. On your turn, an opposed Strength test against the source removes one condition per SL.",
    },
    Condition {
        name: "Fatigued",
        tag: CONDITION,
        text: "-10 to all tests per condition. Removed by rest, spells or the end of whatever caused it.",
    },
    Condition {
        name: "Poisoned",
        tag: CONDITION,
        text: "Lose 1 wound per condition at the end of each round, and -10 to all tests per condition. An Endurance test at the end of the round removes one condition per SL.",
    },
    Condition {
        name: "Prone",
        tag: CONDITION,
        text: "You are lying down. Move is halved, and -20 to tests involving movement. Standing up uses your move and removes the condition. Melee attackers gain +20 against you.",
    },
    Condition {
        name: "Stunned",
        tag: CONDITION,
        text: "You cannot take an Action and defend at -10 per condition. Melee attackers gain +1 Advantage. An Endurance test at the end of the round removes one condition per SL; with none left you gain Fatigued.",
    },
    Condition {
        name: "Surprised",
        tag: CONDITION,
        text: "You cannot act or defend until the condition is removed. Removed at the end of the round or when you are attacked; attackers gain +20 to hit.",
    },
    Condition {
        name: "Unconscious",
        tag: CONDITION,
        text: "You are knocked out and can do nothing. Any attack against you is automatically a hit; a melee attacker may instead kill you outright. Removed by healing, rest or time.",
    },
    Condition {
        name: "Fear (X)",
        tag: PSYCHOLOGY,
        text: "Make an extended Cool test when confronting the source, needing X SL. Until you succeed you gain Broken if you engage, and -10 to all tests against the source.",
    },
    Condition {
        name: "Terror (X)",
        tag: PSYCHOLOGY,
        text: "Make a Cool test on first encounter. On failure gain Broken plus one Broken for every SL below zero. Terror also causes Fear of rating X afterwards.",
    },
    Condition {
        name: "Animosity (Target)",
        tag: PSYCHOLOGY,
        text: "On meeting the target make a Psychology test. On failure you must act against them, hostile in speech or blade; -20 to Fellowship tests towards them.",
    },
    Condition {
        name: "Frenzy",
        tag: PSYCHOLOGY,
        text: "Willpower test to work yourself up. While frenzied you are immune to other psychology, must attack the nearest enemy, gain +1 Strength Bonus and cannot flee. Ends at the end of combat with a Fatigued condition.",
    },
    Condition {
        name: "Hatred (Target)",
        tag: PSYCHOLOGY,
        text: "On meeting the target make a Psychology test. On failure you attack them with +1 SL to melee and are immune to Fear and Intimidate from them.",
    },
    Condition {
        name: "Prejudice (Target)",
        tag: PSYCHOLOGY,
        text: "On meeting the target make a Psychology test. On failure you insult them and suffer -10 to Fellowship tests towards them.",
    },
];

/// How the catalogue list is ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Name, A to Z.
    #[default]
    NameAsc,
    /// Name, Z to A.
    NameDesc,
    /// Tag, then name.
    Tag,
}

impl SortMode {
    /// Parse `name`, `name-desc` or `tag`.
    pub fn parse(s: &str) -> Option<SortMode> {
        match s.trim().to_lowercase().as_str() {
            "name" | "name-asc" | "az" => Some(SortMode::NameAsc),
            "name-desc" | "za" => Some(SortMode::NameDesc),
            "tag" | "category" => Some(SortMode::Tag),
            _ => None,
        }
    }

    /// The next mode in the cycle.
    pub fn next(self) -> SortMode {
        match self {
            SortMode::NameAsc => SortMode::NameDesc,
            SortMode::NameDesc => SortMode::Tag,
            SortMode::Tag => SortMode::NameAsc,
        }
    }

    fn compare(self, a: &Condition, b: &Condition) -> Ordering {
        match self {
            SortMode::NameAsc => cmp_name(a, b),
            SortMode::NameDesc => cmp_name(b, a),
            SortMode::Tag => a
                .tag
                .to_lowercase()
                .cmp(&b.tag.to_lowercase())
                .then_with(|| cmp_name(a, b)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortMode::NameAsc => write!(f, "name A-Z"),
            SortMode::NameDesc => write!(f, "name Z-A"),
            SortMode::Tag => write!(f, "tag"),
        }
    }
}

fn cmp_name(a: &Condition, b: &Condition) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Entries whose name or tag contains `query`, case-insensitively.
/// A blank query matches everything.
pub fn filter(query: &str) -> Vec<&'static Condition> {
    let needle = query.trim().to_lowercase();
    CATALOGUE
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.tag.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort entries in place by `mode`.
pub fn sort(items: &mut [&'static Condition], mode: SortMode) {
    items.sort_by(|a, b| mode.compare(a, b));
}

/// Filter then sort, the way the list view shows it.
pub fn search(query: &str, mode: SortMode) -> Vec<&'static Condition> {
    let mut items = filter(query);
    sort(&mut items, mode);
    items
}

/// Exact, case-insensitive lookup by name.
///
/// A name given without its `(X)` suffix still matches.
pub fn find(name: &str) -> Option<&'static Condition> {
    let wanted = name.trim().to_lowercase();
    CATALOGUE.iter().find(|c| {
        let full = c.name.to_lowercase();
        full == wanted || base_name(&full) == wanted
    })
}

/// The closest catalogue entry to a mistyped name.
pub fn suggest(name: &str) -> Option<&'static Condition> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    let limit = (wanted.len() / 2).max(3);
    CATALOGUE
        .iter()
        .map(|c| {
            let full = c.name.to_lowercase();
            (strsim::levenshtein(base_name(&full), &wanted), c)
        })
        .filter(|(dist, _)| *dist <= limit)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, c)| c)
}

/// `"Visible: 3 / 18"`.
pub fn visible_count(shown: usize) -> String {
    format!("Visible: {shown} / {}", CATALOGUE.len())
}

fn base_name(name: &str) -> &str {
    match name.find(" (") {
        Some(idx) => &name[..idx],
        None => name,
    }
}
