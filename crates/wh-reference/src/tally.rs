//! A running XP tally for the session.

/// Preset deltas offered as one-key chips.
pub const CHIPS: [i64; 9] = [-25, -10, -5, -1, 1, 5, 10, 25, 50];

/// An integer counter. May go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    value: i64,
}

impl Tally {
    /// A tally at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Add `delta` (negative to subtract). Returns the new value.
    pub fn add(&mut self, delta: i64) -> i64 {
        self.value = self.value.saturating_add(delta);
        self.value
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Parse a typed delta, truncating fractions. Anything unusable is 0.
pub fn parse_delta(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if let Ok(exact) = trimmed.parse::<i64>() {
        return exact;
    }
    match trimmed.parse::<f64>() {
        // `as` saturates
        Ok(n) if n.is_finite() => n.trunc() as i64,
        _ => 0,
    }
}
