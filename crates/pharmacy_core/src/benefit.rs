/// Lower bound for an item's benefit.
pub const MIN_BENEFIT: u8 = 0;

/// Upper bound for an item's benefit.
pub const MAX_BENEFIT: u8 = 50;

/// Fervex earns a second point per day once fewer than this many days remain.
pub const FERVEX_DOUBLE_GAIN_THRESHOLD: i64 = 11;

/// Fervex earns a third point per day once fewer than this many days remain.
pub const FERVEX_TRIPLE_GAIN_THRESHOLD: i64 = 6;

/// Clamp an arbitrary integer into the `[MIN_BENEFIT, MAX_BENEFIT]` range.
pub fn clamp_benefit(value: i64) -> u8 {
    value.clamp(i64::from(MIN_BENEFIT), i64::from(MAX_BENEFIT)) as u8
}

/// Apply a signed delta to a benefit value, returning the clamped result.
pub fn apply_benefit_delta(current: u8, delta: i32) -> u8 {
    clamp_benefit(i64::from(current) + i64::from(delta))
}
