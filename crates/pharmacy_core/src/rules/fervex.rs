use super::Rule;
use crate::benefit::{FERVEX_DOUBLE_GAIN_THRESHOLD, FERVEX_TRIPLE_GAIN_THRESHOLD};
use crate::error::RuleError;
use crate::item::Item;

pub const LABEL: &str = "fervex";

/// Appreciates faster as expiration approaches, then drops to zero.
///
/// The daily gain is tiered on the pre-decrement `expires_in`: +1 always, +1
/// more below [`FERVEX_DOUBLE_GAIN_THRESHOLD`] and +1 more below
/// [`FERVEX_TRIPLE_GAIN_THRESHOLD`]. Each step is clamped on its own. On the
/// day the counter goes negative the gain is applied first and then wiped by
/// [`Rule::handle_expired`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FervexRule;

impl Rule for FervexRule {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn update_benefit(&self, item: &mut Item) -> Result<(), RuleError> {
        item.adjust_benefit(1);
        if item.expires_in < FERVEX_DOUBLE_GAIN_THRESHOLD {
            item.adjust_benefit(1);
        }
        if item.expires_in < FERVEX_TRIPLE_GAIN_THRESHOLD {
            item.adjust_benefit(1);
        }
        Ok(())
    }

    fn handle_expired(&self, item: &mut Item) -> Result<(), RuleError> {
        item.set_benefit(0);
        Ok(())
    }
}
