use super::Rule;
use crate::error::RuleError;
use crate::item::Item;

pub const LABEL: &str = "magic_pill";

/// Never expires and never changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct MagicPillRule;

impl Rule for MagicPillRule {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn update_benefit(&self, _item: &mut Item) -> Result<(), RuleError> {
        Ok(())
    }

    fn expires(&self) -> bool {
        false
    }
}
