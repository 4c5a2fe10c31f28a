use super::Rule;
use crate::error::RuleError;
use crate::item::Item;

pub const LABEL: &str = "standard";

/// Loses one point a day, two once expired. Used for every unlisted category.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRule;

impl Rule for StandardRule {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn update_benefit(&self, item: &mut Item) -> Result<(), RuleError> {
        item.adjust_benefit(-1);
        Ok(())
    }

    fn handle_expired(&self, item: &mut Item) -> Result<(), RuleError> {
        item.adjust_benefit(-1);
        Ok(())
    }
}
