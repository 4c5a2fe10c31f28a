use super::Rule;
use crate::error::RuleError;
use crate::item::Item;

pub const LABEL: &str = "dafalgan";

/// Degrades twice as fast as the standard rule: two a day, four once expired.
#[derive(Clone, Copy, Debug, Default)]
pub struct DafalganRule;

impl Rule for DafalganRule {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn update_benefit(&self, item: &mut Item) -> Result<(), RuleError> {
        item.adjust_benefit(-2);
        Ok(())
    }

    fn handle_expired(&self, item: &mut Item) -> Result<(), RuleError> {
        item.adjust_benefit(-2);
        Ok(())
    }
}
