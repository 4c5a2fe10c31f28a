use super::Rule;
use crate::error::RuleError;
use crate::item::Item;

pub const LABEL: &str = "herbal_tea";

/// Gains one point a day, two once expired.
#[derive(Clone, Copy, Debug, Default)]
pub struct HerbalTeaRule;

impl Rule for HerbalTeaRule {
    fn label(&self) -> &'static str {
        LABEL
    }

    fn update_benefit(&self, item: &mut Item) -> Result<(), RuleError> {
        item.adjust_benefit(1);
        Ok(())
    }

    fn handle_expired(&self, item: &mut Item) -> Result<(), RuleError> {
        item.adjust_benefit(1);
        Ok(())
    }
}
