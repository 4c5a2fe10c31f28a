use crate::error::RuleError;
use crate::item::Item;
use crate::registry::Registry;
use crate::rules::Rule;

/// Advance a single item by one day under `rule`.
///
/// Order is fixed for every category: benefit change against the current
/// counter, then the counter decrement, then the expired reaction against the
/// decremented counter. Rules that do not expire skip the last two steps.
pub fn update(rule: &dyn Rule, item: &mut Item) -> Result<(), RuleError> {
    rule.update_benefit(item)?;

    if !rule.expires() {
        return Ok(());
    }

    item.expires_in = item
        .expires_in
        .checked_sub(1)
        .ok_or_else(|| RuleError::ExpirationOverflow {
            name: item.name.clone(),
        })?;

    if item.is_expired() {
        rule.handle_expired(item)?;
    }

    Ok(())
}

/// Advance every item by one day, in collection order.
///
/// The first failing item aborts the pass; items before it keep their update.
pub fn advance_one_day(registry: &Registry, items: &mut [Item]) -> Result<(), RuleError> {
    for item in items.iter_mut() {
        let rule = registry.resolve(&item.name);
        update(rule, item)?;
    }
    Ok(())
}
