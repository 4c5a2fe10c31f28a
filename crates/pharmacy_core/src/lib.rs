pub mod benefit;
pub mod engine;
pub mod error;
pub mod io;
pub mod item;
pub mod registry;
pub mod rules;

use error::RuleError;
use item::Item;
use registry::Registry;
use rules::Rule;

/// A stocked collection of items and the rules that age them.
#[derive(Clone, Debug, Default)]
pub struct Pharmacy {
    items: Vec<Item>,
    registry: Registry,
}

impl Pharmacy {
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_registry(items, Registry::new())
    }

    pub fn with_registry(items: Vec<Item>, registry: Registry) -> Self {
        Self { items, registry }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Bind a category name to `rule`, overriding any existing binding.
    pub fn register_rule(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.registry.register(name, rule);
    }

    /// Execute a single simulated day.
    ///
    /// Every item is updated in place, in collection order, and the updated
    /// collection is returned. An error aborts the day without rolling back
    /// items already updated.
    pub fn advance_one_day(&mut self) -> Result<&[Item], RuleError> {
        engine::advance_one_day(&self.registry, &mut self.items)?;
        Ok(&self.items)
    }

    /// Run `days` consecutive days, returning a snapshot taken after each one.
    pub fn simulate(&mut self, days: u32) -> Result<Vec<Vec<Item>>, RuleError> {
        let mut log = Vec::with_capacity(days as usize);
        for _ in 0..days {
            let snapshot = self.advance_one_day()?.to_vec();
            log.push(snapshot);
        }
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::inventory::Inventory;

    #[test]
    fn day_advances_every_item() {
        let mut pharmacy = Pharmacy::new(Inventory::starter().items);
        let items = pharmacy.advance_one_day().unwrap();
        let states: Vec<(i64, u8)> = items.iter().map(|i| (i.expires_in, i.benefit())).collect();
        assert_eq!(states, vec![(19, 29), (9, 6), (11, 36), (15, 40)]);
    }

    #[test]
    fn simulate_logs_one_snapshot_per_day() {
        let mut pharmacy = Pharmacy::new(Inventory::starter().items);
        let log = pharmacy.simulate(3).unwrap();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0][0].expires_in, 19);
        assert_eq!(log[2][0].expires_in, 17);
        assert_eq!(log[2], pharmacy.items());
    }

    #[test]
    fn simulate_zero_days_is_empty() {
        let mut pharmacy = Pharmacy::new(Inventory::starter().items);
        assert!(pharmacy.simulate(0).unwrap().is_empty());
        assert_eq!(pharmacy.items(), Inventory::starter().items.as_slice());
    }
}
