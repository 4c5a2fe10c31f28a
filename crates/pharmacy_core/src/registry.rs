use std::collections::HashMap;
use std::sync::Arc;

use crate::item::names;
use crate::rules::{DafalganRule, FervexRule, HerbalTeaRule, MagicPillRule, Rule, StandardRule};

/// Category name to rule lookup with a standard-rule fallback.
#[derive(Clone, Debug)]
pub struct Registry {
    rules: HashMap<String, Arc<dyn Rule>>,
    fallback: Arc<dyn Rule>,
}

impl Registry {
    /// Registry preloaded with every named category.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(names::HERBAL_TEA, HerbalTeaRule);
        registry.register(names::FERVEX, FervexRule);
        registry.register(names::MAGIC_PILL, MagicPillRule);
        registry.register(names::DAFALGAN, DafalganRule);
        registry
    }

    /// Registry with no bindings; every lookup resolves to the standard rule.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: Arc::new(StandardRule),
        }
    }

    /// Bind `name` to `rule`, replacing any previous binding.
    pub fn register(&mut self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.register_shared(name, Arc::new(rule));
    }

    pub fn register_shared(&mut self, name: impl Into<String>, rule: Arc<dyn Rule>) {
        self.rules.insert(name.into(), rule);
    }

    pub fn resolve(&self, name: &str) -> &dyn Rule {
        self.rules
            .get(name)
            .map(|rule| rule.as_ref())
            .unwrap_or_else(|| self.fallback.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of explicit bindings, excluding the fallback.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use crate::item::Item;
    use crate::rules::{dafalgan, fervex, herbal_tea, magic_pill, standard};

    #[test]
    fn known_categories_resolve_to_their_rules() {
        let registry = Registry::new();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.resolve(names::HERBAL_TEA).label(), herbal_tea::LABEL);
        assert_eq!(registry.resolve(names::FERVEX).label(), fervex::LABEL);
        assert_eq!(registry.resolve(names::MAGIC_PILL).label(), magic_pill::LABEL);
        assert_eq!(registry.resolve(names::DAFALGAN).label(), dafalgan::LABEL);
    }

    #[test]
    fn unknown_category_falls_back_to_standard() {
        let registry = Registry::new();
        assert!(!registry.contains("Doliprane"));
        assert_eq!(registry.resolve("Doliprane").label(), standard::LABEL);
        assert_eq!(registry.resolve("").label(), standard::LABEL);
        assert_eq!(Registry::empty().resolve(names::FERVEX).label(), standard::LABEL);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = Registry::new();
        assert_eq!(registry.resolve("fervex").label(), standard::LABEL);
    }

    #[derive(Debug)]
    struct Frozen;

    impl Rule for Frozen {
        fn label(&self) -> &'static str {
            "frozen"
        }

        fn update_benefit(&self, _item: &mut Item) -> Result<(), RuleError> {
            Ok(())
        }
    }

    #[test]
    fn register_overrides_existing_binding() {
        let mut registry = Registry::new();
        registry.register(names::FERVEX, Frozen);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.resolve(names::FERVEX).label(), "frozen");

        registry.register("Aspirin", Frozen);
        assert_eq!(registry.len(), 5);
        assert!(registry.contains("Aspirin"));
    }
}
