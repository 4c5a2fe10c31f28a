//! Per-category update rules.
//!
//! A [`Rule`] supplies the category-specific hooks; [`crate::engine::update`]
//! runs them in the fixed benefit / expiration / post-expiration order.

pub mod dafalgan;
pub mod fervex;
pub mod herbal_tea;
pub mod magic_pill;
pub mod standard;

use std::fmt::Debug;

use crate::error::RuleError;
use crate::item::Item;

pub use dafalgan::DafalganRule;
pub use fervex::FervexRule;
pub use herbal_tea::HerbalTeaRule;
pub use magic_pill::MagicPillRule;
pub use standard::StandardRule;

pub trait Rule: Send + Sync + Debug {
    /// Stable label used in logs and error messages.
    fn label(&self) -> &'static str;

    /// Apply the daily benefit change, reading the pre-decrement `expires_in`.
    fn update_benefit(&self, item: &mut Item) -> Result<(), RuleError>;

    /// Whether the expiration counter advances for this category.
    fn expires(&self) -> bool {
        true
    }

    /// React to `expires_in` being negative after the daily decrement.
    fn handle_expired(&self, _item: &mut Item) -> Result<(), RuleError> {
        Ok(())
    }
}
