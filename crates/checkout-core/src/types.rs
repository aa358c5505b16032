//! # Domain Types
//!
//! Shopping lists, their items, and the running totals shown while shopping.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │    ShoppingList     │ owns   │    ShoppingItem     │                │
//! │  │  ─────────────────  │ ─────► │  ─────────────────  │                │
//! │  │  id (UUID)          │  0..n  │  id (UUID)          │                │
//! │  │  name               │        │  name, unit         │                │
//! │  │  currency_symbol    │        │  quantity (Decimal) │                │
//! │  │  modified_at        │        │  price_per_unit     │                │
//! │  └─────────┬───────────┘        │  is_checked         │                │
//! │            │                    └─────────────────────┘                │
//! │            ▼                                                            │
//! │  ┌─────────────────────┐                                               │
//! │  │     ListTotals      │  total = checked + remaining, always          │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Items are owned by their list, so dropping a list drops its items.
//! Quantities are decimals as well: `1.5 kg × 8.99` must not pick up
//! binary floating point noise.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::format::AmountFormatter;
use crate::locale::LocaleTag;
use crate::validation::{
    validate_currency_symbol, validate_item_name, validate_list_name, validate_price,
    validate_quantity, validate_total, ValidationResult,
};
use crate::DEFAULT_CURRENCY_SYMBOL;

/// Units offered by the item editor.
pub const COMMON_UNITS: [&str; 13] = [
    "units", "kg", "g", "lb", "oz", "L", "mL", "gal", "pcs", "box", "bag", "bottle", "can",
];

// =============================================================================
// Shopping Item
// =============================================================================

/// One line on a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShoppingItem {
    #[ts(as = "String")]
    pub id: Uuid,

    pub name: String,

    /// Amount bought, in `unit`. May be fractional (0.5 kg).
    #[ts(as = "String")]
    pub quantity: Decimal,

    /// Free-form unit label; empty means "no unit".
    pub unit: String,

    #[ts(as = "String")]
    pub price_per_unit: Decimal,

    pub is_checked: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Creates an unchecked item with a fresh id. Does not validate.
    pub fn new(
        name: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        price_per_unit: Decimal,
    ) -> Self {
        ShoppingItem {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            price_per_unit,
            is_checked: false,
            created_at: Utc::now(),
        }
    }

    /// `quantity × price_per_unit` (saturating).
    ///
    /// ## User Workflow
    /// ```text
    /// Chicken  1.5 kg × $8.99/kg
    ///      │
    ///      ▼
    /// total_price() ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Row shows $13.49 (13.485 rounded half-to-even)
    /// ```
    pub fn total_price(&self) -> Decimal {
        self.quantity.saturating_mul(self.price_per_unit)
    }

    /// Checks the rules the editors enforce before saving.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_item_name(&self.name)?;
        validate_price(self.price_per_unit)?;
        validate_quantity(self.quantity)?;
        Ok(())
    }

    /// Sets the line total and back-calculates the unit price.
    ///
    /// ## Behavior
    /// - quantity > 0: `price_per_unit = total ÷ quantity`
    /// - quantity = 0: quantity becomes 1, `price_per_unit = total`
    /// - negative total: rejected, item unchanged
    pub fn set_total(&mut self, total: Decimal) -> ValidationResult<()> {
        validate_total(total)?;

        if self.quantity > Decimal::ZERO {
            self.price_per_unit =
                total
                    .checked_div(self.quantity)
                    .ok_or_else(|| ValidationError::InvalidFormat {
                        field: "total".to_string(),
                        reason: "unit price out of range".to_string(),
                    })?;
        } else {
            self.quantity = Decimal::ONE;
            self.price_per_unit = total;
        }
        Ok(())
    }

    /// Quantity with up to two fraction digits, then the unit: `"1.5 kg"`.
    pub fn formatted_quantity(&self, locale: &LocaleTag) -> String {
        let quantity = AmountFormatter::new(locale).format_number(self.quantity, 0, 2);
        if self.unit.trim().is_empty() {
            quantity
        } else {
            format!("{} {}", quantity, self.unit)
        }
    }

    pub fn formatted_price_per_unit(&self, currency_symbol: &str, locale: &LocaleTag) -> String {
        AmountFormatter::new(locale).format(self.price_per_unit, currency_symbol)
    }

    pub fn formatted_total_price(&self, currency_symbol: &str, locale: &LocaleTag) -> String {
        AmountFormatter::new(locale).format(self.total_price(), currency_symbol)
    }

    /// Copy with a fresh id, unchecked.
    fn duplicate(&self) -> Self {
        ShoppingItem {
            id: Uuid::new_v4(),
            is_checked: false,
            created_at: Utc::now(),
            ..self.clone()
        }
    }
}

// =============================================================================
// List Totals
// =============================================================================

/// Snapshot of a list's sums for the totals card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ListTotals {
    #[ts(as = "String")]
    pub total: Decimal,
    #[ts(as = "String")]
    pub checked: Decimal,
    /// Always `total - checked`, never re-summed.
    #[ts(as = "String")]
    pub remaining: Decimal,
    pub item_count: usize,
    pub checked_item_count: usize,
}

// =============================================================================
// Shopping List
// =============================================================================

/// A named list of items sharing one currency symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShoppingList {
    #[ts(as = "String")]
    pub id: Uuid,

    pub name: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Bumped by every mutation; lists are shown most recent first.
    #[ts(as = "String")]
    pub modified_at: DateTime<Utc>,

    pub currency_symbol: String,

    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Creates an empty list. The name is trimmed and validated.
    pub fn new(name: &str, currency_symbol: &str) -> CoreResult<Self> {
        validate_list_name(name)?;
        validate_currency_symbol(currency_symbol)?;

        let now = Utc::now();
        Ok(ShoppingList {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            created_at: now,
            modified_at: now,
            currency_symbol: currency_symbol.trim().to_string(),
            items: Vec::new(),
        })
    }

    /// Creates an empty list using the default `$` symbol.
    pub fn with_default_currency(name: &str) -> CoreResult<Self> {
        Self::new(name, DEFAULT_CURRENCY_SYMBOL)
    }

    fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    fn item_mut(&mut self, id: Uuid) -> CoreResult<&mut ShoppingItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    // -------------------------------------------------------------------------
    // Aggregates
    // -------------------------------------------------------------------------

    /// Sum of every item's total price.
    pub fn total_amount(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.total_price()))
    }

    /// Sum over checked items only.
    pub fn checked_amount(&self) -> Decimal {
        self.items
            .iter()
            .filter(|item| item.is_checked)
            .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.total_price()))
    }

    /// Still to buy. Defined as `total - checked` so the two always add up.
    pub fn remaining_amount(&self) -> Decimal {
        self.total_amount().saturating_sub(self.checked_amount())
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn checked_item_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_checked).count()
    }

    /// Fraction of items checked, `0.0..=1.0`. Display only.
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 0.0;
        }
        self.checked_item_count() as f64 / self.item_count() as f64
    }

    pub fn totals(&self) -> ListTotals {
        let total = self.total_amount();
        let checked = self.checked_amount();
        ListTotals {
            total,
            checked,
            remaining: total.saturating_sub(checked),
            item_count: self.item_count(),
            checked_item_count: self.checked_item_count(),
        }
    }

    // -------------------------------------------------------------------------
    // Formatting
    // -------------------------------------------------------------------------

    pub fn formatted_total(&self, locale: &LocaleTag) -> String {
        AmountFormatter::new(locale).format(self.total_amount(), &self.currency_symbol)
    }

    pub fn formatted_checked_amount(&self, locale: &LocaleTag) -> String {
        AmountFormatter::new(locale).format(self.checked_amount(), &self.currency_symbol)
    }

    pub fn formatted_remaining_amount(&self, locale: &LocaleTag) -> String {
        AmountFormatter::new(locale).format(self.remaining_amount(), &self.currency_symbol)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    pub fn rename(&mut self, name: &str) -> CoreResult<()> {
        validate_list_name(name)?;
        self.name = name.trim().to_string();
        self.touch();
        Ok(())
    }

    pub fn set_currency_symbol(&mut self, currency_symbol: &str) -> CoreResult<()> {
        validate_currency_symbol(currency_symbol)?;
        self.currency_symbol = currency_symbol.trim().to_string();
        self.touch();
        Ok(())
    }

    /// Validates and appends an item, returning its id.
    pub fn add_item(&mut self, mut item: ShoppingItem) -> CoreResult<Uuid> {
        item.validate()?;
        item.name = item.name.trim().to_string();
        let id = item.id;
        self.items.push(item);
        self.touch();
        Ok(id)
    }

    /// Flips the checked flag; returns the new state.
    pub fn toggle_item(&mut self, id: Uuid) -> CoreResult<bool> {
        let item = self.item_mut(id)?;
        item.is_checked = !item.is_checked;
        let checked = item.is_checked;
        self.touch();
        Ok(checked)
    }

    /// Sets an item's total, back-calculating its unit price.
    pub fn set_item_total(&mut self, id: Uuid, total: Decimal) -> CoreResult<()> {
        self.item_mut(id)?.set_total(total)?;
        self.touch();
        Ok(())
    }

    pub fn remove_item(&mut self, id: Uuid) -> CoreResult<ShoppingItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;
        let removed = self.items.remove(index);
        self.touch();
        Ok(removed)
    }

    pub fn uncheck_all(&mut self) {
        for item in &mut self.items {
            item.is_checked = false;
        }
        self.touch();
    }

    /// Drops every checked item; returns how many were removed.
    pub fn remove_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_checked);
        self.touch();
        before - self.items.len()
    }

    /// Unchecked items first; insertion order kept within each group.
    pub fn sorted_items(&self) -> Vec<&ShoppingItem> {
        let mut items: Vec<&ShoppingItem> = self.items.iter().collect();
        items.sort_by_key(|item| item.is_checked);
        items
    }

    /// New list named `"{name} (Copy)"` with fresh, unchecked items.
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        ShoppingList {
            id: Uuid::new_v4(),
            name: format!("{} (Copy)", self.name),
            created_at: now,
            modified_at: now,
            currency_symbol: self.currency_symbol.clone(),
            items: self.items.iter().map(ShoppingItem::duplicate).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
