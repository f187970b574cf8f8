use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError};

pub const CART_STORAGE_KEY: &str = "cart";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CartError {
    #[error("Item already in cart!")]
    AlreadyInCart(String),
    #[error("Your cart is empty!")]
    Empty,
}

/// What an "add to cart" button carries. Quantity is always 1 on insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCartItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// One row of the checkout summary.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryLine {
    pub label: String,
    pub amount: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutSummary {
    pub lines: Vec<SummaryLine>,
    pub total: u64,
}

/// Cart state plus the store it is mirrored into after every mutation.
pub struct CartController<S: KeyValueStore> {
    items: Vec<CartItem>,
    store: S,
}

impl<S: KeyValueStore> CartController<S> {
    /// Rehydrates from `cart`. Anything unparseable is dropped.
    pub fn load(store: S) -> Self {
        let items = match store.get(CART_STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(mut items) => {
                    for item in items.iter_mut() {
                        item.quantity = item.quantity.max(1);
                    }
                    items
                }
                Err(e) => {
                    warn!("Discarding unreadable stored cart: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!("Cart loaded with {} items", items.len());
        Self { items, store }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn add_item(&mut self, item: NewCartItem) -> Result<&CartItem, CartError> {
        if self.contains(&item.id) {
            return Err(CartError::AlreadyInCart(item.id));
        }
        self.items.push(CartItem {
            id: item.id,
            name: item.name,
            price: item.price,
            image: item.image,
            quantity: 1,
        });
        self.persist();
        Ok(&self.items[self.items.len() - 1])
    }

    /// Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Sets the quantity, never below 1. Returns false when `id` is unknown.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.quantity = quantity.clamp(1, i64::from(u32::MAX)) as u32;
        self.persist();
        true
    }

    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.line_total()))
    }

    pub fn checkout_summary(&self) -> Result<CheckoutSummary, CartError> {
        if self.items.is_empty() {
            return Err(CartError::Empty);
        }
        let lines = self
            .items
            .iter()
            .map(|item| SummaryLine {
                label: format!("{} x{}", item.name, item.quantity),
                amount: item.line_total(),
            })
            .collect();
        Ok(CheckoutSummary {
            lines,
            total: self.total(),
        })
    }

    fn persist(&self) {
        if let Err(e) = self.try_persist() {
            warn!("Cart not saved: {}", e);
        }
    }

    fn try_persist(&self) -> Result<(), StorageError> {
        // Serializing plain strings and integers cannot fail.
        let raw = serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string());
        self.store.set(CART_STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn item(id: &str, price: u64) -> NewCartItem {
        NewCartItem {
            id: id.to_string(),
            name: format!("App {}", id),
            price,
            image: "fas fa-mobile".to_string(),
        }
    }

    fn expected_total(cart: &CartController<MemoryStore>) -> u64 {
        cart.items()
            .iter()
            .map(|i| i.price * u64::from(i.quantity))
            .sum()
    }

    #[test]
    fn adding_a_duplicate_is_rejected_without_touching_quantity() {
        let mut cart = CartController::load(MemoryStore::default());
        cart.add_item(item("taskmaster", 49)).unwrap();
        cart.update_quantity("taskmaster", 3);

        let err = cart.add_item(item("taskmaster", 49)).unwrap_err();
        assert_eq!(err, CartError::AlreadyInCart("taskmaster".to_string()));
        assert_eq!(err.to_string(), "Item already in cart!");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn quantity_is_clamped_to_one() {
        let mut cart = CartController::load(MemoryStore::default());
        cart.add_item(item("a", 10)).unwrap();

        assert!(cart.update_quantity("a", 0));
        assert_eq!(cart.items()[0].quantity, 1);
        assert!(cart.update_quantity("a", -7));
        assert_eq!(cart.items()[0].quantity, 1);
        assert!(cart.update_quantity("a", 12));
        assert_eq!(cart.items()[0].quantity, 12);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut cart = CartController::load(MemoryStore::default());
        cart.add_item(item("a", 10)).unwrap();

        assert!(!cart.update_quantity("b", 5));
        assert!(!cart.remove_item("b"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn total_tracks_every_mutation() {
        let mut cart = CartController::load(MemoryStore::default());
        assert_eq!(cart.total(), 0);

        cart.add_item(item("a", 49)).unwrap();
        cart.add_item(item("b", 29)).unwrap();
        cart.add_item(item("c", 79)).unwrap();
        assert_eq!(cart.total(), expected_total(&cart));

        cart.update_quantity("a", 3);
        cart.update_quantity("c", 2);
        assert_eq!(cart.total(), 49 * 3 + 29 + 79 * 2);

        cart.remove_item("b");
        cart.update_quantity("a", 0);
        assert_eq!(cart.total(), expected_total(&cart));
        assert_eq!(cart.total(), 49 + 79 * 2);
    }

    #[test]
    fn cart_survives_a_reload() {
        let store = MemoryStore::default();
        {
            let mut cart = CartController::load(store.clone());
            cart.add_item(item("a", 49)).unwrap();
            cart.add_item(item("b", 29)).unwrap();
            cart.update_quantity("b", 4);
        }

        let reloaded = CartController::load(store);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.items()[1].id, "b");
        assert_eq!(reloaded.items()[1].quantity, 4);
        assert_eq!(reloaded.total(), 49 + 29 * 4);
    }

    #[test]
    fn corrupt_storage_yields_an_empty_cart() {
        let store = MemoryStore::default();
        store.set(CART_STORAGE_KEY, "{not json").unwrap();
        let cart = CartController::load(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn stored_zero_quantities_are_repaired() {
        let store = MemoryStore::default();
        store
            .set(
                CART_STORAGE_KEY,
                r#"[{"id":"a","name":"A","price":5,"image":"x","quantity":0}]"#,
            )
            .unwrap();
        let cart = CartController::load(store);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn empty_cart_has_no_checkout_summary() {
        let cart = CartController::load(MemoryStore::default());
        assert_eq!(cart.checkout_summary(), Err(CartError::Empty));
    }

    #[test]
    fn checkout_summary_lists_each_line() {
        let mut cart = CartController::load(MemoryStore::default());
        cart.add_item(item("a", 49)).unwrap();
        cart.update_quantity("a", 2);

        let summary = cart.checkout_summary().unwrap();
        assert_eq!(summary.lines[0].label, "App a x2");
        assert_eq!(summary.lines[0].amount, 98);
        assert_eq!(summary.total, 98);
    }

    #[test]
    fn removing_the_last_item_empties_storage_too() {
        let store = MemoryStore::default();
        let mut cart = CartController::load(store.clone());
        cart.add_item(item("a", 49)).unwrap();
        cart.remove_item("a");

        assert!(cart.is_empty());
        assert_eq!(store.get(CART_STORAGE_KEY).as_deref(), Some("[]"));
    }
}
