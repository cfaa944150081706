//! Cart state: stock-bounded line items with recomputed aggregates.
//!
//! Every mutation re-derives `total_items` and `total_price` from the
//! lines, so the totals can never drift from what the items imply. The
//! stock bound is enforced by construction: quantities are clamped (or the
//! request rejected) at the mutation site, never validated after the fact.

use crate::types::{CartItem, Product, ProductId, round2};

/// State of the cart domain
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartState {
    /// Cart lines, one per product, in insertion order
    pub items: Vec<CartItem>,
    /// Sum of all line quantities
    pub total_items: u32,
    /// Sum of all line totals, rounded to two decimals
    pub total_price: f64,
}

impl CartState {
    /// Whether the cart has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The line for a product, if present
    #[must_use]
    pub fn item(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id == *product_id)
    }

    /// Whether a product has a line in the cart
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.item(product_id).is_some()
    }

    /// Add a product to the cart
    ///
    /// A zero quantity is a no-op. For a product already in the cart the
    /// requested quantity is added to the existing line and the sum is
    /// clamped to the available stock. A brand-new line whose requested
    /// quantity exceeds stock is rejected outright rather than clamped -
    /// the asymmetry is deliberate and matches the shipped behavior.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == product.id)
        {
            existing.quantity = (existing.quantity + quantity).min(product.stock);
        } else {
            if quantity > product.stock {
                return;
            }
            self.items.push(CartItem { product, quantity });
        }

        self.recalculate();
    }

    /// Remove a product's line entirely
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|item| item.product.id != *product_id);
        self.recalculate();
    }

    /// Set the quantity of an existing line
    ///
    /// Zero removes the line; any other value is clamped to the product's
    /// stock. Unknown products are a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.items.retain(|item| item.product.id != *product_id);
        } else if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.id == *product_id)
        {
            item.quantity = quantity.min(item.product.stock);
        }

        self.recalculate();
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.items.clear();
        self.recalculate();
    }

    /// Re-derive the totals from the lines
    fn recalculate(&mut self) {
        self.total_items = self.items.iter().map(|item| item.quantity).sum();
        self.total_price = round2(self.items.iter().map(CartItem::line_total).sum());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use proptest::prelude::*;

    #[test]
    fn add_creates_a_line_with_the_requested_quantity() {
        let mut cart = CartState::default();
        cart.add(fixtures::product("p-1", 19.99, 10), 2);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_items, 2);
        assert!((cart.total_price - 39.98).abs() < 1e-9);
    }

    #[test]
    fn add_zero_quantity_is_a_no_op() {
        let mut cart = CartState::default();
        cart.add(fixtures::product("p-1", 10.0, 5), 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items, 0);
    }

    #[test]
    fn add_new_line_over_stock_is_rejected_not_clamped() {
        let mut cart = CartState::default();
        cart.add(fixtures::product("p-1", 10.0, 5), 6);

        assert!(cart.is_empty());
    }

    #[test]
    fn add_to_existing_line_clamps_the_sum_to_stock() {
        let product = fixtures::product("p-1", 10.0, 5);
        let mut cart = CartState::default();

        cart.add(product.clone(), 3);
        cart.add(product, 4);

        assert_eq!(cart.items[0].quantity, 5, "3 + 4 clamps to stock of 5");
        assert_eq!(cart.total_items, 5);
        assert!((cart.total_price - 50.0).abs() < 1e-9);
    }

    #[test]
    fn remove_deletes_the_line_and_recomputes_totals() {
        let mut cart = CartState::default();
        cart.add(fixtures::product("p-1", 10.0, 5), 2);
        cart.add(fixtures::product("p-2", 7.5, 5), 1);

        cart.remove(&crate::types::ProductId::new("p-1"));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_items, 1);
        assert!((cart.total_price - 7.5).abs() < 1e-9);
    }

    #[test]
    fn update_quantity_zero_removes_the_line() {
        let mut cart = CartState::default();
        cart.add(fixtures::product("p-1", 10.0, 5), 2);

        cart.update_quantity(&crate::types::ProductId::new("p-1"), 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items, 0);
        assert!(cart.total_price.abs() < 1e-9);
    }

    #[test]
    fn update_quantity_clamps_to_stock() {
        let mut cart = CartState::default();
        cart.add(fixtures::product("p-1", 10.0, 5), 2);

        cart.update_quantity(&crate::types::ProductId::new("p-1"), 9);

        assert_eq!(cart.items[0].quantity, 5);
    }

    #[test]
    fn update_quantity_for_unknown_product_is_a_no_op() {
        let mut cart = CartState::default();
        cart.add(fixtures::product("p-1", 10.0, 5), 2);

        cart.update_quantity(&crate::types::ProductId::new("p-404"), 3);

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn clear_empties_lines_and_zeroes_totals() {
        let mut cart = CartState::default();
        cart.add(fixtures::product("p-1", 10.0, 5), 2);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items, 0);
        assert!(cart.total_price.abs() < f64::EPSILON);
    }

    /// A single cart mutation for the property tests
    #[derive(Debug, Clone)]
    enum CartOp {
        Add(u32),
        Update(u32),
        Remove,
    }

    fn cart_op() -> impl Strategy<Value = CartOp> {
        prop_oneof![
            (0u32..20).prop_map(CartOp::Add),
            (0u32..20).prop_map(CartOp::Update),
            Just(CartOp::Remove),
        ]
    }

    proptest! {
        /// Any sequence of operations on a fixed product keeps the line
        /// quantity within [1, stock] (a zero-quantity line never exists)
        #[test]
        fn quantity_stays_within_stock(ops in proptest::collection::vec(cart_op(), 0..40)) {
            let product = fixtures::product("p-1", 12.34, 8);
            let id = product.id.clone();
            let mut cart = CartState::default();

            for op in ops {
                match op {
                    CartOp::Add(quantity) => cart.add(product.clone(), quantity),
                    CartOp::Update(quantity) => cart.update_quantity(&id, quantity),
                    CartOp::Remove => cart.remove(&id),
                }

                if let Some(item) = cart.item(&id) {
                    prop_assert!(item.quantity >= 1);
                    prop_assert!(item.quantity <= product.stock);
                }
            }
        }

        /// Totals are always a pure function of the lines
        #[test]
        fn totals_are_recomputable_from_items(ops in proptest::collection::vec(cart_op(), 0..40)) {
            let product = fixtures::product("p-1", 12.34, 8);
            let id = product.id.clone();
            let mut cart = CartState::default();

            for op in ops {
                match op {
                    CartOp::Add(quantity) => cart.add(product.clone(), quantity),
                    CartOp::Update(quantity) => cart.update_quantity(&id, quantity),
                    CartOp::Remove => cart.remove(&id),
                }

                let expected_items: u32 = cart.items.iter().map(|i| i.quantity).sum();
                let expected_price = round2(cart.items.iter().map(CartItem::line_total).sum());
                prop_assert_eq!(cart.total_items, expected_items);
                prop_assert!((cart.total_price - expected_price).abs() < 1e-9);
            }
        }
    }
}
