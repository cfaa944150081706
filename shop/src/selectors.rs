//! Read-only selectors over an immutable state snapshot.
//!
//! Plain pure functions - no memoization, the derivations are cheap. The
//! presentation layer reads through these instead of reaching into the
//! state structure directly.

use crate::reducer::ShopState;
use crate::types::{CartItem, Filters, Order, Pagination, Product, ProductId};

/// The materialized product list
#[must_use]
pub fn products(state: &ShopState) -> &[Product] {
    &state.catalog.items
}

/// Whether a catalog list fetch is in flight
#[must_use]
pub const fn products_loading(state: &ShopState) -> bool {
    state.catalog.loading
}

/// Last catalog list error, if any
#[must_use]
pub fn products_error(state: &ShopState) -> Option<&str> {
    state.catalog.error.as_deref()
}

/// The cached product for the detail screen
#[must_use]
pub const fn current_product(state: &ShopState) -> Option<&Product> {
    state.catalog.current_product.as_ref()
}

/// Whether a product detail fetch is in flight
#[must_use]
pub const fn product_loading(state: &ShopState) -> bool {
    state.catalog.loading_product
}

/// Last product detail error, if any
#[must_use]
pub fn product_error(state: &ShopState) -> Option<&str> {
    state.catalog.product_error.as_deref()
}

/// The active filters
#[must_use]
pub const fn filters(state: &ShopState) -> &Filters {
    &state.catalog.filters
}

/// The pagination cursor
#[must_use]
pub const fn pagination(state: &ShopState) -> &Pagination {
    &state.catalog.pagination
}

/// Whether another catalog page exists
#[must_use]
pub const fn has_more(state: &ShopState) -> bool {
    state.catalog.pagination.has_more
}

/// The cart lines
#[must_use]
pub fn cart_items(state: &ShopState) -> &[CartItem] {
    &state.cart.items
}

/// Total units across all cart lines
#[must_use]
pub const fn cart_total_items(state: &ShopState) -> u32 {
    state.cart.total_items
}

/// Cart total price, rounded to two decimals
#[must_use]
pub const fn cart_total_price(state: &ShopState) -> f64 {
    state.cart.total_price
}

/// The cart line for a product, if present
#[must_use]
pub fn cart_item_by_product_id<'a>(
    state: &'a ShopState,
    product_id: &ProductId,
) -> Option<&'a CartItem> {
    state.cart.item(product_id)
}

/// Whether a product has a line in the cart
#[must_use]
pub fn is_product_in_cart(state: &ShopState, product_id: &ProductId) -> bool {
    state.cart.contains(product_id)
}

/// The order confirmed by the most recent placement, until dismissed
#[must_use]
pub const fn current_order(state: &ShopState) -> Option<&Order> {
    state.order.current_order.as_ref()
}

/// Whether an order placement is in flight
#[must_use]
pub const fn order_loading(state: &ShopState) -> bool {
    state.order.loading
}

/// Last order placement error, if any
#[must_use]
pub fn order_error(state: &ShopState) -> Option<&str> {
    state.order.error.as_deref()
}

/// Confirmed orders, most recent first
#[must_use]
pub fn order_history(state: &ShopState) -> &[Order] {
    &state.order.history
}
