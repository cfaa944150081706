//! The shop reducer: every intent and result action, matched exhaustively.
//!
//! Synchronous mutations happen inline; network-bound work is returned as
//! effects for the runtime to execute. Concurrency policy per intent class:
//!
//! - catalog list fetch, product detail fetch, and order placement are
//!   latest-wins (`Effect::Cancellable`) - a newer request supersedes an
//!   in-flight one of the same class;
//! - free-text search is debounced: a burst of keystrokes collapses into a
//!   single refetch 500 ms after the last one;
//! - category, sort, and filter-reset changes refetch immediately.

use crate::catalog::CatalogState;
use crate::cart::CartState;
use crate::environment::ShopEnvironment;
use crate::order::OrderState;
use crate::types::{
    Order, PageRequest, Product, ProductCategory, ProductId, ProductPage, SortOption,
};
use shopfront_core::effect::{Effect, EffectId};
use shopfront_core::reducer::Reducer;
use shopfront_core::{SmallVec, smallvec};
use std::sync::Arc;
use std::time::Duration;

/// Latest-wins class for catalog list fetches
pub const CATALOG_FETCH: EffectId = EffectId::new("catalog-fetch");

/// Latest-wins class for product detail fetches
pub const PRODUCT_FETCH: EffectId = EffectId::new("product-fetch");

/// Latest-wins class for order placement
pub const ORDER_PLACE: EffectId = EffectId::new("order-place");

/// Debounce class for free-text search
pub const SEARCH_DEBOUNCE: EffectId = EffectId::new("search-debounce");

/// Quiet period after the last keystroke before the search refetch fires
pub const SEARCH_DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// The whole application state: three independent domains behind one
/// serialized mutation point
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShopState {
    /// Catalog domain
    pub catalog: CatalogState,
    /// Cart domain
    pub cart: CartState,
    /// Order domain
    pub order: OrderState,
}

/// All inputs to the shop reducer
///
/// The first group are intents dispatched by the presentation layer; the
/// second are results that asynchronous work feeds back. Both kinds go
/// through the same serialized dispatch.
#[derive(Clone, Debug)]
pub enum ShopAction {
    // ========== Intents ==========
    /// Fetch the product list; `load_more` appends the next page instead
    /// of replacing the window
    FetchCatalog {
        /// Append the next page instead of refetching page one
        load_more: bool,
    },

    /// Fetch a single product for the detail screen
    FetchProductDetail {
        /// Product to fetch
        id: ProductId,
    },

    /// Update the free-text search filter (debounced refetch)
    SetSearch {
        /// New search text
        query: String,
    },

    /// Set or clear the category filter (immediate refetch)
    SetCategory {
        /// Category to filter by; `None` shows all
        category: Option<ProductCategory>,
    },

    /// Change the list ordering (immediate refetch)
    SetSortBy {
        /// New sort option
        sort_by: SortOption,
    },

    /// Restore default filters and refetch
    ResetFilters,

    /// Add a product to the cart
    AddToCart {
        /// Product snapshot to add
        product: Product,
        /// Requested quantity
        quantity: u32,
    },

    /// Remove a product's line from the cart
    RemoveFromCart {
        /// Product whose line to remove
        product_id: ProductId,
    },

    /// Set the quantity of an existing cart line (zero removes it)
    UpdateQuantity {
        /// Product whose line to update
        product_id: ProductId,
        /// New quantity
        quantity: u32,
    },

    /// Empty the cart
    ClearCart,

    /// Start the checkout workflow for the current cart
    PlaceOrder,

    /// Dismiss the order confirmation
    ClearCurrentOrder,

    // ========== Results ==========
    /// A catalog page arrived
    CatalogLoaded(ProductPage),

    /// The catalog fetch failed
    CatalogFailed {
        /// Human-readable failure reason
        message: String,
    },

    /// The product detail arrived
    ProductLoaded(Product),

    /// The product detail fetch failed (including "not found")
    ProductFailed {
        /// Human-readable failure reason
        message: String,
    },

    /// The order backend confirmed the placement
    OrderPlaced(Order),

    /// The order backend rejected or failed the placement
    OrderFailed {
        /// Human-readable failure reason
        message: String,
    },
}

/// Reducer for the whole shop state
#[derive(Clone, Debug, Default)]
pub struct ShopReducer;

impl ShopReducer {
    /// Creates a new `ShopReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Effect that refetches page one of the catalog
    ///
    /// Filter changes funnel through this so they all share the same
    /// reset-and-replace path in `FetchCatalog`.
    fn refetch_catalog() -> Effect<ShopAction> {
        Effect::Future(Box::pin(async {
            Some(ShopAction::FetchCatalog { load_more: false })
        }))
    }

    /// Latest-wins fetch of one catalog page
    fn fetch_catalog_effect(state: &CatalogState, page: u32, env: &ShopEnvironment) -> Effect<ShopAction> {
        let filters = state.filters.clone();
        let limit = state.pagination.limit;
        let catalog = Arc::clone(&env.catalog);

        Effect::Future(Box::pin(async move {
            let result = catalog.list_products(filters, PageRequest { page, limit }).await;
            Some(match result {
                Ok(page) => ShopAction::CatalogLoaded(page),
                Err(error) => ShopAction::CatalogFailed {
                    message: error.to_string(),
                },
            })
        }))
        .cancellable(CATALOG_FETCH)
    }
}

impl Reducer for ShopReducer {
    type State = ShopState;
    type Action = ShopAction;
    type Environment = ShopEnvironment;

    #[allow(clippy::too_many_lines)] // One arm per action keeps the dispatch in one place
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Catalog ==========
            ShopAction::FetchCatalog { load_more } => {
                if load_more && !state.catalog.can_load_more() {
                    return SmallVec::new();
                }

                let page = state.catalog.begin_list_fetch(load_more);
                smallvec![Self::fetch_catalog_effect(&state.catalog, page, env)]
            },

            ShopAction::CatalogLoaded(page) => {
                state.catalog.apply_page(page);
                SmallVec::new()
            },

            ShopAction::CatalogFailed { message } => {
                state.catalog.fail_list_fetch(message);
                SmallVec::new()
            },

            ShopAction::FetchProductDetail { id } => {
                state.catalog.begin_product_fetch();

                let catalog = Arc::clone(&env.catalog);
                smallvec![
                    Effect::Future(Box::pin(async move {
                        let result = catalog.product(id).await;
                        Some(match result {
                            Ok(Some(product)) => ShopAction::ProductLoaded(product),
                            Ok(None) => ShopAction::ProductFailed {
                                message: "Product not found".to_string(),
                            },
                            Err(error) => ShopAction::ProductFailed {
                                message: error.to_string(),
                            },
                        })
                    }))
                    .cancellable(PRODUCT_FETCH)
                ]
            },

            ShopAction::ProductLoaded(product) => {
                state.catalog.apply_product(product);
                SmallVec::new()
            },

            ShopAction::ProductFailed { message } => {
                state.catalog.fail_product_fetch(message);
                SmallVec::new()
            },

            // ========== Filters ==========
            ShopAction::SetSearch { query } => {
                state.catalog.filters.search = query;
                smallvec![
                    Self::refetch_catalog().debounced(SEARCH_DEBOUNCE, SEARCH_DEBOUNCE_WINDOW)
                ]
            },

            ShopAction::SetCategory { category } => {
                state.catalog.filters.category = category;
                smallvec![Self::refetch_catalog()]
            },

            ShopAction::SetSortBy { sort_by } => {
                state.catalog.filters.sort_by = sort_by;
                smallvec![Self::refetch_catalog()]
            },

            ShopAction::ResetFilters => {
                state.catalog.reset_filters();
                smallvec![Self::refetch_catalog()]
            },

            // ========== Cart ==========
            ShopAction::AddToCart { product, quantity } => {
                state.cart.add(product, quantity);
                SmallVec::new()
            },

            ShopAction::RemoveFromCart { product_id } => {
                state.cart.remove(&product_id);
                SmallVec::new()
            },

            ShopAction::UpdateQuantity {
                product_id,
                quantity,
            } => {
                state.cart.update_quantity(&product_id, quantity);
                SmallVec::new()
            },

            ShopAction::ClearCart => {
                state.cart.clear();
                SmallVec::new()
            },

            // ========== Order workflow ==========
            ShopAction::PlaceOrder => {
                state.order.begin_placement();

                // Empty-cart guard: fail synchronously, never contact the
                // backend.
                if state.cart.is_empty() {
                    state.order.fail_placement("Cart is empty".to_string());
                    return SmallVec::new();
                }

                let items = state.cart.items.clone();
                let orders = Arc::clone(&env.orders);
                smallvec![
                    Effect::Future(Box::pin(async move {
                        let result = orders.place_order(items).await;
                        Some(match result {
                            Ok(order) => ShopAction::OrderPlaced(order),
                            Err(error) => ShopAction::OrderFailed {
                                message: error.to_string(),
                            },
                        })
                    }))
                    .cancellable(ORDER_PLACE)
                ]
            },

            ShopAction::OrderPlaced(order) => {
                // Success consumes the cart in the same atomic step.
                state.order.confirm(order);
                state.cart.clear();
                SmallVec::new()
            },

            ShopAction::OrderFailed { message } => {
                // Cart is left untouched so the user can retry.
                state.order.fail_placement(message);
                SmallVec::new()
            },

            ShopAction::ClearCurrentOrder => {
                state.order.clear_current();
                SmallVec::new()
            },
        }
    }
}
