//! Shopping domain for the Shopfront client: catalog, cart, and orders.
//!
//! This crate is the state & effect orchestration layer of a mobile
//! shopping app. The presentation layer dispatches intents
//! ([`ShopAction`]) into a store; pure reducers apply the synchronous
//! mutations; effectful intents spawn cancellable asynchronous calls
//! against the backend collaborators, whose results re-enter as ordinary
//! actions.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐  intents   ┌─────────────────────────┐
//! │  Presentation  │ ─────────► │  Store<ShopState, …>    │
//! │  (excluded)    │ ◄───────── │  ShopReducer            │
//! └────────────────┘  selectors └───────────┬─────────────┘
//!                                           │ effects (latest-wins,
//!                                           │ debounce)
//!                                           ▼
//!                               ┌─────────────────────────┐
//!                               │ CatalogService /        │
//!                               │ OrderService            │
//!                               └─────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use shopfront_runtime::Store;
//! use shopfront_shop::{ShopAction, ShopEnvironment, ShopReducer, ShopState};
//! use std::sync::Arc;
//!
//! # async fn example(
//! #     catalog: Arc<dyn shopfront_shop::CatalogService>,
//! #     orders: Arc<dyn shopfront_shop::OrderService>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//! let env = ShopEnvironment::new(catalog, orders);
//! let store = Store::new(ShopState::default(), ShopReducer::new(), env);
//!
//! store.send(ShopAction::FetchCatalog { load_more: false }).await?;
//! store
//!     .send(ShopAction::SetSearch {
//!         query: "desk".to_string(),
//!     })
//!     .await?;
//!
//! let visible = store.state(|s| s.catalog.items.len()).await;
//! println!("{visible} products visible");
//! # Ok(())
//! # }
//! ```

pub mod cart;
pub mod catalog;
pub mod environment;
pub mod order;
pub mod reducer;
pub mod selectors;
pub mod types;

// Re-export commonly used types
pub use cart::CartState;
pub use catalog::CatalogState;
pub use environment::{
    CatalogService, FetchError, OrderError, OrderService, ServiceFuture, ShopEnvironment,
};
pub use order::OrderState;
pub use reducer::{
    CATALOG_FETCH, ORDER_PLACE, PRODUCT_FETCH, SEARCH_DEBOUNCE, SEARCH_DEBOUNCE_WINDOW, ShopAction,
    ShopReducer, ShopState,
};
pub use types::{
    CartItem, Filters, Order, OrderId, OrderStatus, PageRequest, Pagination, Product,
    ProductCategory, ProductId, ProductPage, SortOption, round2,
};

/// Product fixtures shared by the unit test modules
#[cfg(test)]
pub(crate) mod fixtures {
    use crate::types::{Product, ProductCategory, ProductId};
    use chrono::Utc;

    /// A product with sensible defaults for the fields under test
    pub(crate) fn product(id: &str, price: f64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: "A fixture product".to_string(),
            price,
            category: ProductCategory::Electronics,
            image: format!("https://img.example/{id}.jpg"),
            rating: 4.0,
            review_count: 12,
            stock,
            brand: "Acme".to_string(),
            tags: vec!["fixture".to_string()],
            created_at: Utc::now(),
        }
    }
}
