//! Collaborator traits and injected dependencies.
//!
//! The state layer never talks to a transport directly. It sees two opaque
//! asynchronous collaborators - the catalog backend and the order backend -
//! behind dyn-compatible traits, injected through [`ShopEnvironment`].
//! Reducers capture `Arc` clones of these services inside the effects they
//! return; the runtime awaits them off the serialized dispatch path.

use crate::types::{CartItem, Filters, Order, PageRequest, Product, ProductId, ProductPage};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Boxed future returned by collaborator methods
///
/// Explicit `Pin<Box<dyn Future>>` returns instead of `async fn` keep the
/// traits dyn-compatible (`Arc<dyn CatalogService>`), which the effect
/// system requires.
pub type ServiceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Failure reported by the catalog backend
///
/// Carries a human-readable message; the state layer stores it verbatim on
/// the affected domain and keeps the previous data untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

impl FetchError {
    /// Creates a fetch error from a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure reported by the order backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Placement was attempted with no items
    #[error("Cart is empty")]
    EmptyCart,

    /// The order backend rejected or failed the request
    #[error("{0}")]
    Service(String),
}

/// Catalog backend collaborator
///
/// Provides the product list (filtered, sorted, paginated server-side) and
/// single-product lookups. Implementations must be `Send + Sync`; the
/// runtime may call them from any task.
pub trait CatalogService: Send + Sync {
    /// Fetch one page of products matching the filters
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the backend is unreachable or rejects
    /// the request.
    fn list_products(
        &self,
        filters: Filters,
        page: PageRequest,
    ) -> ServiceFuture<'_, Result<ProductPage, FetchError>>;

    /// Fetch a single product by id
    ///
    /// `Ok(None)` signals "not found" - it is not a transport error.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the backend is unreachable or rejects
    /// the request.
    fn product(&self, id: ProductId) -> ServiceFuture<'_, Result<Option<Product>, FetchError>>;
}

/// Order backend collaborator
pub trait OrderService: Send + Sync {
    /// Place an order for the given cart lines
    ///
    /// The backend mints the order identity, computes the final total, and
    /// stamps the creation time.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] for an empty item list and
    /// [`OrderError::Service`] for any other failure.
    fn place_order(&self, items: Vec<CartItem>) -> ServiceFuture<'_, Result<Order, OrderError>>;
}

/// Injected dependencies for the shop reducer
///
/// Holds the two backend collaborators. Cloning is cheap (shared `Arc`s),
/// which lets effects capture what they need without borrowing state.
#[derive(Clone)]
pub struct ShopEnvironment {
    /// Catalog backend
    pub catalog: Arc<dyn CatalogService>,
    /// Order backend
    pub orders: Arc<dyn OrderService>,
}

impl ShopEnvironment {
    /// Creates a new environment from the two collaborators
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>, orders: Arc<dyn OrderService>) -> Self {
        Self { catalog, orders }
    }
}

impl std::fmt::Debug for ShopEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopEnvironment").finish_non_exhaustive()
    }
}
