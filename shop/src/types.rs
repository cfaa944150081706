//! Domain types for the shopping client.
//!
//! Everything the state layer holds or exchanges with the backend
//! collaborators lives here: products and their closed category set, cart
//! lines, orders, filters, and pagination. Products are immutable once
//! fetched; cart and order state own snapshots of them rather than live
//! references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Round a price to two decimal places
///
/// Totals are always recomputed from line items and rounded once at the
/// end, never accumulated incrementally.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Backend-assigned identifier for a product
///
/// Opaque to this layer: the catalog backend mints them and we only ever
/// compare and echo them back.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a `ProductId` from a backend identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product category - a closed set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    /// Electronics and gadgets
    Electronics,
    /// Apparel
    Clothing,
    /// Home furniture
    Furniture,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Electronics => write!(f, "Electronics"),
            Self::Clothing => write!(f, "Clothing"),
            Self::Furniture => write!(f, "Furniture"),
        }
    }
}

/// Ordering applied to the product list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Newest first (by creation timestamp, descending)
    #[default]
    Newest,
    /// Price ascending
    PriceAsc,
    /// Price descending
    PriceDesc,
    /// Rating descending
    Rating,
}

/// A product as returned by the catalog backend
///
/// Immutable once fetched. Cart lines and orders keep their own snapshot
/// of the product they were created from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Long-form description
    pub description: String,
    /// Unit price, non-negative
    pub price: f64,
    /// Category from the closed set
    pub category: ProductCategory,
    /// Image reference (URL or asset key)
    pub image: String,
    /// Average rating, 0 to 5
    pub rating: f64,
    /// Number of reviews behind the rating
    pub review_count: u32,
    /// Units in stock
    pub stock: u32,
    /// Brand name
    pub brand: String,
    /// Free-form tags
    pub tags: Vec<String>,
    /// When the product entered the catalog
    pub created_at: DateTime<Utc>,
}

/// A cart line: a product snapshot plus a quantity
///
/// Invariant: `quantity` is positive and never exceeds
/// `product.stock` - enforced by the cart operations, by clamping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Snapshot of the product when it was added
    pub product: Product,
    /// Units of the product in the cart
    pub quantity: u32,
}

impl CartItem {
    /// Price contribution of this line (unrounded)
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Filters applied to the catalog list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Free-text search; matches name, description, brand, or any tag
    /// (case-insensitive substring)
    pub search: String,
    /// Category filter; `None` means all categories
    pub category: Option<ProductCategory>,
    /// Ordering of the result list
    pub sort_by: SortOption,
}

/// Page window requested from the catalog backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

/// Pagination cursor tracked alongside the materialized list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number of the last applied response
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total matching items known to the backend
    pub total: u32,
    /// Whether another page exists (`page * limit < total`)
    pub has_more: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            total: 0,
            has_more: true,
        }
    }
}

/// One page of catalog results, as returned by the backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// The page window of products
    pub products: Vec<Product>,
    /// Total matching items across all pages
    pub total: u32,
    /// 1-based page number of this window
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Whether another page exists
    pub has_more: bool,
}

impl ProductPage {
    /// Build a page, deriving `has_more` from the window position
    #[must_use]
    pub fn new(products: Vec<Product>, total: u32, page: u32, limit: u32) -> Self {
        Self {
            products,
            total,
            page,
            limit,
            has_more: page * limit < total,
        }
    }
}

/// Identifier minted by the order backend at placement time
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Creates a new random `OrderId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an `OrderId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a placed order
///
/// Transitions past `Confirmed` happen on the backend and are outside this
/// layer's scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted but not yet confirmed
    Pending,
    /// Confirmed by the backend
    Confirmed,
    /// Handed to the carrier
    Shipped,
    /// Delivered to the customer
    Delivered,
    /// Cancelled
    Cancelled,
}

/// A placed order
///
/// Holds a snapshot of the cart lines at placement time, not a live
/// reference to the cart. Never mutated by this layer after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Backend-minted identifier
    pub id: OrderId,
    /// Cart lines at the time of placement
    pub items: Vec<CartItem>,
    /// Total price at placement, rounded to two decimals
    pub total_price: f64,
    /// Current status
    pub status: OrderStatus,
    /// When the order was placed
    pub created_at: DateTime<Utc>,
}
