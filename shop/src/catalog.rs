//! Catalog state: the materialized product page, filters, and pagination.
//!
//! The list held here is a page window, not the whole catalog. Filter,
//! sort, and category changes reset the window to page one and replace it;
//! a load-more fetch appends the next page. Fetch failures leave the
//! previous window untouched so the UI can keep showing stale-but-valid
//! content next to the error.

use crate::types::{Filters, Pagination, Product, ProductPage};

/// State of the catalog domain
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    /// Materialized page window of products
    pub items: Vec<Product>,
    /// Detail cache for the product screen
    pub current_product: Option<Product>,
    /// Active filters
    pub filters: Filters,
    /// Pagination cursor for `items`
    pub pagination: Pagination,
    /// List fetch in flight
    pub loading: bool,
    /// Last list fetch error
    pub error: Option<String>,
    /// Detail fetch in flight
    pub loading_product: bool,
    /// Last detail fetch error
    pub product_error: Option<String>,
}

impl CatalogState {
    /// Whether a load-more request may proceed
    ///
    /// Gated on another page existing and no fetch being in flight.
    #[must_use]
    pub const fn can_load_more(&self) -> bool {
        self.pagination.has_more && !self.loading
    }

    /// Start a list fetch and return the page to request
    ///
    /// A fresh fetch (`load_more == false`) clears the window and resets
    /// the cursor to page one; a load-more fetch leaves both alone and
    /// targets the next page. The cursor itself only advances when the
    /// response is applied.
    pub fn begin_list_fetch(&mut self, load_more: bool) -> u32 {
        self.loading = true;
        self.error = None;

        if load_more {
            self.pagination.page + 1
        } else {
            self.items.clear();
            self.pagination.page = 1;
            1
        }
    }

    /// Apply a successful list response
    ///
    /// Page one replaces the window; later pages append, preserving the
    /// order of what is already there. The cursor is overwritten with what
    /// the backend reported.
    pub fn apply_page(&mut self, page: ProductPage) {
        self.loading = false;

        if page.page == 1 {
            self.items = page.products;
        } else {
            self.items.extend(page.products);
        }

        self.pagination = Pagination {
            page: page.page,
            limit: page.limit,
            total: page.total,
            has_more: page.has_more,
        };
    }

    /// Record a failed list fetch, keeping the current window
    pub fn fail_list_fetch(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Start a product detail fetch
    pub fn begin_product_fetch(&mut self) {
        self.loading_product = true;
        self.product_error = None;
        self.current_product = None;
    }

    /// Apply a successful detail response
    pub fn apply_product(&mut self, product: Product) {
        self.loading_product = false;
        self.current_product = Some(product);
    }

    /// Record a failed detail fetch
    pub fn fail_product_fetch(&mut self, message: String) {
        self.loading_product = false;
        self.product_error = Some(message);
    }

    /// Restore default filters and drop the window and cursor
    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
        self.items.clear();
        self.pagination = Pagination::default();
    }
}
