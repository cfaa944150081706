//! Shared test support: scripted in-memory collaborators and fixtures.
//!
//! The in-memory catalog implements the same filter/sort/paginate contract
//! the real backend would, with per-call latency and failure scripting so
//! the tests can stage slow/fast response races deterministically.

#![allow(dead_code)] // Each integration test binary uses its own subset

use shopfront_core::environment::Clock;
use shopfront_shop::{
    CartItem, CatalogService, FetchError, Filters, Order, OrderError, OrderId, OrderService,
    OrderStatus, PageRequest, Product, ProductCategory, ProductId, ProductPage, ServiceFuture,
    SortOption, round2,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Install a test subscriber so `RUST_LOG` works in `cargo test`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A product with deterministic fields derived from its id
pub fn product(
    id: &str,
    name: &str,
    price: f64,
    category: ProductCategory,
    stock: u32,
    minutes_old: i64,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: format!("{name} in fine condition"),
        price,
        category,
        image: format!("https://img.example/{id}.jpg"),
        rating: 4.0,
        review_count: 12,
        stock,
        brand: "Acme".to_string(),
        tags: vec![],
        created_at: chrono::Utc::now() - chrono::Duration::minutes(minutes_old),
    }
}

/// A catalog of `n` electronics, newest first under the default sort
///
/// `p-1` is the newest and cheapest; ids ascend with age and price, so the
/// default ordering is `p-1, p-2, …`.
pub fn catalog_of(n: u32) -> Vec<Product> {
    (1..=n)
        .map(|i| {
            product(
                &format!("p-{i}"),
                &format!("Gadget {i}"),
                f64::from(i),
                ProductCategory::Electronics,
                10,
                i64::from(i),
            )
        })
        .collect()
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The backend-side query: filter, sort (stable, preserving insertion
/// order on ties), paginate
fn query_page(products: &[Product], filters: &Filters, page: PageRequest) -> ProductPage {
    let needle = filters.search.to_lowercase();

    let mut matched: Vec<Product> = products
        .iter()
        .filter(|p| {
            let text_match = needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.brand.to_lowercase().contains(&needle)
                || p.tags.iter().any(|tag| tag.to_lowercase().contains(&needle));
            let category_match = filters.category.is_none_or(|c| p.category == c);
            text_match && category_match
        })
        .cloned()
        .collect();

    match filters.sort_by {
        SortOption::PriceAsc => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOption::PriceDesc => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOption::Rating => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    let total = u32::try_from(matched.len()).unwrap_or(u32::MAX);
    let start = ((page.page - 1) * page.limit) as usize;
    let window: Vec<Product> = matched
        .into_iter()
        .skip(start)
        .take(page.limit as usize)
        .collect();

    ProductPage::new(window, total, page.page, page.limit)
}

/// In-memory catalog backend with scripted latencies and failures
pub struct InMemoryCatalog {
    products: Vec<Product>,
    default_latency: Duration,
    latencies: Mutex<VecDeque<Duration>>,
    failures: Mutex<VecDeque<String>>,
    list_calls: AtomicUsize,
    product_calls: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            default_latency: Duration::from_millis(10),
            latencies: Mutex::new(VecDeque::new()),
            failures: Mutex::new(VecDeque::new()),
            list_calls: AtomicUsize::new(0),
            product_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.default_latency = latency;
        self
    }

    /// Override the latency of the next call (FIFO per call)
    pub fn push_latency(&self, latency: Duration) {
        lock(&self.latencies).push_back(latency);
    }

    /// Fail the next call with the given message (FIFO per call)
    pub fn fail_next(&self, message: &str) {
        lock(&self.failures).push_back(message.to_string());
    }

    /// Number of list calls made so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of detail calls made so far
    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }

    fn next_latency(&self) -> Duration {
        lock(&self.latencies)
            .pop_front()
            .unwrap_or(self.default_latency)
    }

    fn next_failure(&self) -> Option<String> {
        lock(&self.failures).pop_front()
    }
}

impl CatalogService for InMemoryCatalog {
    fn list_products(
        &self,
        filters: Filters,
        page: PageRequest,
    ) -> ServiceFuture<'_, Result<ProductPage, FetchError>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let latency = self.next_latency();
        let failure = self.next_failure();
        let result = query_page(&self.products, &filters, page);

        Box::pin(async move {
            tokio::time::sleep(latency).await;
            match failure {
                Some(message) => Err(FetchError::new(message)),
                None => Ok(result),
            }
        })
    }

    fn product(&self, id: ProductId) -> ServiceFuture<'_, Result<Option<Product>, FetchError>> {
        self.product_calls.fetch_add(1, Ordering::SeqCst);
        let latency = self.next_latency();
        let failure = self.next_failure();
        let found = self.products.iter().find(|p| p.id == id).cloned();

        Box::pin(async move {
            tokio::time::sleep(latency).await;
            match failure {
                Some(message) => Err(FetchError::new(message)),
                None => Ok(found),
            }
        })
    }
}

/// In-memory order backend with scripted failures
pub struct InMemoryOrders {
    clock: Arc<dyn Clock>,
    latency: Duration,
    failures: Mutex<VecDeque<String>>,
    calls: AtomicUsize,
}

impl InMemoryOrders {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            latency: Duration::from_millis(10),
            failures: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail the next placement with the given message (FIFO per call)
    pub fn fail_next(&self, message: &str) {
        lock(&self.failures).push_back(message.to_string());
    }

    /// Number of placement calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl OrderService for InMemoryOrders {
    fn place_order(&self, items: Vec<CartItem>) -> ServiceFuture<'_, Result<Order, OrderError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let latency = self.latency;
        let failure = lock(&self.failures).pop_front();
        let placed_at = self.clock.now();

        Box::pin(async move {
            tokio::time::sleep(latency).await;

            if let Some(message) = failure {
                return Err(OrderError::Service(message));
            }
            if items.is_empty() {
                return Err(OrderError::EmptyCart);
            }

            let total_price = round2(items.iter().map(CartItem::line_total).sum());
            Ok(Order {
                id: OrderId::new(),
                items,
                total_price,
                status: OrderStatus::Confirmed,
                created_at: placed_at,
            })
        })
    }
}
