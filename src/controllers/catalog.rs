use futures::try_join;

use super::ViewState;
use crate::api::ApiClient;
use crate::models::{Category, Product, ProductFilter};

const LOAD_FAILED: &str = "Could not load the catalog.";

/// Home page: every product plus the category filter sidebar.
pub struct CatalogController {
    api: ApiClient,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub filter: ProductFilter,
    pub view: ViewState,
}

impl CatalogController {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            products: Vec::new(),
            categories: Vec::new(),
            filter: ProductFilter::default(),
            view: ViewState::default(),
        }
    }

    /// Loads products and categories side by side and waits for both.
    pub async fn load(&mut self) {
        self.view.start();
        let products = self.api.products();
        let categories = self.api.categories();
        let result = try_join!(products.list(), categories.list());
        self.view.finish();

        match result {
            Ok((products, categories)) => {
                self.products = products;
                self.categories = categories;
            }
            Err(e) => self.view.fail("Catalog load failed", &e, LOAD_FAILED),
        }
    }

    /// Adds or removes `category_id` from the filter and re-queries the service.
    pub async fn toggle_category(&mut self, category_id: &str) {
        self.filter.toggle_category(category_id);
        self.apply_filter().await;
    }

    pub async fn set_price_range(&mut self, min: u64, max: u64) {
        self.filter.price = [min.min(max), max.max(min)];
        self.apply_filter().await;
    }

    /// Re-queries the service with the current filter.
    pub async fn apply_filter(&mut self) {
        self.view.start();
        let result = self.api.products().filter(&self.filter).await;
        self.view.finish();
        match result {
            Ok(products) => self.products = products,
            Err(e) => self.view.fail("Product filter failed", &e, LOAD_FAILED),
        }
    }

    pub fn photo_url(&self, product: &Product) -> String {
        self.api.products().photo_url(&product.id)
    }
}
