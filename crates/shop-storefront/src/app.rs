//! The storefront session.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use chrono::Utc;
use shop_commerce::cart::{CartState, CartStore};
use shop_commerce::catalog::Product;
use shop_commerce::ProductId;
use shop_data::{FetchClient, ReqwestTransport, Transport};
use tracing::Instrument;

use crate::api::CatalogClient;
use crate::checkout::{submit_checkout, CheckoutForm, CheckoutOutcome};
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::head::Document;
use crate::html::render_loading;
use crate::pages::{self, PageStatus, PageView};
use crate::payment::{PaymentGateway, ProbeReport};
use crate::route::Route;

/// A page after navigation: layout applied, metadata written to the document.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub route: Route,
    pub html: String,
    pub status: PageStatus,
}

/// One browsing session.
///
/// Built once at startup and passed by reference; it owns the cart, the
/// document and the API clients for as long as the session lives.
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CatalogClient,
    payment: PaymentGateway,
    cart: CartStore,
    document: RefCell<Document>,
    cart_badge: Rc<Cell<i64>>,
    last_probe: RefCell<Option<ProbeReport>>,
}

impl Storefront {
    /// Create a session whose HTTP calls go through `transport`.
    pub fn new(config: StorefrontConfig, transport: Rc<dyn Transport>) -> Self {
        let api_client =
            FetchClient::new(Rc::clone(&transport)).with_base_url(config.api.base_url.clone());
        let payment_client =
            FetchClient::new(transport).with_base_url(config.payment.base_url.clone());

        let catalog =
            CatalogClient::new(api_client).with_secret_key(config.payment.secret_key.clone());
        let payment = PaymentGateway::new(payment_client, config.payment.secret_key.clone());

        let cart = CartStore::new();
        let cart_badge = Rc::new(Cell::new(0));
        let badge = Rc::clone(&cart_badge);
        cart.subscribe(move |state: &CartState| badge.set(state.total_items()));

        let document = Document::new(config.site.name.clone(), config.site.url.clone());

        Self {
            config,
            catalog,
            payment,
            cart,
            document: RefCell::new(document),
            cart_badge,
            last_probe: RefCell::new(None),
        }
    }

    /// Create a session that talks to the network.
    pub fn http(config: StorefrontConfig) -> Self {
        Self::new(config, Rc::new(ReqwestTransport::new()))
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn document(&self) -> Ref<'_, Document> {
        self.document.borrow()
    }

    /// Item count shown in the header badge.
    pub fn cart_badge(&self) -> i64 {
        self.cart_badge.get()
    }

    /// The page shown for `route` while its data is still in flight.
    ///
    /// Routes that render from local state have no loading view. The document
    /// is left untouched.
    pub fn loading_view(&self, route: &Route) -> Option<String> {
        let message = route.loading_message()?;
        Some(pages::render_layout(
            &self.config.site.name,
            self.cart_badge(),
            &render_loading(message),
        ))
    }

    /// Render `path` and then write its metadata into the document.
    pub async fn navigate(&self, path: &str) -> RenderedPage {
        let route = Route::parse(path);
        let span = tracing::info_span!("navigate", route = %route);

        async {
            let location = format!(
                "{}{}",
                self.config.site.url.trim_end_matches('/'),
                route.path()
            );
            self.document.borrow_mut().set_location(location);

            let view = self.render(&route).await;
            let html = pages::render_layout(&self.config.site.name, self.cart_badge(), &view.body);

            // Metadata lands only after the page body exists.
            if let Some(seo) = &view.seo {
                self.document.borrow_mut().apply_seo(seo);
            }

            tracing::debug!(status = ?view.status, bytes = html.len(), "page rendered");
            RenderedPage {
                route: route.clone(),
                html,
                status: view.status,
            }
        }
        .instrument(span)
        .await
    }

    async fn render(&self, route: &Route) -> PageView {
        let site = &self.config.site;
        match route {
            Route::Home => pages::render_home(site, &self.catalog).await,
            Route::Products => pages::render_products(site, &self.catalog).await,
            Route::ProductDetail(id) => pages::render_product_detail(site, &self.catalog, id).await,
            Route::Cart => pages::render_cart(site, &self.cart.snapshot()),
            Route::Checkout => {
                let probe = self.last_probe.borrow().clone();
                pages::render_checkout(&self.config, &self.cart.snapshot(), probe.as_ref())
            }
            Route::NotFound(path) => pages::render_not_found(site, path),
        }
    }

    /// Look up `id` and add one unit of it to the cart.
    pub async fn add_to_cart(&self, id: &ProductId) -> Result<Product, StorefrontError> {
        let product = self
            .catalog
            .get_product(id)
            .await?
            .ok_or_else(|| StorefrontError::ProductNotFound(id.to_string()))?;

        self.cart.add_to_cart(&product);
        Ok(product)
    }

    /// Submit the checkout form for the current cart.
    pub async fn checkout(&self, form: &CheckoutForm) -> CheckoutOutcome {
        submit_checkout(&self.cart, &self.catalog, &self.payment, form, Utc::now()).await
    }

    /// Run the cross-origin probe; the report shows on the checkout page.
    pub async fn probe(&self) -> ProbeReport {
        let report = self.payment.probe().await;
        *self.last_probe.borrow_mut() = Some(report.clone());
        report
    }
}
