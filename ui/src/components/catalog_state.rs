use dioxus::prelude::*;

use koji_common::article::Article;
use koji_common::partner::Partner;
use koji_common::MockCatalog;

use crate::config::AppConfig;

/// Read-only data shared by every page.
///
/// Loaded once at startup from the embedded fixtures. Pages read records
/// through the repositories on `catalog`.
#[derive(Clone, Debug)]
pub struct CatalogState {
    pub catalog: Option<MockCatalog>,
    pub config: AppConfig,
    /// Set when the fixtures failed to load.
    pub last_error: Option<String>,
}

impl CatalogState {
    pub fn load() -> Self {
        let config = AppConfig::from_env();
        match MockCatalog::load() {
            Ok(catalog) => {
                tracing::info!(
                    partners = catalog.partners().len(),
                    batches = catalog.batches().len(),
                    articles = catalog.articles().len(),
                    "catalog loaded"
                );
                Self {
                    catalog: Some(catalog),
                    config,
                    last_error: None,
                }
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {e}");
                Self {
                    catalog: None,
                    config,
                    last_error: Some(e.to_string()),
                }
            }
        }
    }

    /// Partners in fixture order; empty when the catalog failed to load.
    pub fn partners(&self) -> &[Partner] {
        self.catalog
            .as_ref()
            .map(|c| c.partners().records())
            .unwrap_or(&[])
    }

    pub fn articles(&self) -> &[Article] {
        self.catalog
            .as_ref()
            .map(|c| c.articles().records())
            .unwrap_or(&[])
    }
}

pub fn use_catalog() -> Signal<CatalogState> {
    use_context::<Signal<CatalogState>>()
}
