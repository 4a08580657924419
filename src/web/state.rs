//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data`, so they depend
//! only on the item service, the message handling, and the page renderer.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::item::{ports::ItemRepository, services::ItemService};
use crate::validation::{MessageCatalog, MessageCodesResolver};

use super::templates::PageRenderer;

/// Item service as held by the HTTP layer.
pub type SharedItemService = ItemService<dyn ItemRepository, DefaultClock>;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Item registration and lookup.
    pub items: SharedItemService,
    /// Resolves validation messages.
    pub messages: Arc<dyn MessageCatalog>,
    /// Expands error codes into catalogue keys.
    pub codes: MessageCodesResolver,
    /// Renders HTML pages.
    pub pages: Arc<PageRenderer>,
}

impl HttpState {
    /// Bundles the handler dependencies.
    #[must_use]
    pub fn new(
        items: SharedItemService,
        messages: Arc<dyn MessageCatalog>,
        pages: Arc<PageRenderer>,
    ) -> Self {
        Self {
            items,
            messages,
            pages,
            codes: MessageCodesResolver::new(),
        }
    }

    /// Replaces the resolver applied to every submission.
    #[must_use]
    pub fn with_codes(mut self, codes: MessageCodesResolver) -> Self {
        self.codes = codes;
        self
    }
}
