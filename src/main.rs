//! Item server entry point: reads configuration, seeds the store, and
//! serves the item routes.

use std::io;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use mockable::DefaultClock;
use tracing::info;

use item_service::config::ServerConfig;
use item_service::item::adapters::memory::InMemoryItemRepository;
use item_service::item::ports::ItemRepository;
use item_service::item::services::{ItemService, sample_items};
use item_service::telemetry;
use item_service::web::{HttpState, PageRenderer, configure};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    telemetry::init();
    let config = ServerConfig::parse();

    let catalog = config.message_catalog().map_err(io::Error::other)?;
    let repository: Arc<dyn ItemRepository> = Arc::new(InMemoryItemRepository::new());
    let items = ItemService::new(repository, Arc::new(DefaultClock));
    if config.seed {
        let seeded = items
            .seed(sample_items())
            .await
            .map_err(io::Error::other)?;
        info!(count = seeded.len(), "sample items installed");
    }

    let pages = PageRenderer::new().map_err(io::Error::other)?;
    let http_state = HttpState::new(items, Arc::new(catalog), Arc::new(pages))
        .with_codes(config.message_codes());
    let state = web::Data::new(http_state);

    info!(addr = %config.bind_addr, "item server listening");
    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(config.bind_addr)?
        .run()
        .await
}
