//! HTTP adapter serving the item pages and the JSON endpoint.
//!
//! [`configure`] registers every route; the binary and the tests build their
//! `App` from it.

pub mod api;
pub mod error;
pub mod html;
pub mod state;
pub mod templates;

use actix_web::web;

use crate::item::validation::ValidationStrategy;

pub use error::{WebError, WebResult};
pub use state::{HttpState, SharedItemService};
pub use templates::{FormView, PageRenderer};

/// Registers the JSON endpoint and one HTML route family per strategy.
///
/// # Examples
///
/// ```no_run
/// use actix_web::{App, web};
/// use item_service::web::{HttpState, configure};
///
/// fn app(state: HttpState) {
///     let _app = App::new()
///         .app_data(web::Data::new(state))
///         .configure(configure);
/// }
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/validation/api/items")
            .app_data(api::json_config())
            .route("/add", web::post().to(api::add_item)),
    );
    for strategy in ValidationStrategy::ALL {
        cfg.service(html::scope(strategy));
    }
}
