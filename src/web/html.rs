//! Server-rendered item pages, one route family per validation strategy.
//!
//! ```text
//! GET  /validation/{v}/items
//! GET  /validation/{v}/items/add
//! POST /validation/{v}/items/add
//! GET  /validation/{v}/items/{id}
//! GET  /validation/{v}/items/{id}/edit
//! POST /validation/{v}/items/{id}/edit
//! ```

use actix_web::{HttpResponse, Scope, http::header, web};
use serde::Deserialize;
use tracing::info;

use crate::item::domain::ItemId;
use crate::item::validation::ValidationStrategy;
use crate::validation::RawFields;

use super::error::WebResult;
use super::state::HttpState;
use super::templates::FormView;

/// Returns the route prefix served by `strategy`.
#[must_use]
pub fn base_path(strategy: ValidationStrategy) -> String {
    format!("/validation/{}/items", strategy.version())
}

/// Builds the route family for `strategy`.
#[must_use]
pub fn scope(strategy: ValidationStrategy) -> Scope {
    web::scope(&base_path(strategy))
        .app_data(web::Data::new(strategy))
        .route("", web::get().to(list_items))
        .route("/add", web::get().to(add_form))
        .route("/add", web::post().to(add_item))
        .route("/{id}", web::get().to(show_item))
        .route("/{id}/edit", web::get().to(edit_form))
        .route("/{id}/edit", web::post().to(edit_item))
}

/// Query string of the detail page.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    /// Set after a successful save to show the confirmation banner.
    #[serde(default)]
    pub status: bool,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn saved_redirect(strategy: ValidationStrategy, id: ItemId) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((
            header::LOCATION,
            format!("{}/{id}?status=true", base_path(strategy)),
        ))
        .finish()
}

async fn list_items(
    state: web::Data<HttpState>,
    strategy: web::Data<ValidationStrategy>,
) -> WebResult<HttpResponse> {
    let items = state.items.list().await?;
    let page = state.pages.items(&base_path(**strategy), &items)?;
    Ok(html(page))
}

async fn show_item(
    state: web::Data<HttpState>,
    strategy: web::Data<ValidationStrategy>,
    path: web::Path<i64>,
    query: web::Query<DetailQuery>,
) -> WebResult<HttpResponse> {
    let item = state.items.find(ItemId::new(path.into_inner())).await?;
    let page = state
        .pages
        .item(&base_path(**strategy), &item, query.status)?;
    Ok(html(page))
}

async fn add_form(
    state: web::Data<HttpState>,
    strategy: web::Data<ValidationStrategy>,
) -> WebResult<HttpResponse> {
    let page = state
        .pages
        .add_form(&base_path(**strategy), &FormView::blank())?;
    Ok(html(page))
}

async fn add_item(
    state: web::Data<HttpState>,
    strategy: web::Data<ValidationStrategy>,
    form: web::Form<RawFields>,
) -> WebResult<HttpResponse> {
    let raw = form.into_inner();
    match strategy.check_save(&raw, &state.codes).into_details() {
        Ok(details) => {
            let item = state.items.register(details).await?;
            info!(version = strategy.version(), id = %item.id(), "item registered");
            Ok(saved_redirect(**strategy, item.id()))
        }
        Err(result) => {
            info!(
                version = strategy.version(),
                errors = result.error_count(),
                summary = %result,
                "item submission rejected"
            );
            let view = FormView::rejected(&raw, &result, state.messages.as_ref());
            let page = state.pages.add_form(&base_path(**strategy), &view)?;
            Ok(html(page))
        }
    }
}

async fn edit_form(
    state: web::Data<HttpState>,
    strategy: web::Data<ValidationStrategy>,
    path: web::Path<i64>,
) -> WebResult<HttpResponse> {
    let item = state.items.find(ItemId::new(path.into_inner())).await?;
    let page = state.pages.edit_form(
        &base_path(**strategy),
        item.id(),
        &FormView::from_item(&item),
    )?;
    Ok(html(page))
}

async fn edit_item(
    state: web::Data<HttpState>,
    strategy: web::Data<ValidationStrategy>,
    path: web::Path<i64>,
    form: web::Form<RawFields>,
) -> WebResult<HttpResponse> {
    let id = ItemId::new(path.into_inner());
    let raw = form.into_inner();
    match strategy.check_update(&raw, &state.codes).into_details() {
        Ok(details) => {
            state.items.update(id, details).await?;
            info!(version = strategy.version(), %id, "item updated");
            Ok(saved_redirect(**strategy, id))
        }
        Err(result) => {
            info!(
                version = strategy.version(),
                %id,
                errors = result.error_count(),
                summary = %result,
                "item edit rejected"
            );
            let view = FormView::rejected(&raw, &result, state.messages.as_ref());
            let page = state.pages.edit_form(&base_path(**strategy), id, &view)?;
            Ok(html(page))
        }
    }
}
