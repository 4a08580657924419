//! JSON item registration endpoint.
//!
//! ```text
//! POST /validation/api/items/add
//! ```
//!
//! A body that cannot be read as an [`ItemSaveForm`] is answered with 400 and
//! never validated. A readable body is validated; errors come back as a JSON
//! array with status 200, and a valid form is echoed unchanged.

use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use serde::Serialize;
use tracing::info;

use crate::item::forms::ItemSaveForm;
use crate::item::validation::check_save_form;
use crate::validation::{MessageCatalog, Scalar, ValidationResult};

use super::error::WebError;
use super::state::HttpState;

/// One validation error as reported by the JSON endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiValidationError {
    /// Name of the validated object.
    pub object_name: String,
    /// Offending field; absent for object-level errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Submitted value of the offending field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<Scalar>,
    /// Bare error code.
    pub code: String,
    /// Candidate message codes, most specific first.
    pub codes: Vec<String>,
    /// Positional message arguments.
    pub arguments: Vec<Scalar>,
    /// Resolved display text.
    pub message: String,
    /// Whether the value failed to bind.
    pub binding_failure: bool,
}

/// Flattens `result` into field errors followed by global errors.
#[must_use]
pub fn error_report(
    result: &ValidationResult,
    catalog: &dyn MessageCatalog,
) -> Vec<ApiValidationError> {
    let fields = result.field_errors().iter().map(|error| ApiValidationError {
        object_name: error.object_name().to_owned(),
        field: Some(error.field().to_owned()),
        rejected_value: error.rejected_value().cloned(),
        code: error.code().to_owned(),
        codes: error.codes().to_vec(),
        arguments: error.arguments().to_vec(),
        message: catalog.field_message(error),
        binding_failure: error.is_binding_failure(),
    });
    let globals = result.global_errors().iter().map(|error| ApiValidationError {
        object_name: error.object_name().to_owned(),
        field: None,
        rejected_value: None,
        code: error.code().to_owned(),
        codes: error.codes().to_vec(),
        arguments: error.arguments().to_vec(),
        message: catalog.global_message(error),
        binding_failure: false,
    });
    fields.chain(globals).collect()
}

/// JSON extractor settings turning unreadable bodies into 400 responses.
#[must_use]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}

fn reject_payload(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    info!(error = %err, "unreadable item payload");
    WebError::BadRequest(err.to_string()).into()
}

/// Validates a JSON save request.
pub async fn add_item(
    state: web::Data<HttpState>,
    payload: web::Json<ItemSaveForm>,
) -> HttpResponse {
    let form = payload.into_inner();
    let result = check_save_form(&form, &state.codes);
    if result.has_errors() {
        info!(
            errors = result.error_count(),
            summary = %result,
            "item payload rejected"
        );
        return HttpResponse::Ok().json(error_report(&result, state.messages.as_ref()));
    }
    info!("item payload accepted");
    HttpResponse::Ok().json(form)
}
