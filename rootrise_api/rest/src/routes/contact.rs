use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use rootrise_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::{debug, info_span, Instrument};

use crate::{
    errors::{error, internal_server_error, REQUIRED_FIELDS_DETAIL},
    middlewares::request_id::RequestId,
    models::{contact::ApiContactSubmission, ApiResult},
};

pub const CONTACT_PATH: &str = "/api/contact";

/// Only `POST` is handled here; other methods on the contact path are passed
/// on to `site` like any other unmatched request.
pub fn router(service: Arc<impl ContactFeatureService>, site: Router<()>) -> Router<()> {
    Router::new()
        .route(CONTACT_PATH, routing::post(submit).fallback_service(site))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    request_id: RequestId,
    payload: Result<Json<ApiContactSubmission>, JsonRejection>,
) -> Response {
    async move {
        // A body we cannot read counts as a submission without any fields.
        let submission = payload
            .map(|Json(payload)| payload)
            .unwrap_or_else(|rejection| {
                debug!("unreadable contact payload: {rejection}");
                ApiContactSubmission::default()
            });

        match service.submit(submission.into()).await {
            Ok(()) => Json(ApiResult::success()).into_response(),
            Err(ContactSubmitError::Validation) => {
                error(StatusCode::BAD_REQUEST, REQUIRED_FIELDS_DETAIL)
            }
            Err(ContactSubmitError::Other(err)) => internal_server_error(err),
        }
    }
    .instrument(info_span!("contact-submission", %request_id))
    .await
}
