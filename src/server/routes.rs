use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use times::entry::CandidateEntry;
use times::verdict::Verdict;
use times::verify::{verify, Acceptance};

use crate::server::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    env: String,
}

/// GET /api/health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        env: state.config.environment.clone(),
    })
}

/// Whether the request declares a JSON body, `application/json` or any
/// `application/*+json` type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json"
        || mime
            .strip_prefix("application/")
            .is_some_and(|subtype| subtype.ends_with("+json"))
}

/// POST /api/worktime/validate
///
/// The body is decoded leniently, anything that is not a JSON object counts as an empty
/// entry. So does a body sent without a JSON content type.
async fn validate_worktime(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<Verdict>) {
    let entry = if has_json_content_type(&headers) {
        CandidateEntry::from_json(&body)
    } else {
        tracing::debug!("Body without JSON content type, treated as empty");
        CandidateEntry::default()
    };
    let today = (state.today)();
    let result = verify(&entry, today);

    match &result {
        Ok(Acceptance::Complete { work }) => {
            tracing::debug!(%today, %work, "Entry accepted");
        }
        Ok(acceptance) => tracing::debug!(%today, ?acceptance, "Entry accepted"),
        Err(violation) => {
            tracing::debug!(%today, field = %violation.field(), %violation, "Entry rejected");
        }
    }

    let verdict = Verdict::from(result);
    let status = if verdict.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(verdict))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/worktime/validate", post(validate_worktime))
}
