//! Operation handlers emulating the ESB-proxied Jotform connector
//!
//! Failure contract: unknown resources and unroutable requests answer 404,
//! an update without a valid API key answers 401. Listing operations echo
//! the requested paging values in `resultSet` as strings.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use jotbridge::Operation;
use jotbridge::envelope::{Envelope, ResultSet};
use log::{error, trace};
use serde_json::{Value, json};

use super::server::{AppState, envelope_status};
use super::store::SubmissionRecord;
use crate::http::common::{ConnectorRequest, HealthCheckResponse, headers};

/// Items a listing returns when the request carries no `limit`.
const DEFAULT_LIMIT: usize = 20;

pub async fn health_check(State(_app_state): State<AppState>) -> Json<HealthCheckResponse> {
    trace!("GET /health");
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: "jotbridge-gateway".to_string(),
        timestamp: std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
    })
}

#[tracing::instrument(level = "debug", skip(app_state, headers_map, body))]
pub async fn dispatch(
    State(app_state): State<AppState>,
    headers_map: HeaderMap,
    body: String,
) -> (StatusCode, Json<Envelope>) {
    let action = headers_map
        .get(headers::ACTION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let Some(operation) = Operation::from_action(action) else {
        error!("POST with unroutable Action header '{action}'");
        return reply(Envelope::failure(404, "no such operation"));
    };

    let request = match ConnectorRequest::parse(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("POST {operation} with malformed body: {e}");
            return reply(Envelope::failure(404, "invalid request body"));
        }
    };

    trace!("POST Action {} routed to {operation}", operation.action());
    let envelope = match operation {
        Operation::CloneForm => clone_form(&app_state, &request),
        Operation::GetForm => get_form(&app_state, &request),
        Operation::GetSubmission => get_submission(&app_state, &request),
        Operation::GetUserSubmissions => get_user_submissions(&app_state, &request),
        Operation::GetFormSubmissions => get_form_submissions(&app_state, &request),
        Operation::UpdateSubmission => update_submission(&app_state, &request),
    };
    reply(envelope)
}

fn reply(envelope: Envelope) -> (StatusCode, Json<Envelope>) {
    (envelope_status(envelope.response_code), Json(envelope))
}

fn authorized(app_state: &AppState, request: &ConnectorRequest) -> bool {
    request.api_key.as_deref() == Some(app_state.api_key.as_str())
}

fn clone_form(app_state: &AppState, request: &ConnectorRequest) -> Envelope {
    if !authorized(app_state, request) {
        return Envelope::failure(401, "unauthorized");
    }
    let Some(form_id) = request.form_id.as_deref() else {
        return Envelope::failure(404, "form not found");
    };
    let mut store = app_state.store.write().unwrap();
    match store.clone_form(form_id) {
        Some(clone) => Envelope::success(clone.to_content()),
        None => Envelope::failure(404, "form not found"),
    }
}

fn get_form(app_state: &AppState, request: &ConnectorRequest) -> Envelope {
    if !authorized(app_state, request) {
        return Envelope::failure(401, "unauthorized");
    }
    let store = app_state.store.read().unwrap();
    match request.form_id.as_deref().and_then(|id| store.form(id)) {
        Some(form) => Envelope::success(form.to_content()),
        None => Envelope::failure(404, "form not found"),
    }
}

fn get_submission(app_state: &AppState, request: &ConnectorRequest) -> Envelope {
    if !authorized(app_state, request) {
        return Envelope::failure(401, "unauthorized");
    }
    let store = app_state.store.read().unwrap();
    match request
        .submission_id
        .as_deref()
        .and_then(|id| store.submission(id))
    {
        Some(submission) => Envelope::success(submission.to_content()),
        None => Envelope::failure(404, "submission not found"),
    }
}

fn get_user_submissions(app_state: &AppState, request: &ConnectorRequest) -> Envelope {
    if !authorized(app_state, request) {
        return Envelope::failure(401, "unauthorized");
    }
    let store = app_state.store.read().unwrap();
    listing(store.all_submissions(), request)
}

fn get_form_submissions(app_state: &AppState, request: &ConnectorRequest) -> Envelope {
    if !authorized(app_state, request) {
        return Envelope::failure(401, "unauthorized");
    }
    let store = app_state.store.read().unwrap();
    let Some(form_id) = request.form_id.as_deref() else {
        return Envelope::failure(404, "form not found");
    };
    if store.form(form_id).is_none() {
        return Envelope::failure(404, "form not found");
    }
    listing(store.form_submissions(form_id), request)
}

fn update_submission(app_state: &AppState, request: &ConnectorRequest) -> Envelope {
    // The unauthorized case comes first: an update carrying only the
    // submission id must answer 401, not 404.
    if !authorized(app_state, request) {
        return Envelope::failure(401, "unauthorized");
    }
    let Some(submission_id) = request.submission_id.as_deref() else {
        return Envelope::failure(404, "submission not found");
    };
    let mut store = app_state.store.write().unwrap();
    match store.update_submission(submission_id, request) {
        Some(submission) => Envelope::success(json!({
            "id": submission.id,
            "new": submission.new,
        })),
        None => Envelope::failure(404, "submission not found"),
    }
}

/// Build a listing envelope: `content` holds the (ordered, limited) page,
/// `resultSet` echoes the paging values as strings.
fn listing(mut submissions: Vec<&SubmissionRecord>, request: &ConnectorRequest) -> Envelope {
    if request.orderby.as_deref() == Some("created_at") {
        submissions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    } else {
        submissions.sort_by(|a, b| a.id.cmp(&b.id));
    }

    let limit = request
        .limit
        .as_deref()
        .and_then(|l| l.parse::<usize>().ok())
        .unwrap_or(DEFAULT_LIMIT);
    submissions.truncate(limit);

    let content: Vec<Value> = submissions
        .iter()
        .map(|submission| submission.to_content())
        .collect();
    let count = content.len().to_string();

    Envelope::listing(
        Value::Array(content),
        ResultSet {
            offset: Some("0".to_string()),
            limit: Some(
                request
                    .limit
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LIMIT.to_string()),
            ),
            orderby: request.orderby.clone(),
            count: Some(count),
        },
    )
}
