//! Command dispatch REST handler
//!
//! The single write path of the service: a transport adapter posts one
//! command envelope and receives the reply text to deliver back to the
//! caller's chat.

use crate::app_state::AppState;
use crate::{ApiError, ApiResult};

use gk_router::{CommandRequest, Reply};

use std::panic::Location;
use std::time::Duration;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use error_location::ErrorLocation;
use serde::Serialize;

/// Upper bound on one dispatch, store access included.
const DISPATCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Reply envelope returned to the transport adapter
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub reply: Reply,
}

/// POST /v1/command
///
/// Dispatch a single command and return the caller-facing reply. Denials
/// and argument mistakes are successful responses; only malformed
/// envelopes, timeouts and storage failures map to error status codes.
pub async fn dispatch_command(
    State(state): State<AppState>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> ApiResult<Json<CommandResponse>> {
    let Json(request) = payload?;

    let reply = tokio::time::timeout(DISPATCH_TIMEOUT, state.router.dispatch(&request))
        .await
        .map_err(|_elapsed| ApiError::Timeout {
            location: ErrorLocation::from(Location::caller()),
        })??;

    Ok(Json(CommandResponse { reply }))
}
