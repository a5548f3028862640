//! URL construction and reply-to-outcome mapping.
//!
//! # Design
//! A reply is inspected in two independent branches that both feed one
//! `OutcomeCell`: the transport error, if any, then the response, if any.
//! The status branch is not skipped after a transport error; its settlement
//! attempt is simply ignored because the cell is already written.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpResponse, TransportReply};
use crate::outcome::{Failure, Outcome, OutcomeCell};

/// `base + path + '?' + query`, with keys and values percent-encoded in the
/// order given. An empty parameter list leaves a bare `?`.
pub fn build_url(base_url: &str, path: &str, params: &[(String, String)]) -> String {
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base_url}{path}?{query}")
}

/// Map a completed transport reply onto an `Outcome`.
pub fn resolve_reply(reply: TransportReply) -> Result<Outcome, ApiError> {
    let cell = OutcomeCell::new();

    if let Some(error) = reply.error {
        debug!(%error, "settling on transport error");
        cell.settle(Outcome::Failure(Failure::Transport(error)));
    }

    if let Some(response) = reply.response {
        let status = response.status;
        match classify(response) {
            Ok(outcome) => {
                if !cell.settle(outcome) {
                    debug!(status, "outcome already settled, ignoring response");
                }
            }
            Err(fault) if cell.is_settled() => {
                debug!(status, %fault, "outcome already settled, ignoring undecodable body");
            }
            Err(fault) => return Err(fault),
        }
    }

    let outcome = cell.into_inner().ok_or(ApiError::Unsettled)?;
    debug!(success = outcome.is_success(), "request settled");
    Ok(outcome)
}

fn classify(response: HttpResponse) -> Result<Outcome, ApiError> {
    match response.status {
        200 => decode(&response).map(Outcome::Success),
        400 | 404 => decode(&response).map(|body| {
            Outcome::Failure(Failure::Payload {
                status: response.status,
                body,
            })
        }),
        _ => Ok(Outcome::Failure(Failure::Response(response))),
    }
}

fn decode(response: &HttpResponse) -> Result<serde_json::Value, ApiError> {
    serde_json::from_str(&response.body).map_err(|source| ApiError::Decode {
        status: response.status,
        source,
    })
}
