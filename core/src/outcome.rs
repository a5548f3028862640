//! Request outcomes and the settle-once cell that produces them.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{HttpResponse, TransportError};

/// The result of one dispatched request.
#[derive(Debug)]
pub enum Outcome {
    /// Status 200 with its parsed JSON body.
    Success(Value),
    Failure(Failure),
}

/// Why a request failed on the remote or transport side.
#[derive(Debug)]
pub enum Failure {
    /// Status 400 or 404 with its parsed JSON error body.
    Payload { status: u16, body: Value },
    /// The transport faulted.
    Transport(TransportError),
    /// Any other status. The raw response is kept as-is.
    Response(HttpResponse),
}

impl Failure {
    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Failure::Payload { status, .. } => Some(*status),
            Failure::Response(response) => Some(response.status),
            Failure::Transport(_) => None,
        }
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<Value, Failure> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }

    /// Decode a success payload into `T`. A failure is handed back untouched.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<Result<T, Failure>, ApiError> {
        match self {
            Outcome::Success(value) => serde_json::from_value(value)
                .map(Ok)
                .map_err(|source| ApiError::Schema { source }),
            Outcome::Failure(failure) => Ok(Err(failure)),
        }
    }
}

/// A single-assignment slot for an `Outcome`.
///
/// The first `settle` wins; later calls return `false` and drop their value.
#[derive(Debug, Default)]
pub struct OutcomeCell {
    slot: OnceLock<Outcome>,
}

impl OutcomeCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `outcome` unless the cell is already settled. Returns whether
    /// this call settled it.
    pub fn settle(&self, outcome: Outcome) -> bool {
        self.slot.set(outcome).is_ok()
    }

    pub fn is_settled(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn get(&self) -> Option<&Outcome> {
        self.slot.get()
    }

    pub fn into_inner(self) -> Option<Outcome> {
        self.slot.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn first_settlement_wins() {
        let cell = OutcomeCell::new();
        assert!(!cell.is_settled());
        assert!(cell.settle(Outcome::Failure(Failure::Transport(TransportError::new("reset")))));
        assert!(!cell.settle(Outcome::Success(json!({"items": []}))));
        assert!(cell.is_settled());

        match cell.into_inner() {
            Some(Outcome::Failure(Failure::Transport(err))) => assert_eq!(err.message(), "reset"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn unsettled_cell_is_empty() {
        assert!(OutcomeCell::new().into_inner().is_none());
    }

    #[test]
    fn failure_status() {
        let payload = Failure::Payload {
            status: 404,
            body: json!({"error": "not found"}),
        };
        assert_eq!(payload.status(), Some(404));
        assert_eq!(Failure::Transport(TransportError::new("x")).status(), None);
    }

    #[test]
    fn deserialize_success_payload() {
        #[derive(Debug, Deserialize)]
        struct Items {
            items: Vec<u32>,
        }

        let items: Items = Outcome::Success(json!({"items": [1, 2]}))
            .deserialize()
            .unwrap()
            .unwrap();
        assert_eq!(items.items, vec![1, 2]);

        let err = Outcome::Success(json!({"nope": 1}))
            .deserialize::<Items>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Schema { .. }));
        let message = err.to_string();
        assert!(message.starts_with("success payload does not match the expected shape"), "{message}");
        assert!(message.contains("missing field `items`"), "{message}");
    }
}
