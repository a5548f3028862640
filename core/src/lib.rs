//! Client core for the wiki-hosting REST API.
//!
//! # Overview
//! Validates per-endpoint option bags, builds GET URLs, and maps transport
//! replies onto a two-branch `Outcome`. The request builders never touch the
//! network (host-does-IO); the `Wikia` facade pairs them with a `Transport`
//! for callers that want async calls directly.
//!
//! # Design
//! - `WikiaClient` is stateless; it holds only the base address.
//! - Option rules are static `EndpointDescriptor` tables consumed by one
//!   generic validator.
//! - Option faults (`UsageError`) are returned synchronously before any
//!   request is dispatched. Remote failures arrive as `Outcome::Failure`.
//! - Each reply is settled through a first-writer-wins `OutcomeCell`, so a
//!   transport error followed by a status line resolves deterministically.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod options;
pub mod outcome;
#[cfg(feature = "reqwest")]
pub mod transport;
pub mod validate;

pub use client::{Pending, Wikia, WikiaClient};
pub use config::{ClientConfig, HttpConfig};
pub use endpoint::{EndpointDescriptor, FieldKind, FieldRule};
pub use error::{ApiError, UsageError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError, TransportReply};
pub use options::{OptionValue, Options};
pub use outcome::{Failure, Outcome, OutcomeCell};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
