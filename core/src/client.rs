//! Request builders and the async client facade.
//!
//! # Design
//! `WikiaClient` holds only a `base_url` and never touches the network. Each
//! operation has a `build_*` method that validates options and produces an
//! `HttpRequest`; `parse_reply` turns whatever the transport observed into an
//! `Outcome`. `Wikia` pairs a `WikiaClient` with a `Transport` and exposes the
//! operations as "validate now, await later": option faults come back
//! synchronously, before any request exists, and the returned future
//! performs exactly one GET.

use futures::future::BoxFuture;
use tracing::debug;

use crate::config::ClientConfig;
use crate::dispatch::{build_url, resolve_reply};
use crate::endpoint::{
    EndpointDescriptor, LATEST_ACTIVITY, NAVIGATION, RECENTLY_CHANGED_ARTICLES,
    RECOMMENDATIONS_FOR_ARTICLE, RELATED_PAGES, SEARCH_SUGGESTIONS, USER_DETAILS,
};
use crate::error::{ApiError, UsageError};
use crate::http::{HttpMethod, HttpRequest, Transport, TransportReply};
use crate::options::Options;
use crate::outcome::Outcome;
use crate::validate::normalize;

/// Stateless request builder for the wiki API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiaClient {
    base_url: String,
}

impl WikiaClient {
    /// Client for `http://<subdomain>.wikia.com/api/v1/`.
    pub fn new(subdomain: &str) -> Self {
        Self::from_config(&ClientConfig::new(subdomain))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url(),
        }
    }

    /// Use an explicit API root, e.g. a local mock. A trailing `/` is added
    /// when missing.
    pub fn with_base_url(base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate `options` for `descriptor` and build the GET request.
    pub fn build(
        &self,
        descriptor: &EndpointDescriptor,
        options: Option<&Options>,
    ) -> Result<HttpRequest, UsageError> {
        let params = normalize(descriptor, options)?;
        Ok(self.get(descriptor.path, &params))
    }

    fn get(&self, path: &str, params: &[(String, String)]) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: build_url(&self.base_url, path, params),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn build_latest_activity(&self, options: Option<&Options>) -> Result<HttpRequest, UsageError> {
        self.build(&LATEST_ACTIVITY, options)
    }

    pub fn build_recently_changed_articles(
        &self,
        options: Option<&Options>,
    ) -> Result<HttpRequest, UsageError> {
        self.build(&RECENTLY_CHANGED_ARTICLES, options)
    }

    /// Navigation takes no options.
    pub fn build_navigation(&self) -> HttpRequest {
        self.get(NAVIGATION.path, &[])
    }

    pub fn build_recommendations_for_article(
        &self,
        options: Option<&Options>,
    ) -> Result<HttpRequest, UsageError> {
        self.build(&RECOMMENDATIONS_FOR_ARTICLE, options)
    }

    pub fn build_related_pages(&self, options: Option<&Options>) -> Result<HttpRequest, UsageError> {
        self.build(&RELATED_PAGES, options)
    }

    /// The query is mandatory; `None` fails with `MissingRequired("query")`.
    pub fn build_search_suggestions(&self, query: Option<&str>) -> Result<HttpRequest, UsageError> {
        let options: Options = query.map(|q| ("query", q)).into_iter().collect();
        self.build(&SEARCH_SUGGESTIONS, Some(&options))
    }

    pub fn build_user_details(&self, options: Option<&Options>) -> Result<HttpRequest, UsageError> {
        self.build(&USER_DETAILS, options)
    }

    /// Map a transport reply onto an `Outcome`.
    pub fn parse_reply(&self, reply: TransportReply) -> Result<Outcome, ApiError> {
        resolve_reply(reply)
    }
}

/// A dispatched request that has not settled yet.
pub type Pending<'a> = BoxFuture<'a, Result<Outcome, ApiError>>;

/// Async client: a `WikiaClient` plus the transport that runs its requests.
///
/// ```no_run
/// use wikia_core::{Options, Wikia};
///
/// # async fn run() -> Result<(), wikia_core::ApiError> {
/// let wiki = Wikia::new("starwars");
/// let options = Options::new().with("limit", 5).with("namespaces", "0,14");
/// let outcome = wiki.latest_activity(Some(&options))?.await?;
/// if let Some(payload) = outcome.payload() {
///     println!("{payload}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Wikia<T> {
    client: WikiaClient,
    transport: T,
}

#[cfg(feature = "reqwest")]
impl Wikia<crate::transport::ReqwestTransport> {
    /// Client for `subdomain` using a default `reqwest` transport.
    pub fn new(subdomain: &str) -> Self {
        Self::with_transport(
            WikiaClient::new(subdomain),
            crate::transport::ReqwestTransport::new(),
        )
    }

    pub fn from_config(
        config: &ClientConfig,
        http: &crate::config::HttpConfig,
    ) -> Result<Self, crate::http::TransportError> {
        Ok(Self::with_transport(
            WikiaClient::from_config(config),
            crate::transport::ReqwestTransport::from_config(http)?,
        ))
    }
}

impl<T: Transport> Wikia<T> {
    pub fn with_transport(client: WikiaClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &WikiaClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn latest_activity(&self, options: Option<&Options>) -> Result<Pending<'_>, UsageError> {
        Ok(self.dispatch(self.client.build_latest_activity(options)?))
    }

    pub fn recently_changed_articles(
        &self,
        options: Option<&Options>,
    ) -> Result<Pending<'_>, UsageError> {
        Ok(self.dispatch(self.client.build_recently_changed_articles(options)?))
    }

    pub fn navigation(&self) -> Pending<'_> {
        self.dispatch(self.client.build_navigation())
    }

    pub fn recommendations_for_article(
        &self,
        options: Option<&Options>,
    ) -> Result<Pending<'_>, UsageError> {
        Ok(self.dispatch(self.client.build_recommendations_for_article(options)?))
    }

    pub fn related_pages(&self, options: Option<&Options>) -> Result<Pending<'_>, UsageError> {
        Ok(self.dispatch(self.client.build_related_pages(options)?))
    }

    pub fn search_suggestions(&self, query: Option<&str>) -> Result<Pending<'_>, UsageError> {
        Ok(self.dispatch(self.client.build_search_suggestions(query)?))
    }

    pub fn user_details(&self, options: Option<&Options>) -> Result<Pending<'_>, UsageError> {
        Ok(self.dispatch(self.client.build_user_details(options)?))
    }

    fn dispatch(&self, request: HttpRequest) -> Pending<'_> {
        Box::pin(async move {
            debug!(method = request.method.as_str(), url = %request.url, "dispatching");
            let reply = self.transport.get(&request).await;
            resolve_reply(reply)
        })
    }
}
