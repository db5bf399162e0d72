use std::{collections::HashMap, time::Duration};

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{
    dto::VaultsResponse,
    error::MorphoError,
    query::{DEFAULT_USER_AGENT, DEFAULT_VAULTS_QUERY, MORPHO_GRAPHQL_ENDPOINT},
    transport::{GraphQLPayload, GraphQLRequest, GraphQLTransport, ReqwestTransport},
};

/// GraphQL variables, keyed by variable name.
pub type Variables = serde_json::Map<String, Value>;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Issues GraphQL queries against the Morpho API.
///
/// Every call is a single POST: no retries, no caching, no shared state
/// between calls. The client is `Send + Sync` and can be shared freely.
#[derive(Debug, Clone)]
pub struct MorphoClient<T = ReqwestTransport> {
    endpoint: Url,
    transport: T,
}

impl MorphoClient {
    /// Client for the public endpoint, without a request timeout.
    pub fn new() -> Result<Self, MorphoError> {
        Self::builder().build()
    }

    pub fn builder() -> MorphoClientBuilder {
        MorphoClientBuilder::default()
    }
}

impl<T: GraphQLTransport> MorphoClient<T> {
    pub const fn with_transport(endpoint: Url, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the request `execute_query` would send, without sending it.
    ///
    /// A missing `query` falls back to [`DEFAULT_VAULTS_QUERY`] and missing
    /// `variables` to an empty object. Caller `headers` are laid over the
    /// `Content-Type` and `User-Agent` defaults and win on collision.
    ///
    /// Header names are case-insensitive. If `headers` holds two names that
    /// differ only in case (`X-A` and `x-a`), exactly one of them is sent and
    /// which one is unspecified, since `HashMap` iteration order is.
    pub fn build_request(
        &self,
        query: Option<&str>,
        variables: Option<Variables>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<GraphQLRequest, MorphoError> {
        let payload = GraphQLPayload {
            query: query.unwrap_or(DEFAULT_VAULTS_QUERY).to_string(),
            variables: variables.unwrap_or_default(),
        };

        Ok(GraphQLRequest {
            endpoint: self.endpoint.clone(),
            headers: merge_headers(headers)?,
            payload,
        })
    }

    /// Sends one query and returns the decoded JSON body.
    ///
    /// Must be awaited inside a tokio runtime; synchronous callers can wrap
    /// it in `tokio::runtime::Runtime::block_on`.
    pub async fn execute_query(
        &self,
        query: Option<&str>,
        variables: Option<Variables>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Value, MorphoError> {
        let request = self.build_request(query, variables, headers)?;
        debug!(
            endpoint = %request.endpoint,
            variables = request.payload.variables.len(),
            "sending graphql query"
        );

        let response = self.transport.send(request).await?;
        if !response.status.is_success() {
            debug!(status = %response.status, "graphql query rejected");
            return Err(MorphoError::HttpStatus {
                status: response.status.as_u16(),
            });
        }

        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Runs the default vaults query.
    pub async fn get_vault_data(&self) -> Result<Value, MorphoError> {
        self.execute_query(None, None, None).await
    }

    /// Runs the default vaults query and decodes it into [`VaultsResponse`].
    pub async fn get_vaults(&self) -> Result<VaultsResponse, MorphoError> {
        let data = self.get_vault_data().await?;
        VaultsResponse::from_value(data)
    }
}

#[derive(Debug, Default)]
pub struct MorphoClientBuilder {
    endpoint: Option<Url>,
    timeout: Option<Duration>,
}

impl MorphoClientBuilder {
    #[must_use]
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Whole-request timeout. Unset means the call waits indefinitely.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<MorphoClient, MorphoError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Url::parse(MORPHO_GRAPHQL_ENDPOINT)?,
        };
        let transport = ReqwestTransport::new(self.timeout)?;

        Ok(MorphoClient::with_transport(endpoint, transport))
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

// Header names are case-insensitive, so `content-type` replaces `Content-Type`.
fn merge_headers(extra: Option<&HashMap<String, String>>) -> Result<HeaderMap, MorphoError> {
    let mut headers = default_headers();

    for (name, value) in extra.into_iter().flatten() {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| MorphoError::InvalidHeader(format!("{name}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| MorphoError::InvalidHeader(format!("{name}: {e}")))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}
