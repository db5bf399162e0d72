use std::time::Duration;

use reqwest::{Client, StatusCode, header::HeaderMap};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Variables, error::MorphoError};

/// JSON body of a GraphQL request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLPayload {
    pub query: String,
    pub variables: Variables,
}

/// A fully built request, ready to be handed to a [`GraphQLTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLRequest {
    pub endpoint: Url,
    pub headers: HeaderMap,
    pub payload: GraphQLPayload,
}

/// Raw answer from the transport, before status checks and JSON decoding.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait GraphQLTransport: Send + Sync {
    /// Performs exactly one POST. Implementations must not retry.
    async fn send(&self, request: GraphQLRequest) -> Result<TransportResponse, MorphoError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, MorphoError> {
        Ok(Self {
            http_client: http_client(timeout)?,
        })
    }
}

#[async_trait::async_trait]
impl GraphQLTransport for ReqwestTransport {
    async fn send(&self, request: GraphQLRequest) -> Result<TransportResponse, MorphoError> {
        let GraphQLRequest {
            endpoint,
            headers,
            payload,
        } = request;

        let response = self
            .http_client
            .post(endpoint)
            .headers(headers)
            .json(&payload)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

pub fn http_client(timeout: Option<Duration>) -> Result<Client, MorphoError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| {
        tracing::error!("Failed to build HTTP client: {}", e);
        MorphoError::HttpClient(e)
    })
}
