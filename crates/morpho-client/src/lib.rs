pub mod client;
pub mod dto;
pub mod error;
pub mod query;
pub mod transport;

pub use client::{MorphoClient, MorphoClientBuilder, Variables};
pub use error::MorphoError;
pub use query::{DEFAULT_USER_AGENT, DEFAULT_VAULTS_QUERY, MORPHO_GRAPHQL_ENDPOINT};
pub use transport::{
    GraphQLPayload, GraphQLRequest, GraphQLTransport, ReqwestTransport, TransportResponse,
};

pub use dto::*;
