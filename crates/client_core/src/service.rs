//! Remote computation service client.
//!
//! Three self-contained request/response operations: two graph drawings and
//! the optimal k-poset-cover solve. Both endpoints double-encode their JSON
//! payload (the body is a JSON string whose content is the actual document),
//! so decoding goes through an outer string first.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shared::{
    domain::{DrawingMethod, Relation},
    error::ApiError,
    protocol::{GraphPayload, GraphRequest, PosetCoverResponse},
};
use thiserror::Error;
use tracing::info;
use url::Url;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("service rejected request ({status}): {detail}")]
    Api { status: StatusCode, detail: String },
    #[error("malformed service payload: {0}")]
    Malformed(String),
    #[error("invalid service url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("poset service is unavailable")]
    Unavailable,
}

#[async_trait]
pub trait PosetService: Send + Sync {
    /// Draws the adjacent transposition graph for a set of linear orders,
    /// optionally highlighting a subset of its nodes.
    async fn draw_graph(
        &self,
        size: usize,
        drawing_method: DrawingMethod,
        selected_nodes: Vec<String>,
        highlighted_nodes: Vec<String>,
    ) -> Result<GraphPayload, ServiceError>;

    /// Draws the graph of the poset given by its cover relations.
    async fn draw_graph_from_cover_relation(
        &self,
        size: usize,
        drawing_method: DrawingMethod,
        cover_relation: Vec<Relation>,
    ) -> Result<GraphPayload, ServiceError>;

    /// Solves for an optimal cover of `upsilon` by at most `k` posets.
    /// `None` means the solver found no cover.
    async fn solve_k_poset_cover(
        &self,
        k: usize,
        upsilon: Vec<String>,
    ) -> Result<Option<PosetCoverResponse>, ServiceError>;
}

pub struct HttpPosetService {
    http: Client,
    base_url: Url,
}

impl HttpPosetService {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Ok(self.base_url.join(path)?)
    }

    async fn post_graph(&self, request: &GraphRequest) -> Result<GraphPayload, ServiceError> {
        let response = self
            .http
            .post(self.endpoint("/graph")?)
            .json(request)
            .send()
            .await?;
        let response = check_status(response).await?;
        decode_double_encoded(response).await
    }
}

async fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.json::<ApiError>().await {
        Ok(body) => body.detail,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Err(ServiceError::Api { status, detail })
}

async fn decode_double_encoded<T>(response: Response) -> Result<T, ServiceError>
where
    T: serde::de::DeserializeOwned,
{
    let raw: String = response.json().await?;
    serde_json::from_str(&raw).map_err(|err| ServiceError::Malformed(err.to_string()))
}

#[async_trait]
impl PosetService for HttpPosetService {
    async fn draw_graph(
        &self,
        size: usize,
        drawing_method: DrawingMethod,
        selected_nodes: Vec<String>,
        highlighted_nodes: Vec<String>,
    ) -> Result<GraphPayload, ServiceError> {
        info!(
            size,
            method = %drawing_method,
            selected = selected_nodes.len(),
            highlighted = highlighted_nodes.len(),
            "graph: requesting linear orders drawing"
        );
        self.post_graph(&GraphRequest::linear_orders(
            size,
            drawing_method,
            selected_nodes,
            highlighted_nodes,
        ))
        .await
    }

    async fn draw_graph_from_cover_relation(
        &self,
        size: usize,
        drawing_method: DrawingMethod,
        cover_relation: Vec<Relation>,
    ) -> Result<GraphPayload, ServiceError> {
        info!(
            size,
            method = %drawing_method,
            relations = cover_relation.len(),
            "graph: requesting cover relation drawing"
        );
        self.post_graph(&GraphRequest::cover_relation(
            size,
            drawing_method,
            cover_relation,
        ))
        .await
    }

    async fn solve_k_poset_cover(
        &self,
        k: usize,
        upsilon: Vec<String>,
    ) -> Result<Option<PosetCoverResponse>, ServiceError> {
        info!(k, upsilon = upsilon.len(), "solve: requesting optimal poset cover");

        let mut query: Vec<(&str, String)> = vec![("k", k.to_string())];
        query.extend(upsilon.into_iter().map(|order| ("upsilon", order)));

        let response = self
            .http
            .get(self.endpoint("/solve")?)
            .query(&query)
            .send()
            .await?;
        let response = check_status(response).await?;

        // An empty JSON object is the solver's "no cover found" answer.
        let document: serde_json::Value = decode_double_encoded(response).await?;
        match document.as_object() {
            Some(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(document)
                .map(Some)
                .map_err(|err| ServiceError::Malformed(err.to_string())),
        }
    }
}

/// Null implementation for wiring without a configured service endpoint.
pub struct MissingPosetService;

#[async_trait]
impl PosetService for MissingPosetService {
    async fn draw_graph(
        &self,
        _size: usize,
        _drawing_method: DrawingMethod,
        _selected_nodes: Vec<String>,
        _highlighted_nodes: Vec<String>,
    ) -> Result<GraphPayload, ServiceError> {
        Err(ServiceError::Unavailable)
    }

    async fn draw_graph_from_cover_relation(
        &self,
        _size: usize,
        _drawing_method: DrawingMethod,
        _cover_relation: Vec<Relation>,
    ) -> Result<GraphPayload, ServiceError> {
        Err(ServiceError::Unavailable)
    }

    async fn solve_k_poset_cover(
        &self,
        _k: usize,
        _upsilon: Vec<String>,
    ) -> Result<Option<PosetCoverResponse>, ServiceError> {
        Err(ServiceError::Unavailable)
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
