//! Client for the RAG service REST API.
//!
//! Every call is a single round trip with no retry or timeout. Any non-success
//! response becomes an [`ApiError`] carrying the raw body text, so views can
//! show it as-is.

use std::{ops::Deref, rc::Rc};

use async_trait::async_trait;
use thiserror::Error;

mod http;
mod types;

pub use http::HttpRagApi;
pub use types::{Collection, CreateRequest, DocumentRef, QueryRequest, QueryResponse, UploadFile};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// The request never completed, or the success body was not what we expected.
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    pub fn http(status: u16, body: &str, fallback: &str) -> Self {
        ApiError::Http {
            status,
            message: error_message(body, fallback),
        }
    }
}

/// Message shown for a failed call: the body text, or `fallback` if the body is empty.
pub fn error_message(body: &str, fallback: &str) -> String {
    if body.is_empty() {
        fallback.to_string()
    } else {
        body.to_string()
    }
}

#[async_trait(?Send)]
pub trait RagApi {
    async fn create_rag(&self, req: CreateRequest) -> Result<Collection, ApiError>;
    async fn list_rags(&self) -> Result<Vec<Collection>, ApiError>;
    async fn get_rag(&self, name: &str) -> Result<Collection, ApiError>;
    async fn delete_rag(&self, name: &str) -> Result<(), ApiError>;
    /// Returns only the answer text; any other metadata in the reply is dropped.
    async fn query_rag(&self, name: &str, query: &str) -> Result<String, ApiError>;
}

/// Shared handle to the API, provided to every view through context.
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn RagApi>);

impl ApiHandle {
    pub fn new(api: impl RagApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl<A: RagApi + 'static> From<Rc<A>> for ApiHandle {
    fn from(api: Rc<A>) -> Self {
        Self(api)
    }
}

impl Deref for ApiHandle {
    type Target = dyn RagApi;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
