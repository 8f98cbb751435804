use async_trait::async_trait;
use dioxus::logger::tracing::{info, warn};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};

use super::{ApiError, Collection, CreateRequest, QueryRequest, QueryResponse, RagApi};
use crate::config::AppConfig;

/// Characters that cannot appear raw inside one path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// [`RagApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRagApi {
    base: String,
    client: Client,
}

impl HttpRagApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn rags_url(&self) -> String {
        format!("{}/rag", self.base)
    }

    fn rag_url(&self, name: &str) -> String {
        format!("{}/rag/{}", self.base, utf8_percent_encode(name, SEGMENT))
    }

    fn query_url(&self, name: &str) -> String {
        format!("{}/query/{}", self.base, utf8_percent_encode(name, SEGMENT))
    }
}

/// Passes success responses through and turns anything else into [`ApiError::Http`].
async fn ensure_success(resp: Response, fallback: &str) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    warn!("request failed with {status}: {body}");
    Err(ApiError::http(status.as_u16(), &body, fallback))
}

#[async_trait(?Send)]
impl RagApi for HttpRagApi {
    async fn create_rag(&self, req: CreateRequest) -> Result<Collection, ApiError> {
        let url = self.rags_url();
        info!("POST {url} ({} files)", req.files.len());
        let mut form = Form::new()
            .text("modelName", req.model_name)
            .text("ragName", req.rag_name);
        for f in req.files {
            form = form.part("files", Part::bytes(f.bytes).file_name(f.name));
        }
        let resp = self.client.post(&url).multipart(form).send().await?;
        let resp = ensure_success(resp, "Failed to create RAG system").await?;
        Ok(resp.json().await?)
    }

    async fn list_rags(&self) -> Result<Vec<Collection>, ApiError> {
        let url = self.rags_url();
        info!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        let resp = ensure_success(resp, "Failed to fetch RAG systems").await?;
        Ok(resp.json().await?)
    }

    async fn get_rag(&self, name: &str) -> Result<Collection, ApiError> {
        let url = self.rag_url(name);
        info!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        let resp = ensure_success(resp, "Failed to fetch RAG details").await?;
        Ok(resp.json().await?)
    }

    async fn delete_rag(&self, name: &str) -> Result<(), ApiError> {
        let url = self.rag_url(name);
        info!("DELETE {url}");
        let resp = self.client.delete(&url).send().await?;
        ensure_success(resp, "Failed to delete RAG system").await?;
        Ok(())
    }

    async fn query_rag(&self, name: &str, query: &str) -> Result<String, ApiError> {
        let url = self.query_url(name);
        info!("POST {url}");
        let resp = self
            .client
            .post(&url)
            .json(&QueryRequest { query })
            .send()
            .await?;
        let resp = ensure_success(resp, "Failed to query RAG system").await?;
        let body: QueryResponse = resp.json().await?;
        Ok(body.response)
    }
}
