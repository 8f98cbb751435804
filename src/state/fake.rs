use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::{ApiError, Collection, CreateRequest, RagApi};

type Script<T> = RefCell<VecDeque<Result<T, ApiError>>>;

/// Scripted [`RagApi`] that records every call it receives. Every call
/// suspends once before answering, like a request on the wire.
#[derive(Default)]
pub struct FakeApi {
    calls: RefCell<Vec<String>>,
    creates: Script<Collection>,
    lists: Script<Vec<Collection>>,
    gets: Script<Collection>,
    deletes: Script<()>,
    queries: Script<String>,
    pub created: RefCell<Vec<CreateRequest>>,
    /// When set, `query_rag` waits for a permit before answering.
    pub query_gate: Option<Rc<Notify>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_create(self, r: Result<Collection, ApiError>) -> Self {
        self.creates.borrow_mut().push_back(r);
        self
    }

    pub fn on_list(self, r: Result<Vec<Collection>, ApiError>) -> Self {
        self.lists.borrow_mut().push_back(r);
        self
    }

    pub fn on_get(self, r: Result<Collection, ApiError>) -> Self {
        self.gets.borrow_mut().push_back(r);
        self
    }

    pub fn on_delete(self, r: Result<(), ApiError>) -> Self {
        self.deletes.borrow_mut().push_back(r);
        self
    }

    pub fn on_query(self, r: Result<String, ApiError>) -> Self {
        self.queries.borrow_mut().push_back(r);
        self
    }

    pub fn gated(mut self, gate: Rc<Notify>) -> Self {
        self.query_gate = Some(gate);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

async fn next<T>(script: &Script<T>) -> Result<T, ApiError> {
    tokio::task::yield_now().await;
    let answer = script.borrow_mut().pop_front();
    answer.unwrap_or_else(|| Err(ApiError::http(500, "", "unscripted call")))
}

pub fn failure(body: &str) -> ApiError {
    ApiError::http(500, body, "request failed")
}

pub fn collection(name: &str) -> Collection {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "model_name": "llama3",
        "documents": [],
        "created_at": "2025-01-01T00:00:00Z",
    }))
    .unwrap()
}

#[async_trait(?Send)]
impl RagApi for FakeApi {
    async fn create_rag(&self, req: CreateRequest) -> Result<Collection, ApiError> {
        self.record(format!("create {}", req.rag_name));
        self.created.borrow_mut().push(req);
        next(&self.creates).await
    }

    async fn list_rags(&self) -> Result<Vec<Collection>, ApiError> {
        self.record("list".to_string());
        next(&self.lists).await
    }

    async fn get_rag(&self, name: &str) -> Result<Collection, ApiError> {
        self.record(format!("get {name}"));
        next(&self.gets).await
    }

    async fn delete_rag(&self, name: &str) -> Result<(), ApiError> {
        self.record(format!("delete {name}"));
        next(&self.deletes).await
    }

    async fn query_rag(&self, name: &str, query: &str) -> Result<String, ApiError> {
        self.record(format!("query {name} {query}"));
        if let Some(gate) = &self.query_gate {
            gate.notified().await;
        }
        next(&self.queries).await
    }
}
