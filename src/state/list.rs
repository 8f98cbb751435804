use dioxus::logger::tracing::info;

use super::StateCell;
use crate::api::{ApiError, Collection, RagApi};

#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    Loading,
    Ready(Vec<Collection>),
    /// The fetch failed; only the message is shown.
    Failed(String),
}

/// State behind the collection list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub phase: ListPhase,
    /// Error from the last delete, shown above the list.
    pub notice: Option<String>,
    /// Collection whose delete is waiting for confirmation.
    pub confirming: Option<String>,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            phase: ListPhase::Loading,
            notice: None,
            confirming: None,
        }
    }
}

impl ListState {
    pub fn collections(&self) -> Option<&[Collection]> {
        match &self.phase {
            ListPhase::Ready(c) => Some(c),
            _ => None,
        }
    }

    pub fn start_loading(&mut self) {
        self.phase = ListPhase::Loading;
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<Collection>, ApiError>) {
        match result {
            Ok(c) => {
                self.phase = ListPhase::Ready(c);
                self.notice = None;
            }
            Err(e) => {
                self.phase = ListPhase::Failed(format!("Error loading RAGs: {e}"));
            }
        }
    }

    pub fn request_delete(&mut self, name: &str) {
        self.confirming = Some(name.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.confirming = None;
    }

    /// Consumes the pending confirmation, returning the name to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.confirming.take()
    }

    /// Returns true when the list has to be fetched again.
    pub fn apply_delete(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.notice = None;
                true
            }
            Err(e) => {
                self.notice = Some(format!("Error deleting RAG: {e}"));
                false
            }
        }
    }
}

pub async fn refresh<A, C>(api: &A, cell: &C)
where
    A: RagApi + ?Sized,
    C: StateCell<ListState>,
{
    cell.mutate(ListState::start_loading);
    let result = api.list_rags().await;
    cell.mutate(|s| s.apply_fetch(result));
}

/// Deletes the collection awaiting confirmation, then re-fetches the list on success.
pub async fn delete_confirmed<A, C>(api: &A, cell: &C)
where
    A: RagApi + ?Sized,
    C: StateCell<ListState>,
{
    let Some(name) = cell.mutate(ListState::confirm_delete) else {
        return;
    };
    info!("deleting {name}");
    let result = api.delete_rag(&name).await;
    if cell.mutate(|s| s.apply_delete(result)) {
        refresh(api, cell).await;
    }
}
