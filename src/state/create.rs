use dioxus::logger::tracing::info;

use super::StateCell;
use crate::{
    api::{ApiError, Collection, CreateRequest, RagApi, UploadFile},
    config::AppConfig,
};

pub const NAME_REQUIRED: &str = "Please enter a RAG name";
pub const FILES_REQUIRED: &str = "Please select at least one file";

/// State behind the create page.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateForm {
    pub rag_name: String,
    pub model_name: String,
    pub files: Vec<UploadFile>,
    pub submitting: bool,
    /// Validation or request error, shown above the form.
    pub error: Option<String>,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            rag_name: String::new(),
            model_name: AppConfig::default_model().to_string(),
            files: vec![],
            submitting: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing was sent: invalid input or a submission already in flight.
    Rejected,
    Created(Collection),
    Failed,
}

impl CreateForm {
    /// Replaces the current selection.
    pub fn set_files(&mut self, files: Vec<UploadFile>) {
        self.files = files;
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    /// Validates the form and, if it passes, marks it as submitting and
    /// returns the payload to send.
    pub fn begin_submit(&mut self) -> Option<CreateRequest> {
        if self.submitting {
            return None;
        }
        let rag_name = self.rag_name.trim();
        if rag_name.is_empty() {
            self.error = Some(NAME_REQUIRED.to_string());
            return None;
        }
        if self.files.is_empty() {
            self.error = Some(FILES_REQUIRED.to_string());
            return None;
        }
        let req = CreateRequest {
            model_name: self.model_name.clone(),
            rag_name: rag_name.to_string(),
            files: self.files.clone(),
        };
        self.error = None;
        self.submitting = true;
        Some(req)
    }

    pub fn finish_submit(&mut self, result: Result<Collection, ApiError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(c) => SubmitOutcome::Created(c),
            Err(e) => {
                self.error = Some(format!("Error creating RAG: {e}"));
                SubmitOutcome::Failed
            }
        }
    }
}

pub async fn submit<A, C>(api: &A, cell: &C) -> SubmitOutcome
where
    A: RagApi + ?Sized,
    C: StateCell<CreateForm>,
{
    let Some(req) = cell.mutate(CreateForm::begin_submit) else {
        return SubmitOutcome::Rejected;
    };
    info!("creating {} with {} files", req.rag_name, req.files.len());
    let result = api.create_rag(req).await;
    cell.mutate(|f| f.finish_submit(result))
}
