use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A RAG collection as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub name: String,
    pub model_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub documents: Vec<DocumentRef>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
}

impl Collection {
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

/// An ingested document. The UI only ever counts these, so every field is
/// optional and the document body is not kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentRef {
    pub id: String,
    pub name: String,
    pub path: String,
    pub content_type: String,
    pub size: i64,
}

/// A file picked in the create form, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Everything the create endpoint needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRequest {
    pub model_name: String,
    pub rag_name: String,
    pub files: Vec<UploadFile>,
}

#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

// Go encodes a nil slice as `null`.
fn null_as_empty<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}
