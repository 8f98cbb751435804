use serde::{Deserialize, Serialize};

/// Address of the local RAG service.
pub const DEFAULT_API_BASE: &str = "http://localhost:3001/api";

/// Models offered by the create form. The first one is preselected.
pub const MODEL_CHOICES: [&str; 3] = ["llama3", "mistral", "gemma"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn default_model() -> &'static str {
        MODEL_CHOICES[0]
    }
}
