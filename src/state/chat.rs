use dioxus::logger::tracing::info;

use super::StateCell;
use crate::api::{ApiError, Collection, RagApi};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    System,
    Assistant,
    Error,
}

impl Sender {
    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::System => "system",
            Sender::Assistant => "assistant",
            Sender::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }
}

/// A query that has been added to the transcript and is waiting for its answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    generation: u64,
    pub rag_name: String,
    pub query: String,
}

/// Chat state for one collection.
///
/// `generation` is bumped every time the view switches to a collection, and
/// settlements carrying an older generation are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    rag_name: String,
    generation: u64,
    info: Option<Collection>,
    transcript: Vec<ChatMessage>,
    /// The metadata fetch for the current generation has settled.
    loaded: bool,
    sending: bool,
}

impl ChatSession {
    pub fn rag_name(&self) -> &str {
        &self.rag_name
    }

    pub fn info(&self) -> Option<&Collection> {
        self.info.as_ref()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Whether the input should accept a message right now.
    pub fn can_send(&self) -> bool {
        self.loaded && !self.sending
    }

    /// Switches to `rag_name`, forgetting everything about the previous one.
    pub fn open(&mut self, rag_name: &str) -> u64 {
        self.generation += 1;
        self.rag_name = rag_name.to_string();
        self.info = None;
        self.transcript.clear();
        self.loaded = false;
        self.sending = false;
        self.generation
    }

    /// Seeds the transcript from the metadata fetch. Overwrites, never appends.
    pub fn apply_load(&mut self, generation: u64, result: Result<Collection, ApiError>) {
        if generation != self.generation {
            info!("dropping stale metadata for generation {generation}");
            return;
        }
        self.loaded = true;
        match result {
            Ok(c) => {
                self.info = Some(c);
                self.transcript = vec![ChatMessage::new(Sender::System, welcome_text(&self.rag_name))];
            }
            Err(e) => {
                self.info = None;
                self.transcript = vec![ChatMessage::new(
                    Sender::Error,
                    format!("Error loading RAG \"{}\": {e}", self.rag_name),
                )];
            }
        }
    }

    /// Appends the user's message and marks a send as pending. Blank input,
    /// input before the metadata fetch settles and input arriving while
    /// another send is pending are all ignored.
    pub fn begin_send(&mut self, input: &str) -> Option<PendingSend> {
        if input.trim().is_empty() || !self.can_send() {
            return None;
        }
        self.transcript.push(ChatMessage::new(Sender::User, input));
        self.sending = true;
        Some(PendingSend {
            generation: self.generation,
            rag_name: self.rag_name.clone(),
            query: input.to_string(),
        })
    }

    pub fn finish_send(&mut self, pending: &PendingSend, result: Result<String, ApiError>) {
        if pending.generation != self.generation {
            info!("dropping stale answer for {}", pending.rag_name);
            return;
        }
        let msg = match result {
            Ok(text) => ChatMessage::new(Sender::Assistant, text),
            Err(e) => ChatMessage::new(Sender::Error, format!("Error: {e}")),
        };
        self.transcript.push(msg);
        self.sending = false;
    }
}

pub fn welcome_text(rag_name: &str) -> String {
    format!("Welcome! You can ask questions about documents in the \"{rag_name}\" collection.")
}

pub async fn load<A, C>(api: &A, cell: &C, rag_name: &str)
where
    A: RagApi + ?Sized,
    C: StateCell<ChatSession>,
{
    let generation = cell.mutate(|s| s.open(rag_name));
    let result = api.get_rag(rag_name).await;
    cell.mutate(|s| s.apply_load(generation, result));
}

pub async fn send<A, C>(api: &A, cell: &C, input: &str)
where
    A: RagApi + ?Sized,
    C: StateCell<ChatSession>,
{
    let Some(pending) = cell.mutate(|s| s.begin_send(input)) else {
        return;
    };
    let result = api.query_rag(&pending.rag_name, &pending.query).await;
    cell.mutate(|s| s.finish_send(&pending, result));
}
