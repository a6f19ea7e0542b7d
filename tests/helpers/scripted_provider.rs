// ABOUTME: Scripted LlmProvider returning canned replies, errors, or delays
// ABOUTME: Counts calls and records prompts so tests can prove what reached the model

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use pierre_mind_server::errors::{AppError, ErrorCode};
use pierre_mind_server::llm::{Completion, CompletionRequest, GenerationCapabilities, LlmProvider};

/// What the provider does when called
#[derive(Debug, Clone)]
pub enum Script {
    /// Answer with this text
    Reply(String),
    /// Fail with this error code
    Fail(ErrorCode),
    /// Sleep, then answer
    Slow(Duration, String),
}

/// Provider double with a fixed behavior
#[derive(Debug)]
pub struct ScriptedLlmProvider {
    script: Script,
    calls: AtomicUsize,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedLlmProvider {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(text: &str) -> Arc<Self> {
        Self::new(Script::Reply(text.to_owned()))
    }

    pub fn failing(code: ErrorCode) -> Arc<Self> {
        Self::new(Script::Fail(code))
    }

    pub fn slow(delay: Duration, text: &str) -> Arc<Self> {
        Self::new(Script::Slow(delay, text.to_owned()))
    }

    /// Number of `complete` calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Prompt text of the most recent request
    pub fn last_prompt(&self) -> String {
        self.requests()
            .last()
            .map(|r| r.prompt.clone())
            .expect("provider was never called")
    }
}

#[async_trait]
impl LlmProvider for ScriptedLlmProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn capabilities(&self) -> GenerationCapabilities {
        GenerationCapabilities::JSON_OUTPUT
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let text = match &self.script {
            Script::Reply(text) => text.clone(),
            Script::Fail(code) => return Err(AppError::new(*code, "scripted failure")),
            Script::Slow(delay, text) => {
                tokio::time::sleep(*delay).await;
                text.clone()
            }
        };

        Ok(Completion {
            text,
            model: "scripted-model".to_owned(),
            finish_reason: Some("STOP".to_owned()),
            total_tokens: None,
        })
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}
