//! Shared test helpers for pipeline tests.

use std::sync::Mutex;
use twinvoice_core::error::ProviderError;
use twinvoice_core::message::Message;
use twinvoice_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};

/// A mock provider that plays back scripted results in order and records
/// every request it receives.
///
/// Panics if more calls are made than results provided.
pub struct ScriptedProvider {
    results: Mutex<Vec<Result<ProviderResponse, ProviderError>>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new(results: Vec<Result<ProviderResponse, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A provider that answers once with `text`.
    pub fn text(text: &str) -> Self {
        Self::new(vec![Ok(make_text_response(text))])
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

/// A provider whose single call fails with `error`.
pub fn failing(error: ProviderError) -> ScriptedProvider {
    ScriptedProvider::new(vec![Err(error)])
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut requests = self.requests.lock().unwrap();
        let results = self.results.lock().unwrap();
        let call = requests.len();
        if call >= results.len() {
            panic!(
                "ScriptedProvider: no more results (call #{}, have {})",
                call,
                results.len()
            );
        }
        requests.push(request);
        results[call].clone()
    }
}

/// A plain text response.
pub fn make_text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Message::assistant(text),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock-model".into(),
    }
}
