//! Deterministic `ModelProvider` stubs for pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::llm_client::{ModelProvider, ProviderError};

/// Scripted provider: canned vision reply plus a cycling list of JSON
/// replies. `None` entries simulate a provider outage. Calls against an
/// unscripted capability panic, which catches stages reaching the network
/// when they should not.
pub struct StubProvider {
    vision: Option<Option<String>>,
    json: Option<Vec<Option<String>>>,
    json_calls: AtomicUsize,
}

impl StubProvider {
    /// Panics if any provider method is invoked.
    pub fn never_called() -> Self {
        Self {
            vision: None,
            json: None,
            json_calls: AtomicUsize::new(0),
        }
    }

    /// Scripted vision reply; JSON completions panic.
    pub fn with_vision(description: &str) -> Self {
        Self {
            vision: Some(Some(description.to_string())),
            json: None,
            json_calls: AtomicUsize::new(0),
        }
    }

    /// Cycling JSON replies; vision calls panic.
    pub fn with_json(replies: &[&str]) -> Self {
        Self {
            vision: None,
            json: Some(replies.iter().map(|r| Some(r.to_string())).collect()),
            json_calls: AtomicUsize::new(0),
        }
    }

    /// Both capabilities scripted.
    pub fn with_vision_and_json(description: &str, replies: &[&str]) -> Self {
        Self {
            vision: Some(Some(description.to_string())),
            json: Some(replies.iter().map(|r| Some(r.to_string())).collect()),
            json_calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails with a simulated outage.
    pub fn failing() -> Self {
        Self {
            vision: Some(None),
            json: Some(vec![None]),
            json_calls: AtomicUsize::new(0),
        }
    }

    /// First JSON reply succeeds, second fails — provider dies between the
    /// Analysis and Generation stages.
    pub fn failing_at_second_json(first: &str) -> Self {
        Self {
            vision: None,
            json: Some(vec![Some(first.to_string()), None]),
            json_calls: AtomicUsize::new(0),
        }
    }

    fn outage() -> ProviderError {
        ProviderError::Api {
            status: 503,
            message: "simulated provider outage".to_string(),
        }
    }
}

#[async_trait]
impl ModelProvider for StubProvider {
    async fn complete_json(&self, _system: &str, _prompt: &str) -> Result<String, ProviderError> {
        let replies = self
            .json
            .as_ref()
            .expect("unexpected complete_json call on stub");
        let i = self.json_calls.fetch_add(1, Ordering::SeqCst);
        match &replies[i % replies.len()] {
            Some(reply) => Ok(reply.clone()),
            None => Err(Self::outage()),
        }
    }

    async fn describe_image(
        &self,
        _image: &[u8],
        _mime_type: &str,
        _instruction: &str,
    ) -> Result<String, ProviderError> {
        match self
            .vision
            .as_ref()
            .expect("unexpected describe_image call on stub")
        {
            Some(reply) => Ok(reply.clone()),
            None => Err(Self::outage()),
        }
    }
}
