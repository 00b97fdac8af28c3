//! Impact analyst — trait seam isolating the non-deterministic LLM step.
//!
//! Everything up to the prompt string is pure and testable; everything after
//! it is the model's responsibility. `AppState` holds an
//! `Arc<dyn ImpactAnalyst>`, so handlers and tests never depend on the live
//! completion API.

use async_trait::async_trait;

use crate::assessment::prompts::ASSESSMENT_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// The analysis backend trait. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn ImpactAnalyst>`.
#[async_trait]
pub trait ImpactAnalyst: Send + Sync {
    /// Runs one completion over the fully built prompt and returns the report
    /// text verbatim.
    async fn analyze(&self, prompt: &str) -> Result<String, AppError>;
}

/// Production analyst backed by the completion API.
pub struct LlmImpactAnalyst {
    llm: LlmClient,
}

impl LlmImpactAnalyst {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ImpactAnalyst for LlmImpactAnalyst {
    async fn analyze(&self, prompt: &str) -> Result<String, AppError> {
        self.llm
            .call_text(prompt, ASSESSMENT_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Impact analysis failed: {e}")))
    }
}
