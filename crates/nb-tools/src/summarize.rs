//! `summarize_news` tool — condense headline text into a short
//! Portuguese summary through the shared LLM provider.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use nb_core::{
    CompletionRequest, Error, Message, PropertySchema, Provider, Tool, ToolDefinition, ToolOutput,
    ToolParameters,
};

/// Canonical tool name.
pub const SUMMARIZE_NEWS: &str = "summarize_news";

/// Fixed prompt template; `{text}` is the sole variable.
const PROMPT_TEMPLATE: &str = "Resuma as seguintes manchetes em português, \
destacando o tema principal e o contexto geral:\n\n{text}";

/// Summarizes supplied text with a single completion call.
///
/// Shares the process-wide provider handle; the summary length is
/// requested via the prompt, not enforced programmatically.
pub struct SummarizeNewsTool {
    provider: Arc<dyn Provider>,
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct SummarizeArgs {
    text: String,
}

impl SummarizeNewsTool {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    fn render_prompt(text: &str) -> String {
        PROMPT_TEMPLATE.replace("{text}", text)
    }
}

#[async_trait]
impl Tool for SummarizeNewsTool {
    fn name(&self) -> &str {
        SUMMARIZE_NEWS
    }

    fn description(&self) -> &str {
        "Gera um resumo em português sobre as notícias encontradas."
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description()).with_parameters(
            ToolParameters::new().add_property(
                "text",
                PropertySchema::string("Manchetes a resumir, uma por linha"),
                true,
            ),
        )
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolOutput, Error> {
        let args: SummarizeArgs = serde_json::from_value(arguments)
            .map_err(|e| Error::tool(SUMMARIZE_NEWS, format!("Invalid arguments: {}", e)))?;

        let mut request =
            CompletionRequest::new(vec![Message::user(Self::render_prompt(&args.text))]);
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }

        let response = self.provider.complete(request).await?;
        let summary = response.message.content.trim().to_string();

        debug!(summary = %summary, "Summary generated");
        Ok(ToolOutput::success(summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nb_core::testing::MockProvider;

    #[test]
    fn test_render_prompt() {
        let prompt = SummarizeNewsTool::render_prompt("Manchete A\nManchete B");
        assert!(prompt.starts_with("Resuma as seguintes manchetes"));
        assert!(prompt.ends_with("Manchete A\nManchete B"));
        assert!(!prompt.contains("{text}"));
    }

    #[tokio::test]
    async fn test_execute_trims_model_output() {
        let provider = Arc::new(MockProvider::new());
        provider.queue_response("  O tema central é a economia.  \n");

        let tool = SummarizeNewsTool::new(provider.clone());
        let output = tool
            .execute(serde_json::json!({"text": "Manchete A\nManchete B"}))
            .await
            .unwrap();

        assert!(!output.is_error);
        assert_eq!(output.content, "O tema central é a economia.");

        // The filled template must have reached the model unchanged.
        let request = provider.last_request().unwrap();
        assert!(request.messages[0].content.contains("Manchete A"));
    }

    #[tokio::test]
    async fn test_execute_rejects_missing_text() {
        let provider = Arc::new(MockProvider::new());
        let tool = SummarizeNewsTool::new(provider);

        let err = tool.execute(serde_json::json!({})).await.unwrap_err();
        assert!(matches!(err, Error::Tool { .. }));
    }

    #[tokio::test]
    async fn test_execute_propagates_model_failure() {
        // Nothing queued: the mock returns an error, which must surface.
        let provider = Arc::new(MockProvider::new());
        let tool = SummarizeNewsTool::new(provider);

        let err = tool
            .execute(serde_json::json!({"text": "Manchete"}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unknown(_)));
    }
}
