//! One-shot agent loop.
//!
//! The runner drives a model-directed reasoning loop: each turn sends the
//! transcript plus the tool catalog to the provider; replies that carry
//! tool calls are dispatched through the registry and their results fed
//! back; a reply without tool calls is the final answer.

use std::sync::Arc;

use tracing::debug;

use crate::error::Error;
use crate::message::Message;
use crate::provider::{CompletionRequest, Provider};
use crate::tool::ToolRegistry;

/// Hard ceiling on reasoning turns for a single run. Two tool rounds plus
/// headroom is enough for the search-then-summarize flow.
pub const DEFAULT_MAX_TURNS: usize = 8;

/// Configuration for a single agent run.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Agent name, used in logs and error messages.
    pub name: String,
    /// System prompt for the agent.
    pub system_prompt: Option<String>,
    /// Sampling temperature forwarded to every completion.
    pub temperature: Option<f32>,
    /// Maximum reasoning turns before the run is aborted.
    pub max_turns: usize,
}

impl AgentConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system_prompt: None,
            temperature: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }
}

/// Drives one orchestration run from task instruction to final text.
///
/// Holds no state across runs; a runner is built fresh per request.
pub struct AgentRunner {
    provider: Arc<dyn Provider>,
    tools: Arc<ToolRegistry>,
    config: AgentConfig,
}

impl AgentRunner {
    pub fn new(provider: Arc<dyn Provider>, tools: Arc<ToolRegistry>, config: AgentConfig) -> Self {
        Self {
            provider,
            tools,
            config,
        }
    }

    /// Run the loop until the model produces a final answer.
    ///
    /// Tool execution errors propagate and terminate the run; only an
    /// unknown tool name is fed back to the model as an error-text result
    /// so it can recover by picking a registered tool.
    pub async fn run(&self, task: impl Into<String>) -> Result<String, Error> {
        let mut messages = Vec::new();

        if let Some(system) = &self.config.system_prompt {
            messages.push(Message::system(system.as_str()));
        }
        messages.push(Message::user(task));

        debug!(
            agent = %self.config.name,
            tools_available = self.tools.len(),
            max_turns = self.config.max_turns,
            "Agent run starting"
        );

        for turn in 0..self.config.max_turns {
            debug!(
                agent = %self.config.name,
                turn = turn,
                message_count = messages.len(),
                "Agent turn starting"
            );

            let mut request =
                CompletionRequest::new(messages.clone()).with_tools(self.tools.definitions());
            if let Some(temperature) = self.config.temperature {
                request = request.with_temperature(temperature);
            }

            let response = self.provider.complete(request).await?;
            let tool_calls = response.message.tool_calls;

            if !tool_calls.is_empty() {
                debug!(
                    agent = %self.config.name,
                    tool_count = tool_calls.len(),
                    "Agent executing tools"
                );

                // Store the assistant turn with its tool calls but without
                // content; intermediate commentary is not part of the answer.
                messages.push(Message::assistant_with_tool_calls("", tool_calls.clone()));

                for tool_call in &tool_calls {
                    debug!(
                        agent = %self.config.name,
                        tool = %tool_call.name,
                        "Executing tool"
                    );
                    let result = self.dispatch(tool_call).await?;
                    messages.push(Message::tool_result(&tool_call.id, result));
                }

                continue;
            }

            let content = response.message.content;
            debug!(
                agent = %self.config.name,
                turns = turn + 1,
                response_len = content.len(),
                "Agent completed"
            );
            return Ok(content);
        }

        Err(Error::Unknown(format!(
            "Agent {} exceeded max turns ({})",
            self.config.name, self.config.max_turns
        )))
    }

    /// Dispatch a single tool call through the registry.
    async fn dispatch(&self, tool_call: &crate::message::ToolCall) -> Result<String, Error> {
        let Some(tool) = self.tools.get(&tool_call.name) else {
            return Ok(format!("Error: Unknown tool '{}'", tool_call.name));
        };

        let output = tool.execute(tool_call.arguments.clone()).await?;
        if output.is_error {
            Ok(format!("Error: {}", output.content))
        } else {
            Ok(output.content)
        }
    }
}
