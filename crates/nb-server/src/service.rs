//! The news service: builds a per-request tool set and drives the agent.

use std::sync::Arc;

use tracing::info;

use nb_core::{AgentConfig, AgentRunner, Error, Provider, ToolRegistry, DEFAULT_MAX_TURNS};
use nb_tools::{SearchNewsTool, SummarizeNewsTool};

use crate::config::Config;
use crate::models::{ApiResult, NewsInput, NewsOutput};

/// Stateless orchestration entry point, shared across requests.
///
/// Holds only read-only handles; every run builds its own registry
/// because the search tool binds the request's topic at construction.
pub struct NewsService {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: Option<f32>,
    search_base_url: String,
    max_turns: usize,
}

impl std::fmt::Debug for NewsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsService")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("search_base_url", &self.search_base_url)
            .field("max_turns", &self.max_turns)
            .finish_non_exhaustive()
    }
}

impl NewsService {
    /// Fails fast on an unusable model configuration, before any
    /// network traffic.
    pub fn new(provider: Arc<dyn Provider>, config: &Config) -> Result<Self, Error> {
        if config.openai.api_key.trim().is_empty() {
            return Err(Error::config("OpenAI API key is not set"));
        }
        if config.openai.model.trim().is_empty() {
            return Err(Error::config("OpenAI model is not set"));
        }

        Ok(Self {
            provider,
            model: config.openai.model.clone(),
            temperature: config.openai.temperature,
            search_base_url: config.search.base_url.clone(),
            max_turns: DEFAULT_MAX_TURNS,
        })
    }

    /// Run the full search-then-summarize flow for one topic.
    pub async fn run(&self, input: &NewsInput) -> Result<ApiResult<NewsOutput>, Error> {
        let topic = input.topic.trim();
        if topic.is_empty() {
            return Err(Error::invalid_request("topic must not be empty"));
        }

        info!(model = %self.model, topic = %topic, "News run starting");

        let mut registry = ToolRegistry::new();
        registry.register(Box::new(SearchNewsTool::with_base_url(
            topic,
            self.search_base_url.as_str(),
        )));
        let mut summarize = SummarizeNewsTool::new(self.provider.clone());
        if let Some(temperature) = self.temperature {
            summarize = summarize.with_temperature(temperature);
        }
        registry.register(Box::new(summarize));

        let mut agent_config = AgentConfig::new("newsbrief").with_max_turns(self.max_turns);
        if let Some(temperature) = self.temperature {
            agent_config = agent_config.with_temperature(temperature);
        }

        let runner = AgentRunner::new(self.provider.clone(), Arc::new(registry), agent_config);
        let answer = runner.run(task_instruction(topic)).await?;

        Ok(ApiResult::ok(NewsOutput {
            content: answer.trim().to_string(),
        }))
    }
}

fn task_instruction(topic: &str) -> String {
    format!(
        "Siga as etapas:\n\
         1. Use 'search_news' para buscar as 3 notícias mais recentes sobre o tema \"{}\".\n\
         2. Use 'summarize_news' para gerar um resumo em português das notícias encontradas.\n\
         3. Responda de forma organizada, no formato:\n\
         - Título 1\n\
         - Título 2\n\
         - Título 3\n\
         Resumo: <resumo em até 5 linhas>",
        topic
    )
}
