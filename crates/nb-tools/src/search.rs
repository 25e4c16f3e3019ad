//! `search_news` tool — scrape recent headlines from DuckDuckGo's HTML
//! results page.
//!
//! The extraction is deliberately a naive textual scan, isolated behind
//! [`extract_titles`] so the parsing strategy can be swapped without
//! touching the orchestration. It assumes the markup shape of
//! `html.duckduckgo.com`: result links are anchors carrying the
//! `result__a` class.
//!
//! Error policy: non-2xx statuses and transport failures are errors and
//! terminate the agent run. Only "the page yielded no titles" is a
//! successful output, reported through [`NO_RESULTS_SENTINEL`].

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use nb_core::{Error, Tool, ToolDefinition, ToolOutput};

/// Canonical tool name.
pub const SEARCH_NEWS: &str = "search_news";

/// Successful output when the results page contains no matching anchors.
pub const NO_RESULTS_SENTINEL: &str = "Nenhuma notícia encontrada.";

/// Production results host; overridable for tests and proxies.
pub const DEFAULT_BASE_URL: &str = "https://html.duckduckgo.com";

/// Fixed query suffix biasing results toward current news coverage.
const QUERY_SUFFIX: &str = "notícias 2025";

/// Class marker identifying a result link on the page.
const RESULT_MARKER: &str = "result__a";

const MAX_TITLES: usize = 3;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Searches the web for recent headlines about one topic.
///
/// The topic is bound at construction time, one instance per request;
/// arguments supplied by the model are ignored.
pub struct SearchNewsTool {
    client: Client,
    base_url: String,
    topic: String,
}

impl SearchNewsTool {
    pub fn new(topic: impl Into<String>) -> Self {
        Self::with_base_url(topic, DEFAULT_BASE_URL)
    }

    /// Point the tool at a different results host. Used by tests and by
    /// deployments fronting the search engine with a proxy.
    pub fn with_base_url(topic: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent("Mozilla/5.0 (X11; Linux x86_64) newsbrief/0.1")
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            topic: topic.into(),
        }
    }
}

#[async_trait]
impl Tool for SearchNewsTool {
    fn name(&self) -> &str {
        SEARCH_NEWS
    }

    fn description(&self) -> &str {
        "Busca as 3 notícias mais recentes sobre um tema na web."
    }

    fn definition(&self) -> ToolDefinition {
        // No parameters: the topic is already bound to this instance.
        ToolDefinition::new(self.name(), self.description())
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<ToolOutput, Error> {
        let url = format!("{}/html/", self.base_url);
        let query = format!("{} {}", self.topic, QUERY_SUFFIX);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query.as_str())])
            .send()
            .await
            .map_err(|e| Error::network(format!("search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::api(
                status.as_u16(),
                format!("search engine returned {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("failed to read search response: {}", e)))?;

        let titles = extract_titles(&body);
        if titles.is_empty() {
            return Ok(ToolOutput::success(NO_RESULTS_SENTINEL));
        }

        debug!(topic = %self.topic, ?titles, "Headlines extracted");
        Ok(ToolOutput::success(titles.join("\n")))
    }
}

/// Pull up to three headline candidates out of a results page, in
/// document order.
///
/// Scans anchor fragments for the result-class marker and slices the text
/// between the tag's closing `>` and the next `<`. Fragments that don't
/// match that shape are skipped, never fatal.
pub fn extract_titles(html: &str) -> Vec<String> {
    let mut titles = Vec::new();

    for fragment in html.split("<a ") {
        if titles.len() >= MAX_TITLES {
            break;
        }
        if !fragment.contains(RESULT_MARKER) {
            continue;
        }

        let Some(start) = fragment.find('>') else {
            continue;
        };
        let rest = &fragment[start + 1..];
        let Some(end) = rest.find('<') else {
            continue;
        };

        let title = rest[..end].trim();
        if !title.is_empty() {
            titles.push(title.to_string());
        }
    }

    titles
}
