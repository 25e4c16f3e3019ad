//! nb-tools: the tools exposed to the newsbrief agent.

pub mod search;
pub mod summarize;

pub use search::{SearchNewsTool, DEFAULT_BASE_URL, NO_RESULTS_SENTINEL, SEARCH_NEWS};
pub use summarize::{SummarizeNewsTool, SUMMARIZE_NEWS};
