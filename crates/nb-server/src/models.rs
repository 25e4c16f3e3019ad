//! API contracts: the response envelope and the news input/output shapes.

use serde::{Deserialize, Serialize};

/// Uniform response envelope. Every HTTP response body, success or
/// failure, is one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Request body for a news run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsInput {
    pub topic: String,
}

/// The agent's final text, trimmed. May be empty if the model produced
/// nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsOutput {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope() {
        let result = ApiResult::ok(NewsOutput {
            content: "resumo".to_string(),
        });

        assert!(result.success);
        assert!(result.message.is_none());
        assert_eq!(result.data.unwrap().content, "resumo");
    }

    #[test]
    fn test_fail_envelope() {
        let result: ApiResult<NewsOutput> = ApiResult::fail("topic must not be empty");

        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("topic must not be empty"));
        assert!(result.data.is_none());
    }

    #[test]
    fn test_fail_envelope_omits_absent_fields() {
        let result: ApiResult<NewsOutput> = ApiResult::fail("boom");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "boom");
        assert!(json.get("data").is_none());
    }
}
