//! `/chat_gen` wire format
//!
//! Request: `{"prompt": "<text>"}`. Response: `{"ans": "<text>"}`.

use serde::{Deserialize, Serialize};

use crate::error::{ChatError, Result};

/// Body of the outbound request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatGenRequest {
    pub prompt: String,
}

impl ChatGenRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Body of a well-formed reply
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatGenResponse {
    pub ans: String,
}

/// Extract the reply text from a raw response body.
///
/// Invalid JSON is a `Decode` error; a missing or non-string `ans` is a
/// `ResponseShape` error. Extra fields are ignored.
pub fn parse_reply(body: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    reply_from_value(value)
}

/// Same as [`parse_reply`] for an already decoded body
pub fn reply_from_value(value: serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::Object(mut map) => match map.remove("ans") {
            Some(serde_json::Value::String(ans)) => Ok(ans),
            Some(other) => Err(ChatError::ResponseShape(format!(
                "`ans` must be a string, got {}",
                json_type(&other)
            ))),
            None => Err(ChatError::ResponseShape("missing `ans` field".into())),
        },
        other => Err(ChatError::ResponseShape(format!(
            "expected an object, got {}",
            json_type(&other)
        ))),
    }
}

const fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(ChatGenRequest::new("  안녕 ")).unwrap();
        assert_eq!(body, serde_json::json!({ "prompt": "  안녕 " }));
    }

    #[test]
    fn test_parse_reply_ok() {
        let reply = parse_reply(r#"{"ans":"Hello!","model":"llama"}"#).unwrap();
        assert_eq!(reply, "Hello!");
    }

    #[test]
    fn test_parse_reply_empty_string_is_valid() {
        assert_eq!(parse_reply(r#"{"ans":""}"#).unwrap(), "");
    }

    #[test]
    fn test_parse_reply_missing_ans() {
        let err = parse_reply(r#"{"answer":"Hello!"}"#).unwrap_err();
        assert!(matches!(err, ChatError::ResponseShape(_)));
    }

    #[test]
    fn test_parse_reply_wrong_type() {
        let err = parse_reply(r#"{"ans":42}"#).unwrap_err();
        assert!(err.to_string().contains("number"));

        let err = parse_reply("[]").unwrap_err();
        assert!(matches!(err, ChatError::ResponseShape(_)));
    }

    #[test]
    fn test_parse_reply_not_json() {
        let err = parse_reply("<html>502</html>").unwrap_err();
        assert!(matches!(err, ChatError::Decode(_)));
    }
}
