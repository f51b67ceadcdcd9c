use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Discriminator of a log record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "tool-result", alias = "tool_result")]
    ToolResult,
    #[default]
    #[serde(other)]
    Other,
}

/// One typed fragment of a message payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text {
        #[serde(default)]
        text: String,
    },
    Thinking {
        #[serde(default)]
        thinking: String,
    },
    ToolUse {
        #[serde(default)]
        name: String,
        #[serde(default)]
        input: Value,
    },
    ToolResult {
        #[serde(default)]
        content: Value,
    },
    Image,
    #[serde(other)]
    Unknown,
}

impl ContentPart {
    /// True for `text` parts whose payload is not blank
    pub fn has_visible_text(&self) -> bool {
        matches!(self, ContentPart::Text { text } if !text.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_content")]
    pub content: Vec<ContentPart>,
}

/// One parsed line of a conversation log.
///
/// Every field is optional and loosely typed so that forward-incompatible shapes still
/// parse; the renderer decides what a record contributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "crate::parsers::deserializers::lenient"
    )]
    pub record_type: RecordType,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_timestamp"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::lenient")]
    pub message: Option<Message>,
    #[serde(default)]
    pub cwd: Option<Value>,
    #[serde(default, rename = "toolName")]
    pub tool_name_camel: Option<Value>,
    #[serde(default)]
    pub tool_name: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub output: Option<Value>,
}

impl Record {
    /// Content parts of the nested message, empty when there is none
    pub fn parts(&self) -> &[ContentPart] {
        self.message.as_ref().map(|m| m.content.as_slice()).unwrap_or(&[])
    }

    /// Working directory, when it is a string
    pub fn cwd(&self) -> Option<&str> {
        self.cwd.as_ref().and_then(Value::as_str)
    }

    /// Tool name of a standalone tool result: `toolName`, then `tool_name`, then `name`
    pub fn tool_name(&self) -> Option<&str> {
        [&self.tool_name_camel, &self.tool_name, &self.name]
            .into_iter()
            .find_map(|field| field.as_ref().and_then(Value::as_str))
    }

    /// Payload of a standalone tool result: `result`, then `content`, then `output`
    pub fn tool_payload(&self) -> Option<&Value> {
        [&self.result, &self.content, &self.output]
            .into_iter()
            .find_map(|field| field.as_ref().filter(|value| !value.is_null()))
    }
}
