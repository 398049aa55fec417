//! 网关请求/响应与用量类型。

use serde::{Deserialize, Serialize};

/// 单条对话消息的角色。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// 系统提示。
    System,
    /// 用户消息。
    User,
    /// 助手回复。
    Assistant,
}

impl MessageRole {
    /// OpenAI 兼容接口中的角色字符串。
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// 单条对话消息。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 角色。
    pub role: MessageRole,
    /// 内容。
    pub content: String,
}

impl ChatMessage {
    /// 构造系统消息。
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    /// 构造用户消息。
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// 聊天请求。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// 消息列表（按顺序）。
    pub messages: Vec<ChatMessage>,
    /// 可选：温度，未设置时由网关默认值决定。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// 可选：最大生成 token 数。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// 从系统提示（渲染后的提示词）+ 用户内容构造单轮请求。
    pub fn with_system(system_prompt: impl Into<String>, user_content: impl Into<String>) -> Self {
        Self {
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_content),
            ],
            temperature: None,
            max_tokens: None,
        }
    }

    /// 设置温度。
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// 第一条系统消息的内容（即渲染后的提示词）。
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == MessageRole::System)
            .map(|m| m.content.as_str())
    }
}

/// Token 用量。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// 提示消耗的 token 数。
    pub prompt_tokens: u32,
    /// 补全消耗的 token 数。
    pub completion_tokens: u32,
}

/// 聊天响应。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// 助手回复正文。
    pub content: String,
    /// Token 用量。
    #[serde(default)]
    pub usage: Usage,
}

impl ChatResponse {
    /// 仅含正文、无用量信息的响应。
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: Usage::default(),
        }
    }
}
