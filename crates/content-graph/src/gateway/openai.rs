//! OpenAI 兼容的模型网关（Chat Completions API），默认指向 Groq。

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::GatewayError;
use super::types::{ChatRequest, ChatResponse, Usage};
use super::ModelGateway;

/// 默认 Base URL（Groq 的 OpenAI 兼容端）。
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
/// 默认模型。
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";
/// 默认请求超时。
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// OpenAI 兼容配置。
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API Key，通常来自 `GROQ_API_KEY` 环境变量。
    pub api_key: String,
    /// Base URL，不含结尾的 `/`。
    pub base_url: String,
    /// 模型 ID。
    pub model: String,
    /// 默认 temperature，未在请求中指定时使用。
    pub default_temperature: Option<f32>,
    /// 整个请求（连接 + 响应）的超时。
    pub timeout: Duration,
}

impl GatewayConfig {
    /// 使用给定 API Key 与默认端点、模型构造。
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            default_temperature: Some(0.7),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// 设置 Base URL（去掉结尾的 `/`）。
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// 设置模型。
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// 设置超时。
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OpenAiRequestBody<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessageOut,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessageOut {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

/// OpenAI 兼容网关：一次 `POST {base_url}/chat/completions`。
#[derive(Debug)]
pub struct OpenAiGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl OpenAiGateway {
    /// 使用给定配置构造客户端（超时作用于每次请求）。
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Network(format!("http client build failed: {e}")))?;
        Ok(Self { config, client })
    }

    /// 当前使用的模型 ID。
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn build_body<'a>(&'a self, req: &'a ChatRequest) -> OpenAiRequestBody<'a> {
        OpenAiRequestBody {
            model: &self.config.model,
            messages: req
                .messages
                .iter()
                .map(|m| OpenAiMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: req.temperature.or(self.config.default_temperature),
            max_tokens: req.max_tokens,
        }
    }
}

fn parse_response(text: &str) -> Result<ChatResponse, GatewayError> {
    let parsed: OpenAiResponse =
        serde_json::from_str(text).map_err(|e| GatewayError::Parsing(format!("{e}: {text}")))?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| GatewayError::Parsing(format!("no choice content: {text}")))?;
    let usage = parsed
        .usage
        .map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        })
        .unwrap_or_default();
    Ok(ChatResponse { content, usage })
}

#[async_trait]
impl ModelGateway for OpenAiGateway {
    async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, GatewayError> {
        if self.config.api_key.is_empty() {
            return Err(GatewayError::Auth("api key is empty".to_string()));
        }
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = self.build_body(&req);
        debug!(model = %self.config.model, temperature = ?body.temperature, "chat completion request");
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Network(format!("timed out after {:?}", self.config.timeout))
                } else {
                    GatewayError::Network(e.to_string())
                }
            })?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(GatewayError::from_status(status.as_u16(), text));
        }
        let response = parse_response(&text)?;
        debug!(
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "chat completion response"
        );
        Ok(response)
    }
}
