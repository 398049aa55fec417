//! 模型网关：异步对话接口与请求/响应类型。
//!
//! - `ModelGateway`：渲染后的提示词 + 温度 -> 文本
//! - `ChatRequest` / `ChatResponse` / `Usage`：请求、响应与用量
//! - `GatewayError`：调用错误枚举
//! - `OpenAiGateway`：OpenAI 兼容端（默认 Groq）
//! - `MockGateway`：测试用脚本化网关

mod error;
mod mock;
mod openai;
mod types;

use async_trait::async_trait;

pub use error::GatewayError;
pub use mock::MockGateway;
pub use openai::{GatewayConfig, OpenAiGateway, DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use types::{ChatMessage, ChatRequest, ChatResponse, MessageRole, Usage};

/// 模型网关：一次请求，一次完整回复。
///
/// 不做流式、不做重试；超时由具体实现在网关边界上施加。
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// 发起一次对话，返回完整内容与用量。
    async fn chat(&self, req: ChatRequest) -> Result<ChatResponse, GatewayError>;
}
