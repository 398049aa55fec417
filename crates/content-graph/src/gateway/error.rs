//! 网关调用相关错误类型。

use thiserror::Error;

/// 模型网关调用过程中的错误枚举。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// API 返回错误（如 5xx 或业务错误）。
    #[error("api error: {0}")]
    Api(String),

    /// 限流（429）。
    #[error("rate limit: {0}")]
    RateLimit(String),

    /// 认证失败（401/403）或缺少 API Key。
    #[error("auth failed: {0}")]
    Auth(String),

    /// 请求参数无效（其他 4xx）。
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// 网络、连接或超时错误。
    #[error("network error: {0}")]
    Network(String),

    /// 响应体解析失败。
    #[error("parsing failed: {0}")]
    Parsing(String),
}

impl GatewayError {
    /// 按 HTTP 状态码归类非成功响应。
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => GatewayError::Auth(body),
            429 => GatewayError::RateLimit(body),
            400..=499 => GatewayError::InvalidRequest(body),
            _ => GatewayError::Api(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(GatewayError::from_status(401, "x".into()), GatewayError::Auth(_)));
        assert!(matches!(GatewayError::from_status(403, "x".into()), GatewayError::Auth(_)));
        assert!(matches!(GatewayError::from_status(429, "x".into()), GatewayError::RateLimit(_)));
        assert!(matches!(
            GatewayError::from_status(422, "x".into()),
            GatewayError::InvalidRequest(_)
        ));
        assert!(matches!(GatewayError::from_status(503, "x".into()), GatewayError::Api(_)));
    }
}
