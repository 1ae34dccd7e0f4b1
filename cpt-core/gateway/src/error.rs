//! 服务网关错误定义

use thiserror::Error;

/// 服务网关错误类型
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP 错误: {0}")]
    Http(String),

    #[error("认证错误: {0}")]
    Auth(String),

    #[error("解析错误: {0}")]
    Parse(String),
}

/// 服务网关结果类型
pub type Result<T> = std::result::Result<T, GatewayError>;
