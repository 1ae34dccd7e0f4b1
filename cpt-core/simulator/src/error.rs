//! 模拟器通道错误定义

use thiserror::Error;

/// 模拟器通道错误类型
#[derive(Error, Debug)]
pub enum SimulatorError {
    /// 模拟器未能启动，整个运行的唯一致命错误
    #[error("模拟器启动失败: {0}")]
    Launch(String),

    #[error("模拟器进程未运行")]
    NotRunning,

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 模拟器通道结果类型
pub type Result<T> = std::result::Result<T, SimulatorError>;
