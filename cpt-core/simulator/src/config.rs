//! 模拟器会话配置

use std::time::Duration;

/// 模拟器配置
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// 模拟器可执行文件路径
    pub binary_path: String,

    /// 启动后的稳定等待（秒）
    pub startup_settle: u64,

    /// 每条命令后的稳定等待（秒）
    pub command_settle: u64,

    /// 优雅退出等待上限（秒），超时后强制终止
    pub shutdown_timeout: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            binary_path: "./simulator".to_string(),
            startup_settle: 2,
            command_settle: 1,
            shutdown_timeout: 5,
        }
    }
}

impl SimulatorConfig {
    pub fn startup_settle(&self) -> Duration {
        Duration::from_secs(self.startup_settle)
    }

    pub fn command_settle(&self) -> Duration {
        Duration::from_secs(self.command_settle)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }
}
