//! CLI 配置管理
//!
//! TOML 文件 (~/.config/cpt/config.toml)，所有字段可选，
//! 文件不存在时使用默认值；命令行参数优先于配置文件。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use cpt_executor::EngineConfig;
use cpt_gateway::GatewayConfig;
use cpt_simulator::SimulatorConfig;

/// CLI 配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// 后端服务地址
    pub backend_url: Option<String>,

    /// 模拟器可执行文件路径
    pub simulator_path: Option<String>,

    /// 测试账号统一密码
    pub password: Option<String>,

    /// 时钟设置后的稳定等待（秒）
    pub clock_settle: Option<u64>,

    /// 动作派发后的兜底等待（秒）
    pub action_settle: Option<u64>,

    /// 每条模拟器命令后的等待（秒）
    pub command_settle: Option<u64>,

    /// 快照稳定性轮询次数上限
    pub max_snapshot_polls: Option<u32>,
}

impl CliConfig {
    /// 获取配置文件路径
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("无法获取用户主目录")?;
        Ok(home.join(".config").join("cpt").join("config.toml"))
    }

    /// 加载配置，文件不存在时返回默认配置
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("解析配置文件失败: {:?}", path))
    }

    /// 生成服务网关配置
    pub fn gateway_config(&self) -> GatewayConfig {
        let mut config = GatewayConfig::default();
        if let Some(url) = &self.backend_url {
            config.base_url = url.clone();
        }
        if let Some(password) = &self.password {
            config.password = password.clone();
        }
        config
    }

    /// 生成模拟器配置
    pub fn simulator_config(&self) -> SimulatorConfig {
        let mut config = SimulatorConfig::default();
        if let Some(path) = &self.simulator_path {
            config.binary_path = path.clone();
        }
        if let Some(settle) = self.command_settle {
            config.command_settle = settle;
        }
        config
    }

    /// 生成执行引擎配置
    pub fn engine_config(&self) -> EngineConfig {
        let mut config = EngineConfig::default();
        if let Some(settle) = self.clock_settle {
            config.clock_settle = settle;
        }
        if let Some(settle) = self.action_settle {
            config.action_settle = settle;
        }
        if let Some(polls) = self.max_snapshot_polls {
            config.max_snapshot_polls = polls;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_maps_to_component_defaults() {
        let config = CliConfig::default();

        assert_eq!(config.gateway_config().base_url, "http://localhost:8080");
        assert_eq!(config.simulator_config().binary_path, "./simulator");
        assert_eq!(config.engine_config().clock_settle, 12);
    }

    #[test]
    fn test_config_overrides() {
        let toml_text = r#"
backend_url = "http://192.168.1.10:8080"
simulator_path = "/opt/cpt/simulator"
clock_settle = 3
command_settle = 0
"#;
        let config: CliConfig = toml::from_str(toml_text).unwrap();

        assert_eq!(
            config.gateway_config().base_url,
            "http://192.168.1.10:8080"
        );
        assert_eq!(config.simulator_config().binary_path, "/opt/cpt/simulator");
        assert_eq!(config.simulator_config().command_settle, 0);
        assert_eq!(config.engine_config().clock_settle, 3);
        // 未配置的字段保持默认
        assert_eq!(config.engine_config().action_settle, 5);
    }
}
