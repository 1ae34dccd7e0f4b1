//! CPT 模拟器通道
//!
//! 与硬件/时钟模拟器进程的独占会话：每次调用向其标准输入写入
//! 一行命令。协议没有应答消息，命令之间只等待可配置的稳定间隔。
//!
//! 行式命令协议：
//! - `clock set <HH:MM:00>` — 设置模拟时钟
//! - `fault <pileId> power desc` — 注入充电桩故障
//! - `recover <pileId>` — 恢复充电桩
//!
//! # 示例
//!
//! ```ignore
//! use cpt_simulator::{SimulatorChannel, SimulatorConfig};
//!
//! let mut channel = SimulatorChannel::spawn(&SimulatorConfig::default()).await?;
//! channel.set_clock("08:00:00").await?;
//! channel.inject_fault("T2").await?;
//! channel.close().await;
//! ```

mod channel;
mod config;
mod error;

pub use channel::{fault_command, recover_command, set_clock_command, SimulatorChannel};
pub use config::SimulatorConfig;
pub use error::{Result, SimulatorError};
