//! 模拟器进程会话

use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin, Command};
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::config::SimulatorConfig;
use crate::error::{Result, SimulatorError};

/// 设置模拟时钟的命令文本
pub fn set_clock_command(time: &str) -> String {
    format!("clock set {}", time)
}

/// 注入充电桩故障的命令文本
pub fn fault_command(pile_id: &str) -> String {
    format!("fault {} power desc", pile_id)
}

/// 恢复充电桩的命令文本
pub fn recover_command(pile_id: &str) -> String {
    format!("recover {}", pile_id)
}

/// 模拟器会话，独占持有子进程及其标准输入
pub struct SimulatorChannel {
    child: Child,
    stdin: ChildStdin,
    command_settle: Duration,
    shutdown_timeout: Duration,
}

impl SimulatorChannel {
    /// 启动模拟器进程并确认其存活
    ///
    /// 启动失败是整个运行中唯一的致命错误。
    pub async fn spawn(config: &SimulatorConfig) -> Result<Self> {
        info!("正在启动模拟器: {}", config.binary_path);

        // 模拟器的输出不读取，丢弃以避免管道写满阻塞
        let mut child = Command::new(&config.binary_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SimulatorError::Launch(e.to_string()))?;

        // 等待进程完成启动
        sleep(config.startup_settle()).await;

        if let Some(status) = child.try_wait()? {
            return Err(SimulatorError::Launch(format!(
                "模拟器进程已退出: {}",
                status
            )));
        }

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SimulatorError::Launch("无法获取模拟器标准输入".to_string()))?;

        info!("✓ 模拟器启动成功");

        Ok(Self {
            child,
            stdin,
            command_settle: config.command_settle(),
            shutdown_timeout: config.shutdown_timeout(),
        })
    }

    /// 发送一条命令，以换行结尾
    ///
    /// 协议没有应答，返回前等待固定稳定间隔，让模拟器异步处理完成。
    pub async fn send(&mut self, command: &str) -> Result<()> {
        if self.child.try_wait()?.is_some() {
            return Err(SimulatorError::NotRunning);
        }

        debug!("发送模拟器命令: {}", command);

        self.stdin.write_all(command.as_bytes()).await?;
        self.stdin.write_all(b"\n").await?;
        self.stdin.flush().await?;

        sleep(self.command_settle).await;
        Ok(())
    }

    /// 设置模拟时钟
    pub async fn set_clock(&mut self, time: &str) -> Result<()> {
        self.send(&set_clock_command(time)).await
    }

    /// 注入充电桩故障
    pub async fn inject_fault(&mut self, pile_id: &str) -> Result<()> {
        self.send(&fault_command(pile_id)).await
    }

    /// 恢复充电桩
    pub async fn recover(&mut self, pile_id: &str) -> Result<()> {
        self.send(&recover_command(pile_id)).await
    }

    /// 关闭会话
    ///
    /// 关闭标准输入请求优雅退出，限时等待，超时则强制终止。
    /// 消费 self，终止请求恰好发出一次；异常路径由 `kill_on_drop` 兜底。
    pub async fn close(mut self) {
        info!("正在停止模拟器...");

        drop(self.stdin);

        match timeout(self.shutdown_timeout, self.child.wait()).await {
            Ok(Ok(status)) => info!("✓ 模拟器已停止: {}", status),
            Ok(Err(e)) => warn!("等待模拟器退出时出错: {}", e),
            Err(_) => {
                warn!("模拟器未响应，强制终止...");
                match self.child.kill().await {
                    Ok(()) => info!("✓ 模拟器已强制终止"),
                    Err(e) => warn!("强制终止模拟器失败: {}", e),
                }
            }
        }
    }
}
