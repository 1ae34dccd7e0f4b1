//! 场景执行引擎
//!
//! 单步状态流：设置时钟 -> 派发动作 -> 等待稳定 -> 输出快照。
//! 步骤之间严格串行，上一步骤的快照阶段完成之前，下一步骤不会开始。

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use cpt_scenario::{Action, TimedStep};

use crate::report::{self, RunReport, StepReport};
use crate::traits::{ChargingService, SimulatorLink};

/// 执行引擎配置
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// 时钟设置后的稳定等待（秒），模拟器侧没有可轮询的接口
    pub clock_settle: u64,

    /// 动作派发后的兜底固定等待（秒）
    pub action_settle: u64,

    /// 快照稳定性轮询间隔（毫秒）
    pub poll_interval: u64,

    /// 快照轮询次数上限，0 表示禁用轮询、直接使用固定等待
    pub max_snapshot_polls: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            clock_settle: 12,
            action_settle: 5,
            poll_interval: 500,
            max_snapshot_polls: 10,
        }
    }
}

/// 场景执行引擎
///
/// 独占持有模拟器会话与服务网关，运行期间不存在并发访问。
pub struct ExecutionEngine<G, S> {
    gateway: G,
    simulator: S,
    config: EngineConfig,
}

impl<G: ChargingService, S: SimulatorLink> ExecutionEngine<G, S> {
    /// 创建新的执行引擎
    pub fn new(gateway: G, simulator: S, config: EngineConfig) -> Self {
        Self {
            gateway,
            simulator,
            config,
        }
    }

    /// 按文件顺序执行全部步骤
    ///
    /// 运行总是正常结束：步骤内的任何失败都只记录日志。
    pub async fn run(&mut self, steps: &[TimedStep]) -> RunReport {
        let mut run_report = RunReport::new();

        for (index, step) in steps.iter().enumerate() {
            info!("执行步骤 {}/{}: {}", index + 1, steps.len(), step.timestamp);
            report::print_step_banner(index + 1, &step.timestamp);

            let step_report = self.execute_step(step).await;
            run_report.steps.push(step_report);
        }

        run_report.finalize();
        report::print_run_complete(&run_report);

        run_report
    }

    async fn execute_step(&mut self, step: &TimedStep) -> StepReport {
        let mut step_report = StepReport::new(&step.timestamp);

        // 1. 设置时钟，失败也继续执行本步骤
        if let Err(e) = self.simulator.set_clock(&step.timestamp).await {
            warn!("✗ 设置时钟失败，继续执行: {}", e);
        }
        sleep(Duration::from_secs(self.config.clock_settle)).await;

        // 2. 按原始顺序派发动作，单条失败不影响其余
        for token in &step.actions {
            match Action::decode(token) {
                Ok(action) => {
                    if self.dispatch(action).await {
                        step_report.dispatched += 1;
                    } else {
                        step_report.failed += 1;
                    }
                }
                Err(e) => {
                    warn!("✗ 指令无效，已跳过: {} ({})", token, e);
                    step_report.skipped += 1;
                }
            }
        }

        // 3. 等待服务与模拟器达到稳定状态
        self.settle_after_actions().await;

        // 4. 输出状态快照
        let queue = self.gateway.queue_snapshot().await;
        report::print_queue_snapshot(&queue);

        let waiting = self.gateway.waiting_snapshot().await;
        report::print_waiting_snapshot(&waiting);
        report::print_step_separator();

        step_report
    }

    async fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::ChargingRequest {
                user,
                mode,
                capacity,
            } => {
                info!(
                    "执行充电请求: 用户={}, 模式={}, 充电量={}",
                    user,
                    mode.as_str(),
                    capacity
                );
                self.gateway
                    .submit_charging_request(&user, mode, capacity)
                    .await
            }
            Action::PileFault { pile_id } => {
                info!("执行充电桩故障: {}", pile_id);
                match self.simulator.inject_fault(&pile_id).await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("✗ 故障注入失败: {}", e);
                        false
                    }
                }
            }
            Action::PileRecovery { pile_id } => {
                info!("执行充电桩恢复: {}", pile_id);
                match self.simulator.recover(&pile_id).await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("✗ 故障恢复失败: {}", e);
                        false
                    }
                }
            }
        }
    }

    /// 有界轮询排队快照直到连续两次一致，超出上限退回固定等待
    async fn settle_after_actions(&mut self) {
        if self.config.max_snapshot_polls == 0 {
            sleep(Duration::from_secs(self.config.action_settle)).await;
            return;
        }

        let interval = Duration::from_millis(self.config.poll_interval);
        let mut previous = self.gateway.queue_snapshot().await;

        for _ in 0..self.config.max_snapshot_polls {
            sleep(interval).await;

            let current = self.gateway.queue_snapshot().await;
            if current == previous {
                return;
            }
            previous = current;
        }

        warn!("快照在轮询上限内未稳定，退回固定等待");
        sleep(Duration::from_secs(self.config.action_settle)).await;
    }

    /// 交回协作方句柄，供运行结束后关闭模拟器会话
    pub fn into_parts(self) -> (G, S) {
        (self.gateway, self.simulator)
    }
}
