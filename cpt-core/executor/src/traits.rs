//! 执行引擎的协作方接口
//!
//! 引擎通过这两个接口驱动充电服务与模拟器，便于在测试中替换实现。

use async_trait::async_trait;

use cpt_gateway::{QueueSnapshot, ServiceGateway, WaitingSnapshot};
use cpt_scenario::ChargingMode;
use cpt_simulator::{SimulatorChannel, SimulatorError};

/// 充电服务侧操作
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChargingService {
    /// 提交充电请求，返回请求是否被服务接受
    async fn submit_charging_request(
        &self,
        username: &str,
        mode: ChargingMode,
        capacity: f64,
    ) -> bool;

    /// 排队状态快照，失败时为空快照
    async fn queue_snapshot(&self) -> QueueSnapshot;

    /// 等候区快照，失败时为空快照
    async fn waiting_snapshot(&self) -> WaitingSnapshot;
}

#[async_trait]
impl ChargingService for ServiceGateway {
    async fn submit_charging_request(
        &self,
        username: &str,
        mode: ChargingMode,
        capacity: f64,
    ) -> bool {
        ServiceGateway::submit_charging_request(self, username, mode, capacity).await
    }

    async fn queue_snapshot(&self) -> QueueSnapshot {
        ServiceGateway::queue_snapshot(self).await
    }

    async fn waiting_snapshot(&self) -> WaitingSnapshot {
        ServiceGateway::waiting_snapshot(self).await
    }
}

/// 模拟器侧操作
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SimulatorLink {
    /// 设置模拟时钟
    async fn set_clock(&mut self, time: &str) -> Result<(), SimulatorError>;

    /// 注入充电桩故障
    async fn inject_fault(&mut self, pile_id: &str) -> Result<(), SimulatorError>;

    /// 恢复充电桩
    async fn recover(&mut self, pile_id: &str) -> Result<(), SimulatorError>;
}

#[async_trait]
impl SimulatorLink for SimulatorChannel {
    async fn set_clock(&mut self, time: &str) -> Result<(), SimulatorError> {
        SimulatorChannel::set_clock(self, time).await
    }

    async fn inject_fault(&mut self, pile_id: &str) -> Result<(), SimulatorError> {
        SimulatorChannel::inject_fault(self, pile_id).await
    }

    async fn recover(&mut self, pile_id: &str) -> Result<(), SimulatorError> {
        SimulatorChannel::recover(self, pile_id).await
    }
}
