//! CPT 服务网关
//!
//! 封装充电桩管理服务的 HTTP 接口：登录认证、充电请求提交、
//! 排队与等候区状态查询。同一用户的 token 在一次运行内缓存复用。
//!
//! 除 [`ServiceGateway::login`] 外，所有操作在调用点内部消化失败：
//! 记录日志并返回失败标志或空快照，调用方无需自行捕获。

mod client;
mod error;
pub mod models;

pub use client::{GatewayConfig, ServiceGateway};
pub use error::{GatewayError, Result};
pub use models::{
    PileQueue, QueueSnapshot, QueueVehicle, WaitingSnapshot, WaitingVehicle,
};
