//! CPT 执行引擎
//!
//! 场景步骤的串行编排：对每个步骤依次完成设置模拟时钟、派发动作、
//! 等待系统稳定、输出状态快照四个阶段。步骤之间严格按文件顺序
//! 执行，任何步骤内的失败都只记录日志，不中断整个运行。

pub mod engine;
pub mod report;
pub mod traits;

pub use engine::{EngineConfig, ExecutionEngine};
pub use report::{RunReport, StepReport};
pub use traits::{ChargingService, SimulatorLink};
