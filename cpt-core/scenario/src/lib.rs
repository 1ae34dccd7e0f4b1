//! CPT 场景解析器
//!
//! 将测试用例文本解析为按文件顺序排列的时间步骤序列，并把
//! 步骤中的动作指令解码为类型化的动作。
//!
//! 测试用例格式：时间戳行（`HH:MM:00`）后可跟一行动作指令，
//! 一行可包含多条括号包裹的指令：
//!
//! ```text
//! 08:00:00
//! (A,V1,T,7)(B,T2,O,0)
//! 08:30:00
//! (B,T2,O,1)
//! ```

pub mod action;
pub mod parser;

pub use action::{Action, ActionError, ChargingMode};
pub use parser::{parse_scenario, ScenarioError, TimedStep};
