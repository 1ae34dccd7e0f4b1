//! 动作指令解码
//!
//! 每条指令形如 `(类型,参数1,参数2,参数3)`，在边界处一次性解码为
//! 封闭的类型化动作，后续不再按字符串解释。解码是纯函数，不做 I/O。

use thiserror::Error;

/// 充电模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargingMode {
    Slow,
    Fast,
}

impl ChargingMode {
    /// 后端接口使用的模式取值
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Fast => "fast",
        }
    }
}

/// 解码后的动作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 充电请求：`(A,用户,模式,充电量)`，模式 `T` 为慢充，其余为快充
    ChargingRequest {
        user: String,
        mode: ChargingMode,
        capacity: f64,
    },

    /// 充电桩故障：`(B,桩号,O,0)`
    PileFault { pile_id: String },

    /// 充电桩恢复：`(B,桩号,O,1)`
    PileRecovery { pile_id: String },
}

/// 指令解码错误，均为单条指令级别，不影响其余指令
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    #[error("指令格式错误，应为 4 个逗号分隔字段: {0}")]
    Format(String),

    #[error("充电量无效: {0}")]
    Capacity(String),

    #[error("未知的充电桩操作: {0}")]
    UnknownOperation(String),

    #[error("未知的指令类型: {0}")]
    UnknownCommand(String),
}

impl Action {
    /// 解码单条指令
    ///
    /// 恰好 4 个字段才合法；首字段之外的取值一律归为明确的错误
    /// 分类，不产生部分结果。
    pub fn decode(token: &str) -> Result<Action, ActionError> {
        let inner = token
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let fields: Vec<&str> = inner.split(',').collect();
        if fields.len() != 4 {
            return Err(ActionError::Format(token.to_string()));
        }

        match fields[0] {
            "A" => {
                let mode = if fields[2] == "T" {
                    ChargingMode::Slow
                } else {
                    ChargingMode::Fast
                };
                let capacity: f64 = fields[3]
                    .parse()
                    .map_err(|_| ActionError::Capacity(fields[3].to_string()))?;
                if capacity <= 0.0 {
                    return Err(ActionError::Capacity(fields[3].to_string()));
                }
                Ok(Action::ChargingRequest {
                    user: fields[1].to_string(),
                    mode,
                    capacity,
                })
            }
            // 字段 3 为保留字段，充电桩指令只看字段 4
            "B" => match fields[3] {
                "0" => Ok(Action::PileFault {
                    pile_id: fields[1].to_string(),
                }),
                "1" => Ok(Action::PileRecovery {
                    pile_id: fields[1].to_string(),
                }),
                other => Err(ActionError::UnknownOperation(other.to_string())),
            },
            other => Err(ActionError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charging_mode_wire_values() {
        assert_eq!(ChargingMode::Slow.as_str(), "slow");
        assert_eq!(ChargingMode::Fast.as_str(), "fast");
    }

    #[test]
    fn test_decode_is_total_over_well_formed_tokens() {
        // 4 字段的指令要么得到动作，要么得到分类明确的错误
        for token in ["(A,V1,T,7)", "(B,T2,O,0)", "(C,x,y,z)", "(B,T2,O,9)"] {
            let _ = Action::decode(token);
        }
    }
}
