//! 测试用例文件解析
//!
//! 逐行扫描非空行：以 `:00` 结尾的行开启一个新步骤，紧随其后的
//! 非时间戳行是该步骤的动作行。步骤严格保持文件顺序。

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// 时间戳行的固定后缀（整分钟粒度）
const TIMESTAMP_SUFFIX: &str = ":00";

/// 一个场景步骤：模拟时钟值加上零条或多条原始动作指令
#[derive(Debug, Clone, PartialEq)]
pub struct TimedStep {
    /// 时钟设置字符串，原样转发给模拟器（如 `08:00:00`）
    pub timestamp: String,

    /// 原始动作指令，按动作行内从左到右的顺序排列
    pub actions: Vec<String>,
}

/// 场景解析错误
#[derive(Error, Debug, PartialEq)]
pub enum ScenarioError {
    #[error("场景文件为空")]
    Empty,

    #[error("第 {line_no} 行不符合场景格式: {content}")]
    UnexpectedLine { line_no: usize, content: String },
}

fn is_timestamp_line(line: &str) -> bool {
    line.ends_with(TIMESTAMP_SUFFIX)
}

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(r"\([^)]+\)").expect("固定正则"))
}

/// 解析测试用例文本
///
/// 一个时间戳后出现两行连续的动作行，或首个非空行不是时间戳，
/// 均视为格式错误。动作行内未配对的括号残留只告警并跳过，
/// 不中断整个场景。
pub fn parse_scenario(text: &str) -> Result<Vec<TimedStep>, ScenarioError> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ScenarioError::Empty);
    }

    let mut steps = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let (line_no, line) = lines[i];
        if !is_timestamp_line(line) {
            return Err(ScenarioError::UnexpectedLine {
                line_no,
                content: line.to_string(),
            });
        }

        let mut actions = Vec::new();
        i += 1;
        if i < lines.len() && !is_timestamp_line(lines[i].1) {
            let (_, action_line) = lines[i];
            for group in token_regex().find_iter(action_line) {
                actions.push(group.as_str().to_string());
            }

            // 未配对的括号残留跳过，场景继续执行
            let residue = token_regex().replace_all(action_line, "");
            if residue.contains('(') || residue.contains(')') {
                warn!("动作行括号不配对，残留部分已跳过: {}", action_line);
            }
            i += 1;
        }

        steps.push(TimedStep {
            timestamp: line.to_string(),
            actions,
        });
    }

    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scenario() {
        assert_eq!(parse_scenario(""), Err(ScenarioError::Empty));
        assert_eq!(parse_scenario("\n  \n"), Err(ScenarioError::Empty));
    }

    #[test]
    fn test_leading_action_line_rejected() {
        let result = parse_scenario("(A,V1,T,7)\n08:00:00\n");
        assert!(matches!(
            result,
            Err(ScenarioError::UnexpectedLine { line_no: 1, .. })
        ));
    }

    #[test]
    fn test_consecutive_action_lines_rejected() {
        let text = "08:00:00\n(A,V1,T,7)\n(A,V2,F,10)\n";
        assert!(matches!(
            parse_scenario(text),
            Err(ScenarioError::UnexpectedLine { line_no: 3, .. })
        ));
    }

    #[test]
    fn test_unbalanced_parentheses_recoverable() {
        // 残留的半个括号被跳过，已配对的指令保留
        let text = "08:00:00\n(A,V1,T,7)(B,T2,O\n";
        let steps = parse_scenario(text).unwrap();
        assert_eq!(steps[0].actions, vec!["(A,V1,T,7)".to_string()]);
    }
}
