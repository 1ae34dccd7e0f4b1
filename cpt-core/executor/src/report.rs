//! 运行报告与控制台输出

use chrono::{DateTime, Utc};
use colored::Colorize;

use cpt_gateway::{QueueSnapshot, WaitingSnapshot};

/// 整次运行的报告
#[derive(Debug, Clone)]
pub struct RunReport {
    /// 各步骤报告，保持执行顺序
    pub steps: Vec<StepReport>,

    pub started_at: DateTime<Utc>,

    pub finished_at: Option<DateTime<Utc>>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn finalize(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// 成功派发的动作总数
    pub fn total_dispatched(&self) -> usize {
        self.steps.iter().map(|s| s.dispatched).sum()
    }

    /// 派发失败的动作总数
    pub fn total_failed(&self) -> usize {
        self.steps.iter().map(|s| s.failed).sum()
    }

    /// 因解码失败被跳过的指令总数
    pub fn total_skipped(&self) -> usize {
        self.steps.iter().map(|s| s.skipped).sum()
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

/// 单个步骤的报告
#[derive(Debug, Clone)]
pub struct StepReport {
    /// 步骤的模拟时钟值
    pub timestamp: String,

    /// 成功派发的动作数
    pub dispatched: usize,

    /// 派发失败的动作数
    pub failed: usize,

    /// 解码失败被跳过的指令数
    pub skipped: usize,
}

impl StepReport {
    pub fn new(timestamp: &str) -> Self {
        Self {
            timestamp: timestamp.to_string(),
            dispatched: 0,
            failed: 0,
            skipped: 0,
        }
    }
}

/// 输出步骤横幅
pub fn print_step_banner(step_no: usize, timestamp: &str) {
    println!();
    println!(
        "【步骤 {}】时间: {}",
        step_no.to_string().yellow(),
        timestamp.cyan()
    );
    println!("{}", "-".repeat(40));
}

/// 步骤结束分隔线文本
pub fn step_separator() -> String {
    "=".repeat(60)
}

/// 每个步骤的快照输出之后打印分隔线
pub fn print_step_separator() {
    println!();
    println!("{}", step_separator());
}

/// 排队状态的文本渲染
pub fn format_queue_snapshot(snapshot: &QueueSnapshot) -> String {
    let mut out = String::from("=== 排队状态 ===\n");

    if snapshot.piles.is_empty() {
        out.push_str("无排队数据\n");
        return out;
    }

    for pile in &snapshot.piles {
        out.push_str(&format!("{}：\n", pile.pile_id));

        if pile.queue_vehicles.is_empty() {
            out.push_str("(无排队车辆)\n");
        } else {
            for vehicle in &pile.queue_vehicles {
                out.push_str(&format!(
                    "({},{},{})\n",
                    vehicle.vehicle_id,
                    vehicle.current_charged_capacity,
                    vehicle.current_fee
                ));
            }
        }

        // 空行分隔不同充电桩
        out.push('\n');
    }

    out
}

/// 等候区车辆的文本渲染
pub fn format_waiting_snapshot(snapshot: &WaitingSnapshot) -> String {
    let mut out = String::from("=== 等候区车辆信息 ===\n");

    if snapshot.waiting_vehicles.is_empty() {
        out.push_str("(无等候车辆)\n");
        return out;
    }

    for vehicle in &snapshot.waiting_vehicles {
        out.push_str(&format!(
            "({},{},{})\n",
            vehicle.license_plate,
            vehicle.request_type,
            vehicle.requested_capacity
        ));
    }

    out
}

/// 按约定格式输出排队状态
pub fn print_queue_snapshot(snapshot: &QueueSnapshot) {
    print!("{}", format_queue_snapshot(snapshot));
}

/// 按约定格式输出等候区车辆
pub fn print_waiting_snapshot(snapshot: &WaitingSnapshot) {
    print!("{}", format_waiting_snapshot(snapshot));
}

/// 输出运行完成汇总，分隔线已在每个步骤末尾打印
pub fn print_run_complete(report: &RunReport) {
    println!(
        "{} 共 {} 个步骤，派发动作 {} 个，失败 {} 个，跳过指令 {} 条",
        "测试用例执行完成!".green().bold(),
        report.steps.len(),
        report.total_dispatched(),
        report.total_failed(),
        report.total_skipped()
    );
}
