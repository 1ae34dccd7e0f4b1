//! 场景运行流程

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::time::Duration;
use tracing::info;

use cpt_executor::ExecutionEngine;
use cpt_gateway::ServiceGateway;
use cpt_scenario::parse_scenario;
use cpt_simulator::SimulatorChannel;

use crate::config::CliConfig;
use crate::Cli;

pub async fn execute(cli: Cli) -> Result<()> {
    let config = CliConfig::load()?;

    println!("开始执行测试用例: {}", cli.scenario_file.cyan());
    println!("{}", "=".repeat(60));

    let text = fs::read_to_string(&cli.scenario_file)
        .with_context(|| format!("读取测试用例文件失败: {}", cli.scenario_file))?;
    let steps = parse_scenario(&text).context("解析测试用例文件失败")?;
    info!("场景加载成功: {} 个步骤", steps.len());

    // 模拟器启动失败是唯一的致命错误，在任何步骤执行前中止
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("正在启动模拟器...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut simulator_config = config.simulator_config();
    if let Some(path) = &cli.simulator {
        simulator_config.binary_path = path.clone();
    }

    let simulator = match SimulatorChannel::spawn(&simulator_config).await {
        Ok(channel) => {
            spinner.finish_with_message(format!("{} 模拟器启动成功", "✓".green().bold()));
            channel
        }
        Err(e) => {
            spinner.finish_with_message(format!("{} 模拟器启动失败", "✗".red().bold()));
            return Err(e).context("无法启动模拟器");
        }
    };

    let mut gateway_config = config.gateway_config();
    if let Some(url) = &cli.backend {
        gateway_config.base_url = url.clone();
    }
    let gateway = ServiceGateway::new(gateway_config)?;

    let mut engine = ExecutionEngine::new(gateway, simulator, config.engine_config());
    engine.run(&steps).await;

    // 正常路径上恰好请求一次终止；异常路径由 kill_on_drop 兜底
    let (_gateway, simulator) = engine.into_parts();
    simulator.close().await;

    Ok(())
}
