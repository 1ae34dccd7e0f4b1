//! CPT CLI 应用
//!
//! 充电桩管理系统场景测试驱动器：读取测试用例文件，启动模拟器，
//! 驱动后端服务逐步回放场景并输出状态快照。

use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod config;
mod run;

#[derive(Parser)]
#[command(name = "cpt")]
#[command(about = "充电桩管理系统自动化测试驱动器", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 测试用例文件路径
    pub scenario_file: String,

    /// 后端服务地址，覆盖配置文件
    #[arg(long)]
    pub backend: Option<String>,

    /// 模拟器可执行文件路径，覆盖配置文件
    #[arg(long)]
    pub simulator: Option<String>,

    /// 日志级别
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        // 参数缺失或无效: 打印用法并以状态码 1 退出
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    // 运行期间的失败只报告，不改变退出状态
    if let Err(e) = run::execute(cli).await {
        error!("✗ {:#}", e);
    }
}
