// main.rs - 程序入口
// 负责初始化语言与日志、解析命令行参数、构造配置并启动一次抓取

mod calendar;
mod cli;
mod config;
mod error;
mod fetcher;
mod logging;
mod orchestrator;
mod resolution;
mod source;
#[cfg(test)]
mod test_server;

// 初始化多语言支持，嵌入 locales 目录下的所有翻译
rust_i18n::i18n!("locales");

use calendar::CalendarMonth;
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use orchestrator::RunOutcome;
use rust_i18n::t;
use source::smashing::SmashingClient;

/// 单线程运行时：所有请求按顺序逐个等待
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 自动检测系统语言并设置
    let locale = std::env::var("LANG").unwrap_or_else(|_| "en".to_string());
    if locale.starts_with("zh") {
        rust_i18n::set_locale("zh-CN");
    } else {
        rust_i18n::set_locale("en");
    }

    logging::init();

    let cli = Cli::parse();

    // 缺少任一参数：打印用法，正常退出
    let (Some(month_arg), Some(resolution)) = (cli.month, cli.resolution) else {
        println!("{}", t!("usage"));
        return Ok(());
    };

    let month: CalendarMonth = match month_arg.parse() {
        Ok(month) => month,
        Err(e) => {
            println!("{}", t!("invalid_month", value => month_arg, reason => e));
            return Ok(());
        }
    };

    let config = AppConfig::new(month, resolution)?;
    let client = SmashingClient::new()?;

    if let RunOutcome::Completed {
        directory,
        outcomes,
    } = orchestrator::run(&client, config).await?
    {
        tracing::debug!(directory = %directory.display(), links = outcomes.len(), "run finished");
    }

    Ok(())
}
