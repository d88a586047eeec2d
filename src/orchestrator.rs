// orchestrator.rs - 按月份抓取并下载壁纸
// 计算日历页面地址 -> 提取链接 -> 准备下载目录 -> 逐个链接顺序下载

use crate::config::AppConfig;
use crate::fetcher::{self, DownloadOutcome};
use crate::source::WallpaperSource;
use rust_i18n::t;
use std::path::PathBuf;
use tokio::fs;

/// 一次运行的结局
#[derive(Debug)]
pub enum RunOutcome {
    /// 页面抓取或解析失败，错误已报告
    FetchFailed,
    /// 页面中没有图片链接
    NoWallpapers,
    /// 所有链接都已处理，`outcomes` 与链接一一对应、顺序一致
    Completed {
        directory: PathBuf,
        outcomes: Vec<DownloadOutcome>,
    },
}

/// 执行一次完整的抓取
///
/// 抓取失败和单张下载失败都只报告不中断；
/// 只有创建下载目录失败会作为错误返回
pub async fn run(source: &dyn WallpaperSource, config: AppConfig) -> std::io::Result<RunOutcome> {
    let page_url = match config.month.page_url(&config.site) {
        Ok(url) => url,
        Err(e) => return Ok(report_fetch_failure(e)),
    };
    tracing::debug!(url = %page_url, "calendar page");

    let links = match source.fetch_links(&page_url).await {
        Ok(links) => links,
        Err(e) => return Ok(report_fetch_failure(e)),
    };

    if links.is_empty() {
        println!("{}", t!("no_wallpapers"));
        return Ok(RunOutcome::NoWallpapers);
    }

    let directory = config.download_dir();
    fs::create_dir_all(&directory).await?;

    // 逐个等待，保持严格的先后顺序
    let mut outcomes = Vec::with_capacity(links.len());
    for link in &links {
        let outcome =
            fetcher::fetch_one(source, &page_url, link, &config.resolution, &directory).await;
        outcomes.push(outcome);
    }

    Ok(RunOutcome::Completed {
        directory,
        outcomes,
    })
}

/// 页面抓取失败时给用户看的提示
pub fn fetch_failure_message(reason: impl std::fmt::Display) -> String {
    t!("fetch_error", reason => reason).into_owned()
}

fn report_fetch_failure(reason: impl std::fmt::Display) -> RunOutcome {
    tracing::debug!(%reason, "calendar page unavailable");
    println!("{}", fetch_failure_message(reason));
    println!("{}", t!("no_wallpapers"));
    RunOutcome::FetchFailed
}
