// fetcher.rs - 单张壁纸的解析、筛选与下载
// 链接先相对页面地址解析，再按文件名中的分辨率标记筛选，匹配的才下载

use crate::error::DownloadError;
use crate::resolution;
use crate::source::WallpaperSource;
use rust_i18n::t;
use std::path::{Path, PathBuf};
use url::Url;

/// 单个链接的处理结果
#[derive(Debug)]
pub enum DownloadOutcome {
    /// 已保存到该路径
    Downloaded(PathBuf),
    /// 分辨率不匹配，没有发出任何请求
    Skipped,
    /// 解析或下载失败，错误已报告，不影响后续链接
    Failed(DownloadError),
}

/// 相对链接按页面地址解析，绝对链接原样返回
pub fn resolve_link(base_url: &Url, link: &str) -> Result<Url, url::ParseError> {
    base_url.join(link)
}

/// URL 路径的最后一段，路径以 `/` 结尾时为空串
///
/// `mailto:` 这类没有层级路径的 URL 取整个路径
pub fn file_name_of(url: &Url) -> &str {
    url.path().rsplit('/').next().unwrap_or("")
}

/// 处理一个链接：分辨率匹配则下载到 `dest_dir/{文件名}`，覆盖同名文件
pub async fn fetch_one(
    source: &dyn WallpaperSource,
    base_url: &Url,
    link: &str,
    target_resolution: &str,
    dest_dir: &Path,
) -> DownloadOutcome {
    let url = match resolve_link(base_url, link) {
        Ok(url) => url,
        Err(e) => {
            let outcome = DownloadOutcome::Failed(e.into());
            report(&outcome, link);
            return outcome;
        }
    };

    let file_name = file_name_of(&url);
    if !resolution::matches(file_name, target_resolution) {
        tracing::debug!(%url, "resolution mismatch, skipped");
        return DownloadOutcome::Skipped;
    }

    let save_path = dest_dir.join(file_name);
    let outcome = match source.download(&url, &save_path).await {
        Ok(()) => DownloadOutcome::Downloaded(save_path),
        Err(e) => DownloadOutcome::Failed(e),
    };
    report(&outcome, file_name);
    outcome
}

/// 给用户看的结果提示，跳过的链接不提示
pub fn outcome_message(outcome: &DownloadOutcome, file_name: &str) -> Option<String> {
    match outcome {
        DownloadOutcome::Downloaded(_) => Some(t!("downloaded", file => file_name).into_owned()),
        DownloadOutcome::Skipped => None,
        DownloadOutcome::Failed(_) => Some(t!("download_failed", file => file_name).into_owned()),
    }
}

fn report(outcome: &DownloadOutcome, file_name: &str) {
    match outcome {
        DownloadOutcome::Downloaded(path) => {
            tracing::debug!(path = %path.display(), "saved");
        }
        DownloadOutcome::Failed(e) => {
            tracing::warn!(file_name, error = %e, "download failed");
        }
        DownloadOutcome::Skipped => {}
    }

    if let Some(message) = outcome_message(outcome, file_name) {
        println!("{message}");
    }
}
