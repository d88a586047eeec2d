// error.rs - 错误类型定义
// 页面抓取、单张下载、月份参数解析各自一个枚举，调用方按需决定是报告还是传播

use std::path::PathBuf;
use thiserror::Error;

/// 抓取或解析日历页面失败
///
/// 解析错误并入这里，不单独处理
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid link selector: {0}")]
    Selector(String),
}

/// 单张壁纸下载失败，只影响当前这一张
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("cannot resolve link: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `--month` 参数不是合法的 MMYYYY
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthParseError {
    #[error("expected six digits in the form MMYYYY, got {0:?}")]
    Format(String),

    #[error("month must be between 01 and 12, got {0:02}")]
    OutOfRange(u32),
}
