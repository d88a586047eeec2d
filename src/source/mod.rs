// source/mod.rs - 壁纸源抽象接口
// 编排逻辑只依赖这里的 Trait，真正的网络访问由具体站点客户端实现

pub mod smashing;

#[cfg(test)]
pub mod fake;

use crate::error::{DownloadError, FetchError};
use async_trait::async_trait;
use std::path::Path;
use url::Url;

/// 壁纸源：列出页面中的图片链接，并把单张图片下载到本地
#[async_trait]
pub trait WallpaperSource: Send + Sync {
    /// 抓取页面，按文档顺序返回所有以 `.jpg` / `.png` 结尾的链接（保留重复项）
    ///
    /// 抓取失败返回 Err，与「抓取成功但没有链接」的空列表区分开
    async fn fetch_links(&self, page_url: &Url) -> Result<Vec<String>, FetchError>;

    /// 下载 `url` 的内容写入 `save_path`，已存在的文件直接覆盖
    async fn download(&self, url: &Url, save_path: &Path) -> Result<(), DownloadError>;
}
