// source/fake.rs - 测试用的内存壁纸源
// 返回预设的链接列表，下载时把 URL 文本写进目标文件，并记录每一次调用

use crate::error::{DownloadError, FetchError};
use crate::source::WallpaperSource;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Mutex;
use url::Url;

pub struct FakeSource {
    /// None 表示页面抓取失败
    links: Option<Vec<String>>,
    /// 这些文件名的下载会失败
    failing: Vec<String>,
    fetched: Mutex<Vec<String>>,
    downloaded: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_links(links: &[&str]) -> Self {
        Self {
            links: Some(links.iter().map(|s| s.to_string()).collect()),
            failing: Vec::new(),
            fetched: Mutex::new(Vec::new()),
            downloaded: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            links: None,
            ..Self::with_links(&[])
        }
    }

    pub fn failing_on(mut self, file_name: &str) -> Self {
        self.failing.push(file_name.to_string());
        self
    }

    /// 被抓取过的页面地址
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    /// 请求过下载的图片地址（含失败的）
    pub fn downloaded(&self) -> Vec<String> {
        self.downloaded.lock().unwrap().clone()
    }
}

#[async_trait]
impl WallpaperSource for FakeSource {
    async fn fetch_links(&self, page_url: &Url) -> Result<Vec<String>, FetchError> {
        self.fetched.lock().unwrap().push(page_url.to_string());
        self.links
            .clone()
            .ok_or_else(|| FetchError::Selector("page unreachable".to_string()))
    }

    async fn download(&self, url: &Url, save_path: &Path) -> Result<(), DownloadError> {
        self.downloaded.lock().unwrap().push(url.to_string());

        let name = save_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if self.failing.iter().any(|f| f == name) {
            return Err(DownloadError::Write {
                path: save_path.to_path_buf(),
                source: std::io::Error::other("disk full"),
            });
        }

        std::fs::write(save_path, url.as_str()).map_err(|source| DownloadError::Write {
            path: save_path.to_path_buf(),
            source,
        })
    }
}
