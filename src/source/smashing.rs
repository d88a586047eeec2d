// source/smashing.rs - Smashing Magazine 壁纸日历客户端
// 负责抓取日历页面、提取图片链接，以及下载单张图片

use crate::config::USER_AGENT;
use crate::error::{DownloadError, FetchError};
use crate::source::WallpaperSource;
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

/// href 以 .jpg 或 .png 结尾的链接（区分大小写，只看后缀）
const IMAGE_LINKS: &str = r#"a[href$=".jpg"], a[href$=".png"]"#;

/// 从 HTML 中提取图片链接，按文档顺序，保留重复项
pub fn extract_links(html: &str) -> Result<Vec<String>, FetchError> {
    let selector =
        Selector::parse(IMAGE_LINKS).map_err(|e| FetchError::Selector(e.to_string()))?;
    let document = Html::parse_document(html);

    let links = document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect();

    Ok(links)
}

/// 基于 reqwest 的站点客户端
///
/// `reqwest::Client` 内部维护连接池，整个运行期间复用同一个实例
pub struct SmashingClient {
    client: reqwest::Client,
}

impl SmashingClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[cfg(test)]
impl SmashingClient {
    /// 直连本机测试服务器，忽略环境里的代理设置
    pub fn local() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .no_proxy()
            .build()
            .unwrap();
        Self { client }
    }
}

#[async_trait]
impl WallpaperSource for SmashingClient {
    async fn fetch_links(&self, page_url: &Url) -> Result<Vec<String>, FetchError> {
        tracing::debug!(url = %page_url, "fetching calendar page");

        let html = self
            .client
            .get(page_url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let links = extract_links(&html)?;
        tracing::debug!(count = links.len(), "extracted image links");
        Ok(links)
    }

    async fn download(&self, url: &Url, save_path: &Path) -> Result<(), DownloadError> {
        // 先把内容完整取回，网络失败时不会留下半截文件
        let bytes = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let write_err = |source| DownloadError::Write {
            path: save_path.to_path_buf(),
            source,
        };

        // File::create 会截断已存在的同名文件
        let mut file = File::create(save_path).await.map_err(write_err)?;
        file.write_all(&bytes).await.map_err(write_err)?;
        file.flush().await.map_err(write_err)?;

        tracing::debug!(url = %url, path = %save_path.display(), bytes = bytes.len(), "saved");
        Ok(())
    }
}
