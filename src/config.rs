// config.rs - 运行配置
// 每次运行构造一次，之后只读；不读取配置文件，也不读取环境变量

use crate::calendar::CalendarMonth;
use std::env;
use std::path::PathBuf;
use url::Url;

/// 壁纸日历所在站点
pub const DEFAULT_SITE: &str = "https://www.smashingmagazine.com/";

/// 请求时携带的 User-Agent
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// 一次运行所需的全部参数
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 站点根地址，日历页面路径相对它拼接
    pub site: Url,
    /// 下载目录的父目录（默认为当前工作目录）
    pub output_root: PathBuf,
    /// 请求的日历月份
    pub month: CalendarMonth,
    /// 目标分辨率，如 "640x480"，与文件名标记按字符串比较
    pub resolution: String,
}

impl AppConfig {
    /// 以默认站点和当前工作目录初始化配置
    pub fn new(
        month: CalendarMonth,
        resolution: String,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            site: Url::parse(DEFAULT_SITE)?,
            output_root: env::current_dir()?,
            month,
            resolution,
        })
    }

    /// 本次运行的下载目录
    pub fn download_dir(&self) -> PathBuf {
        self.output_root.join(self.month.directory_name(&self.resolution))
    }
}
