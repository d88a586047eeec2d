// calendar.rs - 日历月份与归档路径计算
// 站点把某月的壁纸日历发布在「上一个月」的归档路径下，
// 例如 2023 年 1 月的日历位于 2022/12/ 下

use crate::error::MonthParseError;
use chrono::Month;
use std::str::FromStr;
use url::Url;

/// 用户请求的日历月份（年 + 月）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: Month,
}

impl CalendarMonth {
    /// 月份不在 1-12 之间时返回 None
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())?;
        Some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1 = 一月 ... 12 = 十二月
    pub fn month(&self) -> u32 {
        self.month.number_from_month()
    }

    /// 归档路径所用的发布月份：请求月份的前一个月，一月回退到上一年十二月
    pub fn publish_month(&self) -> Self {
        match self.month {
            Month::January => Self {
                year: self.year - 1,
                month: Month::December,
            },
            m => Self {
                year: self.year,
                month: m.pred(),
            },
        }
    }

    /// 日历页面地址
    ///
    /// 路径中的年月取发布月份，slug 中的月份名和年份取请求月份本身：
    /// `{site}/2022/12/desktop-wallpaper-calendars-january-2023/`
    pub fn page_url(&self, site: &Url) -> Result<Url, url::ParseError> {
        let publish = self.publish_month();
        let path = format!(
            "{}/{:02}/desktop-wallpaper-calendars-{}-{}/",
            publish.year(),
            publish.month(),
            self.month.name().to_lowercase(),
            self.year
        );
        site.join(&path)
    }

    /// 下载目录名，如 `2023-01_640x480_wallpapers`
    pub fn directory_name(&self, resolution: &str) -> String {
        format!("{}-{:02}_{}_wallpapers", self.year(), self.month(), resolution)
    }
}

/// 解析命令行的 `MMYYYY`：前两位是月，后四位是年
impl FromStr for CalendarMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || MonthParseError::Format(s.to_string());

        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format_err());
        }

        let month: u32 = s[..2].parse().map_err(|_| format_err())?;
        let year: i32 = s[2..].parse().map_err(|_| format_err())?;

        Self::new(year, month).ok_or(MonthParseError::OutOfRange(month))
    }
}
