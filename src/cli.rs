// cli.rs - 命令行接口定义
// 两个参数都在解析层声明为可选：缺任意一个时由 main 打印用法并正常退出

use clap::Parser;

/// 壁纸日历下载工具
///
/// 从 Smashing Magazine 的月度壁纸日历页面中，
/// 下载文件名带有指定分辨率的全部壁纸。
///
/// 用法示例:
///   wallcal --month 012023 --resolution 1920x1080
#[derive(Parser, Debug)]
#[command(name = "wallcal")]
#[command(version)]
#[command(author)]
#[command(about = "壁纸日历下载工具：按月份和分辨率下载 Smashing Magazine 壁纸日历")]
pub struct Cli {
    /// 日历月份，格式 MMYYYY（如 012023 表示 2023 年 1 月）
    #[arg(long, value_name = "MMYYYY")]
    pub month: Option<String>,

    /// 目标分辨率（如 640x480），与文件名中的分辨率标记逐字比较
    #[arg(long, value_name = "WxH")]
    pub resolution: Option<String>,
}
