// logging.rs - 诊断日志初始化
// 面向用户的提示走 stdout；这里的日志只写 stderr，由 RUST_LOG 控制，默认只输出 warn 及以上

use tracing_subscriber::EnvFilter;

pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
