/// 日志工具模块
///
/// 诊断日志写到 stderr，stdout 只留给控制台交互
use anyhow::{anyhow, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志，默认 info 级别，可用 RUST_LOG 覆盖
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("无法初始化日志: {}", e))
}

/// 记录程序启动信息
///
/// # 参数
/// - `input_file`: 题目文本文件路径
/// - `output_file`: 导出 JSON 文件路径
pub fn log_startup(input_file: &str, output_file: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 题目转换开始");
    info!("📄 输入: {}", input_file);
    info!("📦 输出: {}", output_file);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的文本，超长时以 `...` 结尾
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
