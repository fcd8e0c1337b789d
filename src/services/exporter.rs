//! 导出服务
//!
//! 把补全后的题目包装进导出结构，写成带缩进的 JSON 文件

use crate::error::{AppError, AppResult};
use crate::models::{EnrichedQuestion, ExportEnvelope};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// 导出服务
pub struct Exporter {
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 导出全部题目
    ///
    /// 目标文件已存在时直接覆盖
    ///
    /// # 参数
    /// - `questions`: 补全后的题目，按原顺序写出
    /// - `console`: 写成功提示的控制台
    ///
    /// # 返回
    /// 返回已写入文件的导出结构
    pub async fn export<W: Write>(
        &self,
        questions: Vec<EnrichedQuestion>,
        console: &mut W,
    ) -> AppResult<ExportEnvelope> {
        let envelope = ExportEnvelope::new(questions, exported_at_now());
        let json = to_pretty_json(&envelope)?;

        let path_str = self.output_path.display().to_string();
        fs::write(&self.output_path, json)
            .await
            .map_err(|e| AppError::file_write_failed(&path_str, e))?;

        info!("💾 已写入 {}", path_str);
        writeln!(
            console,
            "Successfully converted {} questions to {}",
            envelope.export_info.total_questions, path_str
        )?;

        Ok(envelope)
    }
}

/// 本地时间，ISO-8601 格式（不带时区）
pub fn exported_at_now() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// 两空格缩进，非 ASCII 字符原样输出
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
