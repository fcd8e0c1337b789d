use crate::error::{AppError, AppResult};
use crate::models::question::{RawQuestion, OPTION_COUNT};
use std::path::Path;
use tokio::fs;

/// 解析结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// 按文件顺序排列的完整题目
    pub questions: Vec<RawQuestion>,
    /// 选项不足 4 个而被丢弃的题组数量
    pub dropped: usize,
}

/// 解析题目文本
///
/// 格式：每组 5 行（题干 + 正确答案 + 3 个干扰项），组之间用空行分隔。
/// 选项不足 4 行的题组直接丢弃。
///
/// # 参数
/// - `content`: 文件内容，`\n`、`\r\n`、`\r` 都视为换行
///
/// # 返回
/// 按文件顺序排列的题目，以及被丢弃的题组数量
pub fn parse_questions(content: &str) -> ParseOutcome {
    // 先合并 \r\n，否则中间的空片段会被当成空行而截断题组
    let normalized = content.replace("\r\n", "\n");
    let lines: Vec<&str> = normalized.split(['\r', '\n']).map(str::trim).collect();
    let mut outcome = ParseOutcome::default();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].is_empty() {
            i += 1;
            continue;
        }

        let question_text = lines[i];
        i += 1;

        let mut options = Vec::with_capacity(OPTION_COUNT);
        while options.len() < OPTION_COUNT && i < lines.len() && !lines[i].is_empty() {
            options.push(lines[i].to_string());
            i += 1;
        }

        match RawQuestion::new(question_text, options) {
            Some(question) => outcome.questions.push(question),
            None => outcome.dropped += 1,
        }

        while i < lines.len() && lines[i].is_empty() {
            i += 1;
        }
    }

    outcome
}

/// 读取并解析题目文件
///
/// # 参数
/// - `path`: UTF-8 编码的题目文本文件
///
/// # 返回
/// 文件不存在时返回 `FileError::NotFound`，其他读取失败返回 `FileError::ReadFailed`
pub async fn load_questions(path: &Path) -> AppResult<ParseOutcome> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::not_found(&path_str),
        _ => AppError::file_read_failed(&path_str, e),
    })?;

    let outcome = parse_questions(&content);
    tracing::info!(
        "✓ 已读取 {}: {} 道题目",
        path_str,
        outcome.questions.len()
    );
    if outcome.dropped > 0 {
        tracing::warn!("⚠️ 丢弃了 {} 个不完整的题组", outcome.dropped);
    }

    Ok(outcome)
}
