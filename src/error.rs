use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error(transparent)]
    File(#[from] FileError),
    /// 分类选择错误
    #[error(transparent)]
    Prompt(#[from] PromptError),
    /// JSON 序列化失败
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// 控制台输出失败
    #[error("console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 输入文件不存在
    #[error("file not found: {path}")]
    NotFound { path: String },
    /// 读取文件失败（包括非 UTF-8 内容）
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 分类菜单错误
///
/// 非法输入在菜单内部重试，不会出现在这里
#[derive(Debug, Error)]
pub enum PromptError {
    /// 等待输入时标准输入已关闭
    #[error("standard input closed before a category was chosen")]
    InputClosed,
    /// 读取标准输入失败
    #[error("failed to read category choice: {0}")]
    ReadFailed(#[source] std::io::Error),
}

/// 对用户可见的错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 输入文件不存在
    InputNotFound,
    /// 其他所有失败
    Unclassified,
}

impl AppError {
    /// 创建文件不存在错误
    pub fn not_found(path: impl Into<String>) -> Self {
        AppError::File(FileError::NotFound { path: path.into() })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 归类错误，决定顶层如何提示
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::File(FileError::NotFound { .. }) => ErrorKind::InputNotFound,
            _ => ErrorKind::Unclassified,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_input_is_classified() {
        assert_eq!(
            AppError::not_found("animals_clean.txt").kind(),
            ErrorKind::InputNotFound
        );

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            AppError::file_write_failed("out.json", denied).kind(),
            ErrorKind::Unclassified
        );
        assert_eq!(
            AppError::from(PromptError::InputClosed).kind(),
            ErrorKind::Unclassified
        );
    }

    #[test]
    fn test_display_includes_path() {
        let err = AppError::not_found("missing.txt");
        assert_eq!(err.to_string(), "file not found: missing.txt");
    }
}
