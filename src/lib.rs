//! # Quiz Txt Export
//!
//! 把纯文本题库转换成带元数据的 JSON 导出文件
//!
//! ## 输入格式
//!
//! 每组 5 行：题干、正确答案、3 个干扰项，组之间用空行分隔。
//!
//! ## 模块结构
//!
//! - `models/` - 题目类型、分类表、文本解析
//! - `services/` - 分类选择、ID 生成、题目补全、导出
//! - `orchestrator/` - 串起整个流程的 `App`

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ErrorKind};
pub use models::{Category, EnrichedQuestion, ExportEnvelope, RawQuestion};
pub use orchestrator::{App, RunSummary};
pub use utils::logging as logger;
