//! 转换流程 - 编排层
//!
//! 依次执行：读取解析 → 选择分类 → 补全题目 → 导出 → 打印示例。
//! 不包含具体业务逻辑，只做调度和控制台输出。

use crate::config::Config;
use crate::error::{AppError, AppResult, ErrorKind};
use crate::models::load_questions;
use crate::services::exporter::to_pretty_json;
use crate::services::{CategorySelector, Enricher, Exporter, IdGenerator, UuidIdGenerator};
use crate::utils::logging::{log_startup, truncate_text};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// 一次运行的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunSummary {
    /// 输入文件中没有完整的题目，未写出文件
    NoQuestions,
    /// 已导出
    Exported { total: usize, output_file: String },
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 使用标准输入输出和随机 ID 运行
    pub async fn run(&self) -> AppResult<RunSummary> {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut output = std::io::stdout();
        let mut ids = UuidIdGenerator;
        self.run_with(&mut input, &mut output, &mut ids).await
    }

    /// 运行主流程
    ///
    /// # 参数
    /// - `input`: 读取分类编号的控制台输入
    /// - `output`: 进度、菜单和示例题目的输出
    /// - `ids`: 题目 ID 生成器
    ///
    /// # 返回
    /// 输入文件没有完整题目时返回 `RunSummary::NoQuestions`，不弹出菜单也不写文件
    pub async fn run_with<R, W, G>(
        &self,
        input: &mut R,
        output: &mut W,
        ids: &mut G,
    ) -> AppResult<RunSummary>
    where
        R: BufRead,
        W: Write,
        G: IdGenerator,
    {
        log_startup(&self.config.input_file, &self.config.output_file);

        writeln!(output, "Reading questions from {}...", self.config.input_file)?;
        let parsed = load_questions(Path::new(&self.config.input_file)).await?;

        if parsed.questions.is_empty() {
            warn!("⚠️ 没有找到完整的题目，程序结束");
            writeln!(output, "No questions found in the input file.")?;
            return Ok(RunSummary::NoQuestions);
        }

        writeln!(output, "Parsed {} questions", parsed.questions.len())?;

        let category = CategorySelector::new(&mut *input, &mut *output).select()?;
        let enriched = Enricher::new(ids, category).enrich_all(parsed.questions);

        writeln!(output, "\nCreating JSON output: {}...", self.config.output_file)?;
        let envelope = Exporter::new(&self.config.output_file)
            .export(enriched, &mut *output)
            .await?;

        if let Some(first) = envelope.questions.first() {
            info!("示例题目: {}", truncate_text(&first.question_text, 40));
            writeln!(output, "\nSample converted question:")?;
            writeln!(output, "{}", to_pretty_json(first)?)?;
        }

        Ok(RunSummary::Exported {
            total: envelope.export_info.total_questions,
            output_file: self.config.output_file.clone(),
        })
    }

    /// 顶层失败时给用户看的提示
    pub fn failure_message(&self, err: &AppError) -> String {
        match err.kind() {
            ErrorKind::InputNotFound => format!(
                "Error: Could not find input file '{}'",
                self.config.input_file
            ),
            ErrorKind::Unclassified => format!("Error during conversion: {}", err),
        }
    }
}
