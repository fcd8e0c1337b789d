use serde::{Deserialize, Serialize};

/// 导出信息中的来源说明
pub const EXPORT_SOURCE: &str = "Text file conversion";

/// 导出信息中的备注
pub const EXPORT_NOTE: &str =
    "Converted from simple text format. Correct answer is always the first option.";

/// 所有导出题目的难度
pub const DEFAULT_DIFFICULTY: u8 = 1;

/// 选项数量：1 个正确答案 + 3 个干扰项
pub const OPTION_COUNT: usize = 4;

/// 从文本文件解析出的原始题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQuestion {
    pub question_text: String,
    /// 第一个选项是正确答案
    pub options: [String; OPTION_COUNT],
}

impl RawQuestion {
    /// 创建原始题目，选项数量不是 4 时返回 None
    pub fn new(question_text: impl Into<String>, options: Vec<String>) -> Option<Self> {
        let options: [String; OPTION_COUNT] = options.try_into().ok()?;
        Some(Self {
            question_text: question_text.into(),
            options,
        })
    }

    /// 正确答案
    pub fn correct_answer(&self) -> &str {
        &self.options[0]
    }
}

/// 补全 id、分类、难度后的题目
///
/// 字段顺序即 JSON 输出顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedQuestion {
    pub id: String,
    pub question_text: String,
    pub options: [String; OPTION_COUNT],
    pub category: String,
    pub difficulty: u8,
}

impl EnrichedQuestion {
    pub fn new(raw: RawQuestion, id: String, category: &str) -> Self {
        Self {
            id,
            question_text: raw.question_text,
            options: raw.options,
            category: category.to_string(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

/// 导出元数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportInfo {
    pub exported_at: String,
    pub total_questions: usize,
    pub source: String,
    pub note: String,
    pub removed_fields: Vec<String>,
}

/// 导出文件的顶层结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEnvelope {
    pub export_info: ExportInfo,
    pub questions: Vec<EnrichedQuestion>,
}

impl ExportEnvelope {
    /// 用题目列表和导出时间构建导出结构
    pub fn new(questions: Vec<EnrichedQuestion>, exported_at: impl Into<String>) -> Self {
        Self {
            export_info: ExportInfo {
                exported_at: exported_at.into(),
                total_questions: questions.len(),
                source: EXPORT_SOURCE.to_string(),
                note: EXPORT_NOTE.to_string(),
                removed_fields: Vec::new(),
            },
            questions,
        }
    }
}
