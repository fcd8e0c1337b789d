/// 程序配置
///
/// 输入输出文件名是固定的，不从命令行或环境变量读取
#[derive(Clone, Debug)]
pub struct Config {
    /// 题目文本文件
    pub input_file: String,
    /// 导出的 JSON 文件
    pub output_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "animals_clean.txt".to_string(),
            output_file: "animals_clean_converted.json".to_string(),
        }
    }
}

impl Config {
    /// 使用指定的输入输出路径（测试用）
    pub fn with_paths(input_file: impl Into<String>, output_file: impl Into<String>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
        }
    }
}
