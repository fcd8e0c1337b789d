//! 分类选择服务
//!
//! 在控制台显示编号菜单，反复读取输入直到得到 1-10 的编号

use crate::error::{AppResult, PromptError};
use crate::models::Category;
use std::io::{BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};
use tracing::{debug, info};

const RULE_WIDTH: usize = 50;

/// 分类选择服务
pub struct CategorySelector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> CategorySelector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 显示菜单并读取选择
    ///
    /// 非数字或超出范围的输入会提示后重新读取
    ///
    /// # 返回
    /// 返回选中的分类；输入流结束或读取失败时返回 `PromptError`
    pub fn select(&mut self) -> AppResult<Category> {
        self.print_menu()?;

        loop {
            write!(self.output, "Enter category number ({}-{}): ", 1, Category::ALL.len())?;
            self.output.flush()?;

            let line = self.read_line()?;
            match parse_choice(&line) {
                Ok(category) => {
                    writeln!(self.output, "\nSelected category: {}", category.label())?;
                    info!("✓ 已选择分类: {} ({})", category.label(), category.stored_value());
                    return Ok(category);
                }
                Err(ChoiceError::NotANumber) => {
                    debug!("无效输入: {:?}", line.trim());
                    writeln!(self.output, "Error: Please enter a valid number")?;
                }
                Err(ChoiceError::OutOfRange) => {
                    debug!("编号超出范围: {:?}", line.trim());
                    writeln!(
                        self.output,
                        "Error: Please enter a number between 1 and {}",
                        Category::ALL.len()
                    )?;
                }
            }
        }
    }

    fn print_menu(&mut self) -> AppResult<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "Choose category for the questions:")?;
        writeln!(self.output, "{}", rule)?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.output, "{:2}. {}", i + 1, category.label())?;
        }
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(PromptError::ReadFailed)?;
        if read == 0 {
            return Err(PromptError::InputClosed.into());
        }
        Ok(line)
    }
}

/// 菜单输入的校验结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange,
}

/// 把一行输入解析为分类
///
/// # 参数
/// - `input`: 用户输入的一行，允许首尾空白、正负号、数字间的单个下划线，
///   以及阿拉伯-印度数字等常见的十进制数字
///
/// # 返回
/// 1-10 返回对应分类；无法解析返回 `NotANumber`，其他整数（包括溢出）返回 `OutOfRange`
pub fn parse_choice(input: &str) -> Result<Category, ChoiceError> {
    let digits = normalize_integer(input).ok_or(ChoiceError::NotANumber)?;
    let number: i64 = digits.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ChoiceError::OutOfRange,
        _ => ChoiceError::NotANumber,
    })?;
    usize::try_from(number)
        .ok()
        .and_then(Category::from_index)
        .ok_or(ChoiceError::OutOfRange)
}

/// 各十进制数字区块中 0 的码位
const DIGIT_ZEROS: [u32; 17] = [
    0x0660, // 阿拉伯-印度数字
    0x06F0, // 扩展阿拉伯-印度数字（波斯/乌尔都）
    0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6, 0x0D66,
    0x0E50, 0x0ED0, 0x0F20, 0x1040,
    0xFF10, // 全角数字
];

fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let cp = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .map(|&zero| cp - zero)
}

/// 转成只含 ASCII 数字（可带负号）的字符串
fn normalize_integer(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut out = String::with_capacity(body.len() + 1);
    if negative {
        out.push('-');
    }

    let mut prev_digit = false;
    for c in body.chars() {
        if c == '_' {
            // 下划线只能出现在两个数字之间
            if !prev_digit {
                return None;
            }
            prev_digit = false;
            continue;
        }
        let d = decimal_value(c)?;
        out.push(char::from_digit(d, 10)?);
        prev_digit = true;
    }

    if !prev_digit {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, PromptError};
    use std::io::Cursor;

    fn run(input: &str) -> (AppResult<Category>, String) {
        let mut output = Vec::new();
        let result = CategorySelector::new(Cursor::new(input.as_bytes()), &mut output).select();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("7\n"), Ok(Category::Literature));
        assert_eq!(parse_choice("  1 "), Ok(Category::Islamic));
        assert_eq!(parse_choice("0"), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("11"), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("-3"), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("abc"), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice(""), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("4.5"), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn test_parse_choice_overflow_is_out_of_range() {
        assert_eq!(
            parse_choice("99999999999999999999"),
            Err(ChoiceError::OutOfRange)
        );
        assert_eq!(
            parse_choice("-99999999999999999999"),
            Err(ChoiceError::OutOfRange)
        );
    }

    #[test]
    fn test_parse_choice_unicode_digits_and_underscores() {
        assert_eq!(parse_choice("٤"), Ok(Category::Animals));
        assert_eq!(parse_choice("١٠\n"), Ok(Category::Riddles));
        assert_eq!(parse_choice("۷"), Ok(Category::Literature));
        assert_eq!(parse_choice("１"), Ok(Category::Islamic));
        assert_eq!(parse_choice("1_0"), Ok(Category::Riddles));
        assert_eq!(parse_choice("+3"), Ok(Category::Geography));
        assert_eq!(parse_choice("١٢"), Err(ChoiceError::OutOfRange));
        assert_eq!(parse_choice("_1"), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("1_"), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("1__0"), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("-"), Err(ChoiceError::NotANumber));
        assert_eq!(parse_choice("+-1"), Err(ChoiceError::NotANumber));
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (result, output) = run("0\n11\nabc\n7\n");

        let category = result.unwrap();
        assert_eq!(category.stored_value(), "آداب");
        assert_eq!(output.matches("Enter category number (1-10): ").count(), 4);
        assert_eq!(output.matches("Error: Please enter a number between 1 and 10").count(), 2);
        assert_eq!(output.matches("Error: Please enter a valid number").count(), 1);
        assert!(output.contains("Selected category: Literature"));
    }

    #[test]
    fn test_menu_lists_all_categories() {
        let (_, output) = run("4\n");
        assert!(output.contains("Choose category for the questions:"));
        assert!(output.contains(" 1. Islamic\n"));
        assert!(output.contains(" 4. Animals\n"));
        assert!(output.contains("10. Riddles\n"));
        assert!(!output.contains("حيوانات"));
    }

    #[test]
    fn test_arabic_digit_selects_category() {
        let (result, output) = run("٠\n٤\n");
        assert_eq!(result.unwrap(), Category::Animals);
        assert_eq!(output.matches("Error: Please enter a number between 1 and 10").count(), 1);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, _) = run("abc\n");
        assert!(matches!(
            result,
            Err(AppError::Prompt(PromptError::InputClosed))
        ));
    }
}
