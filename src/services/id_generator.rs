//! 题目 ID 生成

use uuid::Uuid;

/// ID 长度（十六进制字符）
pub const ID_LEN: usize = 20;

/// 题目 ID 生成器
///
/// 业务代码只依赖这个 trait，测试时可以注入确定性的实现
pub trait IdGenerator {
    /// 生成一个 20 位十六进制 ID
    ///
    /// # 返回
    /// 返回小写十六进制字符串，长度为 `ID_LEN`
    fn next_id(&mut self) -> String;
}

/// 基于随机 UUID v4 的生成器
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        // simple 格式即去掉连字符的 32 位小写十六进制
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LEN);
        id
    }
}

/// 按序号生成 ID 的确定性生成器
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{:0width$x}", self.next, width = ID_LEN);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_hex_id(id: &str) -> bool {
        id.len() == ID_LEN && id.chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_uuid_ids_are_short_hex_and_distinct() {
        let mut generator = UuidIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.next_id()).collect();

        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| is_hex_id(id)));
    }

    #[test]
    fn test_sequential_ids() {
        let mut generator = SequentialIdGenerator::new(255);
        assert_eq!(generator.next_id(), "000000000000000000ff");
        assert_eq!(generator.next_id(), "00000000000000000100");
    }
}
