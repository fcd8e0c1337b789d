//! 题目补全服务
//!
//! 为每道原始题目附加 ID、分类和难度，题干和选项原样保留

use crate::models::{Category, EnrichedQuestion, RawQuestion};
use crate::services::id_generator::IdGenerator;

/// 题目补全服务
pub struct Enricher<'a, G: IdGenerator> {
    ids: &'a mut G,
    category: Category,
}

impl<'a, G: IdGenerator> Enricher<'a, G> {
    /// 本批题目统一使用同一个分类
    pub fn new(ids: &'a mut G, category: Category) -> Self {
        Self { ids, category }
    }

    pub fn enrich(&mut self, raw: RawQuestion) -> EnrichedQuestion {
        let id = self.ids.next_id();
        EnrichedQuestion::new(raw, id, self.category.stored_value())
    }

    /// 按原顺序补全所有题目
    ///
    /// # 参数
    /// - `questions`: 解析得到的原始题目
    ///
    /// # 返回
    /// 返回补全后的题目，题干和选项不做任何修改
    pub fn enrich_all(&mut self, questions: Vec<RawQuestion>) -> Vec<EnrichedQuestion> {
        questions.into_iter().map(|raw| self.enrich(raw)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::DEFAULT_DIFFICULTY;
    use crate::services::id_generator::SequentialIdGenerator;

    fn raw(text: &str) -> RawQuestion {
        let options = ["right", "wrong 1", "wrong 2", "wrong 3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        RawQuestion::new(text, options).unwrap()
    }

    #[test]
    fn test_enrich_all_keeps_order_and_content() {
        let mut ids = SequentialIdGenerator::new(1);
        let mut enricher = Enricher::new(&mut ids, Category::History);

        let enriched = enricher.enrich_all(vec![raw("First?"), raw("Second?")]);

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].question_text, "First?");
        assert_eq!(enriched[1].question_text, "Second?");
        assert_eq!(enriched[0].options[0], "right");
        assert_eq!(enriched[0].id, "00000000000000000001");
        assert_eq!(enriched[1].id, "00000000000000000002");
    }

    #[test]
    fn test_category_and_difficulty_are_uniform() {
        let mut ids = SequentialIdGenerator::default();
        let mut enricher = Enricher::new(&mut ids, Category::Riddles);

        let enriched = enricher.enrich_all((0..5).map(|i| raw(&format!("Q{}?", i))).collect());

        assert!(enriched.iter().all(|q| q.category == "ألغاز"));
        assert!(enriched.iter().all(|q| q.difficulty == DEFAULT_DIFFICULTY));
    }
}
