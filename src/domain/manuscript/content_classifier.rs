//! 内容类型判定
//!
//! 先按声明顺序匹配关键词分类（大小写不敏感的子串），再查单字表，否则为普通章节

use super::{ContentType, ParserRules};

#[derive(Debug, Clone)]
pub struct ContentClassifier {
    /// 关键词已转为小写
    keywords: Vec<(ContentType, Vec<String>)>,
    single_words: Vec<(String, ContentType)>,
}

impl ContentClassifier {
    pub fn new(rules: &ParserRules) -> Self {
        let keywords = rules
            .content_keywords
            .iter()
            .map(|(content_type, words)| {
                (*content_type, words.iter().map(|w| w.to_lowercase()).collect())
            })
            .collect();

        Self {
            keywords,
            single_words: rules.single_word_types.clone(),
        }
    }

    /// 第一个命中的分类胜出，即使后续分类的关键词也命中
    pub fn classify(&self, title: &str) -> ContentType {
        let lowered = title.to_lowercase();

        for (content_type, words) in &self.keywords {
            if words.iter().any(|word| lowered.contains(word.as_str())) {
                return *content_type;
            }
        }

        for (word, content_type) in &self.single_words {
            if title.contains(word.as_str()) {
                return *content_type;
            }
        }

        ContentType::Chapter
    }
}
