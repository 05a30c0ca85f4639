//! 标题清洗
//!
//! 只移除装饰性的括号片段，保留编号、章节标记和分隔符

use regex::Regex;

use super::rules::compile_patterns;
use super::{ManuscriptError, ParserRules};

#[derive(Debug, Clone)]
pub struct TitleCleaner {
    patterns: Vec<Regex>,
}

impl TitleCleaner {
    pub fn new(rules: &ParserRules) -> Result<Self, ManuscriptError> {
        Ok(Self {
            patterns: compile_patterns(&rules.title_clean_patterns, false)?,
        })
    }

    /// 去除首尾空白 → 依次全局删除各清洗模式的命中 → 再去除首尾空白
    pub fn clean(&self, raw_title: &str) -> String {
        let mut cleaned = raw_title.trim().to_string();
        for pattern in &self.patterns {
            if pattern.is_match(&cleaned) {
                cleaned = pattern.replace_all(&cleaned, "").into_owned();
            }
        }
        cleaned.trim().to_string()
    }
}
