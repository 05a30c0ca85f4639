//! 行分类器
//!
//! 对一行原始文本（不预先去除空白）判定：排除行 / 卷标题 / 章节标题 / 正文。
//! 判定顺序固定：排除 → 卷 → 章。

use regex::Regex;

use super::rules::compile_patterns;
use super::{ManuscriptError, ParserRules};

/// 卷/章标题的最大字符数（去除首尾空白后）
pub const MAX_TITLE_CHARS: usize = 30;

/// 排除行的最大字符数（去除首尾空白后）
pub const MAX_EXCLUDE_CHARS: usize = 50;

/// 行首出现这些字符的行只能是正文
const LEADING_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}'];

/// 单行的分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// 命中排除规则，强制作为正文
    Excluded,
    VolumeTitle,
    ChapterTitle,
    Body,
}

impl LineKind {
    pub fn is_title(&self) -> bool {
        matches!(self, LineKind::VolumeTitle | LineKind::ChapterTitle)
    }
}

/// 行分类器
///
/// 正则在构造时按配置顺序编译一次；排除规则大小写不敏感，卷/章规则大小写敏感。
#[derive(Debug, Clone)]
pub struct LineClassifier {
    exclude: Vec<Regex>,
    volume: Vec<Regex>,
    chapter: Vec<Regex>,
}

impl LineClassifier {
    pub fn new(rules: &ParserRules) -> Result<Self, ManuscriptError> {
        Ok(Self {
            exclude: compile_patterns(&rules.exclude_patterns, true)?,
            volume: compile_patterns(&rules.volume_patterns, false)?,
            chapter: compile_patterns(&rules.chapter_patterns, false)?,
        })
    }

    /// 按固定优先级分类：排除 → 卷 → 章 → 正文
    pub fn classify(&self, line: &str) -> LineKind {
        if self.is_excluded(line) {
            LineKind::Excluded
        } else if self.is_volume_title(line) {
            LineKind::VolumeTitle
        } else if self.is_chapter_title(line) {
            LineKind::ChapterTitle
        } else {
            LineKind::Body
        }
    }

    pub fn is_excluded(&self, line: &str) -> bool {
        fits_shape(line, MAX_EXCLUDE_CHARS) && search_any(&self.exclude, line)
    }

    pub fn is_volume_title(&self, line: &str) -> bool {
        fits_shape(line, MAX_TITLE_CHARS) && search_any(&self.volume, line)
    }

    pub fn is_chapter_title(&self, line: &str) -> bool {
        fits_shape(line, MAX_TITLE_CHARS) && search_any(&self.chapter, line)
    }
}

/// 长度与行首空白约束
fn fits_shape(line: &str, max_chars: usize) -> bool {
    if line.starts_with(LEADING_WHITESPACE) {
        return false;
    }
    line.trim().chars().count() <= max_chars
}

/// 任一模式在行内任意位置命中即可
fn search_any(patterns: &[Regex], line: &str) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(line))
}
