//! Manuscript Context - 文稿限界上下文
//!
//! 职责:
//! - 行分类（排除 / 卷标题 / 章节标题 / 正文）
//! - 标题清洗与内容类型判定
//! - 片段累加状态机
//! - 卷/章结构组装

mod content_classifier;
mod entities;
mod errors;
mod line_classifier;
mod parser;
mod rules;
mod segment_accumulator;
mod structure_builder;
mod title_cleaner;

pub use content_classifier::ContentClassifier;
pub use entities::{assign_reading_order, Chapter, ContentType, Volume};
pub use errors::ManuscriptError;
pub use line_classifier::{LineClassifier, LineKind, MAX_EXCLUDE_CHARS, MAX_TITLE_CHARS};
pub use parser::ManuscriptParser;
pub use rules::{KeywordTable, ParserRules, RuleOverrides, SingleWordTable};
pub use segment_accumulator::{AccumulatorState, Segment, SegmentAccumulator};
pub use structure_builder::{Structure, StructureBuilder};
pub use title_cleaner::TitleCleaner;
