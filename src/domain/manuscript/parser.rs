//! 文稿解析器
//!
//! 组合行分类、标题清洗、内容类型判定、片段累加与结构组装：文本 → 卷列表

use super::{
    ContentClassifier, LineClassifier, ManuscriptError, ParserRules, SegmentAccumulator, Segment,
    Structure, StructureBuilder, TitleCleaner, Volume,
};

/// 一次解析所用的已编译规则
///
/// 每次解析按规则值重新构造，不共享可变状态
#[derive(Debug, Clone)]
pub struct ManuscriptParser {
    classifier: LineClassifier,
    cleaner: TitleCleaner,
    content_classifier: ContentClassifier,
}

impl ManuscriptParser {
    pub fn new(rules: &ParserRules) -> Result<Self, ManuscriptError> {
        Ok(Self {
            classifier: LineClassifier::new(rules)?,
            cleaner: TitleCleaner::new(rules)?,
            content_classifier: ContentClassifier::new(rules),
        })
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    pub fn cleaner(&self) -> &TitleCleaner {
        &self.cleaner
    }

    pub fn content_classifier(&self) -> &ContentClassifier {
        &self.content_classifier
    }

    /// 新的累加器，供调用方逐行驱动
    pub fn accumulator(&self) -> SegmentAccumulator<'_> {
        SegmentAccumulator::new(&self.classifier, &self.cleaner, &self.content_classifier)
    }

    pub fn segment(&self, text: &str) -> Result<Vec<Segment>, ManuscriptError> {
        let mut accumulator = self.accumulator();
        for line in text.split('\n') {
            accumulator.push_line(line);
        }
        accumulator.finish()
    }

    pub fn assemble(&self, text: &str) -> Result<Structure, ManuscriptError> {
        Ok(StructureBuilder::assemble(self.segment(text)?))
    }

    pub fn parse_text(&self, text: &str) -> Result<Vec<Volume>, ManuscriptError> {
        Ok(self.assemble(text)?.volumes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manuscript::{ContentType, RuleOverrides};

    const WITH_VOLUMES: &str = "第一卷 相遇\n\n正文\n\n第1章 初遇\n\n内容一\n\n第2章 发展\n\n内容二\n\n番外：回忆\n\n内容三\n\n后记\n\n内容四\n";
    const WITHOUT_VOLUMES: &str = "第1章 初遇\n\n内容一\n\n第2章 发展\n\n内容二\n\n番外：回忆\n\n内容三\n\n后记\n\n内容四\n";

    fn parser() -> ManuscriptParser {
        ManuscriptParser::new(&ParserRules::default()).unwrap()
    }

    #[test]
    fn test_nested_manuscript() {
        let volumes = parser().parse_text(WITH_VOLUMES).unwrap();

        assert_eq!(volumes.len(), 3);
        assert_eq!(volumes[0].title(), Some("第一卷 相遇"));
        let titles: Vec<&str> = volumes[0].chapters().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["第一卷 相遇", "第1章 初遇", "第2章 发展"]);
        assert_eq!(volumes[0].chapters()[0].content(), "正文");

        assert_eq!(volumes[1].title(), Some("番外：回忆"));
        assert_eq!(volumes[1].chapter_count(), 1);
        assert_eq!(volumes[1].chapters()[0].content_type(), ContentType::Extra);

        assert_eq!(volumes[2].title(), Some("后记"));
        assert_eq!(volumes[2].chapters()[0].content_type(), ContentType::Postscript);
        assert_eq!(volumes[2].chapters()[0].content(), "内容四");
    }

    #[test]
    fn test_flat_manuscript() {
        let volumes = parser().parse_text(WITHOUT_VOLUMES).unwrap();

        assert_eq!(volumes.len(), 1);
        assert!(volumes[0].title().is_none());
        let titles: Vec<&str> = volumes[0].chapters().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["第1章 初遇", "第2章 发展", "番外：回忆", "后记"]);
    }

    #[test]
    fn test_only_excluded_lines_fail() {
        let result = parser().parse_text("版权声明：本书仅供交流\n\n免责声明：与作者无关\n");
        assert!(matches!(result, Err(ManuscriptError::NoSegmentsFound)));
    }

    #[test]
    fn test_every_chapter_has_content() {
        let text = "第一卷\n\n第1章\n内容\n第2章\n\n\n第3章\n  \n第4章\n收尾";
        let volumes = parser().parse_text(text).unwrap();
        for volume in &volumes {
            for chapter in volume.chapters() {
                assert!(!chapter.content().trim().is_empty(), "{}", chapter.title());
            }
        }
        let titles: Vec<&str> = volumes
            .iter()
            .flat_map(|v| v.chapters())
            .map(|c| c.title())
            .collect();
        assert_eq!(titles, vec!["第1章", "第4章"]);
    }

    #[test]
    fn test_exclude_beats_chapter_pattern() {
        let overrides = RuleOverrides {
            exclude_patterns: Some(vec!["^第.*页".to_string()]),
            chapter_patterns: Some(vec!["^第.+".to_string()]),
            ..Default::default()
        };
        let parser = ManuscriptParser::new(&ParserRules::from_overrides(Some(&overrides))).unwrap();
        let volumes = parser.parse_text("第1回\n正文\n第3页\n更多正文").unwrap();

        assert_eq!(volumes[0].chapter_count(), 1);
        assert_eq!(volumes[0].chapters()[0].content(), "正文\n第3页\n更多正文");
    }

    #[test]
    fn test_crlf_lines() {
        let volumes = parser()
            .parse_text("第1章 初遇\r\n内容一\r\n第2章 发展\r\n内容二\r\n")
            .unwrap();
        let chapters = volumes[0].chapters();
        assert_eq!(chapters[0].title(), "第1章 初遇");
        assert_eq!(chapters[0].content(), "内容一");
        assert_eq!(chapters[1].content(), "内容二");
    }

    #[test]
    fn test_leading_chapters_dropped_in_nested_mode() {
        let structure = parser()
            .assemble("第1章 前传\n内容\n第一卷 正篇\n卷首\n第2章 开始\n内容二")
            .unwrap();
        assert!(structure.nested);
        assert_eq!(structure.orphaned, vec!["第1章 前传".to_string()]);
        assert_eq!(structure.volumes.len(), 1);
        assert_eq!(structure.volumes[0].chapter_count(), 2);
    }
}
