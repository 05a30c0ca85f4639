//! 片段累加器
//!
//! 显式状态机：逐行接收原始文本，切分为 (标题, 正文) 片段。
//!
//! 状态:
//! - `NoPendingTitle`: 尚无有效标题，行进入缓冲但不会形成片段
//! - `PendingTitle`: 已有待定标题，缓冲即其正文
//! - 终止: `finish` 消费累加器并冲刷最后一个待定片段

use super::{ContentClassifier, ContentType, LineClassifier, LineKind, ManuscriptError, TitleCleaner};

/// 已定型的片段
///
/// 不变量:
/// - title 为清洗后的非空标题
/// - content 为缓冲行以换行连接并去除首尾空白后的非空文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    title: String,
    content: String,
    content_type: ContentType,
    is_volume: bool,
}

impl Segment {
    pub(crate) fn new(title: String, content: String, content_type: ContentType, is_volume: bool) -> Self {
        Self {
            title,
            content,
            content_type,
            is_volume,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// 标题行是否按卷标题命中
    pub fn is_volume(&self) -> bool {
        self.is_volume
    }

    pub(crate) fn into_parts(self) -> (String, String, ContentType) {
        (self.title, self.content, self.content_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccumulatorState {
    NoPendingTitle,
    PendingTitle { title: String, is_volume: bool },
}

pub struct SegmentAccumulator<'a> {
    classifier: &'a LineClassifier,
    cleaner: &'a TitleCleaner,
    content_classifier: &'a ContentClassifier,
    state: AccumulatorState,
    buffer: Vec<String>,
    segments: Vec<Segment>,
}

impl<'a> SegmentAccumulator<'a> {
    pub fn new(
        classifier: &'a LineClassifier,
        cleaner: &'a TitleCleaner,
        content_classifier: &'a ContentClassifier,
    ) -> Self {
        Self {
            classifier,
            cleaner,
            content_classifier,
            state: AccumulatorState::NoPendingTitle,
            buffer: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// 接收一行物理行（不含换行符，不做预处理）
    pub fn push_line(&mut self, line: &str) {
        let kind = self.classifier.classify(line);
        if !kind.is_title() {
            self.buffer.push(line.to_string());
            return;
        }

        self.flush_pending();

        let title = self.cleaner.clean(line);
        if title.is_empty() {
            // 标题全是装饰噪声：不开启新片段，原行留在缓冲中
            self.buffer.push(line.to_string());
            self.state = AccumulatorState::NoPendingTitle;
            return;
        }

        self.state = AccumulatorState::PendingTitle {
            title,
            is_volume: kind == LineKind::VolumeTitle,
        };
        self.buffer.clear();
    }

    pub fn state(&self) -> &AccumulatorState {
        &self.state
    }

    pub fn buffered_lines(&self) -> &[String] {
        &self.buffer
    }

    /// 目前已定型的片段
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 冲刷最后一个待定片段并返回全部片段；没有任何片段即失败
    pub fn finish(mut self) -> Result<Vec<Segment>, ManuscriptError> {
        self.flush_pending();
        if self.segments.is_empty() {
            return Err(ManuscriptError::NoSegmentsFound);
        }
        Ok(self.segments)
    }

    /// 定型当前待定片段；正文为空的片段整体丢弃
    fn flush_pending(&mut self) {
        let AccumulatorState::PendingTitle { title, is_volume } =
            std::mem::replace(&mut self.state, AccumulatorState::NoPendingTitle)
        else {
            return;
        };

        let content = self.buffer.join("\n").trim().to_string();
        if content.is_empty() {
            return;
        }

        let content_type = self.content_classifier.classify(&title);
        self.segments
            .push(Segment::new(title, content, content_type, is_volume));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manuscript::{ParserRules, RuleOverrides};

    struct Fixture {
        classifier: LineClassifier,
        cleaner: TitleCleaner,
        content: ContentClassifier,
    }

    impl Fixture {
        fn new(rules: &ParserRules) -> Self {
            Self {
                classifier: LineClassifier::new(rules).unwrap(),
                cleaner: TitleCleaner::new(rules).unwrap(),
                content: ContentClassifier::new(rules),
            }
        }

        fn accumulator(&self) -> SegmentAccumulator<'_> {
            SegmentAccumulator::new(&self.classifier, &self.cleaner, &self.content)
        }
    }

    fn run(fixture: &Fixture, text: &str) -> Result<Vec<Segment>, ManuscriptError> {
        let mut acc = fixture.accumulator();
        for line in text.split('\n') {
            acc.push_line(line);
        }
        acc.finish()
    }

    #[test]
    fn test_initial_state() {
        let fixture = Fixture::new(&ParserRules::default());
        let acc = fixture.accumulator();
        assert_eq!(acc.state(), &AccumulatorState::NoPendingTitle);
        assert!(acc.buffered_lines().is_empty());
        assert!(acc.segments().is_empty());
    }

    #[test]
    fn test_title_starts_pending_segment() {
        let fixture = Fixture::new(&ParserRules::default());
        let mut acc = fixture.accumulator();
        acc.push_line("一些杂项文字");
        acc.push_line("第1章 初遇【求票】");

        assert_eq!(
            acc.state(),
            &AccumulatorState::PendingTitle {
                title: "第1章 初遇".to_string(),
                is_volume: false
            }
        );
        // 进入新片段时缓冲被清空，标题前的内容不会成为片段
        assert!(acc.buffered_lines().is_empty());

        acc.push_line("内容一");
        assert_eq!(acc.buffered_lines(), &["内容一".to_string()]);
    }

    #[test]
    fn test_segments_split_and_trailing_flush() {
        let fixture = Fixture::new(&ParserRules::default());
        let segments = run(&fixture, "第一卷 相遇\n\n正文\n\n第1章 初遇\n\n内容一\n").unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].title(), "第一卷 相遇");
        assert_eq!(segments[0].content(), "正文");
        assert!(segments[0].is_volume());
        assert_eq!(segments[1].title(), "第1章 初遇");
        assert_eq!(segments[1].content(), "内容一");
        assert!(!segments[1].is_volume());
    }

    #[test]
    fn test_body_lines_keep_raw_text_inside_content() {
        let fixture = Fixture::new(&ParserRules::default());
        let segments = run(&fixture, "第1章\n  第一段\n\n  第二段  \n").unwrap();
        assert_eq!(segments[0].content(), "第一段\n\n  第二段");
    }

    #[test]
    fn test_empty_body_segment_is_discarded() {
        let fixture = Fixture::new(&ParserRules::default());
        let segments = run(&fixture, "第1章\n\n   \n第2章\n内容二").unwrap();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].title(), "第2章");
    }

    #[test]
    fn test_excluded_line_is_body_even_when_title_shaped() {
        let overrides = RuleOverrides {
            chapter_patterns: Some(vec!["^第.+章".to_string(), "^声明".to_string()]),
            ..Default::default()
        };
        let fixture = Fixture::new(&ParserRules::from_overrides(Some(&overrides)));
        let segments = run(&fixture, "第1章 开始\n声明：转载请注明\n正文").unwrap();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content(), "声明：转载请注明\n正文");
    }

    #[test]
    fn test_noise_only_title_does_not_open_segment() {
        let overrides = RuleOverrides {
            chapter_patterns: Some(vec!["^第.+章".to_string(), "^【".to_string()]),
            ..Default::default()
        };
        let fixture = Fixture::new(&ParserRules::from_overrides(Some(&overrides)));
        let mut acc = fixture.accumulator();

        acc.push_line("第1章 开始");
        acc.push_line("内容一");
        acc.push_line("【】");

        // 前一片段已定型，噪声行回落到缓冲，且不再有待定标题
        assert_eq!(acc.segments().len(), 1);
        assert_eq!(acc.segments()[0].content(), "内容一");
        assert_eq!(acc.state(), &AccumulatorState::NoPendingTitle);
        assert_eq!(
            acc.buffered_lines(),
            &["内容一".to_string(), "【】".to_string()]
        );

        acc.push_line("无主的正文");
        acc.push_line("第2章 继续");
        acc.push_line("内容二");
        let segments = acc.finish().unwrap();

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].title(), "第2章 继续");
        assert_eq!(segments[1].content(), "内容二");
        assert!(segments.iter().all(|s| !s.title().is_empty()));
    }

    #[test]
    fn test_noise_only_title_at_end_emits_nothing_more() {
        let overrides = RuleOverrides {
            chapter_patterns: Some(vec!["^第.+章".to_string(), "^【".to_string()]),
            ..Default::default()
        };
        let fixture = Fixture::new(&ParserRules::from_overrides(Some(&overrides)));
        let segments = run(&fixture, "第1章\n内容\n【】\n尾巴").unwrap();

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].content(), "内容");
    }

    #[test]
    fn test_content_type_from_cleaned_title() {
        let fixture = Fixture::new(&ParserRules::default());
        let segments = run(&fixture, "番外：回忆（完）\n内容\n后记\n感谢").unwrap();

        assert_eq!(segments[0].title(), "番外：回忆");
        assert_eq!(segments[0].content_type(), ContentType::Extra);
        assert_eq!(segments[1].content_type(), ContentType::Postscript);
    }

    #[test]
    fn test_no_segments_is_error() {
        let fixture = Fixture::new(&ParserRules::default());
        assert!(matches!(run(&fixture, ""), Err(ManuscriptError::NoSegmentsFound)));
        assert!(matches!(
            run(&fixture, "只是一些正文\n没有任何标题"),
            Err(ManuscriptError::NoSegmentsFound)
        ));
        assert!(matches!(
            run(&fixture, "第1章\n\n第2章\n"),
            Err(ManuscriptError::NoSegmentsFound)
        ));
    }
}
