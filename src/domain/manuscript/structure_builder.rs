//! 结构组装
//!
//! 片段中只要出现卷标题即采用有卷模式，否则输出单个无标题的扁平容器

use super::{Chapter, ContentType, Segment, Volume};

/// 组装结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    pub volumes: Vec<Volume>,
    /// 是否为有卷模式
    pub nested: bool,
    /// 有卷模式下出现在首个卷标题之前、被丢弃的普通章节标题
    pub orphaned: Vec<String>,
}

pub struct StructureBuilder;

impl StructureBuilder {
    pub fn build(segments: Vec<Segment>) -> Vec<Volume> {
        Self::assemble(segments).volumes
    }

    pub fn assemble(segments: Vec<Segment>) -> Structure {
        if segments.iter().any(Segment::is_volume) {
            Self::nested(segments)
        } else {
            Self::flat(segments)
        }
    }

    fn flat(segments: Vec<Segment>) -> Structure {
        let mut container = Volume::untitled();
        for segment in segments {
            let (title, content, content_type) = segment.into_parts();
            container.push_chapter(Chapter::from_parts(title, content, content_type));
        }

        Structure {
            volumes: vec![container],
            nested: false,
            orphaned: Vec::new(),
        }
    }

    fn nested(segments: Vec<Segment>) -> Structure {
        let mut volumes: Vec<Volume> = Vec::new();
        let mut current: Option<usize> = None;
        let mut orphaned = Vec::new();

        for segment in segments {
            let is_volume = segment.is_volume();
            let (title, content, content_type) = segment.into_parts();

            if is_volume {
                // 卷标题本身也作为该卷的第一章
                let mut volume = Volume::titled(title.clone());
                volume.push_chapter(Chapter::from_parts(title, content, ContentType::Chapter));
                volumes.push(volume);
                current = Some(volumes.len() - 1);
            } else if content_type.is_special() {
                // 特殊内容单独成卷，不改变当前卷
                let mut volume = Volume::titled(title.clone());
                volume.push_chapter(Chapter::from_parts(title, content, content_type));
                volumes.push(volume);
            } else if let Some(index) = current {
                volumes[index].push_chapter(Chapter::from_parts(title, content, content_type));
            } else {
                orphaned.push(title);
            }
        }

        Structure {
            volumes,
            nested: true,
            orphaned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(title: &str, content_type: ContentType, is_volume: bool) -> Segment {
        Segment::new(
            title.to_string(),
            format!("{}的内容", title),
            content_type,
            is_volume,
        )
    }

    #[test]
    fn test_flat_structure_keeps_order() {
        let segments = vec![
            segment("第1章", ContentType::Chapter, false),
            segment("番外：回忆", ContentType::Extra, false),
            segment("第2章", ContentType::Chapter, false),
        ];
        let structure = StructureBuilder::assemble(segments);

        assert!(!structure.nested);
        assert_eq!(structure.volumes.len(), 1);
        let volume = &structure.volumes[0];
        assert!(volume.title().is_none());
        let titles: Vec<&str> = volume.chapters().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["第1章", "番外：回忆", "第2章"]);
        // 扁平模式下特殊内容保持原分类，不单独成卷
        assert_eq!(volume.chapters()[1].content_type(), ContentType::Extra);
    }

    #[test]
    fn test_nested_structure() {
        let segments = vec![
            segment("第一卷", ContentType::Chapter, true),
            segment("第1章", ContentType::Chapter, false),
            segment("番外：回忆", ContentType::Extra, false),
            segment("第2章", ContentType::Chapter, false),
            segment("第二卷", ContentType::Chapter, true),
            segment("第3章", ContentType::Chapter, false),
            segment("后记", ContentType::Postscript, false),
        ];
        let volumes = StructureBuilder::build(segments);

        let titles: Vec<Option<&str>> = volumes.iter().map(|v| v.title()).collect();
        assert_eq!(
            titles,
            vec![Some("第一卷"), Some("番外：回忆"), Some("第二卷"), Some("后记")]
        );
        // 特殊内容不打断当前卷
        let first: Vec<&str> = volumes[0].chapters().iter().map(|c| c.title()).collect();
        assert_eq!(first, vec!["第一卷", "第1章", "第2章"]);
        assert_eq!(volumes[1].chapters().len(), 1);
        assert_eq!(volumes[1].chapters()[0].content_type(), ContentType::Extra);
        assert_eq!(volumes[2].chapter_count(), 2);
        assert_eq!(volumes[3].chapters()[0].content_type(), ContentType::Postscript);
    }

    #[test]
    fn test_volume_segment_becomes_chapter_typed_chapter() {
        // 卷标题即使带有特殊关键词，作为章节时也记为 chapter
        let segments = vec![segment("番外卷", ContentType::Extra, true)];
        let volumes = StructureBuilder::build(segments);

        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].title(), Some("番外卷"));
        assert_eq!(volumes[0].chapters()[0].content_type(), ContentType::Chapter);
        assert_eq!(volumes[0].chapters()[0].content(), "番外卷的内容");
    }

    #[test]
    fn test_chapters_before_first_volume_are_dropped() {
        let segments = vec![
            segment("楔子", ContentType::Extra, false),
            segment("第0章", ContentType::Chapter, false),
            segment("第一卷", ContentType::Chapter, true),
            segment("第1章", ContentType::Chapter, false),
        ];
        let structure = StructureBuilder::assemble(segments);

        assert!(structure.nested);
        assert_eq!(structure.orphaned, vec!["第0章".to_string()]);
        let titles: Vec<Option<&str>> = structure.volumes.iter().map(|v| v.title()).collect();
        assert_eq!(titles, vec![Some("楔子"), Some("第一卷")]);
        assert_eq!(structure.volumes[1].chapter_count(), 2);
    }

    #[test]
    fn test_nested_volumes_all_titled() {
        let segments = vec![
            segment("第一卷", ContentType::Chapter, true),
            segment("公告", ContentType::Notice, false),
        ];
        let volumes = StructureBuilder::build(segments);
        assert!(volumes.iter().all(|v| v.title().is_some()));
    }
}
