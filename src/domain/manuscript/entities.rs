//! Manuscript Context - Entities

use serde::{Deserialize, Serialize};

/// 内容类型
///
/// 由清洗后的标题经关键词/单字查找得出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// 普通章节
    #[default]
    Chapter,
    /// 番外
    Extra,
    /// 后记
    Postscript,
    /// 公告
    Notice,
}

impl ContentType {
    /// 特殊内容在有卷模式下单独成卷
    pub fn is_special(&self) -> bool {
        !matches!(self, ContentType::Chapter)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Chapter => "chapter",
            ContentType::Extra => "extra",
            ContentType::Postscript => "postscript",
            ContentType::Notice => "notice",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chapter" => Ok(ContentType::Chapter),
            "extra" => Ok(ContentType::Extra),
            "postscript" => Ok(ContentType::Postscript),
            "notice" => Ok(ContentType::Notice),
            _ => Err(format!("unknown content type: {}", s)),
        }
    }
}

/// 章节 - 叶子内容单元
///
/// 不变量:
/// - title 非空
/// - content 去除首尾空白后非空
/// - 构造后除 order 外不可修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    title: String,
    content: String,
    content_type: ContentType,
    order: Option<u32>,
}

impl Chapter {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        content_type: ContentType,
    ) -> Result<Self, &'static str> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() {
            return Err("章节标题不能为空");
        }
        if content.trim().is_empty() {
            return Err("章节内容不能为空");
        }
        Ok(Self::from_parts(title, content, content_type))
    }

    /// 调用方已保证 title/content 非空（分段器产出的片段）
    pub(crate) fn from_parts(title: String, content: String, content_type: ContentType) -> Self {
        Self {
            title,
            content,
            content_type,
            order: None,
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

    pub fn order(&self) -> Option<u32> {
        self.order
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}

/// 卷 - 章节容器
///
/// title 为 None 表示无卷模式下的扁平容器，不是真实的卷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    title: Option<String>,
    chapters: Vec<Chapter>,
    order: Option<u32>,
}

impl Volume {
    /// 有标题的卷（真实卷或特殊内容卷）
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            chapters: Vec::new(),
            order: None,
        }
    }

    /// 扁平容器
    pub fn untitled() -> Self {
        Self {
            title: None,
            chapters: Vec::new(),
            order: None,
        }
    }

    pub(crate) fn push_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn order(&self) -> Option<u32> {
        self.order
    }

    pub fn is_flat_container(&self) -> bool {
        self.title.is_none()
    }
}

/// 为消费方分配阅读顺序
///
/// 卷按输出顺序编号（从 1 开始），章节在全书范围内连续编号。
/// 解析本身从不设置 order。
pub fn assign_reading_order(volumes: &mut [Volume]) {
    let mut chapter_order = 0u32;
    for (index, volume) in volumes.iter_mut().enumerate() {
        volume.order = Some(index as u32 + 1);
        for chapter in volume.chapters.iter_mut() {
            chapter_order += 1;
            chapter.order = Some(chapter_order);
        }
    }
}
