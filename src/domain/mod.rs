//! Domain Layer - 领域层
//!
//! 包含:
//! - Manuscript Context: 文稿切分（行分类、片段累加、卷/章组装）
//! - 正文渲染

pub mod manuscript;

mod text_renderer;

pub use text_renderer::render_paragraphs;
