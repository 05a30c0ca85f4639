//! 正文渲染
//!
//! 章节正文 → 段落标记：按行切分，去除首尾空白，丢弃空行，转义后包裹 `<p>`

/// 渲染章节正文为段落 HTML
///
/// 空白正文得到空字符串
pub fn render_paragraphs(content: &str) -> String {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("<p>{}</p>", html_escape::encode_quoted_attribute(line)))
        .collect::<Vec<_>>()
        .join("\n")
}
